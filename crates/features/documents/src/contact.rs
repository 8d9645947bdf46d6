//! Contact-field shape checks: e-mail syntax and CEP (postal code).

use crate::checksum::ascii_digits;
use regex::Regex;
use std::sync::LazyLock;

pub const CEP_LEN: usize = 8;

/// Longest address accepted by SMTP (RFC 5321 path limit minus the brackets).
const EMAIL_MAX_LEN: usize = 254;

/// `dot-atom@domain`, where the domain is one or more DNS labels.
/// The local part also takes UTF-8 letters and digits (RFC 6531), so `josé@exemplo.com.br` passes.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+(?:\.[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+)*",
        r"@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?",
        r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    ))
    .expect("e-mail pattern is a valid regex")
});

/// Syntax-only e-mail check (no DNS or MX lookup).
///
/// Empty input and anything the address grammar rejects yield `false`.
#[must_use]
pub fn validate_email(input: &str) -> bool {
    !input.is_empty() && input.len() <= EMAIL_MAX_LEN && EMAIL_RE.is_match(input)
}

/// A CEP is valid when exactly 8 digits remain after dropping everything else.
#[must_use]
pub fn validate_cep(input: &str) -> bool {
    ascii_digits(input).len() == CEP_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_common_addresses() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("first.last+tag@sub.example.com.br"));
        assert!(validate_email("admin@localhost"));
    }

    #[test]
    fn email_accepts_utf8_local_part() {
        assert!(validate_email("josé@exemplo.com.br"));
        assert!(validate_email("joão.conceição@correio.com.br"));
        assert!(!validate_email("josé @exemplo.com.br"));
        assert!(!validate_email(".josé@exemplo.com.br"));
    }

    #[test]
    fn email_rejects_malformed_input() {
        assert!(!validate_email(""));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user@"));
        assert!(!validate_email("user@@example.com"));
        assert!(!validate_email("user name@example.com"));
        assert!(!validate_email(".user@example.com"));
        assert!(!validate_email("user..name@example.com"));
        assert!(!validate_email("user@-example.com"));
    }

    #[test]
    fn email_rejects_overlong_input() {
        let local = "a".repeat(64);
        let domain = format!("{}.com", "b".repeat(250));
        assert!(!validate_email(&format!("{local}@{domain}")));
    }

    #[test]
    fn cep_counts_digits_only() {
        assert!(validate_cep("12345-678"));
        assert!(validate_cep("12345678"));
        assert!(validate_cep("12.345-678"));
        assert!(!validate_cep("1234"));
        assert!(!validate_cep(""));
        assert!(!validate_cep("12345-6789"));
    }
}
