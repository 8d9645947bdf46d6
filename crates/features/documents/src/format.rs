//! Display masks for documents typed into forms.

use crate::checksum::ascii_digits;
use crate::cnpj::CNPJ_LEN;
use crate::contact::CEP_LEN;
use crate::cpf::CPF_LEN;

/// Applies `000.000.000-00` when the input carries exactly 11 digits.
#[must_use]
pub fn format_cpf(input: &str) -> Option<String> {
    mask(input, CPF_LEN, &[(3, '.'), (6, '.'), (9, '-')])
}

/// Applies `00.000.000/0000-00` when the input carries exactly 14 digits.
#[must_use]
pub fn format_cnpj(input: &str) -> Option<String> {
    mask(input, CNPJ_LEN, &[(2, '.'), (5, '.'), (8, '/'), (12, '-')])
}

/// Applies `00000-000` when the input carries exactly 8 digits.
#[must_use]
pub fn format_cep(input: &str) -> Option<String> {
    mask(input, CEP_LEN, &[(5, '-')])
}

/// Inserts each separator before the digit at its index.
fn mask(input: &str, len: usize, separators: &[(usize, char)]) -> Option<String> {
    let digits = ascii_digits(input);
    if digits.len() != len {
        return None;
    }

    let mut out = String::with_capacity(len + separators.len());
    let mut next = separators.iter().peekable();
    for (idx, digit) in digits.into_iter().enumerate() {
        if let Some((_, sep)) = next.next_if(|(at, _)| *at == idx) {
            out.push(*sep);
        }
        out.push(char::from(b'0' + digit));
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_bare_digits() {
        assert_eq!(format_cpf("52998224725").as_deref(), Some("529.982.247-25"));
        assert_eq!(format_cnpj("11222333000181").as_deref(), Some("11.222.333/0001-81"));
        assert_eq!(format_cep("12345678").as_deref(), Some("12345-678"));
    }

    #[test]
    fn remasks_already_formatted_input() {
        assert_eq!(format_cpf("529.982.247-25").as_deref(), Some("529.982.247-25"));
        assert_eq!(format_cep("12.345-678").as_deref(), Some("12345-678"));
    }

    #[test]
    fn wrong_digit_count_is_not_masked() {
        assert!(format_cpf("5299822472").is_none());
        assert!(format_cnpj("").is_none());
        assert!(format_cep("123456789").is_none());
    }
}
