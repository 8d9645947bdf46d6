//! CNPJ (Cadastro Nacional da Pessoa Jurídica): 12 base digits followed by 2 check digits.

use crate::checksum::{all_identical, check_pair};

pub const CNPJ_LEN: usize = 14;
const BASE_LEN: usize = 12;
const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validates a CNPJ with the modulo-11 check digits.
///
/// Only the mask characters `.`, `-` and `/` plus surrounding whitespace are removed.
/// Unlike [`crate::cpf::validate_cpf`], any other stray character (letters, inner
/// spaces) stays in place and makes the input invalid.
/// Fourteen identical digits are rejected even though they satisfy the checksum.
#[must_use]
pub fn validate_cnpj(input: &str) -> bool {
    let stripped: String = input.chars().filter(|c| !matches!(c, '.' | '-' | '/')).collect();
    let stripped = stripped.trim();

    if stripped.chars().count() != CNPJ_LEN {
        return false;
    }

    let chars: Vec<char> = stripped.chars().collect();
    if all_identical(&chars) {
        return false;
    }

    let Some(digits) = chars
        .iter()
        .map(|c| c.to_digit(10).and_then(|d| u8::try_from(d).ok()))
        .collect::<Option<Vec<u8>>>()
    else {
        return false;
    };

    cnpj_check_digits(&digits[..BASE_LEN]).is_some_and(|check| digits[BASE_LEN..] == check)
}

/// Computes the two check digits for a 12-digit CNPJ base.
///
/// Returns `None` unless `base` holds exactly 12 values in `0..=9`.
///
/// ```rust
/// use cadastro_documents::cnpj::cnpj_check_digits;
///
/// assert_eq!(cnpj_check_digits(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]), Some([8, 1]));
/// ```
#[must_use]
pub fn cnpj_check_digits(base: &[u8]) -> Option<[u8; 2]> {
    check_pair::<BASE_LEN>(base, &FIRST_WEIGHTS, &SECOND_WEIGHTS)
}
