//! CPF (Cadastro de Pessoas Físicas): 9 base digits followed by 2 check digits.

use crate::checksum::{all_identical, ascii_digits, check_pair};

pub const CPF_LEN: usize = 11;
const BASE_LEN: usize = 9;
const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Validates a CPF with the modulo-11 check digits.
///
/// Every character that is not an ASCII digit is dropped first, so punctuated
/// (`529.982.247-25`), bare (`52998224725`) and noisy inputs are all accepted as long
/// as exactly 11 digits remain.
///
/// Repeated-digit sequences such as `111.111.111-11` satisfy the checksum and are
/// accepted here; use [`validate_cpf_strict`] to reject them.
#[must_use]
pub fn validate_cpf(input: &str) -> bool {
    let digits = ascii_digits(input);
    if digits.len() != CPF_LEN {
        return false;
    }

    cpf_check_digits(&digits[..BASE_LEN]).is_some_and(|check| digits[BASE_LEN..] == check)
}

/// [`validate_cpf`] plus rejection of CPFs made of a single repeated digit.
#[must_use]
pub fn validate_cpf_strict(input: &str) -> bool {
    validate_cpf(input) && !all_identical(&ascii_digits(input))
}

/// Computes the two check digits for a 9-digit CPF base.
///
/// Returns `None` unless `base` holds exactly 9 values in `0..=9`.
///
/// ```rust
/// use cadastro_documents::cpf::cpf_check_digits;
///
/// assert_eq!(cpf_check_digits(&[5, 2, 9, 9, 8, 2, 2, 4, 7]), Some([2, 5]));
/// ```
#[must_use]
pub fn cpf_check_digits(base: &[u8]) -> Option<[u8; 2]> {
    check_pair::<BASE_LEN>(base, &FIRST_WEIGHTS, &SECOND_WEIGHTS)
}
