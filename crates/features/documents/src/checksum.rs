//! Modulo-11 check digit arithmetic shared by CPF and CNPJ.

/// Keeps ASCII digits only, as numeric values.
pub(crate) fn ascii_digits(input: &str) -> Vec<u8> {
    input.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0').collect()
}

/// Weighted sum of `digits`, reduced with the modulo-11 rule:
/// a remainder below 2 yields 0, anything else yields `11 - remainder`.
pub(crate) fn mod11_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits.iter().zip(weights).map(|(&d, &w)| u32::from(d) * w).sum();
    match sum % 11 {
        0 | 1 => 0,
        rest => u8::try_from(11 - rest).unwrap_or_default(),
    }
}

/// Computes both check digits for `prefix`, the second one over `prefix` + first digit.
pub(crate) fn check_pair<const N: usize>(
    prefix: &[u8],
    first_weights: &[u32],
    second_weights: &[u32],
) -> Option<[u8; 2]> {
    let prefix: &[u8; N] = prefix.try_into().ok()?;
    if prefix.iter().any(|&d| d > 9) {
        return None;
    }

    let first = mod11_digit(prefix, first_weights);
    let mut extended = prefix.to_vec();
    extended.push(first);
    let second = mod11_digit(&extended, second_weights);

    Some([first, second])
}

pub(crate) fn all_identical<T: PartialEq>(items: &[T]) -> bool {
    items.windows(2).all(|pair| pair[0] == pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_everything_but_ascii_digits() {
        assert_eq!(ascii_digits("52a9.9-8²2"), vec![5, 2, 9, 9, 8, 2]);
        assert!(ascii_digits("").is_empty());
    }

    #[test]
    fn low_remainders_map_to_zero() {
        // 11 % 11 == 0 and 12 % 11 == 1
        assert_eq!(mod11_digit(&[1], &[11]), 0);
        assert_eq!(mod11_digit(&[1], &[12]), 0);
        // 13 % 11 == 2 -> 9
        assert_eq!(mod11_digit(&[1], &[13]), 9);
    }

    #[test]
    fn check_pair_rejects_wrong_prefix_length() {
        assert!(check_pair::<3>(&[1, 2], &[3, 2, 1], &[4, 3, 2, 1]).is_none());
        assert!(check_pair::<2>(&[1, 10], &[2, 1], &[3, 2, 1]).is_none());
    }
}
