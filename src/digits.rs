//! The two FEBRABAN check-digit algorithms shared by every bank layout.

use crate::error::{BoletoError, Result};

/// Modulo-10 check digit used by the typeable-line blocks and by the
/// intermediate agency/account digits some banks embed in the free field.
///
/// Walks the digits right to left, multiplying alternately by 2 and 1
/// (starting with 2 on the rightmost digit). Products of two digits
/// contribute the sum of their own digits. The check digit completes the
/// total to the next multiple of ten.
pub fn mod10_check_digit(digits: &str) -> Result<u8> {
    let values = digit_values(digits)?;
    let mut total = 0u32;
    for (i, value) in values.iter().rev().enumerate() {
        let multiplier = if i % 2 == 0 { 2 } else { 1 };
        let product = value * multiplier;
        total += product / 10 + product % 10;
    }
    Ok(((10 - total % 10) % 10) as u8)
}

/// Modulo-11 check digit protecting the whole barcode.
///
/// Multipliers cycle 2..=9 walking right to left, and absolute index 4 of
/// the input is excluded from the walk: that is the slot the check digit
/// itself will occupy once inserted, so callers pass the 43 characters
/// surrounding the gap. Remainders 0 and 10 both map to a check digit of 1,
/// which keeps the result in `1..=9`.
pub fn mod11_check_digit(digits: &str) -> Result<u8> {
    let values = digit_values(digits)?;
    let mut total = 0u32;
    let mut multiplier = 2u32;
    let mut i = values.len() as isize - 1;
    while i >= 0 {
        if i == 4 {
            i -= 1;
            if i < 0 {
                break;
            }
        }
        if multiplier == 10 {
            multiplier = 2;
        }
        total += values[i as usize] * multiplier;
        multiplier += 1;
        i -= 1;
    }
    let remainder = (total * 10) % 11;
    Ok(match remainder {
        0 | 10 => 1,
        other => other as u8,
    })
}

/// Convert a digit string into numeric values, rejecting anything that is
/// not an ASCII decimal digit.
fn digit_values(digits: &str) -> Result<Vec<u32>> {
    if digits.is_empty() {
        return Err(BoletoError::EmptyDigits);
    }
    digits
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            ch.to_digit(10)
                .ok_or(BoletoError::NonDigit { found: ch, position })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod10_known_vectors() {
        assert_eq!(mod10_check_digit("0").unwrap(), 0);
        assert_eq!(mod10_check_digit("9").unwrap(), 1);
        assert_eq!(mod10_check_digit("29004590").unwrap(), 5);
        assert_eq!(mod10_check_digit("123456789").unwrap(), 7);
        // Itaú agency+account+wallet+our-number grouping.
        assert_eq!(mod10_check_digit("12345678917512345678").unwrap(), 5);
    }

    #[test]
    fn mod10_rejects_non_digits() {
        assert_eq!(
            mod10_check_digit("12a4"),
            Err(BoletoError::NonDigit {
                found: 'a',
                position: 2
            })
        );
        assert_eq!(mod10_check_digit(""), Err(BoletoError::EmptyDigits));
    }

    #[test]
    fn mod11_known_barcode_body() {
        // Itaú body for the 1000.00 / 2024-01-01 reference slip.
        let body = "3419958200001000001751234567851234567897000";
        assert_eq!(body.len(), 43);
        assert_eq!(mod11_check_digit(body).unwrap(), 1);
    }

    #[test]
    fn mod11_maps_remainders_zero_and_ten_to_one() {
        // Weighted sums of these bodies leave remainders 10 and 0.
        let rem_ten = "0681241586834497869073662585178128657070499";
        let rem_zero = "9957903289218401107043419254122482447577104";
        assert_eq!(mod11_check_digit(rem_ten).unwrap(), 1);
        assert_eq!(mod11_check_digit(rem_zero).unwrap(), 1);
    }

    #[test]
    fn mod11_result_range() {
        let dv = mod11_check_digit("0339974300002195899123456705666124578000102").unwrap();
        assert!((1..=9).contains(&dv));
    }

    #[test]
    fn mod11_rejects_non_digits() {
        assert!(matches!(
            mod11_check_digit("034x"),
            Err(BoletoError::NonDigit { found: 'x', .. })
        ));
    }
}
