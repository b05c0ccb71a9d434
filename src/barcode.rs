//! The validated 44-digit barcode value and its national field layout.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::digits::mod11_check_digit;
use crate::error::{BoletoError, Result};
use crate::maturity::MATURITY_EPOCH;

/// Every boleto barcode is exactly this many ASCII decimal digits.
pub const BARCODE_LEN: usize = 44;

/// A 44-digit boleto barcode.
///
/// The national layout is fixed: positions 0..=2 carry the bank registry
/// code, 3 the currency species code, 4 the modulo-11 check digit, 5..=8 the
/// maturity factor, 9..=18 the amount with two implied decimals, and 19..=43
/// the bank-specific free field. Construction guarantees length and digit
/// content, so the accessors can slice without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode(String);

impl Barcode {
    /// Validate caller-supplied digits as a barcode.
    pub fn parse(digits: &str) -> Result<Self> {
        if digits.chars().count() != BARCODE_LEN {
            return Err(BoletoError::InvalidBarcodeLength {
                got: digits.chars().count(),
            });
        }
        for (position, ch) in digits.chars().enumerate() {
            if !ch.is_ascii_digit() {
                return Err(BoletoError::NonDigit { found: ch, position });
            }
        }
        Ok(Self(digits.to_owned()))
    }

    /// Wrap digits assembled by a bank layout.
    ///
    /// A length mismatch here means the layout's field-width table is
    /// defective, which is reported as such rather than as an input error.
    pub(crate) fn from_assembled(digits: String) -> Result<Self> {
        if digits.len() != BARCODE_LEN {
            return Err(BoletoError::AssembledLengthMismatch { len: digits.len() });
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Three-digit bank registry code.
    pub fn bank_code(&self) -> &str {
        &self.0[0..3]
    }

    /// Single-digit currency species code ("9" for BRL).
    pub fn currency_code(&self) -> &str {
        &self.0[3..4]
    }

    /// The modulo-11 check digit at position 4.
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[4] - b'0'
    }

    /// The 4 maturity-factor digits.
    pub fn maturity_factor(&self) -> &str {
        &self.0[5..9]
    }

    /// The 10 amount digits (two implied decimals).
    pub fn amount_digits(&self) -> &str {
        &self.0[9..19]
    }

    /// The 25-digit bank-specific free field.
    pub fn free_field(&self) -> &str {
        &self.0[19..44]
    }

    /// Due date decoded from the maturity factor.
    pub fn due_date(&self) -> NaiveDate {
        MATURITY_EPOCH + Duration::days(self.digits_value(5..9) as i64)
    }

    /// Amount decoded from the 10 amount digits.
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.digits_value(9..19) as i64, 2)
    }

    /// Recompute the modulo-11 digit over the 43 surrounding characters and
    /// compare it with position 4.
    pub fn has_valid_check_digit(&self) -> bool {
        let mut body = String::with_capacity(BARCODE_LEN - 1);
        body.push_str(&self.0[..4]);
        body.push_str(&self.0[5..]);
        mod11_check_digit(&body)
            .map(|dv| dv == self.check_digit())
            .unwrap_or(false)
    }

    fn digits_value(&self, range: std::ops::Range<usize>) -> u64 {
        self.0.as_bytes()[range]
            .iter()
            .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'))
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Barcode {
    type Err = BoletoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
