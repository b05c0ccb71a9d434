//! Fixed-width numeric field formatting.
//!
//! Bank layouts mandate exact widths per field; a value that does not fit is
//! an error, never a silent truncation of high-order digits.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{BoletoError, Result};

/// Render `value` left-padded with zeros to exactly `width` digits.
pub fn zero_padded(value: u64, width: usize) -> Result<String> {
    let digits = value.to_string();
    if digits.len() > width {
        return Err(BoletoError::FieldOverflow { value, width });
    }
    Ok(format!("{digits:0>width$}"))
}

/// Render a monetary amount as `width` digits with two implied decimals.
///
/// The amount is scaled by 100 and rounded half-up to whole cents before
/// padding, so `1000.00` becomes `0000100000` at width 10.
pub fn amount_digits(amount: Decimal, width: usize) -> Result<String> {
    if amount.is_sign_negative() {
        return Err(BoletoError::NegativeAmount(amount));
    }
    let cents = (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let cents = cents
        .to_u64()
        .ok_or(BoletoError::FieldOverflow { value: u64::MAX, width })?;
    zero_padded(cents, width)
}
