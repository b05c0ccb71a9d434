//! Due-date encoding as the 4-digit "maturity factor" carried in the barcode.

use chrono::{Duration, NaiveDate};

use crate::error::{BoletoError, Result};

/// Base date of the maturity factor: 1997-10-07 encodes as factor 0.
pub const MATURITY_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1997, 10, 7) {
    Some(date) => date,
    None => panic!("maturity epoch is a valid calendar date"),
};

/// Largest factor a 4-digit field can carry (epoch + 9999 days = 2025-02-21).
pub const MAX_MATURITY_FACTOR: u32 = 9999;

/// Day count from [`MATURITY_EPOCH`] to the due date.
///
/// The format has no representation for dates outside the window, so both
/// pre-epoch dates and offsets above 9999 days are rejected rather than
/// wrapped or truncated.
pub fn maturity_factor(due_date: NaiveDate) -> Result<u32> {
    let days = due_date.signed_duration_since(MATURITY_EPOCH).num_days();
    if days < 0 || days > MAX_MATURITY_FACTOR as i64 {
        return Err(BoletoError::DateOutOfRange { date: due_date });
    }
    Ok(days as u32)
}

/// Maturity factor rendered as the 4 zero-padded digits placed at barcode
/// positions 5..=8.
pub fn maturity_factor_digits(due_date: NaiveDate) -> Result<String> {
    Ok(format!("{:04}", maturity_factor(due_date)?))
}

/// Inverse of [`maturity_factor`], used when inspecting existing barcodes.
pub fn due_date_for_factor(factor: u32) -> Result<NaiveDate> {
    if factor > MAX_MATURITY_FACTOR {
        return Err(BoletoError::FactorOutOfRange(factor));
    }
    Ok(MATURITY_EPOCH + Duration::days(factor as i64))
}
