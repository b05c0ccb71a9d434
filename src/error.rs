use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, BoletoError>;

/// Errors raised while validating inputs or assembling a barcode.
///
/// Every variant is fatal for the current encoding request: the engine stops
/// at the first violation and never returns a partially built barcode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoletoError {
    /// A checksum or parsing routine received something other than `0..=9`.
    #[error("expected a decimal digit at position {position}, found {found:?}")]
    NonDigit { found: char, position: usize },

    /// A checksum routine received an empty string.
    #[error("digit string must not be empty")]
    EmptyDigits,

    /// A caller-supplied barcode string is not exactly 44 characters.
    #[error("a barcode must contain exactly 44 digits (got {got})")]
    InvalidBarcodeLength { got: usize },

    /// A numeric value does not fit the fixed width its field mandates.
    #[error("value {value} does not fit in a {width}-digit field")]
    FieldOverflow { value: u64, width: usize },

    /// Monetary amounts are unsigned in the barcode format.
    #[error("amount must not be negative (got {0})")]
    NegativeAmount(Decimal),

    /// The due date has no 4-digit maturity factor (window is the factor
    /// epoch 1997-10-07 through 9999 days after it).
    #[error("due date {date} is outside the encodable window 1997-10-07..=2025-02-21")]
    DateOutOfRange { date: NaiveDate },

    /// A maturity factor decoded from external input exceeds 9999.
    #[error("maturity factor {0} exceeds the 4-digit maximum 9999")]
    FactorOutOfRange(u32),

    /// An assembled barcode came out with the wrong length. This signals a
    /// defect in a bank's field-width table, not bad user data.
    #[error("assembled barcode has {len} digits instead of 44; bank layout table is inconsistent")]
    AssembledLengthMismatch { len: usize },

    /// A required slip field was never supplied to the builder.
    #[error("{0} is required to build a boleto")]
    MissingField(&'static str),

    /// A slip list field exceeds its documented limit.
    #[error("at most {limit} {what} allowed (got {got})")]
    TooManyEntries {
        what: &'static str,
        limit: usize,
        got: usize,
    },

    /// No supported bank carries the given registry code.
    #[error("unknown bank registry code '{0}'")]
    UnknownBank(String),
}
