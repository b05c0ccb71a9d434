//! Core library for FEBRABAN boleto barcode and typeable-line generation.

mod banks;
mod barcode;
mod boleto;
mod digits;
mod error;
mod fields;
mod maturity;
mod typeable;

pub use banks::Bank;
pub use barcode::{BARCODE_LEN, Barcode};
pub use boleto::{
    Boleto, BoletoBuilder, Issuer, MAX_DESCRIPTIONS, MAX_INSTRUCTIONS, MAX_PAYMENT_LOCATIONS,
};
pub use digits::{mod10_check_digit, mod11_check_digit};
pub use error::{BoletoError, Result};
pub use fields::{amount_digits, zero_padded};
pub use maturity::{
    MATURITY_EPOCH, MAX_MATURITY_FACTOR, due_date_for_factor, maturity_factor,
    maturity_factor_digits,
};
pub use typeable::TypeableLine;

/// Encodes a slip through the given bank's layout and derives the matching
/// typeable line from the resulting barcode.
pub fn encode(bank: Bank, boleto: &Boleto) -> Result<(Barcode, TypeableLine)> {
    let barcode = bank.encode_barcode(boleto)?;
    let line = TypeableLine::from_barcode(&barcode)?;
    Ok((barcode, line))
}
