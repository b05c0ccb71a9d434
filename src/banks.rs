//! Per-bank barcode layout strategies and the registry that resolves them.
//!
//! Every bank shares the national frame (code, currency, check digit,
//! maturity factor, amount) and differs only in how it fills the 25-digit
//! free field. Adding a bank means adding a variant here together with its
//! free-field function; the shared assembly and checksum code never changes.

use std::fmt;

use crate::barcode::Barcode;
use crate::boleto::Boleto;
use crate::digits::{mod10_check_digit, mod11_check_digit};
use crate::error::{BoletoError, Result};
use crate::fields::{amount_digits, zero_padded};
use crate::maturity::maturity_factor_digits;

/// Width of the amount field in every supported layout.
const AMOUNT_WIDTH: usize = 10;

/// The closed set of supported banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bank {
    Itau,
    Santander,
}

impl Bank {
    /// All supported banks, in registry-code order.
    pub fn all() -> &'static [Bank] {
        &[Bank::Santander, Bank::Itau]
    }

    /// Resolve a bank from its 3-digit registry code.
    pub fn from_registry_code(code: &str) -> Result<Bank> {
        Self::all()
            .iter()
            .copied()
            .find(|bank| bank.registry_code() == code)
            .ok_or_else(|| BoletoError::UnknownBank(code.to_owned()))
    }

    /// Three-digit code identifying the bank in the national registry.
    /// Doubles as the first barcode field and as the display/logo lookup key.
    pub fn registry_code(&self) -> &'static str {
        match self {
            Bank::Itau => "341",
            Bank::Santander => "033",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Bank::Itau => "Banco Itaú",
            Bank::Santander => "Banco Santander",
        }
    }

    /// Assemble the 44-digit barcode for a slip using this bank's layout.
    pub fn encode_barcode(&self, boleto: &Boleto) -> Result<Barcode> {
        let free_field = match self {
            Bank::Itau => itau_free_field(boleto)?,
            Bank::Santander => santander_free_field(boleto)?,
        };
        let mut body = String::with_capacity(44);
        body.push_str(self.registry_code());
        body.push_str(&boleto.currency_code().to_string());
        body.push_str(&maturity_factor_digits(boleto.due_date())?);
        body.push_str(&amount_digits(boleto.amount(), AMOUNT_WIDTH)?);
        body.push_str(&free_field);
        if body.len() != 43 {
            // One short of the final barcode: the check digit is missing.
            return Err(BoletoError::AssembledLengthMismatch { len: body.len() + 1 });
        }
        let check_digit = mod11_check_digit(&body)?;
        body.insert(4, (b'0' + check_digit) as char);
        Barcode::from_assembled(body)
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.registry_code())
    }
}

/// Itaú free field: wallet(3), our-number(8), a modulo-10 digit over
/// agency+account+wallet+our-number, agency(4), account(5), a second
/// modulo-10 digit over agency+account alone, then three zeros. The two
/// sub-checks over different groupings are Itaú policy, not a generic rule.
fn itau_free_field(boleto: &Boleto) -> Result<String> {
    let issuer = boleto.issuer();
    let wallet = zero_padded(u64::from(issuer.wallet), 3)?;
    let our_number = zero_padded(issuer.our_number, 8)?;
    let agency = zero_padded(u64::from(issuer.agency), 4)?;
    let account = zero_padded(issuer.account, 5)?;
    let wide_check = mod10_check_digit(&format!("{agency}{account}{wallet}{our_number}"))?;
    let narrow_check = mod10_check_digit(&format!("{agency}{account}"))?;
    Ok(format!(
        "{wallet}{our_number}{wide_check}{agency}{account}{narrow_check}000"
    ))
}

/// Santander free field: a fixed "9", the agency-supplied code(7),
/// our-number(13), a fixed "0", then wallet(3).
fn santander_free_field(boleto: &Boleto) -> Result<String> {
    let issuer = boleto.issuer();
    let agency_code = zero_padded(u64::from(issuer.agency_code), 7)?;
    let our_number = zero_padded(issuer.our_number, 13)?;
    let wallet = zero_padded(u64::from(issuer.wallet), 3)?;
    Ok(format!("9{agency_code}{our_number}0{wallet}"))
}
