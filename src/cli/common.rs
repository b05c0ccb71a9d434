//! Shared slip-description parsing for CLI commands.

use anyhow::{Context, Result};
use boleto::{Bank, Boleto, Issuer};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// JSON shape accepted by `boleto encode`.
///
/// ```json
/// {
///   "bank": "341",
///   "amount": "1000.00",
///   "due_date": "2024-01-01",
///   "issuer": { "agency": 1234, "account": 56789, "wallet": 175, "our_number": 12345678 }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct SlipFile {
    /// Bank registry code, e.g. "341".
    pub bank: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    #[serde(default = "default_currency_code")]
    pub currency_code: u8,
    #[serde(default)]
    pub document_number: Option<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
    #[serde(default)]
    pub payment_locations: Vec<String>,
    pub issuer: Issuer,
}

fn default_currency_code() -> u8 {
    9
}

impl SlipFile {
    /// Parse a JSON document into a slip description.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("failed to parse slip description")
    }

    /// Resolve the bank and build the validated slip record.
    pub fn into_boleto(self) -> Result<(Bank, Boleto)> {
        let bank = Bank::from_registry_code(&self.bank)?;
        let mut builder = Boleto::builder()
            .with_amount(self.amount)
            .with_currency_code(self.currency_code)
            .with_due_date(self.due_date)
            .with_instructions(self.instructions)
            .with_descriptions(self.descriptions)
            .with_payment_locations(self.payment_locations)
            .with_issuer(self.issuer);
        if let Some(number) = self.document_number {
            builder = builder.with_document_number(number);
        }
        Ok((bank, builder.build()?))
    }
}
