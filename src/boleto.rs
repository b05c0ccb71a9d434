//! The slip record consumed by the bank layouts, plus the issuer profile.
//!
//! `Boleto` is an immutable value built through [`BoletoBuilder`]; the
//! builder validates list limits and required fields at construction time,
//! so an existing `Boleto` is always encodable as far as its own invariants
//! go (field-width fit is still checked per bank at encoding time).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BoletoError, Result};

/// Limit on free-text instruction lines printed on the slip.
pub const MAX_INSTRUCTIONS: usize = 5;
/// Limit on description lines.
pub const MAX_DESCRIPTIONS: usize = 10;
/// Limit on payment-location lines.
pub const MAX_PAYMENT_LOCATIONS: usize = 2;

/// Banking identity of the party issuing the slip.
///
/// All fields are plain numbers or text supplied by the bank; each layout
/// enforces its own width limits when the barcode is assembled. Not every
/// bank reads every field: Itaú uses agency/account/wallet/our-number, while
/// Santander reads the agency-supplied code, our-number and wallet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Issuer {
    /// Agency number, without its check digit.
    pub agency: u32,
    pub agency_digit: u8,
    /// Checking-account number, without its check digit.
    pub account: u64,
    pub account_digit: u8,
    /// Wallet/portfolio code identifying the slip's processing category.
    pub wallet: u32,
    /// Agreement ("convênio") number tying the issuer to its bank.
    pub agreement: u64,
    /// Issuer-chosen sequential identifier used to reconcile paid slips.
    pub our_number: u64,
    pub our_number_digit: u8,
    /// Assignor ("cedente") name shown on the slip.
    pub assignor: String,
    pub assignor_address: String,
    pub operation_code: u32,
    /// Operation code supplied by the agency (Santander layouts).
    pub agency_code: u32,
}

/// Immutable snapshot of one payment slip.
#[derive(Debug, Clone, PartialEq)]
pub struct Boleto {
    amount: Decimal,
    currency_code: u8,
    document_kind: String,
    document_number: Option<String>,
    accepted: bool,
    due_date: NaiveDate,
    instructions: Vec<String>,
    descriptions: Vec<String>,
    payment_locations: Vec<String>,
    issuer: Issuer,
}

impl Boleto {
    pub fn builder() -> BoletoBuilder {
        BoletoBuilder::default()
    }

    /// Amount owed, non-negative, two fractional digits of interest.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Currency species code; 9 is BRL.
    pub fn currency_code(&self) -> u8 {
        self.currency_code
    }

    /// Document kind, "DV" unless overridden.
    pub fn document_kind(&self) -> &str {
        &self.document_kind
    }

    pub fn document_number(&self) -> Option<&str> {
        self.document_number.as_deref()
    }

    pub fn accepted(&self) -> bool {
        self.accepted
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    pub fn payment_locations(&self) -> &[String] {
        &self.payment_locations
    }

    pub fn issuer(&self) -> &Issuer {
        &self.issuer
    }
}

/// Fluent construction for [`Boleto`].
#[derive(Debug, Default)]
pub struct BoletoBuilder {
    amount: Option<Decimal>,
    currency_code: Option<u8>,
    document_kind: Option<String>,
    document_number: Option<String>,
    accepted: bool,
    due_date: Option<NaiveDate>,
    instructions: Vec<String>,
    descriptions: Vec<String>,
    payment_locations: Vec<String>,
    issuer: Option<Issuer>,
}

impl BoletoBuilder {
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_currency_code(mut self, code: u8) -> Self {
        self.currency_code = Some(code);
        self
    }

    pub fn with_document_kind<S: Into<String>>(mut self, kind: S) -> Self {
        self.document_kind = Some(kind.into());
        self
    }

    pub fn with_document_number<S: Into<String>>(mut self, number: S) -> Self {
        self.document_number = Some(number.into());
        self
    }

    pub fn with_acceptance(mut self, accepted: bool) -> Self {
        self.accepted = accepted;
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_instructions<I, S>(mut self, instructions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = instructions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_descriptions<I, S>(mut self, descriptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.descriptions = descriptions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_payment_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.payment_locations = locations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_issuer(mut self, issuer: Issuer) -> Self {
        self.issuer = Some(issuer);
        self
    }

    /// Validate and freeze the slip.
    pub fn build(self) -> Result<Boleto> {
        let amount = self.amount.ok_or(BoletoError::MissingField("amount"))?;
        if amount.is_sign_negative() {
            return Err(BoletoError::NegativeAmount(amount));
        }
        let due_date = self.due_date.ok_or(BoletoError::MissingField("due date"))?;
        let issuer = self.issuer.ok_or(BoletoError::MissingField("issuer"))?;
        check_limit("instructions", &self.instructions, MAX_INSTRUCTIONS)?;
        check_limit("descriptions", &self.descriptions, MAX_DESCRIPTIONS)?;
        check_limit(
            "payment locations",
            &self.payment_locations,
            MAX_PAYMENT_LOCATIONS,
        )?;
        Ok(Boleto {
            amount,
            currency_code: self.currency_code.unwrap_or(9),
            document_kind: self.document_kind.unwrap_or_else(|| "DV".to_owned()),
            document_number: self.document_number,
            accepted: self.accepted,
            due_date,
            instructions: self.instructions,
            descriptions: self.descriptions,
            payment_locations: self.payment_locations,
            issuer,
        })
    }
}

fn check_limit(what: &'static str, entries: &[String], limit: usize) -> Result<()> {
    if entries.len() > limit {
        return Err(BoletoError::TooManyEntries {
            what,
            limit,
            got: entries.len(),
        });
    }
    Ok(())
}
