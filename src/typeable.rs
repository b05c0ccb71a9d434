//! The human-keyable decomposition of a barcode into five checked blocks.

use std::fmt;

use crate::barcode::Barcode;
use crate::digits::mod10_check_digit;
use crate::error::Result;

/// The five blocks of a typeable line.
///
/// Blocks 1–3 carry their own trailing modulo-10 check digit; block 4 is the
/// barcode's modulo-11 digit standing alone; block 5 is the maturity factor
/// and amount, unchecked. Concatenating the data digits of blocks 1–3 and 5
/// around block 4 reconstructs the barcode exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeableLine {
    /// Bank code, currency code, first 5 free-field digits, check digit.
    pub block1: String,
    /// Free-field digits 6..=15 plus check digit.
    pub block2: String,
    /// Free-field digits 16..=25 plus check digit.
    pub block3: String,
    /// The barcode check digit on its own.
    pub block4: String,
    /// Maturity factor followed by the amount.
    pub block5: String,
}

impl TypeableLine {
    /// Regroup a barcode into the national five-block layout.
    pub fn from_barcode(barcode: &Barcode) -> Result<Self> {
        let digits = barcode.as_str();
        Ok(Self {
            block1: block_with_check(&format!("{}{}", &digits[0..4], &digits[19..24]))?,
            block2: block_with_check(&digits[24..34])?,
            block3: block_with_check(&digits[34..44])?,
            block4: digits[4..5].to_owned(),
            block5: digits[5..19].to_owned(),
        })
    }

    /// Invert [`from_barcode`](Self::from_barcode): strip the block check
    /// digits and reorder the data digits back into barcode positions.
    pub fn reconstruct_barcode(&self) -> Result<Barcode> {
        let mut digits = String::with_capacity(44);
        digits.push_str(&self.block1[0..4]);
        digits.push_str(&self.block4);
        digits.push_str(&self.block5);
        digits.push_str(&self.block1[4..9]);
        digits.push_str(&self.block2[0..10]);
        digits.push_str(&self.block3[0..10]);
        Barcode::parse(&digits)
    }
}

fn block_with_check(data: &str) -> Result<String> {
    let check = mod10_check_digit(data)?;
    Ok(format!("{data}{check}"))
}

/// Conventional display grouping: a dot after the fifth digit of the first
/// three blocks, blocks separated by spaces. Callers wanting a different
/// separator style should format the blocks themselves.
impl fmt::Display for TypeableLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} {}.{} {}.{} {} {}",
            &self.block1[0..5],
            &self.block1[5..],
            &self.block2[0..5],
            &self.block2[5..],
            &self.block3[0..5],
            &self.block3[5..],
            self.block4,
            self.block5
        )
    }
}
