//! Slip encoding (`boleto encode ...`).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::common::SlipFile;
use crate::cli::utils::read_text_arg;

/// Arguments for `boleto encode`.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// JSON slip description file (`-` for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
    /// Emit the result as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct EncodeReport {
    bank: &'static str,
    bank_name: &'static str,
    barcode: String,
    typeable_line: String,
    due_date: String,
    amount: String,
}

/// Execute the encode command.
pub fn handle(args: EncodeArgs) -> Result<()> {
    let input = read_text_arg(args.from)?;
    let (bank, slip) = SlipFile::from_json(&input)?.into_boleto()?;
    let (barcode, line) = boleto::encode(bank, &slip)?;
    if args.json {
        let report = EncodeReport {
            bank: bank.registry_code(),
            bank_name: bank.name(),
            barcode: barcode.to_string(),
            typeable_line: line.to_string(),
            due_date: slip.due_date().to_string(),
            amount: slip.amount().to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("bank:          {bank}");
        println!("barcode:       {barcode}");
        println!("typeable line: {line}");
    }
    Ok(())
}
