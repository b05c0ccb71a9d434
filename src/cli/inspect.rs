//! Barcode inspection (`boleto inspect ...`).

use anyhow::{Result, anyhow};
use boleto::{Bank, Barcode, TypeableLine};
use clap::Args;

/// Arguments for `boleto inspect`.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// The 44-digit barcode to break down.
    pub barcode: Barcode,
    /// Fail with a non-zero exit if the check digit does not verify.
    #[arg(long)]
    pub strict: bool,
}

/// Execute the inspect command.
pub fn handle(args: InspectArgs) -> Result<()> {
    let barcode = args.barcode;
    let bank_name = Bank::from_registry_code(barcode.bank_code())
        .map(|bank| bank.name())
        .unwrap_or("unknown bank");
    let line = TypeableLine::from_barcode(&barcode)?;
    let valid = barcode.has_valid_check_digit();

    println!("barcode:         {barcode}");
    println!("bank:            {} ({})", barcode.bank_code(), bank_name);
    println!("currency code:   {}", barcode.currency_code());
    println!("check digit:     {} ({})", barcode.check_digit(), if valid {
        "valid"
    } else {
        "INVALID"
    });
    println!(
        "maturity factor: {} (due {})",
        barcode.maturity_factor(),
        barcode.due_date()
    );
    println!(
        "amount:          {} ({})",
        barcode.amount_digits(),
        barcode.amount()
    );
    println!("free field:      {}", barcode.free_field());
    println!("typeable line:   {line}");

    if args.strict && !valid {
        return Err(anyhow!("barcode check digit does not verify"));
    }
    Ok(())
}
