//! Bank registry listing (`boleto banks`).

use anyhow::Result;
use boleto::Bank;
use clap::Args;

/// Arguments for `boleto banks`.
#[derive(Args, Debug)]
pub struct BanksArgs {}

/// Print the supported bank registry.
pub fn handle(_args: BanksArgs) -> Result<()> {
    for bank in Bank::all() {
        println!("{}  {}", bank.registry_code(), bank.name());
    }
    Ok(())
}
