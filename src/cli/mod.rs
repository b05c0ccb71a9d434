//! Command-line interface wiring for the `boleto` binary.
//!
//! This module owns the clap definitions and delegates execution to
//! specialized submodules that encapsulate each command.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod banks;
pub mod common;
pub mod encode;
pub mod inspect;
pub mod utils;

/// Parsed CLI entrypoint for the `boleto` binary.
#[derive(Parser, Debug)]
#[command(name = "boleto", version, about = "FEBRABAN boleto barcode toolkit")]
pub struct Cli {
    /// Top-level command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Commands made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a slip description into a barcode and typeable line.
    Encode(encode::EncodeArgs),
    /// Break an existing barcode into its fields and verify its check digit.
    Inspect(inspect::InspectArgs),
    /// List the supported bank registry.
    Banks(banks::BanksArgs),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Encode(args) => encode::handle(args),
        Command::Inspect(args) => inspect::handle(args),
        Command::Banks(args) => banks::handle(args),
    }
}
