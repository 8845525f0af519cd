//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

/// Runs the accounting cycle on a JSON report request and prints the result.
#[derive(Debug, Parser)]
#[command(name = "siklus-report", version)]
pub struct Cli {
    /// Request file (`entries`, `adjusting_entries`, `opening_capital`,
    /// `drawings`); `-` reads standard input.
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,

    /// Overrides the opening capital of the request.
    #[arg(long)]
    pub opening_capital: Option<Decimal>,

    /// Overrides the drawings of the request.
    #[arg(long)]
    pub drawings: Option<Decimal>,

    /// Print the export workbook (one table per sheet) instead of the bundle.
    #[arg(long)]
    pub sheets: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}
