//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use sarraf_shared::RoundingMode;

/// Sarraf - exact, currency-aware money formatting and rounding.
#[derive(Parser, Debug)]
#[command(name = "sarraf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List configured currencies
    List,

    /// List symbol positions with their display labels
    Positions,

    /// Format an amount in a currency
    Format {
        /// Currency code, any case
        code: String,
        /// Amount, e.g. 1234.5 or 1/4
        amount: String,
        /// Print the serialized money value instead
        #[arg(long)]
        json: bool,
    },

    /// Round an amount to the currency's canonical scale
    Round {
        /// Currency code, any case
        code: String,
        /// Amount, e.g. 9.995
        amount: String,
        /// Rounding mode (defaults to money.default_rounding)
        mode: Option<RoundingMode>,
    },

    /// Convert an amount with a caller-supplied rate
    Convert {
        /// Source currency code
        from: String,
        /// Target currency code
        to: String,
        /// Amount in the source currency
        amount: String,
        /// Units of target currency per unit of source currency
        rate: String,
        /// Rounding mode for the converted amount (defaults to money.default_rounding)
        #[arg(long)]
        mode: Option<RoundingMode>,
    },
}
