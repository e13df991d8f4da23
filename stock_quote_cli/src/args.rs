//! Command-line arguments for the stock quote client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use stock_quote::Field;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Quote endpoint (overrides STOCK_QUOTE_QUOTE_URL).
    #[clap(long)]
    pub quote_url: Option<String>,

    /// History endpoint (overrides STOCK_QUOTE_HISTORY_URL).
    #[clap(long)]
    pub history_url: Option<String>,

    /// Request timeout in seconds (overrides STOCK_QUOTE_TIMEOUT_SECS).
    #[clap(long)]
    pub timeout: Option<u64>,

    /// Answer from a recorded cassette file instead of the network.
    #[clap(long)]
    pub cassette: Option<PathBuf>,

    /// Print records as JSON.
    #[clap(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Operation to run.
#[derive(Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Current quote for one or more comma-separated symbols.
    #[clap(alias = "q")]
    Quote {
        /// Symbols, e.g. `aapl,tsla`.
        symbols: String,

        /// Fields to print, comma-separated (default: all).
        #[clap(long, value_delimiter = ',')]
        fields: Vec<Field>,
    },
    /// Daily prices for a symbol.
    #[clap(alias = "h")]
    History {
        symbol: String,

        /// First day, YYYY-MM-DD (default: 20 days ago).
        #[clap(long)]
        start: Option<NaiveDate>,

        /// Last day, YYYY-MM-DD (default: today).
        #[clap(long)]
        end: Option<NaiveDate>,
    },
    /// Percentage change of the close between two days.
    #[clap(alias = "r")]
    Return {
        symbol: String,

        /// First day, YYYY-MM-DD.
        #[clap(long)]
        start: NaiveDate,

        /// Last day, YYYY-MM-DD.
        #[clap(long)]
        end: NaiveDate,
    },
}
