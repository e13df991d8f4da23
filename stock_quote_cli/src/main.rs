//! Stock Quote Client - fetches current quotes, daily history, and simple returns
//! from the CSV quote provider and prints them to stdout.
//!
//! Usage example (CLI):
//! ```bash
//! stock_quote_cli quote aapl,tsla --fields symbol,last_trade_price,change
//! stock_quote_cli history aapl --start 2012-01-03 --end 2012-01-20
//! stock_quote_cli --json return aapl --start 2012-01-03 --end 2012-01-20
//! ```
//!
//! Endpoints and timeout come from `STOCK_QUOTE_*` environment variables unless
//! overridden by flags; `--cassette` replays a recorded fixture instead of
//! touching the network.
#![warn(missing_docs)]
mod args;
mod render;

use std::time::Duration;

use clap::Parser;
use log::info;
use stock_quote::{Cassette, ClientConfig, HttpTransport, Result, StockQuote, Transport};

use crate::args::{Args, Command};

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();
    let client = build_client(&args)?;
    info!(
        "Quote endpoint {}, history endpoint {}",
        client.config().quote_url,
        client.config().history_url
    );
    execute(&client, &args)
}

/// Client over the network, or over the `--cassette` recording when given.
fn build_client(args: &Args) -> Result<StockQuote<Box<dyn Transport>>> {
    let config = build_config(args)?;
    let transport: Box<dyn Transport> = match &args.cassette {
        Some(path) => {
            info!("Replaying provider answers from {}", path.display());
            Box::new(Cassette::from_file(path)?)
        }
        None => Box::new(HttpTransport::new(&config)?),
    };
    Ok(StockQuote::with_transport(transport, config))
}

/// Environment configuration with command-line overrides applied.
fn build_config(args: &Args) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = &args.quote_url {
        config.quote_url = url.clone();
    }
    if let Some(url) = &args.history_url {
        config.history_url = url.clone();
    }
    if let Some(secs) = args.timeout {
        config.timeout = Duration::from_secs(secs);
    }
    Ok(config)
}

fn execute(client: &StockQuote<Box<dyn Transport>>, args: &Args) -> Result<()> {
    match &args.command {
        Command::Quote { symbols, fields } => {
            let records = client.quotes(symbols)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for record in &records {
                    println!("{}", render::quote_line(record, fields));
                }
            }
        }
        Command::History { symbol, start, end } => {
            let records = client.history(symbol, *start, *end)?;
            info!("{} history rows for {}", records.len(), symbol);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for record in &records {
                    println!("{}", render::history_line(record));
                }
            }
        }
        Command::Return { symbol, start, end } => {
            let simple_return = client.simple_return(symbol, *start, *end)?;
            if args.json {
                let value = serde_json::json!({
                    "symbol": symbol,
                    "start": start,
                    "end": end,
                    "simple_return": simple_return,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{} {}..{} {:.4}%", symbol, start, end, simple_return);
            }
        }
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
