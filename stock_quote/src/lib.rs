//!
//! Synchronous stock-quote client for a CSV quote provider.
//!
//! This crate aggregates:
//! - `client` - `StockQuote`, exposing `quote`, `quotes`, `history`, and `simple_return`.
//! - `model` - `QuoteRecord` and `HistoryRecord` returned to callers.
//! - `fields` - the FIELDS enumeration and its provider format tags.
//! - `request` - provider request builders.
//! - `net` - the `Transport` seam and the `reqwest` based `HttpTransport`.
//! - `cassette` - replay transport for recorded interactions.
//! - `config` - endpoints, timeout, and environment overrides.
//! - `error` / `result` - `QuoteError` and the `Result` alias.
//!
//! ```no_run
//! use stock_quote::{ClientConfig, StockQuote};
//!
//! let client = StockQuote::new(ClientConfig::from_env()?)?;
//! let quote = client.quote("aapl")?;
//! if quote.response_code == 200 {
//!     println!("{} {:?}", quote.symbol, quote.price());
//! }
//! # Ok::<(), stock_quote::QuoteError>(())
//! ```
#![warn(missing_docs)]
pub mod cassette;
pub mod client;
pub mod config;
pub mod error;
pub mod fields;
pub mod model;
pub mod net;
pub mod request;
pub mod result;
pub mod symbols;

pub use cassette::Cassette;
pub use client::StockQuote;
pub use config::ClientConfig;
pub use error::QuoteError;
pub use fields::Field;
pub use model::history::HistoryRecord;
pub use model::quote::QuoteRecord;
pub use net::{HttpTransport, Transport};
pub use result::Result;
