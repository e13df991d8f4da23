//! Error type shared by the library and the command-line client.
//!
//! The `QuoteError` enum unifies argument validation, transport, and parsing
//! failures so callers can propagate a single error type. Note that a provider
//! reporting "no data" for a symbol is not an error for `quote`/`history`: those
//! operations return a record carrying `response_code = 404` instead.
use std::io;

use thiserror::Error;

/// Unified error type for quote retrieval.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Caller supplied an invalid argument (e.g. a start date after the end date).
    /// Raised before any request is sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure in the HTTP client itself (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a status the client cannot interpret.
    #[error("Unexpected HTTP status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Endpoint that produced it.
        url: String,
    },

    /// The response body is not well-formed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row or value does not have the expected shape.
    #[error("Format error: {0}")]
    Format(String),

    /// The provider has no data for the symbol and the operation cannot proceed.
    #[error("No data for {symbol}: {message}")]
    NoData {
        /// Requested symbol.
        symbol: String,
        /// Provider's explanation.
        message: String,
    },

    /// A replay transport has no recorded interaction for the request.
    #[error("No recorded interaction for {0}")]
    Replay(String),

    /// I/O error while reading fixtures or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Invalid configuration value.
    #[error("Config error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = QuoteError::InvalidArgument("start date 2024-01-05 is after end date 2024-01-01".into());
        assert_eq!(
            err.to_string(),
            "Invalid argument: start date 2024-01-05 is after end date 2024-01-01"
        );

        let err = QuoteError::Status {
            status: 503,
            url: "http://example.test/q".into(),
        };
        assert_eq!(err.to_string(), "Unexpected HTTP status 503 from http://example.test/q");

        let err = QuoteError::NoData {
            symbol: "ASDF".into(),
            message: "not found".into(),
        };
        assert_eq!(err.to_string(), "No data for ASDF: not found");
    }
}
