//! Client configuration: provider endpoints, timeout, and user agent.
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::result::Result;

/// Quote endpoint answering headerless CSV rows, one per symbol.
pub const DEFAULT_QUOTE_URL: &str = "http://download.finance.yahoo.com/d/quotes.csv";
/// Daily history endpoint answering CSV with a header row.
pub const DEFAULT_HISTORY_URL: &str = "http://ichart.finance.yahoo.com/table.csv";
/// Request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko)";

/// Environment variable overriding [`ClientConfig::quote_url`].
pub const ENV_QUOTE_URL: &str = "STOCK_QUOTE_QUOTE_URL";
/// Environment variable overriding [`ClientConfig::history_url`].
pub const ENV_HISTORY_URL: &str = "STOCK_QUOTE_HISTORY_URL";
/// Environment variable overriding [`ClientConfig::timeout`], in seconds.
pub const ENV_TIMEOUT_SECS: &str = "STOCK_QUOTE_TIMEOUT_SECS";
/// Environment variable overriding [`ClientConfig::user_agent`].
pub const ENV_USER_AGENT: &str = "STOCK_QUOTE_USER_AGENT";

/// Settings used by [`crate::client::StockQuote`] and [`crate::net::HttpTransport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Quote CSV endpoint.
    pub quote_url: String,
    /// History CSV endpoint.
    pub history_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            quote_url: DEFAULT_QUOTE_URL.to_string(),
            history_url: DEFAULT_HISTORY_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by any `STOCK_QUOTE_*` variables set in the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the `STOCK_QUOTE_*` keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_QUOTE_URL) {
            config.quote_url = url;
        }
        if let Some(url) = lookup(ENV_HISTORY_URL) {
            config.history_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                QuoteError::Config(format!("{} must be whole seconds, got {:?}: {}", ENV_TIMEOUT_SECS, raw, e))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(agent) = lookup(ENV_USER_AGENT) {
            config.user_agent = agent;
        }
        Ok(config)
    }
}
