//! Records returned to callers.
//!
//! - `quote` - `QuoteRecord`, one per requested symbol.
//! - `history` - `HistoryRecord`, one per trading day.
//!
//! Both carry a `response_code` (200 found, 404 not found) and a
//! `no_data_message` that is `None` exactly when the code is 200.
pub mod history;
pub mod quote;

use chrono::NaiveDate;

use crate::error::QuoteError;
use crate::fields::NOT_AVAILABLE;
use crate::result::Result;

/// `response_code` of a record holding provider data.
pub const FOUND: u16 = 200;
/// `response_code` of a record standing in for missing provider data.
pub const NOT_FOUND: u16 = 404;

/// Trimmed cell content, or `None` for blanks and the provider's `N/A`.
pub(crate) fn cell(raw: &str) -> Option<&str> {
    let value = raw.trim();
    if value.is_empty() || value == NOT_AVAILABLE {
        None
    } else {
        Some(value)
    }
}

/// Parses a decimal such as `431.72`, `+0.72`, or `-1.25%`.
pub(crate) fn parse_decimal(name: &str, raw: &str) -> Result<Option<f64>> {
    let Some(value) = cell(raw) else {
        return Ok(None);
    };
    let number = value.trim_end_matches('%').trim_start_matches('+');
    number
        .parse::<f64>()
        .map(Some)
        .map_err(|e| QuoteError::Format(format!("{}: {:?} is not a number: {}", name, raw, e)))
}

/// Parses a whole number such as a share volume.
pub(crate) fn parse_integer(name: &str, raw: &str) -> Result<Option<u64>> {
    let Some(value) = cell(raw) else {
        return Ok(None);
    };
    value
        .parse::<u64>()
        .map(Some)
        .map_err(|e| QuoteError::Format(format!("{}: {:?} is not a whole number: {}", name, raw, e)))
}

/// Parses a date written in `format`.
pub(crate) fn parse_date(name: &str, raw: &str, format: &str) -> Result<Option<NaiveDate>> {
    let Some(value) = cell(raw) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(value, format)
        .map(Some)
        .map_err(|e| QuoteError::Format(format!("{}: {:?} is not a date: {}", name, raw, e)))
}
