//! Provider request builders.
//!
//! Both endpoints are plain GETs with positional query parameters. The history
//! endpoint takes the date range split into parts, with zero-based months.
use chrono::{Datelike, NaiveDate};

use crate::fields::Field;
use crate::net::HttpRequest;

/// Value of the `e`/`ignore` parameter asking for a CSV body.
pub const CSV_SUFFIX: &str = ".csv";
/// History granularity: daily rows.
pub const DAILY: &str = "d";

/// Builds the quote request covering every symbol in `symbols`, in order.
pub fn quote_request(base_url: &str, symbols: &[String]) -> HttpRequest {
    HttpRequest::get(base_url)
        .param("s", symbols.join(","))
        .param("f", Field::format_param())
        .param("e", CSV_SUFFIX)
}

/// Builds the daily history request for `symbol` over `[start, end]`.
pub fn history_request(base_url: &str, symbol: &str, start: NaiveDate, end: NaiveDate) -> HttpRequest {
    HttpRequest::get(base_url)
        .param("s", symbol)
        .param("a", start.month0().to_string())
        .param("b", start.day().to_string())
        .param("c", start.year().to_string())
        .param("d", end.month0().to_string())
        .param("e", end.day().to_string())
        .param("f", end.year().to_string())
        .param("g", DAILY)
        .param("ignore", CSV_SUFFIX)
}
