//! Daily history records parsed from the history endpoint's CSV body.
//!
//! The body has a `Date,Open,High,Low,Close,Volume,Adj Close` header and lists
//! the newest day first; records are handed back oldest first.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{FOUND, NOT_FOUND};
use crate::result::Result;

/// One trading day for a symbol, or the not-found sentinel.
///
/// The sentinel has `response_code == 404`, a `no_data_message`, and no prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRecord {
    /// Requested symbol.
    pub symbol: String,
    /// Trading day.
    pub date: Option<NaiveDate>,
    /// Opening price.
    pub open: Option<f64>,
    /// Intraday high.
    pub high: Option<f64>,
    /// Intraday low.
    pub low: Option<f64>,
    /// Closing price.
    pub close: Option<f64>,
    /// Shares traded.
    pub volume: Option<u64>,
    /// Close adjusted for splits and dividends.
    pub adj_close: Option<f64>,
    /// 200 for a trading day, 404 for the sentinel.
    pub response_code: u16,
    /// `None` if and only if `response_code` is 200.
    pub no_data_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Open")]
    open: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "Low")]
    low: f64,
    #[serde(rename = "Close")]
    close: f64,
    #[serde(rename = "Volume")]
    volume: u64,
    #[serde(rename = "Adj Close")]
    adj_close: f64,
}

impl HistoryRecord {
    /// Sentinel standing in for a symbol with no history.
    pub fn not_found(symbol: &str, message: impl Into<String>) -> Self {
        HistoryRecord {
            symbol: symbol.to_string(),
            date: None,
            open: None,
            high: None,
            low: None,
            close: None,
            volume: None,
            adj_close: None,
            response_code: NOT_FOUND,
            no_data_message: Some(message.into()),
        }
    }

    /// `true` for a trading-day record.
    pub fn is_found(&self) -> bool {
        self.response_code == FOUND
    }

    fn from_row(symbol: &str, row: HistoryRow) -> Self {
        HistoryRecord {
            symbol: symbol.to_string(),
            date: Some(row.date),
            open: Some(row.open),
            high: Some(row.high),
            low: Some(row.low),
            close: Some(row.close),
            volume: Some(row.volume),
            adj_close: Some(row.adj_close),
            response_code: FOUND,
            no_data_message: None,
        }
    }
}

/// Parses a history CSV body into records sorted oldest first.
///
/// An empty body (header only) yields an empty vector.
pub fn parse_history_csv(symbol: &str, body: &str) -> Result<Vec<HistoryRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    for row in reader.deserialize::<HistoryRow>() {
        records.push(HistoryRecord::from_row(symbol, row?));
    }
    records.sort_by_key(|r| r.date);
    Ok(records)
}

/// Message for symbols the provider has no history for.
pub fn no_history_message(symbol: &str, start: NaiveDate, end: NaiveDate) -> String {
    format!("No history found for symbol {} between {} and {}", symbol, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuoteError;

    const BODY: &str = "Date,Open,High,Low,Close,Volume,Adj Close\n\
        2012-01-05,414.95,418.55,412.67,418.03,13349900,56.41\n\
        2012-01-04,410.00,414.68,409.28,413.44,9286500,55.79\n\
        2012-01-03,409.40,412.50,409.00,411.23,10793600,55.49\n";

    #[test]
    fn rows_come_back_oldest_first() {
        let records = parse_history_csv("aapl", BODY).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2012, 1, 3));
        assert_eq!(records[0].close, Some(411.23));
        assert_eq!(records[2].date, NaiveDate::from_ymd_opt(2012, 1, 5));
        assert!(records.iter().all(|r| r.is_found() && r.no_data_message.is_none()));
        assert!(records.iter().all(|r| r.symbol == "aapl"));
    }

    #[test]
    fn header_only_body_is_empty() {
        let records = parse_history_csv("aapl", "Date,Open,High,Low,Close,Volume,Adj Close\n").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_rows_are_csv_errors() {
        let body = "Date,Open,High,Low,Close,Volume,Adj Close\n2012-01-03,abc,1,1,1,1,1\n";
        assert!(matches!(parse_history_csv("aapl", body), Err(QuoteError::Csv(_))));
    }

    #[test]
    fn sentinel_keeps_the_invariant() {
        let record = HistoryRecord::not_found("asdf", "gone");
        assert_eq!(record.response_code, 404);
        assert_eq!(record.no_data_message.as_deref(), Some("gone"));
        assert!(record.close.is_none());
    }
}
