//! Quote client: `quote`, `quotes`, `history`, and `simple_return`.
//!
//! Every call is one synchronous request through the client's [`Transport`];
//! the client keeps no state between calls apart from its configuration.
//!
//! Failure handling differs on purpose between operations. `quote`, `quotes`
//! and `history` report a symbol the provider does not know as data: a record
//! with `response_code == 404` and a `no_data_message`. `simple_return` cannot
//! compute anything without prices, so the same condition surfaces as
//! [`QuoteError::NoData`]. Callers relying on either behaviour keep working.
use chrono::{Days, Local, NaiveDate};
use csv::StringRecord;
use log::{debug, warn};

use crate::config::ClientConfig;
use crate::error::QuoteError;
use crate::fields::Field;
use crate::model::cell;
use crate::model::history::{HistoryRecord, no_history_message, parse_history_csv};
use crate::model::quote::{QuoteRecord, no_data_message};
use crate::net::{HttpRequest, HttpResponse, HttpTransport, Transport};
use crate::request::{history_request, quote_request};
use crate::result::Result;
use crate::symbols::{parse_single_symbol, parse_symbol_list};

/// Calendar days covered by `history` when no start date is given.
pub const DEFAULT_HISTORY_DAYS: u64 = 20;

/// Synchronous client for the quote provider.
#[derive(Debug)]
pub struct StockQuote<T: Transport = HttpTransport> {
    transport: T,
    config: ClientConfig,
    today: Option<NaiveDate>,
}

impl StockQuote<HttpTransport> {
    /// Client talking to the provider over HTTP.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> StockQuote<T> {
    /// Client sending its requests through `transport`.
    pub fn with_transport(transport: T, config: ClientConfig) -> Self {
        StockQuote {
            transport,
            config,
            today: None,
        }
    }

    /// Fixes "today" for default history windows instead of reading the clock.
    pub fn pinned_to(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Transport in use.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Configuration in use.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Current date as the client sees it.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Quote for a single symbol.
    ///
    /// A comma-separated list is rejected; use [`Self::quotes`] for several symbols.
    pub fn quote(&self, symbol: &str) -> Result<QuoteRecord> {
        let symbol = parse_single_symbol(symbol)?;
        let mut records = self.fetch_quotes(&[symbol.clone()])?;
        Ok(records
            .pop()
            .unwrap_or_else(|| QuoteRecord::not_found(&symbol, no_data_message(&symbol))))
    }

    /// Quotes for a comma-separated list of symbols, one record per symbol in
    /// input order. A single symbol yields a one-element vector.
    pub fn quotes(&self, symbols: &str) -> Result<Vec<QuoteRecord>> {
        let symbols = parse_symbol_list(symbols)?;
        self.fetch_quotes(&symbols)
    }

    /// Daily history for `symbol` over `[start, end]`.
    ///
    /// `start` defaults to twenty days before today and `end` to today. A
    /// symbol without history yields a single not-found record.
    pub fn history(
        &self,
        symbol: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<HistoryRecord>> {
        let today = self.today();
        let end = end.unwrap_or(today);
        let start = start.unwrap_or_else(|| {
            today
                .checked_sub_days(Days::new(DEFAULT_HISTORY_DAYS))
                .unwrap_or(NaiveDate::MIN)
        });

        let (symbol, rows) = self.fetch_history(symbol, start, end)?;
        match rows {
            Some(records) if !records.is_empty() => Ok(records),
            _ => Ok(vec![HistoryRecord::not_found(
                &symbol,
                no_history_message(&symbol, start, end),
            )]),
        }
    }

    /// Percentage change of the closing price between `start` and `end`.
    ///
    /// Uses the first and last trading days inside the range. Returns `0.0`
    /// when fewer than two priced days exist (including a range with no trading
    /// days), and [`QuoteError::NoData`] when the provider does not know the
    /// symbol at all.
    pub fn simple_return(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<f64> {
        let (symbol, rows) = self.fetch_history(symbol, start, end)?;
        let Some(records) = rows else {
            return Err(QuoteError::NoData {
                message: no_history_message(&symbol, start, end),
                symbol,
            });
        };

        let closes: Vec<f64> = records
            .iter()
            .filter(|r| r.date.is_some_and(|d| d >= start && d <= end))
            .filter_map(|r| r.close)
            .filter(|close| *close > 0.0)
            .collect();
        match (closes.first(), closes.last()) {
            (Some(first), Some(last)) if closes.len() >= 2 => Ok(((last - first) / first) * 100.0),
            _ => {
                debug!("{} has {} priced days in range, return is 0", symbol, closes.len());
                Ok(0.0)
            }
        }
    }

    /// Validated symbol plus its rows for `[start, end]`, oldest first, or
    /// `None` when the provider answers 404 for the symbol.
    fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<(String, Option<Vec<HistoryRecord>>)> {
        check_date_order(start, end)?;
        let symbol = parse_single_symbol(symbol)?;

        let request = history_request(&self.config.history_url, &symbol, start, end);
        let response = self.transport.send(&request)?;

        if response.status == 404 {
            debug!("history for {} not found", symbol);
            return Ok((symbol, None));
        }
        expect_success(&request, &response)?;

        let records = parse_history_csv(&symbol, &response.body)?;
        Ok((symbol, Some(records)))
    }

    fn fetch_quotes(&self, symbols: &[String]) -> Result<Vec<QuoteRecord>> {
        let request = quote_request(&self.config.quote_url, symbols);
        let response = self.transport.send(&request)?;
        expect_success(&request, &response)?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(response.body.as_bytes());

        // Rows are credited to the requested symbol named in their symbol column;
        // a row without one takes the slot at its own position.
        let mut slots: Vec<Option<StringRecord>> = vec![None; symbols.len()];
        for (index, row) in reader.records().enumerate() {
            let row = row?;
            if row.iter().all(|c| c.trim().is_empty()) {
                continue;
            }
            let slot = match row.get(Field::Symbol as usize).and_then(cell) {
                Some(returned) => symbols
                    .iter()
                    .zip(&slots)
                    .position(|(requested, slot)| slot.is_none() && requested.eq_ignore_ascii_case(returned)),
                None => (index < slots.len() && slots[index].is_none()).then_some(index),
            };
            match slot {
                Some(slot) => slots[slot] = Some(row),
                None => warn!("ignoring quote row not matching any requested symbol: {:?}", row),
            }
        }

        symbols
            .iter()
            .zip(slots)
            .map(|(symbol, slot)| match slot {
                Some(row) => QuoteRecord::from_row(symbol, &row),
                None => {
                    warn!("no quote row returned for {}", symbol);
                    Ok(QuoteRecord::not_found(symbol, no_data_message(symbol)))
                }
            })
            .collect()
    }
}

fn check_date_order(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start > end {
        return Err(QuoteError::InvalidArgument(format!(
            "start date {} is after end date {}",
            start, end
        )));
    }
    Ok(())
}

fn expect_success(request: &HttpRequest, response: &HttpResponse) -> Result<()> {
    if !response.is_success() {
        return Err(QuoteError::Status {
            status: response.status,
            url: request.url.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::Cassette;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const AAPL_ROW: &str = r#""AAPL","Apple Inc.",431.72,"5/24/2013","4:00pm",+0.72,"+0.17%",428.86,433.70,428.00,431.00,431.50,431.80,11074400,15253400,405.3B,705.07,385.10,41.896,10.29,10.60,2.48,"NasdaqNM","N/A""#;
    const TSLA_ROW: &str = r#""TSLA","Tesla Motors, Inc.",97.76,"5/24/2013","4:00pm",-1.04,"-1.05%",97.30,98.95,95.42,98.80,97.70,97.80,12617400,8946010,11.193B,110.33,25.52,-4.16,N/A,N/A,N/A,"NasdaqNM","N/A""#;
    const HISTORY_HEADER: &str = "Date,Open,High,Low,Close,Volume,Adj Close\n";

    fn client(cassette: Cassette) -> StockQuote<Cassette> {
        StockQuote::with_transport(cassette, ClientConfig::default()).pinned_to(date(2026, 10, 19))
    }

    #[test]
    fn default_history_window_is_twenty_days_back() {
        let config = ClientConfig::default();
        let body = "Date,Open,High,Low,Close,Volume,Adj Close\n2026-10-16,1,1,1,1,1,1\n";
        let cassette = Cassette::default().with(&config.history_url, &[("s", "aapl")], 200, body);
        let client = client(cassette);

        client.history("aapl", None, None).unwrap();

        let sent = client.transport().requests();
        assert_eq!(sent.len(), 1);
        // 2026-09-29 .. 2026-10-19, months zero-based.
        assert_eq!(sent[0].query_value("a"), Some("8"));
        assert_eq!(sent[0].query_value("b"), Some("29"));
        assert_eq!(sent[0].query_value("d"), Some("9"));
        assert_eq!(sent[0].query_value("e"), Some("19"));
    }

    #[test]
    fn quote_rejects_symbol_lists() {
        let client = client(Cassette::default());
        assert!(matches!(client.quote("aapl,tsla"), Err(QuoteError::InvalidArgument(_))));
        assert!(client.transport().requests().is_empty());
    }

    #[test]
    fn missing_rows_become_not_found_records() {
        let config = ClientConfig::default();
        let cassette = Cassette::default().with(&config.quote_url, &[("s", "aapl,msft")], 200, AAPL_ROW);
        let records = client(cassette).quotes("aapl,msft").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].response_code, 200);
        assert_eq!(records[1].symbol, "msft");
        assert_eq!(records[1].response_code, 404);
        assert!(records[1].no_data_message.is_some());
    }

    #[test]
    fn server_errors_are_status_errors() {
        let config = ClientConfig::default();
        let cassette = Cassette::default()
            .with(&config.quote_url, &[("s", "aapl")], 500, "oops")
            .with(&config.history_url, &[("s", "aapl")], 503, "busy");
        let client = client(cassette);

        assert!(matches!(client.quote("aapl"), Err(QuoteError::Status { status: 500, .. })));
        assert!(matches!(
            client.history("aapl", None, None),
            Err(QuoteError::Status { status: 503, .. })
        ));
    }

    #[test]
    fn empty_range_yields_sentinel() {
        let config = ClientConfig::default();
        let body = "Date,Open,High,Low,Close,Volume,Adj Close\n";
        let cassette = Cassette::default().with(&config.history_url, &[("s", "aapl")], 200, body);
        let records = client(cassette)
            .history("aapl", Some(date(2026, 10, 17)), Some(date(2026, 10, 18)))
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].response_code, 404);
    }

    #[test]
    fn rows_are_matched_by_symbol_when_one_is_missing_in_the_middle() {
        let config = ClientConfig::default();
        let body = format!("{}\r\n{}\r\n", AAPL_ROW, TSLA_ROW);
        let cassette = Cassette::default().with(&config.quote_url, &[("s", "aapl,msft,tsla")], 200, &body);
        let records = client(cassette).quotes("aapl,msft,tsla").unwrap();

        let summary: Vec<(&str, u16)> = records
            .iter()
            .map(|r| (r.symbol.as_str(), r.response_code))
            .collect();
        assert_eq!(summary, vec![("AAPL", 200), ("msft", 404), ("TSLA", 200)]);
    }

    #[test]
    fn rows_out_of_request_order_still_land_on_their_symbol() {
        let config = ClientConfig::default();
        let body = format!("{}\r\n{}\r\n", TSLA_ROW, AAPL_ROW);
        let cassette = Cassette::default().with(&config.quote_url, &[("s", "aapl,tsla")], 200, &body);
        let records = client(cassette).quotes("aapl,tsla").unwrap();

        assert_eq!(records[0].symbol, "AAPL");
        assert_eq!(records[1].symbol, "TSLA");
    }

    #[test]
    fn simple_return_is_zero_for_known_symbol_without_trading_days() {
        let config = ClientConfig::default();
        let cassette = Cassette::default().with(&config.history_url, &[("s", "aapl")], 200, HISTORY_HEADER);
        let simple_return = client(cassette)
            .simple_return("aapl", date(2013, 2, 2), date(2013, 2, 3))
            .unwrap();

        assert_eq!(simple_return, 0.0);
    }

    #[test]
    fn simple_return_ignores_rows_outside_the_range() {
        let config = ClientConfig::default();
        let body = format!(
            "{}2012-01-23,1,1,1,500.00,1,1\n2012-01-20,1,1,1,420.30,1,1\n2012-01-03,1,1,1,411.23,1,1\n2012-01-02,1,1,1,100.00,1,1\n",
            HISTORY_HEADER
        );
        let cassette = Cassette::default().with(&config.history_url, &[("s", "aapl")], 200, &body);
        let simple_return = client(cassette)
            .simple_return("aapl", date(2012, 1, 3), date(2012, 1, 20))
            .unwrap();

        assert_eq!(simple_return, 2.205578386790845);
    }

    #[test]
    fn config_is_the_one_given() {
        let config = ClientConfig {
            quote_url: "http://localhost:9000/q.csv".into(),
            ..ClientConfig::default()
        };
        let client = StockQuote::with_transport(Cassette::default(), config.clone());

        assert_eq!(client.config(), &config);
    }
}
