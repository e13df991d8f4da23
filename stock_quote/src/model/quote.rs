//! Quote record parsed from one row of the quote endpoint.
//!
//! Rows are headerless CSV with one column per [`Field`], in `Field` order.
use chrono::NaiveDate;
use csv::StringRecord;
use serde::Serialize;
use strum::EnumCount;

use crate::error::QuoteError;
use crate::fields::Field;
use crate::model::{FOUND, NOT_FOUND, cell, parse_date, parse_decimal, parse_integer};
use crate::result::Result;

/// Date layout of the `last_trade_date` column.
const TRADE_DATE_FORMAT: &str = "%m/%d/%Y";

/// Market snapshot for a single symbol.
///
/// Absent provider values are `None`. When the provider does not know the
/// symbol the record is still returned, with `response_code == 404` and a
/// `no_data_message` explaining why.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRecord {
    pub symbol: String,
    pub name: Option<String>,
    pub last_trade_price: Option<f64>,
    pub last_trade_date: Option<NaiveDate>,
    pub last_trade_time: Option<String>,
    pub change: Option<f64>,
    /// Percent, e.g. `0.17` for `+0.17%`.
    pub change_percent: Option<f64>,
    pub open: Option<f64>,
    pub days_high: Option<f64>,
    pub days_low: Option<f64>,
    pub previous_close: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub volume: Option<u64>,
    pub average_daily_volume: Option<u64>,
    /// Abbreviated as the provider writes it, e.g. `405.3B`.
    pub market_capitalization: Option<String>,
    pub year_high: Option<f64>,
    pub year_low: Option<f64>,
    pub earnings_share: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub dividend_share: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub stock_exchange: Option<String>,
    pub error_indication: Option<String>,
    /// 200 when the provider has data for the symbol, 404 otherwise.
    pub response_code: u16,
    /// `None` if and only if `response_code` is 200.
    pub no_data_message: Option<String>,
}

impl QuoteRecord {
    /// Parses a provider row answering the request for `requested`.
    ///
    /// The row's own symbol column wins over `requested` when present.
    pub fn from_row(requested: &str, row: &StringRecord) -> Result<Self> {
        if row.len() != Field::COUNT {
            return Err(QuoteError::Format(format!(
                "quote row for {} has {} columns, expected {}",
                requested,
                row.len(),
                Field::COUNT
            )));
        }
        let col = |field: Field| row.get(field as usize).unwrap_or_default();
        let text = |field: Field| cell(col(field)).map(String::from);
        let decimal = |field: Field| parse_decimal(field.as_ref(), col(field));
        let integer = |field: Field| parse_integer(field.as_ref(), col(field));

        let mut record = QuoteRecord {
            symbol: text(Field::Symbol).unwrap_or_else(|| requested.to_string()),
            name: text(Field::Name),
            last_trade_price: decimal(Field::LastTradePrice)?,
            last_trade_date: parse_date(
                Field::LastTradeDate.as_ref(),
                col(Field::LastTradeDate),
                TRADE_DATE_FORMAT,
            )?,
            last_trade_time: text(Field::LastTradeTime),
            change: decimal(Field::Change)?,
            change_percent: decimal(Field::ChangePercent)?,
            open: decimal(Field::Open)?,
            days_high: decimal(Field::DaysHigh)?,
            days_low: decimal(Field::DaysLow)?,
            previous_close: decimal(Field::PreviousClose)?,
            bid: decimal(Field::Bid)?,
            ask: decimal(Field::Ask)?,
            volume: integer(Field::Volume)?,
            average_daily_volume: integer(Field::AverageDailyVolume)?,
            market_capitalization: text(Field::MarketCapitalization),
            year_high: decimal(Field::YearHigh)?,
            year_low: decimal(Field::YearLow)?,
            earnings_share: decimal(Field::EarningsShare)?,
            pe_ratio: decimal(Field::PeRatio)?,
            dividend_share: decimal(Field::DividendShare)?,
            dividend_yield: decimal(Field::DividendYield)?,
            stock_exchange: text(Field::StockExchange),
            error_indication: text(Field::ErrorIndication),
            response_code: FOUND,
            no_data_message: None,
        };

        // The provider answers unknown symbols with a row of N/A (and usually a
        // zero price) plus an error indication.
        let priced = record.last_trade_price.is_some_and(|p| p > 0.0);
        if record.error_indication.is_some() || !priced {
            record.response_code = NOT_FOUND;
            record.no_data_message = Some(
                record
                    .error_indication
                    .clone()
                    .unwrap_or_else(|| no_data_message(&record.symbol)),
            );
        }
        Ok(record)
    }

    /// Record for a symbol the provider returned nothing for.
    pub fn not_found(symbol: &str, message: impl Into<String>) -> Self {
        QuoteRecord {
            symbol: symbol.to_string(),
            name: None,
            last_trade_price: None,
            last_trade_date: None,
            last_trade_time: None,
            change: None,
            change_percent: None,
            open: None,
            days_high: None,
            days_low: None,
            previous_close: None,
            bid: None,
            ask: None,
            volume: None,
            average_daily_volume: None,
            market_capitalization: None,
            year_high: None,
            year_low: None,
            earnings_share: None,
            pe_ratio: None,
            dividend_share: None,
            dividend_yield: None,
            stock_exchange: None,
            error_indication: None,
            response_code: NOT_FOUND,
            no_data_message: Some(message.into()),
        }
    }

    /// Last trade price.
    pub fn price(&self) -> Option<f64> {
        self.last_trade_price
    }

    /// `true` when the provider had data for the symbol.
    pub fn is_found(&self) -> bool {
        self.response_code == FOUND
    }

    /// Any field rendered as text; `None` when the provider left it empty.
    pub fn field(&self, field: Field) -> Option<String> {
        fn num<T: ToString>(value: Option<T>) -> Option<String> {
            value.map(|v| v.to_string())
        }

        match field {
            Field::Symbol => Some(self.symbol.clone()),
            Field::Name => self.name.clone(),
            Field::LastTradePrice => num(self.last_trade_price),
            Field::LastTradeDate => self.last_trade_date.map(|d| d.format(TRADE_DATE_FORMAT).to_string()),
            Field::LastTradeTime => self.last_trade_time.clone(),
            Field::Change => num(self.change),
            Field::ChangePercent => self.change_percent.map(|p| format!("{}%", p)),
            Field::Open => num(self.open),
            Field::DaysHigh => num(self.days_high),
            Field::DaysLow => num(self.days_low),
            Field::PreviousClose => num(self.previous_close),
            Field::Bid => num(self.bid),
            Field::Ask => num(self.ask),
            Field::Volume => num(self.volume),
            Field::AverageDailyVolume => num(self.average_daily_volume),
            Field::MarketCapitalization => self.market_capitalization.clone(),
            Field::YearHigh => num(self.year_high),
            Field::YearLow => num(self.year_low),
            Field::EarningsShare => num(self.earnings_share),
            Field::PeRatio => num(self.pe_ratio),
            Field::DividendShare => num(self.dividend_share),
            Field::DividendYield => num(self.dividend_yield),
            Field::StockExchange => self.stock_exchange.clone(),
            Field::ErrorIndication => self.error_indication.clone(),
        }
    }
}

/// Message for symbols the provider has no quote for.
pub fn no_data_message(symbol: &str) -> String {
    format!("No quote data found for symbol {}", symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: &str) -> StringRecord {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(line.as_bytes());
        reader.records().next().unwrap().unwrap()
    }

    const AAPL: &str = r#""AAPL","Apple Inc.",431.72,"5/24/2013","4:00pm",+0.72,"+0.17%",428.86,433.70,428.00,431.00,431.50,431.80,11074400,15253400,405.3B,705.07,385.10,41.896,10.29,10.60,2.48,"NasdaqNM","N/A""#;

    #[test]
    fn parses_every_column_of_a_known_symbol() {
        let record = QuoteRecord::from_row("aapl", &row(AAPL)).unwrap();

        assert_eq!(record.symbol, "AAPL");
        assert_eq!(record.name.as_deref(), Some("Apple Inc."));
        assert_eq!(record.price(), Some(431.72));
        assert_eq!(record.last_trade_date, NaiveDate::from_ymd_opt(2013, 5, 24));
        assert_eq!(record.change_percent, Some(0.17));
        assert_eq!(record.volume, Some(11_074_400));
        assert_eq!(record.market_capitalization.as_deref(), Some("405.3B"));
        assert_eq!(record.error_indication, None);
        assert_eq!(record.response_code, 200);
        assert!(record.no_data_message.is_none());
        assert!(record.is_found());
    }

    #[test]
    fn error_indication_marks_record_not_found() {
        let line = r#""ASDF","ASDF",0.00,"N/A","N/A",N/A,"N/A",N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,"N/A","No such ticker symbol. Try Symbol Lookup (Look up: ASDF)""#;
        let record = QuoteRecord::from_row("asdf", &row(line)).unwrap();

        assert_eq!(record.response_code, 404);
        assert_eq!(
            record.no_data_message.as_deref(),
            Some("No such ticker symbol. Try Symbol Lookup (Look up: ASDF)")
        );
        assert_eq!(record.volume, None);
    }

    #[test]
    fn missing_price_without_indication_gets_default_message() {
        let line = r#""ZZZZ","N/A",N/A,"N/A","N/A",N/A,"N/A",N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,"N/A","N/A""#;
        let record = QuoteRecord::from_row("zzzz", &row(line)).unwrap();

        assert_eq!(record.response_code, 404);
        assert_eq!(record.no_data_message, Some(no_data_message("ZZZZ")));
    }

    #[test]
    fn short_rows_are_rejected() {
        let result = QuoteRecord::from_row("aapl", &row(r#""AAPL",431.72"#));
        assert!(matches!(result, Err(QuoteError::Format(_))));
    }

    #[test]
    fn every_field_is_readable() {
        let record = QuoteRecord::from_row("aapl", &row(AAPL)).unwrap();
        for field in Field::all() {
            let value = record.field(field);
            if field == Field::ErrorIndication {
                assert!(value.is_none());
            } else {
                assert!(value.is_some(), "{} should be present", field);
            }
        }
        assert_eq!(record.field(Field::LastTradeDate).as_deref(), Some("05/24/2013"));
    }
}
