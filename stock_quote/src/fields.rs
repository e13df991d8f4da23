//! The fixed set of quote attributes (FIELDS) and their provider format tags.
//!
//! The quote endpoint is asked for columns by concatenating one tag per field
//! into the `f` query parameter; the CSV row it returns carries the columns in
//! exactly that order. `Field::iter()` yields the fields in request order.
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// Named attributes exposed by every `QuoteRecord`, in provider column order.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
    EnumCount,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Field {
    Symbol,
    Name,
    LastTradePrice,
    LastTradeDate,
    LastTradeTime,
    Change,
    ChangePercent,
    Open,
    DaysHigh,
    DaysLow,
    PreviousClose,
    Bid,
    Ask,
    Volume,
    AverageDailyVolume,
    MarketCapitalization,
    YearHigh,
    YearLow,
    EarningsShare,
    PeRatio,
    DividendShare,
    DividendYield,
    StockExchange,
    ErrorIndication,
}

/// Literal the provider writes for an absent value.
pub const NOT_AVAILABLE: &str = "N/A";

impl Field {
    /// Provider format tag requesting this column.
    pub fn tag(self) -> &'static str {
        match self {
            Field::Symbol => "s",
            Field::Name => "n",
            Field::LastTradePrice => "l1",
            Field::LastTradeDate => "d1",
            Field::LastTradeTime => "t1",
            Field::Change => "c1",
            Field::ChangePercent => "p2",
            Field::Open => "o",
            Field::DaysHigh => "h",
            Field::DaysLow => "g",
            Field::PreviousClose => "p",
            Field::Bid => "b",
            Field::Ask => "a",
            Field::Volume => "v",
            Field::AverageDailyVolume => "a2",
            Field::MarketCapitalization => "j1",
            Field::YearHigh => "k",
            Field::YearLow => "j",
            Field::EarningsShare => "e",
            Field::PeRatio => "r",
            Field::DividendShare => "d",
            Field::DividendYield => "y",
            Field::StockExchange => "x",
            Field::ErrorIndication => "e1",
        }
    }

    /// All fields in provider column order.
    pub fn all() -> Vec<Field> {
        Field::iter().collect()
    }

    /// Value of the `f` query parameter requesting every field.
    pub fn format_param() -> String {
        Field::iter().map(Field::tag).collect()
    }
}
