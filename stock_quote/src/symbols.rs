//! Parsing of the comma-separated symbol lists accepted by `quotes`.

use crate::error::QuoteError;
use crate::result::Result;

/// Splits `input` on commas into trimmed symbols, keeping input order.
///
/// Returns an error if the list is empty or contains an empty entry
/// (e.g. `"aapl,,tsla"`).
pub fn parse_symbol_list(input: &str) -> Result<Vec<String>> {
    let mut symbols = Vec::new();

    for raw in input.split(',') {
        let symbol = raw.trim();
        if symbol.is_empty() {
            return Err(QuoteError::InvalidArgument(format!(
                "empty symbol in list {:?}",
                input
            )));
        }
        symbols.push(symbol.to_string());
    }
    Ok(symbols)
}

/// Validates a single symbol, rejecting blanks and comma lists.
pub fn parse_single_symbol(input: &str) -> Result<String> {
    let symbol = input.trim();
    if symbol.is_empty() {
        return Err(QuoteError::InvalidArgument("symbol must not be empty".into()));
    }
    if symbol.contains(',') {
        return Err(QuoteError::InvalidArgument(format!(
            "{:?} is a symbol list; use `quotes` for several symbols",
            input
        )));
    }
    Ok(symbol.to_string())
}
