//! Text rendering of records for the terminal.
use stock_quote::{Field, HistoryRecord, QuoteRecord};

/// One line per quote: `field=value` pairs, or the no-data message.
pub fn quote_line(record: &QuoteRecord, fields: &[Field]) -> String {
    if let Some(message) = &record.no_data_message {
        return format!("{} [{}] {}", record.symbol, record.response_code, message);
    }
    let fields = if fields.is_empty() { Field::all() } else { fields.to_vec() };
    fields
        .iter()
        .map(|field| {
            let value = record.field(*field).unwrap_or_else(|| "N/A".to_string());
            format!("{}={}", field, value)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per trading day, or the no-data message.
pub fn history_line(record: &HistoryRecord) -> String {
    if let Some(message) = &record.no_data_message {
        return format!("{} [{}] {}", record.symbol, record.response_code, message);
    }
    let num = |v: Option<f64>| v.map(|v| format!("{:.2}", v)).unwrap_or_default();
    format!(
        "{} {} open={} high={} low={} close={} volume={} adj_close={}",
        record.symbol,
        record.date.map(|d| d.to_string()).unwrap_or_default(),
        num(record.open),
        num(record.high),
        num(record.low),
        num(record.close),
        record.volume.unwrap_or_default(),
        num(record.adj_close),
    )
}
