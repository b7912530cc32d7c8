// Mapper from the backend's JSON rows to domain types
use crate::domain::price_history::{PriceHistory, PricePoint};
use crate::domain::product::{ProductId, TrackedProduct};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Dashboard rows are positional: `[id, name, current_price, target_price]`.
/// A single malformed row fails the whole snapshot rather than dropping the row.
pub fn products_from_rows(rows: &[Vec<Value>]) -> Result<Vec<TrackedProduct>, String> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| row_to_product(row).map_err(|e| format!("row {}: {}", idx, e)))
        .collect()
}

fn row_to_product(row: &[Value]) -> Result<TrackedProduct, String> {
    if row.len() < 4 {
        return Err(format!("expected 4 columns, got {}", row.len()));
    }

    let id = match &row[0] {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::Number(n) => n.to_string(),
        other => return Err(format!("invalid product id {}", other)),
    };
    let name = match &row[1] {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    let current_price = price_value(&row[2]).ok_or("invalid current price")?;
    let target_price = price_value(&row[3]).ok_or("invalid target price")?;

    Ok(TrackedProduct::new(
        ProductId::new(id),
        name,
        current_price,
        target_price,
    ))
}

/// Prices arrive as JSON numbers, or as strings when the backend serializes decimals.
fn price_value(value: &Value) -> Option<f64> {
    let price: Option<f64> = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    price.filter(|v| v.is_finite())
}

/// History rows are `[timestamp, price]` pairs.
pub fn history_from_rows(rows: &[Vec<Value>]) -> Result<PriceHistory, String> {
    let mut points = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        if row.len() < 2 {
            return Err(format!("row {}: expected 2 columns, got {}", idx, row.len()));
        }
        let recorded_at = row[0]
            .as_str()
            .and_then(parse_timestamp)
            .ok_or_else(|| format!("row {}: invalid timestamp {}", idx, row[0]))?;
        let price =
            price_value(&row[1]).ok_or_else(|| format!("row {}: invalid price {}", idx, row[1]))?;
        points.push(PricePoint::new(recorded_at, price));
    }
    Ok(PriceHistory::new(points))
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
        return Some(time.naive_utc());
    }
    // Flask's default JSON encoding of datetimes
    if let Ok(time) = DateTime::parse_from_rfc2822(raw) {
        return Some(time.naive_utc());
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
    ] {
        if let Ok(time) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(time);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
