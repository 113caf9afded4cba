//! Normalization of untyped transaction rows

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{DnaError, Result, Stage};
use crate::models::{CustomerId, RawTransaction, Transaction};

/// Naive layouts accepted after RFC 3339; interpreted as UTC
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a timestamp string into UTC.
///
/// RFC 3339 input keeps its offset and is converted; naive input is taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Interpret a raw customer id. Only integers and strings are ids.
pub fn parse_customer_id(raw: &serde_json::Value) -> Option<CustomerId> {
    match raw {
        serde_json::Value::Number(_) | serde_json::Value::String(_) => {
            serde_json::from_value(raw.clone()).ok()
        }
        _ => None,
    }
}

/// Convert raw rows into transactions.
///
/// A present but unsupported customer id or unparseable timestamp aborts the
/// batch. Missing values are passed on as `None` for the daily aggregator to
/// reject.
pub fn normalize_transactions(raw: Vec<RawTransaction>) -> Result<Vec<Transaction>> {
    let mut out = Vec::with_capacity(raw.len());

    for (row, record) in raw.into_iter().enumerate() {
        let customer_id = match &record.customer_id {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => Some(parse_customer_id(value).ok_or_else(|| {
                DnaError::validation(
                    Stage::Ingestion,
                    format!("row {}: customer_id must be an integer or string", row),
                )
                .with_customer(value)
            })?),
        };

        let timestamp = match record.timestamp.as_deref() {
            None => None,
            Some(text) => {
                let parsed = parse_timestamp(text).ok_or_else(|| {
                    let err = DnaError::validation(
                        Stage::Ingestion,
                        format!("row {}: unparseable timestamp", row),
                    )
                    .with_timestamp(format!("'{}'", text));
                    match &customer_id {
                        Some(customer) => err.with_customer(customer),
                        None => err,
                    }
                })?;
                Some(parsed)
            }
        };

        out.push(Transaction {
            customer_id,
            timestamp,
            order_id: record.order_id,
            amount: record.amount,
            quantity: record.quantity,
        });
    }

    tracing::debug!("Normalized {} transaction rows", out.len());

    Ok(out)
}
