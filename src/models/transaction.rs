use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::customer::CustomerId;

/// A purchase event as handed to the pipeline.
///
/// `customer_id` and `timestamp` are optional here because upstream data can
/// carry nulls; the daily aggregator rejects such records. The remaining
/// business fields are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub customer_id: Option<CustomerId>,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub quantity: Option<i32>,
}

impl Transaction {
    pub fn new(customer_id: impl Into<CustomerId>, timestamp: DateTime<Utc>) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
            timestamp: Some(timestamp),
            order_id: None,
            amount: None,
            quantity: None,
        }
    }

    pub fn with_order(mut self, order_id: impl Into<String>, amount: Decimal, quantity: i32) -> Self {
        self.order_id = Some(order_id.into());
        self.amount = Some(amount);
        self.quantity = Some(quantity);
        self
    }
}

/// Untyped transaction row, e.g. from a JSON export.
/// Customer ids and timestamps are checked during ingestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTransaction {
    #[serde(default)]
    pub customer_id: Option<serde_json::Value>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub quantity: Option<i32>,
}
