use async_trait::async_trait;

use super::TransactionSource;
use crate::error::Result;
use crate::models::{RawTransaction, Transaction};
use crate::services::ingest::normalize_transactions;

/// Transactions held in memory, e.g. loaded from a JSON export
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransactionSource {
    transactions: Vec<Transaction>,
}

impl InMemoryTransactionSource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Build from raw rows, parsing their timestamps
    pub fn from_raw(raw: Vec<RawTransaction>) -> Result<Self> {
        Ok(Self::new(normalize_transactions(raw)?))
    }

    /// Build from a JSON array of raw rows
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawTransaction> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }
}

#[async_trait]
impl TransactionSource for InMemoryTransactionSource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }
}
