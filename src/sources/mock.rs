use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::TransactionSource;
use crate::error::{DnaError, Result};
use crate::models::Transaction;

/// Scripted source for tests: returns fixed data or a fixed failure and
/// counts how often it was asked
#[derive(Debug)]
pub struct MockTransactionSource {
    response: std::result::Result<Vec<Transaction>, String>,
    calls: AtomicUsize,
}

impl MockTransactionSource {
    pub fn returning(transactions: Vec<Transaction>) -> Self {
        Self {
            response: Ok(transactions),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionSource for MockTransactionSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_transactions(&self) -> Result<Vec<Transaction>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(transactions) => Ok(transactions.clone()),
            Err(message) => Err(DnaError::source_failure(self.name(), message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counts_calls() {
        let source = MockTransactionSource::returning(vec![]);
        source.fetch_transactions().await.unwrap();
        source.fetch_transactions().await.unwrap();
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_failing() {
        let source = MockTransactionSource::failing("boom");
        let err = source.fetch_transactions().await.unwrap_err();
        assert!(matches!(err, DnaError::Source { .. }));
        assert!(err.to_string().contains("boom"));
    }
}
