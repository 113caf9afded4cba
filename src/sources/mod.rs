//! Transaction sources
//!
//! The pipeline only needs something that can enumerate transactions. Each
//! backing store gets its own adapter behind [`TransactionSource`].

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CustomerId, Transaction};

pub mod memory;
pub mod mock;
pub mod sql;

pub use memory::InMemoryTransactionSource;
pub use mock::MockTransactionSource;
pub use sql::SqlTransactionSource;

#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Short name used in logs and error messages
    fn name(&self) -> &str;

    async fn fetch_transactions(&self) -> Result<Vec<Transaction>>;

    /// Transactions of a single customer. The default filters the full fetch;
    /// adapters with an index should override it.
    async fn fetch_customer_transactions(&self, customer_id: &CustomerId) -> Result<Vec<Transaction>> {
        let wanted = customer_id.clone().canonical();
        let all = self.fetch_transactions().await?;
        Ok(all
            .into_iter()
            .filter(|tx| {
                tx.customer_id.clone().map(CustomerId::canonical).as_ref() == Some(&wanted)
            })
            .collect())
    }
}
