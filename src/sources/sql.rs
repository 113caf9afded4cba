use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder};

use super::TransactionSource;
use crate::entities::{prelude::Transactions, transactions};
use crate::error::Result;
use crate::models::{CustomerId, Transaction};

/// Reads the `transactions` table through SeaORM
pub struct SqlTransactionSource {
    db: DatabaseConnection,
}

impl SqlTransactionSource {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionSource for SqlTransactionSource {
    fn name(&self) -> &str {
        "sql"
    }

    async fn fetch_transactions(&self) -> Result<Vec<Transaction>> {
        let rows = Transactions::find()
            .order_by(transactions::Column::OrderedAt, Order::Asc)
            .all(&self.db)
            .await?;

        tracing::debug!("Fetched {} transaction rows", rows.len());

        Ok(rows.into_iter().map(to_transaction).collect())
    }

    async fn fetch_customer_transactions(&self, customer_id: &CustomerId) -> Result<Vec<Transaction>> {
        let rows = Transactions::find()
            .filter(transactions::Column::CustomerId.eq(customer_id.to_string()))
            .order_by(transactions::Column::OrderedAt, Order::Asc)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(to_transaction).collect())
    }
}

fn to_transaction(row: transactions::Model) -> Transaction {
    Transaction {
        customer_id: row.customer_id.as_deref().map(CustomerId::from_db),
        timestamp: row.ordered_at.map(|ts| ts.with_timezone(&Utc)),
        order_id: row.order_id,
        amount: row.amount,
        quantity: row.quantity,
    }
}
