//! Persistence of computed IPT series

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{DatabaseConnection, EntityTrait, Set, TransactionTrait};

use crate::entities::{customer_ipt, prelude::CustomerIpt};
use crate::error::Result;
use crate::models::IptRecord;

/// Rows per INSERT statement
const INSERT_BATCH_SIZE: usize = 1000;

/// Replace the whole `customer_ipt` table with `records` in one transaction.
///
/// Returns the number of rows written.
pub async fn replace_customer_ipt(db: &DatabaseConnection, records: &[IptRecord]) -> Result<usize> {
    let computed_at = Utc::now().fixed_offset();
    let txn = db.begin().await?;

    let deleted = CustomerIpt::delete_many().exec(&txn).await?;
    tracing::debug!("Cleared {} previous customer_ipt rows", deleted.rows_affected);

    for chunk in records.chunks(INSERT_BATCH_SIZE) {
        let models: Vec<customer_ipt::ActiveModel> = chunk
            .iter()
            .map(|r| to_active_model(r, computed_at))
            .collect();

        CustomerIpt::insert_many(models).exec(&txn).await?;
    }

    txn.commit().await?;

    tracing::info!("Stored {} customer IPT rows", records.len());

    Ok(records.len())
}

fn to_active_model(record: &IptRecord, computed_at: DateTime<FixedOffset>) -> customer_ipt::ActiveModel {
    customer_ipt::ActiveModel {
        customer_id: Set(record.customer_id.to_string()),
        calendar_day: Set(record.calendar_day),
        first_time_by_date: Set(record.first_time_by_date.fixed_offset()),
        ipt_days: Set(record.ipt_days),
        computed_at: Set(computed_at),
    }
}
