//! Daily aggregation: one record per (customer, calendar day) holding the
//! earliest transaction timestamp of that day.

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::CalendarPolicy;
use crate::error::{DnaError, Result, Stage};
use crate::models::{CustomerId, DailyRecord, Transaction};
use crate::services::group_reduce::group_reduce;

/// Collapse transactions into daily records using UTC calendar days
pub fn compute_daily_records(transactions: &[Transaction]) -> Result<Vec<DailyRecord>> {
    compute_daily_records_with_policy(transactions, &CalendarPolicy::utc())
}

/// Collapse transactions into daily records under the given calendar policy.
///
/// Output is sorted by customer, then calendar day. Any transaction without a
/// customer id or timestamp fails the whole batch; nothing partial is returned.
pub fn compute_daily_records_with_policy(
    transactions: &[Transaction],
    policy: &CalendarPolicy,
) -> Result<Vec<DailyRecord>> {
    if transactions.is_empty() {
        tracing::info!("No transactions to aggregate, returning empty daily records");
        return Ok(Vec::new());
    }

    let groups = group_reduce(
        transactions.iter().enumerate(),
        |(row, tx)| daily_key(*row, tx, policy),
        |(_, tx)| tx.timestamp,
        |first, (_, tx)| {
            if tx.timestamp < *first {
                *first = tx.timestamp;
            }
        },
    )?;

    let records: Vec<DailyRecord> = groups
        .into_iter()
        .filter_map(|((customer_id, calendar_day), first)| {
            // Keys are only produced for transactions with a timestamp
            first.map(|first_time_by_date| DailyRecord {
                customer_id,
                calendar_day,
                first_time_by_date,
            })
        })
        .collect();

    tracing::debug!(
        "Aggregated {} transactions into {} daily records",
        transactions.len(),
        records.len()
    );

    Ok(records)
}

fn daily_key(
    row: usize,
    tx: &Transaction,
    policy: &CalendarPolicy,
) -> Result<(CustomerId, NaiveDate)> {
    let customer_id = tx.customer_id.clone().map(CustomerId::canonical).ok_or_else(|| {
        let err = DnaError::validation(
            Stage::DailyAggregation,
            format!("transaction {} has no customer_id", row),
        );
        match tx.timestamp {
            Some(ts) => err.with_timestamp(ts.to_rfc3339()),
            None => err,
        }
    })?;

    let timestamp: DateTime<Utc> = tx.timestamp.ok_or_else(|| {
        DnaError::validation(
            Stage::DailyAggregation,
            format!("transaction {} has no timestamp", row),
        )
        .with_customer(&customer_id)
    })?;

    Ok((customer_id, policy.calendar_day(&timestamp)))
}
