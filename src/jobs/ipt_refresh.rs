//! IPT Refresh Job
//!
//! Periodically recomputes every customer's IPT series from the transaction
//! source and replaces the `customer_ipt` table.

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::time::{Duration, interval};
use tracing::{error, info};

use crate::config::CalendarPolicy;
use crate::error::Result;
use crate::models::IptRecord;
use crate::services::ipt_store::replace_customer_ipt;
use crate::services::pipeline::compute_ipt_pipeline_with_policy;
use crate::sources::TransactionSource;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct IptRefreshStats {
    pub transactions: usize,
    pub ipt_records: usize,
    pub stored: usize,
}

/// Start the IPT refresh job
///
/// Runs once immediately, then every `interval_secs`. A failed run is logged
/// and retried on the next tick. Stops on ctrl-c.
pub async fn start_ipt_refresh_job(
    db: DatabaseConnection,
    source: Arc<dyn TransactionSource>,
    policy: CalendarPolicy,
    interval_secs: u64,
) {
    tokio::spawn(async move {
        info!(
            interval_secs = interval_secs,
            source = source.name(),
            "IPT refresh job started"
        );

        // First tick completes immediately
        let mut interval = interval(Duration::from_secs(interval_secs.max(1)));
        // Held across ticks so a signal during a refresh is not missed
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown signal received, stopping IPT refresh job");
                    break;
                }
                _ = interval.tick() => {
                    match refresh_once(&db, source.as_ref(), &policy).await {
                        Ok(stats) => {
                            info!(
                                transactions = stats.transactions,
                                ipt_records = stats.ipt_records,
                                stored = stats.stored,
                                "IPT refresh completed"
                            );
                        }
                        Err(e) => {
                            error!(error = %e, "IPT refresh failed");
                        }
                    }
                }
            }
        }

        info!("IPT refresh job stopped");
    });
}

/// Fetch, compute and persist once
pub async fn refresh_once(
    db: &DatabaseConnection,
    source: &dyn TransactionSource,
    policy: &CalendarPolicy,
) -> Result<IptRefreshStats> {
    let (transactions, records) = fetch_and_compute(source, policy).await?;
    let stored = replace_customer_ipt(db, &records).await?;

    Ok(IptRefreshStats {
        transactions,
        ipt_records: records.len(),
        stored,
    })
}

/// Fetch all transactions and run the pipeline.
/// Returns the transaction count with the IPT records.
pub async fn fetch_and_compute(
    source: &dyn TransactionSource,
    policy: &CalendarPolicy,
) -> Result<(usize, Vec<IptRecord>)> {
    let transactions = source.fetch_transactions().await?;
    let records = compute_ipt_pipeline_with_policy(&transactions, policy)?;
    Ok((transactions.len(), records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DnaError;
    use crate::models::Transaction;
    use crate::sources::MockTransactionSource;
    use chrono::{TimeZone, Utc};
    use sea_orm::{DbBackend, MockDatabase};

    #[tokio::test]
    async fn test_fetch_and_compute() {
        let source = MockTransactionSource::returning(vec![
            Transaction::new("A", Utc.with_ymd_and_hms(2021, 1, 1, 8, 0, 0).unwrap()),
            Transaction::new("A", Utc.with_ymd_and_hms(2021, 1, 1, 9, 0, 0).unwrap()),
            Transaction::new("A", Utc.with_ymd_and_hms(2021, 1, 3, 8, 0, 0).unwrap()),
        ]);

        let (count, records) = fetch_and_compute(&source, &CalendarPolicy::utc()).await.unwrap();

        assert_eq!(count, 3);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].ipt_days, Some(2.0));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let source = MockTransactionSource::failing("db offline");

        let err = fetch_and_compute(&source, &CalendarPolicy::utc()).await.unwrap_err();
        assert!(matches!(err, DnaError::Source { .. }));
    }

    #[tokio::test]
    async fn test_refresh_writes_nothing_on_invalid_input() {
        let mut bad = Transaction::new("B", Utc.with_ymd_and_hms(2021, 1, 2, 8, 0, 0).unwrap());
        bad.customer_id = None;
        let source = MockTransactionSource::returning(vec![
            Transaction::new("A", Utc.with_ymd_and_hms(2021, 1, 1, 8, 0, 0).unwrap()),
            bad,
        ]);
        let db = MockDatabase::new(DbBackend::Postgres).into_connection();

        let err = refresh_once(&db, &source, &CalendarPolicy::utc()).await.unwrap_err();

        assert!(err.is_validation());
        assert!(db.into_transaction_log().is_empty());
    }
}
