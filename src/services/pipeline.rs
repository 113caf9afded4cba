use crate::config::CalendarPolicy;
use crate::error::Result;
use crate::models::{IptRecord, Transaction};
use crate::services::daily_aggregator::compute_daily_records_with_policy;
use crate::services::ipt::compute_ipt;

/// Daily aggregation followed by IPT differencing, UTC calendar days
pub fn compute_ipt_pipeline(transactions: &[Transaction]) -> Result<Vec<IptRecord>> {
    compute_ipt_pipeline_with_policy(transactions, &CalendarPolicy::utc())
}

/// Daily aggregation followed by IPT differencing. Stage errors are returned as-is.
pub fn compute_ipt_pipeline_with_policy(
    transactions: &[Transaction],
    policy: &CalendarPolicy,
) -> Result<Vec<IptRecord>> {
    let daily = compute_daily_records_with_policy(transactions, policy)?;
    let ipt = compute_ipt(&daily)?;

    tracing::info!(
        transactions = transactions.len(),
        daily_records = daily.len(),
        ipt_records = ipt.len(),
        "IPT pipeline complete"
    );

    Ok(ipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Stage;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_pipeline_fails_fast_on_bad_record() {
        let mut bad = Transaction::new("X", Utc.with_ymd_and_hms(2021, 1, 1, 8, 0, 0).unwrap());
        bad.customer_id = None;

        let err = compute_ipt_pipeline(&[bad]).unwrap_err();
        assert_eq!(err.stage(), Some(Stage::DailyAggregation));
    }

    #[test]
    fn test_pipeline_single_transaction() {
        let tx = Transaction::new(7i64, Utc.with_ymd_and_hms(2021, 3, 1, 8, 0, 0).unwrap());

        let ipt = compute_ipt_pipeline(&[tx]).unwrap();

        assert_eq!(ipt.len(), 1);
        assert_eq!(ipt[0].ipt_days, None);
    }
}
