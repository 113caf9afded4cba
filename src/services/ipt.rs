//! Inter-purchase time: day delta between consecutive purchase days of a customer

use rayon::prelude::*;

use crate::error::{DnaError, Result, Stage};
use crate::models::{CustomerId, DailyRecord, IptRecord};
use crate::services::group_reduce::group_reduce;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Below this many customers partitions are differenced on the calling thread
const PARALLEL_THRESHOLD: usize = 64;

/// Compute IPT for every daily record.
///
/// Records may arrive in any order; each customer's partition is sorted by
/// calendar day before differencing. Output has one record per input record,
/// grouped by customer in ascending id order and sorted by day within each.
/// Two records for the same (customer, day) fail the whole batch.
pub fn compute_ipt(daily_records: &[DailyRecord]) -> Result<Vec<IptRecord>> {
    if daily_records.is_empty() {
        tracing::info!("No daily records to difference, returning empty IPT series");
        return Ok(Vec::new());
    }

    let partitions = group_reduce(
        daily_records.iter(),
        |r| Ok::<_, DnaError>(r.customer_id.clone().canonical()),
        |r| vec![r],
        |acc, r| acc.push(r),
    )?;

    let partitions: Vec<(CustomerId, Vec<&DailyRecord>)> = partitions.into_iter().collect();

    let series: Vec<Vec<IptRecord>> = if partitions.len() < PARALLEL_THRESHOLD {
        partitions
            .into_iter()
            .map(|(customer_id, records)| difference_customer(customer_id, records))
            .collect::<Result<_>>()?
    } else {
        partitions
            .into_par_iter()
            .map(|(customer_id, records)| difference_customer(customer_id, records))
            .collect::<Result<_>>()?
    };

    let out: Vec<IptRecord> = series.into_iter().flatten().collect();

    tracing::debug!(
        "Computed {} IPT records from {} daily records",
        out.len(),
        daily_records.len()
    );

    Ok(out)
}

fn difference_customer(
    customer_id: CustomerId,
    mut records: Vec<&DailyRecord>,
) -> Result<Vec<IptRecord>> {
    records.sort_by_key(|r| r.calendar_day);

    if let Some(pair) = records
        .windows(2)
        .find(|pair| pair[0].calendar_day == pair[1].calendar_day)
    {
        return Err(DnaError::validation(
            Stage::IptDifferencing,
            format!("duplicate calendar_day {}", pair[1].calendar_day),
        )
        .with_customer(&customer_id)
        .with_timestamp(pair[1].first_time_by_date.to_rfc3339()));
    }

    let mut out = Vec::with_capacity(records.len());
    let mut previous: Option<&DailyRecord> = None;

    for record in records {
        let ipt_days = previous.map(|prev| days_between(prev, record));
        out.push(IptRecord {
            customer_id: customer_id.clone(),
            calendar_day: record.calendar_day,
            first_time_by_date: record.first_time_by_date,
            ipt_days,
        });
        previous = Some(record);
    }

    Ok(out)
}

/// Fractional days from `prev` to `current`, millisecond resolution
fn days_between(prev: &DailyRecord, current: &DailyRecord) -> f64 {
    let delta = current.first_time_by_date - prev.first_time_by_date;
    delta.num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY
}

/// Mean of the non-null IPT values
pub fn mean_ipt_days(records: &[IptRecord]) -> Option<f64> {
    let values: Vec<f64> = records.iter().filter_map(|r| r.ipt_days).collect();

    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
