use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::customer::CustomerId;

/// Earliest purchase time of one customer on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub customer_id: CustomerId,
    pub calendar_day: NaiveDate,
    pub first_time_by_date: DateTime<Utc>,
}
