use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::customer::CustomerId;

/// Inter-purchase time for one customer day.
///
/// `ipt_days` is `None` on the customer's first purchase day. A value of zero
/// would suggest a same-day repeat purchase, which cannot happen here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IptRecord {
    pub customer_id: CustomerId,
    pub calendar_day: NaiveDate,
    pub first_time_by_date: DateTime<Utc>,
    pub ipt_days: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IptSummary {
    pub customers: usize,
    pub records: usize,
    /// Mean over non-null `ipt_days`; `None` when no customer has a repeat day
    pub mean_ipt_days: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IptListResponse {
    pub summary: IptSummary,
    pub records: Vec<IptRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerIptResponse {
    pub customer_id: CustomerId,
    pub records: Vec<IptRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDailyResponse {
    pub customer_id: CustomerId,
    pub records: Vec<super::daily_record::DailyRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
