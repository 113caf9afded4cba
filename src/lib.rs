// src/lib.rs

use std::sync::Arc;

use crate::config::CalendarPolicy;
use crate::sources::TransactionSource;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn TransactionSource>,
    pub calendar: CalendarPolicy,
}

pub mod entities {
    pub mod prelude;
    pub mod customer_ipt;
    pub mod transactions;
}

pub mod services {
    pub mod group_reduce;
    pub mod ingest;
    pub mod daily_aggregator;
    pub mod ipt;
    pub mod pipeline;
    pub mod sample_data;
    pub mod ipt_store;
}

pub mod config;
pub mod error;
pub mod models;
pub mod sources;
pub mod handlers;
pub mod jobs;

pub use error::{DnaError, Result};
pub use services::daily_aggregator::compute_daily_records;
pub use services::ipt::compute_ipt;
pub use services::pipeline::compute_ipt_pipeline;
