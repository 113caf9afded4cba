//! Error types for the customer DNA pipeline

use std::fmt;

use thiserror::Error;

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, DnaError>;

/// Pipeline stage that rejected the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Ingestion,
    DailyAggregation,
    IptDifferencing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Ingestion => "ingestion",
            Stage::DailyAggregation => "daily_aggregation",
            Stage::IptDifferencing => "ipt_differencing",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum DnaError {
    /// Malformed input record. Aborts the whole batch.
    #[error("validation failed in {stage}: {message}{}", context_suffix(.customer_id, .timestamp))]
    Validation {
        stage: Stage,
        message: String,
        customer_id: Option<String>,
        timestamp: Option<String>,
    },

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A transaction source failed for a reason other than the database
    #[error("transaction source '{source_name}' failed: {message}")]
    Source { source_name: String, message: String },

    #[error("sample data generation is disabled in production")]
    ProductionEnvironment,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

impl DnaError {
    pub fn validation(stage: Stage, message: impl Into<String>) -> Self {
        Self::Validation {
            stage,
            message: message.into(),
            customer_id: None,
            timestamp: None,
        }
    }

    /// Attach the offending customer id
    pub fn with_customer(mut self, customer: impl fmt::Display) -> Self {
        if let Self::Validation { customer_id, .. } = &mut self {
            *customer_id = Some(customer.to_string());
        }
        self
    }

    /// Attach the offending timestamp (raw text or formatted value)
    pub fn with_timestamp(mut self, value: impl fmt::Display) -> Self {
        if let Self::Validation { timestamp, .. } = &mut self {
            *timestamp = Some(value.to_string());
        }
        self
    }

    pub fn source_failure(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Stage of a validation failure, if this is one
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Validation { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

fn context_suffix(customer_id: &Option<String>, timestamp: &Option<String>) -> String {
    match (customer_id, timestamp) {
        (Some(c), Some(t)) => format!(" (customer_id={}, timestamp={})", c, t),
        (Some(c), None) => format!(" (customer_id={})", c),
        (None, Some(t)) => format!(" (timestamp={})", t),
        (None, None) => String::new(),
    }
}
