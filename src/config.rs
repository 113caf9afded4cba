// src/config.rs

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeZone, Utc};
use std::env;

use crate::error::{DnaError, Result};

/// Deployment environment, passed explicitly to anything that behaves
/// differently in production (e.g. the sample data generator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Environment {
    pub is_production: bool,
}

impl Environment {
    pub fn production() -> Self {
        Self { is_production: true }
    }

    pub fn development() -> Self {
        Self { is_production: false }
    }

    /// Read `APP_ENV`; `production` or `prod` (any case) means production
    pub fn from_env() -> Self {
        let is_production = env::var("APP_ENV")
            .map(|v| matches!(v.to_lowercase().as_str(), "production" | "prod"))
            .unwrap_or(false);
        Self { is_production }
    }
}

/// Timezone policy used to truncate timestamps to calendar days.
///
/// A fixed offset applied uniformly to every record of a run. Fixed offsets
/// have no daylight-saving transitions, so every calendar day is exactly
/// 24 hours long under this policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarPolicy {
    offset: FixedOffset,
}

impl Default for CalendarPolicy {
    fn default() -> Self {
        Self::utc()
    }
}

impl CalendarPolicy {
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }

    pub fn fixed(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Offset in minutes east of UTC, within ±23:59
    pub fn from_offset_minutes(minutes: i32) -> Result<Self> {
        let offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                DnaError::Config(format!("UTC offset out of range: {} minutes", minutes))
            })?;
        Ok(Self { offset })
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Calendar day of `timestamp` under this policy
    pub fn calendar_day<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> NaiveDate {
        timestamp.with_timezone(&self.offset).date_naive()
    }
}

/// Process configuration for the binaries
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub bind_addr: String,
    pub calendar: CalendarPolicy,
    /// Seconds between IPT refresh runs; 0 disables the job
    pub ipt_refresh_interval_secs: u64,
    pub environment: Environment,
}

impl AppConfig {
    /// Load from process environment. Call `dotenvy::dotenv()` first.
    pub fn from_env() -> Result<Self> {
        let offset_minutes = parse_var::<i32>("CALENDAR_UTC_OFFSET_MINUTES")?.unwrap_or(0);
        let refresh = parse_var::<u64>("IPT_REFRESH_INTERVAL_SECS")?.unwrap_or(3600);

        Ok(Self {
            database_url: env::var("DATABASE_URL").ok(),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            calendar: CalendarPolicy::from_offset_minutes(offset_minutes)?,
            ipt_refresh_interval_secs: refresh,
            environment: Environment::from_env(),
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| DnaError::Config(format!("{} is not a valid number: '{}'", name, raw))),
        _ => Ok(None),
    }
}
