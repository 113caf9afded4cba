//! Deterministic sample transactions for development databases and demos

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::config::Environment;
use crate::error::{DnaError, Result};
use crate::models::{CustomerId, Transaction};

#[derive(Debug, Clone)]
pub struct SampleDataConfig {
    pub customers: usize,
    /// Length of the simulated period in days
    pub days: u32,
    /// Chance that a customer buys on any given day
    pub purchase_probability: f64,
    pub max_orders_per_day: u32,
    pub start: DateTime<Utc>,
    pub seed: u64,
}

impl Default for SampleDataConfig {
    fn default() -> Self {
        Self {
            customers: 100,
            days: 90,
            purchase_probability: 0.15,
            max_orders_per_day: 3,
            start: Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).single().unwrap_or_default(),
            seed: 42,
        }
    }
}

/// Generate sample transactions. Refuses to run in production.
///
/// Same config and seed always produce the same transactions.
pub fn generate_transactions(
    environment: &Environment,
    config: &SampleDataConfig,
) -> Result<Vec<Transaction>> {
    if environment.is_production {
        tracing::warn!("Refusing to generate sample transactions in production");
        return Err(DnaError::ProductionEnvironment);
    }

    if !(0.0..=1.0).contains(&config.purchase_probability) {
        return Err(DnaError::Config(format!(
            "purchase_probability must be within 0..=1, got {}",
            config.purchase_probability
        )));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let max_orders = config.max_orders_per_day.max(1);
    let mut transactions = Vec::new();
    let mut order_seq: u64 = 0;

    for customer in 0..config.customers {
        let customer_id = CustomerId::Int(customer as i64 + 1);

        for day in 0..config.days {
            if !rng.gen_bool(config.purchase_probability) {
                continue;
            }

            let day_start = config.start + Duration::days(day as i64);
            let orders = rng.gen_range(1..=max_orders);

            for _ in 0..orders {
                order_seq += 1;
                let offset = Duration::seconds(rng.gen_range(0..86_400));
                // Amount in cents, 5.00 to 500.00
                let amount = Decimal::new(rng.gen_range(500..=50_000), 2);
                let quantity = rng.gen_range(1..=5);

                transactions.push(
                    Transaction::new(customer_id.clone(), day_start + offset).with_order(
                        format!("SO-{:08}", order_seq),
                        amount,
                        quantity,
                    ),
                );
            }
        }
    }

    tracing::info!(
        customers = config.customers,
        days = config.days,
        transactions = transactions.len(),
        "Generated sample transactions"
    );

    Ok(transactions)
}
