use sea_orm::{Database, EntityTrait, Set};
use sea_orm_migration::MigratorTrait;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use customer_dna_backend::config::Environment;
use customer_dna_backend::entities::{prelude::Transactions, transactions};
use customer_dna_backend::services::sample_data::{SampleDataConfig, generate_transactions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,customer_dna_backend=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Optional args: <customers> <days> <seed>
    let args: Vec<String> = env::args().collect();
    let mut config = SampleDataConfig::default();
    if let Some(customers) = args.get(1) {
        config.customers = customers.parse().map_err(|_| {
            eprintln!("Usage: cargo run --bin generate_sample_transactions [customers] [days] [seed]");
            "customers must be a number"
        })?;
    }
    if let Some(days) = args.get(2) {
        config.days = days.parse().map_err(|_| "days must be a number")?;
    }
    if let Some(seed) = args.get(3) {
        config.seed = seed.parse().map_err(|_| "seed must be a number")?;
    }

    let environment = Environment::from_env();
    let sample = generate_transactions(&environment, &config)?;

    // Connect to database
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    migration::Migrator::up(&db, None).await?;

    let mut inserted = 0;
    for chunk in sample.chunks(1000) {
        let rows: Vec<transactions::ActiveModel> = chunk
            .iter()
            .map(|tx| transactions::ActiveModel {
                customer_id: Set(tx.customer_id.as_ref().map(|c| c.to_string())),
                ordered_at: Set(tx.timestamp.map(|ts| ts.fixed_offset())),
                order_id: Set(tx.order_id.clone()),
                amount: Set(tx.amount),
                quantity: Set(tx.quantity),
                ..Default::default()
            })
            .collect();

        Transactions::insert_many(rows).exec(&db).await?;
        inserted += chunk.len();
    }

    tracing::info!("Inserted {} sample transactions", inserted);

    Ok(())
}
