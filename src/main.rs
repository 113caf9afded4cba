use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use customer_dna_backend::config::AppConfig;
use customer_dna_backend::handlers;
use customer_dna_backend::jobs::ipt_refresh::start_ipt_refresh_job;
use customer_dna_backend::sources::{SqlTransactionSource, TransactionSource};
use customer_dna_backend::AppState;

#[tokio::main]
async fn main() {
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

    let config = AppConfig::from_env().expect("Invalid configuration");
    let database_url = config.database_url.clone().expect("DATABASE_URL must be set");

    // Connect to database
    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    // Run migrations
    tracing::info!("Running migrations...");
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let source: Arc<dyn TransactionSource> = Arc::new(SqlTransactionSource::new(db.clone()));

    if config.ipt_refresh_interval_secs > 0 {
        start_ipt_refresh_job(
            db.clone(),
            source.clone(),
            config.calendar,
            config.ipt_refresh_interval_secs,
        )
        .await;
    } else {
        tracing::info!("IPT refresh job disabled");
    }

    let state = AppState {
        source,
        calendar: config.calendar,
    };

    let app = handlers::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!(
        "Server listening on {} (calendar offset {})",
        config.bind_addr,
        config.calendar.offset()
    );

    handlers::serve(listener, app, handlers::shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server stopped");
}
