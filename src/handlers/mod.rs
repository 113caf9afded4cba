use std::future::Future;

use axum::{Json, Router, http::StatusCode, routing::get};
use tokio::net::TcpListener;

use crate::AppState;
use crate::error::DnaError;
use crate::models::ipt::ErrorResponse;

pub mod ipt;

/// Routes of the reporting API
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello_customer_dna))
        .route("/api/ipt", get(ipt::get_all_ipt))
        .route("/api/customers/{customer_id}/daily", get(ipt::get_customer_daily))
        .route("/api/customers/{customer_id}/ipt", get(ipt::get_customer_ipt))
        .with_state(state)
}

/// Serve `app` until `shutdown` resolves, then drain in-flight requests
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await
}

/// Resolves on ctrl-c. Every caller gets its own notification, so the
/// server and the refresh job stop on the same signal.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server");
}

async fn hello_customer_dna() -> &'static str {
    "Hello from Customer DNA Backend!"
}

pub(crate) type ApiError = (StatusCode, Json<ErrorResponse>);

/// Validation failures are the caller's data problem (422); everything else is ours (500)
pub(crate) fn api_error(err: DnaError) -> ApiError {
    let status = if err.is_validation() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    if status.is_server_error() {
        tracing::error!("Request failed: {}", err);
    } else {
        tracing::warn!("Rejected input: {}", err);
    }

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
