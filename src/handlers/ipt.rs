use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::{ApiError, api_error};
use crate::AppState;
use crate::models::CustomerId;
use crate::models::ipt::{
    CustomerDailyResponse, CustomerIptResponse, ErrorResponse, IptListResponse, IptSummary,
};
use crate::services::daily_aggregator::compute_daily_records_with_policy;
use crate::services::ipt::mean_ipt_days;
use crate::services::pipeline::compute_ipt_pipeline_with_policy;

pub async fn get_all_ipt(State(state): State<AppState>) -> Result<Json<IptListResponse>, ApiError> {
    let transactions = state.source.fetch_transactions().await.map_err(api_error)?;

    let records =
        compute_ipt_pipeline_with_policy(&transactions, &state.calendar).map_err(api_error)?;

    let mut customers: Vec<&CustomerId> = records.iter().map(|r| &r.customer_id).collect();
    customers.dedup();

    let summary = IptSummary {
        customers: customers.len(),
        records: records.len(),
        mean_ipt_days: mean_ipt_days(&records),
    };

    Ok(Json(IptListResponse { summary, records }))
}

pub async fn get_customer_ipt(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<CustomerIptResponse>, ApiError> {
    let customer_id = CustomerId::from_db(&customer_id);
    let transactions = state
        .source
        .fetch_customer_transactions(&customer_id)
        .await
        .map_err(api_error)?;

    if transactions.is_empty() {
        return Err(customer_not_found(&customer_id));
    }

    let records =
        compute_ipt_pipeline_with_policy(&transactions, &state.calendar).map_err(api_error)?;

    Ok(Json(CustomerIptResponse {
        customer_id,
        records,
    }))
}

pub async fn get_customer_daily(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<CustomerDailyResponse>, ApiError> {
    let customer_id = CustomerId::from_db(&customer_id);
    let transactions = state
        .source
        .fetch_customer_transactions(&customer_id)
        .await
        .map_err(api_error)?;

    if transactions.is_empty() {
        return Err(customer_not_found(&customer_id));
    }

    let records =
        compute_daily_records_with_policy(&transactions, &state.calendar).map_err(api_error)?;

    Ok(Json(CustomerDailyResponse {
        customer_id,
        records,
    }))
}

fn customer_not_found(customer_id: &CustomerId) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Customer {} has no transactions", customer_id),
        }),
    )
}
