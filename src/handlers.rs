use crate::config::Config;
use crate::errors::AppError;
use crate::models::{
    AlertRequest, CustomerWithRisk, UpdateStatusRequest, UpdateStatusResponse,
};
use crate::risk::{compute_risk, exceeds_alert_threshold};
use crate::store::CustomerStore;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// In-memory customer collection.
    pub store: CustomerStore,
    /// Application configuration.
    pub config: Config,
}

/// Health check endpoint.
///
/// Returns the service status and version.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "credit-risk-api",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// GET /customers
///
/// Returns the full collection in insertion order, each record augmented
/// with its computed `riskScore`. Read-only: scores are derived per request
/// and never written back to the store.
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<CustomerWithRisk>> {
    let customers = state.store.list().await;
    tracing::info!("GET /customers - {} records", customers.len());

    let data = customers
        .into_iter()
        .map(|customer| {
            let risk_score = compute_risk(&customer);
            CustomerWithRisk {
                customer,
                risk_score,
            }
        })
        .collect();

    Json(data)
}

/// PUT /customers/:id/status
///
/// Overwrites the status of the matching customer in place and returns the
/// updated record. The new status content is not validated.
///
/// # Returns
///
/// * `Result<Json<UpdateStatusResponse>, AppError>` - The updated record, or
///   a 404 error when no customer matches the id.
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<UpdateStatusResponse>, AppError> {
    tracing::info!("PUT /customers/{}/status -> {:?}", id, req.status);

    let customer = state
        .store
        .update_status(&id, req.status)
        .await
        .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

    Ok(Json(UpdateStatusResponse {
        msg: "Status updated".to_string(),
        customer,
    }))
}

/// POST /alerts
///
/// Receives a high-risk alert notification. The caller-supplied score is
/// trusted verbatim and not recomputed from stored state; scores strictly
/// above the configured threshold emit a warning event. The request is
/// acknowledged in all cases, including absent fields.
pub async fn receive_alert(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AlertRequest>,
) -> Json<serde_json::Value> {
    if exceeds_alert_threshold(req.risk_score, state.config.alert_risk_threshold) {
        tracing::warn!(
            "ALERT: Customer {} is HIGH RISK (score {})",
            req.customer_id.as_deref().unwrap_or("unknown"),
            req.risk_score.unwrap_or_default(),
        );
    }

    Json(json!({ "msg": "Alert received" }))
}

/// Builds the application router with all API routes.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/customers", get(list_customers))
        .route("/customers/:id/status", put(update_status))
        .route("/alerts", post(receive_alert))
        .with_state(state)
}
