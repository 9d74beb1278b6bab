//! HTTP transport shell.
//!
//! Handlers only parse request bodies, call the service layer, and translate
//! errors into status codes: validation failures are 400, unknown license ids
//! are 404, everything else is 500. All business logic lives below this
//! module.

use crate::config::DashboardConfig;
use crate::core::activity::{self, RecentPayment};
use crate::core::metrics::{self, DashboardMetrics};
use crate::core::ranking::{self, CompanyTotal};
use crate::core::rollup::{self, MonthlyTotal, PeriodTotal};
use crate::entities::{Contract, ContractInput, License, LicenseDraft, LicensePatch};
use crate::errors::Error;
use crate::service;
use crate::store::{ContractStore, LicenseStore};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Append-only contract store
    pub contracts: Arc<ContractStore>,
    /// CRUD license store
    pub licenses: Arc<LicenseStore>,
    /// Aggregation parameters for the dashboard report
    pub dashboard: DashboardConfig,
}

/// Builds the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/contracts", get(list_contracts))
        .route("/api/contracts/add", post(add_contract))
        .route("/api/licenses", get(list_licenses).post(add_license))
        .route(
            "/api/licenses/:id",
            put(update_license).delete(delete_license),
        )
        .route("/api/dashboard", get(dashboard_report))
        .with_state(state)
}

/// Everything the dashboard page needs in one response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    metrics: DashboardMetrics,
    monthly_totals: Vec<MonthlyTotal>,
    quarterly_totals: Vec<PeriodTotal>,
    yearly_totals: Vec<PeriodTotal>,
    top_companies: Vec<CompanyTotal>,
    recent_activity: Vec<RecentPayment>,
}

/// Wrapper translating crate errors into HTTP responses.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::Validation { message, .. } => (StatusCode::BAD_REQUEST, message.clone()),
            Error::LicenseNotFound { .. } => (StatusCode::NOT_FOUND, self.0.to_string()),
            other => {
                error!(error = %other, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn list_contracts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Contract>>, ApiError> {
    Ok(Json(
        service::contracts::list_contracts(&state.contracts).await?,
    ))
}

async fn add_contract(
    State(state): State<AppState>,
    Json(input): Json<ContractInput>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let contract = service::contracts::create_contract(&state.contracts, input).await?;
    Ok(Json(json!({ "success": true, "contract": contract })))
}

async fn list_licenses(State(state): State<AppState>) -> Result<Json<Vec<License>>, ApiError> {
    Ok(Json(
        service::licenses::list_licenses(&state.licenses).await?,
    ))
}

async fn add_license(
    State(state): State<AppState>,
    Json(draft): Json<LicenseDraft>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let license = service::licenses::create_license(&state.licenses, draft).await?;
    Ok(Json(json!({ "success": true, "license": license })))
}

async fn update_license(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<LicensePatch>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let license = service::licenses::update_license(&state.licenses, &id, patch).await?;
    Ok(Json(json!({ "success": true, "license": license })))
}

async fn delete_license(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    service::licenses::delete_license(&state.licenses, &id).await?;
    Ok(Json(json!({ "success": true })))
}

/// Composes the full dashboard report from a single read of the contract
/// store, evaluated at the current date.
async fn dashboard_report(
    State(state): State<AppState>,
) -> Result<Json<DashboardReport>, ApiError> {
    let contracts = service::contracts::list_contracts(&state.contracts).await?;
    let today = Utc::now().date_naive();
    let params = &state.dashboard;

    let monthly_totals = rollup::monthly_totals(
        &contracts,
        params.rollup_start_year,
        params.rollup_end_year,
    );

    Ok(Json(DashboardReport {
        metrics: metrics::calculate_metrics(&contracts, today, params.target_year),
        quarterly_totals: rollup::quarterly_totals(&monthly_totals, today),
        yearly_totals: rollup::yearly_totals(&monthly_totals, today),
        monthly_totals,
        top_companies: ranking::top_companies(&contracts, today, params.top_limit),
        recent_activity: activity::recent_activity(
            &contracts,
            today,
            params.recent_past_days,
            params.recent_future_days,
        ),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = ApiError(Error::Validation {
            field: "company",
            message: "Company name is required".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError(Error::LicenseNotFound {
            id: "lic_0_missing".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_errors_map_to_500() {
        let response = ApiError(Error::StoreRead {
            path: "data/contracts.csv".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
