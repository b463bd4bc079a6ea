//! API route handlers

pub mod health;
pub mod paths;
pub mod pools;
pub mod tokens;

use axum::{http::StatusCode, routing::get, Json, Router};
use swapgraph_core::ResolverError;

use crate::dto::ApiError;
use crate::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/tokens", tokens::router())
        .route("/paths", get(paths::get_paths))
        .route("/pools/:asset_a/:asset_b", get(pools::get_pool))
        .with_state(state)
}

/// Convert ResolverError to API error response.
///
/// Upstream failures are logged in full and reported with a generic message.
pub(crate) fn resolver_error_to_api(error: ResolverError) -> (StatusCode, Json<ApiError>) {
    let status = match error.status_code() {
        400 => StatusCode::BAD_REQUEST,
        404 => StatusCode::NOT_FOUND,
        502 => StatusCode::BAD_GATEWAY,
        503 => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = match &error {
        ResolverError::Ledger(e) => {
            tracing::error!(error = %e, "Ledger query failed");
            "Failed to fetch from ledger".to_string()
        }
        other => other.to_string(),
    };

    (status, Json(ApiError::new(error.error_code(), message)))
}
