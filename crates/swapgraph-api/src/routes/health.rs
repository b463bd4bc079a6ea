//! Health check endpoint

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::AppState;

/// GET /health - Check API health and ledger reachability
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let ledger = match state.ledger_client() {
        Some(client) => Some(ledger_client::probe(client).await),
        None => None,
    };

    Json(HealthResponse {
        ledger,
        ..HealthResponse::default()
    })
}
