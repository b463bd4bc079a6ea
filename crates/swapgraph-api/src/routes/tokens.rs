//! Token connectivity endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use swapgraph_core::{Address, AssetId};

use super::resolver_error_to_api;
use crate::dto::{
    ApiError, ConnectedTokensResponse, MetadataQuery, SwappableMetadataResponse,
    SwappableTokensResponse,
};
use crate::AppState;

/// Create token routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:asset_id/connected", get(get_connected))
        .route("/:asset_id/swappable", get(get_swappable))
        .route("/:asset_id/swappable/metadata", get(get_swappable_metadata))
}

/// GET /tokens/:asset_id/connected - Assets sharing a pool with this one
async fn get_connected(
    State(state): State<AppState>,
    Path(asset_id): Path<u64>,
) -> Result<Json<ConnectedTokensResponse>, (StatusCode, Json<ApiError>)> {
    let asset_id = AssetId(asset_id);
    let tokens = state
        .resolver()
        .connected_tokens(asset_id)
        .await
        .map_err(resolver_error_to_api)?;

    let count = tokens.len();
    Ok(Json(ConnectedTokensResponse {
        asset_id,
        tokens,
        count,
    }))
}

/// GET /tokens/:asset_id/swappable - Assets reachable through chained swaps
async fn get_swappable(
    State(state): State<AppState>,
    Path(asset_id): Path<u64>,
) -> Result<Json<SwappableTokensResponse>, (StatusCode, Json<ApiError>)> {
    let asset_id = AssetId(asset_id);
    let resolver = state.resolver();
    let tokens = resolver
        .all_swappable_tokens(asset_id)
        .await
        .map_err(resolver_error_to_api)?;

    let count = tokens.len();
    Ok(Json(SwappableTokensResponse {
        asset_id,
        max_depth: resolver.config().max_depth,
        tokens,
        count,
    }))
}

/// GET /tokens/:asset_id/swappable/metadata?address= - Reachable assets with metadata
async fn get_swappable_metadata(
    State(state): State<AppState>,
    Path(asset_id): Path<u64>,
    Query(query): Query<MetadataQuery>,
) -> Result<Json<SwappableMetadataResponse>, (StatusCode, Json<ApiError>)> {
    let asset_id = AssetId(asset_id);
    let address = query
        .address
        .filter(|a| !a.trim().is_empty())
        .map(Address::new);

    let tokens = state
        .resolver()
        .swappable_tokens_with_metadata(asset_id, address.as_ref())
        .await
        .map_err(resolver_error_to_api)?;

    let count = tokens.len();
    Ok(Json(SwappableMetadataResponse {
        asset_id,
        address: address.map(|a| a.as_str().to_string()),
        tokens,
        count,
    }))
}
