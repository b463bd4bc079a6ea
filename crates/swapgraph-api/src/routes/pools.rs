//! Pool lookup endpoint

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use swapgraph_core::AssetId;

use super::resolver_error_to_api;
use crate::dto::{ApiError, PoolInfoDto};
use crate::AppState;

/// GET /pools/:asset_a/:asset_b - The pool for a pair, in either order
pub async fn get_pool(
    State(state): State<AppState>,
    Path((asset_a, asset_b)): Path<(u64, u64)>,
) -> Result<Json<PoolInfoDto>, (StatusCode, Json<ApiError>)> {
    let info = state
        .resolver()
        .pool_info(AssetId(asset_a), AssetId(asset_b))
        .await
        .map_err(resolver_error_to_api)?;

    Ok(Json(info.into()))
}
