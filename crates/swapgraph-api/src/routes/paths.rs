//! Swap path search endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use swapgraph_core::{AssetId, ResolverError};

use super::resolver_error_to_api;
use crate::dto::{ApiError, PathsQuery, SwapPathsResponse};
use crate::AppState;

/// Largest node-count bound a caller may request
pub const MAX_REQUESTED_PATH_LENGTH: usize = 10;

/// GET /paths?from=&to=&max_length= - Simple swap routes between two assets
pub async fn get_paths(
    State(state): State<AppState>,
    Query(query): Query<PathsQuery>,
) -> Result<Json<SwapPathsResponse>, (StatusCode, Json<ApiError>)> {
    let resolver = state.resolver();
    let max_length = query
        .max_length
        .unwrap_or(resolver.config().max_path_length);

    if max_length == 0 || max_length > MAX_REQUESTED_PATH_LENGTH {
        return Err(resolver_error_to_api(ResolverError::InvalidRequest {
            message: format!(
                "max_length must be between 1 and {}",
                MAX_REQUESTED_PATH_LENGTH
            ),
        }));
    }

    let (from, to) = (AssetId(query.from), AssetId(query.to));
    let paths = resolver
        .swap_paths_within(from, to, max_length)
        .await
        .map_err(resolver_error_to_api)?;

    let count = paths.len();
    Ok(Json(SwapPathsResponse {
        from,
        to,
        max_length,
        paths,
        count,
    }))
}
