//! Data Transfer Objects for API requests and responses

use ledger_client::LedgerStatus;
use routing::{PoolInfo, TokenWithMetadata};
use serde::{Deserialize, Serialize};
use swapgraph_core::{AssetId, AssetMetadata};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger: Option<LedgerStatus>,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ledger: None,
        }
    }
}

/// Direct pool partners of one asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectedTokensResponse {
    pub asset_id: AssetId,
    pub tokens: Vec<AssetId>,
    pub count: usize,
}

/// Assets reachable from one asset through chained swaps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwappableTokensResponse {
    pub asset_id: AssetId,
    pub max_depth: usize,
    pub tokens: Vec<AssetId>,
    pub count: usize,
}

/// Query string for the metadata endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataQuery {
    /// Holder whose balances are joined in
    pub address: Option<String>,
}

/// Reachable assets with display metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwappableMetadataResponse {
    pub asset_id: AssetId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub tokens: Vec<TokenWithMetadata>,
    pub count: usize,
}

/// Query string for path search
#[derive(Debug, Clone, Deserialize)]
pub struct PathsQuery {
    pub from: u64,
    pub to: u64,
    /// Node-count bound; the configured bound when absent
    pub max_length: Option<usize>,
}

/// Swap routes between two assets, shortest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapPathsResponse {
    pub from: AssetId,
    pub to: AssetId,
    pub max_length: usize,
    pub paths: Vec<Vec<AssetId>>,
    pub count: usize,
}

/// One pool with metadata for both assets and its LP token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolInfoDto {
    pub pool_address: String,
    pub lp_asset_id: AssetId,
    pub asset_a: AssetMetadata,
    pub asset_b: AssetMetadata,
    pub lp_asset: AssetMetadata,
}

impl From<PoolInfo> for PoolInfoDto {
    fn from(info: PoolInfo) -> Self {
        Self {
            pool_address: info.pool.pool_address.as_str().to_string(),
            lp_asset_id: info.pool.lp_asset_id,
            asset_a: info.asset_a,
            asset_b: info.asset_b,
            lp_asset: info.lp_asset,
        }
    }
}

/// Generic API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("internal_error", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("not_found", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("bad_request", message)
    }
}
