//! ledger-client: Access to the ledger indexer that stores pools and assets
//!
//! This crate defines the [`LedgerQuery`] seam the resolver depends on, a
//! cursor-following paginated collector, and a GraphQL indexer client with
//! per-request timeouts.

pub mod capabilities;
pub mod pagination;
pub mod queries;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use swapgraph_core::{
    AccountHolding, Address, AssetId, AssetMetadata, Cursor, EdgeFilter, LedgerConfig,
    LedgerError, Page, PoolEdge,
};

pub use capabilities::{probe, LedgerStatus};
pub use pagination::{collect_all_pages, collect_edges};

/// Result type for ledger client operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Read-only queries the resolver needs from the ledger
#[async_trait]
pub trait LedgerQuery: Send + Sync {
    /// One page of pool edges matching `filter`
    async fn query_edges(
        &self,
        filter: EdgeFilter,
        after: Option<Cursor>,
        first: u32,
    ) -> Result<Page<PoolEdge>>;

    /// Metadata for one asset, `None` if the ledger does not know it
    async fn query_asset_metadata(&self, asset_id: AssetId) -> Result<Option<AssetMetadata>>;

    /// A holder's position in one asset, `None` if there is none
    async fn query_account_holding(
        &self,
        asset_id: AssetId,
        address: &Address,
    ) -> Result<Option<AccountHolding>>;
}

/// GraphQL ledger indexer client
#[derive(Clone)]
pub struct LedgerClient {
    http: reqwest::Client,
    config: LedgerConfig,
}

impl LedgerClient {
    /// Create a client. No request is made until the first query.
    pub fn new(config: LedgerConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| LedgerError::Unreachable {
                url: format!("{}: {}", config.url, e),
            })?;

        Ok(Self { http, config })
    }

    /// Get the current ledger configuration
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Latest round the indexer has processed
    pub async fn indexed_round(&self) -> Result<Option<u64>> {
        let body = self.post(queries::STATUS_QUERY, json!({})).await?;
        queries::decode_status(&body)
    }

    /// POST a GraphQL document and return the raw response body
    async fn post(&self, query: &str, variables: Value) -> Result<String> {
        let timeout = Duration::from_secs(self.config.request_timeout_secs);
        timed_request(timeout, self.send(query, variables)).await
    }

    async fn send(&self, query: &str, variables: Value) -> Result<String> {
        let mut request = self
            .http
            .post(&self.config.url)
            .json(&json!({ "query": query, "variables": variables }));
        if !self.config.api_key.is_empty() {
            request = request.bearer_auth(&self.config.api_key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                LedgerError::Unreachable {
                    url: self.config.url.clone(),
                }
            } else {
                LedgerError::ApiError {
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| LedgerError::ApiError {
            message: format!("Failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            return Err(LedgerError::ApiError {
                message: format!("HTTP {}: {}", status, truncate(&body, 200)),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl LedgerQuery for LedgerClient {
    async fn query_edges(
        &self,
        filter: EdgeFilter,
        after: Option<Cursor>,
        first: u32,
    ) -> Result<Page<PoolEdge>> {
        let variables = queries::pools_variables(filter, after.as_ref(), first);
        let body = self.post(queries::POOLS_QUERY, variables).await?;
        queries::decode_pools(&body)
    }

    async fn query_asset_metadata(&self, asset_id: AssetId) -> Result<Option<AssetMetadata>> {
        let body = self
            .post(queries::ASSET_QUERY, queries::asset_variables(asset_id))
            .await?;
        queries::decode_asset(&body)
    }

    async fn query_account_holding(
        &self,
        asset_id: AssetId,
        address: &Address,
    ) -> Result<Option<AccountHolding>> {
        let body = self
            .post(
                queries::HOLDING_QUERY,
                queries::holding_variables(asset_id, address),
            )
            .await?;
        queries::decode_holding(&body)
    }
}

/// Run a ledger request under a timeout
async fn timed_request<T>(
    timeout: Duration,
    fut: impl std::future::Future<Output = Result<T>>,
) -> Result<T> {
    tokio::time::timeout(timeout, fut)
        .await
        .map_err(|_| LedgerError::Timeout {
            secs: timeout.as_secs(),
        })?
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
