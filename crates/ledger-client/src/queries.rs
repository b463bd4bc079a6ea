//! GraphQL documents and response decoding for the ledger indexer

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use swapgraph_core::{
    AccountHolding, Address, AssetId, AssetMetadata, Cursor, EdgeFilter, LedgerError, Page,
    PageInfo, PoolEdge,
};

use crate::Result;

pub const POOLS_QUERY: &str = r#"
query Pools($assetA: String, $assetB: String, $after: String, $first: Int!) {
  pools(filter: { assetA: $assetA, assetB: $assetB }, after: $after, first: $first) {
    nodes { assetA assetB poolAddress lpAssetId }
    pageInfo { hasNextPage endCursor }
  }
}"#;

pub const ASSET_QUERY: &str = r#"
query Asset($assetId: String!) {
  asset(id: $assetId) { assetId name unitName decimals totalSupply creator url }
}"#;

pub const HOLDING_QUERY: &str = r#"
query Holding($assetId: String!, $address: String!) {
  accountAsset(assetId: $assetId, address: $address) { balance status creator }
}"#;

pub const STATUS_QUERY: &str = r#"
query Status {
  status { indexedRound }
}"#;

/// Standard GraphQL response envelope
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Relay-style connection as returned by the indexer
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Connection<T> {
    nodes: Vec<T>,
    page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
struct PoolsData {
    pools: Connection<PoolEdge>,
}

#[derive(Debug, Deserialize)]
struct AssetData {
    asset: Option<AssetMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HoldingData {
    account_asset: Option<AccountHolding>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusData {
    status: IndexerStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IndexerStatus {
    indexed_round: Option<u64>,
}

pub fn pools_variables(filter: EdgeFilter, after: Option<&Cursor>, first: u32) -> Value {
    json!({
        "assetA": filter.asset_a.map(|id| id.to_string()),
        "assetB": filter.asset_b.map(|id| id.to_string()),
        "after": after.map(|c| c.as_str()),
        "first": first,
    })
}

pub fn asset_variables(asset_id: AssetId) -> Value {
    json!({ "assetId": asset_id.to_string() })
}

pub fn holding_variables(asset_id: AssetId, address: &Address) -> Value {
    json!({ "assetId": asset_id.to_string(), "address": address.as_str() })
}

/// Unwrap a GraphQL envelope, surfacing `errors` as an API error
fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T> {
    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|e| LedgerError::ParseError(e.to_string()))?;

    if !envelope.errors.is_empty() {
        let message = envelope
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(LedgerError::ApiError { message });
    }

    envelope
        .data
        .ok_or_else(|| LedgerError::ParseError("response has no data".to_string()))
}

pub fn decode_pools(body: &str) -> Result<Page<PoolEdge>> {
    let data: PoolsData = decode_envelope(body)?;
    Ok(Page {
        data: data.pools.nodes,
        page_info: data.pools.page_info,
    })
}

pub fn decode_asset(body: &str) -> Result<Option<AssetMetadata>> {
    let data: AssetData = decode_envelope(body)?;
    Ok(data.asset)
}

pub fn decode_holding(body: &str) -> Result<Option<AccountHolding>> {
    let data: HoldingData = decode_envelope(body)?;
    Ok(data.account_asset)
}

pub fn decode_status(body: &str) -> Result<Option<u64>> {
    let data: StatusData = decode_envelope(body)?;
    Ok(data.status.indexed_round)
}
