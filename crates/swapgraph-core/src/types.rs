//! Core type definitions for SwapGraph

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fungible asset identifier
///
/// Serialized as a bare number. Indexers often stringify large integers,
/// so deserialization accepts either a JSON number or a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AssetId(pub u64);

impl AssetId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AssetId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for AssetId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Self(n)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Holder address (opaque to the resolver)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(pub String);

impl Address {
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque pagination continuation token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(pub String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A liquidity pool connecting two assets.
///
/// Stored by the ledger as a directional (asset_a, asset_b) tuple but
/// treated as undirected everywhere in the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolEdge {
    pub asset_a: AssetId,
    pub asset_b: AssetId,
    pub pool_address: Address,
    pub lp_asset_id: AssetId,
}

impl PoolEdge {
    /// Whether this pool joins `x` and `y`, in either orientation
    pub fn connects(&self, x: AssetId, y: AssetId) -> bool {
        (self.asset_a == x && self.asset_b == y) || (self.asset_a == y && self.asset_b == x)
    }
}

/// Edge listing filter. `None` on both sides lists every pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_a: Option<AssetId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_b: Option<AssetId>,
}

impl EdgeFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn asset_a(id: AssetId) -> Self {
        Self {
            asset_a: Some(id),
            asset_b: None,
        }
    }

    pub fn asset_b(id: AssetId) -> Self {
        Self {
            asset_a: None,
            asset_b: Some(id),
        }
    }

    /// Whether an edge passes this filter
    pub fn matches(&self, edge: &PoolEdge) -> bool {
        self.asset_a.map_or(true, |a| edge.asset_a == a)
            && self.asset_b.map_or(true, |b| edge.asset_b == b)
    }
}

/// Continuation info attached to every page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<Cursor>,
}

/// One batch of a paginated remote query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    /// A final page with no continuation
    pub fn last(data: Vec<T>) -> Self {
        Self {
            data,
            page_info: PageInfo::default(),
        }
    }

    /// A page followed by more records at `cursor`
    pub fn with_next(data: Vec<T>, cursor: Cursor) -> Self {
        Self {
            data,
            page_info: PageInfo {
                has_next_page: true,
                end_cursor: Some(cursor),
            },
        }
    }
}

/// Asset metadata record from the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetadata {
    pub asset_id: AssetId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
    /// Total supply in base units, kept as a string to avoid precision loss
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_supply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A holder's position in one asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHolding {
    pub balance: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
}

/// Balance reported when no holder is given or the holder has no position
pub const ZERO_BALANCE: &str = "0";
