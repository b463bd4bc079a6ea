//! Configuration types for SwapGraph

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Ledger indexer connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Indexer GraphQL endpoint (e.g., "http://127.0.0.1:8980/graphql")
    pub url: String,

    /// API key sent as a bearer token (optional)
    #[serde(default)]
    pub api_key: String,

    /// Records requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Upper bound on pages fetched by a single paginated query
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Per-request timeout
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_page_size() -> u32 {
    10
}

fn default_max_pages() -> usize {
    1000
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8980/graphql".to_string(),
            api_key: String::new(),
            page_size: default_page_size(),
            max_pages: default_max_pages(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Which pools a path query may traverse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathScope {
    /// Only pools touching the start or end asset
    #[default]
    Local,
    /// Every pool on the ledger
    Full,
}

/// Default hop bound for reachability search
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// Default node-count bound for enumerated paths
pub const DEFAULT_MAX_PATH_LENGTH: usize = 6;

/// Search bounds for the resolver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Maximum hops explored by reachability search
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Maximum node count of an enumerated path
    #[serde(default = "default_max_path_length")]
    pub max_path_length: usize,

    #[serde(default)]
    pub path_scope: PathScope,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_max_path_length() -> usize {
    DEFAULT_MAX_PATH_LENGTH
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            path_scope: PathScope::Local,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Ledger connection settings
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Search bounds
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Interface the API server binds to
    #[serde(default = "default_api_host")]
    pub api_host: IpAddr,

    /// API server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,
}

fn default_api_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_api_port() -> u16 {
    19080
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig::default(),
            resolver: ResolverConfig::default(),
            api_host: default_api_host(),
            api_port: default_api_port(),
        }
    }
}

impl AppConfig {
    /// Socket address the API server listens on
    pub fn api_addr(&self) -> SocketAddr {
        SocketAddr::new(self.api_host, self.api_port)
    }

    /// Parse a JSON config document; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }
}
