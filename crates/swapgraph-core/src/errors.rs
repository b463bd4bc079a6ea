//! Error types for SwapGraph

use thiserror::Error;

use crate::AssetId;

/// Core errors that can occur in SwapGraph
#[derive(Debug, Error)]
pub enum Error {
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Ledger connection and query errors
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Ledger unreachable at {url}")]
    Unreachable { url: String },

    #[error("Ledger request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Ledger returned error: {message}")]
    ApiError { message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Pagination limit exceeded ({max_pages} pages)")]
    PaginationLimitExceeded { max_pages: usize },

    #[error("Page reported more results but no continuation cursor")]
    MissingCursor,
}

/// Resolver errors
#[derive(Debug, Error)]
pub enum ResolverError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("Failed to fetch asset {asset_id}: metadata not found")]
    MetadataNotFound { asset_id: AssetId },

    #[error("No pool found for pair {asset_a}/{asset_b}")]
    PoolNotFound { asset_a: AssetId, asset_b: AssetId },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

/// Result type alias for SwapGraph operations
pub type Result<T> = std::result::Result<T, Error>;

impl ResolverError {
    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Ledger(LedgerError::Timeout { .. }) => "ledger_timeout",
            Self::Ledger(LedgerError::Unreachable { .. }) => "ledger_unreachable",
            Self::Ledger(LedgerError::PaginationLimitExceeded { .. }) => "pagination_limit",
            Self::Ledger(_) => "ledger_error",
            Self::MetadataNotFound { .. } => "metadata_not_found",
            Self::PoolNotFound { .. } => "pool_not_found",
            Self::InvalidRequest { .. } => "invalid_request",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest { .. } => 400,
            Self::MetadataNotFound { .. } | Self::PoolNotFound { .. } => 404,
            Self::Ledger(LedgerError::Timeout { .. })
            | Self::Ledger(LedgerError::Unreachable { .. }) => 503,
            Self::Ledger(_) => 502,
        }
    }
}
