//! Application state shared across API handlers

use std::sync::Arc;

use ledger_client::LedgerClient;
use routing::{PageLimits, SwapResolver};
use swapgraph_core::{AppConfig, LedgerError};
use thiserror::Error;

/// Errors that can occur while building the API state
#[derive(Debug, Error)]
pub enum StateError {
    /// Ledger client could not be constructed
    #[error("Failed to create ledger client: {0}")]
    Ledger(#[from] LedgerError),

    /// Search bounds that would make every query empty
    #[error("Invalid resolver config: {reason}")]
    InvalidConfig { reason: String },
}

fn validate_config(config: &AppConfig) -> Result<(), StateError> {
    if config.resolver.max_path_length == 0 {
        return Err(StateError::InvalidConfig {
            reason: "max_path_length must be at least 1".to_string(),
        });
    }
    if config.ledger.page_size == 0 {
        return Err(StateError::InvalidConfig {
            reason: "page_size must be at least 1".to_string(),
        });
    }
    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    resolver: SwapResolver,
    ledger_client: Option<LedgerClient>,
}

impl AppState {
    /// Build one ledger client and a resolver over it
    pub fn from_config(config: AppConfig) -> Result<Self, StateError> {
        validate_config(&config)?;

        let client = LedgerClient::new(config.ledger.clone())?;
        tracing::info!("Created ledger client for URL: {}", config.ledger.url);

        let resolver = SwapResolver::new(
            Arc::new(client.clone()),
            PageLimits::from(&config.ledger),
            config.resolver.clone(),
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                resolver,
                ledger_client: Some(client),
            }),
        })
    }

    /// Serve an existing resolver. Health checks report no ledger status.
    pub fn with_resolver(config: AppConfig, resolver: SwapResolver) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                resolver,
                ledger_client: None,
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn resolver(&self) -> &SwapResolver {
        &self.inner.resolver
    }

    /// The HTTP ledger client, when the state owns one
    pub fn ledger_client(&self) -> Option<&LedgerClient> {
        self.inner.ledger_client.as_ref()
    }
}
