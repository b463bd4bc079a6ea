//! Ledger reachability probe
//!
//! Checks whether the indexer answers and how far it has indexed.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::LedgerClient;

/// Indexer status detected through probing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerStatus {
    /// Indexer is reachable and responding
    pub is_online: bool,

    /// Latest indexed round, if the indexer reports one
    pub indexed_round: Option<u64>,

    /// Round-trip time of the probe
    pub latency_ms: Option<u64>,
}

impl LedgerStatus {
    pub fn offline() -> Self {
        Self {
            is_online: false,
            indexed_round: None,
            latency_ms: None,
        }
    }
}

/// Probe the indexer with a status query
pub async fn probe(client: &LedgerClient) -> LedgerStatus {
    let started = Instant::now();
    match client.indexed_round().await {
        Ok(indexed_round) => LedgerStatus {
            is_online: true,
            indexed_round,
            latency_ms: Some(started.elapsed().as_millis() as u64),
        },
        Err(e) => {
            tracing::warn!(url = %client.config().url, error = %e, "Ledger probe failed");
            LedgerStatus::offline()
        }
    }
}
