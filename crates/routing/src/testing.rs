//! In-memory ledger used by the routing tests

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use ledger_client::{LedgerQuery, Result};
use swapgraph_core::{
    AccountHolding, Address, AssetId, AssetMetadata, Cursor, EdgeFilter, LedgerError, Page,
    PoolEdge,
};

pub fn edge(a: u64, b: u64) -> PoolEdge {
    PoolEdge {
        asset_a: AssetId(a),
        asset_b: AssetId(b),
        pool_address: Address::new(format!("POOL{}X{}", a, b)),
        lp_asset_id: AssetId(100_000 + a * 1000 + b),
    }
}

pub fn metadata(id: u64, unit: &str) -> AssetMetadata {
    AssetMetadata {
        asset_id: AssetId(id),
        name: Some(format!("{} Token", unit)),
        unit_name: Some(unit.to_string()),
        decimals: Some(6),
        total_supply: Some("1000000000".to_string()),
        creator: Some("CREATOR".to_string()),
        url: None,
    }
}

/// Serves a fixed edge list with offset cursors, plus metadata and holdings
#[derive(Default)]
pub struct FakeLedger {
    edges: Vec<PoolEdge>,
    metadata: HashMap<AssetId, AssetMetadata>,
    holdings: HashMap<(AssetId, Address), AccountHolding>,
    failing_metadata: HashSet<AssetId>,
    fail_edges: bool,
    latency: Option<Duration>,
    edge_calls: AtomicUsize,
    metadata_calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

/// Marks one request as outstanding until dropped
struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl FakeLedger {
    pub fn new(edges: Vec<PoolEdge>) -> Self {
        Self {
            edges,
            ..Self::default()
        }
    }

    pub fn with_metadata(mut self, records: impl IntoIterator<Item = AssetMetadata>) -> Self {
        for record in records {
            self.metadata.insert(record.asset_id, record);
        }
        self
    }

    pub fn with_holding(mut self, asset: u64, address: &str, balance: &str) -> Self {
        self.holdings.insert(
            (AssetId(asset), Address::new(address)),
            AccountHolding {
                balance: balance.to_string(),
                status: Some("active".to_string()),
                creator: Some("CREATOR".to_string()),
            },
        );
        self
    }

    pub fn failing_metadata_for(mut self, asset: u64) -> Self {
        self.failing_metadata.insert(AssetId(asset));
        self
    }

    /// Every edge and metadata request sleeps for `ms` before answering
    pub fn with_latency(mut self, ms: u64) -> Self {
        self.latency = Some(Duration::from_millis(ms));
        self
    }

    pub fn failing_edges(mut self) -> Self {
        self.fail_edges = true;
        self
    }

    pub fn edge_calls(&self) -> usize {
        self.edge_calls.load(Ordering::SeqCst)
    }

    pub fn metadata_calls(&self) -> usize {
        self.metadata_calls.load(Ordering::SeqCst)
    }

    /// Most requests that were outstanding at the same time
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    async fn begin_request(&self) -> InFlight<'_> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        let guard = InFlight(&self.in_flight);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        guard
    }
}

#[async_trait]
impl LedgerQuery for FakeLedger {
    async fn query_edges(
        &self,
        filter: EdgeFilter,
        after: Option<Cursor>,
        first: u32,
    ) -> Result<Page<PoolEdge>> {
        self.edge_calls.fetch_add(1, Ordering::SeqCst);
        let _request = self.begin_request().await;
        if self.fail_edges {
            return Err(LedgerError::ApiError {
                message: "edge query failed".to_string(),
            });
        }

        let matching: Vec<&PoolEdge> = self.edges.iter().filter(|e| filter.matches(e)).collect();
        let start = match after {
            Some(cursor) => cursor
                .as_str()
                .parse::<usize>()
                .map_err(|e| LedgerError::ParseError(e.to_string()))?,
            None => 0,
        };
        let end = (start + first.max(1) as usize).min(matching.len());
        let data = matching[start.min(end)..end].iter().map(|e| (*e).clone()).collect();

        if end < matching.len() {
            Ok(Page::with_next(data, Cursor::new(end.to_string())))
        } else {
            Ok(Page::last(data))
        }
    }

    async fn query_asset_metadata(&self, asset_id: AssetId) -> Result<Option<AssetMetadata>> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        let _request = self.begin_request().await;
        if self.failing_metadata.contains(&asset_id) {
            return Err(LedgerError::Timeout { secs: 30 });
        }
        Ok(self.metadata.get(&asset_id).cloned())
    }

    async fn query_account_holding(
        &self,
        asset_id: AssetId,
        address: &Address,
    ) -> Result<Option<AccountHolding>> {
        Ok(self.holdings.get(&(asset_id, address.clone())).cloned())
    }
}
