//! Explicitly refreshed pool graph snapshot
//!
//! The resolver never caches. A caller that wants to run many queries
//! against one fetch takes a snapshot, decides itself when it is stale,
//! and refreshes it.

use std::time::{Duration, Instant};

use swapgraph_core::{AssetId, ResolverError};

use crate::graph::PoolGraph;
use crate::resolver::SwapResolver;
use crate::search::{connected_assets, find_swap_paths, reachable_assets};

/// The full pool graph as of one fetch
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
    graph: PoolGraph,
    fetched_at: Instant,
}

impl GraphSnapshot {
    pub fn new(graph: PoolGraph) -> Self {
        Self {
            graph,
            fetched_at: Instant::now(),
        }
    }

    pub fn graph(&self) -> &PoolGraph {
        &self.graph
    }

    /// Time since the graph was fetched
    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }

    pub fn is_stale(&self, max_age: Duration) -> bool {
        self.age() > max_age
    }

    pub fn connected_tokens(&self, asset: AssetId) -> Vec<AssetId> {
        connected_assets(&self.graph, asset)
    }

    pub fn reachable_assets(&self, start: AssetId, max_depth: usize) -> Vec<AssetId> {
        reachable_assets(&self.graph, start, max_depth)
    }

    /// Path search over every pool in the snapshot
    pub fn swap_paths(&self, start: AssetId, end: AssetId, max_length: usize) -> Vec<Vec<AssetId>> {
        find_swap_paths(&self.graph, start, end, max_length)
    }

    /// Replace the graph with a fresh fetch. On failure the old graph is kept.
    pub async fn refresh(&mut self, resolver: &SwapResolver) -> Result<(), ResolverError> {
        let graph = resolver.full_graph().await?;
        tracing::info!(
            pools = graph.edge_count(),
            previous_age_ms = self.age().as_millis() as u64,
            "Refreshed graph snapshot"
        );
        self.graph = graph;
        self.fetched_at = Instant::now();
        Ok(())
    }
}
