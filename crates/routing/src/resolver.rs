//! Swap resolver: the entry point callers hold for the lifetime of the process
//!
//! Every operation fetches the pools it needs, builds a fresh graph, runs
//! its search and drops the graph. Nothing is cached between calls; use
//! [`GraphSnapshot`] to reuse one fetch explicitly.

use std::sync::Arc;

use ledger_client::LedgerQuery;
use serde::{Deserialize, Serialize};
use swapgraph_core::{
    Address, AssetId, AssetMetadata, PathScope, PoolEdge, ResolverConfig, ResolverError,
};

use crate::graph::{fetch_edges_touching, fetch_local_edges, PageLimits, PoolGraph};
use crate::metadata::{join_metadata, TokenWithMetadata};
use crate::search::{connected_assets, find_swap_paths, reachable_assets};
use crate::snapshot::GraphSnapshot;

/// A pool joined with metadata for both of its assets and its LP token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolInfo {
    pub pool: PoolEdge,
    pub asset_a: AssetMetadata,
    pub asset_b: AssetMetadata,
    pub lp_asset: AssetMetadata,
}

/// Path and connectivity resolver over the ledger's pools
#[derive(Clone)]
pub struct SwapResolver {
    ledger: Arc<dyn LedgerQuery>,
    limits: PageLimits,
    config: ResolverConfig,
}

impl SwapResolver {
    pub fn new(ledger: Arc<dyn LedgerQuery>, limits: PageLimits, config: ResolverConfig) -> Self {
        Self {
            ledger,
            limits,
            config,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn limits(&self) -> PageLimits {
        self.limits
    }

    pub fn ledger(&self) -> &dyn LedgerQuery {
        self.ledger.as_ref()
    }

    /// Assets sharing a pool with `asset`, ascending
    pub async fn connected_tokens(&self, asset: AssetId) -> Result<Vec<AssetId>, ResolverError> {
        let edges = fetch_edges_touching(self.ledger(), Some(asset), self.limits).await?;
        let graph = PoolGraph::from_edges(&edges);
        Ok(connected_assets(&graph, asset))
    }

    /// Every asset reachable from `start` within the configured depth
    pub async fn all_swappable_tokens(
        &self,
        start: AssetId,
    ) -> Result<Vec<AssetId>, ResolverError> {
        self.all_swappable_tokens_within(start, self.config.max_depth)
            .await
    }

    /// Every asset reachable from `start` within `max_depth` hops
    pub async fn all_swappable_tokens_within(
        &self,
        start: AssetId,
        max_depth: usize,
    ) -> Result<Vec<AssetId>, ResolverError> {
        let graph = self.full_graph().await?;
        let reachable = reachable_assets(&graph, start, max_depth);

        tracing::info!(
            start = %start,
            max_depth,
            reachable = reachable.len(),
            "Resolved swappable tokens"
        );
        Ok(reachable)
    }

    /// Simple swap paths from `start` to `end` within the configured length
    pub async fn swap_paths(
        &self,
        start: AssetId,
        end: AssetId,
    ) -> Result<Vec<Vec<AssetId>>, ResolverError> {
        self.swap_paths_within(start, end, self.config.max_path_length)
            .await
    }

    /// Simple swap paths from `start` to `end` with at most `max_length` nodes.
    ///
    /// Under [`PathScope::Local`] only pools touching `start` or `end` are
    /// fetched, so routes through two or more intermediate pools that touch
    /// neither endpoint are not found.
    pub async fn swap_paths_within(
        &self,
        start: AssetId,
        end: AssetId,
        max_length: usize,
    ) -> Result<Vec<Vec<AssetId>>, ResolverError> {
        let edges = match self.config.path_scope {
            PathScope::Local => fetch_local_edges(self.ledger(), start, end, self.limits).await?,
            PathScope::Full => fetch_edges_touching(self.ledger(), None, self.limits).await?,
        };
        let graph = PoolGraph::from_edges(&edges);
        let paths = find_swap_paths(&graph, start, end, max_length);

        tracing::info!(
            start = %start,
            end = %end,
            scope = ?self.config.path_scope,
            pools = graph.edge_count(),
            paths = paths.len(),
            "Resolved swap paths"
        );
        Ok(paths)
    }

    /// Reachable assets joined with metadata and, given an address, balances
    pub async fn swappable_tokens_with_metadata(
        &self,
        start: AssetId,
        address: Option<&Address>,
    ) -> Result<Vec<TokenWithMetadata>, ResolverError> {
        let reachable = self.all_swappable_tokens(start).await?;
        join_metadata(self.ledger(), &reachable, address).await
    }

    /// The pool joining `asset_a` and `asset_b`, with display metadata
    pub async fn pool_info(
        &self,
        asset_a: AssetId,
        asset_b: AssetId,
    ) -> Result<PoolInfo, ResolverError> {
        let edges = fetch_edges_touching(self.ledger(), Some(asset_a), self.limits).await?;
        let pool = edges
            .into_iter()
            .find(|e| e.connects(asset_a, asset_b))
            .ok_or(ResolverError::PoolNotFound { asset_a, asset_b })?;

        let (meta_a, meta_b, meta_lp) = tokio::try_join!(
            self.required_metadata(pool.asset_a),
            self.required_metadata(pool.asset_b),
            self.required_metadata(pool.lp_asset_id),
        )?;

        Ok(PoolInfo {
            pool,
            asset_a: meta_a,
            asset_b: meta_b,
            lp_asset: meta_lp,
        })
    }

    /// Fetch the full pool graph once for repeated local queries
    pub async fn snapshot(&self) -> Result<GraphSnapshot, ResolverError> {
        let graph = self.full_graph().await?;
        Ok(GraphSnapshot::new(graph))
    }

    pub(crate) async fn full_graph(&self) -> Result<PoolGraph, ResolverError> {
        let edges = fetch_edges_touching(self.ledger(), None, self.limits).await?;
        let graph = PoolGraph::from_edges(&edges);
        tracing::debug!(
            assets = graph.asset_count(),
            pools = graph.edge_count(),
            "Built full pool graph"
        );
        Ok(graph)
    }

    async fn required_metadata(&self, asset_id: AssetId) -> Result<AssetMetadata, ResolverError> {
        self.ledger
            .query_asset_metadata(asset_id)
            .await?
            .ok_or(ResolverError::MetadataNotFound { asset_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{edge, metadata, FakeLedger};
    use swapgraph_core::LedgerError;

    fn resolver_with(ledger: FakeLedger, config: ResolverConfig) -> (SwapResolver, Arc<FakeLedger>) {
        let ledger = Arc::new(ledger);
        let limits = PageLimits {
            page_size: 2,
            max_pages: 100,
        };
        (SwapResolver::new(ledger.clone(), limits, config), ledger)
    }

    fn resolver(edges: Vec<PoolEdge>) -> SwapResolver {
        resolver_with(FakeLedger::new(edges), ResolverConfig::default()).0
    }

    fn ids(v: &[AssetId]) -> Vec<u64> {
        v.iter().map(|id| id.as_u64()).collect()
    }

    fn scenario() -> Vec<PoolEdge> {
        vec![edge(10, 20), edge(20, 30), edge(30, 40)]
    }

    #[tokio::test]
    async fn test_connected_tokens_symmetry() {
        let r = resolver(vec![edge(1, 2), edge(2, 3)]);
        assert_eq!(ids(&r.connected_tokens(AssetId(1)).await.unwrap()), vec![2]);
        assert_eq!(ids(&r.connected_tokens(AssetId(2)).await.unwrap()), vec![1, 3]);
        assert_eq!(ids(&r.connected_tokens(AssetId(3)).await.unwrap()), vec![2]);
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        let full = ResolverConfig {
            path_scope: PathScope::Full,
            ..ResolverConfig::default()
        };
        let (r, _) = resolver_with(FakeLedger::new(scenario()), full);

        assert_eq!(
            ids(&r.connected_tokens(AssetId(20)).await.unwrap()),
            vec![10, 30]
        );

        let paths = r.swap_paths_within(AssetId(10), AssetId(40), 4).await.unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(ids(&paths[0]), vec![10, 20, 30, 40]);

        let reachable = r
            .all_swappable_tokens_within(AssetId(10), 3)
            .await
            .unwrap();
        assert_eq!(ids(&reachable), vec![20, 30, 40]);
    }

    #[tokio::test]
    async fn test_local_scope_only_sees_endpoint_pools() {
        let r = resolver(scenario());
        // (20,30) touches neither endpoint, so the chain is invisible
        assert!(r
            .swap_paths(AssetId(10), AssetId(40))
            .await
            .unwrap()
            .is_empty());
        // A route through one shared neighbour is found
        let paths = r.swap_paths(AssetId(10), AssetId(30)).await.unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(ids(&paths[0]), vec![10, 20, 30]);
    }

    #[tokio::test]
    async fn test_local_scope_diamond() {
        let r = resolver(vec![edge(1, 2), edge(1, 3), edge(2, 4), edge(3, 4)]);
        let paths = r.swap_paths(AssetId(1), AssetId(4)).await.unwrap();
        let paths: Vec<Vec<u64>> = paths.iter().map(|p| ids(p)).collect();
        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&vec![1, 2, 4]));
        assert!(paths.contains(&vec![1, 3, 4]));
    }

    #[tokio::test]
    async fn test_same_node_paths() {
        let r = resolver(scenario());
        let paths = r.swap_paths(AssetId(20), AssetId(20)).await.unwrap();
        assert_eq!(paths, vec![vec![AssetId(20)]]);
    }

    #[tokio::test]
    async fn test_swappable_tokens_idempotent() {
        let r = resolver(vec![edge(1, 2), edge(2, 3), edge(3, 4), edge(5, 6)]);
        let first = r.all_swappable_tokens(AssetId(1)).await.unwrap();
        let second = r.all_swappable_tokens(AssetId(1)).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(ids(&first), vec![2, 3, 4]);
    }

    #[tokio::test]
    async fn test_each_call_refetches() {
        let (r, ledger) = resolver_with(FakeLedger::new(scenario()), ResolverConfig::default());
        r.all_swappable_tokens(AssetId(10)).await.unwrap();
        let after_first = ledger.edge_calls();
        r.all_swappable_tokens(AssetId(10)).await.unwrap();
        assert_eq!(ledger.edge_calls(), after_first * 2);
    }

    #[tokio::test]
    async fn test_swappable_with_metadata() {
        let ledger = FakeLedger::new(scenario())
            .with_metadata([metadata(20, "BBB"), metadata(30, "CCC"), metadata(40, "DDD")])
            .with_holding(30, "HOLDER", "42");
        let (r, _) = resolver_with(ledger, ResolverConfig::default());

        let holder = Address::new("HOLDER");
        let tokens = r
            .swappable_tokens_with_metadata(AssetId(10), Some(&holder))
            .await
            .unwrap();
        assert_eq!(
            tokens.iter().map(|t| t.asset_id.as_u64()).collect::<Vec<_>>(),
            vec![20, 30, 40]
        );
        assert_eq!(tokens[0].balance, "0");
        assert_eq!(tokens[1].balance, "42");
    }

    #[tokio::test]
    async fn test_swappable_with_missing_metadata_fails() {
        let ledger = FakeLedger::new(scenario()).with_metadata([metadata(20, "BBB")]);
        let (r, _) = resolver_with(ledger, ResolverConfig::default());
        let result = r.swappable_tokens_with_metadata(AssetId(10), None).await;
        assert!(matches!(result, Err(ResolverError::MetadataNotFound { .. })));
    }

    #[tokio::test]
    async fn test_pool_info_either_orientation() {
        let pool = edge(10, 20);
        let ledger = FakeLedger::new(scenario()).with_metadata([
            metadata(10, "AAA"),
            metadata(20, "BBB"),
            metadata(pool.lp_asset_id.as_u64(), "LP"),
        ]);
        let (r, _) = resolver_with(ledger, ResolverConfig::default());

        let info = r.pool_info(AssetId(20), AssetId(10)).await.unwrap();
        assert_eq!(info.pool, pool);
        assert_eq!(info.asset_a.unit_name.as_deref(), Some("AAA"));
        assert_eq!(info.asset_b.unit_name.as_deref(), Some("BBB"));
        assert_eq!(info.lp_asset.unit_name.as_deref(), Some("LP"));
    }

    #[tokio::test]
    async fn test_pool_info_errors() {
        let lp = edge(10, 20).lp_asset_id.as_u64();
        let ledger =
            FakeLedger::new(scenario()).with_metadata([metadata(10, "AAA"), metadata(lp, "LP")]);
        let (r, _) = resolver_with(ledger, ResolverConfig::default());

        assert!(matches!(
            r.pool_info(AssetId(10), AssetId(40)).await,
            Err(ResolverError::PoolNotFound { .. })
        ));
        assert!(matches!(
            r.pool_info(AssetId(10), AssetId(20)).await,
            Err(ResolverError::MetadataNotFound { asset_id }) if asset_id == AssetId(20)
        ));
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let ledger = FakeLedger::new(scenario()).failing_edges();
        let (r, _) = resolver_with(ledger, ResolverConfig::default());
        assert!(matches!(
            r.all_swappable_tokens(AssetId(10)).await,
            Err(ResolverError::Ledger(LedgerError::ApiError { .. }))
        ));
        assert!(matches!(
            r.swap_paths(AssetId(10), AssetId(20)).await,
            Err(ResolverError::Ledger(_))
        ));
    }

    #[tokio::test]
    async fn test_pagination_budget_applies() {
        let edges: Vec<PoolEdge> = (1..50).map(|i| edge(i, i + 1)).collect();
        let ledger = Arc::new(FakeLedger::new(edges));
        let limits = PageLimits {
            page_size: 2,
            max_pages: 3,
        };
        let r = SwapResolver::new(ledger, limits, ResolverConfig::default());
        assert!(matches!(
            r.all_swappable_tokens(AssetId(1)).await,
            Err(ResolverError::Ledger(LedgerError::PaginationLimitExceeded { max_pages: 3 }))
        ));
    }
}
