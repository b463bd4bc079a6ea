//! Pool Graph: fetching pool edges and building the undirected adjacency list

use indexmap::{IndexMap, IndexSet};
use ledger_client::{collect_edges, LedgerQuery};
use swapgraph_core::{AssetId, EdgeFilter, LedgerConfig, LedgerError, PoolEdge};

/// Page size and page budget applied to every paginated edge query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub page_size: u32,
    pub max_pages: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self::from(&LedgerConfig::default())
    }
}

impl From<&LedgerConfig> for PageLimits {
    fn from(config: &LedgerConfig) -> Self {
        Self {
            page_size: config.page_size,
            max_pages: config.max_pages,
        }
    }
}

/// Undirected adjacency list keyed by asset.
///
/// Neighbour sets keep insertion order so every search over the graph is
/// deterministic for a given edge sequence.
#[derive(Debug, Clone, Default)]
pub struct PoolGraph {
    adjacency: IndexMap<AssetId, IndexSet<AssetId>>,
    edge_count: usize,
}

impl PoolGraph {
    /// Build a graph from pool edges.
    ///
    /// Edge (A, B) adds B to A's neighbours and A to B's. Duplicate edges
    /// collapse. Self-loop edges are kept as a self adjacency.
    pub fn from_edges(edges: &[PoolEdge]) -> Self {
        let mut adjacency: IndexMap<AssetId, IndexSet<AssetId>> = IndexMap::new();

        for edge in edges {
            adjacency
                .entry(edge.asset_a)
                .or_default()
                .insert(edge.asset_b);
            adjacency
                .entry(edge.asset_b)
                .or_default()
                .insert(edge.asset_a);
        }

        Self {
            adjacency,
            edge_count: edges.len(),
        }
    }

    /// Neighbours of `asset` in insertion order (empty if unknown)
    pub fn neighbors(&self, asset: AssetId) -> impl Iterator<Item = AssetId> + '_ {
        self.adjacency
            .get(&asset)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    pub fn contains(&self, asset: AssetId) -> bool {
        self.adjacency.contains_key(&asset)
    }

    /// Number of distinct assets with at least one pool
    pub fn asset_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edge records the graph was built from, duplicates included
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Fetch every pool edge with `asset` on either side.
///
/// Edges are stored directionally, so this issues the `asset_a = X` and
/// `asset_b = X` queries concurrently and concatenates them (A side
/// first). With no asset a single unfiltered query lists every pool.
pub async fn fetch_edges_touching(
    ledger: &dyn LedgerQuery,
    asset: Option<AssetId>,
    limits: PageLimits,
) -> Result<Vec<PoolEdge>, LedgerError> {
    let Some(asset) = asset else {
        let edges = collect_edges(ledger, EdgeFilter::all(), limits.page_size, limits.max_pages)
            .await?;
        tracing::info!(edges = edges.len(), "Fetched full pool edge set");
        return Ok(edges);
    };

    let (mut a_side, b_side) = tokio::try_join!(
        collect_edges(
            ledger,
            EdgeFilter::asset_a(asset),
            limits.page_size,
            limits.max_pages
        ),
        collect_edges(
            ledger,
            EdgeFilter::asset_b(asset),
            limits.page_size,
            limits.max_pages
        ),
    )?;

    tracing::debug!(
        asset = %asset,
        a_side = a_side.len(),
        b_side = b_side.len(),
        "Fetched pool edges touching asset"
    );

    a_side.extend(b_side);
    Ok(a_side)
}

/// Fetch the edges touching either endpoint of a path query
pub async fn fetch_local_edges(
    ledger: &dyn LedgerQuery,
    start: AssetId,
    end: AssetId,
    limits: PageLimits,
) -> Result<Vec<PoolEdge>, LedgerError> {
    if start == end {
        return fetch_edges_touching(ledger, Some(start), limits).await;
    }

    let (mut edges, end_edges) = tokio::try_join!(
        fetch_edges_touching(ledger, Some(start), limits),
        fetch_edges_touching(ledger, Some(end), limits),
    )?;
    edges.extend(end_edges);
    Ok(edges)
}
