//! Swap-Path Resolver
//!
//! Builds an undirected graph of liquidity pools fetched from the ledger
//! and answers connectivity questions over it: which assets can be
//! reached from a start asset, and which multi-hop routes join two assets.

pub mod graph;
pub mod metadata;
pub mod resolver;
pub mod search;
pub mod snapshot;

#[cfg(test)]
mod testing;

// Re-exports
pub use graph::{fetch_edges_touching, fetch_local_edges, PageLimits, PoolGraph};
pub use metadata::{join_metadata, join_metadata_settled, lookup_asset, TokenWithMetadata};
pub use resolver::{PoolInfo, SwapResolver};
pub use search::{connected_assets, find_swap_paths, reachable_assets};
pub use snapshot::GraphSnapshot;
