//! Bounded graph searches over the pool graph
//!
//! Reachability (which assets can be swapped into from a start asset) and
//! path enumeration (every simple route between two assets), both breadth
//! first and both bounded so cycles and long chains stay cheap.

use std::collections::{HashSet, VecDeque};

use swapgraph_core::AssetId;

use crate::graph::PoolGraph;

/// Direct neighbours of `asset`, ascending, excluding `asset` itself
pub fn connected_assets(graph: &PoolGraph, asset: AssetId) -> Vec<AssetId> {
    let mut connected: Vec<AssetId> = graph.neighbors(asset).filter(|n| *n != asset).collect();
    connected.sort_unstable();
    connected.dedup();
    connected
}

/// All assets reachable from `start` within `max_depth` hops.
///
/// The start asset is never part of the result. Output is ascending and
/// distinct.
pub fn reachable_assets(graph: &PoolGraph, start: AssetId, max_depth: usize) -> Vec<AssetId> {
    let mut visited: HashSet<AssetId> = HashSet::new();
    visited.insert(start);

    let mut reachable: Vec<AssetId> = Vec::new();
    let mut queue: VecDeque<(AssetId, usize)> = VecDeque::new();
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }
        for neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                reachable.push(neighbor);
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    reachable.sort_unstable();
    reachable
}

/// Every simple path from `start` to `end` with at most `max_length` nodes.
///
/// Breadth first over partial paths. A path is complete as soon as it
/// reaches `end` and is never extended past it. No asset appears twice in
/// one path. Results are ordered by node count; equal lengths keep
/// discovery order.
///
/// `start == end` yields the single-node path `[start]`.
pub fn find_swap_paths(
    graph: &PoolGraph,
    start: AssetId,
    end: AssetId,
    max_length: usize,
) -> Vec<Vec<AssetId>> {
    let mut paths: Vec<Vec<AssetId>> = Vec::new();
    let mut seen: HashSet<Vec<AssetId>> = HashSet::new();
    let mut queue: VecDeque<Vec<AssetId>> = VecDeque::new();
    queue.push_back(vec![start]);

    while let Some(path) = queue.pop_front() {
        let current = *path.last().unwrap_or(&start);

        if current == end {
            paths.push(path);
            continue;
        }
        if path.len() >= max_length {
            continue;
        }

        for neighbor in graph.neighbors(current) {
            if path.contains(&neighbor) {
                continue;
            }
            let mut candidate = path.clone();
            candidate.push(neighbor);
            if seen.insert(candidate.clone()) {
                queue.push_back(candidate);
            }
        }
    }

    // stable: equal lengths stay in discovery order
    paths.sort_by_key(|p| p.len());
    paths
}
