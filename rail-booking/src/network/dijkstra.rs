//! Single-source shortest paths (Dijkstra).
//!
//! The frontier is a binary heap of `(tentative distance, station)` pairs,
//! giving O((V + E) log V). A station may be pushed more than once when a
//! cheaper path to it is found; entries whose distance no longer matches
//! the best known one are skipped when popped.
//!
//! Equal-distance frontier entries pop lowest index first. That choice
//! never changes the distances, but when a station has several shortest
//! paths it decides which predecessor is recorded.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::trace;

use super::graph::Graph;
use super::route::{Route, reconstruct_route};
use crate::domain::{GraphError, StationId};

/// Distances and predecessors from one shortest-path query.
///
/// Both vectors come from the same source and are only handed out
/// together, so a predecessor vector can never be paired with distances
/// from a different query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: StationId,
    dist: Vec<Option<u64>>,
    parent: Vec<Option<StationId>>,
}

impl ShortestPaths {
    /// The station the query ran from.
    pub fn source(&self) -> StationId {
        self.source
    }

    /// Minimum cost from the source to `station`.
    ///
    /// Returns `None` if the station is unreachable or out of range.
    pub fn distance(&self, station: StationId) -> Option<u64> {
        self.dist.get(station.0).copied().flatten()
    }

    /// The station immediately before `station` on its recorded shortest path.
    ///
    /// `None` for the source itself, for unreachable stations and for
    /// out-of-range indices.
    pub fn parent(&self, station: StationId) -> Option<StationId> {
        self.parent.get(station.0).copied().flatten()
    }

    /// Returns true if `station` has a finite distance from the source.
    pub fn is_reachable(&self, station: StationId) -> bool {
        self.distance(station).is_some()
    }

    /// The full distance vector, indexed by station.
    pub fn distances(&self) -> &[Option<u64>] {
        &self.dist
    }

    /// The full predecessor vector, indexed by station.
    pub fn parents(&self) -> &[Option<StationId>] {
        &self.parent
    }

    /// Reconstruct the route from the source to `destination`.
    ///
    /// The route is empty if `destination` is unreachable.
    pub fn route_to(&self, destination: StationId) -> Result<Route, GraphError> {
        reconstruct_route(&self.parent, self.source, destination)
    }
}

/// Compute shortest distances and predecessors from `source` to every station.
///
/// Edge weights are non-negative by construction of [`Graph`], which is
/// what makes the greedy extraction order correct.
///
/// # Examples
///
/// ```
/// use rail_booking::domain::StationId;
/// use rail_booking::network::{Graph, shortest_paths};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(StationId(0), StationId(1), 4).unwrap();
/// graph.add_edge(StationId(1), StationId(2), 3).unwrap();
/// graph.add_edge(StationId(0), StationId(2), 9).unwrap();
///
/// let paths = shortest_paths(&graph, StationId(0)).unwrap();
/// assert_eq!(paths.distance(StationId(2)), Some(7));
/// assert_eq!(paths.parent(StationId(2)), Some(StationId(1)));
/// ```
pub fn shortest_paths(graph: &Graph, source: StationId) -> Result<ShortestPaths, GraphError> {
    graph.check_node(source)?;

    let n = graph.node_count();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut parent: Vec<Option<StationId>> = vec![None; n];
    let mut frontier = BinaryHeap::new();

    dist[source.0] = Some(0);
    frontier.push(Reverse((0u64, source.0)));

    let mut settled = 0usize;

    while let Some(Reverse((d, u))) = frontier.pop() {
        // Stale entry: a cheaper path to `u` was already processed
        if dist[u].is_some_and(|best| d > best) {
            continue;
        }
        settled += 1;

        for edge in graph.adjacency(u) {
            let v = edge.to.0;
            // `d` spans a simple path of u32 weights, so this cannot overflow
            let candidate = d + u64::from(edge.weight);
            if dist[v].is_none_or(|current| candidate < current) {
                dist[v] = Some(candidate);
                parent[v] = Some(StationId(u));
                frontier.push(Reverse((candidate, v)));
            }
        }
    }

    trace!(
        source = %source,
        stations = n,
        settled,
        reachable = dist.iter().filter(|d| d.is_some()).count(),
        "shortest paths computed"
    );

    Ok(ShortestPaths {
        source,
        dist,
        parent,
    })
}
