//! Memoized shortest-path trees.
//!
//! Validation runs a full shortest-path query from the booking's start.
//! Repeated bookings from the same station reuse the tree computed the
//! first time. Any edge insertion invalidates every cached tree.
//!
//! Mutation takes `&mut self`, so edges can only be added while no query
//! holds a reference to the cache.

use std::sync::Arc;

use moka::sync::Cache as MokaCache;
use tracing::{debug, trace};

use crate::booking::PathProvider;
use crate::domain::{GraphError, StationId};
use crate::network::{Graph, ShortestPaths, shortest_paths};

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of source stations with a cached tree.
    pub max_sources: u64,
}

impl CacheConfig {
    /// Create a configuration with the given capacity.
    pub fn new(max_sources: u64) -> Self {
        Self { max_sources }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_sources: 256 }
    }
}

/// A graph paired with per-source shortest-path trees.
pub struct RouteCache {
    graph: Graph,
    trees: MokaCache<StationId, Arc<ShortestPaths>>,
    max_sources: u64,
}

impl RouteCache {
    /// Wrap a graph with an empty cache.
    pub fn new(graph: Graph, config: &CacheConfig) -> Self {
        Self {
            graph,
            trees: Self::empty_trees(config.max_sources),
            max_sources: config.max_sources,
        }
    }

    fn empty_trees(max_sources: u64) -> MokaCache<StationId, Arc<ShortestPaths>> {
        MokaCache::builder().max_capacity(max_sources).build()
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Insert an edge and drop every cached tree.
    pub fn add_edge(&mut self, u: StationId, v: StationId, weight: i64) -> Result<(), GraphError> {
        self.graph.add_edge(u, v, weight)?;
        // Fresh cache: no tree computed before this edge survives
        self.trees = Self::empty_trees(self.max_sources);
        debug!(%u, %v, weight, "edge added, route cache invalidated");
        Ok(())
    }

    /// Returns true if a tree for `source` is currently cached.
    pub fn contains(&self, source: StationId) -> bool {
        self.trees.contains_key(&source)
    }

    /// Number of cached trees, after pending evictions are applied.
    pub fn cached_sources(&self) -> u64 {
        self.trees.run_pending_tasks();
        self.trees.entry_count()
    }
}

impl PathProvider for RouteCache {
    fn shortest_paths(&self, source: StationId) -> Result<Arc<ShortestPaths>, GraphError> {
        self.graph.check_node(source)?;

        self.trees
            .try_get_with(source, || {
                trace!(%source, "route cache miss");
                shortest_paths(&self.graph, source).map(Arc::new)
            })
            .map_err(|e| (*e).clone())
    }
}
