//! Undirected weighted graph over dense station indices.

use crate::domain::{GraphError, StationId};

/// One direction of an undirected edge, stored in the adjacency list of
/// its other endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: StationId,
    pub weight: u32,
}

/// Adjacency-list graph of stations.
///
/// Every inserted edge appears in the adjacency lists of both endpoints at
/// the same weight. Edges are never removed. Parallel edges between the
/// same pair are kept; shortest-path search simply prefers the cheaper one.
///
/// Weights fit in `u32`, so the `u64` sum along any simple path of fewer
/// than 2^32 stations cannot overflow.
///
/// # Examples
///
/// ```
/// use rail_booking::domain::StationId;
/// use rail_booking::network::Graph;
///
/// let mut graph = Graph::new(2);
/// graph.add_edge(StationId(0), StationId(1), 10).unwrap();
///
/// assert_eq!(graph.edge_weight(StationId(1), StationId(0)), Some(10));
/// assert!(graph.add_edge(StationId(0), StationId(2), 5).is_err());
/// assert!(graph.add_edge(StationId(0), StationId(1), -1).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Create a graph over stations `0..node_count` with no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edge_count: 0,
        }
    }

    /// Returns the number of stations.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges inserted, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Fail with `InvalidNode` unless `node` is inside `0..node_count`.
    pub fn check_node(&self, node: StationId) -> Result<(), GraphError> {
        if node.0 < self.node_count() {
            Ok(())
        } else {
            Err(GraphError::InvalidNode {
                node,
                node_count: self.node_count(),
            })
        }
    }

    /// Insert an undirected edge between `u` and `v`.
    ///
    /// Both endpoints must be valid stations, distinct from each other, and
    /// the weight must lie in `0..=u32::MAX`. Nothing is inserted on error.
    pub fn add_edge(&mut self, u: StationId, v: StationId, weight: i64) -> Result<(), GraphError> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(GraphError::SelfLoop { node: u });
        }
        if weight < 0 {
            return Err(GraphError::NegativeWeight { weight });
        }
        let weight = u32::try_from(weight).map_err(|_| GraphError::WeightTooLarge { weight })?;

        self.adjacency[u.0].push(Edge { to: v, weight });
        self.adjacency[v.0].push(Edge { to: u, weight });
        self.edge_count += 1;
        Ok(())
    }

    /// Edges leaving `u`, in insertion order.
    pub fn neighbors(&self, u: StationId) -> Result<&[Edge], GraphError> {
        self.check_node(u)?;
        Ok(&self.adjacency[u.0])
    }

    /// Cheapest weight among the edges joining `u` and `v`.
    ///
    /// Returns `None` if the stations are not directly connected or either
    /// index is out of range.
    pub fn edge_weight(&self, u: StationId, v: StationId) -> Option<u32> {
        self.adjacency
            .get(u.0)?
            .iter()
            .filter(|e| e.to == v)
            .map(|e| e.weight)
            .min()
    }

    /// Returns true if at least one edge joins `u` and `v`.
    pub fn has_edge(&self, u: StationId, v: StationId) -> bool {
        self.edge_weight(u, v).is_some()
    }

    /// Iterate over each inserted edge once, as `(lower, higher, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (StationId, StationId, u32)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, edges)| {
            edges
                .iter()
                .filter(move |e| u < e.to.0)
                .map(move |e| (StationId(u), e.to, e.weight))
        })
    }

    pub(crate) fn adjacency(&self, u: usize) -> &[Edge] {
        &self.adjacency[u]
    }
}
