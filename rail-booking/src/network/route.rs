//! Route reconstruction from a predecessor vector.

use serde::Serialize;

use super::graph::Graph;
use crate::domain::{GraphError, StationId};

/// Ordered stations from a source to a destination, both inclusive.
///
/// An empty route means the destination was unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Route(Vec<StationId>);

impl Route {
    /// The stations in travel order.
    pub fn stations(&self) -> &[StationId] {
        &self.0
    }

    /// Returns true if no route exists.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of stations on the route.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First station, if any.
    pub fn origin(&self) -> Option<StationId> {
        self.0.first().copied()
    }

    /// Last station, if any.
    pub fn destination(&self) -> Option<StationId> {
        self.0.last().copied()
    }

    /// Consecutive `(from, to)` pairs along the route.
    pub fn legs(&self) -> impl Iterator<Item = (StationId, StationId)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// Total weight of the route in `graph`, taking the cheapest edge per leg.
    ///
    /// Returns `None` for an empty route or if some leg has no edge.
    pub fn cost(&self, graph: &Graph) -> Option<u64> {
        if self.is_empty() {
            return None;
        }
        self.legs()
            .map(|(from, to)| graph.edge_weight(from, to).map(u64::from))
            .sum()
    }
}

/// Walk `parent` links back from `destination` to `source`.
///
/// Returns `[source]` when the two are equal, and an empty route when
/// `destination` has no predecessor. The walk is bounded by the vector
/// length, so a malformed (cyclic) predecessor vector yields an empty
/// route instead of looping.
///
/// # Examples
///
/// ```
/// use rail_booking::domain::StationId;
/// use rail_booking::network::reconstruct_route;
///
/// let parent = [None, Some(StationId(0)), Some(StationId(1)), None];
///
/// let route = reconstruct_route(&parent, StationId(0), StationId(2)).unwrap();
/// assert_eq!(route.stations(), &[StationId(0), StationId(1), StationId(2)]);
///
/// // Station 3 was never reached
/// assert!(reconstruct_route(&parent, StationId(0), StationId(3)).unwrap().is_empty());
/// ```
pub fn reconstruct_route(
    parent: &[Option<StationId>],
    source: StationId,
    destination: StationId,
) -> Result<Route, GraphError> {
    let node_count = parent.len();
    let check = |node: StationId| {
        if node.0 < node_count {
            Ok(())
        } else {
            Err(GraphError::InvalidNode { node, node_count })
        }
    };
    check(source)?;
    check(destination)?;

    if source == destination {
        return Ok(Route(vec![source]));
    }

    let mut stations = vec![destination];
    let mut current = destination;
    while let Some(prev) = parent[current.0] {
        check(prev)?;
        stations.push(prev);
        if stations.len() > node_count {
            return Ok(Route::default());
        }
        current = prev;
    }

    if current != source {
        return Ok(Route::default());
    }

    stations.reverse();
    Ok(Route(stations))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::network::shortest_paths;
    use proptest::prelude::*;

    fn arb_graph() -> impl Strategy<Value = Graph> {
        (1usize..10).prop_flat_map(|n| {
            proptest::collection::vec((0..n, 0..n, 0i64..40), 0..25).prop_map(move |edges| {
                let mut g = Graph::new(n);
                for (u, v, w) in edges {
                    if u != v {
                        let _ = g.add_edge(StationId(u), StationId(v), w);
                    }
                }
                g
            })
        })
    }

    proptest! {
        /// Reconstructed routes follow real edges and add up to the distance
        #[test]
        fn route_follows_edges(g in arb_graph(), source in 0usize..10, dest in 0usize..10) {
            let n = g.node_count();
            let source = StationId(source % n);
            let dest = StationId(dest % n);
            let paths = shortest_paths(&g, source).unwrap();
            let route = paths.route_to(dest).unwrap();

            match paths.distance(dest) {
                None => prop_assert!(route.is_empty()),
                Some(d) => {
                    prop_assert_eq!(route.origin(), Some(source));
                    prop_assert_eq!(route.destination(), Some(dest));
                    for (from, to) in route.legs() {
                        prop_assert!(g.has_edge(from, to));
                    }
                    prop_assert_eq!(route.cost(&g), Some(d));
                }
            }
        }
    }
}
