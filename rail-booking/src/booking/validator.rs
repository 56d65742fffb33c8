//! Route validation and booking assembly.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Booking, GraphError, PassengerId, StationId, TrainId};
use crate::network::{Graph, Route, ShortestPaths, shortest_paths};
use crate::travel_time::TravelTimeTable;

/// Source of shortest-path trees.
///
/// A bare [`Graph`] computes a fresh tree for every call; the memoizing
/// [`RouteCache`](crate::cache::RouteCache) reuses trees per source.
pub trait PathProvider {
    /// Shortest paths from `source` to every station.
    fn shortest_paths(&self, source: StationId) -> Result<Arc<ShortestPaths>, GraphError>;
}

impl PathProvider for Graph {
    fn shortest_paths(&self, source: StationId) -> Result<Arc<ShortestPaths>, GraphError> {
        shortest_paths(self, source).map(Arc::new)
    }
}

/// Result of attempting a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// The destination is reachable.
    Confirmed {
        booking: Booking,
        route: Route,
        distance: u64,
        /// Minutes for the direct `start → end` entry, if one is stored.
        travel_time: Option<u32>,
    },

    /// No route joins the two stations, or a station index was invalid.
    NoRoute { start: StationId, end: StationId },
}

impl BookingOutcome {
    /// Returns true for a confirmed booking.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, BookingOutcome::Confirmed { .. })
    }
}

/// Returns true if `end` is reachable from `start`.
///
/// Out-of-range stations are reported as unreachable rather than as an
/// error.
pub fn validate_route<P: PathProvider + ?Sized>(
    paths: &P,
    start: StationId,
    end: StationId,
) -> bool {
    match paths.shortest_paths(start) {
        Ok(tree) => tree.is_reachable(end),
        Err(e) => {
            debug!(%start, %end, error = %e, "route validation rejected");
            false
        }
    }
}

/// Create a booking record. Never fails.
pub fn create_booking(
    passenger: PassengerId,
    train: TrainId,
    start: StationId,
    end: StationId,
) -> Booking {
    Booking::new(passenger, train, start, end)
}

/// Validate a journey and, if servable, assemble the confirmed booking.
pub fn book<P: PathProvider + ?Sized>(
    paths: &P,
    times: &TravelTimeTable,
    passenger: PassengerId,
    train: TrainId,
    start: StationId,
    end: StationId,
) -> BookingOutcome {
    let no_route = BookingOutcome::NoRoute { start, end };

    let tree = match paths.shortest_paths(start) {
        Ok(tree) => tree,
        Err(e) => {
            debug!(%start, %end, error = %e, "booking rejected");
            return no_route;
        }
    };

    let Some(distance) = tree.distance(end) else {
        debug!(%start, %end, "no route for booking");
        return no_route;
    };

    let route = match tree.route_to(end) {
        Ok(route) if !route.is_empty() => route,
        _ => return no_route,
    };

    BookingOutcome::Confirmed {
        booking: create_booking(passenger, train, start, end),
        route,
        distance,
        travel_time: times.get(start, end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::india_network;

    fn s(i: usize) -> StationId {
        StationId(i)
    }

    #[test]
    fn delhi_to_chennai_valid() {
        let network = india_network().unwrap();
        assert!(validate_route(&network.graph, s(0), s(3)));
    }

    #[test]
    fn isolated_station_invalid() {
        let mut graph = Graph::new(5);
        graph.add_edge(s(0), s(1), 10).unwrap();
        graph.add_edge(s(0), s(3), 20).unwrap();

        assert!(!validate_route(&graph, s(0), s(4)));
        assert!(!validate_route(&graph, s(4), s(0)));
        assert!(validate_route(&graph, s(4), s(4)));
    }

    #[test]
    fn invalid_indices_are_not_found() {
        let network = india_network().unwrap();
        assert!(!validate_route(&network.graph, s(0), s(9)));
        assert!(!validate_route(&network.graph, s(9), s(0)));
        assert!(!validate_route(&Graph::new(0), s(0), s(0)));
    }

    #[test]
    fn create_booking_copies_fields() {
        let booking = create_booking(PassengerId(1), TrainId(101), s(0), s(3));
        assert_eq!(booking.passenger, PassengerId(1));
        assert_eq!(booking.train, TrainId(101));
        assert_eq!(booking.start, s(0));
        assert_eq!(booking.end, s(3));
    }

    #[test]
    fn book_delhi_to_chennai() {
        let network = india_network().unwrap();
        let outcome = book(
            &network.graph,
            &network.times,
            PassengerId(1),
            TrainId(101),
            s(0),
            s(3),
        );

        let BookingOutcome::Confirmed {
            booking,
            route,
            distance,
            travel_time,
        } = outcome
        else {
            panic!("expected confirmed booking");
        };
        assert_eq!(booking, Booking::new(PassengerId(1), TrainId(101), s(0), s(3)));
        assert_eq!(route.stations(), &[s(0), s(3)]);
        assert_eq!(distance, 20);
        assert_eq!(travel_time, Some(20));
    }

    #[test]
    fn book_without_direct_time() {
        // Delhi to Kolkata has a route but no direct travel-time entry
        let network = india_network().unwrap();
        let outcome = book(
            &network.graph,
            &network.times,
            PassengerId(3),
            TrainId(7),
            s(0),
            s(2),
        );

        match outcome {
            BookingOutcome::Confirmed {
                distance,
                travel_time,
                ..
            } => {
                assert_eq!(distance, 35);
                assert_eq!(travel_time, None);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn book_unreachable() {
        let graph = Graph::new(2);
        let outcome = book(
            &graph,
            &TravelTimeTable::new(),
            PassengerId(1),
            TrainId(1),
            s(0),
            s(1),
        );
        assert_eq!(
            outcome,
            BookingOutcome::NoRoute {
                start: s(0),
                end: s(1)
            }
        );
        assert!(!outcome.is_confirmed());
    }

    #[test]
    fn book_invalid_station() {
        let network = india_network().unwrap();
        let outcome = book(
            &network.graph,
            &network.times,
            PassengerId(1),
            TrainId(1),
            s(0),
            s(42),
        );
        assert!(!outcome.is_confirmed());
    }
}
