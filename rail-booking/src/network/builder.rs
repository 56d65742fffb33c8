//! Name-based network construction.
//!
//! Stations are registered by name and connected by name pair. Travel
//! times are derived from the graph's edge weights when the network is
//! built; a connection may override its own time in the same call that
//! sets its distance, so the two are never maintained separately.

use std::collections::HashSet;

use tracing::debug;

use super::graph::Graph;
use crate::domain::{GraphError, InvalidStationName, StationId, StationNames};
use crate::travel_time::TravelTimeTable;

/// Errors from building a network by station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkBuildError {
    /// Station name failed registration
    #[error(transparent)]
    InvalidName(#[from] InvalidStationName),

    /// Connection refers to a name that was never registered
    #[error("unknown station: {0:?}")]
    UnknownStation(String),

    /// The same pair of stations was connected twice
    #[error("stations {0} and {1} are already connected")]
    DuplicateEdge(String, String),

    /// Edge rejected by the graph
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A built network: graph, travel times and station names.
#[derive(Debug, Clone)]
pub struct Network {
    pub graph: Graph,
    pub times: TravelTimeTable,
    pub stations: StationNames,
}

/// A connection waiting for the station count to be fixed.
#[derive(Debug, Clone)]
struct Connection {
    from: StationId,
    to: StationId,
    distance: i64,
    minutes: Option<u32>,
}

/// Builder for a [`Network`].
///
/// # Examples
///
/// ```
/// use rail_booking::network::NetworkBuilder;
///
/// let network = NetworkBuilder::new()
///     .station("Delhi")?
///     .station("Mumbai")?
///     .link("Delhi", "Mumbai", 10)?
///     .build()?;
///
/// assert_eq!(network.graph.node_count(), 2);
///
/// // A typo'd name is caught instead of silently becoming a new edge
/// assert!(NetworkBuilder::new().station("Delhi")?.connect("Delhi", "Chennai ", 20, 20).is_err());
/// # Ok::<(), rail_booking::network::NetworkBuildError>(())
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    stations: StationNames,
    connections: Vec<Connection>,
    seen: HashSet<(StationId, StationId)>,
}

impl NetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station.
    pub fn station(mut self, name: &str) -> Result<Self, NetworkBuildError> {
        self.stations.register(name)?;
        Ok(self)
    }

    /// Connect two registered stations in both directions.
    ///
    /// `distance` becomes the graph weight and `minutes` the travel time.
    pub fn connect(
        self,
        from: &str,
        to: &str,
        distance: i64,
        minutes: u32,
    ) -> Result<Self, NetworkBuildError> {
        self.push(from, to, distance, Some(minutes))
    }

    /// Connect two registered stations, taking the travel time from the
    /// distance at one minute per unit.
    pub fn link(self, from: &str, to: &str, distance: i64) -> Result<Self, NetworkBuildError> {
        self.push(from, to, distance, None)
    }

    fn push(
        mut self,
        from: &str,
        to: &str,
        distance: i64,
        minutes: Option<u32>,
    ) -> Result<Self, NetworkBuildError> {
        let from_id = self.lookup(from)?;
        let to_id = self.lookup(to)?;

        let key = (from_id.min(to_id), from_id.max(to_id));
        if !self.seen.insert(key) {
            return Err(NetworkBuildError::DuplicateEdge(
                from.to_string(),
                to.to_string(),
            ));
        }

        self.connections.push(Connection {
            from: from_id,
            to: to_id,
            distance,
            minutes,
        });
        Ok(self)
    }

    fn lookup(&self, name: &str) -> Result<StationId, NetworkBuildError> {
        self.stations
            .id(name)
            .ok_or_else(|| NetworkBuildError::UnknownStation(name.to_string()))
    }

    /// Build the graph and travel-time table.
    pub fn build(self) -> Result<Network, NetworkBuildError> {
        let mut graph = Graph::new(self.stations.len());
        for c in &self.connections {
            graph.add_edge(c.from, c.to, c.distance)?;
        }

        let mut times = TravelTimeTable::from_graph(&graph);
        for c in &self.connections {
            if let Some(minutes) = c.minutes {
                times.add_symmetric(c.from, c.to, minutes);
            }
        }

        debug!(
            stations = graph.node_count(),
            edges = graph.edge_count(),
            "network built"
        );

        Ok(Network {
            graph,
            times,
            stations: self.stations,
        })
    }
}

/// The four-city network: Delhi, Mumbai, Kolkata and Chennai.
///
/// Travel times are taken from the distances.
pub fn india_network() -> Result<Network, NetworkBuildError> {
    NetworkBuilder::new()
        .station("Delhi")?
        .station("Mumbai")?
        .station("Kolkata")?
        .station("Chennai")?
        .link("Delhi", "Mumbai", 10)?
        .link("Delhi", "Chennai", 20)?
        .link("Mumbai", "Chennai", 30)?
        .link("Mumbai", "Kolkata", 25)?
        .link("Kolkata", "Chennai", 15)?
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn india_layout() {
        let network = india_network().unwrap();
        let names: Vec<_> = network.stations.iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["Delhi", "Mumbai", "Kolkata", "Chennai"]);
        assert_eq!(network.graph.node_count(), 4);
        assert_eq!(network.graph.edge_count(), 5);
        assert_eq!(network.times.len(), 10);
    }

    #[test]
    fn times_agree_with_weights() {
        let network = india_network().unwrap();
        for (u, v, w) in network.graph.edges() {
            assert_eq!(network.times.get(u, v), Some(w));
            assert_eq!(network.times.get(v, u), Some(w));
        }
    }

    #[test]
    fn explicit_minutes_override_distance() {
        let network = NetworkBuilder::new()
            .station("Delhi")
            .unwrap()
            .station("Mumbai")
            .unwrap()
            .station("Chennai")
            .unwrap()
            .connect("Delhi", "Mumbai", 1400, 960)
            .unwrap()
            .link("Delhi", "Chennai", 20)
            .unwrap()
            .build()
            .unwrap();

        let (delhi, mumbai, chennai) = (StationId(0), StationId(1), StationId(2));
        assert_eq!(network.graph.edge_weight(delhi, mumbai), Some(1400));
        assert_eq!(network.times.get(delhi, mumbai), Some(960));
        assert_eq!(network.times.get(mumbai, delhi), Some(960));
        assert_eq!(network.times.get(chennai, delhi), Some(20));
        assert_eq!(network.times.get(mumbai, chennai), None);
    }

    #[test]
    fn unknown_station_rejected() {
        let err = NetworkBuilder::new()
            .station("Delhi")
            .unwrap()
            .connect("Delhi", "Chennai ", 20, 20)
            .unwrap_err();
        assert_eq!(err, NetworkBuildError::UnknownStation("Chennai ".into()));
    }

    #[test]
    fn duplicate_connection_rejected() {
        let err = NetworkBuilder::new()
            .station("Delhi")
            .unwrap()
            .station("Chennai")
            .unwrap()
            .connect("Delhi", "Chennai", 20, 20)
            .unwrap()
            .connect("Chennai", "Delhi", 20, 20)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "stations Chennai and Delhi are already connected"
        );
    }

    #[test]
    fn graph_errors_surface_on_build() {
        let err = NetworkBuilder::new()
            .station("A")
            .unwrap()
            .station("B")
            .unwrap()
            .connect("A", "B", -4, 4)
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            NetworkBuildError::Graph(GraphError::NegativeWeight { weight: -4 })
        );

        let err = NetworkBuilder::new()
            .station("A")
            .unwrap()
            .connect("A", "A", 1, 1)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, NetworkBuildError::Graph(GraphError::SelfLoop { .. })));
    }

    #[test]
    fn invalid_name_rejected() {
        assert!(matches!(
            NetworkBuilder::new().station(" Delhi"),
            Err(NetworkBuildError::InvalidName(_))
        ));
    }
}
