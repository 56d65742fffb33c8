//! Pure view of a shortest-path result for map display.
//!
//! Drawing is left to whatever front end consumes a [`RouteMap`]; this
//! module only decides what each station is labelled and which segments
//! are highlighted.

use serde::Serialize;

use crate::domain::{StationId, StationNames};
use crate::network::{Route, ShortestPaths};

/// A station marker with its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationLabel {
    pub station: StationId,
    pub name: String,
    /// Distance from the query source, `None` if unreachable.
    pub distance: Option<u64>,
    /// Display text, e.g. `"Mumbai (10)"`.
    pub label: String,
}

/// A highlighted route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteSegment {
    pub from: StationId,
    pub to: StationId,
}

/// Everything needed to draw one frame of the route map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMap {
    pub source: StationId,
    pub stations: Vec<StationLabel>,
    pub route: Vec<RouteSegment>,
}

/// Build the map view for `paths` with `route` highlighted.
///
/// Every named station gets a label; unnamed indices are left out.
pub fn render(paths: &ShortestPaths, route: &Route, names: &StationNames) -> RouteMap {
    let stations = names
        .iter()
        .map(|(station, name)| {
            let distance = paths.distance(station);
            let label = match distance {
                Some(d) => format!("{name} ({d})"),
                None => format!("{name} (unreachable)"),
            };
            StationLabel {
                station,
                name: name.to_string(),
                distance,
                label,
            }
        })
        .collect();

    let route = route
        .legs()
        .map(|(from, to)| RouteSegment { from, to })
        .collect();

    RouteMap {
        source: paths.source(),
        stations,
        route,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Graph, india_network, shortest_paths};

    #[test]
    fn india_from_delhi() {
        let network = india_network().unwrap();
        let paths = shortest_paths(&network.graph, StationId(0)).unwrap();
        let route = paths.route_to(StationId(3)).unwrap();

        let map = render(&paths, &route, &network.stations);

        let labels: Vec<_> = map.stations.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Delhi (0)", "Mumbai (10)", "Kolkata (35)", "Chennai (20)"]
        );
        assert_eq!(
            map.route,
            vec![RouteSegment {
                from: StationId(0),
                to: StationId(3)
            }]
        );
        assert_eq!(map.source, StationId(0));
    }

    #[test]
    fn unreachable_label_and_empty_route() {
        let mut names = StationNames::new();
        names.register("Delhi").unwrap();
        names.register("Port Blair").unwrap();

        let paths = shortest_paths(&Graph::new(2), StationId(0)).unwrap();
        let route = paths.route_to(StationId(1)).unwrap();
        let map = render(&paths, &route, &names);

        assert_eq!(map.stations[1].label, "Port Blair (unreachable)");
        assert_eq!(map.stations[1].distance, None);
        assert!(map.route.is_empty());
    }

    #[test]
    fn single_station_route_has_no_segments() {
        let network = india_network().unwrap();
        let paths = shortest_paths(&network.graph, StationId(1)).unwrap();
        let route = paths.route_to(StationId(1)).unwrap();

        assert!(render(&paths, &route, &network.stations).route.is_empty());
    }
}
