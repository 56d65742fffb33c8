//! Travel times between stations.
//!
//! Durations are kept apart from the graph's edge weights and looked up
//! by exact ordered pair. A pair added with [`TravelTimeTable::add`] is
//! only found in the direction it was stored; use
//! [`TravelTimeTable::add_symmetric`] to store both directions.

use std::collections::HashMap;

use crate::domain::StationId;
use crate::network::Graph;

/// Directional station-pair → minutes lookup.
#[derive(Debug, Clone, Default)]
pub struct TravelTimeTable {
    /// Map from (start, end) to travel time in minutes.
    times: HashMap<(StationId, StationId), u32>,
}

impl TravelTimeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a symmetric table from edge weights, one minute per unit.
    ///
    /// Parallel edges keep the cheapest weight.
    pub fn from_graph(graph: &Graph) -> Self {
        let mut table = Self::new();
        for (u, v, minutes) in graph.edges() {
            if table.get(u, v).is_none_or(|existing| minutes < existing) {
                table.add_symmetric(u, v, minutes);
            }
        }
        table
    }

    /// Store the travel time for `start → end`, replacing any earlier entry.
    pub fn add(&mut self, start: StationId, end: StationId, minutes: u32) {
        self.times.insert((start, end), minutes);
    }

    /// Store the same travel time for both `start → end` and `end → start`.
    pub fn add_symmetric(&mut self, start: StationId, end: StationId, minutes: u32) {
        self.add(start, end, minutes);
        self.add(end, start, minutes);
    }

    /// Travel time for exactly `start → end`.
    ///
    /// Returns `None` if no entry exists for that ordered pair. The reverse
    /// pair is not consulted.
    pub fn get(&self, start: StationId, end: StationId) -> Option<u32> {
        self.times.get(&(start, end)).copied()
    }

    /// Returns the number of stored ordered pairs.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true if no travel times are stored.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Format minutes as `"{hours}h {minutes}m"`.
///
/// # Examples
///
/// ```
/// use rail_booking::travel_time::format_duration;
///
/// assert_eq!(format_duration(20), "0h 20m");
/// assert_eq!(format_duration(130), "2h 10m");
/// ```
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}
