//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, RouteCache};
use crate::domain::StationNames;
use crate::network::Network;
use crate::travel_time::TravelTimeTable;

/// Shared application state.
///
/// The network is read-only once the server starts.
#[derive(Clone)]
pub struct AppState {
    /// Graph with memoized shortest-path trees
    pub routes: Arc<RouteCache>,

    /// Direct travel times between stations
    pub times: Arc<TravelTimeTable>,

    /// Station index ↔ name lookup
    pub stations: Arc<StationNames>,
}

impl AppState {
    /// Create a new app state from a built network.
    pub fn new(network: Network, cache_config: &CacheConfig) -> Self {
        Self {
            routes: Arc::new(RouteCache::new(network.graph, cache_config)),
            times: Arc::new(network.times),
            stations: Arc::new(network.stations),
        }
    }
}
