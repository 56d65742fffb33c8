//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Booking, StationId};
use crate::render::RouteMap;

/// A station in the station list.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: StationId,
    pub name: String,
}

/// Response listing every station.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationResult>,
}

/// Query for a route between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Origin station index
    pub from: usize,

    /// Destination station index
    pub to: usize,
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub from: StationId,
    pub to: StationId,

    /// Whether any route exists
    pub reachable: bool,

    /// Total cost, `None` if unreachable
    pub distance: Option<u64>,

    /// Stations in travel order (empty if unreachable)
    pub route: Vec<StationId>,

    /// Map view for display
    pub map: RouteMap,
}

/// Request to book a journey.
#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub passenger_id: u32,
    pub train_id: u32,

    /// Origin station index
    pub from: usize,

    /// Destination station index
    pub to: usize,
}

/// A confirmed booking.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking: Booking,

    /// Human-readable booking line
    pub summary: String,

    /// Stations in travel order
    pub route: Vec<StationId>,

    /// Total cost of the route
    pub distance: u64,

    /// Direct travel time, e.g. "0h 20m"
    pub travel_time: Option<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
