//! Domain types for the rail booking core.
//!
//! Station indices, passenger and train identifiers, and booking records.
//! Registry types enforce their invariants at construction time, so code
//! that receives them can trust their validity.

mod booking;
mod error;
mod station;

pub use booking::{Booking, PassengerId, TrainId};
pub use error::GraphError;
pub use station::{InvalidStationName, StationId, StationNames};
