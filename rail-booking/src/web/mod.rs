//! Web layer for the rail booking core.
//!
//! Provides JSON endpoints for listing stations, planning routes and
//! making bookings.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
