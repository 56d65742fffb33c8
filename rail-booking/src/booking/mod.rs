//! Booking validation.
//!
//! A booking is servable when its destination is reachable from its start
//! in the station network. Validation runs a shortest-path query from the
//! start; the same query yields the route and distance reported back on a
//! confirmed booking.

mod validator;

pub use validator::{BookingOutcome, PathProvider, book, create_booking, validate_route};
