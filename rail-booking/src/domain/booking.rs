//! Passenger, train and booking records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{StationId, StationNames};

/// Opaque passenger identifier, issued by an external registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassengerId(pub u32);

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque train identifier, issued by an external registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainId(pub u32);

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A booking of one passenger on one train between two stations.
///
/// Construction never fails and performs no existence checks. Whether a
/// booking is servable is decided by route validation at the time it is
/// made, not stored on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub passenger: PassengerId,
    pub train: TrainId,
    pub start: StationId,
    pub end: StationId,
}

impl Booking {
    /// Create a new booking record.
    pub fn new(passenger: PassengerId, train: TrainId, start: StationId, end: StationId) -> Self {
        Self {
            passenger,
            train,
            start,
            end,
        }
    }

    /// One-line summary using display names for both stations.
    ///
    /// Returns `None` if either station is missing from `names`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_booking::domain::{Booking, PassengerId, StationNames, TrainId};
    ///
    /// let mut names = StationNames::new();
    /// let delhi = names.register("Delhi").unwrap();
    /// let chennai = names.register("Chennai").unwrap();
    ///
    /// let booking = Booking::new(PassengerId(1), TrainId(101), delhi, chennai);
    /// assert_eq!(
    ///     booking.describe(&names).unwrap(),
    ///     "Passenger ID: 1, Train ID: 101, From Station: Delhi to Station: Chennai"
    /// );
    /// ```
    pub fn describe(&self, names: &StationNames) -> Option<String> {
        let from = names.name(self.start)?;
        let to = names.name(self.end)?;
        Some(format!(
            "Passenger ID: {}, Train ID: {}, From Station: {} to Station: {}",
            self.passenger, self.train, from, to
        ))
    }
}
