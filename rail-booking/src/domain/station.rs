//! Station identifiers and the index ↔ name registry.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Dense index of a station within a network.
///
/// A network of `n` stations uses indices `0..n`. The index carries no
/// payload; display names live in [`StationNames`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub usize);

impl StationId {
    /// Returns the raw index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for StationId {
    fn from(index: usize) -> Self {
        StationId(index)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when registering an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name {name:?}: {reason}")]
pub struct InvalidStationName {
    name: String,
    reason: &'static str,
}

impl InvalidStationName {
    fn new(name: &str, reason: &'static str) -> Self {
        Self {
            name: name.to_string(),
            reason,
        }
    }
}

/// Bidirectional lookup between station indices and display names.
///
/// Indices are handed out densely in registration order, so a registry of
/// `n` names matches a graph of `n` stations.
///
/// # Examples
///
/// ```
/// use rail_booking::domain::{StationId, StationNames};
///
/// let mut names = StationNames::new();
/// let delhi = names.register("Delhi").unwrap();
/// assert_eq!(delhi, StationId(0));
/// assert_eq!(names.name(delhi), Some("Delhi"));
///
/// // Padded names are rejected rather than becoming a second station
/// assert!(names.register("Delhi ").is_err());
/// assert_eq!(names.id("Delhi "), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StationNames {
    names: Vec<String>,
    by_name: HashMap<String, StationId>,
}

impl StationNames {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station name, returning its newly assigned index.
    ///
    /// Names must be non-empty, carry no surrounding whitespace and be
    /// unique within the registry.
    pub fn register(&mut self, name: &str) -> Result<StationId, InvalidStationName> {
        if name.is_empty() {
            return Err(InvalidStationName::new(name, "must not be empty"));
        }
        if name.trim() != name {
            return Err(InvalidStationName::new(
                name,
                "must not have leading or trailing whitespace",
            ));
        }
        if self.by_name.contains_key(name) {
            return Err(InvalidStationName::new(name, "already registered"));
        }

        let id = StationId(self.names.len());
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Look up a station index by exact name.
    pub fn id(&self, name: &str) -> Option<StationId> {
        self.by_name.get(name).copied()
    }

    /// Look up a station's display name.
    pub fn name(&self, id: StationId) -> Option<&str> {
        self.names.get(id.0).map(String::as_str)
    }

    /// Returns the number of registered stations.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no stations are registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over `(index, name)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (StationId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (StationId(i), name.as_str()))
    }
}
