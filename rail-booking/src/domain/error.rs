//! Domain error types.
//!
//! These errors represent precondition violations at the graph boundary.
//! Unreachable stations and missing travel times are not errors; they are
//! reported through `Option` return values.

use super::StationId;

/// Structural errors raised when building or querying a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Station index outside `0..node_count`
    #[error("station {node} is out of range for a network of {node_count} stations")]
    InvalidNode { node: StationId, node_count: usize },

    /// Edge weight below zero
    #[error("edge weight {weight} is negative")]
    NegativeWeight { weight: i64 },

    /// Edge weight above `u32::MAX`
    #[error("edge weight {weight} exceeds the maximum of 4294967295")]
    WeightTooLarge { weight: i64 },

    /// Edge from a station to itself
    #[error("station {node} cannot be connected to itself")]
    SelfLoop { node: StationId },
}
