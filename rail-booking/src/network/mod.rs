//! Weighted station network and shortest-path search.
//!
//! A [`Graph`] is built once with a fixed station count, populated with
//! undirected edges, then queried read-only. [`shortest_paths`] runs
//! Dijkstra from one source and returns distances and predecessors
//! together, and [`reconstruct_route`] walks the predecessors back into a
//! concrete [`Route`].

mod builder;
mod dijkstra;
mod graph;
mod route;

pub use builder::{Network, NetworkBuildError, NetworkBuilder, india_network};
pub use dijkstra::{ShortestPaths, shortest_paths};
pub use graph::{Edge, Graph};
pub use route::{Route, reconstruct_route};
