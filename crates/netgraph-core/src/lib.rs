//! Netgraph Core Library
//!
//! Connectivity, Eulerian classification and walks, and Dijkstra shortest
//! paths over validated, weighted undirected graphs.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod load;
pub mod logging;

pub use error::{GraphError, Result};
pub use graph::{
    Distance, DistanceRecord, EulerOptions, EulerStrategy, EulerianVerdict, Graph, NodeId, Weight,
};
