//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `connectivity`: BFS reachability and connected components
//! - `eulerian`: Degree-parity classification and walk construction entry point
//! - `hierholzer` / `backtrack`: Eulerian walk construction strategies
//! - `dijkstra`: Weighted shortest path finding

mod backtrack;
pub mod connectivity;
pub mod dijkstra;
pub mod eulerian;
mod hierholzer;

pub use connectivity::{connected_components, is_connected};
pub use dijkstra::{shortest_path_to, shortest_paths_from_all};
pub use eulerian::{
    classify, find_eulerian_path, find_eulerian_path_with, is_valid_eulerian_walk,
    odd_degree_nodes,
};
