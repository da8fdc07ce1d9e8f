//! Weighted undirected graph and its analyses
//!
//! - `model`: the validated, immutable [`Graph`]
//! - `working`: per-call edge markers for Eulerian construction
//! - `algos`: connectivity, Eulerian classification and walks, Dijkstra

pub mod algos;
pub mod model;
pub mod types;
mod working;

#[cfg(test)]
pub(crate) mod fixtures;

pub use algos::{
    classify, connected_components, find_eulerian_path, find_eulerian_path_with, is_connected,
    is_valid_eulerian_walk, odd_degree_nodes, shortest_path_to, shortest_paths_from_all,
};
pub use model::Graph;
pub use types::{
    Distance, DistanceRecord, EdgeId, EulerOptions, EulerStrategy, EulerianVerdict, NodeId,
    Weight,
};

use crate::error::Result;
use std::collections::BTreeMap;

impl<N: NodeId> Graph<N> {
    /// See [`algos::is_connected`]
    pub fn is_connected(&self) -> Result<bool> {
        algos::is_connected(self)
    }

    /// See [`algos::classify`]
    pub fn classify_eulerian(&self) -> EulerianVerdict {
        algos::classify(self)
    }

    /// See [`algos::find_eulerian_path`]
    pub fn find_eulerian_path(&self) -> Result<Vec<N>> {
        algos::find_eulerian_path(self)
    }

    pub fn find_eulerian_path_with(&self, options: &EulerOptions) -> Result<Vec<N>> {
        algos::find_eulerian_path_with(self, options)
    }

    /// See [`algos::shortest_path_to`]
    pub fn shortest_path_to(&self, start: &N, end: &N) -> Result<DistanceRecord<N>> {
        algos::shortest_path_to(self, start, end)
    }

    /// See [`algos::shortest_paths_from_all`]
    pub fn shortest_paths_from_all(&self, start: &N) -> Result<BTreeMap<N, DistanceRecord<N>>> {
        algos::shortest_paths_from_all(self, start)
    }
}
