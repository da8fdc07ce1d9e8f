//! Eulerian classification and walk construction entry point
//!
//! Classification only looks at degree parity; connectivity is a separate
//! precondition checked by [`is_connected`](super::is_connected).

use crate::error::{GraphError, Result};
use crate::graph::algos::{backtrack, hierholzer};
use crate::graph::types::{EulerOptions, EulerStrategy, EulerianVerdict, NodeId};
use crate::graph::working::WorkingGraph;
use crate::graph::Graph;
use std::collections::HashSet;
use tracing::debug;

fn odd_indices<N: NodeId>(graph: &Graph<N>) -> Vec<usize> {
    (0..graph.node_count())
        .filter(|&idx| graph.degree_at(idx) % 2 == 1)
        .collect()
}

/// Nodes of odd degree, in ascending order
pub fn odd_degree_nodes<N: NodeId>(graph: &Graph<N>) -> Vec<N> {
    odd_indices(graph)
        .into_iter()
        .map(|idx| graph.node_at(idx).clone())
        .collect()
}

/// Classify a (connected) graph by the number of odd-degree nodes
pub fn classify<N: NodeId>(graph: &Graph<N>) -> EulerianVerdict {
    match odd_indices(graph).len() {
        0 => EulerianVerdict::Eulerian,
        2 => EulerianVerdict::SemiEulerian,
        _ => EulerianVerdict::NoPath,
    }
}

/// Build an Eulerian walk with the default (Hierholzer) strategy
pub fn find_eulerian_path<N: NodeId>(graph: &Graph<N>) -> Result<Vec<N>> {
    find_eulerian_path_with(graph, &EulerOptions::default())
}

/// Build an Eulerian walk that uses every edge exactly once
///
/// A semi-Eulerian graph is walked from its smallest odd-degree node. An
/// Eulerian graph is walked from the smallest node that has an edge.
#[tracing::instrument(skip(graph, options), fields(nodes = graph.node_count(), edges = graph.edge_count(), strategy = %options.strategy))]
pub fn find_eulerian_path_with<N: NodeId>(
    graph: &Graph<N>,
    options: &EulerOptions,
) -> Result<Vec<N>> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let odd = odd_indices(graph);
    let start = match odd.len() {
        0 => (0..graph.node_count())
            .find(|&idx| graph.degree_at(idx) > 0)
            .unwrap_or(0),
        2 => odd[0],
        _ => {
            return Err(GraphError::NoEulerianPath {
                odd_nodes: odd
                    .iter()
                    .map(|&idx| graph.node_at(idx).to_string())
                    .collect(),
            })
        }
    };

    debug!(start = %graph.node_at(start), odd = odd.len(), "euler_start");

    let mut working = WorkingGraph::new(graph);
    let walk = match options.strategy {
        EulerStrategy::Hierholzer => hierholzer::construct(&mut working, start)?,
        EulerStrategy::Backtracking => {
            let limit = options.attempt_limit(graph.edge_count());
            backtrack::construct(&mut working, start, limit)?
        }
    };

    Ok(walk
        .into_iter()
        .map(|idx| graph.node_at(idx).clone())
        .collect())
}

/// Check that `walk` traverses every edge of `graph` exactly once
///
/// A graph without edges accepts any single contained node.
pub fn is_valid_eulerian_walk<N: NodeId>(graph: &Graph<N>, walk: &[N]) -> bool {
    if walk.len() != graph.edge_count() + 1 {
        return false;
    }

    let Some(indices) = walk
        .iter()
        .map(|id| graph.index_of(id))
        .collect::<Option<Vec<_>>>()
    else {
        return false;
    };

    let mut seen = HashSet::new();
    indices.windows(2).all(|pair| {
        graph
            .edge_between(pair[0], pair[1])
            .is_some_and(|edge| seen.insert(edge))
    })
}
