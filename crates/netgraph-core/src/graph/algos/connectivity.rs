use crate::error::{GraphError, Result};
use crate::graph::types::NodeId;
use crate::graph::Graph;
use std::collections::VecDeque;
use tracing::debug;

/// Breadth-first walk from `start`, marking every reached node in `visited`
///
/// Returns the reached node indices in visiting order.
fn bfs_component<N: NodeId>(graph: &Graph<N>, start: usize, visited: &mut [bool]) -> Vec<usize> {
    let mut reached = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        reached.push(current);
        for &(neighbor, _) in graph.adjacent(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    reached
}

/// Check whether every node is reachable from every other node
///
/// The walk starts at the smallest node id. Fails with
/// [`GraphError::EmptyGraph`] when there are no nodes.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn is_connected<N: NodeId>(graph: &Graph<N>) -> Result<bool> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let mut visited = vec![false; graph.node_count()];
    let reached = bfs_component(graph, 0, &mut visited).len();
    let connected = reached == graph.node_count();

    debug!(reached, connected, "connectivity_checked");
    Ok(connected)
}

/// Connected components, each sorted, ordered by their smallest member
pub fn connected_components<N: NodeId>(graph: &Graph<N>) -> Vec<Vec<N>> {
    let mut visited = vec![false; graph.node_count()];
    let mut components = Vec::new();

    // Scanning in index order means each component is discovered at its smallest member
    for start in 0..graph.node_count() {
        if visited[start] {
            continue;
        }
        let mut members = bfs_component(graph, start, &mut visited);
        members.sort_unstable();
        components.push(
            members
                .into_iter()
                .map(|idx| graph.node_at(idx).clone())
                .collect(),
        );
    }

    components
}
