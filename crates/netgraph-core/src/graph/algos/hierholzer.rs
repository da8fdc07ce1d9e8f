//! Hierholzer's algorithm over a [`WorkingGraph`]

use crate::error::{GraphError, Result};
use crate::graph::types::NodeId;
use crate::graph::working::WorkingGraph;
use tracing::debug;

/// Splice closed sub-walks into a single walk starting at `start`
///
/// The caller picks `start` so that a walk exists if the edges are connected.
/// Edges still unused when the stack drains belong to another component.
pub(crate) fn construct<N: NodeId>(working: &mut WorkingGraph<'_, N>, start: usize) -> Result<Vec<usize>> {
    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(working.remaining_edges() + 1);

    while let Some(&current) = stack.last() {
        match working.next_unused(current) {
            Some((neighbor, edge)) => {
                working.consume(edge);
                stack.push(neighbor);
            }
            None => {
                circuit.push(current);
                stack.pop();
            }
        }
    }

    if !working.is_exhausted() {
        let remaining = working.remaining_edges();
        debug!(remaining, "hierholzer_stranded_edges");
        return Err(GraphError::UnreachableEdges { remaining });
    }

    circuit.reverse();
    debug!(length = circuit.len(), "hierholzer_complete");
    Ok(circuit)
}
