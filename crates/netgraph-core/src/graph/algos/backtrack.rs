//! Checkpoint backtracking over a [`WorkingGraph`]
//!
//! Each attempt walks greedily in neighbor order. The last branch point of a
//! failed attempt becomes a forbidden transition and the working graph is
//! rolled back through its undo log before the next attempt.

use crate::error::{GraphError, Result};
use crate::graph::types::NodeId;
use crate::graph::working::WorkingGraph;
use std::collections::HashSet;
use tracing::{debug, trace};

/// `(node, chosen neighbor, step)` recorded at a branch point
type Transition = (usize, usize, usize);

struct Attempt {
    walk: Vec<usize>,
    checkpoint: Option<Transition>,
}

/// One greedy walk from `start`, skipping forbidden transitions
fn attempt_walk<N: NodeId>(
    working: &mut WorkingGraph<'_, N>,
    start: usize,
    failed: &HashSet<Transition>,
) -> Attempt {
    let mut walk = Vec::with_capacity(working.remaining_edges() + 1);
    let mut checkpoint = None;
    let mut current = start;
    let mut step = 0;

    loop {
        walk.push(current);
        let degree = working.remaining_degree(current);
        if degree == 0 {
            break;
        }

        let choice = working
            .unused_from(current)
            .find(|&(candidate, _)| !failed.contains(&(current, candidate, step)));
        let Some((next, edge)) = choice else {
            break;
        };

        if degree > 2 {
            checkpoint = Some((current, next, step));
        }

        working.consume(edge);
        current = next;
        step += 1;
    }

    Attempt { walk, checkpoint }
}

/// Retry greedy walks until one consumes every edge
///
/// Fails with [`GraphError::ConstructionExhausted`] once `limit` attempts are
/// spent or a failed attempt leaves no new checkpoint to forbid.
pub(crate) fn construct<N: NodeId>(
    working: &mut WorkingGraph<'_, N>,
    start: usize,
    limit: usize,
) -> Result<Vec<usize>> {
    let mut failed: HashSet<Transition> = HashSet::new();

    for attempt in 1..=limit {
        let Attempt { walk, checkpoint } = attempt_walk(working, start, &failed);

        if working.is_exhausted() {
            debug!(attempts = attempt, length = walk.len(), "backtrack_complete");
            return Ok(walk);
        }

        trace!(attempt, stranded = working.remaining_edges(), ?checkpoint, "backtrack_retry");
        working.rollback();

        // Checkpoints skip forbidden transitions, so each one is new
        let Some(transition) = checkpoint else {
            debug!(attempts = attempt, "backtrack_no_alternative");
            return Err(GraphError::ConstructionExhausted { attempts: attempt });
        };
        failed.insert(transition);
    }

    debug!(attempts = limit, "backtrack_limit_reached");
    Err(GraphError::ConstructionExhausted { attempts: limit })
}
