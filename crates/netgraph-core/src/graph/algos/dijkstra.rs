use crate::error::Result;
use crate::graph::types::{Distance, DistanceRecord, NodeId};
use crate::graph::Graph;
use crate::trace_time;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};
use std::time::Instant;
use tracing::debug;

mod path;

use path::reconstruct_path;

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance, then node index)
///
/// Node indices follow identifier order, so equal distances settle the
/// smallest identifier first.
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub distance: Distance,
    pub node: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// State tracked during a Dijkstra run
struct DijkstraState {
    distances: Vec<Distance>,
    predecessors: Vec<Option<usize>>,
    settled: Vec<bool>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    settled_count: usize,
}

impl DijkstraState {
    fn new(node_count: usize, source: usize) -> Self {
        let mut state = Self {
            distances: vec![Distance::Infinite; node_count],
            predecessors: vec![None; node_count],
            settled: vec![false; node_count],
            heap: BinaryHeap::new(),
            settled_count: 0,
        };
        state.distances[source] = Distance::ZERO;
        state.heap.push(Reverse(HeapEntry {
            distance: Distance::ZERO,
            node: source,
        }));
        state
    }

    /// Lower the distance of `node` if `candidate` is strictly smaller
    fn relax(&mut self, node: usize, via: usize, candidate: Distance) {
        if candidate < self.distances[node] {
            self.distances[node] = candidate;
            self.predecessors[node] = Some(via);
            self.heap.push(Reverse(HeapEntry {
                distance: candidate,
                node,
            }));
        }
    }

    fn record<N: NodeId>(&self, graph: &Graph<N>, source: usize, target: usize) -> DistanceRecord<N> {
        if !self.distances[target].is_finite() {
            return DistanceRecord::unreachable();
        }
        DistanceRecord {
            distance: self.distances[target],
            path: reconstruct_path(source, target, &self.predecessors)
                .into_iter()
                .map(|idx| graph.node_at(idx).clone())
                .collect(),
        }
    }
}

/// Settle nodes in distance order, stopping early once `target` is settled
fn run<N: NodeId>(graph: &Graph<N>, source: usize, target: Option<usize>) -> DijkstraState {
    let mut state = DijkstraState::new(graph.node_count(), source);

    while let Some(Reverse(HeapEntry { distance, node })) = state.heap.pop() {
        // Stale entry left behind by a later improvement
        if state.settled[node] {
            continue;
        }
        state.settled[node] = true;
        state.settled_count += 1;

        if target == Some(node) {
            break;
        }

        for &(neighbor, edge) in graph.adjacent(node) {
            if state.settled[neighbor] {
                continue;
            }
            let candidate = distance + graph.edge_at(edge).weight;
            state.relax(neighbor, node, candidate);
        }
    }

    state
}

/// Shortest distance and path from `start` to `end`
///
/// The search stops as soon as `end` is settled. An unreachable `end` yields
/// an infinite distance and an empty path.
#[tracing::instrument(skip(graph, start, end), fields(start = %start, end = %end))]
pub fn shortest_path_to<N: NodeId>(
    graph: &Graph<N>,
    start: &N,
    end: &N,
) -> Result<DistanceRecord<N>> {
    let source = graph.require_index(start)?;
    let target = graph.require_index(end)?;
    let timer = Instant::now();

    let state = run(graph, source, Some(target));
    let record = state.record(graph, source, target);

    debug!(
        settled = state.settled_count,
        distance = %record.distance,
        "shortest_path_found"
    );
    trace_time!(timer, "shortest_path_to");
    Ok(record)
}

/// Shortest distances and paths from `start` to every node
#[tracing::instrument(skip(graph, start), fields(start = %start, nodes = graph.node_count()))]
pub fn shortest_paths_from_all<N: NodeId>(
    graph: &Graph<N>,
    start: &N,
) -> Result<BTreeMap<N, DistanceRecord<N>>> {
    let source = graph.require_index(start)?;
    let timer = Instant::now();
    let state = run(graph, source, None);

    let records: BTreeMap<N, DistanceRecord<N>> = (0..graph.node_count())
        .map(|idx| (graph.node_at(idx).clone(), state.record(graph, source, idx)))
        .collect();

    debug!(
        settled = state.settled_count,
        unreachable = graph.node_count() - state.settled_count,
        "shortest_paths_computed"
    );
    trace_time!(timer, "shortest_paths_from_all");
    Ok(records)
}
