//! Disposable working state for Eulerian construction
//!
//! Consuming an edge marks it used for both endpoints at once. The original
//! graph is only borrowed and never changes. Every consumed edge is recorded
//! in an undo log so a failed attempt can be rolled back in O(path length)
//! instead of re-copying the adjacency structure.

use crate::graph::types::{EdgeId, NodeId};
use crate::graph::Graph;

pub(crate) struct WorkingGraph<'g, N> {
    graph: &'g Graph<N>,
    used: Vec<bool>,
    /// Per node: position of the first adjacency entry that may still be unused
    cursor: Vec<usize>,
    remaining_degree: Vec<usize>,
    undo_log: Vec<EdgeId>,
    remaining: usize,
}

impl<'g, N: NodeId> WorkingGraph<'g, N> {
    pub fn new(graph: &'g Graph<N>) -> Self {
        let remaining_degree = (0..graph.node_count())
            .map(|idx| graph.degree_at(idx))
            .collect();
        Self {
            graph,
            used: vec![false; graph.edge_count()],
            cursor: vec![0; graph.node_count()],
            remaining_degree,
            undo_log: Vec::new(),
            remaining: graph.edge_count(),
        }
    }

    /// Number of edges not consumed yet
    pub fn remaining_edges(&self) -> usize {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    pub fn remaining_degree(&self, node: usize) -> usize {
        self.remaining_degree[node]
    }

    /// First unused edge of `node` in neighbor order, without consuming it
    pub fn next_unused(&mut self, node: usize) -> Option<(usize, EdgeId)> {
        let graph = self.graph;
        let adjacent = graph.adjacent(node);
        while let Some(&(neighbor, edge)) = adjacent.get(self.cursor[node]) {
            if !self.used[edge] {
                return Some((neighbor, edge));
            }
            self.cursor[node] += 1;
        }
        None
    }

    /// All unused edges of `node` in neighbor order
    pub fn unused_from(&self, node: usize) -> impl Iterator<Item = (usize, EdgeId)> + '_ {
        self.graph.adjacent(node)[self.cursor[node]..]
            .iter()
            .copied()
            .filter(move |&(_, edge)| !self.used[edge])
    }

    /// Remove an undirected edge from both endpoints
    pub fn consume(&mut self, edge: EdgeId) {
        debug_assert!(!self.used[edge], "edge {} consumed twice", edge);
        let endpoints = self.graph.edge_at(edge);
        self.used[edge] = true;
        self.remaining -= 1;
        self.remaining_degree[endpoints.a] -= 1;
        self.remaining_degree[endpoints.b] -= 1;
        self.undo_log.push(edge);
    }

    /// Restore every edge consumed since construction or the last rollback
    pub fn rollback(&mut self) {
        for edge in self.undo_log.drain(..) {
            let endpoints = self.graph.edge_at(edge);
            self.used[edge] = false;
            self.remaining += 1;
            self.remaining_degree[endpoints.a] += 1;
            self.remaining_degree[endpoints.b] += 1;
            self.cursor[endpoints.a] = 0;
            self.cursor[endpoints.b] = 0;
        }
    }
}
