//! Immutable weighted undirected graph
//!
//! Nodes are interned into dense indices in ascending identifier order and
//! every undirected edge is stored once, addressed by its [`EdgeId`]. Each
//! adjacency list is sorted by neighbor, so iteration order never depends on
//! hashing.

use crate::error::{GraphError, Result};
use crate::graph::types::{EdgeId, NodeId, Weight};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// A single undirected edge between two dense node indices (`a < b`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Edge {
    pub a: usize,
    pub b: usize,
    pub weight: Weight,
}

/// Weighted undirected graph, validated at construction and read-only afterwards
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    /// Per node: `(neighbor index, edge id)` sorted by neighbor index
    adjacency: Vec<Vec<(usize, EdgeId)>>,
    edges: Vec<Edge>,
}

fn validate_weight<N: NodeId>(from: &N, to: &N, weight: f64) -> Result<Weight> {
    if !weight.is_finite() {
        return Err(GraphError::InvalidWeight {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        });
    }
    if weight < 0.0 {
        return Err(GraphError::NegativeWeight {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        });
    }
    Ok(Weight::new_unchecked(weight))
}

impl<N: NodeId> Graph<N> {
    /// Build a graph from an adjacency mapping `node -> {neighbor: weight}`
    ///
    /// The mapping must be symmetric: every `u -> {v: w}` needs a matching
    /// `v -> {u: w}`. Self-loops, negative and non-finite weights are rejected.
    pub fn new(nodes: BTreeMap<N, BTreeMap<N, f64>>) -> Result<Self> {
        let ids: Vec<N> = nodes.keys().cloned().collect();
        let index: HashMap<N, usize> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();

        let mut adjacency: Vec<Vec<(usize, EdgeId)>> = vec![Vec::new(); ids.len()];
        let mut edges = Vec::new();

        for (u, neighbors) in &nodes {
            let u_idx = index[u];
            for (v, &raw) in neighbors {
                if u == v {
                    return Err(GraphError::SelfLoop {
                        node: u.to_string(),
                    });
                }
                let weight = validate_weight(u, v, raw)?;

                let Some(&v_idx) = index.get(v) else {
                    return Err(GraphError::asymmetric(u, v));
                };
                let mirrored = nodes.get(v).and_then(|back| back.get(u));
                if mirrored != Some(&raw) {
                    return Err(GraphError::asymmetric(u, v));
                }

                // Each undirected edge is visited twice; keep the first visit
                if u_idx < v_idx {
                    let edge_id = edges.len();
                    edges.push(Edge {
                        a: u_idx,
                        b: v_idx,
                        weight,
                    });
                    adjacency[u_idx].push((v_idx, edge_id));
                    adjacency[v_idx].push((u_idx, edge_id));
                }
            }
        }

        for list in &mut adjacency {
            list.sort_unstable();
        }

        tracing::debug!(nodes = ids.len(), edges = edges.len(), "graph_built");

        Ok(Graph {
            nodes: ids,
            index,
            adjacency,
            edges,
        })
    }

    /// Build a graph from an edge list
    ///
    /// Repeating an edge with the same weight is harmless; repeating it with a
    /// different weight is a [`GraphError::ConflictingEdge`].
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        Self::from_edges_with_nodes(std::iter::empty(), edges)
    }

    /// Build a graph from an edge list plus extra (possibly isolated) nodes
    pub fn from_edges_with_nodes<I, E>(nodes: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (N, N, f64)>,
    {
        let mut map: BTreeMap<N, BTreeMap<N, f64>> = BTreeMap::new();
        for node in nodes {
            map.entry(node).or_default();
        }

        for (u, v, weight) in edges {
            if u == v {
                return Err(GraphError::SelfLoop {
                    node: u.to_string(),
                });
            }
            insert_directed(&mut map, &u, &v, weight)?;
            insert_directed(&mut map, &v, &u, weight)?;
        }

        Self::new(map)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &N) -> bool {
        self.index.contains_key(id)
    }

    /// All node ids in ascending order
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Neighbors of `id` with edge weights, in ascending neighbor order
    pub fn neighbors<'a>(&'a self, id: &N) -> Option<impl Iterator<Item = (&'a N, Weight)> + 'a> {
        let idx = self.index_of(id)?;
        Some(
            self.adjacency[idx]
                .iter()
                .map(move |&(v, e)| (&self.nodes[v], self.edges[e].weight)),
        )
    }

    pub fn degree(&self, id: &N) -> Option<usize> {
        self.index_of(id).map(|idx| self.adjacency[idx].len())
    }

    /// Weight of the edge `u -- v`, if present
    pub fn weight(&self, u: &N, v: &N) -> Option<Weight> {
        let edge = self.edge_between(self.index_of(u)?, self.index_of(v)?)?;
        Some(self.edges[edge].weight)
    }

    /// Every undirected edge once, as `(smaller id, larger id, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, Weight)> + '_ {
        self.edges
            .iter()
            .map(move |e| (&self.nodes[e.a], &self.nodes[e.b], e.weight))
    }

    /// Adjacency mapping in the same shape [`Graph::new`] accepts
    pub fn to_adjacency(&self) -> BTreeMap<N, BTreeMap<N, f64>> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, id)| {
                let neighbors = self.adjacency[idx]
                    .iter()
                    .map(|&(v, e)| (self.nodes[v].clone(), self.edges[e].weight.value()))
                    .collect();
                (id.clone(), neighbors)
            })
            .collect()
    }

    pub(crate) fn index_of(&self, id: &N) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Dense index of `id`, or [`GraphError::UnknownNode`]
    pub(crate) fn require_index(&self, id: &N) -> Result<usize> {
        self.index_of(id).ok_or_else(|| GraphError::unknown_node(id))
    }

    pub(crate) fn node_at(&self, idx: usize) -> &N {
        &self.nodes[idx]
    }

    pub(crate) fn adjacent(&self, idx: usize) -> &[(usize, EdgeId)] {
        &self.adjacency[idx]
    }

    pub(crate) fn edge_at(&self, edge: EdgeId) -> &Edge {
        &self.edges[edge]
    }

    /// Edge joining two dense indices, found by binary search on the sorted list
    pub(crate) fn edge_between(&self, u: usize, v: usize) -> Option<EdgeId> {
        let list = &self.adjacency[u];
        list.binary_search_by_key(&v, |&(n, _)| n)
            .ok()
            .map(|pos| list[pos].1)
    }

    pub(crate) fn degree_at(&self, idx: usize) -> usize {
        self.adjacency[idx].len()
    }
}

fn insert_directed<N: NodeId>(
    map: &mut BTreeMap<N, BTreeMap<N, f64>>,
    from: &N,
    to: &N,
    weight: f64,
) -> Result<()> {
    match map.entry(from.clone()).or_default().entry(to.clone()) {
        Entry::Vacant(slot) => {
            slot.insert(weight);
            Ok(())
        }
        Entry::Occupied(slot) if *slot.get() == weight => Ok(()),
        Entry::Occupied(slot) => Err(GraphError::ConflictingEdge {
            from: from.to_string(),
            to: to.to_string(),
            first: *slot.get(),
            second: weight,
        }),
    }
}
