//! Sample graphs shared by unit tests

use crate::graph::Graph;
use std::collections::BTreeMap;

/// Five nodes, degrees 0:3 1:2 2:2 3:2 4:1 (semi-Eulerian between 0 and 4)
pub fn triangle_with_tail() -> Graph<u32> {
    Graph::from_edges([(0, 1, 1.0), (0, 2, 1.0), (1, 2, 1.0), (0, 3, 1.0), (3, 4, 1.0)])
        .unwrap()
}

/// The classic nine-node Dijkstra example graph
pub fn dijkstra_nine() -> Graph<u32> {
    Graph::from_edges([
        (0, 1, 4.0),
        (0, 7, 8.0),
        (1, 2, 8.0),
        (1, 7, 11.0),
        (2, 3, 7.0),
        (2, 8, 2.0),
        (2, 5, 4.0),
        (3, 4, 9.0),
        (3, 5, 14.0),
        (4, 5, 10.0),
        (5, 6, 2.0),
        (6, 8, 6.0),
        (6, 7, 1.0),
        (7, 8, 7.0),
    ])
    .unwrap()
}

/// Two triangles sharing node 2 (all degrees even)
pub fn bowtie() -> Graph<u32> {
    Graph::from_edges([
        (0, 1, 1.0),
        (1, 2, 1.0),
        (2, 0, 1.0),
        (2, 3, 1.0),
        (3, 4, 1.0),
        (4, 2, 1.0),
    ])
    .unwrap()
}

/// Star with four leaves (four odd-degree nodes)
pub fn star() -> Graph<u32> {
    Graph::from_edges([(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0), (0, 4, 1.0)]).unwrap()
}

/// Adjacency mapping keyed by strings from directed `(from, to, weight)` entries
///
/// Entries are inserted exactly as given, so asymmetric input is possible.
pub fn string_adjacency(
    entries: &[(&str, &str, f64)],
    isolated: &[&str],
) -> BTreeMap<String, BTreeMap<String, f64>> {
    let mut map: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    for node in isolated {
        map.entry(node.to_string()).or_default();
    }
    for (from, to, weight) in entries {
        map.entry(from.to_string())
            .or_default()
            .insert(to.to_string(), *weight);
    }
    map
}
