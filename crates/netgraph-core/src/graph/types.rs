use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Bound for node identifiers
///
/// Anything small, ordered and hashable qualifies: integers, strings, chars.
/// Ordering drives every deterministic choice in the algorithms.
pub trait NodeId: Clone + Ord + Hash + Debug + Display {}

impl<T: Clone + Ord + Hash + Debug + Display> NodeId for T {}

/// Dense index of an undirected edge inside a [`Graph`](super::Graph)
pub type EdgeId = usize;

/// Weight of a single undirected edge
///
/// Always finite and non-negative; `Graph` construction rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);

    pub(crate) fn new_unchecked(value: f64) -> Self {
        Weight(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Distance from a Dijkstra source
///
/// `Infinite` orders after every finite value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Finite(f64),
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0.0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Finite value, or `None` for unreachable nodes
    pub fn value(&self) -> Option<f64> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Infinite => None,
        }
    }
}

impl std::ops::Add<Weight> for Distance {
    type Output = Distance;

    fn add(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d + weight.value()),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.total_cmp(b),
            (Distance::Finite(_), Distance::Infinite) => Ordering::Less,
            (Distance::Infinite, Distance::Finite(_)) => Ordering::Greater,
            (Distance::Infinite, Distance::Infinite) => Ordering::Equal,
        }
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}

/// Unreachable distances serialize as `null`
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(d) => serializer.serialize_f64(*d),
            Distance::Infinite => serializer.serialize_none(),
        }
    }
}

/// Best known distance and path from a Dijkstra source to one node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceRecord<N> {
    pub distance: Distance,
    /// Node sequence from the source; empty when unreachable
    pub path: Vec<N>,
}

impl<N> DistanceRecord<N> {
    pub fn unreachable() -> Self {
        DistanceRecord {
            distance: Distance::Infinite,
            path: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Degree-parity classification of a connected graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EulerianVerdict {
    /// Odd-degree node count outside {0, 2}
    NoPath,
    /// Exactly two odd-degree nodes: open Eulerian path
    SemiEulerian,
    /// No odd-degree nodes: Eulerian circuit
    Eulerian,
}

impl EulerianVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            EulerianVerdict::NoPath => "no-path",
            EulerianVerdict::SemiEulerian => "semi-eulerian",
            EulerianVerdict::Eulerian => "eulerian",
        }
    }

    pub fn has_walk(&self) -> bool {
        !matches!(self, EulerianVerdict::NoPath)
    }
}

impl Display for EulerianVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Construction strategy for Eulerian walks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EulerStrategy {
    /// Stack-based circuit splicing, linear in the edge count
    #[default]
    Hierholzer,
    /// Greedy walk that retries around failed branch points
    Backtracking,
}

impl std::str::FromStr for EulerStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hierholzer" => Ok(EulerStrategy::Hierholzer),
            "backtracking" => Ok(EulerStrategy::Backtracking),
            other => Err(format!(
                "unknown strategy '{}' (expected: hierholzer, backtracking)",
                other
            )),
        }
    }
}

impl Display for EulerStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EulerStrategy::Hierholzer => write!(f, "hierholzer"),
            EulerStrategy::Backtracking => write!(f, "backtracking"),
        }
    }
}

/// Options for Eulerian walk construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EulerOptions {
    pub strategy: EulerStrategy,
    /// Attempt cap for the backtracking strategy (default: max(1, |E|^2))
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<usize>,
}

impl EulerOptions {
    /// Effective attempt cap for a graph with `edge_count` edges
    pub fn attempt_limit(&self, edge_count: usize) -> usize {
        self.max_attempts
            .unwrap_or_else(|| edge_count.saturating_mul(edge_count))
            .max(1)
    }
}
