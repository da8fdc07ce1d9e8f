//! Error types and exit codes for netgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unsupported file format)
//! - 3: Data error (invalid graph, unknown node, no Eulerian path)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph or query (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or analysing a graph
///
/// Node identifiers are carried as their `Display` rendering so the error
/// type stays independent of the graph's node type.
#[derive(Error, Debug)]
pub enum GraphError {
    // Data errors (exit code 3)
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("asymmetric edge: {from} -> {to} has no matching {to} -> {from} with the same weight")]
    AsymmetricEdge { from: String, to: String },

    #[error("negative weight {weight} on edge {from} -- {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("invalid weight {weight} on edge {from} -- {to} (must be finite)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("self-loop on node {node}")]
    SelfLoop { node: String },

    #[error("conflicting weights for edge {from} -- {to}: {first} and {second}")]
    ConflictingEdge {
        from: String,
        to: String,
        first: f64,
        second: f64,
    },

    #[error("node not found: {id}")]
    UnknownNode { id: String },

    #[error("no Eulerian path: {} nodes of odd degree", .odd_nodes.len())]
    NoEulerianPath { odd_nodes: Vec<String> },

    // Generic failures (exit code 1)
    #[error("Eulerian construction gave up after {attempts} attempts")]
    ConstructionExhausted { attempts: usize },

    #[error("Eulerian walk left {remaining} edges unreachable from the start node")]
    UnreachableEdges { remaining: usize },

    // Usage errors (exit code 2)
    #[error("unsupported graph file format: {path:?} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // I/O and parsing (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a node id absent from the graph
    pub fn unknown_node(id: impl std::fmt::Display) -> Self {
        GraphError::UnknownNode { id: id.to_string() }
    }

    /// Create an asymmetry error for the directed entry `from -> to`
    pub fn asymmetric(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        GraphError::AsymmetricEdge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for a failed I/O operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphError::Other(format!("failed to {} {}: {}", operation, path, error))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnsupportedFormat { .. }
            | GraphError::UnknownFormat(_)
            | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::EmptyGraph
            | GraphError::AsymmetricEdge { .. }
            | GraphError::NegativeWeight { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::SelfLoop { .. }
            | GraphError::ConflictingEdge { .. }
            | GraphError::UnknownNode { .. }
            | GraphError::NoEulerianPath { .. } => ExitCode::Data,

            GraphError::ConstructionExhausted { .. }
            | GraphError::UnreachableEdges { .. }
            | GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Yaml(_)
            | GraphError::Toml(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::EmptyGraph => "empty_graph",
            GraphError::AsymmetricEdge { .. } => "asymmetric_edge",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::SelfLoop { .. } => "self_loop",
            GraphError::ConflictingEdge { .. } => "conflicting_edge",
            GraphError::UnknownNode { .. } => "unknown_node",
            GraphError::NoEulerianPath { .. } => "no_eulerian_path",
            GraphError::ConstructionExhausted { .. } => "construction_exhausted",
            GraphError::UnreachableEdges { .. } => "unreachable_edges",
            GraphError::UnsupportedFormat { .. } => "unsupported_format",
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Yaml(_) => "yaml_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let GraphError::NoEulerianPath { odd_nodes } = self {
            error_obj["odd_nodes"] = serde_json::json!(odd_nodes);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for netgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
