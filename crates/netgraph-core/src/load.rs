//! Graph file loading
//!
//! A graph file holds the adjacency mapping `node -> {neighbor: weight}`
//! with string node ids. The parser is picked from the file extension.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use tracing::debug;

/// On-disk shape of a graph file
pub type AdjacencyFile = BTreeMap<String, BTreeMap<String, f64>>;

/// Serialization format of a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFileFormat {
    Json,
    Yaml,
    Toml,
}

impl GraphFileFormat {
    /// Pick a format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(GraphFileFormat::Json),
            Some("yaml") | Some("yml") => Ok(GraphFileFormat::Yaml),
            Some("toml") => Ok(GraphFileFormat::Toml),
            _ => Err(GraphError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Parse adjacency text in this format
    pub fn parse(&self, content: &str) -> Result<AdjacencyFile> {
        let adjacency = match self {
            GraphFileFormat::Json => serde_json::from_str(content)?,
            GraphFileFormat::Yaml => serde_yaml::from_str(content)?,
            GraphFileFormat::Toml => toml::from_str(content)?,
        };
        Ok(adjacency)
    }
}

/// Read, parse and validate a graph file
pub fn load_graph(path: &Path) -> Result<Graph<String>> {
    let format = GraphFileFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .map_err(|e| GraphError::io_operation("read graph", path.display(), e))?;
    let adjacency = format.parse(&content)?;

    debug!(path = %path.display(), ?format, nodes = adjacency.len(), "graph_file_parsed");
    Graph::new(adjacency)
}
