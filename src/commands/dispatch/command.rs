//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use netgraph_core::config::AnalysisConfig;
use netgraph_core::error::Result;
use netgraph_core::load::load_graph;
use netgraph_core::Graph;
use tracing::debug;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Load and validate the graph file named on the command line
    pub fn load_graph(&self, path: &Path) -> Result<Graph<String>> {
        let graph = load_graph(path)?;
        debug!(
            elapsed = ?self.start.elapsed(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "load_graph"
        );
        Ok(graph)
    }

    /// Analysis config from `--config`, the config directory, or defaults
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        AnalysisConfig::resolve(self.cli.config.as_deref())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}
