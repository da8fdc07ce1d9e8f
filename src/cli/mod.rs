//! CLI argument parsing for netgraph
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{EulerArgs, GraphArgs, PathArgs};
pub use netgraph_core::format::OutputFormat;
use parse::parse_output_format;

/// Netgraph - connectivity, Eulerian walks and shortest paths on weighted graphs
#[derive(Parser, Debug)]
#[command(name = "netgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. warn, debug, netgraph_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (default: $NETGRAPH_CONFIG_DIR/config.toml or the user config dir)
    #[arg(long, global = true, env = "NETGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether every node is reachable from every other node
    Connected(GraphArgs),

    /// Classify the graph as eulerian, semi-eulerian or no-path
    Classify(GraphArgs),

    /// Build a walk that uses every edge exactly once
    Euler(EulerArgs),

    /// Shortest distances and paths from a start node
    Path(PathArgs),

    /// Connectivity, classification and Eulerian walk in one report
    Check(GraphArgs),
}
