use super::parse::parse_strategy;
use clap::Args;
use netgraph_core::EulerStrategy;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph file (.json, .yaml, .yml or .toml)
    pub graph: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct EulerArgs {
    /// Graph file (.json, .yaml, .yml or .toml)
    pub graph: PathBuf,

    /// Construction strategy (hierholzer, backtracking); overrides config
    #[arg(long, value_parser = parse_strategy)]
    pub strategy: Option<EulerStrategy>,

    /// Attempt cap for the backtracking strategy; overrides config
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Re-check that the walk uses every edge exactly once
    #[arg(long)]
    pub verify: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Graph file (.json, .yaml, .yml or .toml)
    pub graph: PathBuf,

    /// Start node
    #[arg(long)]
    pub from: String,

    /// Target node (default: every node)
    #[arg(long)]
    pub to: Option<String>,
}
