//! Command implementations for all netgraph commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{check, classify, connected, euler, path};
use netgraph_core::bail_usage;
use netgraph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Connected(args) => {
                let graph = ctx.load_graph(&args.graph)?;
                connected::execute(ctx.cli, &args.graph, &graph)
            }
            Commands::Classify(args) => {
                let graph = ctx.load_graph(&args.graph)?;
                classify::execute(ctx.cli, &args.graph, &graph)
            }
            Commands::Euler(args) => {
                if args.max_attempts == Some(0) {
                    bail_usage!("--max-attempts must be at least 1");
                }
                let graph = ctx.load_graph(&args.graph)?;
                let mut options = ctx.analysis_config()?.euler;
                if let Some(strategy) = args.strategy {
                    options.strategy = strategy;
                }
                if args.max_attempts.is_some() {
                    options.max_attempts = args.max_attempts;
                }
                euler::execute(ctx.cli, &args.graph, &graph, &options, args.verify)
            }
            Commands::Path(args) => {
                let graph = ctx.load_graph(&args.graph)?;
                path::execute(ctx.cli, &graph, &args.from, args.to.as_deref())
            }
            Commands::Check(args) => {
                let graph = ctx.load_graph(&args.graph)?;
                let options = ctx.analysis_config()?.euler;
                check::execute(ctx.cli, &args.graph, &graph, &options)
            }
        }
    }
}
