//! Command dispatch logic for netgraph

use std::time::Instant;

use crate::cli::Cli;
use netgraph_core::error::Result;
use tracing::debug;

mod command;
mod commands;

use command::{Command, CommandContext};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    debug!(elapsed = ?start.elapsed(), command = ?cli.command, "dispatch");
    cli.command.execute(&ctx)
}
