//! `netgraph euler` command - build an Eulerian walk

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use crate::commands::format::{human_walk, print_json, print_records_header, records_list};
use crate::output_by_format_result;
use netgraph_core::error::{GraphError, Result};
use netgraph_core::graph::is_valid_eulerian_walk;
use netgraph_core::{trace_time, EulerOptions, EulerStrategy, EulerianVerdict, Graph};
use serde::Serialize;

#[derive(Serialize)]
struct EulerReport<'a> {
    graph: String,
    verdict: EulerianVerdict,
    strategy: EulerStrategy,
    edges: usize,
    walk: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    verified: Option<bool>,
}

/// Build the walk and optionally re-check it against the graph
pub fn build_walk(graph: &Graph<String>, options: &EulerOptions, verify: bool) -> Result<Vec<String>> {
    let start = Instant::now();
    let walk = graph.find_eulerian_path_with(options)?;
    trace_time!(start, "find_eulerian_path", length = walk.len());

    if verify && !is_valid_eulerian_walk(graph, &walk) {
        return Err(GraphError::Other(
            "constructed walk failed verification".to_string(),
        ));
    }
    Ok(walk)
}

/// Execute the euler command
pub fn execute(
    cli: &Cli,
    graph_path: &Path,
    graph: &Graph<String>,
    options: &EulerOptions,
    verify: bool,
) -> Result<()> {
    let walk = build_walk(graph, options, verify)?;
    let verdict = graph.classify_eulerian();

    output_by_format_result!(cli.format,
        json => print_json(&EulerReport {
            graph: graph_path.display().to_string(),
            verdict,
            strategy: options.strategy,
            edges: graph.edge_count(),
            walk: &walk,
            verified: verify.then_some(true),
        }),
        human => {
            println!("{}", human_walk(&walk));
            if !cli.quiet {
                println!(
                    "{} edges, {} ({})",
                    graph.edge_count(),
                    verdict,
                    options.strategy
                );
            }
        },
        records => {
            print_records_header(
                "euler",
                &[
                    ("graph", graph_path.display().to_string()),
                    ("verdict", verdict.to_string()),
                    ("strategy", options.strategy.to_string()),
                    ("edges", graph.edge_count().to_string()),
                ],
            );
            println!("W nodes={}", records_list(&walk));
        }
    )
}
