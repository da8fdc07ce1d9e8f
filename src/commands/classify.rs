//! `netgraph classify` command - Eulerian verdict from degree parity

use std::path::Path;

use crate::cli::Cli;
use crate::commands::format::{print_json, print_records_header, records_list};
use crate::output_by_format_result;
use netgraph_core::error::Result;
use netgraph_core::graph::odd_degree_nodes;
use netgraph_core::{EulerianVerdict, Graph};
use serde::Serialize;

#[derive(Serialize)]
struct ClassifyReport {
    graph: String,
    verdict: EulerianVerdict,
    odd_nodes: Vec<String>,
}

/// Execute the classify command
pub fn execute(cli: &Cli, graph_path: &Path, graph: &Graph<String>) -> Result<()> {
    let verdict = graph.classify_eulerian();
    let odd_nodes = odd_degree_nodes(graph);

    output_by_format_result!(cli.format,
        json => print_json(&ClassifyReport {
            graph: graph_path.display().to_string(),
            verdict,
            odd_nodes,
        }),
        human => {
            println!("{}", verdict);
            if !cli.quiet && !odd_nodes.is_empty() {
                println!("odd-degree nodes: {}", odd_nodes.join(", "));
            }
        },
        records => {
            print_records_header(
                "classify",
                &[
                    ("graph", graph_path.display().to_string()),
                    ("verdict", verdict.to_string()),
                    ("odd", odd_nodes.len().to_string()),
                ],
            );
            if !odd_nodes.is_empty() {
                println!("O nodes={}", records_list(&odd_nodes));
            }
        }
    )
}
