//! `netgraph check` command - connectivity, classification and walk together

use std::path::Path;

use crate::cli::Cli;
use crate::commands::euler::build_walk;
use crate::commands::format::{human_walk, print_json, print_records_header, records_list};
use crate::output_by_format_result;
use netgraph_core::error::Result;
use netgraph_core::graph::{connected_components, odd_degree_nodes};
use netgraph_core::{EulerOptions, EulerianVerdict, Graph};
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
struct CheckReport {
    graph: String,
    nodes: usize,
    edges: usize,
    connected: bool,
    components: usize,
    verdict: EulerianVerdict,
    odd_nodes: Vec<String>,
    /// Present only for connected graphs whose verdict admits a walk
    walk: Option<Vec<String>>,
}

impl CheckReport {
    fn build(graph_path: &Path, graph: &Graph<String>, options: &EulerOptions) -> Result<Self> {
        let connected = graph.is_connected()?;
        let verdict = graph.classify_eulerian();

        // Classification is only meaningful for a connected graph
        let walk = if connected && verdict.has_walk() {
            Some(build_walk(graph, options, false)?)
        } else {
            debug!(connected, %verdict, "walk_skipped");
            None
        };

        Ok(CheckReport {
            graph: graph_path.display().to_string(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            connected,
            components: connected_components(graph).len(),
            verdict,
            odd_nodes: odd_degree_nodes(graph),
            walk,
        })
    }
}

/// Execute the check command
pub fn execute(
    cli: &Cli,
    graph_path: &Path,
    graph: &Graph<String>,
    options: &EulerOptions,
) -> Result<()> {
    let report = CheckReport::build(graph_path, graph, options)?;

    output_by_format_result!(cli.format,
        json => print_json(&report),
        human => {
            if !cli.quiet {
                println!("graph: {} ({} nodes, {} edges)", report.graph, report.nodes, report.edges);
            }
            if report.connected {
                println!("connected: yes");
            } else {
                println!("connected: no ({} components)", report.components);
            }
            println!("verdict: {}", report.verdict);
            if !report.odd_nodes.is_empty() {
                println!("odd-degree nodes: {}", report.odd_nodes.join(", "));
            }
            match &report.walk {
                Some(walk) => println!("walk: {}", human_walk(walk)),
                None => println!("walk: none"),
            }
        },
        records => {
            print_records_header(
                "check",
                &[
                    ("graph", report.graph.clone()),
                    ("nodes", report.nodes.to_string()),
                    ("edges", report.edges.to_string()),
                    ("connected", report.connected.to_string()),
                    ("components", report.components.to_string()),
                    ("verdict", report.verdict.to_string()),
                ],
            );
            if !report.odd_nodes.is_empty() {
                println!("O nodes={}", records_list(&report.odd_nodes));
            }
            if let Some(walk) = &report.walk {
                println!("W nodes={}", records_list(walk));
            }
        }
    )
}
