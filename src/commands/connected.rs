//! `netgraph connected` command - report reachability between all nodes

use std::path::Path;

use crate::cli::Cli;
use crate::commands::format::{print_json, print_records_header, records_list};
use crate::output_by_format_result;
use netgraph_core::error::Result;
use netgraph_core::graph::connected_components;
use netgraph_core::Graph;
use serde::Serialize;

#[derive(Serialize)]
struct ConnectivityReport<'a> {
    graph: String,
    connected: bool,
    components: &'a [Vec<String>],
}

/// Execute the connected command
pub fn execute(cli: &Cli, graph_path: &Path, graph: &Graph<String>) -> Result<()> {
    let connected = graph.is_connected()?;
    let components = connected_components(graph);

    output_by_format_result!(cli.format,
        json => print_json(&ConnectivityReport {
            graph: graph_path.display().to_string(),
            connected,
            components: &components,
        }),
        human => {
            if connected {
                println!("connected");
            } else {
                println!("disconnected ({} components)", components.len());
                if !cli.quiet {
                    for component in &components {
                        println!("  {}", component.join(", "));
                    }
                }
            }
        },
        records => {
            print_records_header(
                "connected",
                &[
                    ("graph", graph_path.display().to_string()),
                    ("connected", connected.to_string()),
                    ("components", components.len().to_string()),
                ],
            );
            for (idx, component) in components.iter().enumerate() {
                println!(
                    "C {} size={} nodes={}",
                    idx + 1,
                    component.len(),
                    records_list(component)
                );
            }
        }
    )
}
