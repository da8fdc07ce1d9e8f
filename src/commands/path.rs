//! `netgraph path` command - Dijkstra shortest paths

use std::collections::BTreeMap;

use crate::cli::Cli;
use crate::commands::format::{human_walk, print_json, print_records_header, records_list};
use crate::output_by_format_result;
use netgraph_core::error::Result;
use netgraph_core::format::records_value;
use netgraph_core::{DistanceRecord, Graph};
use serde::Serialize;

#[derive(Serialize)]
struct TargetReport<'a> {
    from: &'a str,
    to: &'a str,
    #[serde(flatten)]
    record: &'a DistanceRecord<String>,
}

#[derive(Serialize)]
struct AllTargetsReport<'a> {
    from: &'a str,
    paths: &'a BTreeMap<String, DistanceRecord<String>>,
}

fn print_record_line(target: &str, record: &DistanceRecord<String>) {
    println!(
        "D to={} distance={} hops={} path={}",
        records_value(target),
        record.distance,
        record.path.len().saturating_sub(1),
        records_list(&record.path)
    );
}

fn human_record(record: &DistanceRecord<String>) -> String {
    if record.is_reachable() {
        format!("{}  {}", record.distance, human_walk(&record.path))
    } else {
        "unreachable".to_string()
    }
}

/// Execute the path command
pub fn execute(cli: &Cli, graph: &Graph<String>, from: &str, to: Option<&str>) -> Result<()> {
    let start = from.to_string();

    match to {
        Some(to) => {
            let record = graph.shortest_path_to(&start, &to.to_string())?;
            output_by_format_result!(cli.format,
                json => print_json(&TargetReport { from, to, record: &record }),
                human => {
                    println!("{}", human_record(&record));
                },
                records => {
                    print_records_header(
                        "path",
                        &[("from", records_value(from)), ("targets", "1".to_string())],
                    );
                    print_record_line(to, &record);
                }
            )
        }
        None => {
            let records = graph.shortest_paths_from_all(&start)?;
            output_by_format_result!(cli.format,
                json => print_json(&AllTargetsReport { from, paths: &records }),
                human => {
                    for (target, record) in &records {
                        println!("{}: {}", target, human_record(record));
                    }
                },
                records => {
                    print_records_header(
                        "path",
                        &[
                            ("from", records_value(from)),
                            ("targets", records.len().to_string()),
                        ],
                    );
                    for (target, record) in &records {
                        print_record_line(target, record);
                    }
                }
            )
        }
    }
}
