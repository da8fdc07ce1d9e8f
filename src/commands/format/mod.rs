//! Shared output formatting helpers for commands
//!
//! JSON goes through serde, records lines start with a one-letter tag
//! (`H` header, then per-command data lines).

use netgraph_core::error::Result;
use netgraph_core::format::records_value;
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a Records format header line
///
/// # Examples
/// ```ignore
/// print_records_header("connected", &[("graph", "g.json".to_string())]);
/// ```
pub fn print_records_header(mode: &str, extra_fields: &[(&str, String)]) {
    let mut parts = vec!["H netgraph=1 records=1".to_string(), format!("mode={}", mode)];

    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, value));
    }

    println!("{}", parts.join(" "));
}

/// Comma-separated node list for records output
pub fn records_list(nodes: &[String]) -> String {
    nodes
        .iter()
        .map(|node| records_value(node))
        .collect::<Vec<_>>()
        .join(",")
}

/// Arrow-joined node sequence for human output
pub fn human_walk(nodes: &[String]) -> String {
    nodes.join(" -> ")
}
