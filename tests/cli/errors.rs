use crate::cli::support::{fixture, netgraph, stderr_json};
use predicates::prelude::*;

// ============================================================================
// Error handling and exit code tests
// ============================================================================

#[test]
fn test_unsupported_extension_is_usage_error() {
    netgraph()
        .args(["connected", "graph.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported graph file format"));
}

#[test]
fn test_missing_graph_file() {
    netgraph()
        .arg("connected")
        .arg(fixture("absent.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read graph"));
}

#[test]
fn test_asymmetric_graph_is_data_error() {
    netgraph()
        .arg("check")
        .arg(fixture("asymmetric.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("asymmetric edge"));
}

#[test]
fn test_negative_weight_json_envelope() {
    let output = netgraph()
        .args(["--format", "json", "path", "--from", "a"])
        .arg(fixture("negative.json"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());

    let json = stderr_json(&output);
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "negative_weight");
}

#[test]
fn test_empty_graph() {
    let output = netgraph()
        .args(["--format", "json", "connected"])
        .arg(fixture("empty.json"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stderr_json(&output)["error"]["type"], "empty_graph");
}

#[test]
fn test_no_eulerian_path_envelope_lists_odd_nodes() {
    let output = netgraph()
        .args(["--format", "json", "euler"])
        .arg(fixture("star.json"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json = stderr_json(&output);
    assert_eq!(json["error"]["type"], "no_eulerian_path");
    assert_eq!(
        json["error"]["odd_nodes"],
        serde_json::json!(["e", "n", "s", "w"])
    );
}

#[test]
fn test_quiet_suppresses_error_text() {
    netgraph()
        .args(["--quiet", "connected"])
        .arg(fixture("empty.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_usage_error_json_envelope() {
    let output = netgraph()
        .args(["--format", "json", "path", "graph.json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr_json(&output)["error"]["type"], "usage_error");
}
