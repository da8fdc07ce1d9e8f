use crate::cli::support::{fixture, netgraph, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Connected command tests
// ============================================================================

#[test]
fn test_connected_graph() {
    netgraph()
        .arg("connected")
        .arg(fixture("scenario1.json"))
        .assert()
        .success()
        .stdout("connected\n");
}

#[test]
fn test_disconnected_graph_lists_components() {
    netgraph()
        .arg("connected")
        .arg(fixture("disconnected.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("disconnected (2 components)"))
        .stdout(predicate::str::contains("a, b, c"))
        .stdout(predicate::str::contains("x, y, z"));
}

#[test]
fn test_connected_json() {
    let output = netgraph()
        .args(["--format", "json", "connected"])
        .arg(fixture("disconnected.toml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["connected"], false);
    assert_eq!(
        json["components"],
        serde_json::json!([["a", "b", "c"], ["x", "y", "z"]])
    );
}

#[test]
fn test_connected_records() {
    netgraph()
        .args(["--format", "records", "connected"])
        .arg(fixture("scenario2.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H netgraph=1 records=1 mode=connected",
        ))
        .stdout(predicate::str::contains("connected=true components=1"))
        .stdout(predicate::str::contains("C 1 size=9 nodes=0,1,2,3,4,5,6,7,8"));
}
