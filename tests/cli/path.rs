use crate::cli::support::{fixture, netgraph, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Path command tests
// ============================================================================

#[test]
fn test_path_single_target() {
    netgraph()
        .args(["path", "--from", "0", "--to", "4"])
        .arg(fixture("scenario2.yaml"))
        .assert()
        .success()
        .stdout("21  0 -> 7 -> 6 -> 5 -> 4\n");
}

#[test]
fn test_path_single_target_json() {
    let output = netgraph()
        .args(["--format", "json", "path", "--from", "0", "--to", "4"])
        .arg(fixture("scenario2.yaml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["from"], "0");
    assert_eq!(json["to"], "4");
    assert_eq!(json["distance"], 21.0);
    assert_eq!(json["path"], serde_json::json!(["0", "7", "6", "5", "4"]));
}

#[test]
fn test_path_all_targets() {
    netgraph()
        .args(["path", "--from", "0"])
        .arg(fixture("scenario2.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("0: 0  0\n"))
        .stdout(predicate::str::contains("4: 21  0 -> 7 -> 6 -> 5 -> 4\n"))
        .stdout(predicate::str::contains("8: 14  0 -> 1 -> 2 -> 8\n"));
}

#[test]
fn test_path_unreachable_target() {
    let output = netgraph()
        .args(["--format", "json", "path", "--from", "a"])
        .arg(fixture("disconnected.toml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["paths"]["c"]["distance"], 1.0);
    assert!(json["paths"]["x"]["distance"].is_null());
    assert_eq!(json["paths"]["x"]["path"], serde_json::json!([]));

    netgraph()
        .args(["path", "--from", "a", "--to", "z"])
        .arg(fixture("disconnected.toml"))
        .assert()
        .success()
        .stdout("unreachable\n");
}

#[test]
fn test_path_records() {
    netgraph()
        .args(["--format", "records", "path", "--from", "0", "--to", "4"])
        .arg(fixture("scenario2.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("H netgraph=1 records=1 mode=path from=0 targets=1"))
        .stdout(predicate::str::contains("D to=4 distance=21 hops=4 path=0,7,6,5,4"));
}

#[test]
fn test_path_unknown_node() {
    netgraph()
        .args(["path", "--from", "99"])
        .arg(fixture("scenario2.yaml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: 99"));
}
