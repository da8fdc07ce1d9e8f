use crate::cli::support::{fixture, netgraph, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Classify command tests
// ============================================================================

#[test]
fn test_classify_semi_eulerian() {
    netgraph()
        .arg("classify")
        .arg(fixture("scenario1.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("semi-eulerian\n"))
        .stdout(predicate::str::contains("odd-degree nodes: 0, 4"));
}

#[test]
fn test_classify_eulerian_quiet() {
    netgraph()
        .args(["--quiet", "classify"])
        .arg(fixture("bowtie.json"))
        .assert()
        .success()
        .stdout("eulerian\n");
}

#[test]
fn test_classify_no_path_json() {
    let output = netgraph()
        .args(["--format", "json", "classify"])
        .arg(fixture("star.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["verdict"], "no-path");
    assert_eq!(
        json["odd_nodes"],
        serde_json::json!(["e", "n", "s", "w"])
    );
}

#[test]
fn test_classify_records() {
    netgraph()
        .args(["--format", "records", "classify"])
        .arg(fixture("scenario1.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=classify"))
        .stdout(predicate::str::contains("verdict=semi-eulerian odd=2"))
        .stdout(predicate::str::contains("O nodes=0,4"));
}
