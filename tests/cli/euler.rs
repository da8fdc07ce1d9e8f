use crate::cli::support::{fixture, netgraph, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Euler command tests
// ============================================================================

#[test]
fn test_euler_semi_eulerian_walk() {
    netgraph()
        .arg("euler")
        .arg(fixture("scenario1.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0 -> 1 -> 2 -> 0 -> 3 -> 4\n"))
        .stdout(predicate::str::contains("5 edges, semi-eulerian (hierholzer)"));
}

#[test]
fn test_euler_backtracking_strategy() {
    netgraph()
        .args(["--quiet", "euler", "--strategy", "backtracking", "--verify"])
        .arg(fixture("bowtie.json"))
        .assert()
        .success()
        .stdout("0 -> 1 -> 2 -> 3 -> 4 -> 2 -> 0\n");
}

#[test]
fn test_euler_json() {
    let output = netgraph()
        .args(["--format", "json", "euler", "--verify"])
        .arg(fixture("bowtie.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["verdict"], "eulerian");
    assert_eq!(json["strategy"], "hierholzer");
    assert_eq!(json["edges"], 6);
    assert_eq!(json["verified"], true);

    let walk = json["walk"].as_array().unwrap();
    assert_eq!(walk.len(), 7);
    assert_eq!(walk.first(), walk.last());
}

#[test]
fn test_euler_records() {
    netgraph()
        .args(["--format", "records", "euler"])
        .arg(fixture("scenario1.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=euler"))
        .stdout(predicate::str::contains("W nodes=0,1,2,0,3,4"));
}

#[test]
fn test_euler_no_path_is_data_error() {
    netgraph()
        .arg("euler")
        .arg(fixture("star.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no Eulerian path: 4 nodes of odd degree"));
}

#[test]
fn test_euler_disconnected_edges_fail() {
    netgraph()
        .arg("euler")
        .arg(fixture("disconnected.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("3 edges unreachable"));
}

#[test]
fn test_euler_attempt_cap() {
    netgraph()
        .args([
            "--format",
            "json",
            "euler",
            "--strategy",
            "backtracking",
            "--max-attempts",
            "1",
        ])
        .arg(fixture("bowtie.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"type\":\"construction_exhausted\""));
}

#[test]
fn test_euler_zero_attempts_is_usage_error() {
    netgraph()
        .args(["euler", "--max-attempts", "0"])
        .arg(fixture("bowtie.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--max-attempts must be at least 1"));
}
