use crate::cli::support::{fixture, netgraph, stdout_json};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Config file tests
// ============================================================================

const BACKTRACKING_CONFIG: &str = "[euler]\nstrategy = \"backtracking\"\n";

#[test]
fn test_explicit_config_selects_strategy() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("netgraph.toml");
    fs::write(&config, BACKTRACKING_CONFIG).unwrap();

    let output = netgraph()
        .args(["--format", "json", "euler"])
        .arg(fixture("bowtie.json"))
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["strategy"], "backtracking");
}

#[test]
fn test_config_dir_env_var() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), BACKTRACKING_CONFIG).unwrap();

    let output = netgraph()
        .env("NETGRAPH_CONFIG_DIR", dir.path())
        .args(["--format", "json", "euler"])
        .arg(fixture("scenario1.json"))
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["strategy"], "backtracking");
}

#[test]
fn test_flags_override_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("netgraph.toml");
    fs::write(&config, "[euler]\nstrategy = \"backtracking\"\nmax_attempts = 1\n").unwrap();

    netgraph()
        .arg("--config")
        .arg(&config)
        .arg("euler")
        .arg(fixture("bowtie.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("gave up after 1 attempts"));

    netgraph()
        .arg("--config")
        .arg(&config)
        .args(["--quiet", "euler", "--max-attempts", "5"])
        .arg(fixture("bowtie.json"))
        .assert()
        .success()
        .stdout("0 -> 1 -> 2 -> 3 -> 4 -> 2 -> 0\n");

    netgraph()
        .arg("--config")
        .arg(&config)
        .args(["--quiet", "euler", "--strategy", "hierholzer"])
        .arg(fixture("bowtie.json"))
        .assert()
        .success();
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();
    netgraph()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("euler")
        .arg(fixture("bowtie.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("netgraph.toml");
    fs::write(&config, "[euler]\nstrategy = \"fleury\"\n").unwrap();

    netgraph()
        .arg("--config")
        .arg(&config)
        .arg("euler")
        .arg(fixture("bowtie.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
