use crate::cli::support::{fixture, netgraph};
use predicates::prelude::*;

// ============================================================================
// Help, version and format tests
// ============================================================================

#[test]
fn test_help_flag() {
    netgraph()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: netgraph"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("connected"))
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("euler"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_version_flag() {
    netgraph()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("netgraph"));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    netgraph().assert().code(2);
}

#[test]
fn test_invalid_format_is_usage_error() {
    netgraph()
        .args(["--format", "xml", "connected"])
        .arg(fixture("scenario1.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_invalid_strategy_is_usage_error() {
    netgraph()
        .args(["euler", "--strategy", "fleury"])
        .arg(fixture("scenario1.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown strategy"));
}
