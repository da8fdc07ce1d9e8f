use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::PathBuf;
use std::process::Output;

/// Get a Command for netgraph, isolated from any user config
pub fn netgraph() -> Command {
    let mut cmd = cargo_bin_cmd!("netgraph");
    cmd.env("NETGRAPH_CONFIG_DIR", fixture("no-config"))
        .env_remove("NETGRAPH_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("NETGRAPH_LOG");
    cmd
}

/// Absolute path of a file under `tests/fixtures`
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

/// Parse stderr as JSON (error envelopes)
#[allow(dead_code)]
pub fn stderr_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).expect("stderr is not valid JSON")
}
