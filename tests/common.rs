use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Graphstep command with a config dir that holds no config file and a clean
/// logging environment
pub fn graphstep() -> Command {
    let mut cmd = cargo_bin_cmd!("graphstep");
    cmd.env("GRAPHSTEP_CONFIG_DIR", env!("CARGO_TARGET_TMPDIR"))
        .env_remove("GRAPHSTEP_LOG")
        .env_remove("GRAPHSTEP_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

/// 1-2 (w1), 2-3 (w2), 1-3 (w5)
pub const TRIANGLE_JSON: &str = r#"{
  "nodes": [
    { "id": 1, "x": 0.0, "y": 0.0 },
    { "id": 2, "x": 100.0, "y": 0.0 },
    { "id": 3, "x": 50.0, "y": 80.0 }
  ],
  "edges": [
    { "id": 0, "from": 1, "to": 2, "weight": 1 },
    { "id": 1, "from": 2, "to": 3, "weight": 2 },
    { "id": 2, "from": 1, "to": 3, "weight": 5 }
  ]
}"#;

/// Two components: 1-2 (w1) and 3-4 (w2)
#[allow(dead_code)]
pub const DISCONNECTED_JSON: &str = r#"{
  "nodes": [
    { "id": 1, "x": 0.0, "y": 0.0 },
    { "id": 2, "x": 10.0, "y": 0.0 },
    { "id": 3, "x": 0.0, "y": 10.0 },
    { "id": 4, "x": 10.0, "y": 10.0 }
  ],
  "edges": [
    { "id": 0, "from": 1, "to": 2, "weight": 1 },
    { "id": 1, "from": 3, "to": 4, "weight": 2 }
  ]
}"#;

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write graph file");
    path
}

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout is not valid JSON")
}
