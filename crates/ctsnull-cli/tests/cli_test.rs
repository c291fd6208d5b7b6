//! Integration test: the ctsnull binary
//!
//! Run with: cargo test -p ctsnull-cli --test cli_test

use std::process::Command;

fn ctsnull(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_ctsnull"))
        .args(args)
        .env("CTSNULL_CONFIG", "/nonexistent/ctsnull.toml")
        .env("CTSNULL_LOG", "error")
        .output()
        .expect("run ctsnull")
}

#[test]
fn test_smoke_passes() {
    let output = ctsnull(&["smoke", "--sets", "8", "--json"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let results: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let checks = results.as_array().expect("array of checks");
    assert!(checks.len() >= 8);
    for check in checks {
        assert_eq!(check["status"], "pass", "{}", check);
    }
}

#[test]
fn test_device_info_json() {
    let output = ctsnull(&["device-info", "--json"]);
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(info["name"], "null");
    assert_eq!(info["max_texel_buffer_elements"], 8096);
    assert_eq!(info["queue_families"].as_array().map(Vec::len), Some(1));
    assert_eq!(info["memory_heaps"][0], 1u64 << 31);
}

#[test]
fn test_gl_table_counts() {
    let output = ctsnull(&["gl-table", "--api", "es2.0", "--ext", "GL_OES_mapbuffer", "--json"]);
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(summary["api"], "es2.0");
    assert_eq!(summary["entry_points"], 142 + 3);
    assert_eq!(summary["loaded"], 0);
    assert_eq!(summary["extensions"][0], "GL_OES_mapbuffer");
}

#[test]
fn test_gl_table_rejects_unknown_api() {
    let output = ctsnull(&["gl-table", "--api", "gl9.9"]);
    assert!(!output.status.success());
}
