use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(name: &str) -> PathBuf {
    let path = repo_root().join("fixtures").join("graph").join(name);
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

#[test]
fn cli_inspect_summarizes_a_graph_document() {
    let exe = assert_cmd::cargo_bin!("cartograph-cli");
    let output = Command::new(exe)
        .args(["inspect", fixture("basic.json").to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).expect("utf-8 stdout");
    let summary: serde_json::Value = serde_json::from_str(&stdout).expect("JSON summary");
    assert_eq!(summary["nodes"], 3);
    assert_eq!(summary["edges"], 2);
    assert_eq!(summary["labeled_nodes"], 2);
    assert_eq!(summary["dangling_edges"], serde_json::json!([]));
}

#[test]
fn cli_validate_accepts_dangling_edges_unless_strict() {
    let exe = assert_cmd::cargo_bin!("cartograph-cli");
    Command::new(&exe)
        .args([
            "validate",
            fixture("dangling.json").to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    Command::new(&exe)
        .args([
            "validate",
            "--strict",
            fixture("dangling.json").to_string_lossy().as_ref(),
        ])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn cli_validate_rejects_malformed_input() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let bad = tmp.path().join("bad.json");
    fs::write(&bad, "not a graph document").expect("write fixture");

    let exe = assert_cmd::cargo_bin!("cartograph-cli");
    Command::new(exe)
        .args(["validate", bad.to_string_lossy().as_ref()])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn cli_normalize_drops_legacy_fields() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let legacy = tmp.path().join("legacy.json");
    fs::write(
        &legacy,
        r#"{
            "nodes": [
                { "id": "node-aaaaaaa", "latlng": { "lat": 1.0, "lng": 2.0 }, "label": "A", "color": "yellow" }
            ],
            "edges": []
        }"#,
    )
    .expect("write fixture");

    let out = tmp.path().join("normalized.json");
    let exe = assert_cmd::cargo_bin!("cartograph-cli");
    Command::new(exe)
        .args([
            "normalize",
            "--out",
            out.to_string_lossy().as_ref(),
            legacy.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let normalized = fs::read_to_string(&out).expect("read normalized");
    let doc: serde_json::Value = serde_json::from_str(&normalized).expect("JSON output");
    assert_eq!(doc["nodes"][0]["label"], "A");
    assert!(doc["nodes"][0].get("color").is_none());
}
