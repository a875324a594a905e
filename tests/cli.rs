use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("terraform-provider-null");
    cmd.env_remove("NULL_PROVIDER_SEED").env_remove("RUST_LOG");
    cmd
}

fn run_json(args: &[&str]) -> Value {
    let out = cmd()
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}

#[test]
fn read_with_input_flags() {
    let state = run_json(&["read", "--input", "a=1", "--input", "b=2"]);

    assert_eq!(state["type"], "null_data_source");
    assert_eq!(state["id"], "static");
    assert_eq!(state["attributes"]["outputs"]["a"], "1");
    assert_eq!(state["attributes"]["outputs"]["b"], "2");
    assert_eq!(state["attributes"]["has_computed_default"], "default");

    let random = state["attributes"]["random"].as_str().expect("random is a string");
    assert!(random.parse::<u64>().is_ok());
}

#[test]
fn read_from_config_file() {
    let tmp = TempDir::new().expect("create temp dir");
    let path = tmp.path().join("config.json");
    fs::write(&path, r#"{"inputs": {}, "has_computed_default": "x"}"#).expect("write config");

    let state = run_json(&["read", "--config", path.to_str().unwrap()]);

    assert_eq!(state["attributes"]["outputs"], serde_json::json!({}));
    assert_eq!(state["attributes"]["has_computed_default"], "x");
    assert_eq!(state["id"], "static");
}

#[test]
fn read_from_stdin() {
    let out = cmd()
        .args(["read", "--config", "-"])
        .write_stdin(r#"{"inputs": {"k": "v"}}"#)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let state: Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(state["attributes"]["outputs"]["k"], "v");
}

#[test]
fn read_is_reproducible_with_seed() {
    let first = run_json(&["read", "--seed", "11"]);
    let second = cmd()
        .env("NULL_PROVIDER_SEED", "11")
        .arg("read")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second: Value = serde_json::from_slice(&second).expect("valid json output");

    assert_eq!(first["attributes"]["random"], second["attributes"]["random"]);
}

#[test]
fn read_warns_about_deprecation_on_stderr() {
    let out = cmd().arg("read").assert().success().get_output().clone();
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Deprecated data source null_data_source"));
}

#[test]
fn read_rejects_computed_attribute_in_config() {
    let out = cmd()
        .args(["read", "--config", "-"])
        .write_stdin(r#"{"id": "mine"}"#)
        .assert()
        .failure()
        .get_output()
        .clone();
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("attribute \"id\" is computed and cannot be configured"));
}

#[test]
fn read_unknown_data_source_fails() {
    let out = cmd()
        .args(["read", "--data-source", "null_resource"])
        .assert()
        .failure()
        .get_output()
        .clone();
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown data source: null_resource"));
}

#[test]
fn read_table_format() {
    let out = cmd()
        .args(["read", "--format", "table", "--input", "a=1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let table = String::from_utf8_lossy(&out);
    assert!(table.contains("Attribute"));
    assert!(table.contains("static"));
    assert!(table.contains("a = 1"));
}

#[test]
fn schema_lists_attributes() {
    let schema = run_json(&["schema"]);
    let attributes = &schema["schema"]["attributes"];

    assert_eq!(schema["type"], "null_data_source");
    for name in ["inputs", "outputs", "random", "has_computed_default", "id"] {
        assert!(attributes.get(name).is_some(), "missing attribute {name}");
    }
    assert_eq!(attributes["has_computed_default"]["optional"], true);
    assert_eq!(attributes["has_computed_default"]["computed"], true);
    assert!(attributes["id"]["deprecated"].is_string());
}

#[test]
fn schema_tree_format() {
    let out = cmd()
        .args(["schema", "--format", "tree"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let tree = String::from_utf8_lossy(&out);
    assert!(tree.contains("null_data_source (deprecated)"));
    assert!(tree.contains("outputs: map of string [computed]"));
}

#[test]
fn list_data_sources() {
    let out = cmd().arg("list").assert().success().get_output().stdout.clone();
    assert_eq!(String::from_utf8_lossy(&out).trim(), "null_data_source");
}

#[test]
fn read_prints_each_deprecation_warning_once() {
    let out = cmd()
        .env("RUST_LOG", "warn")
        .arg("read")
        .assert()
        .success()
        .get_output()
        .clone();
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(
        stderr.matches("Deprecated data source null_data_source").count(),
        1,
        "stderr: {stderr}"
    );
}
