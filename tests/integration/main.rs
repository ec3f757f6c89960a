//! Integration tests for Modgraph
//!
//! These tests run the compiled binary against fixture trees on disk.

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn modgraph(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_modgraph"))
        .args(args)
        .output()
        .expect("Failed to execute modgraph")
}

fn write_pom(root: &Path, dir: &str, group: &str, artifact: &str, deps: &[(&str, &str)]) {
    let deps: String = deps
        .iter()
        .map(|(g, a)| format!("<dependency><groupId>{g}</groupId><artifactId>{a}</artifactId></dependency>"))
        .collect();
    let dir = root.join(dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("pom.xml"),
        format!(
            "<project><groupId>{group}</groupId><artifactId>{artifact}</artifactId><version>1.0</version><dependencies>{deps}</dependencies></project>"
        ),
    )
    .unwrap();
}

/// A, B -> A, C -> A and C -> X where X is not part of the tree.
fn create_abc_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_pom(root, "a", "org.example", "a", &[]);
    write_pom(root, "b", "org.example", "b", &[("org.example", "a")]);
    write_pom(root, "c", "org.example", "c", &[("org.example", "a"), ("org.external", "x")]);
    fs::write(root.join("c/README.md"), "not a descriptor").unwrap();
    temp_dir
}

fn read_result(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn names(result: &Value) -> Vec<String> {
    result[0]["content"]["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["name"].as_str().unwrap().to_string())
        .collect()
}

fn links(result: &Value) -> Vec<(String, String)> {
    result[0]["content"]["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| {
            (
                l["source"].as_str().unwrap().to_string(),
                l["target"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

#[test]
fn test_usage_without_arguments() {
    let output = modgraph(&[]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please provide both arguments"));
    assert!(stdout.contains("<OUTPUT_FILE> <BASE_FOLDER>"));
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_usage_with_one_argument() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("graph.json");

    let output = modgraph(&[out.as_path()]);

    assert!(String::from_utf8_lossy(&output.stdout).contains("Please provide both arguments"));
    assert!(!output.status.success());
    assert!(!out.exists());
}

#[test]
fn test_usage_with_three_arguments() {
    let repo = create_abc_repo();
    let out = repo.path().join("graph.json");

    let output = modgraph(&[out.as_path(), repo.path(), repo.path()]);

    assert!(String::from_utf8_lossy(&output.stdout).contains("Please provide both arguments"));
    assert!(!out.exists());
}

#[test]
fn test_abc_graph() {
    let repo = create_abc_repo();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("graph.json");

    let output = modgraph(&[out.as_path(), repo.path()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let result = read_result(&out);
    let entries = result.as_array().unwrap();
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(entry["name"], "CES - Maven Module Relations");
    assert_eq!(entry["description"], "Shows relations between maven modules");
    assert_eq!(entry["entity"], "MODULES");
    assert_eq!(
        entry["visualTags"],
        serde_json::json!(["digraph", "hierarchical-edge-bundle", "forced-layered-graph"])
    );
    assert!(entry["timestamp"].as_i64().unwrap() > 0);

    assert_eq!(names(&result), vec!["a", "b", "c"]);
    assert_eq!(
        links(&result),
        vec![
            ("b".to_string(), "a".to_string()),
            ("c".to_string(), "a".to_string()),
        ]
    );
    assert!(entry["content"]["nodes"].as_array().unwrap().iter().all(|n| n["component"] == 1));
    assert!(entry["content"]["links"].as_array().unwrap().iter().all(|l| l["value"] == 1));
}

#[test]
fn test_rerun_is_idempotent() {
    let repo = create_abc_repo();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("graph.json");

    assert!(modgraph(&[out.as_path(), repo.path()]).status.success());
    let first = read_result(&out);
    assert!(modgraph(&[out.as_path(), repo.path()]).status.success());
    let second = read_result(&out);

    assert_eq!(first[0]["content"], second[0]["content"]);
}

#[test]
fn test_broken_descriptors_are_skipped() {
    let repo = create_abc_repo();
    fs::create_dir_all(repo.path().join("broken")).unwrap();
    fs::write(repo.path().join("broken/pom.xml"), "<project><artifactId>").unwrap();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("graph.json");

    let output = modgraph(&[out.as_path(), repo.path()]);
    assert!(output.status.success());
    assert_eq!(names(&read_result(&out)), vec!["a", "b", "c"]);
}

#[test]
fn test_missing_base_folder_fails() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("graph.json");
    let missing = temp_dir.path().join("missing");

    let output = modgraph(&[out.as_path(), missing.as_path()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!out.exists());
}

#[test]
fn test_missing_output_directory_fails() {
    let repo = create_abc_repo();
    let out = repo.path().join("no-such-dir").join("graph.json");

    let output = modgraph(&[out.as_path(), repo.path()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!out.exists());
}

#[test]
fn test_custom_descriptor_name() {
    let repo = create_abc_repo();
    fs::rename(repo.path().join("a/pom.xml"), repo.path().join("a/module.xml")).unwrap();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("graph.json");

    let output = Command::new(env!("CARGO_BIN_EXE_modgraph"))
        .arg("--descriptor")
        .arg("module.xml")
        .arg(&out)
        .arg(repo.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let result = read_result(&out);
    assert_eq!(names(&result), vec!["a"]);
    assert!(links(&result).is_empty());
}
