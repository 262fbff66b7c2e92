//! Integration tests for the list command

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sysweep() -> Command {
    Command::cargo_bin("sysweep").unwrap()
}

fn create_sized_files() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("small.bin"), vec![b'x'; 10]).unwrap();
    fs::write(dir.path().join("large.bin"), vec![b'x'; 100]).unwrap();
    fs::write(dir.path().join("medium.bin"), vec![b'x'; 50]).unwrap();
    dir
}

#[test]
fn list_orders_by_descending_size() {
    let dir = create_sized_files();

    let output = sysweep()
        .args(["list", "--dir"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let large = stdout.find("large.bin").unwrap();
    let medium = stdout.find("medium.bin").unwrap();
    let small = stdout.find("small.bin").unwrap();
    assert!(large < medium && medium < small);
}

#[test]
fn list_applies_min_size_filter() {
    let dir = create_sized_files();

    sysweep()
        .args(["list", "--min-size", "50", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("large.bin"))
        .stdout(predicate::str::contains("medium.bin"))
        .stdout(predicate::str::contains("small.bin").not());
}

#[test]
fn list_json_decodes_to_records() {
    let dir = create_sized_files();

    let output = sysweep()
        .args(["list", "--output", "json", "--dir"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let array = records.as_array().unwrap();
    assert_eq!(array.len(), 3);
    assert_eq!(array[0]["size"], 100);
}

#[test]
fn list_yaml_matches_json_content() {
    let dir = create_sized_files();

    let json_out = sysweep()
        .args(["list", "--output", "json", "--dir"])
        .arg(dir.path())
        .output()
        .unwrap();
    let yaml_out = sysweep()
        .args(["list", "--output", "yaml", "--dir"])
        .arg(dir.path())
        .output()
        .unwrap();

    let from_json: serde_json::Value = serde_json::from_slice(&json_out.stdout).unwrap();
    let from_yaml: serde_json::Value =
        serde_yaml::from_str(&String::from_utf8(yaml_out.stdout).unwrap()).unwrap();
    assert_eq!(from_json, from_yaml);
}

#[test]
fn list_empty_directory_renders_header() {
    let dir = TempDir::new().unwrap();

    sysweep()
        .args(["list", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Path"))
        .stdout(predicate::str::contains("Size"));
}

#[test]
fn list_missing_directory_fails() {
    sysweep()
        .args(["list", "--dir", "/nonexistent/path/12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Walk failed"));
}
