//! Integration tests for the snapcart binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const RECEIPT: &str = "SuperMart\nMilk 2.50\nBread 1.99\nTotal 4.85\n";

#[test]
fn parse_outputs_json_by_default() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    fs::write(&input, RECEIPT).unwrap();

    Command::cargo_bin("snapcart")
        .unwrap()
        .arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"SuperMart\""))
        .stdout(predicate::str::contains("\"Milk\""))
        .stdout(predicate::str::contains("4.49"));
}

#[test]
fn parse_text_summary() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    fs::write(&input, RECEIPT).unwrap();

    Command::cargo_bin("snapcart")
        .unwrap()
        .args(["parse", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Store: SuperMart"))
        .stdout(predicate::str::contains("Computed total: 4.49"));
}

#[test]
fn parse_writes_output_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    let output = dir.path().join("out.json");
    fs::write(&input, RECEIPT).unwrap();

    Command::cargo_bin("snapcart")
        .unwrap()
        .arg("parse")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"SuperMart\""));
}

#[test]
fn parse_rejects_missing_input() {
    Command::cargo_bin("snapcart")
        .unwrap()
        .args(["parse", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn batch_parses_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), RECEIPT).unwrap();
    fs::write(dir.path().join("b.txt"), "Corner Shop\n2 apples 3.00\n").unwrap();

    Command::cargo_bin("snapcart")
        .unwrap()
        .arg("batch")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Store: SuperMart"))
        .stdout(predicate::str::contains("Store: Corner Shop"));
}

#[test]
fn custom_config_changes_thresholds() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    let config = dir.path().join("config.json");
    fs::write(&input, RECEIPT).unwrap();
    fs::write(&config, r#"{"max_reasonable_price": "2.00"}"#).unwrap();

    Command::cargo_bin("snapcart")
        .unwrap()
        .args(["parse", "--format", "text", "--config"])
        .arg(&config)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bread"))
        .stdout(predicate::str::contains("Milk").not());
}
