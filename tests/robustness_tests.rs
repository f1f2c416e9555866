use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn test_malformed_batch_handling() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "add, 1, 1").unwrap();
    // Unknown operation
    writeln!(csv, "subtract, 3, 1").unwrap();
    // Text in a value field
    writeln!(csv, "add, 1, not_a_number").unwrap();
    // Valid again
    writeln!(csv, "multiply, 2, 3").unwrap();

    let mut cmd = Command::new(cargo_bin!("validated-core"));
    cmd.arg("batch").arg(csv.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading request"))
        .stdout(predicate::str::contains("ADD,2"))
        .stdout(predicate::str::contains("MULTIPLY,6"))
        .stdout(predicate::str::contains("subtract").not());
}

#[test]
fn test_failed_evaluations_are_reported() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "divide, 10, 0, 5").unwrap();
    writeln!(csv, "divide, 5").unwrap();
    writeln!(csv, "divide, 9, 3").unwrap();

    let mut cmd = Command::new(cargo_bin!("validated-core"));
    cmd.arg("batch").arg(csv.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error evaluating request: Arithmetic error"))
        .stderr(predicate::str::contains("Error evaluating request: Validation error"))
        .stdout(predicate::str::contains("DIVIDE,3"));
}

#[test]
fn test_missing_batch_file() {
    let mut cmd = Command::new(cargo_bin!("validated-core"));
    cmd.args(["batch", "does/not/exist.csv"]);

    cmd.assert().failure();
}
