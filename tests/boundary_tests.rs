use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_negative_operands() {
    let mut cmd = Command::new(cargo_bin!("validated-core"));
    cmd.args(["calc", "add", "--", "-1.5", "-2.5", "10"]);

    cmd.assert().success().stdout("6\n");
}

#[test]
fn test_overflow_to_infinity() {
    let max = f64::MAX.to_string();
    let mut cmd = Command::new(cargo_bin!("validated-core"));
    cmd.args(["calc", "multiply", max.as_str(), "2"]);

    cmd.assert().success().stdout("inf\n");
}

#[test]
fn test_extreme_precision() {
    let mut cmd = Command::new(cargo_bin!("validated-core"));
    cmd.args(["calc", "add", "0.0001", "0.0001"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("0.0002"));
}

#[test]
fn test_negative_zero_divisor() {
    let mut cmd = Command::new(cargo_bin!("validated-core"));
    cmd.args(["calc", "divide", "--", "1", "-0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Division by zero"));
}
