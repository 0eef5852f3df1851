//! End-to-end CLI tests
//!
//! Drives the compiled binary against a throwaway data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn relocate(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("relocate").unwrap();
    cmd.env("RELOCATE_CLI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn init_then_summary() {
    let data_dir = TempDir::new().unwrap();

    relocate(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    relocate(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost plan (EUR)"));
}

#[test]
fn cost_add_pay_and_list() {
    let data_dir = TempDir::new().unwrap();
    relocate(&data_dir).arg("init").assert().success();

    relocate(&data_dir)
        .args(["cost", "add", "Flight tickets", "-p", "250", "-q", "4", "-c", "travel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added cost item: Flight tickets"));

    relocate(&data_dir)
        .args(["cost", "pay", "Flight tickets", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Partially paid"));

    relocate(&data_dir)
        .args(["cost", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flight tickets"))
        .stdout(predicate::str::contains("€1.000,00"));
}

#[test]
fn display_currency_override_uses_rates() {
    let data_dir = TempDir::new().unwrap();
    relocate(&data_dir).arg("init").assert().success();

    relocate(&data_dir)
        .args(["rates", "update", "--brl", "5.0", "--usd", "2.0"])
        .assert()
        .success();

    relocate(&data_dir)
        .args(["cost", "add", "Visa fee", "-p", "100", "-c", "visa"])
        .assert()
        .success();

    // 100 EUR at 2 USD per EUR
    relocate(&data_dir)
        .args(["--currency", "USD", "cost", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$200.00"));
}

#[test]
fn unknown_category_fails() {
    let data_dir = TempDir::new().unwrap();
    relocate(&data_dir).arg("init").assert().success();

    relocate(&data_dir)
        .args(["cost", "add", "Snacks", "-p", "5", "-c", "groceries"])
        .assert()
        .failure();
}

#[test]
fn task_lifecycle() {
    let data_dir = TempDir::new().unwrap();
    relocate(&data_dir).arg("init").assert().success();

    relocate(&data_dir)
        .args(["task", "add", "Book movers"])
        .assert()
        .success();

    relocate(&data_dir)
        .args(["task", "done", "Book movers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed task: Book movers"));

    relocate(&data_dir)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x]"));
}
