//! Integration tests for the finflow CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A finflow command pointed at an isolated config directory
fn finflow(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finflow").unwrap();
    cmd.env("FINFLOW_DATA_DIR", config_dir.path());
    cmd
}

#[test]
fn bare_invocation_prints_hint() {
    let dir = TempDir::new().unwrap();
    finflow(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("finflow tui"));
}

#[test]
fn plan_prints_savings_and_allocation() {
    let dir = TempDir::new().unwrap();
    finflow(&dir)
        .args(["plan", "--income", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommended savings: $100.00"))
        .stdout(predicate::str::contains("Housing"))
        .stdout(predicate::str::contains("$300.00"))
        .stdout(predicate::str::contains("Entertainment"))
        .stdout(predicate::str::contains("$50.00"));
}

#[test]
fn plan_uses_high_income_rate() {
    let dir = TempDir::new().unwrap();
    finflow(&dir)
        .args(["plan", "--income", "5001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommended savings: $1250.25"));
}

#[test]
fn summary_reports_over_budget() {
    let dir = TempDir::new().unwrap();
    finflow(&dir)
        .args([
            "summary",
            "--income",
            "1000",
            "--expense",
            "Rent:1200:fixed",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining:"))
        .stdout(predicate::str::contains("-$200.00"))
        .stdout(predicate::str::contains("Status: negative"))
        .stdout(predicate::str::contains("over budget by $200.00"))
        .stdout(predicate::str::contains(
            "essential expenses ($1200.00) exceed your income ($1000.00)",
        ));
}

#[test]
fn summary_reports_positive_budget() {
    let dir = TempDir::new().unwrap();
    finflow(&dir)
        .args([
            "summary",
            "--income",
            "3000",
            "--expense",
            "Rent:1200:fixed",
            "--expense",
            "Groceries:400:variable",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1400.00 remaining"))
        .stdout(predicate::str::contains("Status: positive"));
}

#[test]
fn summary_rejects_malformed_expense_spec() {
    let dir = TempDir::new().unwrap();
    finflow(&dir)
        .args(["summary", "--income", "1000", "--expense", "Rent=1200"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NAME:AMOUNT:CATEGORY"));
}

#[test]
fn summary_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();
    finflow(&dir)
        .args([
            "summary",
            "--income",
            "1000",
            "--expense",
            "Rent:1200:essential",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();
    finflow(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:  $"))
        .stdout(predicate::str::contains(
            dir.path().to_string_lossy().to_string(),
        ));
}
