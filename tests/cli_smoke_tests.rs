mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("timesheet_core_cli").expect("binary built");
    cmd.env("TIMESHEET_CORE_HOME", common::temp_base());
    cmd
}

#[test]
fn unknown_commands_print_usage_and_fail() {
    cli()
        .arg("bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: timesheet_core_cli"));
}

#[test]
fn summary_requires_a_week_number() {
    cli()
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("summary <week>"));
}

#[test]
fn summary_rejects_out_of_range_weeks() {
    cli()
        .args(["summary", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: timesheet_core_cli"));
}

#[test]
fn summary_of_an_empty_store_is_valid_json() {
    cli()
        .args(["summary", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"week\": 2"))
        .stdout(predicate::str::contains("\"expense_total\": 0.0"));
}

#[test]
fn export_writes_the_requested_file() {
    let base = common::temp_base();
    let target = base.join("out.html");
    let mut cmd = Command::cargo_bin("timesheet_core_cli").expect("binary built");
    cmd.env("TIMESHEET_CORE_HOME", &base)
        .args(["export", "1"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved summary to"));
    assert!(target.exists());
}
