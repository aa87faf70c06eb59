//! End-to-end tests for the billtrack binary
//!
//! Each test runs against its own data directory via BILLTRACK_DATA_DIR.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn billtrack(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("billtrack").unwrap();
    cmd.env("BILLTRACK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_and_list_bill() {
    let dir = TempDir::new().unwrap();

    billtrack(&dir)
        .args([
            "bill", "add", "Electricity Bill", "--category", "utilities", "--amount", "100.50",
            "--due", "2030-08-15",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added bill #1: Electricity Bill"));

    billtrack(&dir)
        .args(["bill", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Electricity Bill"))
        .stdout(predicate::str::contains("$100.50"));
}

#[test]
fn ids_continue_after_delete() {
    let dir = TempDir::new().unwrap();

    for name in ["A", "B"] {
        billtrack(&dir)
            .args([
                "bill", "add", name, "--category", "groceries", "--amount", "20", "--due",
                "2030-01-01",
            ])
            .assert()
            .success();
    }

    billtrack(&dir).args(["bill", "delete", "2"]).assert().success();

    billtrack(&dir)
        .args([
            "bill", "add", "C", "--category", "groceries", "--amount", "20", "--due",
            "2030-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added bill #3"));
}

#[test]
fn snooze_and_pay() {
    let dir = TempDir::new().unwrap();

    billtrack(&dir)
        .args([
            "bill", "add", "Rent", "--category", "rent", "--amount", "1200", "--due",
            "2024-07-30", "--status", "overdue",
        ])
        .assert()
        .success();

    billtrack(&dir)
        .args(["bill", "snooze", "1", "2030-08-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("now due 2030-08-12"));

    billtrack(&dir)
        .args(["bill", "pay", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked bill #1 as paid"));

    // Paying again is idempotent, snoozing a paid bill is an error
    billtrack(&dir).args(["bill", "pay", "1"]).assert().success();
    billtrack(&dir)
        .args(["bill", "snooze", "1", "2030-09-01"])
        .assert()
        .failure();
}

#[test]
fn unknown_id_fails_with_not_found() {
    let dir = TempDir::new().unwrap();

    billtrack(&dir)
        .args(["bill", "pay", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bill not found: 99"));
}

#[test]
fn overdue_and_upcoming_queries() {
    let dir = TempDir::new().unwrap();

    billtrack(&dir)
        .args([
            "bill", "add", "Old Rent", "--category", "rent", "--amount", "1200", "--due",
            "2020-01-01",
        ])
        .assert()
        .success();

    billtrack(&dir)
        .args([
            "bill", "add", "Future Internet", "--category", "internet", "--amount", "60",
            "--due", "2099-01-01",
        ])
        .assert()
        .success();

    billtrack(&dir)
        .args(["bill", "overdue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Old Rent"))
        .stdout(predicate::str::contains("Future Internet").not());

    billtrack(&dir)
        .args(["bill", "upcoming", "--category", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Old Rent"))
        .stdout(predicate::str::contains("Future Internet"));
}

#[test]
fn overview_query() {
    let dir = TempDir::new().unwrap();

    billtrack(&dir)
        .args([
            "bill", "add", "Electricity Bill", "--category", "utilities", "--amount",
            "100.50", "--due", "2024-08-15",
        ])
        .assert()
        .success();

    billtrack(&dir)
        .args([
            "bill", "overview", "--category", "utilities", "--from", "2024-08-14", "--to",
            "2024-08-16", "--status", "upcoming",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Electricity Bill"));

    // Exclusive bounds: a window starting on the due date misses it
    billtrack(&dir)
        .args([
            "bill", "overview", "--category", "utilities", "--from", "2024-08-15", "--to",
            "2024-08-16", "--status", "upcoming",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bills found."));
}

#[test]
fn reminder_set_and_show() {
    let dir = TempDir::new().unwrap();

    billtrack(&dir)
        .args([
            "bill", "add", "Cell Phone", "--category", "cellphone", "--amount", "45",
            "--due", "2030-03-01",
        ])
        .assert()
        .success();

    billtrack(&dir)
        .args([
            "reminder", "set", "1", "--frequency", "weekly", "--start", "2030-02-01",
            "--message", "top up the plan", "--channel", "sms",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminder #1 set for bill #1"));

    billtrack(&dir)
        .args(["reminder", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly"))
        .stdout(predicate::str::contains("top up the plan"));
}

#[test]
fn init_seeds_demo_bills() {
    let dir = TempDir::new().unwrap();

    billtrack(&dir)
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    billtrack(&dir)
        .args(["bill", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Electricity Bill"))
        .stdout(predicate::str::contains("Rent"));
}

#[test]
fn export_bills_csv() {
    let dir = TempDir::new().unwrap();

    billtrack(&dir)
        .args([
            "bill", "add", "Groceries", "--category", "groceries", "--amount", "200",
            "--due", "2030-05-05",
        ])
        .assert()
        .success();

    billtrack(&dir)
        .args(["export", "bills", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id,name,category"))
        .stdout(predicate::str::contains("Groceries"));
}
