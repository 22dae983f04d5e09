use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;

mod common;
use common::{eb_in, event_rows, write_script};

#[test]
fn test_run_add_delete_edit_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(
        &dir,
        "scenario.txt",
        &[
            "add",
            "del 2",
            "edit 1",
            "set title Renamed",
            "save",
        ],
    );

    let output = eb_in(&dir)
        .arg("run")
        .arg(&script)
        .output()
        .expect("failed to run script");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows = event_rows(&stdout);

    assert_eq!(rows.len(), 3, "expected ids 1, 3, 4 in the final list:\n{stdout}");
    assert!(rows[0].starts_with("1 ") && rows[0].contains("Renamed"));
    assert!(rows[1].starts_with("3 ") && rows[1].contains("Event Baz"));
    assert!(rows[2].starts_with("4 ") && rows[2].contains("Event New - 4"));
    assert!(!stdout.contains("Event Bar"));
}

#[test]
fn test_run_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(&dir, "json.txt", &["add", "add", "del 1"]);

    let output = eb_in(&dir)
        .args(["run", "--json"])
        .arg(&script)
        .output()
        .expect("failed to run script");
    assert!(output.status.success());

    let events: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let events = events.as_array().expect("a JSON array");
    let ids: Vec<u64> = events.iter().map(|e| e["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![2, 3, 4, 5]);
    assert_eq!(events[2]["title"], "Event New - 4");
    assert_eq!(events[2]["startTime"], events[2]["endTime"]);
}

#[test]
fn test_run_cancel_leaves_list_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(
        &dir,
        "cancel.txt",
        &["edit 3", "set title Scratch", "set end 2030-01-01 10:00", "cancel"],
    );

    eb_in(&dir)
        .args(["run"])
        .arg(&script)
        .assert()
        .success()
        .stdout(contains("Edit cancelled"))
        .stdout(contains("Event Baz").and(contains("Scratch").not()));
}

#[test]
fn test_run_modal_new_gets_fresh_ids() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(
        &dir,
        "new.txt",
        &[
            "new",
            "set title Dentist",
            "set start 2025-09-01 09:00",
            "set end 2025-09-01 08:00",
            "save",
            "new",
            "save",
            "add",
        ],
    );

    let output = eb_in(&dir)
        .args(["run", "--json"])
        .arg(&script)
        .output()
        .expect("failed to run script");
    assert!(output.status.success());

    let events: Value = serde_json::from_slice(&output.stdout).unwrap();
    let events = events.as_array().unwrap();
    let ids: Vec<u64> = events.iter().map(|e| e["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    // end before start is kept as typed
    assert_eq!(events[3]["title"], "Dentist");
    assert_eq!(events[3]["startTime"], "2025-09-01T09:00:00Z");
    assert_eq!(events[3]["endTime"], "2025-09-01T08:00:00Z");
    assert_eq!(events[4]["title"], "");
    assert_eq!(events[5]["title"], "Event New - 6");
}

#[test]
fn test_run_ignores_unknown_ids() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(&dir, "ghost.txt", &["del 42", "edit 42", "save"]);

    let output = eb_in(&dir)
        .arg("run")
        .arg(&script)
        .output()
        .expect("failed to run script");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No event with id 42"));
    assert!(stdout.contains("No edit dialog is open"));
    assert_eq!(event_rows(&stdout).len(), 3);
}

#[test]
fn test_run_reports_bad_line() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(&dir, "bad.txt", &["# comment", "add", "frobnicate"]);

    eb_in(&dir)
        .arg("run")
        .arg(&script)
        .assert()
        .failure()
        .stderr(contains("line 3").and(contains("frobnicate")));
}

#[test]
fn test_run_no_seed_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(&dir, "empty.txt", &["add"]);

    let output = eb_in(&dir)
        .args(["--no-seed", "run", "--json"])
        .arg(&script)
        .output()
        .expect("failed to run script");
    assert!(output.status.success());

    let events: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(events.as_array().unwrap().len(), 1);
    assert_eq!(events[0]["id"], 1);
    assert_eq!(events[0]["title"], "Event New - 1");
}

#[test]
fn test_run_missing_script_fails() {
    let dir = tempfile::tempdir().unwrap();
    eb_in(&dir)
        .args(["run"])
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(contains("I/O error"));
}
