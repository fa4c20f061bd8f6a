use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_roster"))
}

fn roster_cmd(roster_path: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .arg("--file")
        .arg(roster_path)
        .args(args)
        .env_remove("ROSTER_FILE")
        .env_remove("ROSTER_LOG")
        .output()
        .expect("binary should run")
}

fn add_employee(roster_path: &Path, name: &str, date: &str, salary: &str, department: &str) {
    let output = roster_cmd(
        roster_path,
        &[
            "add",
            "--no-input",
            "--name",
            name,
            "--date",
            date,
            "--salary",
            salary,
            "--department",
            department,
        ],
    );
    assert!(
        output.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn seeded_roster() -> (TempDir, PathBuf) {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("employees.csv");
    add_employee(&path, "Ada Lovelace", "01/01/2020", "2000", "Eng");
    add_employee(&path, "Grace Hopper", "15/06/2019", "3000", "Eng");
    add_employee(&path, "Edsger Dijkstra", "05/03/2021", "2500", "Sales");
    (dir, path)
}

#[test]
fn test_add_persists_and_reports_id() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("employees.csv");

    let output = roster_cmd(
        &path,
        &[
            "add", "--no-input", "--name", "Ada Lovelace", "--date", "01/01/2020", "--salary",
            "2000", "--department", "Eng",
        ],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("employee_id=E001"));

    let contents = fs::read_to_string(&path).expect("roster file should exist");
    assert_eq!(contents, "E001,Ada Lovelace,01/01/2020,2000,Eng\n");
}

#[test]
fn test_add_rejects_bad_date() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("employees.csv");

    let output = roster_cmd(
        &path,
        &[
            "add", "--no-input", "--name", "Ada", "--date", "31/02/2020", "--salary", "2000",
        ],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Validation error"));
    assert!(!path.exists() || fs::read_to_string(&path).unwrap().is_empty());
}

#[test]
fn test_list_json_round_trips_fields() {
    let (_dir, path) = seeded_roster();

    let output = roster_cmd(&path, &["list", "--json"]);
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list --json should emit JSON");
    let employees = parsed.as_array().expect("array");
    assert_eq!(employees.len(), 3);
    assert_eq!(employees[0]["id"], "E001");
    assert_eq!(employees[0]["name"], "Ada Lovelace");
    assert_eq!(employees[0]["joining_date"], "01/01/2020");
    assert_eq!(employees[1]["salary"], 3000.0);
    assert_eq!(employees[2]["department"], "Sales");
}

#[test]
fn test_list_sorts_by_salary_descending() {
    let (_dir, path) = seeded_roster();

    let output = roster_cmd(
        &path,
        &["list", "--json", "--sort-by", "salary", "--desc"],
    );
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    let names: Vec<&str> = parsed
        .as_array()
        .expect("array")
        .iter()
        .map(|employee| employee["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Grace Hopper", "Edsger Dijkstra", "Ada Lovelace"]);
}

#[test]
fn test_list_rejects_unknown_sort_key() {
    let (_dir, path) = seeded_roster();

    let output = roster_cmd(&path, &["list", "--sort-by", "height"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown sort key"));
}

#[test]
fn test_show_finds_and_misses() {
    let (_dir, path) = seeded_roster();

    let output = roster_cmd(&path, &["show", "E002", "--json"]);
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    assert_eq!(parsed["name"], "Grace Hopper");

    let missing = roster_cmd(&path, &["show", "E999"]);
    assert!(!missing.status.success());
    assert!(String::from_utf8_lossy(&missing.stderr).contains("no employee"));
}

#[test]
fn test_update_changes_only_supplied_fields() {
    let (_dir, path) = seeded_roster();

    let output = roster_cmd(
        &path,
        &["update", "E001", "--salary", "2200", "--no-input"],
    );
    assert!(
        output.status.success(),
        "update failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let shown = roster_cmd(&path, &["show", "E001", "--json"]);
    let parsed: serde_json::Value = serde_json::from_slice(&shown.stdout).expect("JSON");
    assert_eq!(parsed["salary"], 2200.0);
    assert_eq!(parsed["name"], "Ada Lovelace");
    assert_eq!(parsed["department"], "Eng");
}

#[test]
fn test_delete_requires_confirmation_or_yes() {
    let (_dir, path) = seeded_roster();

    // Non-interactive without --yes must refuse and change nothing.
    let refused = roster_cmd(&path, &["delete", "E001"]);
    assert!(!refused.status.success());
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 3);

    let deleted = roster_cmd(&path, &["delete", "E001", "--yes"]);
    assert!(deleted.status.success());
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);

    let missing = roster_cmd(&path, &["show", "E001"]);
    assert!(!missing.status.success());
}

#[test]
fn test_new_ids_keep_increasing_after_delete_and_restart() {
    let (_dir, path) = seeded_roster();

    let deleted = roster_cmd(&path, &["delete", "E003", "--yes"]);
    assert!(deleted.status.success());

    // A fresh process must pick up past E003 even though it was deleted.
    add_employee(&path, "Barbara Liskov", "01/02/2022", "4000", "Eng");
    let output = roster_cmd(&path, &["show", "E004", "--json"]);
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    assert_eq!(parsed["name"], "Barbara Liskov");
}

#[test]
fn test_search_matches_substring_case_insensitively() {
    let (_dir, path) = seeded_roster();

    let output = roster_cmd(&path, &["search", "HOPPER", "--json"]);
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    let matches = parsed.as_array().expect("array");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["id"], "E002");

    let none = roster_cmd(&path, &["search", "zzz", "--json"]);
    let parsed: serde_json::Value = serde_json::from_slice(&none.stdout).expect("JSON");
    assert_eq!(parsed.as_array().expect("array").len(), 0);
}

#[test]
fn test_report_aggregates_departments_and_extremes() {
    let (_dir, path) = seeded_roster();

    let output = roster_cmd(&path, &["report", "--json"]);
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    assert_eq!(parsed["employee_count"], 3);
    assert_eq!(parsed["departments"]["Eng"]["total_salary"], 5000.0);
    assert_eq!(parsed["departments"]["Eng"]["count"], 2);
    assert_eq!(parsed["departments"]["Sales"]["count"], 1);
    assert_eq!(parsed["earliest_joined"]["id"], "E002");
    assert_eq!(parsed["latest_joined"]["id"], "E003");
    assert_eq!(parsed["lowest_salary"]["id"], "E001");
    assert_eq!(parsed["highest_salary"]["id"], "E002");
}

#[test]
fn test_quoted_names_survive_the_cli_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("employees.csv");
    add_employee(&path, "Hopper, Grace", "15/06/2019", "3000", "R&D");

    let output = roster_cmd(&path, &["list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    assert_eq!(parsed[0]["name"], "Hopper, Grace");

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"Hopper, Grace\""));
}
