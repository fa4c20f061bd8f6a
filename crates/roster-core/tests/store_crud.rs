use std::fs;
use std::path::Path;

use tempfile::tempdir;

use roster_core::storage::{CsvFile, RecordStorage};
use roster_core::{EmployeeStore, EmployeeUpdate, ListQuery, NewEmployee};

fn open_store(path: &Path) -> EmployeeStore {
    EmployeeStore::open(Box::new(CsvFile::new(path)))
}

fn seed(store: &mut EmployeeStore) {
    store
        .create(NewEmployee::new("Ada Lovelace", "01/01/2020", "2000").with_department("Eng"))
        .expect("create should succeed");
    store
        .create(NewEmployee::new("Grace Hopper", "15/06/2019", "3000").with_department("Eng"))
        .expect("create should succeed");
    store
        .create(NewEmployee::new("Edsger Dijkstra", "05/03/2021", "2500").with_department("Sales"))
        .expect("create should succeed");
}

#[test]
fn test_sequence_ids_strictly_increase_and_display_ids_are_distinct() {
    let dir = tempdir().expect("tempdir");
    let mut store = open_store(&dir.path().join("employees.csv"));
    seed(&mut store);

    let ids: Vec<u64> = store.records().iter().map(|e| e.sequence_id).collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

    let mut display_ids: Vec<String> =
        store.records().iter().map(|e| e.display_id()).collect();
    display_ids.sort();
    display_ids.dedup();
    assert_eq!(display_ids.len(), store.len());
}

#[test]
fn test_reload_advances_the_sequence_generator() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("employees.csv");

    let mut store = open_store(&path);
    seed(&mut store);
    store.delete("E003").expect("delete should succeed");
    drop(store);

    let mut reloaded = open_store(&path);
    assert_eq!(reloaded.len(), 2);
    let created = reloaded
        .create(NewEmployee::new("Barbara Liskov", "01/02/2022", "4000"))
        .expect("create should succeed");

    // E003 was the highest ever issued, so the next id must be past it
    // even though that record is gone.
    assert_eq!(created.display_id(), "E004");
}

#[test]
fn test_every_mutation_rewrites_the_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("employees.csv");
    let mut store = open_store(&path);

    seed(&mut store);
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 3);

    store
        .update("E002", &EmployeeUpdate::new().salary("3500"))
        .expect("update should succeed");
    assert!(fs::read_to_string(&path).unwrap().contains("3500"));

    store.delete("E001").expect("delete should succeed");
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(!contents.contains("Ada Lovelace"));
}

#[test]
fn test_update_then_reload_keeps_changes() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("employees.csv");

    let mut store = open_store(&path);
    seed(&mut store);
    store
        .update(
            "E001",
            &EmployeeUpdate::new().name("Ada King").joining_date("02/02/2020"),
        )
        .expect("update should succeed")
        .expect("record should exist");
    drop(store);

    let reloaded = open_store(&path);
    let employee = reloaded.find("E001").expect("record should survive reload");
    assert_eq!(employee.name, "Ada King");
    assert_eq!(employee.formatted_date(), "02/02/2020");
    assert_eq!(employee.salary, 2000.0);
    assert_eq!(employee.department.as_deref(), Some("Eng"));
}

#[test]
fn test_unreadable_backend_degrades_to_empty_store() {
    let dir = tempdir().expect("tempdir");

    // The roster path is a directory: load fails, the store starts empty.
    let store = open_store(dir.path());
    assert!(store.is_empty());
}

#[test]
fn test_list_search_and_sort_against_file_backend() {
    let dir = tempdir().expect("tempdir");
    let mut store = open_store(&dir.path().join("employees.csv"));
    seed(&mut store);

    let query = ListQuery::new()
        .search("e")
        .sort_by("salary".parse().expect("sort key"))
        .descending(true);
    let result = store.list(&query);

    assert_eq!(result.len(), 3);
    assert_eq!(result[0].name, "Grace Hopper");
    assert_eq!(result[2].name, "Ada Lovelace");
}

#[test]
fn test_save_failure_surfaces_as_storage_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("employees.csv");

    let mut store = open_store(&path);
    seed(&mut store);

    // Point a second backend at a path whose parent does not exist; its
    // save must propagate instead of silently dropping records.
    let broken = CsvFile::new(dir.path().join("missing").join("employees.csv"));
    let result = broken.save(store.records());
    assert!(result.is_err());

    // The original file is untouched.
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 3);
}
