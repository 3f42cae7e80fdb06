use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rolo_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rolo").unwrap();
    cmd.env("ROLO_DATA_DIR", data_dir.path());
    cmd.current_dir(data_dir.path());
    cmd
}

#[test]
fn first_run_seeds_sample_users() {
    let temp = TempDir::new().unwrap();

    rolo_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("Jane Smith"))
        .stdout(predicate::str::contains("Mike Johnson"))
        .stdout(predicate::str::contains("3 users found"));
}

#[test]
fn add_then_list_shows_the_new_user() {
    let temp = TempDir::new().unwrap();

    rolo_cmd(&temp)
        .args(["add", "Ada Lovelace", "ada@example.com", "+44 20 7946 0001", "London"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User created successfully!"));

    rolo_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("4 users found"));
}

#[test]
fn search_matches_city_case_insensitively() {
    let temp = TempDir::new().unwrap();

    rolo_cmd(&temp)
        .args(["search", "new york"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("1 user found"))
        .stdout(predicate::str::contains("Jane Smith").not());
}

#[test]
fn search_with_no_match_reports_zero_users() {
    let temp = TempDir::new().unwrap();

    rolo_cmd(&temp)
        .args(["search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No users found"))
        .stdout(predicate::str::contains("0 users found"));
}

#[test]
fn delete_requires_confirmation() {
    let temp = TempDir::new().unwrap();

    // Declining leaves the list alone
    rolo_cmd(&temp)
        .args(["delete", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("User deleted successfully!").not());

    rolo_cmd(&temp)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("3 users found"));

    // Accepting removes the record
    rolo_cmd(&temp)
        .args(["delete", "2"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("User deleted successfully!"));

    rolo_cmd(&temp)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("Jane Smith").not())
        .stdout(predicate::str::contains("2 users found"));
}

#[test]
fn new_id_is_max_plus_one_after_mid_delete() {
    let temp = TempDir::new().unwrap();

    rolo_cmd(&temp)
        .args(["delete", "2", "--yes"])
        .assert()
        .success();

    rolo_cmd(&temp)
        .args(["add", "Grace Hopper", "grace@example.com", "+1 (555) 222-3333", "Arlington"])
        .assert()
        .success();

    // Ids 1 and 3 survive; the new record gets 4, not 2
    rolo_cmd(&temp)
        .args(["show", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grace Hopper"));

    rolo_cmd(&temp)
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No user with id 2."));
}

#[test]
fn edit_merges_only_the_given_fields() {
    let temp = TempDir::new().unwrap();

    rolo_cmd(&temp)
        .args(["edit", "1", "--city", "Boston"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User updated successfully!"));

    rolo_cmd(&temp)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("Boston"))
        .stdout(predicate::str::contains("New York").not());
}

#[test]
fn edit_of_missing_id_tells_the_user() {
    let temp = TempDir::new().unwrap();

    rolo_cmd(&temp)
        .args(["edit", "42", "--city", "Nowhere"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No user with id 42."));
}

#[test]
fn export_then_import_round_trips() {
    let temp = TempDir::new().unwrap();
    let export_path = temp.path().join("users-data.json");

    rolo_cmd(&temp)
        .args(["export", export_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    // Wipe, then restore from the export
    rolo_cmd(&temp).args(["clear", "--yes"]).assert().success();
    rolo_cmd(&temp)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("0 users found"));

    rolo_cmd(&temp)
        .args(["import", export_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data imported successfully!"));

    rolo_cmd(&temp)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("3 users found"));
}

#[test]
fn import_of_an_object_reports_invalid_format() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.json");
    fs::write(&path, "{}").unwrap();

    rolo_cmd(&temp)
        .args(["import", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid data format!"));

    // The store is untouched
    rolo_cmd(&temp)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("3 users found"));
}

#[test]
fn import_of_garbage_reports_import_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.json");
    fs::write(&path, "not json at all").unwrap();

    rolo_cmd(&temp)
        .args(["import", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error importing data!"));
}

#[test]
fn clear_persists_the_empty_list() {
    let temp = TempDir::new().unwrap();

    rolo_cmd(&temp)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared!"));

    // A later run must see the persisted empty list, not the seed
    rolo_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No users found"))
        .stdout(predicate::str::contains("0 users found"));
}

#[test]
fn mutations_persist_across_runs() {
    let temp = TempDir::new().unwrap();

    rolo_cmd(&temp)
        .args(["add", "Ada Lovelace", "ada@example.com", "555", "London"])
        .assert()
        .success();

    assert!(temp.path().join("users.json").exists());

    rolo_cmd(&temp)
        .args(["show", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"));
}

#[test]
fn seeding_can_be_disabled_via_config() {
    let temp = TempDir::new().unwrap();

    // The config command itself must not persist the record list
    rolo_cmd(&temp)
        .args(["config", "seed-sample-data", "false"])
        .assert()
        .success();

    rolo_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 users found"));
}

#[test]
fn config_shows_defaults() {
    let temp = TempDir::new().unwrap();

    rolo_cmd(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("export-file = users-data.json"))
        .stdout(predicate::str::contains("seed-sample-data = true"));
}
