mod common;

use common::{init_db, rmh, setup_test_db, temp_out};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rmh("cli_init")
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized at"))
        .stdout(predicate::str::contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list() {
    let db_path = setup_test_db("cli_add_list");
    init_db("cli_add_list", &db_path);

    rmh("cli_add_list")
        .args(["--db", &db_path, "add", "1234AB-1", "2.5", "--date", "01.01.2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2.5 h logged for 1234AB-1"));

    rmh("cli_add_list")
        .args(["--db", &db_path, "add", "1234AB-1", "1,5", "--date", "02.01.2024"])
        .assert()
        .success();

    rmh("cli_add_list")
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1234AB-1"))
        .stdout(predicate::str::contains("01.01.2024"))
        .stdout(predicate::str::contains("02.01.2024"))
        .stdout(predicate::str::contains("4.0"))
        .stdout(predicate::str::contains("Total hours"));
}

#[test]
fn test_list_empty_database() {
    let db_path = setup_test_db("cli_list_empty");
    init_db("cli_list_empty", &db_path);

    rmh("cli_list_empty")
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No vehicles recorded yet."));
}

#[test]
fn test_add_rejects_invalid_identifier() {
    let db_path = setup_test_db("cli_bad_ident");
    init_db("cli_bad_ident", &db_path);

    rmh("cli_bad_ident")
        .args(["--db", &db_path, "add", "1234ab-1", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid identifier format"));

    rmh("cli_bad_ident")
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No vehicles recorded yet."));
}

#[test]
fn test_add_rejects_non_positive_hours() {
    let db_path = setup_test_db("cli_bad_hours");
    init_db("cli_bad_hours", &db_path);

    rmh("cli_bad_hours")
        .args(["--db", &db_path, "add", "1234AB-1", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value"));

    rmh("cli_bad_hours")
        .args(["--db", &db_path, "add", "1234AB-1", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a number"));
}

#[test]
fn test_add_with_vin_kind() {
    let db_path = setup_test_db("cli_vin");
    init_db("cli_vin", &db_path);

    rmh("cli_vin")
        .args(["--db", &db_path, "add", "0427", "3", "--kind", "vin"])
        .assert()
        .success();

    rmh("cli_vin")
        .args(["--db", &db_path, "total", "--vehicle", "0427"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0427: 3.0 h"));
}

#[test]
fn test_total_per_vehicle_and_overall() {
    let db_path = setup_test_db("cli_total");
    init_db("cli_total", &db_path);

    for (ident, hours) in [("1234AB-1", "2.5"), ("1234AB-1", "1.5"), ("5678CD-2", "1")] {
        rmh("cli_total")
            .args(["--db", &db_path, "add", ident, hours])
            .assert()
            .success();
    }

    rmh("cli_total")
        .args(["--db", &db_path, "total", "--vehicle", "1234AB-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1234AB-1: 4.0 h"));

    rmh("cli_total")
        .args(["--db", &db_path, "total"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5.0"));

    rmh("cli_total")
        .args(["--db", &db_path, "total", "--vehicle", "9999ZZ-7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_hours_edit_updates_entry() {
    let db_path = setup_test_db("cli_hours");
    init_db("cli_hours", &db_path);

    rmh("cli_hours")
        .args(["--db", &db_path, "add", "1234AB-1", "2.5"])
        .assert()
        .success();

    rmh("cli_hours")
        .args(["--db", &db_path, "hours", "1234AB-1", "1", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hours updated to 6.0 h."));

    rmh("cli_hours")
        .args(["--db", &db_path, "hours", "1234AB-1", "1", "-1"])
        .assert()
        .failure();

    rmh("cli_hours")
        .args(["--db", &db_path, "hours", "1234AB-1", "2", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry #2"));

    rmh("cli_hours")
        .args(["--db", &db_path, "total", "--vehicle", "1234AB-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6.0 h"));
}

#[test]
fn test_rename_and_conflict() {
    let db_path = setup_test_db("cli_rename");
    init_db("cli_rename", &db_path);

    for ident in ["1234AB-1", "5678CD-2"] {
        rmh("cli_rename")
            .args(["--db", &db_path, "add", ident, "1"])
            .assert()
            .success();
    }

    rmh("cli_rename")
        .args(["--db", &db_path, "rename", "1234AB-1", "5678CD-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already in use"));

    rmh("cli_rename")
        .args(["--db", &db_path, "rename", "1234AB-1", "9999ZZ-7"])
        .assert()
        .success();

    rmh("cli_rename")
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9999ZZ-7"))
        .stdout(predicate::str::contains("1234AB-1").not());
}

#[test]
fn test_del_last_entry_removes_vehicle() {
    let db_path = setup_test_db("cli_del");
    init_db("cli_del", &db_path);

    rmh("cli_del")
        .args(["--db", &db_path, "add", "1234AB-1", "2"])
        .assert()
        .success();

    rmh("cli_del")
        .args(["--db", &db_path, "del", "1234AB-1", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vehicle 1234AB-1 removed"));

    rmh("cli_del")
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No vehicles recorded yet."));
}

#[test]
fn test_del_cancelled_without_confirmation() {
    let db_path = setup_test_db("cli_del_cancel");
    init_db("cli_del_cancel", &db_path);

    rmh("cli_del_cancel")
        .args(["--db", &db_path, "add", "1234AB-1", "2"])
        .assert()
        .success();

    rmh("cli_del_cancel")
        .args(["--db", &db_path, "del", "1234AB-1", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    rmh("cli_del_cancel")
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1234AB-1"));
}

#[test]
fn test_save_saved_unsave() {
    let db_path = setup_test_db("cli_save");
    init_db("cli_save", &db_path);

    rmh("cli_save")
        .args(["--db", &db_path, "save", "--auto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to save"));

    rmh("cli_save")
        .args(["--db", &db_path, "add", "1234AB-1", "4"])
        .assert()
        .success();

    rmh("cli_save")
        .args(["--db", &db_path, "save", "--auto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total of 4.0 h saved"));

    rmh("cli_save")
        .args(["--db", &db_path, "save", "--auto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already saved"));

    rmh("cli_save")
        .args(["--db", &db_path, "saved"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total hours"))
        .stdout(predicate::str::contains("4.0"));

    rmh("cli_save")
        .args(["--db", &db_path, "unsave", "1", "--yes"])
        .assert()
        .success();

    rmh("cli_save")
        .args(["--db", &db_path, "saved"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved totals yet."));

    rmh("cli_save")
        .args(["--db", &db_path, "unsave", "1", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("saved day #1"));
}

#[test]
fn test_manual_save_is_not_guarded() {
    let db_path = setup_test_db("cli_manual_save");
    init_db("cli_manual_save", &db_path);

    rmh("cli_manual_save")
        .args(["--db", &db_path, "add", "1234AB-1", "1"])
        .assert()
        .success();

    for _ in 0..2 {
        rmh("cli_manual_save")
            .args(["--db", &db_path, "save"])
            .assert()
            .success();
    }

    rmh("cli_manual_save")
        .args(["--db", &db_path, "unsave", "2", "--yes"])
        .assert()
        .success();
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("cli_export");
    let out = temp_out("cli_export", "json");
    init_db("cli_export", &db_path);

    rmh("cli_export")
        .args(["--db", &db_path, "add", "1234AB-1", "2.5", "--date", "01.01.2024"])
        .assert()
        .success();

    rmh("cli_export")
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("export written");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(doc["carDatabase"][0]["identifier"], "1234AB-1");
    assert_eq!(doc["carDatabase"][0]["records"][0]["hours"], 2.5);
    assert!(doc["savedHours"].as_array().unwrap().is_empty());

    rmh("cli_export")
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    rmh("cli_export")
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db("cli_log", &db_path);

    rmh("cli_log")
        .args(["--db", &db_path, "add", "1234AB-1", "2"])
        .assert()
        .success();

    rmh("cli_log")
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("1234AB-1"));
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("cli_db");
    init_db("cli_db", &db_path);

    rmh("cli_db")
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integrity check passed"));

    rmh("cli_db")
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));
}
