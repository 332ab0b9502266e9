use predicates::str::contains;
use std::fs;

mod common;
use common::{setup_test_home, tbf, temp_out, unreachable_uri};

#[test]
fn test_export_refuses_existing_file_without_force() {
    let home = setup_test_home("export_refuses_existing");
    let out = temp_out("export_refuses_existing", "csv");
    fs::write(&out, "stale").unwrap();

    // Checked before any connection is attempted
    tbf()
        .env("HOME", &home)
        .args(["export", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    fs::remove_file(&out).ok();
}

#[test]
fn test_backfill_fails_loudly_when_mongo_is_down() {
    let home = setup_test_home("backfill_mongo_down");

    tbf()
        .env("HOME", &home)
        .args(["--uri", unreachable_uri(), "backfill"])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn test_status_fails_loudly_when_mongo_is_down() {
    let home = setup_test_home("status_mongo_down");

    tbf()
        .env("HOME", &home)
        .args(["--uri", unreachable_uri(), "status"])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}
