use predicates::str::contains;

mod common;
use common::tbf;

#[test]
fn test_help_lists_subcommands() {
    tbf()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("backfill"))
        .stdout(contains("status"))
        .stdout(contains("export"))
        .stdout(contains("backup"));
}

#[test]
fn test_version_flag() {
    tbf()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_fails() {
    tbf().arg("frobnicate").assert().failure();
}

#[test]
fn test_backfill_help_mentions_dry_run() {
    tbf()
        .args(["backfill", "--help"])
        .assert()
        .success()
        .stdout(contains("--dry-run"));
}

#[test]
fn test_export_rejects_unknown_format() {
    tbf()
        .args(["export", "--format", "xml", "--file", "/tmp/out.xml"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}

#[test]
fn test_export_requires_file() {
    tbf().arg("export").assert().failure();
}
