use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::Path, process};
use tempfile::TempDir;

fn calver_check(repo: &Path) -> Command {
    let mut cmd = Command::cargo_bin("calver-check").unwrap();
    cmd.args(["--no-fetch", "--date", "2024-01-18", "--repo"])
        .arg(repo)
        .env_remove("RUST_LOG");
    cmd
}

fn git(dir: &Path, args: &[&str]) -> bool {
    process::Command::new("git")
        .args(["-c", "user.name=test", "-c", "user.email=test@example.com"])
        .args(["-c", "commit.gpgsign=false", "-c", "tag.gpgsign=false"])
        .args(args)
        .current_dir(dir)
        .status()
        .is_ok_and(|status| status.success())
}

/// A repository tagged with `tags`, or `None` if git isn't usable here.
fn tagged_repo(tags: &[&str]) -> Option<TempDir> {
    let dir = TempDir::new().unwrap();
    if !git(dir.path(), &["init", "-q"])
        || !git(dir.path(), &["commit", "-q", "--allow-empty", "-m", "init"])
    {
        return None;
    }
    for tag in tags {
        assert!(git(dir.path(), &["tag", tag]));
    }
    Some(dir)
}

#[test]
fn no_subcommand_prints_usage_and_fails() {
    let dir = TempDir::new().unwrap();
    calver_check(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn calc_without_tags_starts_at_one() {
    let dir = TempDir::new().unwrap();
    calver_check(dir.path())
        .arg("calc")
        .assert()
        .success()
        .stdout("2024.01.18.1\n")
        .stderr("");
}

#[test]
fn calc_logs_missing_tags_when_verbose() {
    let dir = TempDir::new().unwrap();
    calver_check(dir.path())
        .env("GIT_CEILING_DIRECTORIES", dir.path().parent().unwrap())
        .args(["-vv", "calc"])
        .assert()
        .success()
        .stdout("2024.01.18.1\n")
        .stderr(predicate::str::contains("no git tags available"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn calc_with_self_checks() {
    let dir = TempDir::new().unwrap();
    calver_check(dir.path())
        .args(["calc", "--validate", "--pep440"])
        .assert()
        .success()
        .stdout("2024.01.18.1\n")
        .stderr("");
}

#[test]
fn calc_json() {
    let dir = TempDir::new().unwrap();
    let out = calver_check(dir.path())
        .args(["--json", "calc"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["version"], "2024.01.18.1");
}

#[test]
fn calc_from_git_tags() {
    let Some(repo) = tagged_repo(&["v2024.01.18.1", "v2024.01.18.2", "v2024.01.17.9", "junk"])
    else {
        return;
    };
    calver_check(repo.path())
        .arg("calc")
        .assert()
        .success()
        .stdout("2024.01.18.3\n");
}

#[test]
fn check_reports_each_source() {
    let Some(repo) = tagged_repo(&["v2024.01.17.5", "v2024.01.18.2"]) else {
        return;
    };
    fs::write(
        repo.path().join("Cargo.toml"),
        "[package]\nname = \"demo\"\nversion = \"2024.1.18\"\n",
    )
    .unwrap();
    fs::write(repo.path().join("VERSION"), "2024.01.18.1\n").unwrap();

    calver_check(repo.path())
        .arg("check")
        .assert()
        .success()
        .stdout(
            "Current versions:\n  package: 2024.1.18\n  git_tag: 2024.01.18.2\n  file: \
             2024.01.18.1\n",
        );
}

#[test]
fn check_with_nothing_found_fails() {
    let dir = TempDir::new().unwrap();
    calver_check(dir.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("No version information found"));
}

#[test]
fn check_reads_explicit_version_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("release.txt");
    fs::write(&file, "2024.01.18.4").unwrap();

    let out = calver_check(dir.path())
        .args(["--json", "check", "--version-file"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v, serde_json::json!({"versions": {"file": "2024.01.18.4"}}));
}

#[test]
fn validate_valid_version() {
    let dir = TempDir::new().unwrap();
    calver_check(dir.path())
        .args(["validate", "v2024.01.18.1"])
        .assert()
        .success()
        .stdout("Version 'v2024.01.18.1' is valid and PEP 440 compliant\n");
}

#[test]
fn validate_invalid_version() {
    let dir = TempDir::new().unwrap();
    calver_check(dir.path())
        .args(["validate", "2024.13.18.1"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "Invalid CalVer format: 2024.13.18.1",
        ));
}

#[test]
fn validate_missing_version() {
    let dir = TempDir::new().unwrap();
    calver_check(dir.path())
        .arg("validate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("version argument required"));
}

#[test]
fn validate_empty_version() {
    let dir = TempDir::new().unwrap();
    calver_check(dir.path())
        .args(["validate", ""])
        .assert()
        .code(1)
        .stdout("")
        .stderr("Error: version argument required\n");
}

#[test]
fn compare_equal() {
    let dir = TempDir::new().unwrap();
    calver_check(dir.path())
        .args(["compare", "2024.01.18.1", "2024.01.18.1"])
        .assert()
        .success()
        .stdout("2024.01.18.1 == 2024.01.18.1\n");
}

#[test]
fn compare_json() {
    let dir = TempDir::new().unwrap();
    let out = calver_check(dir.path())
        .args(["compare", "2024.01.18.2", "2024.01.19.1", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["comparison"], "<");
}

#[test]
fn compare_malformed_second_version_fails() {
    let dir = TempDir::new().unwrap();
    calver_check(dir.path())
        .args(["compare", "2024.01.18.1", "2024.1.18.1"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "invalid version format: 2024.1.18.1",
        ));
}

#[test]
fn compare_wrong_argument_count_fails() {
    let dir = TempDir::new().unwrap();
    calver_check(dir.path())
        .args(["compare", "2024.01.18.1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exactly two versions required"));
}

#[test]
fn info_json() {
    let dir = TempDir::new().unwrap();
    let out = calver_check(dir.path())
        .args(["--json", "info"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(
        v,
        serde_json::json!({"next_version": "2024.01.18.1", "date": "2024-01-18", "micro": 1})
    );
}

#[test]
fn bad_date_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("calver-check").unwrap();
    cmd.args(["--date", "2024-02-30", "--repo"])
        .arg(dir.path())
        .arg("calc")
        .assert()
        .code(1)
        .stdout("");
}
