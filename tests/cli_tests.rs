use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use std::path::Path;
use tempfile::TempDir;

// Helper function to set up a test Command instance against an isolated data dir
fn set_up_command(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env_clear()
        .env("HOME", "/tmp")
        .env("DAYBOOK_DIR", data_dir);
    cmd
}

#[test]
#[serial]
fn test_cli_save_then_show() {
    let dir = TempDir::new().unwrap();

    set_up_command(dir.path())
        .args(["save", "2024-01-15", "a quiet day", "--mood", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved entry for 2024-01-15"));

    set_up_command(dir.path())
        .args(["show", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a quiet day"))
        .stdout(predicate::str::contains("happy"));
}

#[test]
#[serial]
fn test_cli_show_absent_date() {
    let dir = TempDir::new().unwrap();

    set_up_command(dir.path())
        .args(["show", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry for this day."));
}

#[test]
#[serial]
fn test_cli_compact_date_form() {
    let dir = TempDir::new().unwrap();

    set_up_command(dir.path())
        .args(["save", "20240115", "compact date form"])
        .assert()
        .success();

    set_up_command(dir.path())
        .args(["show", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("compact date form"));
}

#[test]
#[serial]
fn test_cli_invalid_date() {
    let dir = TempDir::new().unwrap();

    set_up_command(dir.path())
        .args(["show", "not-a-date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
#[serial]
fn test_cli_delete_then_show() {
    let dir = TempDir::new().unwrap();

    set_up_command(dir.path())
        .args(["save", "2024-01-15", "to be removed"])
        .assert()
        .success();

    set_up_command(dir.path())
        .args(["delete", "2024-01-15"])
        .assert()
        .success();

    set_up_command(dir.path())
        .args(["show", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry for this day."));
}

#[test]
#[serial]
fn test_cli_summary() {
    let dir = TempDir::new().unwrap();

    set_up_command(dir.path())
        .args([
            "save",
            "2024-01-15",
            "What a wonderful, beautiful day!",
            "--mood",
            "8",
        ])
        .assert()
        .success();

    set_up_command(dir.path())
        .args(["summary", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keywords of the Day:"))
        .stdout(predicate::str::contains("You felt happy on this day."));
}

#[test]
#[serial]
fn test_cli_summary_is_stable_across_runs() {
    let dir = TempDir::new().unwrap();

    set_up_command(dir.path())
        .args(["save", "2024-01-15", "A good day.", "--mood", "5"])
        .assert()
        .success();

    let first = set_up_command(dir.path())
        .args(["summary", "2024-01-15"])
        .output()
        .unwrap();
    let second = set_up_command(dir.path())
        .args(["summary", "2024-01-15"])
        .output()
        .unwrap();

    // The cheer-up message is memoized, so the whole summary repeats verbatim
    assert_eq!(first.stdout, second.stdout);
}

#[test]
#[serial]
fn test_cli_moods_empty() {
    let dir = TempDir::new().unwrap();

    set_up_command(dir.path())
        .arg("moods")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet."));
}

#[test]
#[serial]
fn test_cli_event_add_and_list() {
    let dir = TempDir::new().unwrap();

    set_up_command(dir.path())
        .args(["event", "add", "Birthday", "2030-06-01", "--tag", "Anniversary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added event"));

    set_up_command(dir.path())
        .args(["event", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Birthday"))
        .stdout(predicate::str::contains("2030-06-01"));
}

#[test]
#[serial]
fn test_cli_event_empty_name_skipped() {
    let dir = TempDir::new().unwrap();

    set_up_command(dir.path())
        .args(["event", "add", "", "2030-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing added"));

    set_up_command(dir.path())
        .args(["event", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events."));
}

#[test]
#[serial]
fn test_cli_event_refresh() {
    let dir = TempDir::new().unwrap();

    set_up_command(dir.path())
        .args(["event", "add", "Birthday", "2030-06-01"])
        .assert()
        .success();

    set_up_command(dir.path())
        .args(["event", "refresh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Refreshed day counts."));
}

#[test]
#[serial]
fn test_cli_export_empty() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("export.txt");

    set_up_command(dir.path())
        .args(["export", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries to export."));

    assert!(!out.exists());
}

#[test]
#[serial]
fn test_cli_export_writes_triplets() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("export.txt");

    set_up_command(dir.path())
        .args(["save", "2024-01-15", "on disk", "--mood", "3"])
        .assert()
        .success();

    set_up_command(dir.path())
        .args(["export", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Export successful."));

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("Date: 2024-01-15"));
    assert!(written.contains("Text: on disk"));
    assert!(written.contains("Mood: 3"));
}

#[test]
#[serial]
fn test_cli_settings_persist() {
    let dir = TempDir::new().unwrap();

    set_up_command(dir.path())
        .args(["settings", "--reminders", "on", "--theme", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reminders: on"))
        .stdout(predicate::str::contains("theme: 2"));

    // A later invocation reads the persisted values back
    set_up_command(dir.path())
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("reminders: on"))
        .stdout(predicate::str::contains("theme: 2"));
}

#[test]
#[serial]
fn test_cli_settings_rejects_bad_theme() {
    let dir = TempDir::new().unwrap();

    set_up_command(dir.path())
        .args(["settings", "--theme", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
#[serial]
fn test_cli_weather_requires_key() {
    let dir = TempDir::new().unwrap();

    set_up_command(dir.path())
        .args(["weather", "43.65", "-79.38"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DAYBOOK_WEATHER_KEY"));
}
