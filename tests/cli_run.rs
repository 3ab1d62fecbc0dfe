//! End-to-end runs of the bikeshare binary

mod common;

use assert_cmd::Command;
use common::{write_city_csv, FULL_HEADER};
use predicates::prelude::*;
use tempfile::TempDir;

fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_city_csv(
        dir.path(),
        "chicago.csv",
        FULL_HEADER,
        &[
            "2017-06-05 08:00:00,2017-06-05 08:10:00,600.0,Canal St,Clark St,Subscriber,Male,1989.0",
            "2017-06-06 09:00:00,2017-06-06 09:20:00,1200.0,Canal St,Clark St,Customer,Female,1992.0",
        ],
    );
    dir
}

#[test]
fn test_full_run_with_presets() {
    let dir = data_dir();

    Command::cargo_bin("bikeshare")
        .unwrap()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["--city", "chicago", "--month", "all", "--day", "all"])
        .write_stdin("no\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Most popular month: June"))
        .stdout(predicate::str::contains("Most popular start station: Canal St"))
        .stdout(predicate::str::contains("Total travel time: 00:30:00.000"))
        .stdout(predicate::str::contains("Counts by user type:"));
}

#[test]
fn test_invalid_city_preset_exits_nonzero() {
    let dir = data_dir();

    Command::cargo_bin("bikeshare")
        .unwrap()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["--city", "atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown city 'atlantis'"));
}

#[test]
fn test_invalid_month_preset_exits_nonzero() {
    let dir = data_dir();

    Command::cargo_bin("bikeshare")
        .unwrap()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["--month", "december"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown month 'december'"));
}

#[test]
fn test_empty_result_returns_to_restart_prompt() {
    let dir = data_dir();

    // january matches nothing; the pass aborts with a message and the
    // restart prompt still runs, so the exit code stays 0
    Command::cargo_bin("bikeshare")
        .unwrap()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["--city", "chicago", "--month", "january", "--day", "all"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would you like to restart?"))
        .stderr(predicate::str::contains("No trips match"));
}

#[test]
fn test_pager_shows_more_rows_on_yes() {
    let dir = data_dir();

    Command::cargo_bin("bikeshare")
        .unwrap()
        .arg("--data-dir")
        .arg(dir.path())
        .args(["--city", "chicago", "--month", "all", "--day", "all"])
        .write_stdin("yes\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would you like to see more?"));
}

#[test]
fn test_config_file_flag() {
    let dir = data_dir();
    let config_path = dir.path().join("bikeshare.yml");
    std::fs::write(
        &config_path,
        format!(
            "data_dir: {}\ncities:\n  chicago: chicago.csv\n",
            dir.path().display()
        ),
    )
    .unwrap();

    Command::cargo_bin("bikeshare")
        .unwrap()
        .arg("--file")
        .arg(&config_path)
        .args(["--city", "chicago", "--month", "june", "--day", "all"])
        .write_stdin("no\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Most popular day: "));
}

#[test]
fn test_unreadable_config_file_exits_nonzero() {
    Command::cargo_bin("bikeshare")
        .unwrap()
        .arg("--file")
        .arg("/nonexistent/bikeshare.yml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}
