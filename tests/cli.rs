use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".fraudwatch").join("config.json")
}

const BINARY_NAME: &str = "fraudwatch";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("fraud detection service"))
        .stdout(contains("predict"))
        .stdout(contains("clear-history"));
}

#[test]
/// set-server should write the URL into a new config file.
fn set_server_creates_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-server")
        .arg("http://10.1.2.3:5000/")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("http://10.1.2.3:5000"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"api_url\": \"http://10.1.2.3:5000\""));
}

#[test]
/// set-server should refuse anything that is not a URL.
fn set_server_rejects_invalid_url() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-server")
        .arg("not a url")
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Invalid API URL"));

    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// Reset should delete an existing config file.
fn reset_deletes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Configuration cleared"));

    assert!(!config_path.exists());
}

#[test]
/// A prediction against a closed port fails with a readable error.
fn predict_reports_unreachable_server() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["--api-url", "http://127.0.0.1:9", "predict", "--amount", "12.50"])
        .env("HOME", tmp.path())
        .env_remove("FRAUDWATCH_API_URL")
        .assert()
        .failure()
        .stderr(contains("Request failed"));
}

#[test]
/// clear-history announces the target before the request fails.
fn clear_history_announces_target_server() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["--api-url", "http://127.0.0.1:9", "clear-history"])
        .env("HOME", tmp.path())
        .env_remove("FRAUDWATCH_API_URL")
        .assert()
        .failure()
        .stdout(contains("Clearing history."))
        .stdout(contains("http://127.0.0.1:9"))
        .stderr(contains("Request failed"));
}

#[test]
#[ignore] // Needs the fraud detection service on 127.0.0.1:5000.
fn stats_against_local_server() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("stats")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Total transactions"));
}
