use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary under test with its config directory moved into `home`
fn cmd_in(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("glab-setup-git-identity").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd
}

fn cmd() -> (TempDir, Command) {
    let home = tempfile::tempdir().unwrap();
    let cmd = cmd_in(&home);
    (home, cmd)
}

/// Config file location as reported by `config path`
fn config_file(home: &TempDir) -> PathBuf {
    let output = cmd_in(home)
        .args(["config", "path"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    PathBuf::from(String::from_utf8(output).unwrap().trim())
}

#[test]
fn test_help_lists_subcommands() {
    let (_home, mut cmd) = cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("verify"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_version() {
    let (_home, mut cmd) = cmd();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_global_and_local_conflict() {
    let (_home, mut cmd) = cmd();
    cmd.args(["--global", "--local", "verify"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_missing_glab_fails_setup() {
    let (_home, mut cmd) = cmd();
    cmd.args(["--dry-run"])
        .env("GLAB_PATH", "/nonexistent/glab-for-tests")
        .env_remove("GITLAB_TOKEN")
        .env_remove("GLAB_HOSTNAME")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_status_with_missing_glab() {
    let (_home, mut cmd) = cmd();
    cmd.arg("status")
        .env("GLAB_PATH", "/nonexistent/glab-for-tests")
        .env_remove("GLAB_HOSTNAME")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not authenticated"));
}

#[test]
fn test_invalid_config_key() {
    let (_home, mut cmd) = cmd();
    cmd.args(["config", "get", "username"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid git config key"));
}

#[cfg(unix)]
#[test]
fn test_config_path_is_inside_home() {
    let home = tempfile::tempdir().unwrap();
    assert!(config_file(&home).starts_with(home.path()));
}

#[cfg(unix)]
#[test]
fn test_malformed_config_file_is_reported() {
    let home = tempfile::tempdir().unwrap();
    let path = config_file(&home);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "scope = [not toml").unwrap();

    cmd_in(&home)
        .arg("verify")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file is invalid"));
}
