//! Integration tests for the Tresor CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Network-touching paths are covered in `api_client_tests`; here we
//! focus on argument parsing, local validation, and the failure paths
//! that must never reach the wire.

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the tresor binary, with session
/// environment variables scrubbed so the host environment can't leak in.
fn tresor() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("tresor").expect("binary should exist");
    for var in [
        "TRESOR_EMAIL",
        "TRESOR_USER_ID",
        "TRESOR_MASTER_PASSWORD",
        "TRESOR_PASSWORD",
        "TRESOR_PASSWORD_CONFIRM",
        "TRESOR_API_PROTOCOL",
        "TRESOR_API_HOST",
        "TRESOR_API_PORT",
        "TRESOR_API_PATH",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_flag_shows_usage() {
    tresor()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Client for the Tresor secret-storage service",
        ))
        .stdout(predicate::str::contains("register"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("version"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_shows_version() {
    tresor()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tresor"));
}

#[test]
fn no_args_shows_help() {
    // Running with no subcommand should show an error or help.
    tresor().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn add_help_lists_secret_kinds() {
    tresor()
        .args(["add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("credential"))
        .stdout(predicate::str::contains("note"))
        .stdout(predicate::str::contains("card"));
}

#[test]
fn completions_generates_a_script() {
    tresor()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tresor"));
}

#[test]
fn completions_rejects_unknown_shell() {
    tresor()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shell"));
}

// ---------------------------------------------------------------------------
// Registration validation (must fail before any network traffic)
// ---------------------------------------------------------------------------

#[test]
fn register_rejects_weak_password() {
    tresor()
        .args([
            "register",
            "--first-name",
            "Ada",
            "--last-name",
            "Lovelace",
            "--email",
            "ada@example.com",
        ])
        .env("TRESOR_PASSWORD", "abcdefg1")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Password does not meet the strength requirements",
        ))
        // The checklist names what is missing.
        .stdout(predicate::str::contains("uppercase"))
        .stdout(predicate::str::contains("special character"));
}

#[test]
fn register_rejects_confirmation_mismatch_independently_of_strength() {
    // A password meeting all five criteria must still be rejected with
    // the mismatch reason, not the weakness reason.
    tresor()
        .args([
            "register",
            "--first-name",
            "Ada",
            "--last-name",
            "Lovelace",
            "--email",
            "ada@example.com",
        ])
        .env("TRESOR_PASSWORD", "Abcdefg1!")
        .env("TRESOR_PASSWORD_CONFIRM", "Different1!")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Password mismatch"))
        .stderr(predicate::str::contains("strength requirements").not());
}

// ---------------------------------------------------------------------------
// Session preconditions (checked before any network call)
// ---------------------------------------------------------------------------

#[test]
fn list_without_user_id_reports_missing_session() {
    tresor()
        .arg("list")
        .env("TRESOR_MASTER_PASSWORD", "master-pw")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No user id available"));
}

#[test]
fn list_without_email_reports_missing_session() {
    tresor()
        .args(["list", "--user-id", "1"])
        .env("TRESOR_MASTER_PASSWORD", "master-pw")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No email available"));
}

#[test]
fn add_without_session_fails_before_submitting() {
    tresor()
        .args([
            "add",
            "credential",
            "--username",
            "alice",
            "--url",
            "example.com",
        ])
        .write_stdin("piped-password\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No user id available"));
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn invalid_config_file_is_reported() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join(".tresor.toml"), "not valid {{toml").unwrap();

    tresor()
        .args([
            "list",
            "--user-id",
            "1",
            "--email",
            "ada@example.com",
            "--config",
            tmp.path().to_str().unwrap(),
        ])
        .env("TRESOR_MASTER_PASSWORD", "master-pw")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file error"));
}
