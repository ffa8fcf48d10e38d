//! CLI integration tests
//!
//! Notification-submitting commands run against the `none` backend so the
//! suite stays headless.

use assert_cmd::Command;
use predicates::prelude::*;

fn local_notify() -> Command {
    Command::cargo_bin("local-notify").expect("binary builds")
}

/// Command with config I/O redirected into a temp home
fn local_notify_with_home(home: &tempfile::TempDir) -> Command {
    let mut cmd = local_notify();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd
}

#[test]
fn help_output() {
    local_notify()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("notifications"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("schedule"))
        .stdout(predicate::str::contains("badge"))
        .stdout(predicate::str::contains("cancel"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_output() {
    local_notify()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("local-notify"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn show_submits_on_none_backend() {
    local_notify()
        .args(["--backend", "none", "show", "Title", "Body"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Notification submitted"));
}

#[test]
fn show_accepts_id_and_launch_args() {
    local_notify()
        .args([
            "--backend",
            "none",
            "show",
            "Title",
            "Body",
            "--id",
            "7",
            "--launch",
            "action=open",
        ])
        .assert()
        .success();
}

#[test]
fn schedule_submits_on_none_backend() {
    local_notify()
        .args([
            "--backend",
            "none",
            "schedule",
            "Reminder",
            "Stand up",
            "--id",
            "5",
            "--in",
            "30s",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("5 added to the schedule"));
}

#[test]
fn schedule_zero_delay_warns_about_clamp() {
    local_notify()
        .args([
            "--backend",
            "none",
            "schedule",
            "T",
            "B",
            "--id",
            "1",
            "--in",
            "0s",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("not in the future"));
}

#[test]
fn schedule_requires_delivery_time() {
    local_notify()
        .args(["--backend", "none", "schedule", "T", "B", "--id", "1"])
        .assert()
        .failure();
}

#[test]
fn schedule_rejects_in_and_at_together() {
    local_notify()
        .args([
            "--backend",
            "none",
            "schedule",
            "T",
            "B",
            "--id",
            "1",
            "--in",
            "30s",
            "--at",
            "1790000000",
        ])
        .assert()
        .failure();
}

#[test]
fn schedule_invalid_delay_error() {
    local_notify()
        .args([
            "--backend",
            "none",
            "schedule",
            "T",
            "B",
            "--id",
            "1",
            "--in",
            "soon",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid delay"));
}

#[test]
fn badge_accepts_zero_and_negative() {
    for value in ["0", "-3"] {
        local_notify()
            .args(["--backend", "none", "badge", value])
            .assert()
            .success()
            .stderr(predicate::str::contains(format!("Badge set to {}", value)));
    }
}

#[test]
fn cancel_is_silent_for_unknown_id() {
    local_notify()
        .args(["--backend", "none", "cancel", "42"])
        .assert()
        .success();
}

#[test]
fn invalid_backend_is_usage_error() {
    local_notify()
        .args(["--backend", "growl", "show", "T", "B"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid backend"));
}

#[test]
fn config_help() {
    local_notify()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn config_path_command() {
    let home = tempfile::tempdir().expect("tempdir");
    local_notify_with_home(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("local-notify"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_set_get_round_trip() {
    let home = tempfile::tempdir().expect("tempdir");

    local_notify_with_home(&home)
        .args(["config", "set", "app_name", "Test App"])
        .assert()
        .success();

    local_notify_with_home(&home)
        .args(["config", "get", "app_name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test App"));
}

#[test]
fn config_get_unset_key() {
    let home = tempfile::tempdir().expect("tempdir");
    local_notify_with_home(&home)
        .args(["config", "get", "backend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn config_get_unknown_key() {
    let home = tempfile::tempdir().expect("tempdir");
    local_notify_with_home(&home)
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_invalid_backend() {
    let home = tempfile::tempdir().expect("tempdir");
    local_notify_with_home(&home)
        .args(["config", "set", "backend", "growl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid backend"));
}

#[test]
fn config_init_twice_fails() {
    let home = tempfile::tempdir().expect("tempdir");

    local_notify_with_home(&home)
        .args(["config", "init"])
        .assert()
        .success();

    local_notify_with_home(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
