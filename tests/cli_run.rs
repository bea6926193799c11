//! End-to-end runs of the ltc binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A binary invocation with its config root pointed at a throwaway
/// directory so runs never touch the real home.
fn ltc(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ltc").unwrap();
    cmd.env("LTC_CLI_HOME", home.path());
    cmd
}

#[test]
fn no_arguments_prints_app_help() {
    let home = TempDir::new().unwrap();
    ltc(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("COMMANDS:"))
        .stdout(predicate::str::contains("create, cr"));
}

#[test]
fn top_level_help_flag_prints_app_help() {
    let home = TempDir::new().unwrap();
    ltc(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("COMMANDS:"));
}

#[test]
fn unknown_flag_fails_with_exit_code_one() {
    let home = TempDir::new().unwrap();
    ltc(&home)
        .args(["create", "--badflag"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Unknown flag \"--badflag\""))
        .stderr(predicate::str::contains("Unknown flag \"--badflag\""));
}

#[test]
fn multiple_unknown_flags_are_enumerated() {
    let home = TempDir::new().unwrap();
    ltc(&home)
        .args(["create", "--badflag1", "--badflag2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unknown flags: \"--badflag1\", \"--badflag2\"",
        ));
}

#[test]
fn unknown_command_fails_with_lookup_error() {
    let home = TempDir::new().unwrap();
    ltc(&home)
        .arg("zz")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Command not found"));
}

#[test]
fn command_help_lists_declared_options() {
    let home = TempDir::new().unwrap();
    ltc(&home)
        .args(["create", "-h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--instances, -i"))
        .stdout(predicate::str::contains("--env, -e"));
}

#[test]
fn negative_integer_flag_value_is_accepted() {
    let home = TempDir::new().unwrap();
    ltc(&home)
        .args(["create", "my-app", "--instances", "-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating app my-app..."));
}

#[test]
fn target_round_trips_through_the_config_file() {
    let home = TempDir::new().unwrap();

    ltc(&home)
        .args(["target", "receptor.lattice.test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target set to receptor.lattice.test"));
    assert!(home.path().join(".ltc").join("config.yml").exists());

    ltc(&home)
        .arg("target")
        .assert()
        .success()
        .stdout(predicate::str::contains("receptor.lattice.test"));
}

#[test]
fn target_not_set_is_reported() {
    let home = TempDir::new().unwrap();
    ltc(&home)
        .arg("target")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target not set"));
}
