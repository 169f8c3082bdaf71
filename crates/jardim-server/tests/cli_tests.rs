use assert_cmd::Command;
use predicates::prelude::*;

fn jardim_cmd() -> Command {
    Command::cargo_bin("jardim").expect("Failed to find jardim binary")
}

#[test]
fn test_cli_help_lists_both_variants() {
    jardim_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("garden"))
        .stdout(predicate::str::contains("encyclopedia"))
        .stdout(predicate::str::contains("--database-file"))
        .stdout(predicate::str::contains("--bind"));
}

#[test]
fn test_cli_version() {
    jardim_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jardim"));
}

#[test]
fn test_cli_rejects_invalid_bind_address() {
    jardim_cmd()
        .args(["--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bind"));
}

#[test]
fn test_cli_rejects_unknown_subcommand() {
    jardim_cmd().arg("greenhouse").assert().failure();
}
