use assert_cmd::Command;
use predicates::prelude::*;

/// `jtl` with a clean environment: no Jira variables and no `.env` nearby.
fn jtl() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("jtl");
    cmd.env_remove("JIRA_SERVER")
        .env_remove("JIRA_USER")
        .env("RUST_LOG", "off")
        .current_dir(std::env::temp_dir());
    cmd
}

#[test]
fn no_subcommand_prints_usage_and_fails() {
    jtl()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("vimlog"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    jtl().arg("frobnicate").assert().code(2);
}

#[test]
fn missing_server_fails_before_contacting_jira() {
    jtl()
        .arg("issues")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Please set JIRA_SERVER or provide --jira-server argument",
        ));
}

#[test]
fn missing_server_applies_to_every_subcommand() {
    jtl()
        .args(["log", "PROJ-1", "15m", "standup"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JIRA_SERVER"));

    jtl()
        .arg("vimlog")
        .write_stdin("- [ ] fix bug - PROJ-1 [...]\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("JIRA_SERVER"));
}

#[test]
fn missing_user_names_the_variable_to_set() {
    jtl()
        .env("JIRA_SERVER", "http://127.0.0.1:9")
        .arg("i")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Please set JIRA_USER or provide --jira-user argument",
        ));
}

#[test]
fn subcommand_help_lists_shared_options() {
    jtl()
        .args(["log", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--jira-server"))
        .stdout(predicate::str::contains("--jira-user"))
        .stdout(predicate::str::contains("--started"));
}
