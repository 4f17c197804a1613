//! Integration tests for the CLI surface: help, landscape selection and
//! error reporting.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use predicates::prelude::*;

use crate::support::{LADA_ENV, PROD_ENV, Sandbox, dockhand};

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is one JSON object")
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    // An env-supplied flag counts as an argument, so keep NO_COLOR unset here.
    dockhand().env_remove("NO_COLOR").assert().code(2).stderr(predicate::str::contains(
        "Dispatch Docker tasks to the local daemon or a remote landscape",
    ));
}

#[test]
fn test_cli_help_lists_tasks_and_selectors() {
    let assert = dockhand().arg("--help").assert().success();
    for name in [
        "lada",
        "prod",
        "landscape",
        "landscapes",
        "drun",
        "dshell",
        "dsysprune",
        "jupytainer",
        "install-docker",
        "uninstall-docker",
    ] {
        assert_contains(&assert.get_output().stdout, name);
    }
}

fn assert_contains(stdout: &[u8], needle: &str) {
    let text = String::from_utf8_lossy(stdout);
    assert!(text.contains(needle), "help is missing `{needle}`:\n{text}");
}

#[test]
fn test_cli_version_flag_shows_version() {
    dockhand()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dockhand"));
}

#[test]
fn test_unknown_task_exits_with_error() {
    dockhand().args(["prod", "dfly"]).assert().failure();
}

#[test]
fn test_no_color_accepts_any_conventional_value() {
    let sandbox = Sandbox::new().with_landscape("lada", LADA_ENV);
    for value in ["1", "yes", "true", ""] {
        sandbox
            .dockhand()
            .env("NO_COLOR", value)
            .arg("landscapes")
            .assert()
            .success()
            .stdout(predicate::str::contains("lada"));
    }
}

// --- Landscape selection ---

#[test]
fn test_prod_without_credentials_fails_with_configuration_error() {
    let sandbox = Sandbox::new();
    sandbox
        .dockhand()
        .args(["prod", "dps"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Landscape 'prod' not found"));
}

#[test]
fn test_prod_missing_host_key_is_reported() {
    let sandbox = Sandbox::new().with_landscape("prod", "PROUCTION_USER=deploy\n");
    sandbox
        .dockhand()
        .arg("prod")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing required key PROUCTION_HOST"));
}

#[test]
fn test_invalid_landscape_name_is_rejected() {
    let sandbox = Sandbox::new();
    sandbox
        .dockhand()
        .args(["landscape", "../../etc/passwd"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid landscape name"));
}

#[test]
fn test_prod_selector_json_shows_resolved_context() {
    let sandbox = Sandbox::new().with_landscape("prod", PROD_ENV);
    let output = sandbox
        .dockhand()
        .args(["prod", "--json"])
        .output()
        .expect("run dockhand");

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["landscape"], "prod");
    assert_eq!(value["user"], "deploy");
    assert_eq!(value["host"], "10.0.0.7");
    assert_eq!(value["docker_host"], "ssh://deploy@10.0.0.7");
    assert_eq!(value["remote"], true);
}

#[test]
fn test_lada_selector_human_shows_local_daemon() {
    let sandbox = Sandbox::new().with_landscape("lada", LADA_ENV);
    sandbox
        .dockhand()
        .arg("lada")
        .assert()
        .success()
        .stdout(predicate::str::contains("Landscape lada"))
        .stdout(predicate::str::contains("lada.local"))
        .stdout(predicate::str::contains("(local daemon)"));
}

#[test]
fn test_credentials_dir_flag_overrides_env() {
    let sandbox = Sandbox::new();
    let other = Sandbox::new().with_landscape("prod", PROD_ENV);
    sandbox
        .dockhand()
        .args(["prod", "--credentials-dir"])
        .arg(other.credentials())
        .assert()
        .success()
        .stdout(predicate::str::contains("10.0.0.7"));
}

#[test]
fn test_landscapes_json_lists_credential_files() {
    let sandbox = Sandbox::new()
        .with_landscape("prod", PROD_ENV)
        .with_landscape("lada", LADA_ENV);
    let output = sandbox
        .dockhand()
        .args(["landscapes", "--json"])
        .output()
        .expect("run dockhand");

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)["landscapes"],
        serde_json::json!(["lada", "prod"])
    );
}

#[test]
fn test_landscapes_empty_directory_hints_at_file_layout() {
    let sandbox = Sandbox::new();
    sandbox
        .dockhand()
        .arg("landscapes")
        .assert()
        .success()
        .stdout(predicate::str::contains("No landscapes found"));
}

// --- Error reporting ---

#[test]
fn test_install_docker_without_landscape_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .dockhand()
        .arg("install-docker")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No landscape selected"))
        .stderr(predicate::str::contains("dockhand prod install-docker"));
}

#[test]
fn test_json_mode_failure_prints_error_object() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .dockhand()
        .args(["--json", "prod"])
        .output()
        .expect("run dockhand");

    assert_eq!(output.status.code(), Some(1));
    let value = stdout_json(&output);
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "configuration");
    assert!(
        value["message"]
            .as_str()
            .unwrap()
            .contains("Landscape 'prod' not found")
    );
}

#[test]
fn test_unbalanced_option_quotes_fail_before_running_docker() {
    let sandbox = Sandbox::new();
    sandbox
        .dockhand()
        .args(["dps", "-o", "--filter 'name=web"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unbalanced quotes"));
}
