//! End-to-end dispatch against a fake `docker` on `PATH`.
//!
//! The fake logs its arguments and the `DOCKER_HOST` it received, which is
//! how these tests observe the per-child environment.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use predicates::prelude::*;

use crate::support::{LADA_ENV, PROD_ENV, Sandbox};

const LISTING: &str = r#"printf '%s\n' '{"Names":"jupytainer_ada","Ports":"0.0.0.0:8888->8888/tcp"}' '{"Names":"web","Ports":"0.0.0.0:8080->80/tcp, :::8080->80/tcp"}'"#;

fn fake_docker(body: &str) -> Sandbox {
    Sandbox::new()
        .with_landscape("prod", PROD_ENV)
        .with_landscape("lada", LADA_ENV)
        .with_program("docker", body)
}

#[test]
fn test_local_dispatch_sets_no_docker_host() {
    let sandbox = fake_docker("exit 0");
    sandbox
        .dockhand()
        .args(["dps", "-o", "-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[localhost] docker ps -a"));

    assert_eq!(sandbox.calls(), ["docker DOCKER_HOST=unset ps -a"]);
}

#[test]
fn test_remote_dispatch_scopes_docker_host_to_child() {
    let sandbox = fake_docker("exit 0");
    sandbox
        .dockhand()
        .args(["prod", "dstop", "web"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[10.0.0.7] docker stop web"));

    assert_eq!(
        sandbox.calls(),
        ["docker DOCKER_HOST=ssh://deploy@10.0.0.7 stop web"]
    );
}

#[test]
fn test_landscape_without_docker_host_targets_local_daemon() {
    let sandbox = fake_docker("exit 0");
    sandbox
        .dockhand()
        .args(["lada", "dlogs", "web", "-o", "--tail 5"])
        .assert()
        .success();

    assert_eq!(
        sandbox.calls(),
        ["docker DOCKER_HOST=unset logs --tail 5 web"]
    );
}

#[test]
fn test_failing_docker_exits_one_with_command_failed() {
    let sandbox = fake_docker("exit 125");
    sandbox
        .dockhand()
        .args(["drm", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Command failed (exit 125): docker rm ghost"));
}

#[test]
fn test_missing_docker_binary_is_reported() {
    let sandbox = Sandbox::new();
    sandbox
        .dockhand()
        .env("PATH", sandbox.bin())
        .arg("dps")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to start docker"));
}

#[test]
fn test_port_json_skips_multi_mapping_containers() {
    let sandbox = fake_docker(LISTING);
    let output = sandbox
        .dockhand()
        .args(["prod", "port", "--json"])
        .output()
        .expect("run dockhand");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["port"], 8889);
    assert_eq!(value["host"], "10.0.0.7");
}

#[test]
fn test_jupytainer_runs_then_clones_and_reports_url() {
    let body = format!(
        "if [ \"$1\" = ps ]; then {LISTING}; fi\nexit 0"
    );
    let sandbox = fake_docker(&body).with_config("jupyter:\n  settle_secs: 0\n");
    let output = sandbox
        .dockhand()
        .args(["prod", "jupytainer", "ada", "--json"])
        .output()
        .expect("run dockhand");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value["url"], "http://10.0.0.7:8889/?token=mp84");

    let calls = sandbox.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls[0].contains(" ps --format"));
    assert!(calls[1].contains(" run -d -p 8889:8889 --name jupytainer_ada "));
    assert!(calls[2].ends_with("exec jupytainer_ada bash -c git clone https://github.com/ygingras/mp-84-atelier"));
}

#[test]
fn test_uninstall_docker_deep_with_yes_runs_ssh_steps() {
    let sandbox = Sandbox::new()
        .with_landscape("prod", PROD_ENV)
        .with_program("ssh", "exit 0");
    sandbox
        .dockhand()
        .args(["--yes", "prod", "uninstall-docker", "--deep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Docker uninstalled from 10.0.0.7"));

    let calls = sandbox.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|c| c.starts_with("ssh DOCKER_HOST=unset -t deploy@10.0.0.7 sudo sh -c")));
    assert!(calls[1].contains("rm -rf /var/lib/docker"));
}
