//! Layer boundaries, checked by scanning the sources.
//!
//! domain is pure, application sees only domain, infra never prints, and
//! only infra spawns processes. Nothing writes the CLI's own environment.

use std::fs;
use std::path::{Path, PathBuf};

fn src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

fn rust_sources(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .flatten()
        .map(|entry| entry.path())
        .flat_map(|path| {
            if path.is_dir() {
                rust_sources(&path)
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                vec![path]
            } else {
                Vec::new()
            }
        })
        .collect()
}

/// `path:line: text` for every code line under `dir` containing a pattern.
/// Comment lines and files for which `skip` holds are ignored.
fn offending_lines(dir: &Path, patterns: &[&str], skip: impl Fn(&str) -> bool) -> Vec<String> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut found = Vec::new();
    for file in rust_sources(dir) {
        let rel = file
            .strip_prefix(root)
            .unwrap_or(&file)
            .to_string_lossy()
            .replace('\\', "/");
        if skip(&rel) {
            continue;
        }
        let Ok(content) = fs::read_to_string(&file) else {
            continue;
        };
        for (i, line) in content.lines().enumerate() {
            let code = line.trim_start();
            if code.starts_with("//") {
                continue;
            }
            if patterns.iter().any(|p| code.contains(p)) {
                found.push(format!("{rel}:{}: {}", i + 1, code));
            }
        }
    }
    found
}

fn assert_clean(found: &[String], rule: &str) {
    assert!(found.is_empty(), "{rule}:\n{}", found.join("\n"));
}

#[test]
fn domain_stays_pure() {
    let found = offending_lines(
        &src_dir().join("domain"),
        &[
            "crate::application",
            "crate::infra",
            "crate::commands",
            "crate::output",
            "tokio",
            "std::fs",
            "std::process",
        ],
        |_| false,
    );
    assert_clean(&found, "domain/ must not do I/O or reach outer layers");
}

#[test]
fn application_depends_only_on_domain() {
    let found = offending_lines(
        &src_dir().join("application"),
        &["crate::infra::", "crate::output::", "crate::commands::"],
        |_| false,
    );
    assert_clean(&found, "application/ must not import infra/, output/ or commands/");
}

#[test]
fn infra_never_reaches_presentation() {
    let found = offending_lines(
        &src_dir().join("infra"),
        &["crate::commands", "crate::output", "println!", "eprintln!"],
        |_| false,
    );
    assert_clean(&found, "infra/ must not print or import commands/ and output/");
}

#[test]
fn only_infra_spawns_processes() {
    let found = offending_lines(
        &src_dir(),
        &["process::Command"],
        |rel| rel.contains("/infra/"),
    );
    assert_clean(&found, "process spawning belongs in infra/");
}

#[test]
fn runner_is_built_once_in_app_context() {
    let found = offending_lines(
        &src_dir(),
        &["TokioCommandRunner::new"],
        |rel| rel.contains("/infra/") || rel.ends_with("app.rs"),
    );
    assert_clean(&found, "construct TokioCommandRunner in AppContext only");
}

/// `DOCKER_HOST` is scoped to child processes.
#[test]
fn process_environment_is_never_written() {
    let found = offending_lines(&src_dir(), &["env::set_var", "env::remove_var"], |_| false);
    assert_clean(&found, "the CLI's own environment must never be mutated");
}

#[test]
fn commands_prompt_through_app_confirm() {
    let found = offending_lines(
        &src_dir().join("commands"),
        &["Confirm::new()", "stdin().lock()"],
        |_| false,
    );
    assert_clean(&found, "commands must ask through app.confirm()");
}
