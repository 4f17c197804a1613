//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Configuration errors ──────────────────────────────────────────────────────

/// Errors raised while resolving a landscape into an execution context.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Invalid landscape name '{0}': must match ^[a-z0-9][a-z0-9_-]{{0,62}}$")]
    InvalidName(String),

    #[error("Landscape '{name}' not found: no credential file at {path}")]
    ProfileNotFound { name: String, path: String },

    #[error("Landscape '{name}' is missing required key {key}")]
    MissingKey { name: String, key: String },

    #[error("Cannot read credential file {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("No landscape selected. Prefix the task with a landscape, e.g. 'dockhand prod {task}'")]
    NoLandscape { task: String },
}

// ── Dispatch errors ───────────────────────────────────────────────────────────

/// Errors raised by the command dispatcher.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Command failed ({}): {command}{}", exit_code_display(.code), stderr_suffix(.stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to start {program}: {reason}")]
    Spawn { program: String, reason: String },
}

impl DispatchError {
    /// Exit code of the failed command, if it exited normally.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { code, .. } => *code,
            Self::Spawn { .. } => None,
        }
    }
}

#[allow(clippy::ref_option)]
fn exit_code_display(code: &Option<i32>) -> String {
    code.map_or_else(|| "terminated by signal".to_string(), |c| format!("exit {c}"))
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{trimmed}")
    }
}

// ── Port errors ───────────────────────────────────────────────────────────────

/// Errors raised while scouting for a free port.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PortError {
    #[error("No unused port in range {low}-{high}")]
    NoPortAvailable { low: u16, high: u16 },
}

/// Why a single container listing line contributed no port.
///
/// Never propagated: the port scout logs and skips the line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingParseError {
    #[error("blank line")]
    Blank,

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("no Ports field")]
    MissingPorts,

    #[error("expected exactly one port mapping, found {0}")]
    NotSingleMapping(usize),

    #[error("unparseable host port '{0}'")]
    InvalidPort(String),
}

// ── Argument errors ───────────────────────────────────────────────────────────

/// Errors raised while turning free-text options into an argument vector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Cannot parse options '{0}': unbalanced quotes")]
    UnbalancedQuotes(String),
}
