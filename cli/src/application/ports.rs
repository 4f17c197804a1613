//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::{ExitStatus, Output};

use anyhow::Result;

use crate::domain::{CredentialProfile, DockhandConfig};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// `env` entries are set on the spawned child only; the caller's process
/// environment is never touched.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its stdout and stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    async fn run(&self, program: &str, args: &[&str], env: &[(&str, &str)]) -> Result<Output>;

    /// Like `run`, but the child reads the caller's stdin so it can answer a
    /// prompt (a remote `sudo` password) while its output is captured.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    async fn run_with_stdin(
        &self,
        program: &str,
        args: &[&str],
        env: &[(&str, &str)],
    ) -> Result<Output>;

    /// Run a program with inherited stdio and return only its exit status.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    async fn run_status(
        &self,
        program: &str,
        args: &[&str],
        env: &[(&str, &str)],
    ) -> Result<ExitStatus>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message (also used to echo command lines).
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Credential Port ───────────────────────────────────────────────────────────

/// Abstracts where landscape credential profiles come from.
pub trait CredentialStore {
    /// Load the profile of landscape `name`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` (wrapped in `anyhow`) if the profile is
    /// missing, unreadable or incomplete.
    fn load(&self, name: &str) -> Result<CredentialProfile>;

    /// Names of the landscapes the store knows about, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be enumerated.
    fn list(&self) -> Result<Vec<String>>;

    /// Location of the profile for `name`, for messages.
    fn location(&self, name: &str) -> PathBuf;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading the tool configuration.
pub trait ConfigStore {
    /// Load configuration, falling back to defaults when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    fn load(&self) -> Result<DockhandConfig>;

    /// Path of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
