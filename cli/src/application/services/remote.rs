//! Application service — SSH session on the landscape host.
//!
//! Provisioning runs privileged shell snippets on the host itself rather than
//! through the Docker daemon. Each call is one `ssh` invocation.

use anyhow::Result;

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::application::services::dispatch::{DispatchOptions, ExecutionResult, execute};
use crate::domain::command::single_quote;
use crate::domain::{CommandLine, ConfigurationError, ExecutionContext};

/// SSH client binary.
pub const SSH: &str = "ssh";

/// A remote login session on the selected landscape's host.
pub struct SshSession<'a, R: CommandRunner, P: ProgressReporter> {
    runner: &'a R,
    reporter: &'a P,
    ctx: &'a ExecutionContext,
    destination: String,
}

impl<'a, R: CommandRunner, P: ProgressReporter> SshSession<'a, R, P> {
    /// Open a session description for `ctx`; `task` names the caller for
    /// the error message.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::NoLandscape` when no landscape is selected.
    pub fn new(
        runner: &'a R,
        ctx: &'a ExecutionContext,
        reporter: &'a P,
        task: &str,
    ) -> Result<Self> {
        let destination = ctx
            .ssh_destination()
            .ok_or_else(|| ConfigurationError::NoLandscape {
                task: task.to_string(),
            })?;
        Ok(Self {
            runner,
            reporter,
            ctx,
            destination,
        })
    }

    /// The execution context the session was opened for.
    #[must_use]
    pub fn context(&self) -> &ExecutionContext {
        self.ctx
    }

    /// Reporter the session echoes through.
    #[must_use]
    pub fn reporter(&self) -> &'a P {
        self.reporter
    }

    /// The `ssh` command line that runs `script` as root on the host.
    #[must_use]
    pub fn sudo_command(&self, script: &str) -> CommandLine {
        CommandLine::new(SSH)
            .arg("-t")
            .arg(&self.destination)
            .arg(format!("sudo sh -c {}", single_quote(script)))
    }

    /// Run `script` as root on the host.
    ///
    /// The child always keeps the terminal's stdin, so `sudo` can ask for a
    /// password even when the output is captured.
    ///
    /// # Errors
    ///
    /// Same contract as `Dispatcher::dispatch`.
    pub async fn sudo(&self, script: &str, opts: DispatchOptions) -> Result<ExecutionResult> {
        let cmd = self.sudo_command(script);
        execute(
            self.runner,
            self.reporter,
            self.ctx.host_label(),
            &cmd,
            &[],
            opts.with_stdin(),
        )
        .await
    }
}
