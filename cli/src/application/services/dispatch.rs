//! Application service — command dispatch.
//!
//! Runs a `CommandLine` against the local Docker daemon, or against the
//! remote daemon of the selected landscape by setting `DOCKER_HOST` on the
//! spawned child. The override lives in the child's environment only, so it
//! cannot outlive the call or leak into a later one.

use std::process::Output;

use anyhow::Result;

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::domain::{CommandLine, DispatchError, ExecutionContext};

/// Environment variable the Docker CLI reads to pick a remote daemon.
pub const DOCKER_HOST_ENV: &str = "DOCKER_HOST";

/// How a dispatched command is run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Capture stdout/stderr instead of streaming them; suppresses the echo.
    pub capture: bool,
    /// Report a non-zero exit as a warning instead of failing.
    pub warn_only: bool,
    /// Let a captured child read the terminal's stdin.
    pub stdin: bool,
}

impl DispatchOptions {
    /// Stream output to the console; fail on non-zero exit.
    pub const STREAM: Self = Self {
        capture: false,
        warn_only: false,
        stdin: false,
    };

    /// Capture output silently; fail on non-zero exit.
    pub const CAPTURE: Self = Self {
        capture: true,
        warn_only: false,
        stdin: false,
    };

    /// Same options, but tolerate a non-zero exit.
    #[must_use]
    pub fn warn_only(self) -> Self {
        Self {
            warn_only: true,
            ..self
        }
    }

    /// Same options, but a captured child keeps stdin for prompts.
    #[must_use]
    pub fn with_stdin(self) -> Self {
        Self {
            stdin: true,
            ..self
        }
    }
}

/// Outcome of one dispatched command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code, `None` if the process was killed by a signal.
    pub code: Option<i32>,
    /// Captured stdout (empty when streamed).
    pub stdout: String,
    /// Captured stderr (empty when streamed).
    pub stderr: String,
}

impl ExecutionResult {
    /// `true` if the command exited with status 0.
    #[must_use]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    fn from_output(output: &Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Dispatches command lines against the daemon selected by an
/// `ExecutionContext`.
///
/// The context is borrowed immutably for the dispatcher's lifetime; a new
/// landscape selection needs a new dispatcher.
pub struct Dispatcher<'a, R: CommandRunner, P: ProgressReporter> {
    runner: &'a R,
    ctx: &'a ExecutionContext,
    reporter: &'a P,
}

impl<'a, R: CommandRunner, P: ProgressReporter> Dispatcher<'a, R, P> {
    /// Create a dispatcher bound to `ctx`.
    pub fn new(runner: &'a R, ctx: &'a ExecutionContext, reporter: &'a P) -> Self {
        Self {
            runner,
            ctx,
            reporter,
        }
    }

    /// Run `cmd` against the resolved daemon.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::CommandFailed` on a non-zero exit (unless
    /// `opts.warn_only`), or `DispatchError::Spawn` if the program cannot run.
    pub async fn dispatch(&self, cmd: &CommandLine, opts: DispatchOptions) -> Result<ExecutionResult> {
        let env: Vec<(&str, &str)> = self
            .ctx
            .docker_host
            .as_deref()
            .map(|addr| (DOCKER_HOST_ENV, addr))
            .into_iter()
            .collect();
        execute(self.runner, self.reporter, self.ctx.host_label(), cmd, &env, opts).await
    }
}

/// Shared execution primitive behind the dispatcher and the SSH session.
pub(crate) async fn execute(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    label: &str,
    cmd: &CommandLine,
    env: &[(&str, &str)],
    opts: DispatchOptions,
) -> Result<ExecutionResult> {
    let rendered = cmd.render();
    let args: Vec<&str> = cmd.argv().iter().map(String::as_str).collect();
    tracing::debug!(
        target_label = label,
        command = %rendered,
        env = ?env.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
        capture = opts.capture,
        "dispatching"
    );

    let spawn_err = |e: anyhow::Error| DispatchError::Spawn {
        program: cmd.program().to_string(),
        reason: format!("{e:#}"),
    };

    let result = if opts.capture {
        let output = if opts.stdin {
            runner.run_with_stdin(cmd.program(), &args, env).await
        } else {
            runner.run(cmd.program(), &args, env).await
        }
        .map_err(spawn_err)?;
        ExecutionResult::from_output(&output)
    } else {
        reporter.step(&format!("[{label}] {rendered}"));
        let status = runner
            .run_status(cmd.program(), &args, env)
            .await
            .map_err(spawn_err)?;
        ExecutionResult {
            code: status.code(),
            ..ExecutionResult::default()
        }
    };

    if result.success() {
        return Ok(result);
    }

    let failure = DispatchError::CommandFailed {
        command: rendered,
        code: result.code,
        stderr: result.stderr.clone(),
    };
    if opts.warn_only {
        tracing::warn!(error = %failure, "command failed (warn only)");
        reporter.warn(&failure.to_string());
        return Ok(result);
    }
    Err(failure.into())
}
