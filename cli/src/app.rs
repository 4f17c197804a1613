//! Application context — unified state passed to every command handler.
//!
//! `AppContext` owns the execution context that landscape selection writes
//! and every dispatch reads. Handlers borrow it; only selection takes `&mut`.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::services::dispatch::Dispatcher;
use crate::application::services::{config_service, landscape};
use crate::domain::{DockhandConfig, ExecutionContext};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::credentials::EnvFileCredentialStore;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Skip interactive prompts (also set by `CI` / `DOCKHAND_YES` env vars).
    pub yes: bool,
    /// Credentials directory override.
    pub credentials_dir: Option<PathBuf>,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Process runner shared by every dispatch.
    pub runner: TokioCommandRunner,
    /// Tool configuration file.
    pub config_store: YamlConfigStore,
    /// Loaded tool configuration.
    pub config: DockhandConfig,
    /// Landscape credential files.
    pub credentials: EnvFileCredentialStore,
    /// Where dispatched commands run; local until a landscape is selected.
    pub target: ExecutionContext,
    /// When `true`, skip interactive prompts and use defaults.
    ///
    /// Set when `--yes` / `-y` is passed, or when the `CI` or `DOCKHAND_YES`
    /// environment variables are present.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing configuration file cannot be read.
    pub fn new(flags: AppFlags) -> Result<Self> {
        let ci_env = std::env::var("CI").is_ok() || std::env::var("DOCKHAND_YES").is_ok();
        let non_interactive = flags.behaviour.yes || ci_env;

        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        let config_store = YamlConfigStore;
        let config = config_service::load_config(&config_store)?;
        let credentials_dir = flags
            .behaviour
            .credentials_dir
            .unwrap_or_else(|| config.credentials_dir.clone());

        Ok(Self {
            // JSON mode keeps stdout for the single result object.
            output: OutputContext::new(
                flags.output.no_color,
                flags.output.quiet || flags.output.json,
            ),
            mode,
            runner: TokioCommandRunner::new(),
            config_store,
            config,
            credentials: EnvFileCredentialStore::new(credentials_dir),
            target: ExecutionContext::default(),
            non_interactive,
        })
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Progress reporter writing to the terminal.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Dispatcher bound to the current target.
    #[must_use]
    pub fn dispatcher<'a>(
        &'a self,
        reporter: &'a TerminalReporter<'a>,
    ) -> Dispatcher<'a, TokioCommandRunner, TerminalReporter<'a>> {
        Dispatcher::new(&self.runner, &self.target, reporter)
    }

    /// Select landscape `name` as the target of later dispatches.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if the profile cannot be loaded; the
    /// current target is left unchanged.
    pub fn select_landscape(&mut self, name: &str) -> Result<()> {
        landscape::select_landscape(&self.credentials, &mut self.target, name)
    }

    /// Ask the user for confirmation.
    ///
    /// When `non_interactive` is `true` (CI, `--yes` flag, or `DOCKHAND_YES` env),
    /// returns `default` immediately without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(confirmed)
    }
}
