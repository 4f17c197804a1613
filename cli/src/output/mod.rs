//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod reporter;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;

use crate::application::services::notebook::NotebookPlan;
use crate::domain::{DockhandConfig, ExecutionContext};
pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::TerminalReporter;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }
}

/// Renderer for the active output mode.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render the resolved execution context.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_context(&self, ctx: &ExecutionContext) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_context(ctx);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&json::context_value(ctx)),
        }
    }

    /// Render the available landscapes.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_landscapes(&self, names: &[String], dir: &Path) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_landscapes(names, dir);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&json::landscapes_value(names, dir)),
        }
    }

    /// Render a free port.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_port(&self, port: u16, ctx: &ExecutionContext) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_port(port, ctx);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&json::port_value(port, ctx)),
        }
    }

    /// Render a launched notebook.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_notebook(&self, plan: &NotebookPlan) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_notebook(plan);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&json::notebook_value(plan)),
        }
    }

    /// Render the tool configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &DockhandConfig, path: &Path) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config(config, path);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&json::config_value(config, path)),
        }
    }
}
