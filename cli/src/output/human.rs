//! Human-readable terminal renderer.

use std::path::Path;

use owo_colors::OwoColorize as _;

use crate::application::services::notebook::NotebookPlan;
use crate::domain::{DockhandConfig, ExecutionContext};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the resolved execution context.
    pub fn render_context(&self, ctx: &ExecutionContext) {
        let Some(name) = ctx.landscape.as_deref() else {
            self.ctx.info("No landscape selected; commands run against the local Docker daemon");
            return;
        };
        self.ctx.header(&format!("Landscape {name}"));
        self.ctx.kv("User:       ", &ctx.user);
        self.ctx.kv("Host:       ", &ctx.host);
        self.ctx.kv(
            "Docker host:",
            ctx.docker_host.as_deref().unwrap_or("(local daemon)"),
        );
    }

    /// Render the landscapes available in the credentials directory.
    pub fn render_landscapes(&self, names: &[String], dir: &Path) {
        if self.ctx.quiet {
            return;
        }
        if names.is_empty() {
            println!(
                "No landscapes found in {}. Add one: {}/<name>.env",
                dir.display(),
                dir.display()
            );
            return;
        }

        println!("Available landscapes:\n");
        for name in names {
            println!("  {name}");
        }
        println!(
            "\n{}",
            format!("Credentials: {}", dir.display()).style(self.ctx.styles.dim)
        );
    }

    /// Render the port picked by the port scout.
    pub fn render_port(&self, port: u16, ctx: &ExecutionContext) {
        self.ctx
            .success(&format!("Port {port} is free on {}", ctx.host_label()));
    }

    /// Render a launched notebook.
    pub fn render_notebook(&self, plan: &NotebookPlan) {
        self.ctx.success("Notebook env ready...");
        self.ctx.kv("Container:", &plan.container);
        self.ctx.kv("URL:      ", &plan.url);
    }

    /// Render the tool configuration.
    pub fn render_config(&self, config: &DockhandConfig, path: &Path) {
        if self.ctx.quiet {
            return;
        }
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!(
            "  {:<24} {}",
            "credentials_dir:",
            config.credentials_dir.display()
        );
        println!("  {:<24} {}", "jupyter.image:", config.jupyter.image);
        println!(
            "  {:<24} {}",
            "jupyter.default_token:", config.jupyter.default_token
        );
        println!(
            "  {:<24} {}",
            "jupyter.materials_repo:", config.jupyter.materials_repo
        );
        println!(
            "  {:<24} {}s",
            "jupyter.settle_secs:", config.jupyter.settle_secs
        );
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in ["DOCKHAND_CONFIG", "DOCKHAND_CREDENTIALS_DIR", "DOCKHAND_LOG", "NO_COLOR"] {
            println!(
                "    {:<26} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }
}
