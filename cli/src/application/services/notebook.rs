//! Application service — per-user Jupyter notebook containers.
//!
//! Launching is split in two steps so the caller decides how to wait for the
//! notebook server to settle in between.

use anyhow::Result;

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::application::services::dispatch::{DispatchOptions, Dispatcher};
use crate::domain::{CommandLine, ExecutionContext, JupyterConfig};

/// Container name prefix; the username completes it.
pub const CONTAINER_PREFIX: &str = "jupytainer_";

/// Notebook server entry point inside the image.
pub const START_SCRIPT: &str = "start-notebook.sh";

/// Everything needed to launch and reach one notebook container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookPlan {
    pub container: String,
    pub image: String,
    pub port: u16,
    pub token: String,
    pub url: String,
}

impl NotebookPlan {
    /// Plan a notebook for `username` on `port`.
    #[must_use]
    pub fn new(
        ctx: &ExecutionContext,
        config: &JupyterConfig,
        username: &str,
        token: Option<&str>,
        port: u16,
    ) -> Self {
        let token = token
            .filter(|t| !t.is_empty())
            .unwrap_or(config.default_token.as_str())
            .to_string();
        Self {
            container: format!("{CONTAINER_PREFIX}{username}"),
            image: config.image.clone(),
            port,
            url: format!("http://{}:{port}/?token={token}", ctx.host_label()),
            token,
        }
    }

    /// `docker run -d -p P:P --name <container> <image> start-notebook.sh ...`
    #[must_use]
    pub fn run_command(&self) -> CommandLine {
        let port = self.port.to_string();
        CommandLine::docker(&["run", "-d", "-p"])
            .arg(format!("{port}:{port}"))
            .args(["--name", self.container.as_str(), self.image.as_str(), START_SCRIPT])
            .arg(format!("--NotebookApp.token={}", self.token))
            .arg(format!("--port={port}"))
            .arg("--no-browser")
    }

    /// `docker exec <container> bash -c 'git clone <repo>'`
    #[must_use]
    pub fn clone_command(&self, materials_repo: &str) -> CommandLine {
        CommandLine::docker(&["exec"])
            .arg(&self.container)
            .bash_script(&format!("git clone {materials_repo}"))
    }
}

/// Start the notebook container in the background.
///
/// # Errors
///
/// Returns the dispatch error if `docker run` fails.
pub async fn start_notebook<R: CommandRunner, P: ProgressReporter>(
    dispatcher: &Dispatcher<'_, R, P>,
    plan: &NotebookPlan,
) -> Result<()> {
    tracing::info!(container = %plan.container, port = plan.port, "starting notebook");
    dispatcher
        .dispatch(&plan.run_command(), DispatchOptions::STREAM)
        .await?;
    Ok(())
}

/// Clone the course materials into a running notebook container.
///
/// # Errors
///
/// Returns the dispatch error if the clone fails.
pub async fn clone_materials<R: CommandRunner, P: ProgressReporter>(
    dispatcher: &Dispatcher<'_, R, P>,
    plan: &NotebookPlan,
    materials_repo: &str,
) -> Result<()> {
    dispatcher
        .dispatch(&plan.clone_command(materials_repo), DispatchOptions::STREAM)
        .await?;
    Ok(())
}
