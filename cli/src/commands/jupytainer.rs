//! `dockhand jupytainer` — launch a per-user Jupyter notebook container.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::notebook::{self, NotebookPlan};
use crate::application::services::port_scout;
use crate::domain::NOTEBOOK_PORT_RANGE;
use crate::output::progress;

/// Arguments for `jupytainer`.
#[derive(Args, Debug)]
pub struct JupytainerArgs {
    /// User the notebook container is named after
    pub username: String,

    /// Notebook access token (defaults to the configured token)
    #[arg(long)]
    pub token: Option<String>,
}

/// Run `dockhand jupytainer`.
///
/// # Errors
///
/// Returns an error if no port is free, or if launching the container or
/// cloning the materials fails.
pub async fn run(app: &AppContext, args: &JupytainerArgs) -> Result<()> {
    let reporter = app.reporter();
    let dispatcher = app.dispatcher(&reporter);
    let jupyter = &app.config.jupyter;

    let pb = progress::spinner_if(app.output.show_progress(), "Looking for a free port...");
    let port = port_scout::find_unused_port(&dispatcher, NOTEBOOK_PORT_RANGE).await;
    pb.finish_and_clear();
    let plan = NotebookPlan::new(
        &app.target,
        jupyter,
        &args.username,
        args.token.as_deref(),
        port?,
    );

    notebook::start_notebook(&dispatcher, &plan).await?;

    let pb = progress::spinner_if(app.output.show_progress(), "Waiting for the notebook server...");
    tokio::time::sleep(jupyter.settle()).await;
    progress::finish_ok(&pb, "Notebook server started");

    notebook::clone_materials(&dispatcher, &plan, &jupyter.materials_repo).await?;

    app.renderer().render_notebook(&plan)
}
