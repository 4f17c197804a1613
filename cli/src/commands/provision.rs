//! `dockhand install-docker` / `dockhand uninstall-docker` — manage Docker on
//! the landscape host over SSH.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::provision;
use crate::application::services::remote::SshSession;

/// Arguments for `uninstall-docker`.
#[derive(Args, Debug, Default)]
pub struct UninstallArgs {
    /// Also delete all images, containers and volumes
    #[arg(long)]
    pub deep: bool,
}

/// Run `dockhand install-docker`.
///
/// # Errors
///
/// Returns an error if no landscape is selected or a step fails.
pub async fn install(app: &AppContext) -> Result<()> {
    let reporter = app.reporter();
    let session = SshSession::new(&app.runner, &app.target, &reporter, "install-docker")?;
    provision::install_docker(&session).await
}

/// Run `dockhand uninstall-docker`.
///
/// # Errors
///
/// Returns an error if no landscape is selected or a step fails.
pub async fn uninstall(app: &AppContext, args: &UninstallArgs) -> Result<()> {
    let reporter = app.reporter();
    let session = SshSession::new(&app.runner, &app.target, &reporter, "uninstall-docker")?;

    if args.deep {
        let prompt = format!(
            "Delete all images, containers and volumes on {}?",
            app.target.host_label()
        );
        if !app.confirm(&prompt, true)? {
            app.output.info("Cancelled.");
            return Ok(());
        }
    }

    provision::uninstall_docker(&session, args.deep).await
}
