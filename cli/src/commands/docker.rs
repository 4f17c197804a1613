//! `dockhand drun|dstop|drm|dlogs|dps|dshell|dexec|dsysprune` — thin wrappers
//! around the Docker CLI, dispatched to the selected landscape.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::dispatch::DispatchOptions;
use crate::domain::{CommandLine, docker};

/// Free-text Docker options shared by the wrappers.
#[derive(Args, Debug, Default, Clone)]
pub struct OptionsArgs {
    /// Extra options passed to docker, e.g. -o "-a --no-trunc"
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub options: String,
}

/// Arguments for `drun`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Image to run
    pub image: String,

    /// Command to run in the container
    pub command: Option<String>,

    /// Arguments for the command
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    #[command(flatten)]
    pub options: OptionsArgs,
}

/// Arguments for wrappers acting on one container.
#[derive(Args, Debug)]
pub struct ContainerArgs {
    /// Container name or ID
    pub container: String,

    #[command(flatten)]
    pub options: OptionsArgs,
}

/// Arguments for `dshell`.
#[derive(Args, Debug)]
pub struct ShellArgs {
    /// Container name or ID
    pub container: String,
}

/// Arguments for `dexec`.
#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Container name or ID
    pub container: String,

    /// Command line run with bash -c inside the container
    pub command: String,

    /// Options for docker exec
    #[arg(short, long, default_value = docker::DEFAULT_EXEC_OPTIONS, allow_hyphen_values = true)]
    pub options: String,
}

async fn dispatch(app: &AppContext, cmd: &CommandLine) -> Result<()> {
    let reporter = app.reporter();
    app.dispatcher(&reporter)
        .dispatch(cmd, DispatchOptions::STREAM)
        .await?;
    Ok(())
}

/// Run `dockhand drun`.
///
/// # Errors
///
/// Returns an error if the options do not split or docker fails.
pub async fn run(app: &AppContext, args: &RunArgs) -> Result<()> {
    let cmd = docker::run(
        &args.image,
        &args.options.options,
        args.command.as_deref(),
        &args.args,
    )?;
    dispatch(app, &cmd).await
}

/// Run `dockhand dstop`.
///
/// # Errors
///
/// Returns an error if the options do not split or docker fails.
pub async fn stop(app: &AppContext, args: &ContainerArgs) -> Result<()> {
    dispatch(app, &docker::stop(&args.container, &args.options.options)?).await
}

/// Run `dockhand drm`.
///
/// # Errors
///
/// Returns an error if the options do not split or docker fails.
pub async fn rm(app: &AppContext, args: &ContainerArgs) -> Result<()> {
    dispatch(app, &docker::rm(&args.container, &args.options.options)?).await
}

/// Run `dockhand dlogs`.
///
/// # Errors
///
/// Returns an error if the options do not split or docker fails.
pub async fn logs(app: &AppContext, args: &ContainerArgs) -> Result<()> {
    dispatch(app, &docker::logs(&args.container, &args.options.options)?).await
}

/// Run `dockhand dps`.
///
/// # Errors
///
/// Returns an error if the options do not split or docker fails.
pub async fn ps(app: &AppContext, args: &OptionsArgs) -> Result<()> {
    dispatch(app, &docker::ps(&args.options)?).await
}

/// Run `dockhand dshell`.
///
/// # Errors
///
/// Returns an error if docker fails.
pub async fn shell(app: &AppContext, args: &ShellArgs) -> Result<()> {
    dispatch(app, &docker::shell(&args.container)).await
}

/// Run `dockhand dexec`.
///
/// # Errors
///
/// Returns an error if the options do not split or docker fails.
pub async fn exec(app: &AppContext, args: &ExecArgs) -> Result<()> {
    dispatch(app, &docker::exec(&args.container, &args.command, &args.options)?).await
}

/// Run `dockhand dsysprune`.
///
/// # Errors
///
/// Returns an error if the options do not split or docker fails.
pub async fn sysprune(app: &AppContext, args: &OptionsArgs) -> Result<()> {
    dispatch(app, &docker::system_prune(&args.options)?).await
}
