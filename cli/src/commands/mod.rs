//! Command implementations

pub mod config;
pub mod docker;
pub mod jupytainer;
pub mod landscape;
pub mod port;
pub mod provision;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;

/// Tasks runnable against the selected landscape, or locally when none is
/// selected.
#[derive(Subcommand, Debug)]
pub enum Task {
    /// docker run
    Drun(docker::RunArgs),

    /// docker stop
    Dstop(docker::ContainerArgs),

    /// docker rm
    Drm(docker::ContainerArgs),

    /// docker logs
    Dlogs(docker::ContainerArgs),

    /// docker ps
    Dps(docker::OptionsArgs),

    /// Interactive bash shell in a running container
    Dshell(docker::ShellArgs),

    /// Run a command with bash -c in a running container
    Dexec(docker::ExecArgs),

    /// docker system prune -f
    Dsysprune(docker::OptionsArgs),

    /// Launch a Jupyter notebook container for a user
    Jupytainer(jupytainer::JupytainerArgs),

    /// Find the lowest free notebook port
    Port,

    /// Install Docker on the landscape host
    InstallDocker,

    /// Uninstall Docker from the landscape host
    UninstallDocker(provision::UninstallArgs),
}

impl Task {
    /// CLI name of the task, for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Drun(_) => "drun",
            Self::Dstop(_) => "dstop",
            Self::Drm(_) => "drm",
            Self::Dlogs(_) => "dlogs",
            Self::Dps(_) => "dps",
            Self::Dshell(_) => "dshell",
            Self::Dexec(_) => "dexec",
            Self::Dsysprune(_) => "dsysprune",
            Self::Jupytainer(_) => "jupytainer",
            Self::Port => "port",
            Self::InstallDocker => "install-docker",
            Self::UninstallDocker(_) => "uninstall-docker",
        }
    }
}

/// Run one task against the app's current target.
///
/// # Errors
///
/// Propagates the task's error.
pub async fn run(app: &AppContext, task: &Task) -> Result<()> {
    tracing::debug!(
        task = task.name(),
        landscape = app.target.landscape.as_deref().unwrap_or("local"),
        "running task"
    );
    match task {
        Task::Drun(args) => docker::run(app, args).await,
        Task::Dstop(args) => docker::stop(app, args).await,
        Task::Drm(args) => docker::rm(app, args).await,
        Task::Dlogs(args) => docker::logs(app, args).await,
        Task::Dps(args) => docker::ps(app, args).await,
        Task::Dshell(args) => docker::shell(app, args).await,
        Task::Dexec(args) => docker::exec(app, args).await,
        Task::Dsysprune(args) => docker::sysprune(app, args).await,
        Task::Jupytainer(args) => jupytainer::run(app, args).await,
        Task::Port => port::run(app).await,
        Task::InstallDocker => provision::install(app).await,
        Task::UninstallDocker(args) => provision::uninstall(app, args).await,
    }
}
