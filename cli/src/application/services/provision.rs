//! Application service — install and uninstall Docker on a landscape host.
//!
//! Follows the Debian repository install procedure:
//! <https://docs.docker.com/engine/install/debian/#install-using-the-repository>

use anyhow::Result;

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::application::services::dispatch::DispatchOptions;
use crate::application::services::remote::SshSession;

/// Packages from older Docker installs; removal may fail when absent.
pub const REMOVE_LEGACY_PACKAGES: &str =
    "apt-get -qy remove docker docker-engine docker.io containerd runc";
pub const APT_UPDATE: &str = "apt-get update -qq";
pub const INSTALL_PREREQUISITES: &str = "apt-get -qy install apt-transport-https ca-certificates curl gnupg-agent software-properties-common";
pub const ADD_DOCKER_GPG_KEY: &str =
    "curl -fsSL https://download.docker.com/linux/debian/gpg | apt-key add -";
pub const ADD_DOCKER_REPOSITORY: &str = r#"add-apt-repository "deb [arch=amd64] https://download.docker.com/linux/debian $(lsb_release -cs) stable""#;
pub const INSTALL_DOCKER_PACKAGES: &str = "apt-get -qy install docker-ce docker-ce-cli containerd.io";
/// docker compose over SSH opens more than the default 10 sessions.
pub const RAISE_SSH_MAX_SESSIONS: &str =
    "sed -i 's/^#MaxSessions 10/MaxSessions 30/' /etc/ssh/sshd_config";
pub const RESTART_SSHD: &str = "service sshd restart";
pub const PURGE_DOCKER_PACKAGES: &str = "apt-get -qy purge docker-ce docker-ce-cli containerd.io";
pub const REMOVE_DOCKER_DATA: &str = "rm -rf /var/lib/docker";
pub const REMOVE_CONTAINERD_DATA: &str = "rm -rf /var/lib/containerd";

/// Install Docker CE on the session's host and add the landscape user to the
/// `docker` group.
///
/// # Errors
///
/// Returns the first failing step's `DispatchError`; the legacy package
/// removal never fails the install.
pub async fn install_docker<R: CommandRunner, P: ProgressReporter>(
    session: &SshSession<'_, R, P>,
) -> Result<()> {
    let reporter = session.reporter();
    let quiet = DispatchOptions::CAPTURE;
    let loud = DispatchOptions::STREAM;
    let user = session.context().user.clone();

    reporter.step("Removing legacy Docker packages...");
    session.sudo(REMOVE_LEGACY_PACKAGES, quiet.warn_only()).await?;

    reporter.step("Installing prerequisites...");
    session.sudo(APT_UPDATE, quiet).await?;
    session.sudo(INSTALL_PREREQUISITES, quiet).await?;
    session.sudo(ADD_DOCKER_GPG_KEY, loud).await?;
    session.sudo(ADD_DOCKER_REPOSITORY, loud).await?;

    reporter.step("Installing Docker packages...");
    session.sudo(APT_UPDATE, quiet).await?;
    session.sudo(INSTALL_DOCKER_PACKAGES, quiet).await?;
    session
        .sudo(&format!("usermod -aG docker {}", shell_words::quote(&user)), loud)
        .await?;
    session.sudo(RAISE_SSH_MAX_SESSIONS, loud).await?;
    // TODO: sysctl -w vm.max_map_count=262144 for hosts running Elasticsearch
    session.sudo(RESTART_SSHD, loud).await?;

    let host = session.context().host_label().to_string();
    tracing::info!(host = %host, "docker installed");
    reporter.success(&format!("Docker installed on {host}"));
    Ok(())
}

/// Purge Docker CE from the session's host; `deep` also deletes images,
/// containers and volumes.
///
/// # Errors
///
/// Returns the first failing step's `DispatchError`.
pub async fn uninstall_docker<R: CommandRunner, P: ProgressReporter>(
    session: &SshSession<'_, R, P>,
    deep: bool,
) -> Result<()> {
    let reporter = session.reporter();
    let quiet = DispatchOptions::CAPTURE;

    reporter.step("Purging Docker packages...");
    session.sudo(PURGE_DOCKER_PACKAGES, quiet).await?;
    if deep {
        reporter.step("Removing Docker data...");
        session.sudo(REMOVE_DOCKER_DATA, quiet).await?;
        session.sudo(REMOVE_CONTAINERD_DATA, quiet).await?;
    }

    let host = session.context().host_label().to_string();
    tracing::info!(host = %host, deep, "docker uninstalled");
    reporter.success(&format!("Docker uninstalled from {host}"));
    Ok(())
}
