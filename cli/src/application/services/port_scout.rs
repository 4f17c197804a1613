//! Application service — find a free host port for a new container.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use anyhow::Result;

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::application::services::dispatch::{DispatchOptions, Dispatcher};
use crate::domain::{docker, port_scan};

/// Host ports published by running single-port containers.
///
/// Lines that do not parse are logged and skipped; they never abort the scan.
///
/// # Errors
///
/// Returns an error if `docker ps` itself fails.
pub async fn used_ports<R: CommandRunner, P: ProgressReporter>(
    dispatcher: &Dispatcher<'_, R, P>,
) -> Result<BTreeSet<u16>> {
    let listing = dispatcher
        .dispatch(&docker::ps_json(), DispatchOptions::CAPTURE)
        .await?;

    let used = port_scan::parse_listing(&listing.stdout)
        .filter_map(|parsed| {
            parsed
                .inspect_err(|reason| tracing::debug!(%reason, "listing line skipped"))
                .ok()
        })
        .collect();
    Ok(used)
}

/// Lowest port in `range` that no running container publishes.
///
/// # Errors
///
/// Returns `PortError::NoPortAvailable` when the range is exhausted, or the
/// dispatch error if the container listing fails.
pub async fn find_unused_port<R: CommandRunner, P: ProgressReporter>(
    dispatcher: &Dispatcher<'_, R, P>,
    range: RangeInclusive<u16>,
) -> Result<u16> {
    let used = used_ports(dispatcher).await?;
    let port = port_scan::lowest_unused(range, &used)?;
    tracing::debug!(port, used = used.len(), "unused port found");
    Ok(port)
}
