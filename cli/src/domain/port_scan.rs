//! Published-port extraction and free-port selection.
//!
//! Pure functions only — the caller supplies the `docker ps` listing.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::Deserialize;

use crate::domain::error::{ListingParseError, PortError};

/// Candidate host ports for notebook containers.
pub const NOTEBOOK_PORT_RANGE: RangeInclusive<u16> = 8888..=8988;

/// The only field of a `docker ps --format '{{json .}}'` line we read.
#[derive(Debug, Deserialize)]
struct ListingLine {
    #[serde(rename = "Ports")]
    ports: Option<String>,
}

/// Extract the published host port from one listing line.
///
/// Only containers with exactly one mapping count. The port left of the
/// arrow is the one bound on the host, so it is the one a new container
/// would collide with: `0.0.0.0:8890->8888/tcp` yields `8890`, not the
/// container-side `8888`.
///
/// # Errors
///
/// Returns a `ListingParseError` describing why the line has no usable port.
pub fn parse_listing_line(line: &str) -> Result<u16, ListingParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ListingParseError::Blank);
    }
    let parsed: ListingLine =
        serde_json::from_str(line).map_err(|e| ListingParseError::InvalidJson(e.to_string()))?;
    let ports = parsed.ports.ok_or(ListingParseError::MissingPorts)?;

    let arrows = ports.matches('>').count();
    if arrows != 1 {
        return Err(ListingParseError::NotSingleMapping(arrows));
    }
    let (binding, _container) = ports
        .split_once("->")
        .ok_or(ListingParseError::NotSingleMapping(0))?;
    let host_port = binding.rsplit(':').next().unwrap_or(binding).trim();
    host_port
        .parse()
        .map_err(|_| ListingParseError::InvalidPort(host_port.to_string()))
}

/// Lazily parse every line of a listing; each item is independent.
pub fn parse_listing(listing: &str) -> impl Iterator<Item = Result<u16, ListingParseError>> + '_ {
    listing.lines().map(parse_listing_line)
}

/// Lowest port of `range` not in `used`.
///
/// # Errors
///
/// Returns `PortError::NoPortAvailable` if every port of the range is used.
pub fn lowest_unused(
    range: RangeInclusive<u16>,
    used: &BTreeSet<u16>,
) -> Result<u16, PortError> {
    let (low, high) = (*range.start(), *range.end());
    range
        .into_iter()
        .find(|port| !used.contains(port))
        .ok_or(PortError::NoPortAvailable { low, high })
}
