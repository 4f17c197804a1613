//! Domain layer — pure types, command-line builders and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod command;
pub mod config;
pub mod docker;
pub mod error;
pub mod landscape;
pub mod port_scan;

pub use command::CommandLine;
pub use config::{DockhandConfig, JupyterConfig};
pub use error::{ArgumentError, ConfigurationError, DispatchError, ListingParseError, PortError};
pub use landscape::{CredentialProfile, ExecutionContext, validate_landscape_name};
pub use port_scan::NOTEBOOK_PORT_RANGE;
