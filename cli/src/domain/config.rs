//! Domain types for dockhand configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ── Constants ────────────────────────────────────────────────────────────────

/// Credentials directory, relative to the working directory.
pub const DEFAULT_CREDENTIALS_DIR: &str = "credentials";

pub const DEFAULT_NOTEBOOK_IMAGE: &str = "jupyter/minimal-notebook:latest";
pub const DEFAULT_NOTEBOOK_TOKEN: &str = "mp84";
pub const DEFAULT_MATERIALS_REPO: &str = "https://github.com/ygingras/mp-84-atelier";
pub const DEFAULT_SETTLE_SECS: u64 = 3;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.dockhand/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DockhandConfig {
    /// Directory holding `<landscape>.env` credential files.
    pub credentials_dir: PathBuf,
    /// Notebook container settings.
    pub jupyter: JupyterConfig,
}

impl Default for DockhandConfig {
    fn default() -> Self {
        Self {
            credentials_dir: PathBuf::from(DEFAULT_CREDENTIALS_DIR),
            jupyter: JupyterConfig::default(),
        }
    }
}

/// Notebook container configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct JupyterConfig {
    /// Image to launch.
    pub image: String,
    /// Access token used when the caller supplies none.
    pub default_token: String,
    /// Repository cloned into the container once it is up.
    pub materials_repo: String,
    /// Seconds to wait between launch and the clone.
    pub settle_secs: u64,
}

impl Default for JupyterConfig {
    fn default() -> Self {
        Self {
            image: DEFAULT_NOTEBOOK_IMAGE.to_string(),
            default_token: DEFAULT_NOTEBOOK_TOKEN.to_string(),
            materials_repo: DEFAULT_MATERIALS_REPO.to_string(),
            settle_secs: DEFAULT_SETTLE_SECS,
        }
    }
}

impl JupyterConfig {
    /// Settle delay as a `Duration`.
    #[must_use]
    pub fn settle(&self) -> Duration {
        Duration::from_secs(self.settle_secs)
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
