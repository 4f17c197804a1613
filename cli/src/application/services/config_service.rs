//! Application service — configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::DockhandConfig;

/// Load configuration.
///
/// # Errors
///
/// Returns an error if an existing configuration file is unreadable.
pub fn load_config(store: &impl ConfigStore) -> Result<DockhandConfig> {
    let config = store.load()?;
    tracing::debug!(credentials_dir = %config.credentials_dir.display(), "configuration loaded");
    Ok(config)
}
