//! Application service — landscape selection use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::Result;

use crate::application::ports::CredentialStore;
use crate::domain::{ExecutionContext, validate_landscape_name};

/// Resolve landscape `name` and replace `ctx` with it.
///
/// The context is only written once the whole profile has loaded, so a
/// failure leaves it exactly as it was. Selecting the same landscape twice
/// yields the same context as selecting it once.
///
/// # Errors
///
/// Returns a `ConfigurationError` if the name is invalid or the profile is
/// missing or incomplete.
pub fn select_landscape(
    store: &impl CredentialStore,
    ctx: &mut ExecutionContext,
    name: &str,
) -> Result<()> {
    validate_landscape_name(name)?;
    let profile = store.load(name)?;
    *ctx = ExecutionContext::for_landscape(name, profile);
    tracing::info!(
        landscape = name,
        host = %ctx.host,
        remote_daemon = ctx.is_remote(),
        "landscape selected"
    );
    Ok(())
}

/// Landscapes available in the store.
///
/// # Errors
///
/// Returns an error if the store cannot be enumerated.
pub fn list_landscapes(store: &impl CredentialStore) -> Result<Vec<String>> {
    store.list()
}
