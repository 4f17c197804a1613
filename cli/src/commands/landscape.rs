//! `dockhand landscapes` and the landscape selectors without a task.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::landscape;

/// Show the resolved execution context.
///
/// # Errors
///
/// Returns an error if JSON rendering fails.
pub fn show(app: &AppContext) -> Result<()> {
    app.renderer().render_context(&app.target)
}

/// List the landscapes in the credentials directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn list(app: &AppContext) -> Result<()> {
    let names = landscape::list_landscapes(&app.credentials)?;
    app.renderer().render_landscapes(&names, app.credentials.dir())
}
