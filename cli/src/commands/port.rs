//! `dockhand port` — print the lowest free notebook port.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::port_scout;
use crate::domain::NOTEBOOK_PORT_RANGE;

/// Run `dockhand port`.
///
/// # Errors
///
/// Returns an error if the container listing fails or the range is full.
pub async fn run(app: &AppContext) -> Result<()> {
    let reporter = app.reporter();
    let port = port_scout::find_unused_port(&app.dispatcher(&reporter), NOTEBOOK_PORT_RANGE).await?;
    app.renderer().render_port(port, &app.target)
}
