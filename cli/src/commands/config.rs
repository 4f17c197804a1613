//! `dockhand config` — show configuration.

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn run(app: &AppContext, cmd: &ConfigCommand) -> Result<()> {
    let path = app.config_store.path()?;
    match cmd {
        ConfigCommand::Show => app.renderer().render_config(&app.config, &path),
        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}
