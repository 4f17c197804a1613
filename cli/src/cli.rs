//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands::{self, Task};

/// Dispatch Docker tasks to the local daemon or a remote landscape
#[derive(Parser, Debug)]
#[command(
    name = "dockhand",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (any non-empty NO_COLOR counts)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Skip confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Directory holding <landscape>.env credential files
    #[arg(long, global = true, env = "DOCKHAND_CREDENTIALS_DIR", value_name = "DIR")]
    pub credentials_dir: Option<PathBuf>,

    /// Log debug events to stderr (DOCKHAND_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Target the lada landscape
    Lada {
        #[command(subcommand)]
        task: Option<Task>,
    },

    /// Target the prod landscape
    Prod {
        #[command(subcommand)]
        task: Option<Task>,
    },

    /// Target any landscape with a credential file
    Landscape {
        /// Landscape name (credentials/<name>.env)
        name: String,

        #[command(subcommand)]
        task: Option<Task>,
    },

    /// List available landscapes
    Landscapes,

    /// Show configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    #[command(flatten)]
    Task(Task),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if landscape selection or the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            yes,
            credentials_dir,
            verbose: _,
            command,
        } = self;

        let mut app = AppContext::new(AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            behaviour: BehaviourFlags {
                yes,
                credentials_dir,
            },
        })?;

        match command {
            Command::Lada { task } => select_and_run(&mut app, "lada", task).await,
            Command::Prod { task } => select_and_run(&mut app, "prod", task).await,
            Command::Landscape { name, task } => select_and_run(&mut app, &name, task).await,
            Command::Landscapes => commands::landscape::list(&app),
            Command::Config(cmd) => commands::config::run(&app, &cmd),
            Command::Task(task) => commands::run(&app, &task).await,
        }
    }
}

async fn select_and_run(app: &mut AppContext, name: &str, task: Option<Task>) -> Result<()> {
    app.select_landscape(name)?;
    match task {
        Some(task) => commands::run(app, &task).await,
        None => commands::landscape::show(app),
    }
}
