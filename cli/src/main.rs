//! Dockhand CLI - dispatch Docker tasks to local or remote landscapes

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dockhand_cli::cli::Cli;
use dockhand_cli::domain::{ArgumentError, ConfigurationError, DispatchError, PortError};
use dockhand_cli::output::{OutputContext, json};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "DOCKHAND_LOG";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json_mode = cli.json;
    let no_color = cli.no_color;
    if let Err(e) = cli.run().await {
        report_error(&e, json_mode, no_color);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Stable machine-readable code for the error kinds users can act on.
fn error_code(e: &anyhow::Error) -> &'static str {
    if e.downcast_ref::<ConfigurationError>().is_some() {
        "configuration"
    } else if e.downcast_ref::<DispatchError>().is_some() {
        "command_failed"
    } else if e.downcast_ref::<PortError>().is_some() {
        "no_port_available"
    } else if e.downcast_ref::<ArgumentError>().is_some() {
        "invalid_arguments"
    } else {
        "error"
    }
}

fn report_error(e: &anyhow::Error, json_mode: bool, no_color: bool) {
    let message = format!("{e:#}");
    if json_mode {
        match json::format_error(&message, error_code(e)) {
            Ok(out) => println!("{out}"),
            Err(_) => eprintln!("Error: {message}"),
        }
        return;
    }
    OutputContext::new(no_color, false).error(&message);
}
