//! Docker task command lines.
//!
//! One builder per wrapper task. Free-text `options` are split with
//! shell-word rules and placed where the Docker CLI expects them.

use crate::domain::command::CommandLine;
use crate::domain::error::ArgumentError;

/// Options used by `dexec` when the caller passes none.
pub const DEFAULT_EXEC_OPTIONS: &str = "-ti";

/// Shell started by `dshell`.
pub const INTERACTIVE_SHELL: &str = "/bin/bash";

/// Go template making `docker ps` print one JSON object per container.
pub const PS_JSON_FORMAT: &str = "{{json .}}";

/// `docker run <options> <image> [command] [args..]`
///
/// # Errors
///
/// Returns an error if `options` has unbalanced quotes.
pub fn run(
    image: &str,
    options: &str,
    command: Option<&str>,
    args: &[String],
) -> Result<CommandLine, ArgumentError> {
    Ok(CommandLine::docker(&["run"])
        .options(options)?
        .arg(image)
        .args(command)
        .args(args.iter().cloned()))
}

/// `docker stop <options> <container>`
///
/// # Errors
///
/// Returns an error if `options` has unbalanced quotes.
pub fn stop(container: &str, options: &str) -> Result<CommandLine, ArgumentError> {
    Ok(CommandLine::docker(&["stop"]).options(options)?.arg(container))
}

/// `docker rm <options> <container>`
///
/// # Errors
///
/// Returns an error if `options` has unbalanced quotes.
pub fn rm(container: &str, options: &str) -> Result<CommandLine, ArgumentError> {
    Ok(CommandLine::docker(&["rm"]).options(options)?.arg(container))
}

/// `docker logs <options> <container>`
///
/// # Errors
///
/// Returns an error if `options` has unbalanced quotes.
pub fn logs(container: &str, options: &str) -> Result<CommandLine, ArgumentError> {
    Ok(CommandLine::docker(&["logs"]).options(options)?.arg(container))
}

/// `docker ps <options>`
///
/// # Errors
///
/// Returns an error if `options` has unbalanced quotes.
pub fn ps(options: &str) -> Result<CommandLine, ArgumentError> {
    CommandLine::docker(&["ps"]).options(options)
}

/// `docker ps --format '{{json .}}'` — one JSON object per line.
#[must_use]
pub fn ps_json() -> CommandLine {
    CommandLine::docker(&["ps", "--format", PS_JSON_FORMAT])
}

/// `docker exec -ti <container> bash -c '/bin/bash'`
#[must_use]
pub fn shell(container: &str) -> CommandLine {
    CommandLine::docker(&["exec", DEFAULT_EXEC_OPTIONS])
        .arg(container)
        .bash_script(INTERACTIVE_SHELL)
}

/// `docker exec <options> <container> bash -c '<command>'`
///
/// # Errors
///
/// Returns an error if `options` has unbalanced quotes.
pub fn exec(container: &str, command: &str, options: &str) -> Result<CommandLine, ArgumentError> {
    Ok(CommandLine::docker(&["exec"])
        .options(options)?
        .arg(container)
        .bash_script(command))
}

/// `docker system prune -f <options>`
///
/// # Errors
///
/// Returns an error if `options` has unbalanced quotes.
pub fn system_prune(options: &str) -> Result<CommandLine, ArgumentError> {
    CommandLine::docker(&["system", "prune", "-f"]).options(options)
}
