//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed object on
//! stdout; failures use the error object from `format_error`.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Value, json};

use crate::application::services::notebook::NotebookPlan;
use crate::domain::{DockhandConfig, ExecutionContext};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Execution context as reported by the landscape selectors.
#[must_use]
pub fn context_value(ctx: &ExecutionContext) -> Value {
    json!({
        "landscape": ctx.landscape,
        "user": ctx.user,
        "host": ctx.host,
        "docker_host": ctx.docker_host,
        "remote": ctx.is_remote(),
    })
}

/// Landscapes found in the credentials directory.
#[must_use]
pub fn landscapes_value(names: &[String], dir: &Path) -> Value {
    json!({
        "credentials_dir": dir.display().to_string(),
        "landscapes": names,
    })
}

/// Port picked by the port scout.
#[must_use]
pub fn port_value(port: u16, ctx: &ExecutionContext) -> Value {
    json!({
        "port": port,
        "host": ctx.host_label(),
    })
}

/// A launched notebook.
#[must_use]
pub fn notebook_value(plan: &NotebookPlan) -> Value {
    json!({
        "container": plan.container,
        "image": plan.image,
        "port": plan.port,
        "token": plan.token,
        "url": plan.url,
    })
}

/// Tool configuration and where it was read from.
#[must_use]
pub fn config_value(config: &DockhandConfig, path: &Path) -> Value {
    json!({
        "path": path.display().to_string(),
        "config": config,
    })
}

/// Renders values as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Print `value` pretty-printed.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn print(value: &Value) -> Result<()> {
        let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
        println!("{out}");
        Ok(())
    }
}
