//! Landscapes, credential profiles and the execution context they populate.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigurationError;

/// Prefix shared by every credential key (literal spelling kept for
/// compatibility with existing credential files).
pub const CREDENTIAL_PREFIX: &str = "PROUCTION_";

/// Credential key holding the SSH login user.
pub const KEY_USER: &str = "PROUCTION_USER";

/// Credential key holding the landscape host address.
pub const KEY_HOST: &str = "PROUCTION_HOST";

/// Landscapes with a dedicated selector subcommand.
pub const BUILTIN_LANDSCAPES: &[&str] = &["lada", "prod"];

// ── Execution context ────────────────────────────────────────────────────────

/// Where dispatched commands run.
///
/// The default value targets the local Docker daemon. Selecting a landscape
/// replaces every field at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionContext {
    /// Name of the selected landscape, `None` for local execution.
    pub landscape: Option<String>,
    /// SSH login user on the landscape host.
    pub user: String,
    /// Landscape host address.
    pub host: String,
    /// Remote Docker daemon address exported as `DOCKER_HOST` per dispatch.
    pub docker_host: Option<String>,
}

impl ExecutionContext {
    /// Build the context for a resolved landscape.
    #[must_use]
    pub fn for_landscape(name: &str, profile: CredentialProfile) -> Self {
        Self {
            landscape: Some(name.to_string()),
            user: profile.user,
            host: profile.host,
            docker_host: profile.docker_host,
        }
    }

    /// `true` when dispatches must target a remote daemon.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.docker_host.is_some()
    }

    /// Host label used in echoed command lines and URLs.
    #[must_use]
    pub fn host_label(&self) -> &str {
        if self.host.is_empty() {
            "localhost"
        } else {
            &self.host
        }
    }

    /// `user@host` for SSH sessions, or `None` when no landscape is selected.
    #[must_use]
    pub fn ssh_destination(&self) -> Option<String> {
        if self.host.is_empty() {
            return None;
        }
        if self.user.is_empty() {
            Some(self.host.clone())
        } else {
            Some(format!("{}@{}", self.user, self.host))
        }
    }
}

// ── Credential profile ───────────────────────────────────────────────────────

/// Contents of one `credentials/<name>.env` file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialProfile {
    pub user: String,
    pub host: String,
    #[serde(default)]
    pub docker_host: Option<String>,
}

impl CredentialProfile {
    /// Build a profile from `KEY=VALUE` pairs read out of a credential file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingKey` if `PROUCTION_USER` or
    /// `PROUCTION_HOST` is absent or empty.
    pub fn from_pairs(
        name: &str,
        pairs: Vec<(String, String)>,
    ) -> Result<Self, ConfigurationError> {
        let missing = |key: &str| ConfigurationError::MissingKey {
            name: name.to_string(),
            key: key.to_string(),
        };

        let profile: Self = match envy::prefixed(CREDENTIAL_PREFIX).from_iter(pairs) {
            Ok(profile) => profile,
            Err(envy::Error::MissingValue(field)) => {
                return Err(missing(&format!(
                    "{CREDENTIAL_PREFIX}{}",
                    field.to_uppercase()
                )));
            }
            Err(other) => {
                return Err(ConfigurationError::Unreadable {
                    path: format!("{name}.env"),
                    reason: other.to_string(),
                });
            }
        };

        if profile.user.trim().is_empty() {
            return Err(missing(KEY_USER));
        }
        if profile.host.trim().is_empty() {
            return Err(missing(KEY_HOST));
        }
        Ok(Self {
            user: profile.user.trim().to_string(),
            host: profile.host.trim().to_string(),
            docker_host: profile
                .docker_host
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }
}

// ── Validators and parsers ───────────────────────────────────────────────────

/// Validates a landscape name so it always maps to a file directly inside
/// the credentials directory.
///
/// # Errors
///
/// Returns `ConfigurationError::InvalidName` unless the name matches
/// `^[a-z0-9][a-z0-9_-]{0,62}$`.
pub fn validate_landscape_name(name: &str) -> Result<(), ConfigurationError> {
    let mut chars = name.chars();
    let valid_first = chars
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    let valid_rest =
        chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if valid_first && valid_rest && name.len() <= 63 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidName(name.to_string()))
    }
}

/// Parse dotenv-style content into `(key, value)` pairs.
///
/// Accepts `KEY=VALUE`, `export KEY=VALUE`, `#` comments and blank lines.
/// Values wrapped in matching single or double quotes are unwrapped. Lines
/// without `=` are ignored. A repeated key keeps its first position and its
/// last value.
#[must_use]
pub fn parse_env_file(content: &str) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let parsed = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), unquote(value.trim()).to_string()))
        });
    for (key, value) in parsed {
        match pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => pairs.push((key, value)),
        }
    }
    pairs
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
