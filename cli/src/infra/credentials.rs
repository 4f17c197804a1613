//! Infrastructure implementation of the `CredentialStore` port.
//!
//! One `<name>.env` file per landscape in a credentials directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::CredentialStore;
use crate::domain::landscape::parse_env_file;
use crate::domain::{ConfigurationError, CredentialProfile};

/// Extension of credential files.
pub const ENV_EXTENSION: &str = "env";

/// Reads landscape profiles from `<dir>/<name>.env`.
#[derive(Debug, Clone)]
pub struct EnvFileCredentialStore {
    dir: PathBuf,
}

impl EnvFileCredentialStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The credentials directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CredentialStore for EnvFileCredentialStore {
    fn load(&self, name: &str) -> Result<CredentialProfile> {
        let path = self.location(name);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ConfigurationError::ProfileNotFound {
                    name: name.to_string(),
                    path: path.display().to_string(),
                }
                .into());
            }
            Err(e) => {
                return Err(ConfigurationError::Unreadable {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }
                .into());
            }
        };
        tracing::debug!(path = %path.display(), "credential file read");
        Ok(CredentialProfile::from_pairs(name, parse_env_file(&content))?)
    }

    fn list(&self) -> Result<Vec<String>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("cannot list {}", self.dir.display()));
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|ext| ext == ENV_EXTENSION))
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .collect();
        names.sort();
        Ok(names)
    }

    fn location(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{ENV_EXTENSION}"))
    }
}
