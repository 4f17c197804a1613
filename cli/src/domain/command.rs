//! Structured command lines.
//!
//! A `CommandLine` is a program plus an argument vector. It is handed to the
//! OS as-is (no local shell in between); `render()` exists only for echoing
//! and logging.

use std::fmt;

use crate::domain::error::ArgumentError;

/// Container-runtime CLI binary.
pub const DOCKER: &str = "docker";

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
    /// Index of the `bash -c` payload, rendered single-quoted.
    script: Option<usize>,
}

impl CommandLine {
    /// Start a command line for an arbitrary program.
    #[must_use]
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            script: None,
        }
    }

    /// Start a `docker` command line, e.g. `CommandLine::docker(&["system", "prune"])`.
    #[must_use]
    pub fn docker(subcommand: &[&str]) -> Self {
        Self::new(DOCKER).args(subcommand.iter().copied())
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append a free-text option string, split with POSIX shell-word rules.
    ///
    /// Empty or whitespace-only strings append nothing.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::UnbalancedQuotes` if the string cannot be split.
    pub fn options(self, options: &str) -> Result<Self, ArgumentError> {
        let words = shell_words::split(options)
            .map_err(|_| ArgumentError::UnbalancedQuotes(options.to_string()))?;
        Ok(self.args(words))
    }

    /// Append `bash -c <script>`; the script is one argument.
    #[must_use]
    pub fn bash_script(mut self, script: &str) -> Self {
        self.args.push("bash".to_string());
        self.args.push("-c".to_string());
        self.script = Some(self.args.len());
        self.args.push(script.to_string());
        self
    }

    /// Program name.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Argument vector (program excluded).
    #[must_use]
    pub fn argv(&self) -> &[String] {
        &self.args
    }

    /// Human-readable form: words quoted only where needed, the `bash -c`
    /// payload always single-quoted.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = shell_words::quote(&self.program).into_owned();
        for (i, arg) in self.args.iter().enumerate() {
            out.push(' ');
            if self.script == Some(i) {
                out.push_str(&single_quote(arg));
            } else {
                out.push_str(&shell_words::quote(arg));
            }
        }
        out
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Wrap `s` in single quotes, escaping embedded single quotes as `'\''`.
#[must_use]
pub fn single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
