//! Shared fixtures: an isolated `dockhand` command, credential directories
//! and a fake `docker` binary.

#![allow(dead_code, clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const PROD_ENV: &str = "\
PROUCTION_USER=deploy
PROUCTION_HOST=10.0.0.7
PROUCTION_DOCKER_HOST=ssh://deploy@10.0.0.7
";

pub const LADA_ENV: &str = "\
PROUCTION_USER=ada
PROUCTION_HOST=lada.local
";

/// Scratch space for one test: config path, credentials dir, fake binaries.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        fs::create_dir(dir.path().join("credentials")).expect("credentials dir");
        fs::create_dir(dir.path().join("bin")).expect("bin dir");
        Self { dir }
    }

    pub fn with_landscape(self, name: &str, content: &str) -> Self {
        fs::write(self.credentials().join(format!("{name}.env")), content)
            .expect("write credential file");
        self
    }

    pub fn with_config(self, yaml: &str) -> Self {
        fs::write(self.config_path(), yaml).expect("write config");
        self
    }

    pub fn credentials(&self) -> PathBuf {
        self.dir.path().join("credentials")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.yaml")
    }

    pub fn bin(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    /// Log file the fake binaries append their invocations to.
    pub fn calls_log(&self) -> PathBuf {
        self.dir.path().join("calls.log")
    }

    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.calls_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Install an executable `name` in the sandbox `bin/` running `body`.
    #[cfg(unix)]
    pub fn with_program(self, name: &str, body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin().join(name);
        let script = format!(
            "#!/bin/sh\necho \"$(basename \"$0\") DOCKER_HOST=${{DOCKER_HOST:-unset}} $*\" >> '{}'\n{body}\n",
            self.calls_log().display()
        );
        fs::write(&path, script).expect("write fake program");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");
        self
    }

    /// `dockhand` isolated from the user's config, credentials and daemon.
    pub fn dockhand(&self) -> Command {
        let mut cmd = dockhand();
        cmd.env("DOCKHAND_CONFIG", self.config_path())
            .env("DOCKHAND_CREDENTIALS_DIR", self.credentials())
            .env("PATH", path_with(&self.bin()));
        cmd
    }
}

fn path_with(dir: &Path) -> String {
    let rest = std::env::var("PATH").unwrap_or_default();
    format!("{}:{rest}", dir.display())
}

/// `dockhand` with colors off and no inherited overrides.
pub fn dockhand() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dockhand"));
    cmd.env("NO_COLOR", "1")
        .env_remove("DOCKHAND_CONFIG")
        .env_remove("DOCKHAND_CREDENTIALS_DIR")
        .env_remove("DOCKHAND_LOG")
        .env_remove("DOCKHAND_YES")
        .env_remove("DOCKER_HOST");
    cmd
}
