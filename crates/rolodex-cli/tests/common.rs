//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// No backend listens here; connections fail fast.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9/api";

pub struct TestFixture {
    _temp_dir: TempDir,
    config_home: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_home = temp_dir.path().join("config");
        fs::create_dir_all(&config_home).expect("Failed to create config dir");

        Self {
            _temp_dir: temp_dir,
            config_home,
        }
    }

    /// A command isolated from the developer's real config and environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("rolodex").expect("Failed to find rolodex binary");
        cmd.env_remove("ROLODEX_API_URL");
        cmd.env("XDG_CONFIG_HOME", &self.config_home);
        cmd.env("HOME", self._temp_dir.path());
        cmd
    }

    pub fn write_config(&self, api_url: &str) {
        let dir = self.config_home.join("rolodex");
        fs::create_dir_all(&dir).expect("Failed to create rolodex config dir");
        fs::write(
            dir.join("config.toml"),
            format!("api_url = \"{}\"\n", api_url),
        )
        .expect("Failed to write config file");
    }
}
