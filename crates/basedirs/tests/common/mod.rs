//! Common test utilities for basedirs integration tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Variables that would leak the developer's own layout into a test
const XDG_VARS: [&str; 5] = [
    "XDG_CACHE_HOME",
    "XDG_CONFIG_HOME",
    "XDG_DATA_HOME",
    "XDG_BIN_HOME",
    "XDG_RUNTIME_DIR",
];

/// Test environment with an isolated home directory
pub struct TestEnv {
    pub temp_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            temp_dir: tempdir()?,
        })
    }

    /// The fake home directory
    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A path under the fake home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home().join(relative)
    }

    /// Create a command with HOME pointed at the test environment and no
    /// XDG overrides
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_basedirs"));
        cmd.env("HOME", self.home());
        for var in XDG_VARS {
            cmd.env_remove(var);
        }
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new().expect("Failed to create test environment")
    }
}
