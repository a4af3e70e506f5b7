//! Test helper utilities for running the binary

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn sample_catalog_path() -> PathBuf {
    fixtures_dir().join("catalog.json")
}

pub fn sample_area_path() -> PathBuf {
    fixtures_dir().join("aether.are")
}

/// A scratch directory with a config path inside it.
///
/// The config file is not created; commands fall back to defaults.
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        Self {
            temp_dir,
            config_path,
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(&self.config_path, contents).expect("Failed to write config");
    }

    /// Run itemview with `--config` pointing into the scratch directory.
    /// Returns (stdout, stderr, exit code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new(env!("CARGO_BIN_EXE_itemview"))
            .args(args)
            .arg("--config")
            .arg(&self.config_path)
            .env("NO_COLOR", "1")
            .env_remove("ITEMVIEW_LOG")
            .output()
            .expect("Failed to execute itemview");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);

        (stdout, stderr, exit_code)
    }
}
