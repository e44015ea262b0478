//! Test fixture helpers for creating config files
//!
//! Each helper returns the `TempDir`; it must be kept alive for the
//! duration of the test.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Config file name looked up in the working directory
pub const CONFIG_FILE: &str = ".broker-roi.toml";

/// An empty working directory
pub fn empty_project() -> anyhow::Result<TempDir> {
    Ok(TempDir::new()?)
}

/// A working directory holding `.broker-roi.toml` with `contents`
pub fn project_with_config(contents: &str) -> anyhow::Result<TempDir> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join(CONFIG_FILE), contents)?;
    Ok(temp_dir)
}

/// A Telecom config with an explicit spend and fee
pub fn telecom_project() -> anyhow::Result<TempDir> {
    project_with_config(
        r#"
domain = "Telecom"
category = "Telecom"

[broker]
annual-spend = 500000.0
fee-pct = 8.0

[forecast]
years = 5
discount-rate = 0.05
"#,
    )
}

/// A config that parses but fails validation
pub fn invalid_project() -> anyhow::Result<TempDir> {
    project_with_config(
        r#"
[broker]
savings-pct = 140.0
"#,
    )
}

/// A config file at a custom location outside the working directory
pub fn standalone_config(contents: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("scenarios").join("custom.toml");
    fs::create_dir_all(path.parent().unwrap_or(temp_dir.path()))?;
    fs::write(&path, contents)?;
    Ok((temp_dir, path))
}
