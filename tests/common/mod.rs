//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Assertion helpers for money and ratio comparisons
//! - Config fixture creation utilities
//! - The binary under test
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::assertions::*;
//!
//! fn test_total_roi() {
//!     let metrics = compute();
//!     assert_ratio_eq(metrics.total_roi, 3.0);
//! }
//! ```

pub mod assertions;
pub mod fixtures;

/// The broker-roi binary, with emoji disabled for stable output
#[allow(dead_code)]
pub fn bin() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_broker-roi"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Parse command stdout as JSON, failing the test on malformed output
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8");
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("stdout is not valid JSON ({}):\n{}", e, stdout))
}
