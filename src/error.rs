//! Application error types with contextual suggestions
//!
//! Wraps engine contract violations and configuration problems in one type
//! that carries:
//! - Actionable error messages
//! - Suggested fixes
//! - sysexits-style exit codes for scripting
//!
//! # Examples
//!
//! ```
//! use broker_roi::error::RoiError;
//!
//! let error = RoiError::InvalidDomain {
//!     name: "Mainframes".to_string(),
//!     available: vec!["Telecom".to_string(), "Security".to_string()],
//! };
//! assert_eq!(error.exit_code(), 65);
//! assert!(error.suggestion().unwrap().contains("Telecom"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::engine::{EngineError, MAX_GRID_POINTS_PER_AXIS, MAX_HORIZON_YEARS};

/// broker-roi errors with contextual suggestions
#[derive(Error, Debug)]
pub enum RoiError {
    /// Calculation input contract violated
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Explicitly requested configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path to config file
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Configuration file failed validation
    #[error("Invalid configuration in {path}")]
    InvalidConfig {
        /// Path to config file
        path: PathBuf,
        /// Rendered validation errors
        issues: Vec<String>,
    },

    /// Unknown domain preset
    #[error("Invalid domain: '{name}'")]
    InvalidDomain {
        /// Requested domain
        name: String,
        /// Valid domain names
        available: Vec<String>,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl RoiError {
    /// Get actionable suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Engine(EngineError::UnknownCategory { available, .. }) => Some(format!(
                "Available categories: {}\nRun 'broker-roi category --list' to see their rates",
                available.join(", ")
            )),
            Self::Engine(EngineError::PercentOutOfRange { field, .. }) => {
                Some(format!("Pass {} as a percentage between 0 and 100", field))
            }
            Self::Engine(EngineError::InvalidRate { .. }) => Some(
                "Discount rates are fractions: use 0.08 for 8%".to_string(),
            ),
            Self::Engine(EngineError::InvalidHorizon(_)) => Some(format!(
                "Use a forecast horizon between 1 and {} years",
                MAX_HORIZON_YEARS
            )),
            Self::Engine(EngineError::GridTooLarge { .. }) => Some(format!(
                "Use a larger --step or a narrower range (at most {} points per axis)",
                MAX_GRID_POINTS_PER_AXIS
            )),
            Self::Engine(_) => None,
            Self::ConfigNotFound { .. } => Some(
                "Run 'broker-roi init' to create a configuration file".to_string(),
            ),
            Self::InvalidConfig { issues, .. } => Some(issues.join("\n")),
            Self::InvalidDomain { available, .. } => Some(format!(
                "Available domains: {}\nRun 'broker-roi init --list' to see all presets",
                available.join(", ")
            )),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Engine(_) => 65,              // EX_DATAERR
            Self::ConfigNotFound { .. } => 66,  // EX_NOINPUT
            Self::InvalidConfig { .. } => 78,   // EX_CONFIG
            Self::InvalidDomain { .. } => 65,   // EX_DATAERR
            Self::Io { .. } => 74,              // EX_IOERR
        }
    }

    /// Returns the engine error if this is an `Engine` variant.
    pub fn as_engine_error(&self) -> Option<&EngineError> {
        match self {
            Self::Engine(e) => Some(e),
            _ => None,
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        let suggestion = match Self::find(error) {
            Some(roi_error) => roi_error.suggestion(),
            None => Self::find_engine(error).and_then(|e| RoiError::Engine(e.clone()).suggestion()),
        };
        if let Some(suggestion) = suggestion {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                suggestion
            ));
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(roi_error) = Self::find(error) {
            return roi_error.exit_code();
        }
        if Self::find_engine(error).is_some() {
            return 65;
        }
        1
    }

    fn find(error: &anyhow::Error) -> Option<&RoiError> {
        error.chain().find_map(|e| e.downcast_ref::<RoiError>())
    }

    fn find_engine(error: &anyhow::Error) -> Option<&EngineError> {
        error.chain().find_map(|e| e.downcast_ref::<EngineError>())
    }
}
