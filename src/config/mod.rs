//! Configuration and preset management for broker-roi
//!
//! This module provides:
//! - Technology-domain presets with benchmark savings, fees and hours
//! - .broker-roi.toml config file support
//! - Validation and resolution into engine inputs

pub mod assumptions;
pub mod file;
pub mod loader;
pub mod preset;
pub mod resolver;
pub mod validator;

pub use assumptions::{ScenarioAssumptions, SensitivityPlan};
pub use file::{CategoryEntry, ConfigFile, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
pub use preset::{DomainPreset, DomainType};
pub use resolver::{PresetResolver, ResolvedConfig};
pub use validator::{
    ConfigValidator, ValidationIssue, ValidationResult, ValidationSeverity, ValidatorRegistry,
};
