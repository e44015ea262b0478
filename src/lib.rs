#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! broker-roi library
//!
//! Compares the cost and benefit of running IT procurement in-house with
//! using an IT broker. The calculations live in [`engine`] and can be used
//! programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! The reference scenario: 1,000,000 spend, 30% savings, 10% fee, 500
//! procurement hours of which half are saved.
//!
//! ```
//! use broker_roi::engine::{compute_scenario_metrics, ScenarioInputs};
//!
//! let metrics = compute_scenario_metrics(&ScenarioInputs {
//!     spend: 1_000_000.0,
//!     savings_pct: 30.0,
//!     fee_pct: 10.0,
//!     hours: 500.0,
//!     time_saved_pct: 50.0,
//!     cost_per_hour: 150.0,
//!     opp_value_per_hour: 250.0,
//! })?;
//!
//! assert_eq!(metrics.net_savings, 200_000.0);
//! assert_eq!(metrics.total_benefit, 300_000.0);
//! assert_eq!(metrics.financial_roi, Some(2.0));
//! assert_eq!(metrics.total_roi, Some(3.0));
//! # Ok::<(), broker_roi::engine::EngineError>(())
//! ```
//!
//! # Advanced Example: Configuration Resolution
//!
//! Presets, config file overrides and engine settings:
//!
//! ```
//! use broker_roi::config::{ConfigFile, PresetResolver};
//! use broker_roi::config::file::BrokerSettings;
//! use broker_roi::engine::RoiEngine;
//!
//! let config = ConfigFile {
//!     domain: "Telecom".to_string(),
//!     broker: Some(BrokerSettings {
//!         annual_spend: Some(250_000.0),
//!         savings_pct: None,
//!         fee_pct: None,
//!     }),
//!     ..ConfigFile::default()
//! };
//! let resolved = PresetResolver::resolve(&config)?;
//! assert_eq!(resolved.assumptions.savings_rate_pct, 35.0);
//!
//! let engine = RoiEngine::new(resolved.settings.clone())?;
//! let cmp = engine.compare(&resolved.assumptions.scenario_inputs(), 3)?;
//! assert_eq!(cmp.projection.len(), 3);
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file and preset management
pub mod config;
/// ROI calculation engine
pub mod engine;
/// Application error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Console, CSV and JSON presentation
pub mod report;
