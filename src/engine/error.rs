//! Error types for the ROI engine

use thiserror::Error;

/// Longest forecast horizon the engine will project, in years
pub const MAX_HORIZON_YEARS: u32 = 100;

/// Most values a single sensitivity axis may hold
pub const MAX_GRID_POINTS_PER_AXIS: usize = 10_000;

/// Errors that can occur while computing ROI metrics
///
/// Expected numeric edge cases (zero fee, zero cost, payback beyond the
/// horizon) are never reported here; they surface as `None` ratios or
/// [`Payback::BeyondHorizon`](super::Payback::BeyondHorizon).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Category label is not present in the rate table
    #[error("Unknown category: '{category}'")]
    UnknownCategory {
        /// Requested category label
        category: String,
        /// Labels present in the table
        available: Vec<String>,
    },

    /// Two category entries share the same label
    #[error("Duplicate category: '{0}'")]
    DuplicateCategory(String),

    /// A quantity that must be non-negative was negative
    #[error("{field} must be non-negative (got {value})")]
    NegativeInput {
        /// Input name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// A percentage fell outside [0, 100]
    #[error("{field} must be within 0-100% (got {value})")]
    PercentOutOfRange {
        /// Input name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// A rate fraction fell outside [0, 1]
    #[error("{field} must be within 0.0-1.0 (got {value})")]
    InvalidRate {
        /// Input name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// NaN or infinite input
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Input name
        field: &'static str,
    },

    /// Forecast horizon outside `1..=MAX_HORIZON_YEARS`
    #[error("Forecast horizon must be between 1 and {MAX_HORIZON_YEARS} years (got {0})")]
    InvalidHorizon(u32),

    /// Sensitivity step not strictly positive
    #[error("Sensitivity step must be positive (got {0})")]
    InvalidStep(f64),

    /// Range and step would produce more than `MAX_GRID_POINTS_PER_AXIS` values
    #[error("{field} grid would have {points:.0} points (limit {MAX_GRID_POINTS_PER_AXIS})")]
    GridTooLarge {
        /// Axis name
        field: &'static str,
        /// Requested number of points
        points: f64,
    },

    /// Inclusive range with start after end
    #[error("Invalid {field} range: {start} > {end}")]
    InvalidRange {
        /// Range name
        field: &'static str,
        /// Range start
        start: f64,
        /// Range end
        end: f64,
    },
}

/// Reject NaN/infinite and negative values
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), EngineError> {
    if !value.is_finite() {
        return Err(EngineError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(EngineError::NegativeInput { field, value });
    }
    Ok(())
}

/// Reject horizons outside `1..=MAX_HORIZON_YEARS`
pub(crate) fn ensure_horizon(years: u32) -> Result<(), EngineError> {
    if !(1..=MAX_HORIZON_YEARS).contains(&years) {
        return Err(EngineError::InvalidHorizon(years));
    }
    Ok(())
}

/// Reject values outside the closed percentage interval [0, 100]
pub(crate) fn ensure_percent(field: &'static str, value: f64) -> Result<(), EngineError> {
    ensure_non_negative(field, value)?;
    if value > 100.0 {
        return Err(EngineError::PercentOutOfRange { field, value });
    }
    Ok(())
}

/// Reject rate fractions outside [0, 1]
pub(crate) fn ensure_rate(field: &'static str, value: f64) -> Result<(), EngineError> {
    if !value.is_finite() {
        return Err(EngineError::NonFinite { field });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(EngineError::InvalidRate { field, value });
    }
    Ok(())
}
