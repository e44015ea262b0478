//! Configuration validation system
//!
//! Pluggable validators run over a parsed [`ConfigFile`] before it is
//! resolved. Errors stop the load; warnings are logged and reported.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use super::assumptions::{
    DEFAULT_FEE_RANGE, DEFAULT_FEE_STEP, DEFAULT_SAVINGS_RANGE, DEFAULT_SENSITIVITY_STEP,
};
use super::file::{ConfigFile, SensitivitySettings};
use super::preset::DomainPreset;
use crate::engine::{MAX_GRID_POINTS_PER_AXIS, MAX_HORIZON_YEARS};

/// Validation severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    /// Informational message
    Info,
    /// Warning - should be addressed but not blocking
    Warning,
    /// Error - must be fixed
    Error,
}

impl ValidationSeverity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationSeverity::Info => "INFO",
            ValidationSeverity::Warning => "WARNING",
            ValidationSeverity::Error => "ERROR",
        }
    }
}

/// A validation issue found in configuration
///
/// # Examples
///
/// ```
/// use broker_roi::config::validator::{ValidationIssue, ValidationSeverity};
///
/// let issue = ValidationIssue::error("broker.fee-pct", "Must be between 0 and 100");
/// assert_eq!(issue.severity, ValidationSeverity::Error);
///
/// let warning = ValidationIssue::warning("broker", "Fee exceeds savings")
///     .with_suggestion("Negotiate the fee below the expected savings");
/// assert!(warning.suggestion.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity level
    pub severity: ValidationSeverity,
    /// Field or section that has the issue
    pub field: String,
    /// Description of the issue
    pub message: String,
    /// Suggested fix (if available)
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Create a new validation issue
    pub fn new(
        severity: ValidationSeverity,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create an error issue
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationSeverity::Error, field, message)
    }

    /// Create a warning issue
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationSeverity::Warning, field, message)
    }

    /// Create an info issue
    pub fn info(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationSeverity::Info, field, message)
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.severity.as_str(),
            self.field,
            self.message
        )
    }
}

/// Result of configuration validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors)
    pub valid: bool,
    /// Issues found during validation
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
        }
    }

    /// Add an issue
    pub fn add_issue(&mut self, issue: ValidationIssue) {
        if issue.severity == ValidationSeverity::Error {
            self.valid = false;
        }
        self.issues.push(issue);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.valid
    }

    /// Get only errors
    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Error)
            .collect()
    }

    /// Get only warnings
    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Warning)
            .collect()
    }
}

/// Trait for pluggable configuration validators
pub trait ConfigValidator: Send + Sync {
    /// Validator name
    fn name(&self) -> &str;

    /// Validate a parsed configuration file
    fn validate(&self, config: &ConfigFile) -> ValidationResult;

    /// Suggested replacement values keyed by field
    fn auto_fix(&self, config: &ConfigFile) -> HashMap<String, String> {
        let _ = config;
        HashMap::new()
    }

    /// Get validator priority (lower runs first)
    fn priority(&self) -> u32 {
        100
    }
}

/// Registry for managing configuration validators
#[derive(Default)]
pub struct ValidatorRegistry {
    validators: Mutex<Vec<Arc<dyn ConfigValidator>>>,
}

impl ValidatorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in validator
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register(Arc::new(DomainValidator));
        registry.register(Arc::new(RangeValidator));
        registry.register(Arc::new(CategoryTableValidator));
        registry.register(Arc::new(SensitivityValidator));
        registry.register(Arc::new(FeeVsSavingsValidator));
        registry
    }

    /// Register a validator
    pub fn register(&self, validator: Arc<dyn ConfigValidator>) {
        let mut validators = self.validators.lock();
        validators.push(validator);
        validators.sort_by_key(|v| v.priority());
    }

    /// Run all validators
    pub fn validate_all(&self, config: &ConfigFile) -> ValidationResult {
        let validators = self.validators.lock();

        let mut result = ValidationResult::success();
        for validator in validators.iter() {
            log::trace!("Running config validator '{}'", validator.name());
            for issue in validator.validate(config).issues {
                result.add_issue(issue);
            }
        }
        result
    }

    /// Run all validators and collect auto-fix suggestions
    pub fn auto_fix_all(&self, config: &ConfigFile) -> HashMap<String, String> {
        let validators = self.validators.lock();

        let mut fixes = HashMap::new();
        for validator in validators.iter() {
            fixes.extend(validator.auto_fix(config));
        }
        fixes
    }
}

/// Domain name must match a preset
pub struct DomainValidator;

impl ConfigValidator for DomainValidator {
    fn name(&self) -> &str {
        "domain"
    }

    fn validate(&self, config: &ConfigFile) -> ValidationResult {
        let mut result = ValidationResult::success();
        if DomainPreset::get(&config.domain).is_none() {
            result.add_issue(
                ValidationIssue::error("domain", format!("Unknown domain '{}'", config.domain))
                    .with_suggestion(format!(
                        "Use one of: {}",
                        DomainPreset::names().join(", ")
                    )),
            );
        }
        result
    }

    fn priority(&self) -> u32 {
        10
    }
}

/// Percentages within 0-100, amounts non-negative, rates finite
pub struct RangeValidator;

impl RangeValidator {
    fn percent_fields(config: &ConfigFile) -> Vec<(&'static str, f64)> {
        let mut fields = Vec::new();
        if let Some(b) = &config.broker {
            fields.extend(b.savings_pct.map(|v| ("broker.savings-pct", v)));
            fields.extend(b.fee_pct.map(|v| ("broker.fee-pct", v)));
        }
        if let Some(t) = &config.time {
            fields.extend(t.time_saved_pct.map(|v| ("time.time-saved-pct", v)));
        }
        if let Some(p) = &config.productivity {
            fields.extend(p.gain_pct.map(|v| ("productivity.gain-pct", v)));
        }
        if let Some(o) = &config.outsourcing {
            fields.extend(o.broker_fee_pct.map(|v| ("outsourcing.broker-fee-pct", v)));
        }
        fields
    }

    fn amount_fields(config: &ConfigFile) -> Vec<(&'static str, f64)> {
        let mut fields = Vec::new();
        if let Some(b) = &config.broker {
            fields.extend(b.annual_spend.map(|v| ("broker.annual-spend", v)));
        }
        if let Some(t) = &config.time {
            fields.extend(t.baseline_hours.map(|v| ("time.baseline-hours", v)));
            fields.extend(t.cost_per_hour.map(|v| ("time.cost-per-hour", v)));
            fields.extend(
                t.opportunity_value_per_hour
                    .map(|v| ("time.opportunity-value-per-hour", v)),
            );
        }
        if let Some(p) = &config.productivity {
            fields.extend(
                p.salary_per_employee
                    .map(|v| ("productivity.salary-per-employee", v)),
            );
        }
        if let Some(o) = &config.outsourcing {
            fields.extend(
                o.opportunity_cost_multiplier
                    .map(|v| ("outsourcing.opportunity-cost-multiplier", v)),
            );
        }
        fields
    }
}

impl ConfigValidator for RangeValidator {
    fn name(&self) -> &str {
        "ranges"
    }

    fn validate(&self, config: &ConfigFile) -> ValidationResult {
        let mut result = ValidationResult::success();

        for (field, value) in Self::percent_fields(config) {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                result.add_issue(
                    ValidationIssue::error(field, format!("{} is not a percentage", value))
                        .with_suggestion("Use a value between 0 and 100"),
                );
            }
        }
        for (field, value) in Self::amount_fields(config) {
            if !value.is_finite() || value < 0.0 {
                result.add_issue(
                    ValidationIssue::error(field, format!("{} must be non-negative", value))
                        .with_suggestion("Use 0 or a positive amount"),
                );
            }
        }

        if let Some(forecast) = &config.forecast {
            match forecast.years {
                Some(0) => result.add_issue(
                    ValidationIssue::error("forecast.years", "Horizon must be at least one year")
                        .with_suggestion("Set years = 1 or more"),
                ),
                Some(years) if years > MAX_HORIZON_YEARS => result.add_issue(
                    ValidationIssue::error(
                        "forecast.years",
                        format!("Horizon of {} years exceeds {}", years, MAX_HORIZON_YEARS),
                    )
                    .with_suggestion(format!("Set years = {} or fewer", MAX_HORIZON_YEARS)),
                ),
                _ => {}
            }
            if let Some(rate) = forecast.discount_rate {
                if !rate.is_finite() || rate <= -1.0 {
                    result.add_issue(ValidationIssue::error(
                        "forecast.discount-rate",
                        format!("{} is not a usable discount rate", rate),
                    ));
                } else if rate > 1.0 {
                    result.add_issue(
                        ValidationIssue::warning(
                            "forecast.discount-rate",
                            format!("{} looks like a percentage", rate),
                        )
                        .with_suggestion(format!("Did you mean {}?", rate / 100.0)),
                    );
                }
            }
        }

        result
    }

    fn auto_fix(&self, config: &ConfigFile) -> HashMap<String, String> {
        let mut fixes = HashMap::new();
        for (field, value) in Self::percent_fields(config) {
            if value.is_finite() && !(0.0..=100.0).contains(&value) {
                fixes.insert(field.to_string(), value.clamp(0.0, 100.0).to_string());
            }
        }
        for (field, value) in Self::amount_fields(config) {
            if value.is_finite() && value < 0.0 {
                fixes.insert(field.to_string(), "0".to_string());
            }
        }
        if let Some(years) = config.forecast.as_ref().and_then(|f| f.years) {
            if years == 0 {
                fixes.insert("forecast.years".to_string(), "1".to_string());
            } else if years > MAX_HORIZON_YEARS {
                fixes.insert("forecast.years".to_string(), MAX_HORIZON_YEARS.to_string());
            }
        }
        if let Some(rate) = config.forecast.as_ref().and_then(|f| f.discount_rate) {
            if rate.is_finite() && rate > 1.0 {
                fixes.insert("forecast.discount-rate".to_string(), (rate / 100.0).to_string());
            }
        }
        fixes
    }

    fn priority(&self) -> u32 {
        20
    }
}

/// Category table entries are usable and uniquely named
pub struct CategoryTableValidator;

impl ConfigValidator for CategoryTableValidator {
    fn name(&self) -> &str {
        "categories"
    }

    fn validate(&self, config: &ConfigFile) -> ValidationResult {
        let mut result = ValidationResult::success();
        let mut seen: Vec<String> = Vec::new();

        for entry in &config.categories {
            let key = entry.name.trim().to_lowercase();
            if key.is_empty() {
                result.add_issue(ValidationIssue::error(
                    "categories.name",
                    "Category name cannot be empty",
                ));
                continue;
            }
            if seen.contains(&key) {
                result.add_issue(ValidationIssue::error(
                    "categories.name",
                    format!("Category '{}' is defined more than once", entry.name),
                ));
            }
            seen.push(key);

            for (field, rate) in [
                ("categories.license-rate", entry.license_rate),
                ("categories.implementation-rate", entry.implementation_rate),
            ] {
                if !rate.is_finite() || rate < 0.0 {
                    result.add_issue(ValidationIssue::error(
                        field,
                        format!("'{}' rate {} must be non-negative", entry.name, rate),
                    ));
                } else if rate > 1.0 {
                    result.add_issue(
                        ValidationIssue::warning(
                            field,
                            format!("'{}' rate {} exceeds 100% of spend", entry.name, rate),
                        )
                        .with_suggestion("Rates are fractions: 0.4 means 40%"),
                    );
                }
            }
        }

        if let Some(category) = &config.category {
            let wanted = category.trim().to_lowercase();
            if !config.categories.is_empty() && !seen.contains(&wanted) {
                result.add_issue(ValidationIssue::error(
                    "category",
                    format!("Category '{}' is not in the [[categories]] table", category),
                ));
            }
        }

        result
    }

    fn priority(&self) -> u32 {
        30
    }
}

/// Sensitivity ranges are ordered, steps positive and grids bounded
pub struct SensitivityValidator;

impl SensitivityValidator {
    /// `(step field, range, step)` per axis with defaults filled in
    fn axes(sensitivity: &SensitivitySettings) -> [(&'static str, (f64, f64), f64); 2] {
        [
            (
                "sensitivity.step",
                sensitivity
                    .savings_range
                    .map(|[a, b]| (a, b))
                    .unwrap_or(DEFAULT_SAVINGS_RANGE),
                sensitivity.step.unwrap_or(DEFAULT_SENSITIVITY_STEP),
            ),
            (
                "sensitivity.fee-step",
                sensitivity.fee_range.map(|[a, b]| (a, b)).unwrap_or(DEFAULT_FEE_RANGE),
                sensitivity.fee_step.unwrap_or(DEFAULT_FEE_STEP),
            ),
        ]
    }

    /// Smallest step keeping an ordered range within the axis limit, if the
    /// given step exceeds it
    fn oversized(range: (f64, f64), step: f64) -> Option<(f64, f64)> {
        let (start, end) = range;
        if !(step.is_finite() && step > 0.0 && start.is_finite() && end.is_finite() && start <= end) {
            return None;
        }
        let points = ((end - start) / step + 1e-9).floor() + 1.0;
        if points > MAX_GRID_POINTS_PER_AXIS as f64 {
            Some((points, (end - start) / (MAX_GRID_POINTS_PER_AXIS - 1) as f64))
        } else {
            None
        }
    }
}

impl ConfigValidator for SensitivityValidator {
    fn name(&self) -> &str {
        "sensitivity"
    }

    fn validate(&self, config: &ConfigFile) -> ValidationResult {
        let mut result = ValidationResult::success();
        let Some(sensitivity) = &config.sensitivity else {
            return result;
        };

        for (field, range) in [
            ("sensitivity.savings-range", sensitivity.savings_range),
            ("sensitivity.fee-range", sensitivity.fee_range),
        ] {
            if let Some([start, end]) = range {
                if !(0.0..=100.0).contains(&start) || !(0.0..=100.0).contains(&end) {
                    result.add_issue(ValidationIssue::error(
                        field,
                        "Range bounds must be percentages between 0 and 100",
                    ));
                } else if start > end {
                    result.add_issue(
                        ValidationIssue::error(field, format!("Start {} is after end {}", start, end))
                            .with_suggestion(format!("Use [{}, {}]", end, start)),
                    );
                }
            }
        }

        for (field, step) in [
            ("sensitivity.step", sensitivity.step),
            ("sensitivity.fee-step", sensitivity.fee_step),
        ] {
            if let Some(step) = step {
                if !step.is_finite() || step <= 0.0 {
                    result.add_issue(ValidationIssue::error(
                        field,
                        format!("Step {} must be positive", step),
                    ));
                }
            }
        }

        if sensitivity.around != Some(true) {
            for (field, range, step) in Self::axes(sensitivity) {
                if let Some((points, min_step)) = Self::oversized(range, step) {
                    result.add_issue(
                        ValidationIssue::error(
                            field,
                            format!(
                                "Step {} gives {:.0} points (limit {})",
                                step, points, MAX_GRID_POINTS_PER_AXIS
                            ),
                        )
                        .with_suggestion(format!("Use a step of at least {}", min_step)),
                    );
                }
            }
        }

        let has_ranges = sensitivity.savings_range.is_some() || sensitivity.fee_range.is_some();
        if sensitivity.around == Some(true) && has_ranges {
            result.add_issue(ValidationIssue::info(
                "sensitivity.around",
                "Explicit ranges are ignored when around = true",
            ));
        }

        result
    }

    fn auto_fix(&self, config: &ConfigFile) -> HashMap<String, String> {
        let mut fixes = HashMap::new();
        let Some(sensitivity) = &config.sensitivity else {
            return fixes;
        };
        if sensitivity.around == Some(true) {
            return fixes;
        }
        for (field, range, step) in Self::axes(sensitivity) {
            if let Some((_, min_step)) = Self::oversized(range, step) {
                fixes.insert(field.to_string(), min_step.to_string());
            }
        }
        fixes
    }

    fn priority(&self) -> u32 {
        40
    }
}

/// Warns when the configured fee is at or above the expected savings
pub struct FeeVsSavingsValidator;

impl ConfigValidator for FeeVsSavingsValidator {
    fn name(&self) -> &str {
        "fee-vs-savings"
    }

    fn validate(&self, config: &ConfigFile) -> ValidationResult {
        let mut result = ValidationResult::success();
        let preset = DomainPreset::get(&config.domain).unwrap_or_default();
        let broker = config.broker.clone().unwrap_or_default();

        let savings = broker.savings_pct.unwrap_or(preset.savings_pct);
        let fee = broker.fee_pct.unwrap_or(preset.fee_pct);
        if fee >= savings && fee > 0.0 {
            result.add_issue(
                ValidationIssue::warning(
                    "broker",
                    format!(
                        "Fee {}% is not below savings {}%; financial ROI will be zero or negative",
                        fee, savings
                    ),
                )
                .with_suggestion("Check the fee and savings percentages"),
            );
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file::{
        BrokerSettings, CategoryEntry, ForecastSettings, SensitivitySettings,
    };

    fn config_with_broker(savings: Option<f64>, fee: Option<f64>) -> ConfigFile {
        ConfigFile {
            broker: Some(BrokerSettings {
                annual_spend: None,
                savings_pct: savings,
                fee_pct: fee,
            }),
            ..ConfigFile::default()
        }
    }

    #[test]
    fn test_validation_result_detects_errors() {
        let mut result = ValidationResult::success();
        assert!(result.valid);

        result.add_issue(ValidationIssue::warning("field", "warning"));
        assert!(result.valid);

        result.add_issue(ValidationIssue::error("field", "error"));
        assert!(!result.valid);
        assert!(result.has_errors());
    }

    #[test]
    fn test_default_config_is_valid_without_warnings() {
        let result = ValidatorRegistry::with_defaults().validate_all(&ConfigFile::default());
        assert!(result.valid);
        assert!(result.warnings().is_empty(), "{:?}", result.issues);
    }

    #[test]
    fn test_registry_orders_by_priority() {
        let registry = ValidatorRegistry::with_defaults();

        let config = ConfigFile {
            domain: "Mainframes".to_string(),
            ..config_with_broker(Some(150.0), None)
        };
        let result = registry.validate_all(&config);
        assert_eq!(result.errors()[0].field, "domain");
        assert_eq!(result.errors()[1].field, "broker.savings-pct");
    }

    #[test]
    fn test_out_of_range_percent_is_error_with_clamped_fix() {
        let config = config_with_broker(Some(120.0), Some(-5.0));
        let result = RangeValidator.validate(&config);
        assert_eq!(result.errors().len(), 2);

        let fixes = RangeValidator.auto_fix(&config);
        assert_eq!(fixes.get("broker.savings-pct").map(String::as_str), Some("100"));
        assert_eq!(fixes.get("broker.fee-pct").map(String::as_str), Some("0"));
    }

    #[test]
    fn test_zero_horizon_is_error() {
        let config = ConfigFile {
            forecast: Some(ForecastSettings {
                years: Some(0),
                discount_rate: None,
            }),
            ..ConfigFile::default()
        };
        assert!(!RangeValidator.validate(&config).valid);
    }

    #[test]
    fn test_horizon_beyond_limit_is_error_with_capped_fix() {
        let config = ConfigFile {
            forecast: Some(ForecastSettings {
                years: Some(4_000_000_000),
                discount_rate: None,
            }),
            ..ConfigFile::default()
        };
        let result = RangeValidator.validate(&config);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].field, "forecast.years");
        assert_eq!(
            RangeValidator.auto_fix(&config).get("forecast.years").map(String::as_str),
            Some("100")
        );
    }

    #[test]
    fn test_percentage_discount_rate_is_warning() {
        let config = ConfigFile {
            forecast: Some(ForecastSettings {
                years: None,
                discount_rate: Some(8.0),
            }),
            ..ConfigFile::default()
        };
        let result = RangeValidator.validate(&config);
        assert!(result.valid);
        assert_eq!(result.warnings().len(), 1);
        assert_eq!(
            RangeValidator
                .auto_fix(&config)
                .get("forecast.discount-rate")
                .map(String::as_str),
            Some("0.08")
        );
    }

    #[test]
    fn test_duplicate_categories_are_rejected() {
        let entry = |name: &str| CategoryEntry {
            name: name.to_string(),
            license_rate: 0.1,
            implementation_rate: 0.1,
        };
        let config = ConfigFile {
            categories: vec![entry("Telecom"), entry(" telecom ")],
            ..ConfigFile::default()
        };
        let result = CategoryTableValidator.validate(&config);
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].message.contains("more than once"));
    }

    #[test]
    fn test_default_category_must_exist_in_custom_table() {
        let config = ConfigFile {
            category: Some("Hardware".to_string()),
            categories: vec![CategoryEntry {
                name: "Telecom".to_string(),
                license_rate: 0.3,
                implementation_rate: 0.1,
            }],
            ..ConfigFile::default()
        };
        assert!(!CategoryTableValidator.validate(&config).valid);
    }

    #[test]
    fn test_reversed_sensitivity_range_is_error() {
        let config = ConfigFile {
            sensitivity: Some(SensitivitySettings {
                savings_range: Some([50.0, 10.0]),
                step: Some(0.0),
                ..SensitivitySettings::default()
            }),
            ..ConfigFile::default()
        };
        let result = SensitivityValidator.validate(&config);
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn test_oversized_sensitivity_grid_is_error_with_step_fix() {
        let config = ConfigFile {
            sensitivity: Some(SensitivitySettings {
                savings_range: Some([0.0, 100.0]),
                step: Some(1e-7),
                ..SensitivitySettings::default()
            }),
            ..ConfigFile::default()
        };
        let result = SensitivityValidator.validate(&config);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].field, "sensitivity.step");

        let fix: f64 = SensitivityValidator
            .auto_fix(&config)
            .get("sensitivity.step")
            .and_then(|v| v.parse().ok())
            .unwrap();
        assert!(crate::engine::GridAxis::range("savings_pct", 0.0, 100.0, fix).is_ok());

        // Around mode ignores the configured step
        let around = ConfigFile {
            sensitivity: Some(SensitivitySettings {
                around: Some(true),
                step: Some(1e-7),
                ..SensitivitySettings::default()
            }),
            ..ConfigFile::default()
        };
        assert!(SensitivityValidator.validate(&around).valid);
    }

    #[test]
    fn test_fee_above_savings_is_warning_only() {
        let result = FeeVsSavingsValidator.validate(&config_with_broker(Some(8.0), Some(12.0)));
        assert!(result.valid);
        assert_eq!(result.warnings().len(), 1);

        // Preset savings are used when only the fee is set
        let result = FeeVsSavingsValidator.validate(&config_with_broker(None, Some(12.0)));
        assert!(result.warnings().is_empty());
    }
}
