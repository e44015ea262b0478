//! Preset resolution logic

use anyhow::Result;
use serde::Serialize;

use super::assumptions::{
    ScenarioAssumptions, SensitivityPlan, DEFAULT_FEE_RANGE, DEFAULT_SAVINGS_RANGE,
    DEFAULT_FEE_STEP, DEFAULT_SENSITIVITY_STEP,
};
use super::file::{BrokerSettings, ConfigFile, ForecastSettings, TimeSettings};
use super::preset::DomainPreset;
use crate::engine::{CategoryRates, CategoryTable, EngineSettings};
use crate::error::RoiError;

/// Fully resolved configuration, ready for the engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    /// Preset the assumptions started from
    pub preset: DomainPreset,
    /// Scenario assumptions after file overrides
    pub assumptions: ScenarioAssumptions,
    /// Category-model settings
    #[serde(skip)]
    pub settings: EngineSettings,
    /// Sensitivity grid layout
    pub sensitivity: SensitivityPlan,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            preset: DomainPreset::default(),
            assumptions: ScenarioAssumptions::default(),
            settings: EngineSettings::default(),
            sensitivity: SensitivityPlan::default(),
        }
    }
}

/// Handles preset resolution and merging
///
/// Starts from the domain preset and the global defaults, then applies the
/// sections present in `.broker-roi.toml`.
///
/// # Examples
///
/// ```
/// use broker_roi::config::{ConfigFile, DomainPreset, PresetResolver};
///
/// let resolved = PresetResolver::resolve(&ConfigFile::default())?;
/// assert_eq!(resolved.assumptions.savings_rate_pct, 30.0);
///
/// let telecom = DomainPreset::get("Telecom").unwrap();
/// let config = PresetResolver::from_preset(&telecom);
/// assert_eq!(config.domain, "Telecom");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct PresetResolver;

impl PresetResolver {
    /// Merge preset values with config overrides
    pub fn resolve(config: &ConfigFile) -> Result<ResolvedConfig> {
        let preset =
            DomainPreset::get(&config.domain).ok_or_else(|| RoiError::InvalidDomain {
                name: config.domain.clone(),
                available: DomainPreset::names(),
            })?;

        let mut assumptions = ScenarioAssumptions::from_preset(&preset);
        assumptions.category = config.category.clone();

        if let Some(ref broker) = config.broker {
            if let Some(spend) = broker.annual_spend {
                assumptions.annual_spend = spend;
            }
            if let Some(savings) = broker.savings_pct {
                assumptions.savings_rate_pct = savings;
            }
            if let Some(fee) = broker.fee_pct {
                assumptions.fee_rate_pct = fee;
            }
        }

        if let Some(ref time) = config.time {
            if let Some(hours) = time.baseline_hours {
                assumptions.baseline_hours = hours;
            }
            if let Some(pct) = time.time_saved_pct {
                assumptions.time_saved_pct = pct;
            }
            if let Some(cost) = time.cost_per_hour {
                assumptions.cost_per_hour = cost;
            }
            if let Some(value) = time.opportunity_value_per_hour {
                assumptions.opportunity_value_per_hour = value;
            }
        }

        if let Some(ref forecast) = config.forecast {
            if let Some(years) = forecast.years {
                assumptions.forecast_years = years;
            }
            if let Some(rate) = forecast.discount_rate {
                assumptions.discount_rate = rate;
            }
        }

        let mut settings = EngineSettings::default();
        if let Some(ref productivity) = config.productivity {
            if let Some(gain) = productivity.gain_pct {
                settings.productivity.gain_pct = gain;
            }
            if let Some(salary) = productivity.salary_per_employee {
                settings.productivity.salary_per_employee = salary;
            }
            if let Some(employees) = productivity.employees {
                settings.productivity.num_employees = employees;
            }
        }
        if let Some(ref outsourcing) = config.outsourcing {
            if let Some(fee) = outsourcing.broker_fee_pct {
                settings.outsourcing.broker_fee_pct = fee;
            }
            if let Some(multiplier) = outsourcing.opportunity_cost_multiplier {
                settings.outsourcing.opportunity_cost_multiplier = multiplier;
            }
        }
        if !config.categories.is_empty() {
            settings.categories = CategoryTable::new(
                config
                    .categories
                    .iter()
                    .map(|c| CategoryRates::new(c.name.trim(), c.license_rate, c.implementation_rate))
                    .collect(),
            )?;
        }

        let sensitivity = match config.sensitivity {
            Some(ref s) if s.around == Some(true) => SensitivityPlan::Around,
            Some(ref s) => SensitivityPlan::Range {
                savings: s
                    .savings_range
                    .map(|[a, b]| (a, b))
                    .unwrap_or(DEFAULT_SAVINGS_RANGE),
                fee: s.fee_range.map(|[a, b]| (a, b)).unwrap_or(DEFAULT_FEE_RANGE),
                step: s.step.unwrap_or(DEFAULT_SENSITIVITY_STEP),
                fee_step: s.fee_step.unwrap_or(DEFAULT_FEE_STEP),
            },
            None => SensitivityPlan::default(),
        };

        log::debug!(
            "Resolved '{}' preset: savings {}%, fee {}%, {} hours",
            preset.name,
            assumptions.savings_rate_pct,
            assumptions.fee_rate_pct,
            assumptions.baseline_hours
        );

        Ok(ResolvedConfig {
            preset,
            assumptions,
            settings,
            sensitivity,
        })
    }

    /// Create a config from a preset
    ///
    /// Writes the preset's values explicitly so the file documents what the
    /// calculation will use.
    pub fn from_preset(preset: &DomainPreset) -> ConfigFile {
        let assumptions = ScenarioAssumptions::from_preset(preset);
        ConfigFile {
            domain: preset.name.clone(),
            broker: Some(BrokerSettings {
                annual_spend: Some(assumptions.annual_spend),
                savings_pct: Some(assumptions.savings_rate_pct),
                fee_pct: Some(assumptions.fee_rate_pct),
            }),
            time: Some(TimeSettings {
                baseline_hours: Some(assumptions.baseline_hours),
                time_saved_pct: Some(assumptions.time_saved_pct),
                cost_per_hour: Some(assumptions.cost_per_hour),
                opportunity_value_per_hour: Some(assumptions.opportunity_value_per_hour),
            }),
            forecast: Some(ForecastSettings {
                years: Some(assumptions.forecast_years),
                discount_rate: Some(assumptions.discount_rate),
            }),
            ..ConfigFile::default()
        }
    }
}
