//! Resolved calculation inputs

use serde::{Deserialize, Serialize};

use super::preset::DomainPreset;
use crate::engine::{EngineError, ScenarioInputs, SensitivityGrid};

/// Default annual IT spend
pub const DEFAULT_ANNUAL_SPEND: f64 = 1_000_000.0;
/// Default share of procurement hours the broker saves (%)
pub const DEFAULT_TIME_SAVED_PCT: f64 = 50.0;
/// Default staff cost per hour
pub const DEFAULT_COST_PER_HOUR: f64 = 150.0;
/// Default opportunity value per freed hour
pub const DEFAULT_OPP_VALUE_PER_HOUR: f64 = 250.0;
/// Default forecast horizon in years
pub const DEFAULT_FORECAST_YEARS: u32 = 3;
/// Default annual discount rate
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.08;

/// Every user-facing assumption for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAssumptions {
    /// Annual IT spend
    pub annual_spend: f64,
    /// Expected broker savings (%)
    pub savings_rate_pct: f64,
    /// Broker fee (%)
    pub fee_rate_pct: f64,
    /// Share of procurement hours saved (%)
    pub time_saved_pct: f64,
    /// Annual procurement hours
    pub baseline_hours: f64,
    /// Staff cost per hour
    pub cost_per_hour: f64,
    /// Opportunity value per freed hour
    pub opportunity_value_per_hour: f64,
    /// Forecast horizon in years
    pub forecast_years: u32,
    /// Annual discount rate as a fraction
    pub discount_rate: f64,
    /// Spend category for the category model
    pub category: Option<String>,
}

impl ScenarioAssumptions {
    /// Global defaults with a preset's savings, fee and hours
    pub fn from_preset(preset: &DomainPreset) -> Self {
        Self {
            annual_spend: DEFAULT_ANNUAL_SPEND,
            savings_rate_pct: preset.savings_pct,
            fee_rate_pct: preset.fee_pct,
            time_saved_pct: DEFAULT_TIME_SAVED_PCT,
            baseline_hours: preset.baseline_hours,
            cost_per_hour: DEFAULT_COST_PER_HOUR,
            opportunity_value_per_hour: DEFAULT_OPP_VALUE_PER_HOUR,
            forecast_years: DEFAULT_FORECAST_YEARS,
            discount_rate: DEFAULT_DISCOUNT_RATE,
            category: None,
        }
    }

    /// Inputs for the percentage model
    pub fn scenario_inputs(&self) -> ScenarioInputs {
        ScenarioInputs {
            spend: self.annual_spend,
            savings_pct: self.savings_rate_pct,
            fee_pct: self.fee_rate_pct,
            hours: self.baseline_hours,
            time_saved_pct: self.time_saved_pct,
            cost_per_hour: self.cost_per_hour,
            opp_value_per_hour: self.opportunity_value_per_hour,
        }
    }
}

impl Default for ScenarioAssumptions {
    fn default() -> Self {
        Self::from_preset(&DomainPreset::default())
    }
}

/// Default sensitivity savings range (%)
pub const DEFAULT_SAVINGS_RANGE: (f64, f64) = (10.0, 50.0);
/// Default sensitivity fee range (%)
pub const DEFAULT_FEE_RANGE: (f64, f64) = (8.0, 12.0);
/// Default sensitivity savings step (percentage points)
pub const DEFAULT_SENSITIVITY_STEP: f64 = 5.0;
/// Default sensitivity fee step (percentage points)
pub const DEFAULT_FEE_STEP: f64 = 2.0;

/// How the sensitivity grid is laid out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SensitivityPlan {
    /// Explicit inclusive ranges
    Range {
        /// Savings range (%)
        savings: (f64, f64),
        /// Fee range (%)
        fee: (f64, f64),
        /// Savings step
        step: f64,
        /// Fee step
        fee_step: f64,
    },
    /// Neighbourhood of the current savings/fee pair
    Around,
}

impl SensitivityPlan {
    /// Build the grid for a set of assumptions
    pub fn grid(&self, assumptions: &ScenarioAssumptions) -> Result<SensitivityGrid, EngineError> {
        match self {
            Self::Range {
                savings,
                fee,
                step,
                fee_step,
            } => SensitivityGrid::with_steps(*savings, *fee, *step, *fee_step),
            Self::Around => {
                SensitivityGrid::around(assumptions.savings_rate_pct, assumptions.fee_rate_pct)
            }
        }
    }
}

impl Default for SensitivityPlan {
    fn default() -> Self {
        Self::Range {
            savings: DEFAULT_SAVINGS_RANGE,
            fee: DEFAULT_FEE_RANGE,
            step: DEFAULT_SENSITIVITY_STEP,
            fee_step: DEFAULT_FEE_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::preset::DomainType;

    #[test]
    fn test_defaults_reproduce_reference_scenario() {
        let a = ScenarioAssumptions::default();
        let inputs = a.scenario_inputs();
        assert_eq!(inputs.spend, 1_000_000.0);
        assert_eq!(inputs.savings_pct, 30.0);
        assert_eq!(inputs.fee_pct, 10.0);
        assert_eq!(inputs.hours, 500.0);
        assert_eq!(inputs.time_saved_pct, 50.0);
        assert_eq!(a.forecast_years, 3);
    }

    #[test]
    fn test_preset_values_flow_into_assumptions() {
        let a = ScenarioAssumptions::from_preset(&DomainPreset::new(DomainType::Security));
        assert_eq!(a.savings_rate_pct, 20.0);
        assert_eq!(a.baseline_hours, 350.0);
        assert_eq!(a.cost_per_hour, DEFAULT_COST_PER_HOUR);
    }

    #[test]
    fn test_default_plan_grid() {
        let grid = SensitivityPlan::default()
            .grid(&ScenarioAssumptions::default())
            .unwrap();
        assert_eq!(grid.savings.len(), 9);
        assert_eq!(grid.fee.as_slice(), &[8.0, 10.0, 12.0]);
    }

    #[test]
    fn test_around_plan_follows_assumptions() {
        let assumptions = ScenarioAssumptions {
            savings_rate_pct: 5.0,
            fee_rate_pct: 1.0,
            ..ScenarioAssumptions::default()
        };
        let grid = SensitivityPlan::Around.grid(&assumptions).unwrap();
        assert_eq!(grid.savings.as_slice(), &[0.0, 5.0, 10.0, 15.0]);
        assert_eq!(grid.fee.as_slice(), &[0.0, 1.0, 3.0]);
    }
}
