//! Percentage-based scenario metrics
//!
//! Savings, fees, hours and the two ROI multiples for a single scenario, plus
//! the in-house vs broker comparison built from two evaluations.

use serde::{Deserialize, Serialize};

use super::error::{ensure_horizon, ensure_non_negative, ensure_percent, EngineError};

/// Inputs to [`compute_scenario_metrics`]
///
/// Percentages are expressed in [0, 100]; currency and hours must be
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    /// Annual IT spend
    pub spend: f64,
    /// Expected savings as a percentage of spend
    pub savings_pct: f64,
    /// Broker fee as a percentage of spend
    pub fee_pct: f64,
    /// Annual procurement hours
    pub hours: f64,
    /// Share of procurement hours saved, as a percentage
    pub time_saved_pct: f64,
    /// Staff cost per hour
    pub cost_per_hour: f64,
    /// Opportunity value per freed hour
    pub opp_value_per_hour: f64,
}

impl ScenarioInputs {
    /// Check every input against its contract
    pub fn validate(&self) -> Result<(), EngineError> {
        ensure_non_negative("spend", self.spend)?;
        ensure_percent("savings_pct", self.savings_pct)?;
        ensure_percent("fee_pct", self.fee_pct)?;
        ensure_non_negative("hours", self.hours)?;
        ensure_percent("time_saved_pct", self.time_saved_pct)?;
        ensure_non_negative("cost_per_hour", self.cost_per_hour)?;
        ensure_non_negative("opp_value_per_hour", self.opp_value_per_hour)
    }

    /// The in-house baseline: no savings, no fee, no hours saved
    pub fn in_house(&self) -> Self {
        Self {
            savings_pct: 0.0,
            fee_pct: 0.0,
            time_saved_pct: 0.0,
            ..*self
        }
    }

    /// Same inputs with a different savings/fee pair
    pub fn with_rates(&self, savings_pct: f64, fee_pct: f64) -> Self {
        Self {
            savings_pct,
            fee_pct,
            ..*self
        }
    }
}

/// Derived metrics for one scenario
///
/// `financial_roi` and `total_roi` are `None` when the fee cost is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// Savings before fees
    pub gross_savings: f64,
    /// Broker fee cost
    pub fee_cost: f64,
    /// Savings after fees
    pub net_savings: f64,
    /// Procurement hours saved
    pub hours_saved: f64,
    /// Staff cost of the saved hours
    pub time_value: f64,
    /// Opportunity value of the saved hours
    pub opportunity_value: f64,
    /// Net savings plus time and opportunity value
    pub total_benefit: f64,
    /// Net savings per unit of fee
    pub financial_roi: Option<f64>,
    /// Total benefit per unit of fee
    pub total_roi: Option<f64>,
}

impl MetricsRecord {
    /// Share of total benefit contributed by each component
    pub fn breakdown(&self) -> BenefitBreakdown {
        let share = |part: f64| {
            if self.total_benefit > 0.0 {
                Some(part / self.total_benefit * 100.0)
            } else {
                None
            }
        };
        BenefitBreakdown {
            net_savings_pct: share(self.net_savings),
            time_value_pct: share(self.time_value),
            opportunity_value_pct: share(self.opportunity_value),
        }
    }

    /// Cumulative total benefit at the end of each year `1..=years`
    pub fn cumulative_benefits(&self, years: u32) -> Vec<YearValue> {
        (1..=years)
            .map(|year| YearValue {
                year,
                value: self.total_benefit * f64::from(year),
            })
            .collect()
    }
}

/// Percentage split of total benefit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenefitBreakdown {
    /// Net savings share
    pub net_savings_pct: Option<f64>,
    /// Time value share
    pub time_value_pct: Option<f64>,
    /// Opportunity value share
    pub opportunity_value_pct: Option<f64>,
}

/// A value attached to a 1-indexed year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearValue {
    /// Year index, starting at 1
    pub year: u32,
    /// Value for that year
    pub value: f64,
}

/// Ratio with the zero-denominator policy applied
///
/// Also `None` when the quotient is not finite, which happens once spend is
/// large enough for the intermediate amounts to overflow.
pub(crate) fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator).filter(|r| r.is_finite())
}

/// Compute the metrics for a single scenario
///
/// # Examples
///
/// ```
/// use broker_roi::engine::{compute_scenario_metrics, ScenarioInputs};
///
/// let inputs = ScenarioInputs {
///     spend: 1_000_000.0,
///     savings_pct: 30.0,
///     fee_pct: 10.0,
///     hours: 500.0,
///     time_saved_pct: 50.0,
///     cost_per_hour: 150.0,
///     opp_value_per_hour: 250.0,
/// };
/// let metrics = compute_scenario_metrics(&inputs)?;
/// assert_eq!(metrics.net_savings, 200_000.0);
/// assert_eq!(metrics.total_roi, Some(3.0));
/// # Ok::<(), broker_roi::engine::EngineError>(())
/// ```
pub fn compute_scenario_metrics(inputs: &ScenarioInputs) -> Result<MetricsRecord, EngineError> {
    inputs.validate()?;
    Ok(evaluate(inputs))
}

/// Arithmetic core; callers must have validated `inputs`
pub(crate) fn evaluate(inputs: &ScenarioInputs) -> MetricsRecord {
    let gross_savings = inputs.spend * inputs.savings_pct / 100.0;
    let fee_cost = inputs.spend * inputs.fee_pct / 100.0;
    let net_savings = gross_savings - fee_cost;
    let hours_saved = inputs.hours * inputs.time_saved_pct / 100.0;
    let time_value = hours_saved * inputs.cost_per_hour;
    let opportunity_value = hours_saved * inputs.opp_value_per_hour;
    let total_benefit = net_savings + time_value + opportunity_value;

    MetricsRecord {
        gross_savings,
        fee_cost,
        net_savings,
        hours_saved,
        time_value,
        opportunity_value,
        total_benefit,
        financial_roi: ratio(net_savings, fee_cost),
        total_roi: ratio(total_benefit, fee_cost),
    }
}

/// In-house vs broker metrics side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    /// Inputs the comparison was computed from
    pub inputs: ScenarioInputs,
    /// In-house baseline
    pub in_house: MetricsRecord,
    /// Broker-mediated scenario
    pub broker: MetricsRecord,
    /// Broker cumulative benefit per forecast year
    pub projection: Vec<YearValue>,
}

/// Evaluate the in-house baseline and the broker scenario
pub fn compare_scenarios(
    inputs: &ScenarioInputs,
    forecast_years: u32,
) -> Result<ScenarioComparison, EngineError> {
    ensure_horizon(forecast_years)?;
    inputs.validate()?;
    let broker = evaluate(inputs);
    Ok(ScenarioComparison {
        inputs: *inputs,
        in_house: evaluate(&inputs.in_house()),
        projection: broker.cumulative_benefits(forecast_years),
        broker,
    })
}
