//! JSON output formatting for scripting

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::{ResolvedConfig, ScenarioAssumptions};
use crate::engine::{
    BenefitBreakdown, CategoryBenefit, DiscountedComparison, DiscountedMetrics, MetricsRecord,
    ScenarioComparison, SensitivityPoint, YearValue,
};

/// Envelope shared by every command's JSON output
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<T: Serialize> {
    /// Command that produced the result
    pub command: &'static str,
    /// Domain preset in effect
    pub domain: String,
    /// Assumptions the result was computed from
    pub assumptions: ScenarioAssumptions,
    /// Command-specific result
    pub result: T,
}

impl<T: Serialize> JsonOutput<T> {
    /// Wrap a result with the configuration it was computed from
    pub fn new(command: &'static str, resolved: &ResolvedConfig, result: T) -> Self {
        Self {
            command,
            domain: resolved.preset.name.clone(),
            assumptions: resolved.assumptions.clone(),
            result,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize JSON output")
    }
}

/// `compare` result
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonJson {
    /// In-house baseline
    pub in_house: MetricsRecord,
    /// Broker-mediated scenario
    pub broker: MetricsRecord,
    /// Broker benefit composition
    pub breakdown: BenefitBreakdown,
    /// Cumulative broker benefit per year
    pub projection: Vec<YearValue>,
}

impl From<&ScenarioComparison> for ComparisonJson {
    fn from(cmp: &ScenarioComparison) -> Self {
        Self {
            in_house: cmp.in_house,
            broker: cmp.broker,
            breakdown: cmp.broker.breakdown(),
            projection: cmp.projection.clone(),
        }
    }
}

/// `project` result
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionJson {
    /// Discount rate applied
    pub discount_rate: f64,
    /// Horizon in years
    pub horizon_years: u32,
    /// Discounted metrics
    pub metrics: DiscountedMetrics,
    /// Cumulative undiscounted cash flow per year
    pub cumulative: Vec<f64>,
}

impl ProjectionJson {
    /// Build from discounted metrics
    pub fn new(discount_rate: f64, horizon_years: u32, metrics: DiscountedMetrics) -> Self {
        let cumulative = metrics.cash_flows.cumulative();
        Self {
            discount_rate,
            horizon_years,
            metrics,
            cumulative,
        }
    }
}

/// `category` result
#[derive(Debug, Clone, Serialize)]
pub struct CategoryJson {
    /// Annual benefit composition
    pub benefit: CategoryBenefit,
    /// Discount rate used for both scenarios
    pub discount_rate: f64,
    /// Horizon in years
    pub horizon_years: u32,
    /// Outsourced scenario
    pub outsourced: DiscountedMetrics,
    /// In-house scenario
    pub in_house: DiscountedMetrics,
    /// NPV of outsourcing minus NPV in-house
    pub npv_advantage: f64,
}

impl From<DiscountedComparison> for CategoryJson {
    fn from(comparison: DiscountedComparison) -> Self {
        let npv_advantage = comparison.npv_advantage();
        Self {
            benefit: comparison.benefit,
            discount_rate: comparison.discount_rate,
            horizon_years: comparison.horizon_years,
            outsourced: comparison.outsourced,
            in_house: comparison.in_house,
            npv_advantage,
        }
    }
}

/// `sensitivity` result
#[derive(Debug, Clone, Serialize)]
pub struct SensitivityJson {
    /// Savings axis values
    pub savings: Vec<f64>,
    /// Fee axis values
    pub fee: Vec<f64>,
    /// Points in sweep order (fee-major)
    pub points: Vec<SensitivityPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{compare_scenarios, compute_discounted_scenario};

    #[test]
    fn test_undefined_ratios_serialize_as_null() {
        let resolved = ResolvedConfig::default();
        let cmp = compare_scenarios(&resolved.assumptions.scenario_inputs(), 3).unwrap();
        let json = JsonOutput::new("compare", &resolved, ComparisonJson::from(&cmp))
            .to_json()
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["command"], "compare");
        assert_eq!(value["domain"], "All");
        assert!(value["result"]["in_house"]["total_roi"].is_null());
        assert_eq!(value["result"]["broker"]["total_roi"], 3.0);
        assert_eq!(value["result"]["projection"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_category_json_lists_benefit_once() {
        let settings = crate::engine::EngineSettings::default();
        let comparison =
            crate::engine::compare_discounted(100_000.0, "Cloud Services", 0.08, 3, &settings)
                .unwrap();
        let json = serde_json::to_value(CategoryJson::from(comparison)).unwrap();
        assert_eq!(json["benefit"]["category"], "Cloud Services");
        assert!(json.get("comparison").is_none());
        assert_eq!(json["horizon_years"], 3);
        assert!(json["outsourced"]["npv"].as_f64().unwrap() > json["in_house"]["npv"].as_f64().unwrap());
        let text = json.to_string();
        assert_eq!(text.matches("\"license_savings\"").count(), 1);
    }

    #[test]
    fn test_projection_json_reports_payback() {
        let metrics = compute_discounted_scenario(150.0, 50.0, 0.0, 3).unwrap();
        let json = serde_json::to_value(ProjectionJson::new(0.0, 3, metrics)).unwrap();
        assert_eq!(json["metrics"]["npv"], 300.0);
        assert_eq!(json["cumulative"], serde_json::json!([100.0, 200.0, 300.0]));
    }
}
