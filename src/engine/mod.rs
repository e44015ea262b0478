//! ROI calculation engine
//!
//! Pure, stateless calculations comparing in-house procurement against a
//! broker-mediated process. Two model families share one engine:
//!
//! - **percentage model**: savings/fee/time-saved percentages applied to spend
//!   and procurement hours ([`compute_scenario_metrics`])
//! - **category model**: benchmark license/implementation rates per spend
//!   category plus fixed productivity savings, discounted over a horizon
//!   ([`compute_category_benefit`], [`compute_discounted_scenario`])
//!
//! Undefined ratios (zero fee, zero cost) are `None`; cost not recovered
//! within the horizon is [`Payback::BeyondHorizon`]. Only broken input
//! contracts and unknown categories are errors.
//!
//! # Examples
//!
//! ```
//! use broker_roi::engine::{EngineSettings, RoiEngine};
//!
//! let engine = RoiEngine::new(EngineSettings::default())?;
//! let benefit = engine.category_benefit(100_000.0, "Cloud Services")?;
//! assert!((benefit.annual_benefit - 660_000.0).abs() < 1e-6);
//! # Ok::<(), broker_roi::engine::EngineError>(())
//! ```

pub mod category;
pub mod discount;
pub mod error;
pub mod metrics;
pub mod sensitivity;
pub mod settings;

pub use category::{compare_discounted, compute_category_benefit, CategoryBenefit, DiscountedComparison};
pub use discount::{compute_discounted_scenario, CashFlowSeries, DiscountedMetrics, Payback};
pub use error::{EngineError, MAX_GRID_POINTS_PER_AXIS, MAX_HORIZON_YEARS};
pub use metrics::{
    compare_scenarios, compute_scenario_metrics, BenefitBreakdown, MetricsRecord,
    ScenarioComparison, ScenarioInputs, YearValue,
};
pub use sensitivity::{
    par_evaluate, sweep, GridAxis, SensitivityGrid, SensitivityPoint, SensitivitySweep,
};
pub use settings::{
    CategoryRates, CategoryTable, EngineSettings, OutsourcingAssumptions,
    ProductivityAssumptions,
};

/// Calculation engine bound to one immutable settings value
///
/// Holds no mutable state; every method is a pure function of its arguments
/// and the settings, so a single engine can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct RoiEngine {
    settings: EngineSettings,
}

impl RoiEngine {
    /// Create an engine, validating the settings once up front
    pub fn new(settings: EngineSettings) -> Result<Self, EngineError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Settings the engine was built with
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Percentage-model metrics for one scenario
    pub fn scenario_metrics(&self, inputs: &ScenarioInputs) -> Result<MetricsRecord, EngineError> {
        compute_scenario_metrics(inputs)
    }

    /// In-house baseline vs broker scenario with a cumulative projection
    pub fn compare(
        &self,
        inputs: &ScenarioInputs,
        forecast_years: u32,
    ) -> Result<ScenarioComparison, EngineError> {
        compare_scenarios(inputs, forecast_years)
    }

    /// Discounted flat cash flow for a benefit/cost pair
    pub fn discounted_scenario(
        &self,
        annual_benefit: f64,
        cost: f64,
        discount_rate: f64,
        horizon_years: u32,
    ) -> Result<DiscountedMetrics, EngineError> {
        compute_discounted_scenario(annual_benefit, cost, discount_rate, horizon_years)
    }

    /// Category-model annual benefit
    pub fn category_benefit(
        &self,
        annual_spend: f64,
        category: &str,
    ) -> Result<CategoryBenefit, EngineError> {
        compute_category_benefit(annual_spend, category, &self.settings)
    }

    /// Outsourced vs in-house discounted comparison for a category
    pub fn category_comparison(
        &self,
        annual_spend: f64,
        category: &str,
        discount_rate: f64,
        horizon_years: u32,
    ) -> Result<DiscountedComparison, EngineError> {
        compare_discounted(
            annual_spend,
            category,
            discount_rate,
            horizon_years,
            &self.settings,
        )
    }

    /// Lazy sensitivity sweep
    pub fn sensitivity(
        &self,
        base: &ScenarioInputs,
        grid: &SensitivityGrid,
    ) -> Result<SensitivitySweep, EngineError> {
        sweep(base, grid)
    }

    /// Sensitivity grid evaluated in parallel
    pub fn sensitivity_parallel(
        &self,
        base: &ScenarioInputs,
        grid: &SensitivityGrid,
    ) -> Result<Vec<SensitivityPoint>, EngineError> {
        par_evaluate(base, grid)
    }
}
