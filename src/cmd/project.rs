//! Project command implementation
//!
//! Handles the `broker-roi project` command: the broker scenario's benefit
//! and fee run through the discounted cash-flow model.

use anyhow::Result;

use crate::config::ResolvedConfig;
use crate::engine::{DiscountedMetrics, RoiEngine};
use crate::report::{JsonOutput, ProjectionJson, ReportFormatter};

/// Discount the broker scenario over the forecast horizon
///
/// The annual benefit is the broker benefit before the fee; the fee is the
/// cost, so the net annual flow equals the scenario's total benefit.
pub fn run_project(resolved: &ResolvedConfig) -> Result<DiscountedMetrics> {
    let engine = RoiEngine::new(resolved.settings.clone())?;
    let a = &resolved.assumptions;
    let broker = engine.scenario_metrics(&a.scenario_inputs())?;

    let metrics = engine.discounted_scenario(
        broker.total_benefit + broker.fee_cost,
        broker.fee_cost,
        a.discount_rate,
        a.forecast_years,
    )?;
    log::info!(
        "Projected {} years at {}: npv {}, payback {}",
        a.forecast_years,
        a.discount_rate,
        metrics.npv,
        metrics.payback
    );
    Ok(metrics)
}

/// Print the discounted projection
pub fn cmd_project(resolved: &ResolvedConfig, json: bool) -> Result<()> {
    let metrics = run_project(resolved)?;
    let a = &resolved.assumptions;

    if json {
        let result = ProjectionJson::new(a.discount_rate, a.forecast_years, metrics);
        println!("{}", JsonOutput::new("project", resolved, result).to_json()?);
        return Ok(());
    }

    print!(
        "{}",
        ReportFormatter::projection(&metrics, a.discount_rate, a.forecast_years)?
    );
    Ok(())
}
