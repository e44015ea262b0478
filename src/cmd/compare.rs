//! Compare command implementation
//!
//! Handles the `broker-roi compare` command: in-house baseline vs the
//! broker-mediated scenario, with benefit breakdown and projection.

use anyhow::Result;
use console::style;
use std::path::Path;

use crate::config::ResolvedConfig;
use crate::engine::{RoiEngine, ScenarioComparison};
use crate::fmt::{format_currency, icon, CHECKMARK};
use crate::report::{csv, ComparisonJson, JsonOutput, ReportFormatter};

/// Run the percentage-model comparison for resolved assumptions
pub fn run_compare(resolved: &ResolvedConfig) -> Result<ScenarioComparison> {
    let engine = RoiEngine::new(resolved.settings.clone())?;
    let comparison = engine.compare(
        &resolved.assumptions.scenario_inputs(),
        resolved.assumptions.forecast_years,
    )?;
    log::info!(
        "Compared '{}' scenario: total ROI {:?}",
        resolved.preset.name,
        comparison.broker.total_roi
    );
    Ok(comparison)
}

/// Compare in-house procurement with the broker and print the result
///
/// # Examples
///
/// ```no_run
/// use broker_roi::cmd::compare::cmd_compare;
/// use broker_roi::config::ResolvedConfig;
///
/// cmd_compare(&ResolvedConfig::default(), false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_compare(resolved: &ResolvedConfig, json: bool, csv_path: Option<&Path>) -> Result<()> {
    let comparison = run_compare(resolved)?;

    if let Some(path) = csv_path {
        csv::write_csv(path, &csv::comparison_csv(&comparison))?;
    }

    if json {
        let output = JsonOutput::new("compare", resolved, ComparisonJson::from(&comparison));
        println!("{}", output.to_json()?);
        return Ok(());
    }

    println!(
        "{} {} ({} preset)",
        style("broker-roi compare").bold(),
        style(format_currency(resolved.assumptions.annual_spend)).cyan(),
        resolved.preset.name
    );
    print!("{}", ReportFormatter::comparison(&comparison)?);

    if let Some(path) = csv_path {
        println!(
            "\n{} CSV written to {}",
            icon(CHECKMARK),
            style(path.display()).cyan()
        );
    }
    Ok(())
}
