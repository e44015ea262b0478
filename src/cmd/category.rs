//! Category command implementation
//!
//! Handles the `broker-roi category` command: benchmark category rates plus
//! productivity savings, outsourced vs in-house over a discounted horizon.

use anyhow::{bail, Result};
use console::style;

use crate::config::ResolvedConfig;
use crate::engine::{DiscountedComparison, RoiEngine};
use crate::fmt::{icon, INFO};
use crate::report::{CategoryJson, JsonOutput, ReportFormatter};

/// Run the category comparison
///
/// `category` wins over the configured default category.
pub fn run_category(resolved: &ResolvedConfig, category: Option<&str>) -> Result<DiscountedComparison> {
    let engine = RoiEngine::new(resolved.settings.clone())?;
    let a = &resolved.assumptions;

    let Some(category) = category.or(a.category.as_deref()) else {
        bail!(
            "No category given; pass one of: {}",
            engine.settings().categories.names().join(", ")
        );
    };

    let comparison =
        engine.category_comparison(a.annual_spend, category, a.discount_rate, a.forecast_years)?;
    log::info!(
        "Category '{}': annual benefit {}, npv advantage {}",
        comparison.benefit.category,
        comparison.benefit.annual_benefit,
        comparison.npv_advantage()
    );
    Ok(comparison)
}

/// Print the category comparison, or the category table with `list`
pub fn cmd_category(
    resolved: &ResolvedConfig,
    category: Option<&str>,
    list: bool,
    json: bool,
) -> Result<()> {
    if list {
        println!("{}  {}", icon(INFO), style("Spend categories").bold());
        print!("{}", ReportFormatter::categories(&resolved.settings.categories)?);
        return Ok(());
    }

    let comparison = run_category(resolved, category)?;
    if json {
        let output = JsonOutput::new("category", resolved, CategoryJson::from(comparison));
        println!("{}", output.to_json()?);
        return Ok(());
    }

    print!("{}", ReportFormatter::category(&comparison)?);
    Ok(())
}
