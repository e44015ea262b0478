//! Sensitivity command implementation
//!
//! Handles the `broker-roi sensitivity` command: total ROI over a grid of
//! savings and fee percentages.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::config::assumptions::{
    DEFAULT_FEE_RANGE, DEFAULT_FEE_STEP, DEFAULT_SAVINGS_RANGE, DEFAULT_SENSITIVITY_STEP,
};
use crate::config::{ResolvedConfig, SensitivityPlan};
use crate::engine::{RoiEngine, SensitivityGrid, SensitivityPoint};
use crate::report::{csv, JsonOutput, ReportFormatter, SensitivityJson};

/// Grid flags; anything unset falls back to the configured plan
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct GridArgs {
    /// Sweep around the chosen savings/fee (savings +/-10, fee +/-2)
    #[arg(long, conflicts_with_all = ["savings_range", "fee_range"])]
    pub around: bool,

    /// Inclusive savings range, e.g. `10,50`
    #[arg(long, value_name = "START,END", value_parser = parse_range)]
    pub savings_range: Option<(f64, f64)>,

    /// Inclusive fee range, e.g. `8,12`
    #[arg(long, value_name = "START,END", value_parser = parse_range)]
    pub fee_range: Option<(f64, f64)>,

    /// Savings step (percentage points)
    #[arg(long)]
    pub step: Option<f64>,

    /// Fee step (percentage points)
    #[arg(long)]
    pub fee_step: Option<f64>,
}

impl GridArgs {
    /// Merge the flags into the configured plan
    pub fn plan(&self, configured: &SensitivityPlan) -> SensitivityPlan {
        if self.around {
            return SensitivityPlan::Around;
        }
        let has_overrides = self.savings_range.is_some()
            || self.fee_range.is_some()
            || self.step.is_some()
            || self.fee_step.is_some();
        let (savings, fee, step, fee_step) = match *configured {
            SensitivityPlan::Around if !has_overrides => return SensitivityPlan::Around,
            SensitivityPlan::Around => (
                DEFAULT_SAVINGS_RANGE,
                DEFAULT_FEE_RANGE,
                DEFAULT_SENSITIVITY_STEP,
                DEFAULT_FEE_STEP,
            ),
            SensitivityPlan::Range {
                savings,
                fee,
                step,
                fee_step,
            } => (savings, fee, step, fee_step),
        };

        SensitivityPlan::Range {
            savings: self.savings_range.unwrap_or(savings),
            fee: self.fee_range.unwrap_or(fee),
            step: self.step.unwrap_or(step),
            fee_step: self.fee_step.unwrap_or(fee_step),
        }
    }
}

/// Parse a `START,END` pair
fn parse_range(s: &str) -> std::result::Result<(f64, f64), String> {
    let (start, end) = s
        .split_once(',')
        .ok_or_else(|| format!("expected START,END, got '{}'", s))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid number '{}': {}", v.trim(), e))
    };
    Ok((parse(start)?, parse(end)?))
}

/// Evaluate the grid in parallel, points in sweep order
pub fn run_sensitivity(
    resolved: &ResolvedConfig,
    plan: &SensitivityPlan,
) -> Result<(SensitivityGrid, Vec<SensitivityPoint>)> {
    let engine = RoiEngine::new(resolved.settings.clone())?;
    let grid = plan.grid(&resolved.assumptions)?;
    let points = engine.sensitivity_parallel(&resolved.assumptions.scenario_inputs(), &grid)?;
    log::info!(
        "Evaluated {} sensitivity points, {} break even",
        points.len(),
        points.iter().filter(|p| p.breaks_even()).count()
    );
    Ok((grid, points))
}

/// Print the sensitivity matrix
pub fn cmd_sensitivity(
    resolved: &ResolvedConfig,
    grid_args: &GridArgs,
    json: bool,
    csv_path: Option<&Path>,
) -> Result<()> {
    let plan = grid_args.plan(&resolved.sensitivity);
    let (grid, points) = run_sensitivity(resolved, &plan)?;

    if let Some(path) = csv_path {
        csv::write_csv(path, &csv::sensitivity_csv(&points))?;
    }

    if json {
        let result = SensitivityJson {
            savings: grid.savings.as_slice().to_vec(),
            fee: grid.fee.as_slice().to_vec(),
            points,
        };
        println!("{}", JsonOutput::new("sensitivity", resolved, result).to_json()?);
        return Ok(());
    }

    print!("{}", ReportFormatter::sensitivity(&grid, &points)?);
    Ok(())
}
