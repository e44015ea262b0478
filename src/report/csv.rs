//! CSV export of comparison and sensitivity results
//!
//! Undefined ratios are written as empty cells.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::engine::{MetricsRecord, ScenarioComparison, SensitivityPoint};
use crate::error::RoiError;
use crate::infra::{FileSystem, RealFileSystem};

/// Header of the comparison export
pub const COMPARISON_HEADER: [&str; 3] = ["Metric", "In-House", "IT Broker"];

/// Header of the sensitivity export
pub const SENSITIVITY_HEADER: [&str; 3] = ["Savings (%)", "Fee (%)", "Total ROI (x)"];

/// One metric row of the comparison export
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Metric label
    pub metric: String,
    /// In-house value, `None` for an empty cell
    pub in_house: Option<f64>,
    /// Broker value, `None` for an empty cell
    pub broker: Option<f64>,
}

fn metric_rows(record: &MetricsRecord) -> [(&'static str, Option<f64>); 9] {
    [
        ("Gross Savings ($)", Some(record.gross_savings)),
        ("Broker Fee Cost ($)", Some(record.fee_cost)),
        ("Net Savings ($)", Some(record.net_savings)),
        ("Hours Saved", Some(record.hours_saved)),
        ("Time Savings Value ($)", Some(record.time_value)),
        ("Opportunity Value ($)", Some(record.opportunity_value)),
        ("Total Benefit ($)", Some(record.total_benefit)),
        ("Financial ROI (x)", record.financial_roi),
        ("Total ROI (x)", record.total_roi),
    ]
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render the in-house vs broker comparison
///
/// # Examples
///
/// ```
/// use broker_roi::engine::{compare_scenarios, ScenarioInputs};
/// use broker_roi::report::csv::comparison_csv;
///
/// let inputs = ScenarioInputs {
///     spend: 1_000_000.0, savings_pct: 30.0, fee_pct: 10.0, hours: 500.0,
///     time_saved_pct: 50.0, cost_per_hour: 150.0, opp_value_per_hour: 250.0,
/// };
/// let csv = comparison_csv(&compare_scenarios(&inputs, 3)?);
/// assert!(csv.starts_with("Metric,In-House,IT Broker\n"));
/// assert!(csv.contains("Total ROI (x),,3\n"));
/// # Ok::<(), broker_roi::engine::EngineError>(())
/// ```
pub fn comparison_csv(comparison: &ScenarioComparison) -> String {
    let mut out = COMPARISON_HEADER.join(",");
    out.push('\n');

    let in_house = metric_rows(&comparison.in_house);
    let broker = metric_rows(&comparison.broker);
    for ((label, a), (_, b)) in in_house.iter().zip(broker.iter()) {
        out.push_str(&format!("{},{},{}\n", escape(label), cell(*a), cell(*b)));
    }
    out
}

/// Render sensitivity points in sweep order
pub fn sensitivity_csv(points: &[SensitivityPoint]) -> String {
    let mut out = SENSITIVITY_HEADER
        .iter()
        .map(|h| escape(h))
        .collect::<Vec<_>>()
        .join(",");
    out.push('\n');
    for p in points {
        out.push_str(&format!(
            "{},{},{}\n",
            p.savings_pct,
            p.fee_pct,
            cell(p.total_roi)
        ));
    }
    out
}

fn split_record(line: &str) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, quoted) {
            ('"', true) if chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            ('"', true) => quoted = false,
            ('"', false) if current.is_empty() => quoted = true,
            (',', false) => fields.push(std::mem::take(&mut current)),
            (c, _) => current.push(c),
        }
    }
    if quoted {
        bail!("Unterminated quoted field in '{}'", line);
    }
    fields.push(current);
    Ok(fields)
}

fn parse_cell(text: &str, line: usize) -> Result<Option<f64>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    text.trim()
        .parse::<f64>()
        .map(Some)
        .with_context(|| format!("Line {}: '{}' is not a number", line, text))
}

/// Parse a comparison export back into rows
pub fn parse_comparison_csv(text: &str) -> Result<Vec<ComparisonRow>> {
    let mut lines = text.lines().enumerate();
    match lines.next() {
        Some((_, header)) if split_record(header)? == COMPARISON_HEADER => {}
        Some((_, header)) => bail!("Unexpected CSV header '{}'", header),
        None => bail!("Empty CSV"),
    }

    let mut rows = Vec::new();
    for (index, line) in lines {
        if line.is_empty() {
            continue;
        }
        let fields = split_record(line)?;
        let [metric, in_house, broker] = fields.as_slice() else {
            bail!("Line {}: expected 3 fields, found {}", index + 1, fields.len());
        };
        rows.push(ComparisonRow {
            metric: metric.clone(),
            in_house: parse_cell(in_house, index + 1)?,
            broker: parse_cell(broker, index + 1)?,
        });
    }
    Ok(rows)
}

/// Write an export to disk
pub fn write_csv(path: &Path, contents: &str) -> Result<()> {
    write_csv_with_fs(path, contents, &RealFileSystem)
}

/// Write an export through a custom filesystem
pub fn write_csv_with_fs<FS: FileSystem>(path: &Path, contents: &str, fs: &FS) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent).map_err(|source| RoiError::Io {
            context: parent.display().to_string(),
            source,
        })?;
    }
    fs.write(path, contents).map_err(|source| RoiError::Io {
        context: path.display().to_string(),
        source,
    })?;
    log::info!("Wrote CSV export to {}", path.display());
    Ok(())
}
