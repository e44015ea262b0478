//! Console rendering of calculation results
//!
//! Every renderer returns the rendered `String` so commands can print it and
//! tests can inspect it.

use console::style;
use std::fmt::{self, Write as _};

use crate::config::DomainPreset;
use crate::engine::{
    CategoryTable, DiscountedComparison, DiscountedMetrics, MetricsRecord, ScenarioComparison,
    SensitivityGrid, SensitivityPoint,
};
use crate::fmt::{
    format_currency, format_hours, format_percent, format_ratio, icon, CHART, CLOCK, INFO, MONEY,
    WARNING,
};

const LABEL_WIDTH: usize = 26;
const VALUE_WIDTH: usize = 16;

/// Formats calculation results for the terminal
pub struct ReportFormatter;

impl ReportFormatter {
    fn metric_cells(record: &MetricsRecord) -> [(&'static str, String); 9] {
        [
            ("Gross Savings", format_currency(record.gross_savings)),
            ("Broker Fee Cost", format_currency(record.fee_cost)),
            ("Net Savings", format_currency(record.net_savings)),
            ("Hours Saved", format_hours(record.hours_saved)),
            ("Time Savings Value", format_currency(record.time_value)),
            ("Opportunity Value", format_currency(record.opportunity_value)),
            ("Total Benefit", format_currency(record.total_benefit)),
            ("Financial ROI", format_ratio(record.financial_roi)),
            ("Total ROI", format_ratio(record.total_roi)),
        ]
    }

    /// In-house vs broker table, benefit breakdown and projection
    pub fn comparison(cmp: &ScenarioComparison) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(
            out,
            "\n{} {}",
            icon(CHART),
            style("In-House vs. IT Broker").bold()
        )?;
        writeln!(
            out,
            "   {:<LABEL_WIDTH$}{:>VALUE_WIDTH$}{:>VALUE_WIDTH$}",
            "Metric", "In-House", "IT Broker"
        )?;
        writeln!(
            out,
            "   {}",
            style("─".repeat(LABEL_WIDTH + 2 * VALUE_WIDTH)).dim()
        )?;

        let in_house = Self::metric_cells(&cmp.in_house);
        let broker = Self::metric_cells(&cmp.broker);
        for ((label, a), (_, b)) in in_house.iter().zip(broker.iter()) {
            writeln!(
                out,
                "   {:<LABEL_WIDTH$}{}{}",
                label,
                style(format!("{:>VALUE_WIDTH$}", a)).dim(),
                style(format!("{:>VALUE_WIDTH$}", b)).green()
            )?;
        }

        let breakdown = cmp.broker.breakdown();
        writeln!(out, "\n{} {}", icon(MONEY), style("Benefit Breakdown").bold())?;
        for (label, share) in [
            ("Net Savings", breakdown.net_savings_pct),
            ("Time Value", breakdown.time_value_pct),
            ("Opportunity", breakdown.opportunity_value_pct),
        ] {
            writeln!(
                out,
                "   {} {:<LABEL_WIDTH$}{:>8}",
                style("→").dim(),
                label,
                format_percent(share)
            )?;
        }

        writeln!(
            out,
            "\n{} {}",
            icon(CLOCK),
            style(format!("{}-Year Cumulative Benefit", cmp.projection.len())).bold()
        )?;
        for point in &cmp.projection {
            writeln!(
                out,
                "   {} Year {:<4}{:>VALUE_WIDTH$}",
                style("→").dim(),
                point.year,
                format_currency(point.value)
            )?;
        }

        if cmp.broker.total_roi.is_some_and(|roi| roi < 1.0) {
            writeln!(
                out,
                "\n{} {}",
                icon(WARNING),
                style("Total benefit does not cover the broker fee").yellow()
            )?;
        }
        Ok(out)
    }

    fn discounted_lines(out: &mut String, m: &DiscountedMetrics) -> fmt::Result {
        let rows = [
            ("Annual Benefit", format_currency(m.annual_benefit)),
            ("Annual Cost", format_currency(m.cost)),
            ("Net Annual Benefit", format_currency(m.net_annual_benefit)),
            ("NPV", format_currency(m.npv)),
            ("ROI", format_percent(m.roi_pct)),
            ("Payback", m.payback.to_string()),
        ];
        for (label, value) in rows {
            writeln!(
                out,
                "   {:<LABEL_WIDTH$}{}",
                label,
                style(format!("{:>VALUE_WIDTH$}", value)).green()
            )?;
        }
        Ok(())
    }

    /// Discounted cash-flow summary for one scenario
    pub fn projection(
        m: &DiscountedMetrics,
        discount_rate: f64,
        horizon_years: u32,
    ) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(
            out,
            "\n{} {} ({} years at {:.1}%)",
            icon(CHART),
            style("Discounted Projection").bold(),
            horizon_years,
            discount_rate * 100.0
        )?;
        Self::discounted_lines(&mut out, m)?;

        writeln!(out, "\n   {:<8}{:>VALUE_WIDTH$}", "Year", "Cumulative")?;
        for (year, value) in m.cash_flows.cumulative().iter().enumerate() {
            writeln!(
                out,
                "   {:<8}{:>VALUE_WIDTH$}",
                year + 1,
                format_currency(*value)
            )?;
        }
        Ok(out)
    }

    /// Category benefit with the outsourced vs in-house comparison
    pub fn category(cmp: &DiscountedComparison) -> Result<String, fmt::Error> {
        let b = &cmp.benefit;
        let mut out = String::new();
        writeln!(
            out,
            "\n{} {} {}",
            icon(MONEY),
            style("Category:").bold(),
            style(&b.category).cyan()
        )?;
        for (label, value) in [
            ("Annual Spend", b.annual_spend),
            ("License Savings", b.license_savings),
            ("Implementation Savings", b.implementation_savings),
            ("Productivity Savings", b.productivity_savings),
            ("Annual Benefit", b.annual_benefit),
        ] {
            writeln!(
                out,
                "   {:<LABEL_WIDTH$}{:>VALUE_WIDTH$}",
                label,
                format_currency(value)
            )?;
        }

        writeln!(
            out,
            "\n{} {} ({} years at {:.1}%)",
            icon(CHART),
            style("Outsourced").bold(),
            cmp.horizon_years,
            cmp.discount_rate * 100.0
        )?;
        Self::discounted_lines(&mut out, &cmp.outsourced)?;
        writeln!(out, "\n{} {}", icon(CHART), style("In-House").bold())?;
        Self::discounted_lines(&mut out, &cmp.in_house)?;

        let advantage = cmp.npv_advantage();
        let styled = if advantage >= 0.0 {
            style(format_currency(advantage)).green().bold()
        } else {
            style(format_currency(advantage)).red().bold()
        };
        writeln!(out, "\n   NPV advantage of outsourcing: {}", styled)?;
        Ok(out)
    }

    /// Total ROI matrix: one row per fee, one column per savings value
    pub fn sensitivity(
        grid: &SensitivityGrid,
        points: &[SensitivityPoint],
    ) -> Result<String, fmt::Error> {
        const CELL: usize = 9;
        let mut out = String::new();
        writeln!(
            out,
            "\n{} {}",
            icon(CHART),
            style("Total ROI Sensitivity").bold()
        )?;

        let mut header = format!("   {:<10}", "Fee \\ Sav");
        for s in grid.savings.as_slice() {
            write!(header, "{:>CELL$}", format!("{}%", s))?;
        }
        writeln!(out, "{}", header)?;

        for (row, fee) in points.chunks(grid.savings.len().max(1)).zip(grid.fee.as_slice()) {
            write!(out, "   {:<10}", format!("{}%", fee))?;
            for p in row {
                let cell = format!("{:>CELL$}", format_ratio(p.total_roi));
                if p.breaks_even() {
                    write!(out, "{}", style(cell).green())?;
                } else {
                    write!(out, "{}", style(cell).red())?;
                }
            }
            out.push('\n');
        }

        let even = points.iter().filter(|p| p.breaks_even()).count();
        writeln!(
            out,
            "\n{} {} of {} points break even (total ROI >= 1.00x)",
            icon(INFO),
            even,
            points.len()
        )?;
        Ok(out)
    }

    /// Domain preset listing
    pub fn presets(presets: &[DomainPreset]) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(
            out,
            "   {:<16}{:>10}{:>8}{:>8}",
            "Domain", "Savings", "Fee", "Hours"
        )?;
        for p in presets {
            writeln!(
                out,
                "   {:<16}{:>10}{:>8}{:>8}  {}",
                p.name,
                format!("{}%", p.savings_pct),
                format!("{}%", p.fee_pct),
                p.baseline_hours,
                style(&p.description).dim()
            )?;
        }
        Ok(out)
    }

    /// Category table listing
    pub fn categories(table: &CategoryTable) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(
            out,
            "   {:<LABEL_WIDTH$}{:>10}{:>16}",
            "Category", "License", "Implementation"
        )?;
        for rates in table.iter() {
            writeln!(
                out,
                "   {:<LABEL_WIDTH$}{:>10}{:>16}",
                rates.name,
                format!("{:.0}%", rates.license_rate * 100.0),
                format!("{:.0}%", rates.implementation_rate * 100.0)
            )?;
        }
        Ok(out)
    }
}
