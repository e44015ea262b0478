//! Multi-year cash flows, NPV, ROI% and payback

use serde::{Deserialize, Serialize};

use super::error::{ensure_horizon, ensure_non_negative, EngineError};
use super::metrics::ratio;

/// Year in which cumulative cash flow first exceeds the cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payback {
    /// 1-indexed payback year
    Year(u32),
    /// Cost is not recovered within the horizon
    BeyondHorizon,
}

impl Payback {
    /// Payback year if reached within the horizon
    pub fn year(&self) -> Option<u32> {
        match self {
            Self::Year(y) => Some(*y),
            Self::BeyondHorizon => None,
        }
    }
}

impl std::fmt::Display for Payback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Year(1) => write!(f, "1 year"),
            Self::Year(y) => write!(f, "{} years", y),
            Self::BeyondHorizon => write!(f, "beyond horizon"),
        }
    }
}

/// Ordered per-year net cash flows, year 1 first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashFlowSeries(Vec<f64>);

impl CashFlowSeries {
    /// A series of `years` identical values
    ///
    /// Allocates one value per year; engine entry points bound `years` by
    /// [`MAX_HORIZON_YEARS`](super::MAX_HORIZON_YEARS) before calling this.
    pub fn flat(value: f64, years: u32) -> Self {
        Self(vec![value; years as usize])
    }

    /// Wrap explicit per-year values
    pub fn from_values(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Per-year values
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Number of years covered
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the series covers no years
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Undiscounted sum
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Sum of `cash_flow_t / (1 + rate)^t`, periods indexed from 1
    pub fn npv(&self, discount_rate: f64) -> f64 {
        let base = 1.0 + discount_rate;
        self.0
            .iter()
            .zip(1i32..)
            .map(|(cf, t)| cf / base.powi(t))
            .sum()
    }

    /// Running cumulative sums
    pub fn cumulative(&self) -> Vec<f64> {
        self.0
            .iter()
            .scan(0.0, |acc, cf| {
                *acc += cf;
                Some(*acc)
            })
            .collect()
    }

    /// First year whose running sum strictly exceeds `threshold`
    pub fn payback(&self, threshold: f64) -> Payback {
        self.cumulative()
            .iter()
            .zip(1u32..)
            .find(|(sum, _)| **sum > threshold)
            .map_or(Payback::BeyondHorizon, |(_, year)| Payback::Year(year))
    }
}

/// Result of [`compute_discounted_scenario`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountedMetrics {
    /// Annual benefit before cost
    pub annual_benefit: f64,
    /// Annual cost
    pub cost: f64,
    /// Annual net benefit (`annual_benefit - cost`)
    pub net_annual_benefit: f64,
    /// Per-year net benefit over the horizon
    pub cash_flows: CashFlowSeries,
    /// Net present value of the cash flows
    pub npv: f64,
    /// `(Σ cash flow - cost) / cost * 100`, `None` when cost is zero
    pub roi_pct: Option<f64>,
    /// Year the cumulative cash flow first exceeds the cost
    pub payback: Payback,
}

/// Discount a flat benefit-minus-cost stream over `horizon_years`
///
/// # Examples
///
/// ```
/// use broker_roi::engine::{compute_discounted_scenario, Payback};
///
/// let m = compute_discounted_scenario(150.0, 50.0, 0.0, 3)?;
/// assert_eq!(m.npv, 300.0);
/// assert_eq!(m.roi_pct, Some(500.0));
/// assert_eq!(m.payback, Payback::Year(1));
/// # Ok::<(), broker_roi::engine::EngineError>(())
/// ```
pub fn compute_discounted_scenario(
    annual_benefit: f64,
    cost: f64,
    discount_rate: f64,
    horizon_years: u32,
) -> Result<DiscountedMetrics, EngineError> {
    ensure_non_negative("annual_benefit", annual_benefit)?;
    ensure_non_negative("cost", cost)?;
    ensure_non_negative("discount_rate", discount_rate)?;
    ensure_horizon(horizon_years)?;

    let net_annual_benefit = annual_benefit - cost;
    let cash_flows = CashFlowSeries::flat(net_annual_benefit, horizon_years);
    let npv = cash_flows.npv(discount_rate);
    let roi_pct = ratio(cash_flows.total() - cost, cost).map(|r| r * 100.0);
    let payback = cash_flows.payback(cost);

    log::debug!(
        "discounted scenario: benefit={} cost={} rate={} years={} npv={}",
        annual_benefit,
        cost,
        discount_rate,
        horizon_years,
        npv
    );

    Ok(DiscountedMetrics {
        annual_benefit,
        cost,
        net_annual_benefit,
        cash_flows,
        npv,
        roi_pct,
        payback,
    })
}
