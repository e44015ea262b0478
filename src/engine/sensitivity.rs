//! Savings/fee sensitivity sweep
//!
//! A [`SensitivityGrid`] is the cartesian product of a savings axis and a fee
//! axis. [`SensitivitySweep`] walks it lazily (fee-major, savings-minor) and
//! evaluates the total ROI at each point; [`par_evaluate`] does the same work
//! on the rayon pool and returns the points in sweep order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::{ensure_percent, EngineError, MAX_GRID_POINTS_PER_AXIS};
use super::metrics::{evaluate, ScenarioInputs};

/// Tolerance so that e.g. 10..=50 step 5 includes 50 despite float rounding
const STEP_EPSILON: f64 = 1e-9;

/// Savings step used by [`SensitivityGrid::around`]
pub const AROUND_SAVINGS_STEP: f64 = 5.0;
/// Savings half-width used by [`SensitivityGrid::around`]
pub const AROUND_SAVINGS_SPAN: f64 = 10.0;
/// Fee offset used by [`SensitivityGrid::around`]
pub const AROUND_FEE_SPAN: f64 = 2.0;
/// Upper bound for fee percentages in [`SensitivityGrid::around`]
pub const MAX_FEE_PCT: f64 = 50.0;

/// Sorted, de-duplicated percentage values along one axis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GridAxis {
    values: Vec<f64>,
}

impl GridAxis {
    /// Inclusive range `start..=end` walked in `step` increments
    ///
    /// Fails with [`EngineError::GridTooLarge`] when the step is so small
    /// that the axis would exceed [`MAX_GRID_POINTS_PER_AXIS`] values.
    pub fn range(field: &'static str, start: f64, end: f64, step: f64) -> Result<Self, EngineError> {
        ensure_percent(field, start)?;
        ensure_percent(field, end)?;
        if !(step.is_finite() && step > 0.0) {
            return Err(EngineError::InvalidStep(step));
        }
        if start > end {
            return Err(EngineError::InvalidRange { field, start, end });
        }

        let points = ((end - start) / step + STEP_EPSILON).floor() + 1.0;
        if points > MAX_GRID_POINTS_PER_AXIS as f64 {
            return Err(EngineError::GridTooLarge { field, points });
        }
        let count = points as usize;
        let values = (0..count)
            .map(|i| (start + i as f64 * step).min(end))
            .collect();
        Ok(Self { values })
    }

    /// Explicit list of values
    pub fn values(field: &'static str, mut values: Vec<f64>) -> Result<Self, EngineError> {
        for value in &values {
            ensure_percent(field, *value)?;
        }
        values.sort_by(f64::total_cmp);
        values.dedup();
        Ok(Self { values })
    }

    /// Values along the axis
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the axis has no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Savings x fee evaluation grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityGrid {
    /// Savings percentages
    pub savings: GridAxis,
    /// Fee percentages
    pub fee: GridAxis,
}

impl SensitivityGrid {
    /// Inclusive savings and fee ranges sharing one step
    ///
    /// # Examples
    ///
    /// ```
    /// use broker_roi::engine::SensitivityGrid;
    ///
    /// let grid = SensitivityGrid::new((10.0, 50.0), (8.0, 12.0), 2.0)?;
    /// assert_eq!(grid.savings.len(), 21);
    /// assert_eq!(grid.fee.as_slice(), &[8.0, 10.0, 12.0]);
    /// # Ok::<(), broker_roi::engine::EngineError>(())
    /// ```
    pub fn new(savings: (f64, f64), fee: (f64, f64), step: f64) -> Result<Self, EngineError> {
        Self::with_steps(savings, fee, step, step)
    }

    /// Inclusive ranges with separate steps per axis
    pub fn with_steps(
        savings: (f64, f64),
        fee: (f64, f64),
        savings_step: f64,
        fee_step: f64,
    ) -> Result<Self, EngineError> {
        Ok(Self {
            savings: GridAxis::range("savings_pct", savings.0, savings.1, savings_step)?,
            fee: GridAxis::range("fee_pct", fee.0, fee.1, fee_step)?,
        })
    }

    /// Neighbourhood of a chosen savings/fee pair
    ///
    /// Savings span +/-10 points in steps of 5 (clamped to 0-100); fees are
    /// the chosen value and +/-2 points (clamped to 0-50).
    pub fn around(savings_pct: f64, fee_pct: f64) -> Result<Self, EngineError> {
        ensure_percent("savings_pct", savings_pct)?;
        ensure_percent("fee_pct", fee_pct)?;
        let low = (savings_pct - AROUND_SAVINGS_SPAN).max(0.0);
        let high = (savings_pct + AROUND_SAVINGS_SPAN).min(100.0);
        Ok(Self {
            savings: GridAxis::range("savings_pct", low, high, AROUND_SAVINGS_STEP)?,
            fee: GridAxis::values(
                "fee_pct",
                vec![
                    (fee_pct - AROUND_FEE_SPAN).max(0.0),
                    fee_pct,
                    (fee_pct + AROUND_FEE_SPAN).min(MAX_FEE_PCT),
                ],
            )?,
        })
    }

    /// Number of grid points
    pub fn len(&self) -> usize {
        self.savings.len() * self.fee.len()
    }

    /// Whether the grid has no points
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(savings_pct, fee_pct)` at a sweep index
    fn coordinates(&self, index: usize) -> (f64, f64) {
        let per_fee = self.savings.len();
        (
            self.savings.values[index % per_fee],
            self.fee.values[index / per_fee],
        )
    }
}

/// Total ROI at one grid point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// Savings percentage
    pub savings_pct: f64,
    /// Fee percentage
    pub fee_pct: f64,
    /// Total ROI multiple, `None` when the fee cost is zero
    pub total_roi: Option<f64>,
}

impl SensitivityPoint {
    /// Whether total benefit at least covers the fee
    pub fn breaks_even(&self) -> bool {
        self.total_roi.is_some_and(|roi| roi >= 1.0)
    }
}

/// Lazy, restartable walk over a grid
///
/// Each call to [`sweep`] starts a fresh pass over the same points.
#[derive(Debug, Clone)]
pub struct SensitivitySweep {
    base: ScenarioInputs,
    grid: SensitivityGrid,
    front: usize,
    back: usize,
}

impl SensitivitySweep {
    fn point_at(&self, index: usize) -> SensitivityPoint {
        evaluate_point(&self.base, &self.grid, index)
    }
}

impl Iterator for SensitivitySweep {
    type Item = SensitivityPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let point = self.point_at(self.front);
        self.front += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for SensitivitySweep {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.point_at(self.back))
    }
}

impl ExactSizeIterator for SensitivitySweep {}

fn evaluate_point(base: &ScenarioInputs, grid: &SensitivityGrid, index: usize) -> SensitivityPoint {
    let (savings_pct, fee_pct) = grid.coordinates(index);
    let metrics = evaluate(&base.with_rates(savings_pct, fee_pct));
    SensitivityPoint {
        savings_pct,
        fee_pct,
        total_roi: metrics.total_roi,
    }
}

/// Start a lazy sweep of `grid` around `base`
///
/// `base` is validated once; its savings and fee percentages are replaced at
/// every point by the grid coordinates.
pub fn sweep(base: &ScenarioInputs, grid: &SensitivityGrid) -> Result<SensitivitySweep, EngineError> {
    base.validate()?;
    log::debug!(
        "sensitivity sweep: {} savings x {} fee points",
        grid.savings.len(),
        grid.fee.len()
    );
    Ok(SensitivitySweep {
        base: *base,
        grid: grid.clone(),
        front: 0,
        back: grid.len(),
    })
}

/// Evaluate every grid point in parallel, returned in sweep order
pub fn par_evaluate(
    base: &ScenarioInputs,
    grid: &SensitivityGrid,
) -> Result<Vec<SensitivityPoint>, EngineError> {
    base.validate()?;
    Ok((0..grid.len())
        .into_par_iter()
        .map(|index| evaluate_point(base, grid, index))
        .collect())
}
