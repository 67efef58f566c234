//! Discretised θ grid and the sampled (θ, P, I) series.

use serde::{Deserialize, Serialize};

use crate::model::{self, ModelParameters};

/// Largest grid a configuration may ask for.
pub const MAX_GRID_POINTS: usize = 100_000;

/// Inclusive θ range sampled at a fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThetaGrid {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for ThetaGrid {
    fn default() -> Self {
        Self {
            min: -4.0,
            max: 4.0,
            step: 0.1,
        }
    }
}

impl ThetaGrid {
    /// Number of grid points, both ends included. Zero for a degenerate grid
    /// or one whose point count does not fit in `usize`.
    pub fn len(&self) -> usize {
        if !(self.step > 0.0) || !(self.max >= self.min) {
            return 0;
        }
        let intervals = ((self.max - self.min) / self.step).round();
        if !intervals.is_finite() || intervals >= usize::MAX as f64 {
            return 0;
        }
        (intervals as usize).checked_add(1).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid values computed by index so the point count does not depend on
    /// accumulated rounding.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.min + i as f64 * self.step)
    }
}

/// One evaluation of the model over a [`ThetaGrid`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SampledCurve {
    pub theta: Vec<f64>,
    pub probability: Vec<f64>,
    /// Present only when information was requested.
    pub information: Option<Vec<f64>>,
}

impl SampledCurve {
    pub fn len(&self) -> usize {
        self.theta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }
}

/// Sample the default grid (θ ∈ [−4, 4], step 0.1).
pub fn sample(params: &ModelParameters, include_information: bool) -> SampledCurve {
    sample_on(&ThetaGrid::default(), params, include_information)
}

pub fn sample_on(
    grid: &ThetaGrid,
    params: &ModelParameters,
    include_information: bool,
) -> SampledCurve {
    let ModelParameters { a, b, c, d } = *params;
    let theta: Vec<f64> = grid.points().collect();
    let probability = theta
        .iter()
        .map(|&t| model::probability(t, a, b, c, d))
        .collect();
    let information = include_information.then(|| {
        theta
            .iter()
            .map(|&t| model::information(t, a, b, c, d))
            .collect()
    });
    SampledCurve {
        theta,
        probability,
        information,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_has_81_points() {
        let grid = ThetaGrid::default();
        assert_eq!(grid.len(), 81);
        let pts: Vec<f64> = grid.points().collect();
        assert_eq!(pts[0], -4.0);
        assert!((pts[80] - 4.0).abs() < 1e-12);
        assert!((pts[40]).abs() < 1e-12);
    }

    #[test]
    fn degenerate_grids_are_empty() {
        let inverted = ThetaGrid { min: 1.0, max: -1.0, step: 0.1 };
        assert!(inverted.is_empty());
        let zero_step = ThetaGrid { min: -1.0, max: 1.0, step: 0.0 };
        assert!(zero_step.is_empty());
        let nan_step = ThetaGrid { min: -1.0, max: 1.0, step: f64::NAN };
        assert!(nan_step.is_empty());
    }

    #[test]
    fn overflowing_span_does_not_wrap() {
        let huge = ThetaGrid { min: -1e308, max: 1e308, step: 0.1 };
        assert_eq!(huge.len(), 0);
        assert_eq!(huge.points().count(), 0);
        let infinite = ThetaGrid { min: f64::NEG_INFINITY, max: 0.0, step: 1.0 };
        assert!(infinite.is_empty());
    }

    #[test]
    fn information_only_when_requested() {
        let params = ModelParameters::default();
        assert!(sample(&params, false).information.is_none());
        let curve = sample(&params, true);
        let info = curve.information.as_ref().map(Vec::len);
        assert_eq!(info, Some(81));
        assert_eq!(curve.probability.len(), 81);
    }

    #[test]
    fn sampling_is_repeatable() {
        let params = ModelParameters::new(1.3, -0.7, 0.12, 0.93);
        assert_eq!(sample(&params, true), sample(&params, true));
    }
}
