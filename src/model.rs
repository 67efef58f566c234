//! Four-parameter logistic (4PL) item response model.
//!
//! ```text
//! P(θ) = c + (d − c) / (1 + e^(−a(θ − b)))
//! ```
//!
//! Both functions are pure and rely on IEEE-754 saturation of `exp` for
//! extreme exponents: they never panic and never check their inputs.

use serde::{Deserialize, Serialize};

/// Distance from 0 or 1 below which [`information`] returns `0.0` instead of
/// evaluating `P'² / (P(1 − P))`.
pub const INFORMATION_EPSILON: f64 = 1e-4;

/// Item parameters of the 4PL model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Discrimination (slope).
    pub a: f64,
    /// Difficulty (location of the inflection point).
    pub b: f64,
    /// Lower asymptote ("guessing").
    pub c: f64,
    /// Upper asymptote ("inattention").
    pub d: f64,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
        }
    }
}

impl ModelParameters {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// `true` when the asymptotes are ordered (`c <= d`).
    ///
    /// Out-of-order asymptotes are still evaluated; the curve simply decreases.
    pub fn asymptotes_ordered(&self) -> bool {
        self.c <= self.d
    }

    pub fn probability(&self, theta: f64) -> f64 {
        probability(theta, self.a, self.b, self.c, self.d)
    }

    pub fn information(&self, theta: f64) -> f64 {
        information(theta, self.a, self.b, self.c, self.d)
    }
}

#[inline]
fn logistic(a: f64, b: f64, theta: f64) -> f64 {
    1.0 / (1.0 + (-a * (theta - b)).exp())
}

/// Response probability `P(θ)`, in `[c, d]` for ordered asymptotes.
pub fn probability(theta: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    c + (d - c) * logistic(a, b, theta)
}

/// Fisher information `I(θ) = P'(θ)² / (P(θ)(1 − P(θ)))`.
///
/// Returns exactly `0.0` when `P(θ)` lies within [`INFORMATION_EPSILON`] of 0
/// or 1, where the ratio is numerically meaningless.
pub fn information(theta: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    let l = logistic(a, b, theta);
    let p = c + (d - c) * l;
    if p <= INFORMATION_EPSILON || p >= 1.0 - INFORMATION_EPSILON {
        return 0.0;
    }
    let dp = a * (d - c) * l * (1.0 - l);
    (dp * dp) / (p * (1.0 - p))
}
