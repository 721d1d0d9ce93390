//! Expected Improvement over a discrete candidate grid.

use core::f64::consts::SQRT_2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use statrs::function::erf::erfc;

use crate::types::Direction;

/// Default exploration margin `xsi`.
pub const DEFAULT_XSI: f64 = 0.01;

/// Outcome of one acquisition step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Acquisition {
    /// The candidate with the highest Expected Improvement.
    pub x_next: f64,
    /// Grid index of `x_next`.
    pub index: usize,
    /// Expected Improvement at every candidate, in grid order.
    pub scores: Vec<f64>,
}

/// Expected Improvement at each candidate from its posterior mean and variance.
///
/// `best` is the best observed value in the given direction and `xsi` the
/// exploration margin. The posterior variance is used as σ as-is:
/// `EI = imp·Φ(imp/σ) + σ·φ(imp/σ)`. Only a candidate with σ exactly 0
/// scores exactly 0; negative rounding residue goes through the formula.
pub(crate) fn expected_improvement(
    mean: &[f64],
    variance: &[f64],
    best: f64,
    xsi: f64,
    direction: Direction,
) -> Vec<f64> {
    mean.iter()
        .zip(variance)
        .map(|(&mu, &sigma)| {
            if sigma == 0.0 {
                return 0.0;
            }
            let improvement = match direction {
                Direction::Minimize => best - mu - xsi,
                Direction::Maximize => mu - best - xsi,
            };
            let z = improvement / sigma;
            improvement * norm_cdf(z) + sigma * norm_pdf(z)
        })
        .collect()
}

/// Index of the largest score, lowest index on ties.
///
/// NaN scores are skipped; if every score is NaN, index 0 is returned.
pub(crate) fn argmax(scores: &[f64]) -> usize {
    Direction::Maximize.best_index(scores).unwrap_or(0)
}

/// Standard normal PDF.
pub(crate) fn norm_pdf(x: f64) -> f64 {
    const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal CDF via the complementary error function.
pub(crate) fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}
