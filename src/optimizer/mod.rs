//! Sequential Bayesian optimization on a fixed candidate grid.
//!
//! A [`BayesianOptimizer`] owns a [`GaussianProcess`] fitted to the
//! observations made so far and a grid of `ac_samples` evenly spaced
//! candidates spanning the search interval. Each iteration scores every
//! candidate with Expected Improvement, evaluates the objective at the
//! best-scoring one and folds the result back into the model.
//!
//! The loop ends when the iteration budget is spent
//! ([`Termination::Exhausted`]), when the best-scoring candidate has already
//! been evaluated ([`Termination::Converged`]), or when the objective asks
//! to stop ([`Termination::Stopped`]). In every case the result is the best
//! pair over the whole observation history, initial points included.

mod builder;
mod export;
mod optimize;

use nalgebra::DMatrix;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::acquisition::{Acquisition, argmax, expected_improvement};
use crate::gp::GaussianProcess;
use crate::types::{Direction, Termination};

pub use builder::BayesianOptimizerBuilder;

/// Best observation found by [`BayesianOptimizer::optimize`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Optimum {
    /// Input of the best observation.
    pub x: f64,
    /// Objective value at `x`.
    pub y: f64,
    /// Why the loop stopped.
    pub termination: Termination,
    /// Objective evaluations made during this call.
    pub evaluations: usize,
}

/// Bayesian optimizer for a scalar function of one real variable.
///
/// # Examples
///
/// ```
/// use bayesopt::prelude::*;
/// use nalgebra::DMatrix;
///
/// let x_init = DMatrix::from_column_slice(2, 1, &[2.0, 3.5]);
/// let y_init = x_init.map(f64::sin);
/// let f = |x: f64| Ok::<_, Error>(x.sin());
///
/// let mut opt = BayesianOptimizer::builder(f, &x_init, &y_init, (0.0, 6.0), 61)
///     .length_scale(0.6)
///     .signal_std(2.0)
///     .xsi(0.05)
///     .build()
///     .unwrap();
///
/// let best = opt.optimize(20).unwrap();
/// assert!(best.y <= 3.5_f64.sin());
/// ```
pub struct BayesianOptimizer<F> {
    f: F,
    gp: GaussianProcess,
    /// Candidate grid, shape `(ac_samples, 1)`. Never mutated.
    candidates: DMatrix<f64>,
    xsi: f64,
    direction: Direction,
    n_initial: usize,
}

impl<F> BayesianOptimizer<F> {
    /// Scores every candidate with Expected Improvement and picks the best.
    ///
    /// The posterior variance at each candidate plays the role of σ in the
    /// Expected Improvement formula. Candidates whose variance is exactly 0
    /// (typically ones that have already been evaluated) score exactly 0.
    /// Ties go to the lowest grid index.
    #[must_use]
    pub fn acquisition(&self) -> Acquisition {
        let (mean, variance) = self.gp.posterior(&self.candidates);
        let best = self
            .direction
            .best_value(self.gp.y())
            .unwrap_or(f64::NAN);
        let scores = expected_improvement(
            mean.as_slice(),
            variance.as_slice(),
            best,
            self.xsi,
            self.direction,
        );
        let index = argmax(&scores);
        Acquisition {
            x_next: self.candidates[(index, 0)],
            index,
            scores,
        }
    }

    /// Best pair over the full observation history, earliest on ties.
    #[must_use]
    pub fn best(&self) -> (f64, f64) {
        let i = self.direction.best_index(self.gp.y()).unwrap_or(0);
        (self.gp.x()[i], self.gp.y()[i])
    }

    /// The surrogate model.
    #[must_use]
    pub fn gp(&self) -> &GaussianProcess {
        &self.gp
    }

    /// Candidate grid as a slice, in ascending order.
    #[must_use]
    pub fn candidates(&self) -> &[f64] {
        self.candidates.as_slice()
    }

    /// Every input evaluated so far, initial points first.
    #[must_use]
    pub fn sampled(&self) -> &[f64] {
        self.gp.x()
    }

    /// Number of initial observations the optimizer was built with.
    #[must_use]
    pub fn n_initial(&self) -> usize {
        self.n_initial
    }

    /// Exploration margin.
    #[must_use]
    pub fn xsi(&self) -> f64 {
        self.xsi
    }

    /// Optimization direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The objective function.
    #[must_use]
    pub fn objective(&self) -> &F {
        &self.f
    }

    /// Consumes the optimizer and returns the objective function.
    #[must_use]
    pub fn into_objective(self) -> F {
        self.f
    }
}

/// `n` evenly spaced points over `[low, high]`, shaped as a column.
///
/// The last point is pinned to `high`. A single point sits at `low`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn linspace(low: f64, high: f64, n: usize) -> DMatrix<f64> {
    if n == 1 {
        return DMatrix::from_element(1, 1, low);
    }
    let step = (high - low) / (n - 1) as f64;
    DMatrix::from_fn(n, 1, |i, _| {
        if i == n - 1 {
            high
        } else {
            low + step * i as f64
        }
    })
}
