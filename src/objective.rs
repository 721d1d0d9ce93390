//! The [`Objective`] trait defines the black-box function being optimized.
//!
//! Plain closures returning `Result<f64, E>` work directly:
//!
//! ```
//! use bayesopt::prelude::*;
//! use nalgebra::DMatrix;
//!
//! let x = DMatrix::from_column_slice(1, 1, &[0.0]);
//! let y = DMatrix::from_column_slice(1, 1, &[9.0]);
//! let f = |x: f64| Ok::<_, Error>((x - 3.0).powi(2));
//!
//! let mut opt = BayesianOptimizer::new(f, &x, &y, (-5.0, 5.0), 41).unwrap();
//! let best = opt.optimize(15).unwrap();
//! assert!(best.y < 9.0);
//! ```
//!
//! Implement [`Objective`] on a struct to stop a run early:
//!
//! ```
//! use std::ops::ControlFlow;
//!
//! use bayesopt::prelude::*;
//! use nalgebra::DMatrix;
//!
//! struct UntilBelow {
//!     target: f64,
//! }
//!
//! impl Objective for UntilBelow {
//!     type Error = Error;
//!
//!     fn evaluate(&mut self, x: f64) -> Result<f64> {
//!         Ok(x.cos())
//!     }
//!
//!     fn after_evaluation(&mut self, _x: f64, y: f64) -> ControlFlow<()> {
//!         if y < self.target {
//!             ControlFlow::Break(())
//!         } else {
//!             ControlFlow::Continue(())
//!         }
//!     }
//! }
//!
//! let x = DMatrix::from_column_slice(1, 1, &[0.0]);
//! let y = DMatrix::from_column_slice(1, 1, &[1.0]);
//! let mut opt =
//!     BayesianOptimizer::new(UntilBelow { target: 0.0 }, &x, &y, (0.0, 6.0), 61).unwrap();
//! let best = opt.optimize(50).unwrap();
//! assert!(best.y < 0.0);
//! assert_eq!(best.termination, Termination::Stopped);
//! ```

use core::ops::ControlFlow;

/// A scalar function of one real variable.
///
/// The optimizer stops when the acquisition maximum repeats an
/// already-evaluated input, which only makes sense if `evaluate` is a
/// deterministic function of `x`. Stochastic objectives are not detected.
pub trait Objective {
    /// The error type returned by [`evaluate`](Objective::evaluate).
    type Error: ToString;

    /// Evaluate the function at `x`.
    ///
    /// # Errors
    ///
    /// Any error aborts the optimization run and is returned to the caller
    /// as [`Error::Objective`](crate::Error::Objective).
    fn evaluate(&mut self, x: f64) -> Result<f64, Self::Error>;

    /// Called after each successful evaluation, once the result has been
    /// added to the model.
    ///
    /// Return `ControlFlow::Break(())` to end the run.
    ///
    /// Default: always continues.
    fn after_evaluation(&mut self, _x: f64, _y: f64) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

impl<F, E> Objective for F
where
    F: FnMut(f64) -> Result<f64, E>,
    E: ToString,
{
    type Error = E;

    fn evaluate(&mut self, x: f64) -> Result<f64, E> {
        self(x)
    }
}
