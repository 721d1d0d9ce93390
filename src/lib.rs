#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Sequential Bayesian optimization of expensive black-box functions of one
//! real variable. A noiseless Gaussian Process with a fixed RBF kernel
//! serves as the surrogate; Expected Improvement over a discrete candidate
//! grid decides where to evaluate next.
//!
//! # Getting Started
//!
//! ```
//! use bayesopt::prelude::*;
//! use nalgebra::DMatrix;
//!
//! let x_init = DMatrix::from_column_slice(2, 1, &[2.0, 3.5]);
//! let y_init = x_init.map(f64::sin);
//!
//! let mut opt = BayesianOptimizer::new(
//!     |x: f64| Ok::<_, Error>(x.sin()),
//!     &x_init,
//!     &y_init,
//!     (-std::f64::consts::PI, 2.0 * std::f64::consts::PI),
//!     50,
//! )
//! .unwrap();
//!
//! let best = opt.optimize(10).unwrap();
//! println!("x = {:.4}, f(x) = {:.4} ({:?})", best.x, best.y, best.termination);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`BayesianOptimizer`] | Drive the acquire-evaluate-update loop and track the best observation. |
//! | [`GaussianProcess`] | Surrogate model: posterior mean and variance from observations. |
//! | [`RbfKernel`] | Fixed squared-exponential covariance with length scale `l` and signal std `sigma_f`. |
//! | [`Objective`] | The black-box function; any `FnMut(f64) -> Result<f64, E>` qualifies. |
//! | [`Direction`] | Whether the run minimizes or maximizes the objective. |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on [`Optimum`], [`Acquisition`], [`Direction`], [`Termination`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) in the optimization loop | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod acquisition;
mod error;
mod gp;
mod kernel;
pub mod objective;
mod optimizer;
mod types;

pub use acquisition::{Acquisition, DEFAULT_XSI};
pub use error::{Error, Result};
pub use gp::GaussianProcess;
pub use kernel::{DEFAULT_LENGTH_SCALE, DEFAULT_SIGNAL_STD, RbfKernel};
pub use objective::Objective;
pub use optimizer::{BayesianOptimizer, BayesianOptimizerBuilder, Optimum};
pub use types::{Direction, Termination};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use bayesopt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::acquisition::Acquisition;
    pub use crate::error::{Error, Result};
    pub use crate::gp::GaussianProcess;
    pub use crate::kernel::RbfKernel;
    pub use crate::objective::Objective;
    pub use crate::optimizer::{BayesianOptimizer, BayesianOptimizerBuilder, Optimum};
    pub use crate::types::{Direction, Termination};
}
