use nalgebra::DMatrix;

use crate::acquisition::DEFAULT_XSI;
use crate::error::{Error, Result, ensure_finite};
use crate::gp::{GaussianProcess, validate_observations};
use crate::kernel::{DEFAULT_LENGTH_SCALE, DEFAULT_SIGNAL_STD, RbfKernel};
use crate::types::Direction;

use super::{BayesianOptimizer, linspace};

/// A builder for [`BayesianOptimizer`] with a fluent API.
///
/// Created via [`BayesianOptimizer::builder()`]. Nothing is validated until
/// [`build`](Self::build).
///
/// # Defaults
///
/// - `l` (length scale): 1.0
/// - `sigma_f` (signal standard deviation): 1.0
/// - `xsi` (exploration margin): 0.01
/// - Direction: [`Minimize`](Direction::Minimize)
///
/// # Examples
///
/// ```
/// use bayesopt::prelude::*;
/// use nalgebra::DMatrix;
///
/// let x = DMatrix::from_column_slice(1, 1, &[0.5]);
/// let y = DMatrix::from_column_slice(1, 1, &[0.25]);
///
/// let opt = BayesianOptimizer::builder(|x: f64| Ok::<_, Error>(x * x), &x, &y, (0.0, 1.0), 11)
///     .maximize()
///     .xsi(0.1)
///     .build()
///     .unwrap();
///
/// assert_eq!(opt.direction(), Direction::Maximize);
/// assert_eq!(opt.candidates().len(), 11);
/// ```
pub struct BayesianOptimizerBuilder<F> {
    f: F,
    x_init: DMatrix<f64>,
    y_init: DMatrix<f64>,
    bounds: (f64, f64),
    ac_samples: usize,
    length_scale: f64,
    signal_std: f64,
    xsi: f64,
    direction: Direction,
}

impl<F> BayesianOptimizerBuilder<F> {
    pub(super) fn new(
        f: F,
        x_init: &DMatrix<f64>,
        y_init: &DMatrix<f64>,
        bounds: (f64, f64),
        ac_samples: usize,
    ) -> Self {
        Self {
            f,
            x_init: x_init.clone(),
            y_init: y_init.clone(),
            bounds,
            ac_samples,
            length_scale: DEFAULT_LENGTH_SCALE,
            signal_std: DEFAULT_SIGNAL_STD,
            xsi: DEFAULT_XSI,
            direction: Direction::Minimize,
        }
    }

    /// Set the kernel length scale `l`.
    #[must_use]
    pub fn length_scale(mut self, l: f64) -> Self {
        self.length_scale = l;
        self
    }

    /// Set the kernel signal standard deviation `sigma_f`.
    #[must_use]
    pub fn signal_std(mut self, sigma_f: f64) -> Self {
        self.signal_std = sigma_f;
        self
    }

    /// Set the exploration margin `xsi`.
    ///
    /// Larger values favour candidates with high predictive uncertainty.
    #[must_use]
    pub fn xsi(mut self, xsi: f64) -> Self {
        self.xsi = xsi;
        self
    }

    /// Set the optimization direction to minimize (the default).
    #[must_use]
    pub fn minimize(mut self) -> Self {
        self.direction = Direction::Minimize;
        self
    }

    /// Set the optimization direction to maximize.
    #[must_use]
    pub fn maximize(mut self) -> Self {
        self.direction = Direction::Maximize;
        self
    }

    /// Set the optimization direction explicitly.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Validate the configuration and build the optimizer.
    ///
    /// Checks run in this order: initial observation shapes, bounds,
    /// `ac_samples`, kernel parameters, `xsi`. The Gaussian Process is only
    /// constructed once every check has passed.
    ///
    /// # Errors
    ///
    /// Returns the first validation [`Error`] encountered.
    pub fn build(self) -> Result<BayesianOptimizer<F>> {
        validate_observations(&self.x_init, &self.y_init)?;

        let (low, high) = self.bounds;
        ensure_finite("min", low)?;
        ensure_finite("max", high)?;
        if low >= high {
            return Err(Error::InvalidBounds { low, high });
        }

        if self.ac_samples == 0 {
            return Err(Error::InvalidSamples);
        }

        let kernel = RbfKernel::new(self.length_scale, self.signal_std)?;

        ensure_finite("xsi", self.xsi)?;
        if self.xsi < 0.0 {
            return Err(Error::InvalidXsi(self.xsi));
        }

        let gp = GaussianProcess::with_kernel(&self.x_init, &self.y_init, kernel)?;
        let n_initial = gp.len();

        Ok(BayesianOptimizer {
            f: self.f,
            gp,
            candidates: linspace(low, high, self.ac_samples),
            xsi: self.xsi,
            direction: self.direction,
            n_initial,
        })
    }
}

impl<F> BayesianOptimizer<F> {
    /// Creates a builder for an optimizer over `bounds = (min, max)` with
    /// `ac_samples` candidates.
    #[must_use]
    pub fn builder(
        f: F,
        x_init: &DMatrix<f64>,
        y_init: &DMatrix<f64>,
        bounds: (f64, f64),
        ac_samples: usize,
    ) -> BayesianOptimizerBuilder<F> {
        BayesianOptimizerBuilder::new(f, x_init, y_init, bounds, ac_samples)
    }

    /// Creates an optimizer with default kernel parameters, `xsi` and
    /// direction (minimize).
    ///
    /// # Errors
    ///
    /// Same as [`BayesianOptimizerBuilder::build`].
    pub fn new(
        f: F,
        x_init: &DMatrix<f64>,
        y_init: &DMatrix<f64>,
        bounds: (f64, f64),
        ac_samples: usize,
    ) -> Result<Self> {
        Self::builder(f, x_init, y_init, bounds, ac_samples).build()
    }
}
