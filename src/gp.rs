//! Noiseless Gaussian Process regression over one real variable.
//!
//! The model keeps every observation it has been given, in sampling order,
//! together with the exact Gram matrix `K` of the observed inputs under a
//! fixed [`RbfKernel`]. Predictions condition a zero-mean prior on those
//! observations:
//!
//! ```text
//! μ = K_sᵀ K⁻¹ Y
//! Σ = K_ss − K_sᵀ K⁻¹ K_s
//! ```
//!
//! `K⁻¹` is recomputed on every [`predict`](GaussianProcess::predict) call.
//! Sample counts stay small (bounded by the optimizer's iteration budget),
//! so the O(t³) inversion is negligible next to an objective evaluation.
//!
//! # Numerical caveats
//!
//! - The kernel is noiseless, so two coincident inputs make `K` singular.
//!   Inversion then fails and every prediction is NaN. This is reported
//!   through a debug log event, never as an error.
//! - Posterior variances are returned as computed. At or very near observed
//!   inputs they may come out as tiny negative numbers from rounding.
//!
//! # Examples
//!
//! ```
//! use bayesopt::GaussianProcess;
//! use nalgebra::DMatrix;
//!
//! let x = DMatrix::from_column_slice(2, 1, &[0.0, 1.0]);
//! let y = DMatrix::from_column_slice(2, 1, &[0.5, -0.5]);
//! let mut gp = GaussianProcess::new(&x, &y, 1.0, 1.0).unwrap();
//!
//! let (mean, var) = gp.predict_point(1.0);
//! assert!((mean + 0.5).abs() < 1e-9);
//! assert!(var.abs() < 1e-9);
//!
//! gp.update(2.0, 0.0);
//! assert_eq!(gp.len(), 3);
//! ```

use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result, ensure_finite};
use crate::kernel::RbfKernel;

/// A Gaussian Process surrogate with a fixed RBF kernel.
#[derive(Clone, Debug)]
pub struct GaussianProcess {
    x: Vec<f64>,
    y: Vec<f64>,
    kernel: RbfKernel,
    /// Gram matrix of `x`, kept in sync on every update.
    k: DMatrix<f64>,
}

impl GaussianProcess {
    /// Creates a model from initial observations and kernel parameters.
    ///
    /// `x_init` and `y_init` must both be column arrays of shape `(t, 1)`
    /// with `t ≥ 1`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotColumn`] if either array has other than one column.
    /// - [`Error::ShapeMismatch`] if the row counts differ.
    /// - [`Error::EmptyObservations`] if there are no rows.
    /// - [`Error::NonFinite`] if an input is NaN or infinite.
    /// - Any error from [`RbfKernel::new`].
    pub fn new(
        x_init: &DMatrix<f64>,
        y_init: &DMatrix<f64>,
        length_scale: f64,
        signal_std: f64,
    ) -> Result<Self> {
        validate_observations(x_init, y_init)?;
        let kernel = RbfKernel::new(length_scale, signal_std)?;
        Ok(Self::from_validated(x_init, y_init, kernel))
    }

    /// Creates a model with an already-constructed kernel.
    ///
    /// # Errors
    ///
    /// Same shape errors as [`GaussianProcess::new`].
    pub fn with_kernel(
        x_init: &DMatrix<f64>,
        y_init: &DMatrix<f64>,
        kernel: RbfKernel,
    ) -> Result<Self> {
        validate_observations(x_init, y_init)?;
        Ok(Self::from_validated(x_init, y_init, kernel))
    }

    fn from_validated(x_init: &DMatrix<f64>, y_init: &DMatrix<f64>, kernel: RbfKernel) -> Self {
        let x: Vec<f64> = x_init.iter().copied().collect();
        let y: Vec<f64> = y_init.iter().copied().collect();
        let xm = column(&x);
        let k = kernel.matrix(&xm, &xm);
        Self { x, y, kernel, k }
    }

    /// Pairwise RBF covariance between point sets `a` (m × 1) and `b` (n × 1).
    ///
    /// Pure function of the kernel parameters; returns an `m × n` matrix.
    #[must_use]
    pub fn kernel(&self, a: &DMatrix<f64>, b: &DMatrix<f64>) -> DMatrix<f64> {
        self.kernel.matrix(a, b)
    }

    /// Posterior predictive mean and marginal variance at each query point.
    ///
    /// `x_s` must be a column array `(s, 1)`. Both returned vectors have
    /// length `s`. Variances are the diagonal of the posterior covariance
    /// and are not clamped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotColumn`] if `x_s` has other than one column.
    pub fn predict(&self, x_s: &DMatrix<f64>) -> Result<(DVector<f64>, DVector<f64>)> {
        if x_s.ncols() != 1 {
            return Err(Error::NotColumn {
                name: "X_s",
                rows: x_s.nrows(),
                cols: x_s.ncols(),
            });
        }
        Ok(self.posterior(x_s))
    }

    /// Posterior mean and variance at a single point.
    #[must_use]
    pub fn predict_point(&self, x: f64) -> (f64, f64) {
        let (mean, var) = self.posterior(&DMatrix::from_element(1, 1, x));
        (mean[0], var[0])
    }

    pub(crate) fn posterior(&self, x_s: &DMatrix<f64>) -> (DVector<f64>, DVector<f64>) {
        let x = column(&self.x);
        let y = DVector::from_column_slice(&self.y);
        let k_s = self.kernel.matrix(&x, x_s);
        let k_ss = self.kernel.matrix(x_s, x_s);
        let k_inv = self.inverse_covariance();

        // K⁻¹ K_s, shared by mean and variance.
        let v = &k_inv * &k_s;
        let mean = v.tr_mul(&y);
        let variance = DVector::from_fn(x_s.nrows(), |j, _| {
            k_ss[(j, j)] - k_s.column(j).dot(&v.column(j))
        });

        (mean, variance)
    }

    /// Appends one observation and extends the covariance matrix to match.
    ///
    /// The new row and column are computed with the same kernel expression
    /// used for the full Gram matrix, so the result equals a full
    /// recomputation over the enlarged set.
    pub fn update(&mut self, x_new: f64, y_new: f64) {
        let t = self.x.len();
        let x_old = column(&self.x);
        let x_point = DMatrix::from_element(1, 1, x_new);
        let cross = self.kernel.matrix(&x_old, &x_point);
        let self_cov = self.kernel.matrix(&x_point, &x_point)[(0, 0)];

        let mut k =
            core::mem::replace(&mut self.k, DMatrix::zeros(0, 0)).resize(t + 1, t + 1, 0.0);
        for i in 0..t {
            k[(i, t)] = cross[(i, 0)];
            k[(t, i)] = cross[(i, 0)];
        }
        k[(t, t)] = self_cov;
        self.k = k;

        self.x.push(x_new);
        self.y.push(y_new);
    }

    /// Observed inputs, in sampling order.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Observed outputs, aligned with [`x`](Self::x).
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false`: a model is built from at least one observation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The current Gram matrix `K` over the observed inputs.
    #[must_use]
    pub fn covariance(&self) -> &DMatrix<f64> {
        &self.k
    }

    /// The fixed kernel hyperparameters.
    #[must_use]
    pub fn kernel_params(&self) -> &RbfKernel {
        &self.kernel
    }

    fn inverse_covariance(&self) -> DMatrix<f64> {
        let t = self.k.nrows();
        self.k.clone().try_inverse().unwrap_or_else(|| {
            trace_debug!(observations = t, "covariance matrix is singular");
            DMatrix::from_element(t, t, f64::NAN)
        })
    }
}

/// Shape checks shared by the model and the optimizer.
pub(crate) fn validate_observations(x: &DMatrix<f64>, y: &DMatrix<f64>) -> Result<()> {
    if x.ncols() != 1 {
        return Err(Error::NotColumn {
            name: "X_init",
            rows: x.nrows(),
            cols: x.ncols(),
        });
    }
    if y.ncols() != 1 {
        return Err(Error::NotColumn {
            name: "Y_init",
            rows: y.nrows(),
            cols: y.ncols(),
        });
    }
    if x.nrows() != y.nrows() {
        return Err(Error::ShapeMismatch {
            x_rows: x.nrows(),
            y_rows: y.nrows(),
        });
    }
    if x.nrows() == 0 {
        return Err(Error::EmptyObservations);
    }
    for &v in x.iter() {
        ensure_finite("X_init", v)?;
    }
    Ok(())
}

pub(crate) fn column(values: &[f64]) -> DMatrix<f64> {
    DMatrix::from_column_slice(values.len(), 1, values)
}
