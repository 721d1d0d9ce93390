//! Radial basis function covariance.

use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result, ensure_finite};

/// Default length scale `l`.
pub const DEFAULT_LENGTH_SCALE: f64 = 1.0;
/// Default signal standard deviation `sigma_f`.
pub const DEFAULT_SIGNAL_STD: f64 = 1.0;

/// Squared-exponential (RBF) kernel with fixed hyperparameters.
///
/// `k(a, b) = sigma_f² exp(-‖a - b‖² / (2 l²))`
///
/// Point sets are matrices whose rows are points. The model only ever
/// passes single-column matrices, but the distance expansion works for
/// any number of columns as long as both sides agree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RbfKernel {
    length_scale: f64,
    signal_std: f64,
}

impl RbfKernel {
    /// Creates a kernel with length scale `l` and signal standard deviation `sigma_f`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFinite`] for NaN or infinite values and
    /// [`Error::InvalidKernelParameter`] when either value is not positive.
    pub fn new(length_scale: f64, signal_std: f64) -> Result<Self> {
        ensure_finite("l", length_scale)?;
        ensure_finite("sigma_f", signal_std)?;
        if length_scale <= 0.0 {
            return Err(Error::InvalidKernelParameter {
                name: "l",
                value: length_scale,
            });
        }
        if signal_std <= 0.0 {
            return Err(Error::InvalidKernelParameter {
                name: "sigma_f",
                value: signal_std,
            });
        }
        Ok(Self {
            length_scale,
            signal_std,
        })
    }

    /// The length scale `l`.
    #[must_use]
    pub fn length_scale(&self) -> f64 {
        self.length_scale
    }

    /// The signal standard deviation `sigma_f`.
    #[must_use]
    pub fn signal_std(&self) -> f64 {
        self.signal_std
    }

    /// Prior variance `sigma_f²`, the kernel's value at zero distance.
    #[must_use]
    pub fn signal_variance(&self) -> f64 {
        self.signal_std * self.signal_std
    }

    /// Pairwise covariance between the rows of `a` (m points) and `b` (n points).
    ///
    /// Returns an `m × n` matrix. Squared distances use the expansion
    /// `‖a‖² + ‖b‖² - 2 a·bᵀ`.
    ///
    /// # Panics
    ///
    /// Panics if `a` and `b` have a different number of columns.
    #[must_use]
    pub fn matrix(&self, a: &DMatrix<f64>, b: &DMatrix<f64>) -> DMatrix<f64> {
        assert_eq!(
            a.ncols(),
            b.ncols(),
            "kernel inputs must have the same dimensionality"
        );
        let sq_a = row_sq_norms(a);
        let sq_b = row_sq_norms(b);
        let cross = a * b.transpose();
        let scale = -0.5 / (self.length_scale * self.length_scale);
        let var = self.signal_variance();
        DMatrix::from_fn(a.nrows(), b.nrows(), |i, j| {
            let sq_dist = sq_a[i] + sq_b[j] - 2.0 * cross[(i, j)];
            var * (scale * sq_dist).exp()
        })
    }
}

impl Default for RbfKernel {
    fn default() -> Self {
        Self {
            length_scale: DEFAULT_LENGTH_SCALE,
            signal_std: DEFAULT_SIGNAL_STD,
        }
    }
}

fn row_sq_norms(m: &DMatrix<f64>) -> DVector<f64> {
    DVector::from_fn(m.nrows(), |i, _| m.row(i).norm_squared())
}
