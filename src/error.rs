/// Errors produced while configuring or running a Bayesian optimization.
///
/// Every variant except [`Error::Objective`] is a validation failure raised
/// before any Gaussian Process computation takes place. None of them are
/// retryable: fix the call and try again.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when an input that must be a column array `(t, 1)` is not.
    #[error("{name} must be a column array of shape (t, 1), got ({rows}, {cols})")]
    NotColumn {
        /// Which input was malformed.
        name: &'static str,
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns supplied.
        cols: usize,
    },

    /// Returned when the inputs and outputs have a different number of rows.
    #[error("shape mismatch: X has {x_rows} rows but Y has {y_rows}")]
    ShapeMismatch {
        /// Rows in the input array.
        x_rows: usize,
        /// Rows in the output array.
        y_rows: usize,
    },

    /// Returned when the initial observation set is empty.
    #[error("at least one initial observation is required")]
    EmptyObservations,

    /// Returned when a value that must be a finite real number is NaN or infinite.
    #[error("{name} must be a finite number, got {value}")]
    NonFinite {
        /// The name of the offending value.
        name: &'static str,
        /// The value supplied.
        value: f64,
    },

    /// Returned when the search interval is empty or reversed.
    #[error("invalid bounds: min ({low}) must be less than max ({high})")]
    InvalidBounds {
        /// The lower bound.
        low: f64,
        /// The upper bound.
        high: f64,
    },

    /// Returned when the candidate grid would have no points.
    #[error("ac_samples must be a positive integer")]
    InvalidSamples,

    /// Returned when `optimize` is asked to run zero iterations.
    #[error("iterations must be a positive integer")]
    InvalidIterations,

    /// Returned when a kernel hyperparameter is not strictly positive.
    #[error("kernel parameter {name} must be positive, got {value}")]
    InvalidKernelParameter {
        /// `"l"` or `"sigma_f"`.
        name: &'static str,
        /// The value supplied.
        value: f64,
    },

    /// Returned when the exploration margin is negative.
    #[error("invalid xsi: {0} must be non-negative")]
    InvalidXsi(f64),

    /// Returned when the objective function fails during `optimize`.
    ///
    /// Observations recorded before the failure remain in the model.
    #[error("objective evaluation failed: {0}")]
    Objective(String),
}

/// A `Result` alias using this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Require a finite real number.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFinite { name, value })
    }
}
