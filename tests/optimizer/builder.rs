use std::cell::Cell;

use bayesopt::prelude::*;
use bayesopt::{DEFAULT_LENGTH_SCALE, DEFAULT_SIGNAL_STD, DEFAULT_XSI};
use nalgebra::DMatrix;

use super::column;

fn identity(x: f64) -> Result<f64> {
    Ok(x)
}

#[test]
fn test_builder_defaults() {
    let x = column(&[0.5]);
    let opt = BayesianOptimizer::new(identity, &x, &x, (0.0, 1.0), 11).unwrap();

    assert_eq!(opt.direction(), Direction::Minimize);
    assert!((opt.xsi() - DEFAULT_XSI).abs() < f64::EPSILON);
    let kernel = opt.gp().kernel_params();
    assert!((kernel.length_scale() - DEFAULT_LENGTH_SCALE).abs() < f64::EPSILON);
    assert!((kernel.signal_std() - DEFAULT_SIGNAL_STD).abs() < f64::EPSILON);
    assert_eq!(opt.n_initial(), 1);
}

#[test]
fn test_builder_custom_settings() {
    let x = column(&[0.5, 0.7]);
    let opt = BayesianOptimizer::builder(identity, &x, &x, (0.0, 1.0), 11)
        .length_scale(0.6)
        .signal_std(2.0)
        .xsi(0.05)
        .direction(Direction::Maximize)
        .build()
        .unwrap();

    assert_eq!(opt.direction(), Direction::Maximize);
    assert!((opt.xsi() - 0.05).abs() < f64::EPSILON);
    assert!((opt.gp().kernel_params().length_scale() - 0.6).abs() < f64::EPSILON);
    assert!((opt.gp().kernel_params().signal_std() - 2.0).abs() < f64::EPSILON);
    assert_eq!(opt.n_initial(), 2);
}

#[test]
fn test_candidate_grid_spans_bounds() {
    let x = column(&[0.0]);
    let opt = BayesianOptimizer::new(identity, &x, &x, (-2.0, 3.0), 6).unwrap();
    assert_eq!(opt.candidates(), &[-2.0, -1.0, 0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn test_invalid_shape_fails_before_any_evaluation() {
    let calls = Cell::new(0);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        Ok::<_, Error>(x)
    };
    let x = DMatrix::from_element(3, 2, 0.0);
    let y = DMatrix::from_element(3, 1, 0.0);

    let result = BayesianOptimizer::new(f, &x, &y, (0.0, 1.0), 10);
    assert!(matches!(
        result,
        Err(Error::NotColumn {
            name: "X_init",
            rows: 3,
            cols: 2
        })
    ));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_y_shape_must_match_x() {
    let x = column(&[0.0, 1.0]);
    let y_wide = DMatrix::from_element(2, 2, 0.0);
    let y_short = column(&[0.0]);
    assert!(matches!(
        BayesianOptimizer::new(identity, &x, &y_wide, (0.0, 1.0), 10),
        Err(Error::NotColumn { name: "Y_init", .. })
    ));
    assert!(matches!(
        BayesianOptimizer::new(identity, &x, &y_short, (0.0, 1.0), 10),
        Err(Error::ShapeMismatch {
            x_rows: 2,
            y_rows: 1
        })
    ));
}

#[test]
fn test_bounds_must_be_ordered_and_finite() {
    let x = column(&[0.0]);
    assert!(matches!(
        BayesianOptimizer::new(identity, &x, &x, (1.0, 1.0), 10),
        Err(Error::InvalidBounds { .. })
    ));
    assert!(matches!(
        BayesianOptimizer::new(identity, &x, &x, (2.0, -2.0), 10),
        Err(Error::InvalidBounds { .. })
    ));
    assert!(matches!(
        BayesianOptimizer::new(identity, &x, &x, (f64::NAN, 1.0), 10),
        Err(Error::NonFinite { name: "min", .. })
    ));
    assert!(matches!(
        BayesianOptimizer::new(identity, &x, &x, (0.0, f64::INFINITY), 10),
        Err(Error::NonFinite { name: "max", .. })
    ));
}

#[test]
fn test_ac_samples_must_be_positive() {
    let x = column(&[0.0]);
    assert!(matches!(
        BayesianOptimizer::new(identity, &x, &x, (0.0, 1.0), 0),
        Err(Error::InvalidSamples)
    ));
}

#[test]
fn test_kernel_parameters_must_be_positive() {
    let x = column(&[0.0]);
    assert!(matches!(
        BayesianOptimizer::builder(identity, &x, &x, (0.0, 1.0), 10)
            .length_scale(0.0)
            .build(),
        Err(Error::InvalidKernelParameter { name: "l", .. })
    ));
    assert!(matches!(
        BayesianOptimizer::builder(identity, &x, &x, (0.0, 1.0), 10)
            .signal_std(-1.0)
            .build(),
        Err(Error::InvalidKernelParameter { name: "sigma_f", .. })
    ));
}

#[test]
fn test_xsi_must_be_non_negative_and_finite() {
    let x = column(&[0.0]);
    assert!(matches!(
        BayesianOptimizer::builder(identity, &x, &x, (0.0, 1.0), 10)
            .xsi(-0.1)
            .build(),
        Err(Error::InvalidXsi(_))
    ));
    assert!(matches!(
        BayesianOptimizer::builder(identity, &x, &x, (0.0, 1.0), 10)
            .xsi(f64::NAN)
            .build(),
        Err(Error::NonFinite { name: "xsi", .. })
    ));
    assert!(
        BayesianOptimizer::builder(identity, &x, &x, (0.0, 1.0), 10)
            .xsi(0.0)
            .build()
            .is_ok()
    );
}

#[test]
fn test_error_messages_are_descriptive() {
    let x = DMatrix::from_element(3, 2, 0.0);
    let err = BayesianOptimizer::new(identity, &x, &x, (0.0, 1.0), 10)
        .err()
        .unwrap();
    assert_eq!(
        err.to_string(),
        "X_init must be a column array of shape (t, 1), got (3, 2)"
    );
}
