use core::ops::ControlFlow;

use bayesopt::prelude::*;

use super::column;

struct StopAfter {
    remaining: usize,
    seen: Vec<f64>,
}

impl Objective for StopAfter {
    type Error = Error;

    fn evaluate(&mut self, x: f64) -> Result<f64> {
        self.seen.push(x);
        Ok((x - 1.0).powi(2))
    }

    fn after_evaluation(&mut self, _x: f64, _y: f64) -> ControlFlow<()> {
        self.remaining -= 1;
        if self.remaining == 0 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

#[test]
fn test_after_evaluation_stops_the_run() {
    let x = column(&[-3.0]);
    let y = column(&[16.0]);
    let objective = StopAfter {
        remaining: 3,
        seen: Vec::new(),
    };
    let mut opt = BayesianOptimizer::new(objective, &x, &y, (-3.0, 3.0), 61).unwrap();

    let best = opt.optimize(50).unwrap();

    assert_eq!(best.termination, Termination::Stopped);
    assert_eq!(best.evaluations, 3);
    // The stopping evaluation is still recorded.
    assert_eq!(opt.gp().len(), 4);
    assert_eq!(opt.objective().seen.len(), 3);
}

#[test]
fn test_objective_error_propagates_and_keeps_observations() {
    let mut calls = 0;
    let f = |x: f64| {
        calls += 1;
        if calls == 3 {
            Err("sensor offline".to_string())
        } else {
            Ok(x.sin())
        }
    };
    let x = column(&[0.0]);
    let y = column(&[0.0]);
    let mut opt = BayesianOptimizer::new(f, &x, &y, (-3.0, 3.0), 61).unwrap();

    let err = opt.optimize(10).unwrap_err();

    assert!(matches!(&err, Error::Objective(msg) if msg == "sensor offline"));
    assert_eq!(opt.gp().len(), 3);
    assert_eq!(opt.gp().x().len(), opt.gp().y().len());
}

#[test]
fn test_objective_is_only_called_on_grid_points() {
    let mut seen = Vec::new();
    let f = |x: f64| {
        seen.push(x);
        Ok::<_, Error>((x - 0.3).abs())
    };
    let x = column(&[0.0]);
    let y = column(&[0.3]);
    let mut opt = BayesianOptimizer::new(f, &x, &y, (-1.0, 1.0), 21).unwrap();
    opt.optimize(8).unwrap();
    let grid = opt.candidates().to_vec();
    drop(opt);

    assert!(!seen.is_empty());
    for x in &seen {
        assert!(grid.contains(x), "{x} is not a grid point");
    }
}
