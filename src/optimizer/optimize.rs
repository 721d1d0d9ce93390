use core::ops::ControlFlow;

use crate::error::{Error, Result};
use crate::objective::Objective;
use crate::types::Termination;

use super::{BayesianOptimizer, Optimum};

impl<F: Objective> BayesianOptimizer<F> {
    /// Run up to `iterations` acquire-evaluate-update steps.
    ///
    /// Each step takes the acquisition maximum. If that candidate has
    /// already been evaluated (exact equality) the loop stops as converged.
    /// Otherwise the objective is evaluated there and the observation is
    /// added to the model. Calling `optimize` again continues from the
    /// current model.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidIterations`] if `iterations` is 0.
    /// - [`Error::Objective`] if the objective fails. Observations made
    ///   before the failure are kept.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn optimize(&mut self, iterations: usize) -> Result<Optimum> {
        if iterations == 0 {
            return Err(Error::InvalidIterations);
        }

        #[cfg(feature = "tracing")]
        let _span =
            tracing::info_span!("optimize", iterations, direction = ?self.direction).entered();

        let mut termination = Termination::Exhausted;
        let mut evaluations = 0;

        for iteration in 0..iterations {
            let x_next = self.acquisition().x_next;

            if self.gp.x().contains(&x_next) {
                trace_debug!(iteration, x = x_next, "candidate already sampled");
                termination = Termination::Converged;
                break;
            }

            let y_next = self
                .f
                .evaluate(x_next)
                .map_err(|e| Error::Objective(e.to_string()))?;
            self.gp.update(x_next, y_next);
            evaluations += 1;
            trace_debug!(iteration, x = x_next, y = y_next, "objective evaluated");

            if let ControlFlow::Break(()) = self.f.after_evaluation(x_next, y_next) {
                termination = Termination::Stopped;
                break;
            }
        }

        let (x, y) = self.best();
        trace_info!(?termination, evaluations, x, y, "optimization finished");

        Ok(Optimum {
            x,
            y,
            termination,
            evaluations,
        })
    }
}
