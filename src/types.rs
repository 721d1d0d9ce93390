//! Core types shared by the model and the optimizer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The direction of optimization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Minimize the objective value.
    #[default]
    Minimize,
    /// Maximize the objective value.
    Maximize,
}

impl Direction {
    /// Returns `true` when minimizing.
    #[must_use]
    pub fn is_minimize(self) -> bool {
        self == Direction::Minimize
    }

    /// Index of the best value in `values`, earliest occurrence on ties.
    ///
    /// NaN entries are never selected unless every entry is NaN, in which
    /// case index 0 is returned. Returns `None` for an empty slice.
    #[must_use]
    pub fn best_index(self, values: &[f64]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &v) in values.iter().enumerate() {
            if v.is_nan() {
                continue;
            }
            match best {
                None => best = Some(i),
                Some(b) => {
                    let better = match self {
                        Direction::Minimize => v < values[b],
                        Direction::Maximize => v > values[b],
                    };
                    if better {
                        best = Some(i);
                    }
                }
            }
        }
        best.or(if values.is_empty() { None } else { Some(0) })
    }

    /// The best value in `values`, or `None` for an empty slice.
    #[must_use]
    pub fn best_value(self, values: &[f64]) -> Option<f64> {
        self.best_index(values).map(|i| values[i])
    }
}

/// How an optimization run ended.
///
/// All variants lead to the same final best-pair selection; they only
/// record why the loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    /// The acquisition maximum landed on an already-sampled candidate.
    Converged,
    /// The iteration budget was used up.
    Exhausted,
    /// The objective asked to stop via
    /// [`after_evaluation`](crate::Objective::after_evaluation).
    Stopped,
}
