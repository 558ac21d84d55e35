use std::fmt;

use rootwork_core::{Numbered, Trace};

use super::Failure;

/// One row of the fixed-point table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iteration {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// The iterate `x` that `g` was applied to.
    pub x: f64,
    /// `g(x)`, or `None` if `x` was outside the domain of `g`.
    pub x_next: Option<f64>,
    /// `|x_next − x|`, or `None` if `g(x)` was undefined.
    pub error: Option<f64>,
}

impl Numbered for Iteration {
    fn iter(&self) -> usize {
        self.iter
    }
}

/// How a fixed-point iteration ended.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The final iterate passed the residual check.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,

    /// The iteration failed; the trace holds every iteration that ran.
    Failed(Failure),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converged => f.write_str("converged"),
            Self::StoppedByObserver => f.write_str("stopped by observer"),
            Self::Failed(failure) => write!(f, "failed: {failure}"),
        }
    }
}

/// The result of a fixed-point iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The root, present only when the iteration converged.
    pub root: Option<f64>,

    /// The last accepted iterate (the initial guess if none was accepted).
    pub x: f64,

    /// `f(x)` of the original equation at `x`.
    pub residual: f64,

    /// Every iteration, in order.
    pub trace: Trace<Iteration>,
}

impl Solution {
    /// Returns the number of iterations that ran.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.trace.len()
    }

    /// Returns the failure, if the iteration failed.
    #[must_use]
    pub fn failure(&self) -> Option<Failure> {
        match self.status {
            Status::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}
