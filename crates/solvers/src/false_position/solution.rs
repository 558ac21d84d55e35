use std::fmt;

use rootwork_core::{Numbered, Trace};

use super::Failure;

/// One row of the false position table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iteration {
    /// Iteration counter (1-based).
    pub iter: usize,
    pub x0: f64,
    pub x1: f64,
    /// Where the chord through `(x0, f0)` and `(x1, f1)` crosses zero.
    pub x2: f64,
    pub f0: f64,
    pub f1: f64,
    pub f2: f64,
    /// `|f2|`, the quantity tested against the residual tolerance.
    pub error: f64,
}

impl Numbered for Iteration {
    fn iter(&self) -> usize {
        self.iter
    }
}

/// How a false position solve ended.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// `|f(x2)|` dropped below the residual tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,

    /// The solve failed; the trace holds every iteration that ran.
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

/// The result of a false position solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The root, present only when the solve converged.
    pub root: Option<f64>,

    /// Every iteration, in order.
    pub trace: Trace<Iteration>,
}

impl Solution {
    pub(super) fn failed(failure: Failure, trace: Trace<Iteration>) -> Self {
        Self {
            status: Status::Failed(failure),
            root: None,
            trace,
        }
    }

    /// Returns the number of iterations that ran.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.trace.len()
    }

    /// Returns the failure, if the solve failed.
    #[must_use]
    pub fn failure(&self) -> Option<Failure> {
        match self.status {
            Status::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}
