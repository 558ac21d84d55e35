use std::fmt;

use rootwork_core::{Numbered, Trace};

use super::Failure;

/// One row of the secant table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iteration {
    /// Iteration counter (1-based).
    pub iter: usize,
    pub x_prev: f64,
    pub x_curr: f64,
    pub f_prev: f64,
    pub f_curr: f64,
    pub x_next: f64,
    /// `|x_next − x_curr|`.
    pub error: f64,
}

impl Numbered for Iteration {
    fn iter(&self) -> usize {
        self.iter
    }
}

/// How a secant solve ended.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Either the step or `|f(x_next)|` dropped below the tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,

    /// The solve failed; the trace holds every iteration that completed.
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

/// The result of a secant solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The root, present only when the solve converged.
    pub root: Option<f64>,

    /// Every completed iteration, in order.
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

    /// Returns the number of completed iterations.
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

    /// Returns the iteration that hit a flat secant, if any.
    ///
    /// That iteration has no row in the trace.
    #[must_use]
    pub fn failed_at(&self) -> Option<usize> {
        match self.status {
            Status::Failed(Failure::DivisionByZero { iter }) => Some(iter),
            _ => None,
        }
    }
}
