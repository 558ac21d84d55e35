use thiserror::Error;

use super::InvalidMethodId;

/// Ways a fixed-point iteration can fail.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Failure {
    #[error("invalid method id {id}: expected 1 to 5")]
    InvalidMethodId { id: u8 },

    /// `g(x)` was undefined, non-finite, or beyond the divergence bound.
    #[error("diverged at iteration {iter}")]
    Diverged { iter: usize },

    /// Iteration settled, but the final iterate does not satisfy the equation.
    #[error("did not converge to a root: f({x}) = {residual}")]
    NotAConvergedRoot { x: f64, residual: f64 },
}

impl From<InvalidMethodId> for Failure {
    fn from(err: InvalidMethodId) -> Self {
        Self::InvalidMethodId { id: err.id }
    }
}
