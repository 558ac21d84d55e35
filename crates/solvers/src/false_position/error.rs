use thiserror::Error;

/// Ways a false position solve can fail.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Failure {
    #[error("f(x0) and f(x1) must have opposite signs: f({x0}) = {f0}, f({x1}) = {f1}")]
    NoBracket { x0: f64, x1: f64, f0: f64, f1: f64 },

    #[error("did not converge in {iters} iterations")]
    MaxIters { iters: usize },
}
