use thiserror::Error;

/// Ways a secant solve can fail.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Failure {
    #[error("initial guesses must differ: x0 = {x0}, x1 = {x1}")]
    IdenticalGuesses { x0: f64, x1: f64 },

    /// `f(x_prev)` and `f(x_curr)` were equal, so the secant line is flat.
    #[error("division by zero at iteration {iter}")]
    DivisionByZero { iter: usize },

    #[error("did not converge in {iters} iterations")]
    MaxIters { iters: usize },
}
