use thiserror::Error;

/// Configuration for the false position solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
}

/// Errors that can occur when validating a false position config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 50,
            residual_tol: 1e-4,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` is negative or non-finite.
    pub fn new(max_iters: usize, residual_tol: f64) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }

        Ok(Self {
            max_iters,
            residual_tol,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the bound on `|f(x2)|` that counts as converged.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}
