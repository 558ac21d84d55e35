use thiserror::Error;

/// Configuration for the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tol: f64,
    flat_tol: f64,
}

/// Errors that can occur when validating a secant config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and non-negative")]
    Tol,

    #[error("flat_tol must be finite and positive")]
    FlatTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tol: 1e-4,
            flat_tol: 1e-10,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite, or if `flat_tol`
    /// is not a finite positive number.
    pub fn new(max_iters: usize, tol: f64, flat_tol: f64) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol < 0.0 {
            return Err(ConfigError::Tol);
        }
        if !flat_tol.is_finite() || flat_tol <= 0.0 {
            return Err(ConfigError::FlatTol);
        }

        Ok(Self {
            max_iters,
            tol,
            flat_tol,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance applied to both the step and the residual.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the threshold below which two guesses, or two function
    /// values, are treated as equal.
    #[must_use]
    pub fn flat_tol(&self) -> f64 {
        self.flat_tol
    }
}
