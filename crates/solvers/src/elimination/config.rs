use thiserror::Error;

/// Configuration for the elimination solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pivot_tol: f64,
    check_tol: f64,
}

/// Errors that can occur when validating an elimination config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("pivot_tol must be finite and positive")]
    PivotTol,

    #[error("check_tol must be finite and non-negative")]
    CheckTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pivot_tol: 1e-10,
            check_tol: 0.01,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `pivot_tol` is not a finite positive number, or if
    /// `check_tol` is negative or non-finite.
    pub fn new(pivot_tol: f64, check_tol: f64) -> Result<Self, ConfigError> {
        if !pivot_tol.is_finite() || pivot_tol <= 0.0 {
            return Err(ConfigError::PivotTol);
        }
        if !check_tol.is_finite() || check_tol < 0.0 {
            return Err(ConfigError::CheckTol);
        }

        Ok(Self {
            pivot_tol,
            check_tol,
        })
    }

    /// Magnitude below which a pivot or reduced coefficient counts as zero.
    #[must_use]
    pub fn pivot_tol(&self) -> f64 {
        self.pivot_tol
    }

    /// Largest difference between `lhs` and `c` for an equation to verify.
    #[must_use]
    pub fn check_tol(&self) -> f64 {
        self.check_tol
    }
}
