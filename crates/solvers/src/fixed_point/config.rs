use thiserror::Error;

/// Configuration for fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    step_tol: f64,
    residual_check: f64,
    divergence_bound: f64,
}

/// Errors that can occur when validating a fixed-point config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step_tol must be finite and non-negative")]
    StepTol,

    #[error("residual_check must be finite and non-negative")]
    ResidualCheck,

    #[error("divergence_bound must be finite and positive")]
    DivergenceBound,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 50,
            step_tol: 0.01,
            residual_check: 0.1,
            divergence_bound: 1e10,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is negative or non-finite, or if the
    /// divergence bound is not a finite positive number.
    pub fn new(
        max_iters: usize,
        step_tol: f64,
        residual_check: f64,
        divergence_bound: f64,
    ) -> Result<Self, ConfigError> {
        if !step_tol.is_finite() || step_tol < 0.0 {
            return Err(ConfigError::StepTol);
        }
        if !residual_check.is_finite() || residual_check < 0.0 {
            return Err(ConfigError::ResidualCheck);
        }
        if !divergence_bound.is_finite() || divergence_bound <= 0.0 {
            return Err(ConfigError::DivergenceBound);
        }

        Ok(Self {
            max_iters,
            step_tol,
            residual_check,
            divergence_bound,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the step size `|x_next − x|` below which iteration stops.
    #[must_use]
    pub fn step_tol(&self) -> f64 {
        self.step_tol
    }

    /// Returns the largest `|f(x)|` accepted for the final iterate.
    #[must_use]
    pub fn residual_check(&self) -> f64 {
        self.residual_check
    }

    /// Returns the magnitude beyond which an iterate counts as diverged.
    #[must_use]
    pub fn divergence_bound(&self) -> f64 {
        self.divergence_bound
    }
}
