//! Secant root finding.
//!
//! # Algorithm
//!
//! Two guesses define a secant line; its zero crossing becomes the next guess
//! and the oldest one is dropped. Unlike false position, no bracket is kept,
//! so the iterates may wander outside the starting interval.
//!
//! The solve converges as soon as either the step `|x_next − x_curr|` or the
//! residual `|f(x_next)|` falls below the tolerance. A secant line flatter
//! than `flat_tol` stops the solve with [`Failure::DivisionByZero`]; the
//! iteration that hit it has no `x_next` and is not recorded.
//!
//! # Observer Events
//!
//! The observer sees each [`Iteration`] right after it is computed. Returning
//! [`Action::StopEarly`] ends the solve with [`Status::StoppedByObserver`],
//! unless that same iteration converged.

mod config;
mod error;
mod solution;

pub use config::{Config, ConfigError};
pub use error::Failure;
pub use solution::{Iteration, Solution, Status};

use rootwork_core::{Equation, Observer, Trace};

use crate::Action;

/// Finds a root of `equation` by the secant method, starting from `x0` and `x1`.
pub fn solve<E, Obs>(
    equation: &E,
    x0: f64,
    x1: f64,
    config: &Config,
    mut observer: Obs,
) -> Solution
where
    E: Equation,
    Obs: Observer<Iteration, Action>,
{
    if (x1 - x0).abs() < config.flat_tol() {
        let failure = Failure::IdenticalGuesses { x0, x1 };
        log::debug!("secant: {failure}");
        return Solution::failed(failure, Trace::default());
    }

    let mut trace = Trace::with_capacity(config.max_iters());

    let (mut x_prev, mut f_prev) = (x0, equation.value(x0));
    let (mut x_curr, mut f_curr) = (x1, equation.value(x1));

    for iter in 1..=config.max_iters() {
        let denom = f_curr - f_prev;
        if denom.abs() < config.flat_tol() {
            let failure = Failure::DivisionByZero { iter };
            log::debug!("secant: {failure}, f({x_prev}) = f({x_curr}) = {f_curr}");
            return Solution::failed(failure, trace);
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / denom;
        let f_next = equation.value(x_next);

        let row = Iteration {
            iter,
            x_prev,
            x_curr,
            f_prev,
            f_curr,
            x_next,
            error: (x_next - x_curr).abs(),
        };
        log::trace!("secant #{iter}: x_next = {x_next}, f(x_next) = {f_next}");

        let action = observer.observe(&row);
        trace.push(row);

        if row.error < config.tol() || f_next.abs() < config.tol() {
            log::debug!("secant: converged to {x_next} in {iter} iterations");
            return Solution {
                status: Status::Converged,
                root: Some(x_next),
                trace,
            };
        }

        if let Some(Action::StopEarly) = action {
            log::debug!("secant: stopped by observer after {iter} iterations");
            return Solution {
                status: Status::StoppedByObserver,
                root: None,
                trace,
            };
        }

        (x_prev, f_prev) = (x_curr, f_curr);
        (x_curr, f_curr) = (x_next, f_next);
    }

    let failure = Failure::MaxIters {
        iters: config.max_iters(),
    };
    log::debug!("secant: {failure}");
    Solution::failed(failure, trace)
}

/// Runs the secant method without observation.
pub fn solve_unobserved<E: Equation>(equation: &E, x0: f64, x1: f64, config: &Config) -> Solution {
    solve(equation, x0, x1, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootwork_core::Exponential;

    #[test]
    fn finds_root_of_exponential() {
        let equation = Exponential::new(1.0, 2.0);

        let solution = solve_unobserved(&equation, 0.0, 2.0, &Config::default());

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters(), 7);
        let root = solution.root.expect("converged");
        assert_relative_eq!(root, 1.146_172, epsilon = 1e-6);
        assert_eq!(solution.failed_at(), None);
    }

    #[test]
    fn first_row_uses_the_given_guesses() {
        let equation = Exponential::new(1.0, 2.0);

        let solution = solve_unobserved(&equation, 0.0, 2.0, &Config::default());
        let first = solution.trace[0];

        assert_eq!(first.iter, 1);
        assert_relative_eq!(first.x_prev, 0.0);
        assert_relative_eq!(first.x_curr, 2.0);
        assert_relative_eq!(first.f_prev, -1.0);
        assert_relative_eq!(first.x_next, 0.455_678_841_855_605, epsilon = 1e-12);
        assert_relative_eq!(first.error, 2.0 - first.x_next);
    }

    #[test]
    fn window_shifts_between_rows() {
        let equation = Exponential::new(1.0, 2.0);

        let solution = solve_unobserved(&equation, 0.0, 2.0, &Config::default());

        for pair in solution.trace.rows().windows(2) {
            assert_relative_eq!(pair[1].x_prev, pair[0].x_curr);
            assert_relative_eq!(pair[1].x_curr, pair[0].x_next);
            assert_relative_eq!(pair[1].f_prev, pair[0].f_curr);
        }
    }

    #[test]
    fn rejects_identical_guesses() {
        let equation = Exponential::new(1.0, 2.0);

        let solution = solve_unobserved(&equation, 1.0, 1.0, &Config::default());

        assert_eq!(
            solution.status,
            Status::Failed(Failure::IdenticalGuesses { x0: 1.0, x1: 1.0 })
        );
        assert!(solution.trace.is_empty());
    }

    #[test]
    fn flat_secant_keeps_earlier_rows() {
        // Saturates at 1 above ln 3, where the second step lands.
        let equation = |x: f64| (x.exp() - 2.0).min(1.0);

        let solution = solve_unobserved(&equation, -2.0, -1.0, &Config::default());

        assert_eq!(
            solution.status,
            Status::Failed(Failure::DivisionByZero { iter: 3 })
        );
        assert_eq!(solution.failed_at(), Some(3));
        assert_eq!(solution.iters(), 2);
        assert!(solution.root.is_none());
    }

    #[test]
    fn flat_secant_on_first_iteration() {
        // eˣ is below 1e-10 on both guesses.
        let equation = Exponential::new(0.0, 0.0);

        let solution = solve_unobserved(&equation, -40.0, -50.0, &Config::default());

        assert_eq!(solution.failed_at(), Some(1));
        assert!(solution.trace.is_empty());
    }

    #[test]
    fn reports_iteration_limit() {
        let equation = Exponential::new(1.0, 2.0);
        let config = Config::new(1, 1e-4, 1e-10).expect("valid config");

        let solution = solve_unobserved(&equation, 0.0, 2.0, &config);

        assert_eq!(
            solution.status,
            Status::Failed(Failure::MaxIters { iters: 1 })
        );
        assert_eq!(solution.iters(), 1);
    }

    #[test]
    fn observer_can_stop_iteration() {
        let equation = Exponential::new(1.0, 2.0);

        let mut seen = Vec::new();
        let observer = |row: &Iteration| {
            seen.push(row.iter);
            (row.iter == 2).then_some(Action::StopEarly)
        };

        let solution = solve(&equation, 0.0, 2.0, &Config::default(), observer);

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters(), 2);
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn stop_on_converged_row_keeps_root() {
        let equation = Exponential::new(1.0, 2.0);
        let observer = |row: &Iteration| (row.iter == 7).then_some(Action::StopEarly);

        let solution = solve(&equation, 0.0, 2.0, &Config::default(), observer);

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters(), 7);
        assert_relative_eq!(solution.root.expect("converged"), 1.146_172, epsilon = 1e-6);
    }

    #[test]
    fn rejects_invalid_config() {
        assert_eq!(Config::new(100, -1.0, 1e-10), Err(ConfigError::Tol));
        assert_eq!(Config::new(100, 1e-4, f64::NAN), Err(ConfigError::FlatTol));
        assert_eq!(Config::new(100, 1e-4, 0.0), Err(ConfigError::FlatTol));
        assert!(Config::new(100, 0.0, 1e-10).is_ok());
    }
}
