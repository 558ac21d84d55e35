//! False position (regula falsi) root finding.
//!
//! # Algorithm
//!
//! Starting from two points whose function values have opposite signs, each
//! iteration draws the chord through both endpoints, takes its zero crossing
//! `x2` as the next estimate, and replaces the endpoint that keeps the sign
//! change. Iteration stops as soon as `|f(x2)|` drops below the residual
//! tolerance; the width of the bracket is never tested.
//!
//! # Observer Events
//!
//! The observer sees each [`Iteration`] right after it is computed. Returning
//! [`Action::StopEarly`] ends the solve with [`Status::StoppedByObserver`],
//! unless that same iteration converged.

mod bracket;
mod config;
mod error;
mod solution;

pub use config::{Config, ConfigError};
pub use error::Failure;
pub use solution::{Iteration, Solution, Status};

use rootwork_core::{Equation, Observer, Trace};

use crate::Action;

use bracket::Bracket;

/// Finds a root of `equation` between `x0` and `x1` by false position.
///
/// The status is [`Failure::NoBracket`] with an empty trace if `f(x0)` and
/// `f(x1)` do not have strictly opposite signs, and [`Failure::MaxIters`] if
/// the residual tolerance is never met.
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
    let mut bracket = match Bracket::new(x0, equation.value(x0), x1, equation.value(x1)) {
        Ok(bracket) => bracket,
        Err(failure) => {
            log::debug!("false position: {failure}");
            return Solution::failed(failure, Trace::default());
        }
    };

    let mut trace = Trace::with_capacity(config.max_iters());

    for iter in 1..=config.max_iters() {
        let x2 = bracket.chord_root();
        let f2 = equation.value(x2);

        let row = Iteration {
            iter,
            x0: bracket.x0,
            x1: bracket.x1,
            x2,
            f0: bracket.f0,
            f1: bracket.f1,
            f2,
            error: f2.abs(),
        };
        log::trace!("false position #{iter}: x2 = {x2}, f(x2) = {f2}");

        let action = observer.observe(&row);
        trace.push(row);

        if row.error < config.residual_tol() {
            log::debug!("false position: converged to {x2} in {iter} iterations");
            return Solution {
                status: Status::Converged,
                root: Some(x2),
                trace,
            };
        }

        if let Some(Action::StopEarly) = action {
            log::debug!("false position: stopped by observer after {iter} iterations");
            return Solution {
                status: Status::StoppedByObserver,
                root: None,
                trace,
            };
        }

        bracket.retain(x2, f2);
    }

    let failure = Failure::MaxIters {
        iters: config.max_iters(),
    };
    log::debug!("false position: {failure}");
    Solution::failed(failure, trace)
}

/// Runs false position without observation.
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
        let root = solution.root.expect("converged");
        assert_relative_eq!(root, 1.1462, epsilon = 1e-3);
        assert!(equation.value(root).abs() < 1e-4);
        assert_relative_eq!(solution.trace.last().unwrap().x2, root);
    }

    #[test]
    fn rejects_interval_without_sign_change() {
        let equation = Exponential::new(0.0, 0.0);

        let solution = solve_unobserved(&equation, 1.0, 2.0, &Config::default());

        assert!(matches!(
            solution.status,
            Status::Failed(Failure::NoBracket { .. })
        ));
        assert!(solution.trace.is_empty());
        assert!(solution.root.is_none());
    }

    #[test]
    fn first_row_uses_the_given_endpoints() {
        let equation = Exponential::new(1.0, 2.0);

        let solution = solve_unobserved(&equation, 0.0, 2.0, &Config::default());
        let first = solution.trace[0];

        assert_eq!(first.iter, 1);
        assert_relative_eq!(first.x0, 0.0);
        assert_relative_eq!(first.x1, 2.0);
        assert_relative_eq!(first.f0, -1.0);
        assert_relative_eq!(first.f1, 2.0_f64.exp() - 4.0);
        assert_relative_eq!(first.error, first.f2.abs());
    }

    #[test]
    fn bracket_keeps_opposite_signs() {
        let equation = Exponential::new(1.0, 2.0);

        let solution = solve_unobserved(&equation, 0.0, 2.0, &Config::default());

        for row in &solution.trace {
            assert!(row.f0 * row.f1 < 0.0, "row {} lost the bracket", row.iter);
        }
    }

    #[test]
    fn reports_iteration_limit() {
        let equation = Exponential::new(1.0, 2.0);
        let config = Config::new(2, 1e-4).expect("valid config");

        let solution = solve_unobserved(&equation, 0.0, 2.0, &config);

        assert_eq!(
            solution.status,
            Status::Failed(Failure::MaxIters { iters: 2 })
        );
        assert_eq!(solution.iters(), 2);
        assert!(solution.root.is_none());
    }

    #[test]
    fn observer_can_stop_iteration() {
        let equation = Exponential::new(1.0, 2.0);

        let mut calls = 0usize;
        let observer = |row: &Iteration| {
            calls += 1;
            if row.iter >= 3 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution = solve(&equation, 0.0, 2.0, &Config::default(), observer);

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters(), 3);
        assert_eq!(calls, 3);
    }

    #[test]
    fn stop_on_converged_row_keeps_root() {
        let equation = Exponential::new(1.0, 2.0);
        let observer = |row: &Iteration| (row.iter == 14).then_some(Action::StopEarly);

        let solution = solve(&equation, 0.0, 2.0, &Config::default(), observer);

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters(), 14);
        assert_relative_eq!(solution.root.expect("converged"), 1.14615, epsilon = 1e-4);
    }

    #[test]
    fn rejects_invalid_config() {
        assert_eq!(Config::new(50, -1e-4), Err(ConfigError::ResidualTol));
        assert_eq!(Config::new(50, f64::INFINITY), Err(ConfigError::ResidualTol));
    }
}
