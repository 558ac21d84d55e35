//! Fixed-point iteration on rearrangements of a nonlinear equation.
//!
//! # Algorithm
//!
//! The equation `f(x) = 0` is rewritten as `x = g(x)` using one of five
//! [`Rearrangement`]s per equation family, and `x ← g(x)` is repeated until
//! the step `|g(x) − x|` drops below the step tolerance. The last accepted
//! iterate is then checked against the original equation: a residual larger
//! than the configured check ends in [`Failure::NotAConvergedRoot`], since
//! some forms have fixed points that are not roots.
//!
//! An iterate is rejected as [`Failure::Diverged`] when `g` is undefined at
//! the current `x`, or when `g(x)` is non-finite or larger in magnitude than
//! the divergence bound. The diverging iteration is still recorded.
//!
//! Running out of iterations is not itself a failure. The last iterate goes
//! through the same residual check as a settled one.
//!
//! # Observer Events
//!
//! The observer sees each [`Iteration`] right after it is computed. Returning
//! [`Action::StopEarly`] ends the solve with [`Status::StoppedByObserver`],
//! unless that same iteration diverged or settled. A settled iteration still
//! goes through the residual check.
//!
//! When stopped, `x` is the last iterate produced, `g(x)` of the stopping row.

mod config;
mod error;
mod exponential;
mod quadratic;
mod rearrangement;
mod solution;

pub use config::{Config, ConfigError};
pub use error::Failure;
pub use exponential::ExponentialForm;
pub use quadratic::QuadraticForm;
pub use rearrangement::{InvalidMethodId, Rearrangement, Unmet};
pub use solution::{Iteration, Solution, Status};

use rootwork_core::{Equation, Exponential, Observer, Quadratic, Trace};

use crate::Action;

/// An equation of either supported family, for selecting a form by id.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    Quadratic(Quadratic),
    Exponential(Exponential),
}

/// Iterates `x = g(x)` from `x0`, where `g` is `form` applied to `equation`.
pub fn solve<R, Obs>(
    equation: &R::Equation,
    form: R,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Solution
where
    R: Rearrangement,
    Obs: Observer<Iteration, Action>,
{
    let mut trace = Trace::with_capacity(config.max_iters());
    let mut x = x0;

    for iter in 1..=config.max_iters() {
        let next = form.apply(equation, x);
        let row = Iteration {
            iter,
            x,
            x_next: next,
            error: next.map(|n| (n - x).abs()),
        };
        log::trace!("fixed point ({form}) #{iter}: x = {x}, g(x) = {next:?}");

        let action = observer.observe(&row);
        trace.push(row);

        let Some(next) = next.filter(|n| n.is_finite() && n.abs() <= config.divergence_bound())
        else {
            let failure = Failure::Diverged { iter };
            log::debug!("fixed point ({form}): {failure}");
            return Solution {
                status: Status::Failed(failure),
                root: None,
                x,
                residual: equation.value(x),
                trace,
            };
        };

        x = next;
        if (next - row.x).abs() < config.step_tol() {
            break;
        }

        if let Some(Action::StopEarly) = action {
            log::debug!("fixed point ({form}): stopped by observer after {iter} iterations");
            return Solution {
                status: Status::StoppedByObserver,
                root: None,
                x,
                residual: equation.value(x),
                trace,
            };
        }
    }

    verify(equation, x, config, trace)
}

/// Runs fixed-point iteration without observation.
pub fn solve_unobserved<R: Rearrangement>(
    equation: &R::Equation,
    form: R,
    x0: f64,
    config: &Config,
) -> Solution {
    solve(equation, form, x0, config, ())
}

/// Runs fixed-point iteration with the form selected by its 1-based id.
///
/// An id outside `1..=5` fails with [`Failure::InvalidMethodId`] before any
/// iteration runs.
pub fn solve_by_id(family: &Family, method_id: u8, x0: f64, config: &Config) -> Solution {
    match family {
        Family::Quadratic(equation) => match QuadraticForm::try_from(method_id) {
            Ok(form) => solve_unobserved(equation, form, x0, config),
            Err(err) => rejected(equation, x0, err),
        },
        Family::Exponential(equation) => match ExponentialForm::try_from(method_id) {
            Ok(form) => solve_unobserved(equation, form, x0, config),
            Err(err) => rejected(equation, x0, err),
        },
    }
}

fn rejected<E: Equation>(equation: &E, x0: f64, err: InvalidMethodId) -> Solution {
    log::debug!("fixed point: {err}");
    Solution {
        status: Status::Failed(err.into()),
        root: None,
        x: x0,
        residual: equation.value(x0),
        trace: Trace::default(),
    }
}

/// Checks the final iterate against the original equation.
fn verify<E: Equation>(equation: &E, x: f64, config: &Config, trace: Trace<Iteration>) -> Solution {
    let residual = equation.value(x);

    // A NaN residual must fail the check too.
    if !(residual.abs() <= config.residual_check()) {
        let failure = Failure::NotAConvergedRoot { x, residual };
        log::debug!("fixed point: {failure}");
        return Solution {
            status: Status::Failed(failure),
            root: None,
            x,
            residual,
            trace,
        };
    }

    log::debug!("fixed point: converged to {x} in {} iterations", trace.len());
    Solution {
        status: Status::Converged,
        root: Some(x),
        x,
        residual,
        trace,
    }
}
