//! Gaussian elimination for two linear equations in two unknowns.
//!
//! The first equation is the pivot row: `x` is eliminated from the second
//! equation, the reduced row is solved for `y`, and `y` is substituted back
//! into the first equation to recover `x`. The solver is closed-form and never
//! iterates, so its [`Solution`] holds at most one step of each kind instead
//! of a trace.

mod config;
mod solution;
mod system;

pub use config::{Config, ConfigError};
pub use solution::{BackSubstitution, ForwardElimination, Solution, Status, Verification};
pub use system::{LinearSystem, Row};

/// Solves the system by forward elimination and back substitution.
///
/// The status is [`Status::DegenerateLeadingCoefficient`] when `|a1|` is below
/// the pivot tolerance, in which case nothing else is computed. A reduced
/// second row with a zero `y` coefficient classifies the system as dependent
/// or inconsistent depending on whether its constant also vanishes.
#[must_use]
pub fn solve(system: &LinearSystem, config: &Config) -> Solution {
    let tol = config.pivot_tol();
    let &LinearSystem {
        a1,
        b1,
        c1,
        a2,
        b2,
        c2,
    } = system;

    let mut solution = Solution {
        system: *system,
        status: Status::DegenerateLeadingCoefficient,
        forward: None,
        back: None,
        verification: None,
    };

    if a1.abs() < tol {
        log::debug!("elimination: {}", solution.status);
        return solution;
    }

    let multiplier = a2 / a1;
    let forward = ForwardElimination {
        multiplier,
        reduced_b2: b2 - multiplier * b1,
        reduced_c2: c2 - multiplier * c1,
    };
    solution.forward = Some(forward);

    if forward.reduced_b2.abs() < tol {
        solution.status = if forward.reduced_c2.abs() < tol {
            Status::InfiniteSolutions
        } else {
            Status::NoSolution
        };
        log::debug!("elimination: {}", solution.status);
        return solution;
    }

    let y = forward.reduced_c2 / forward.reduced_b2;
    let x_rhs = c1 - b1 * y;
    let x = x_rhs / a1;
    let [lhs1, lhs2] = system.lhs(x, y);

    solution.status = Status::Unique;
    solution.back = Some(BackSubstitution { y, x_rhs, x });
    solution.verification = Some(Verification {
        lhs1,
        lhs2,
        c1,
        c2,
        tolerance: config.check_tol(),
    });

    log::debug!("elimination: {} at x = {x}, y = {y}", solution.status);
    solution
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn solve_default(a1: f64, b1: f64, c1: f64, a2: f64, b2: f64, c2: f64) -> Solution {
        solve(&LinearSystem::new(a1, b1, c1, a2, b2, c2), &Config::default())
    }

    #[test]
    fn solves_unique_system() {
        let solution = solve_default(1.0, 1.0, 3.0, 2.0, 1.0, 4.0);

        assert_eq!(solution.status, Status::Unique);
        assert_relative_eq!(solution.x().unwrap(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(solution.y().unwrap(), 2.0, epsilon = 1e-6);

        let forward = solution.forward.expect("forward step recorded");
        assert_relative_eq!(forward.multiplier, 2.0);
        assert_relative_eq!(forward.reduced_b2, -1.0);
        assert_relative_eq!(forward.reduced_c2, -2.0);

        let back = solution.back.expect("back substitution recorded");
        assert_relative_eq!(back.x_rhs, 1.0);

        let verification = solution.verification.expect("verification recorded");
        assert!(verification.passes());
        assert_relative_eq!(verification.lhs1, 3.0);
        assert_relative_eq!(verification.lhs2, 4.0);
    }

    #[test]
    fn classifies_dependent_equations() {
        let solution = solve_default(1.0, 2.0, 3.0, 2.0, 4.0, 6.0);

        assert_eq!(solution.status, Status::InfiniteSolutions);
        assert!(solution.forward.is_some());
        assert!(solution.back.is_none());
        assert!(solution.verification.is_none());
    }

    #[test]
    fn classifies_inconsistent_equations() {
        let solution = solve_default(1.0, 2.0, 3.0, 2.0, 4.0, 7.0);

        assert_eq!(solution.status, Status::NoSolution);
        let forward = solution.forward.expect("forward step recorded");
        assert_relative_eq!(forward.reduced_c2, 1.0);
        assert!(solution.x().is_none());
    }

    #[test]
    fn rejects_zero_pivot_regardless_of_other_coefficients() {
        for (b1, c1, a2, b2, c2) in [
            (1.0, 2.0, 3.0, 4.0, 5.0),
            (0.0, 0.0, 0.0, 0.0, 0.0),
            (-7.0, 1e6, 1e-12, 2.0, -3.0),
        ] {
            for a1 in [0.0, 5e-11, -9e-11] {
                let solution = solve_default(a1, b1, c1, a2, b2, c2);
                assert_eq!(solution.status, Status::DegenerateLeadingCoefficient);
                assert!(solution.forward.is_none());
            }
        }
    }

    #[test]
    fn verification_uses_configured_tolerance() {
        let verification = Verification {
            lhs1: 3.005,
            lhs2: 4.02,
            c1: 3.0,
            c2: 4.0,
            tolerance: 0.01,
        };

        assert!(verification.eq1_passes());
        assert!(!verification.eq2_passes());
        assert!(!verification.passes());
    }

    #[test]
    fn rejects_invalid_config() {
        assert_eq!(Config::new(-1.0, 0.01), Err(ConfigError::PivotTol));
        assert_eq!(Config::new(1e-10, f64::NAN), Err(ConfigError::CheckTol));
        assert_eq!(Config::new(0.0, 0.01), Err(ConfigError::PivotTol));
        assert!(Config::new(1e-10, 0.0).is_ok());
    }

    #[test]
    fn status_reads_as_a_category() {
        assert_eq!(Status::Unique.to_string(), "unique solution");
        assert_eq!(
            Status::NoSolution.to_string(),
            "no solution (inconsistent equations)"
        );
    }
}
