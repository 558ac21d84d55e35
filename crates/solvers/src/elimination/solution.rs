use std::fmt;

use super::LinearSystem;

/// Classification of a 2×2 system after elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Exactly one solution `(x, y)`.
    Unique,

    /// The equations are dependent (the same line).
    InfiniteSolutions,

    /// The equations are inconsistent (parallel lines).
    NoSolution,

    /// `a1` is zero, so the first equation cannot be used as the pivot row.
    DegenerateLeadingCoefficient,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unique => "unique solution",
            Self::InfiniteSolutions => "infinite solutions (dependent equations)",
            Self::NoSolution => "no solution (inconsistent equations)",
            Self::DegenerateLeadingCoefficient => "leading coefficient a1 is zero",
        })
    }
}

/// Forward elimination of `x` from the second equation.
///
/// After subtracting `multiplier` times the first row, the second equation
/// reads `0·x + reduced_b2·y = reduced_c2`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForwardElimination {
    pub multiplier: f64,
    pub reduced_b2: f64,
    pub reduced_c2: f64,
}

/// Back substitution: `y` from the reduced row, then `x` from the first row.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackSubstitution {
    pub y: f64,
    /// Right-hand side `c1 − b1·y` of `a1·x = c1 − b1·y`.
    pub x_rhs: f64,
    pub x: f64,
}

/// Both left-hand sides evaluated at the solution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verification {
    pub lhs1: f64,
    pub lhs2: f64,
    pub c1: f64,
    pub c2: f64,
    pub tolerance: f64,
}

impl Verification {
    /// Returns true if the first equation reproduces `c1`.
    #[must_use]
    pub fn eq1_passes(&self) -> bool {
        (self.lhs1 - self.c1).abs() < self.tolerance
    }

    /// Returns true if the second equation reproduces `c2`.
    #[must_use]
    pub fn eq2_passes(&self) -> bool {
        (self.lhs2 - self.c2).abs() < self.tolerance
    }

    /// Returns true if both equations verify.
    #[must_use]
    pub fn passes(&self) -> bool {
        self.eq1_passes() && self.eq2_passes()
    }
}

/// The result of solving a [`LinearSystem`] by elimination.
///
/// Which steps are present depends on how far the elimination got:
/// a degenerate pivot stops before `forward`, and dependent or inconsistent
/// systems stop before `back` and `verification`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub system: LinearSystem,
    pub status: Status,
    pub forward: Option<ForwardElimination>,
    pub back: Option<BackSubstitution>,
    pub verification: Option<Verification>,
}

impl Solution {
    /// Returns the solution `x`, if the system has a unique solution.
    #[must_use]
    pub fn x(&self) -> Option<f64> {
        self.back.map(|back| back.x)
    }

    /// Returns the solution `y`, if the system has a unique solution.
    #[must_use]
    pub fn y(&self) -> Option<f64> {
        self.back.map(|back| back.y)
    }
}
