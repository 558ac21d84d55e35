use std::fmt;

use rootwork_core::Equation;
use thiserror::Error;

/// Magnitude below which a divisor makes `g(x)` undefined.
pub(super) const SINGULAR_TOL: f64 = 1e-10;

/// A rearrangement of `f(x) = 0` into the fixed-point form `x = g(x)`.
///
/// Each equation family has five forms, numbered 1 to 5. `apply` returns
/// `None` wherever `g` leaves its mathematical domain (a logarithm of a
/// non-positive number, a square root of a negative number, division by zero).
pub trait Rearrangement: Copy + fmt::Display {
    /// The equation family this rearrangement applies to.
    type Equation: Equation;

    /// All five forms, ordered by id.
    const ALL: [Self; 5];

    /// Returns the 1-based method id of this form.
    fn id(self) -> u8;

    /// Evaluates `g(x)`, or `None` if `x` is outside its domain.
    fn apply(self, equation: &Self::Equation, x: f64) -> Option<f64>;

    /// Checks the coefficient conditions this form needs to be usable at all.
    ///
    /// The check is advisory: the solver does not call it, and a form that
    /// fails it will simply diverge or hit an undefined value when iterated.
    ///
    /// # Errors
    ///
    /// Returns the first unmet requirement.
    fn requirement(self, equation: &Self::Equation) -> Result<(), Unmet>;
}

/// A method id outside `1..=5`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid method id {id}: expected 1 to 5")]
pub struct InvalidMethodId {
    pub id: u8,
}

/// A coefficient condition a rearrangement needs but the equation lacks.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Unmet {
    #[error("method {id} requires a != 0")]
    NonZeroA { id: u8 },

    #[error("method {id} requires b != 0")]
    NonZeroB { id: u8 },
}

pub(super) fn lookup<R: Rearrangement>(id: u8) -> Result<R, InvalidMethodId> {
    R::ALL
        .into_iter()
        .find(|form| form.id() == id)
        .ok_or(InvalidMethodId { id })
}
