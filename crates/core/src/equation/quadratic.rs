use std::fmt;

use super::{Equation, write_signed_term};

/// The quadratic family `f(x) = a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Quadratic {
    /// Creates the equation `a·x² + b·x + c = 0`.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}

impl Equation for Quadratic {
    fn value(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }
}

impl fmt::Display for Quadratic {
    #[allow(clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The leading term is always shown, even when `a` is zero.
        if self.a == 1.0 {
            f.write_str("x²")?;
        } else if self.a == -1.0 {
            f.write_str("-x²")?;
        } else {
            write!(f, "{}x²", self.a)?;
        }
        write_signed_term(f, self.b, "x")?;
        write_signed_term(f, self.c, "")
    }
}
