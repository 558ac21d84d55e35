use std::fmt;

use super::{Equation, write_signed_term};

/// The exponential family `f(x) = eˣ − a·x − b`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exponential {
    pub a: f64,
    pub b: f64,
}

impl Exponential {
    /// Creates the equation `eˣ − a·x − b = 0`.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

impl Equation for Exponential {
    fn value(&self, x: f64) -> f64 {
        x.exp() - self.a * x - self.b
    }
}

impl fmt::Display for Exponential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("eˣ")?;
        write_signed_term(f, -self.a, "x")?;
        write_signed_term(f, -self.b, "")
    }
}
