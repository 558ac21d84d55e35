use std::fmt;

/// A system of two linear equations in `x` and `y`:
///
/// ```text
/// a1·x + b1·y = c1
/// a2·x + b2·y = c2
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearSystem {
    pub a1: f64,
    pub b1: f64,
    pub c1: f64,
    pub a2: f64,
    pub b2: f64,
    pub c2: f64,
}

impl LinearSystem {
    /// Creates a system from its six coefficients, row by row.
    #[must_use]
    pub fn new(a1: f64, b1: f64, c1: f64, a2: f64, b2: f64, c2: f64) -> Self {
        Self {
            a1,
            b1,
            c1,
            a2,
            b2,
            c2,
        }
    }

    /// Evaluates both left-hand sides at `(x, y)`.
    #[must_use]
    pub fn lhs(&self, x: f64, y: f64) -> [f64; 2] {
        [self.a1 * x + self.b1 * y, self.a2 * x + self.b2 * y]
    }

    /// Returns `lhs − c` for both equations at `(x, y)`.
    #[must_use]
    pub fn residuals(&self, x: f64, y: f64) -> [f64; 2] {
        let [lhs1, lhs2] = self.lhs(x, y);
        [lhs1 - self.c1, lhs2 - self.c2]
    }

    /// Returns a displayable view of the first equation.
    #[must_use]
    pub fn first(&self) -> Row {
        Row {
            a: self.a1,
            b: self.b1,
            c: self.c1,
        }
    }

    /// Returns a displayable view of the second equation.
    #[must_use]
    pub fn second(&self) -> Row {
        Row {
            a: self.a2,
            b: self.b2,
            c: self.c2,
        }
    }
}

/// One equation `a·x + b·y = c` of a [`LinearSystem`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.b.is_sign_negative() { '-' } else { '+' };
        write!(f, "{}x {sign} {}y = {}", self.a, self.b.abs(), self.c)
    }
}
