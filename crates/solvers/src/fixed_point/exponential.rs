use std::fmt;

use rootwork_core::{Equation, Exponential};

use super::rearrangement::{InvalidMethodId, Rearrangement, Unmet, lookup};

/// Relaxation factor of [`ExponentialForm::Relaxed`].
const RELAXATION: f64 = 0.1;

/// Fixed-point forms of `eˣ − a·x − b = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExponentialForm {
    /// 1: `g(x) = ln(a·x + b)`
    LogOfLine,

    /// 2: `g(x) = (eˣ − b)/a`
    SolveLinear,

    /// 3: `g(x) = ln((eˣ − b)/a)`
    ///
    /// Its fixed points solve `a·eˣ = eˣ − b` rather than the original
    /// equation, so a settled iteration is not necessarily a root.
    LogOfSolved,

    /// 4: `g(x) = eˣ/a − b/a`
    SplitQuotient,

    /// 5: `g(x) = x − 0.1·(eˣ − a·x − b)`
    Relaxed,
}

impl Rearrangement for ExponentialForm {
    type Equation = Exponential;

    const ALL: [Self; 5] = [
        Self::LogOfLine,
        Self::SolveLinear,
        Self::LogOfSolved,
        Self::SplitQuotient,
        Self::Relaxed,
    ];

    fn id(self) -> u8 {
        match self {
            Self::LogOfLine => 1,
            Self::SolveLinear => 2,
            Self::LogOfSolved => 3,
            Self::SplitQuotient => 4,
            Self::Relaxed => 5,
        }
    }

    #[allow(clippy::float_cmp)]
    fn apply(self, equation: &Exponential, x: f64) -> Option<f64> {
        let &Exponential { a, b } = equation;
        match self {
            Self::LogOfLine => {
                let line = a * x + b;
                (line > 0.0).then(|| line.ln())
            }
            Self::SolveLinear => (a != 0.0).then(|| (x.exp() - b) / a),
            Self::LogOfSolved => {
                let shifted = x.exp() - b;
                if a == 0.0 || shifted <= 0.0 {
                    return None;
                }
                // A negative `a` still leaves the quotient outside the log's domain.
                let quotient = shifted / a;
                (quotient > 0.0).then(|| quotient.ln())
            }
            Self::SplitQuotient => (a != 0.0).then(|| x.exp() / a - b / a),
            Self::Relaxed => Some(x - RELAXATION * equation.value(x)),
        }
    }

    #[allow(clippy::float_cmp)]
    fn requirement(self, equation: &Exponential) -> Result<(), Unmet> {
        match self {
            Self::SolveLinear | Self::LogOfSolved | Self::SplitQuotient if equation.a == 0.0 => {
                Err(Unmet::NonZeroA { id: self.id() })
            }
            _ => Ok(()),
        }
    }
}

impl TryFrom<u8> for ExponentialForm {
    type Error = InvalidMethodId;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        lookup(id)
    }
}

impl fmt::Display for ExponentialForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LogOfLine => "g(x) = ln(ax + b)",
            Self::SolveLinear => "g(x) = (eˣ - b) / a",
            Self::LogOfSolved => "g(x) = ln((eˣ - b) / a)",
            Self::SplitQuotient => "g(x) = eˣ/a - b/a",
            Self::Relaxed => "g(x) = x - 0.1(eˣ - ax - b)",
        })
    }
}
