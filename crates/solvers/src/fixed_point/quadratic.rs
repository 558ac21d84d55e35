use std::fmt;

use rootwork_core::Quadratic;

use super::rearrangement::{InvalidMethodId, Rearrangement, SINGULAR_TOL, Unmet, lookup};

/// Fixed-point forms of `a·x² + b·x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuadraticForm {
    /// 1: `g(x) = −(a·x² + c)/b`
    SolveLinearTerm,

    /// 2: `g(x) = −c/(a·x + b)`
    FactorX,

    /// 3: `g(x) = √((−b·x − c)/a)`
    PositiveSqrt,

    /// 4: `g(x) = −√((−b·x − c)/a)`
    NegativeSqrt,

    /// 5: `g(x) = (x² − c/a)/(−b/a)`
    ///
    /// Its fixed points solve `a·x² + b·x − c = 0`, so iterating it can settle
    /// on a value that is not a root of the original equation.
    ScaledSquare,
}

impl QuadraticForm {
    #[allow(clippy::float_cmp)]
    fn radicand(equation: &Quadratic, x: f64) -> Option<f64> {
        let &Quadratic { a, b, c } = equation;
        if a == 0.0 {
            return None;
        }
        let radicand = (-b * x - c) / a;
        (radicand >= 0.0).then_some(radicand)
    }
}

impl Rearrangement for QuadraticForm {
    type Equation = Quadratic;

    const ALL: [Self; 5] = [
        Self::SolveLinearTerm,
        Self::FactorX,
        Self::PositiveSqrt,
        Self::NegativeSqrt,
        Self::ScaledSquare,
    ];

    fn id(self) -> u8 {
        match self {
            Self::SolveLinearTerm => 1,
            Self::FactorX => 2,
            Self::PositiveSqrt => 3,
            Self::NegativeSqrt => 4,
            Self::ScaledSquare => 5,
        }
    }

    #[allow(clippy::float_cmp)]
    fn apply(self, equation: &Quadratic, x: f64) -> Option<f64> {
        let &Quadratic { a, b, c } = equation;
        match self {
            Self::SolveLinearTerm => Some(-(a * x * x + c) / b),
            Self::FactorX => {
                let divisor = a * x + b;
                (divisor.abs() >= SINGULAR_TOL).then(|| -c / divisor)
            }
            Self::PositiveSqrt => Self::radicand(equation, x).map(f64::sqrt),
            Self::NegativeSqrt => Self::radicand(equation, x).map(|r| -r.sqrt()),
            Self::ScaledSquare => (b != 0.0).then(|| (x * x - c / a) / (-b / a)),
        }
    }

    #[allow(clippy::float_cmp)]
    fn requirement(self, equation: &Quadratic) -> Result<(), Unmet> {
        let id = self.id();
        match self {
            Self::SolveLinearTerm | Self::ScaledSquare if equation.b == 0.0 => {
                Err(Unmet::NonZeroB { id })
            }
            Self::PositiveSqrt | Self::NegativeSqrt if equation.a == 0.0 => {
                Err(Unmet::NonZeroA { id })
            }
            _ => Ok(()),
        }
    }
}

impl TryFrom<u8> for QuadraticForm {
    type Error = InvalidMethodId;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        lookup(id)
    }
}

impl fmt::Display for QuadraticForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SolveLinearTerm => "g(x) = -(ax² + c) / b",
            Self::FactorX => "g(x) = -c / (ax + b)",
            Self::PositiveSqrt => "g(x) = √((-bx - c) / a)",
            Self::NegativeSqrt => "g(x) = -√((-bx - c) / a)",
            Self::ScaledSquare => "g(x) = (x² - c/a) / (-b/a)",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const EQ: Quadratic = Quadratic {
        a: 1.0,
        b: -3.0,
        c: 2.0,
    };

    #[test]
    fn roots_are_fixed_points_of_valid_forms() {
        for form in [
            QuadraticForm::SolveLinearTerm,
            QuadraticForm::FactorX,
            QuadraticForm::PositiveSqrt,
        ] {
            let g = form.apply(&EQ, 2.0).expect("defined at root");
            assert_relative_eq!(g, 2.0, epsilon = 1e-12);
        }

        let g = QuadraticForm::NegativeSqrt
            .apply(&Quadratic::new(1.0, 0.0, -4.0), -2.0)
            .expect("defined at root");
        assert_relative_eq!(g, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn guards_report_undefined() {
        // a·x + b = 0 at x = 3
        assert_eq!(QuadraticForm::FactorX.apply(&EQ, 3.0), None);
        // (−b·x − c)/a = 3·0 − 2 < 0
        assert_eq!(QuadraticForm::PositiveSqrt.apply(&EQ, 0.0), None);
        assert_eq!(QuadraticForm::NegativeSqrt.apply(&EQ, 0.0), None);

        let linear = Quadratic::new(0.0, 1.0, 1.0);
        assert_eq!(QuadraticForm::PositiveSqrt.apply(&linear, 1.0), None);

        let no_b = Quadratic::new(1.0, 0.0, -1.0);
        assert_eq!(QuadraticForm::ScaledSquare.apply(&no_b, 1.0), None);
    }

    #[test]
    fn ids_round_trip() {
        for form in QuadraticForm::ALL {
            assert_eq!(QuadraticForm::try_from(form.id()), Ok(form));
        }
        assert_eq!(QuadraticForm::try_from(0), Err(InvalidMethodId { id: 0 }));
        assert_eq!(QuadraticForm::try_from(6), Err(InvalidMethodId { id: 6 }));
    }

    #[test]
    fn requirements_follow_the_divisors() {
        let no_b = Quadratic::new(1.0, 0.0, -1.0);
        let no_a = Quadratic::new(0.0, 1.0, -1.0);

        assert_eq!(
            QuadraticForm::SolveLinearTerm.requirement(&no_b),
            Err(Unmet::NonZeroB { id: 1 })
        );
        assert_eq!(
            QuadraticForm::ScaledSquare.requirement(&no_b),
            Err(Unmet::NonZeroB { id: 5 })
        );
        assert_eq!(
            QuadraticForm::NegativeSqrt.requirement(&no_a),
            Err(Unmet::NonZeroA { id: 4 })
        );
        assert_eq!(QuadraticForm::FactorX.requirement(&no_b), Ok(()));
        assert_eq!(QuadraticForm::PositiveSqrt.requirement(&EQ), Ok(()));
    }

    #[test]
    fn displays_formula() {
        assert_eq!(
            QuadraticForm::PositiveSqrt.to_string(),
            "g(x) = √((-bx - c) / a)"
        );
    }
}
