mod exponential;
mod quadratic;

pub use exponential::Exponential;
pub use quadratic::Quadratic;

/// A scalar equation `f(x) = 0`.
///
/// Solvers only ever need to evaluate `f`; how its coefficients are stored is
/// up to the implementor. Any `Fn(f64) -> f64` closure is an equation.
pub trait Equation {
    /// Evaluates `f(x)`.
    fn value(&self, x: f64) -> f64;
}

impl<F> Equation for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Writes ` + {term}` or ` - {term}` for a signed coefficient.
///
/// A zero coefficient writes nothing, and a unit coefficient drops the number
/// when `unit` names a variable term (`x` instead of `1x`).
#[allow(clippy::float_cmp)]
fn write_signed_term(
    f: &mut std::fmt::Formatter<'_>,
    coefficient: f64,
    unit: &str,
) -> std::fmt::Result {
    if coefficient == 0.0 {
        return Ok(());
    }

    let sign = if coefficient > 0.0 { '+' } else { '-' };
    let magnitude = coefficient.abs();

    if magnitude == 1.0 && !unit.is_empty() {
        write!(f, " {sign} {unit}")
    } else {
        write!(f, " {sign} {magnitude}{unit}")
    }
}
