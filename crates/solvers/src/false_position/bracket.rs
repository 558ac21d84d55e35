use super::Failure;

/// The two endpoints of a false position bracket and their function values.
///
/// Unlike bisection, the endpoints are not kept ordered: `x0` and `x1` keep
/// the roles the caller gave them, and each update replaces whichever one
/// preserves the sign change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    pub(super) x0: f64,
    pub(super) f0: f64,
    pub(super) x1: f64,
    pub(super) f1: f64,
}

impl Bracket {
    /// Creates a bracket if `f0` and `f1` have strictly opposite signs.
    ///
    /// # Errors
    ///
    /// Returns [`Failure::NoBracket`] if `f0·f1 ≥ 0`, or if the product is
    /// NaN and so cannot show a sign change.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub(super) fn new(x0: f64, f0: f64, x1: f64, f1: f64) -> Result<Self, Failure> {
        if !(f0 * f1 < 0.0) {
            return Err(Failure::NoBracket { x0, x1, f0, f1 });
        }

        Ok(Self { x0, f0, x1, f1 })
    }

    /// Returns where the chord through both endpoints crosses zero.
    pub(super) fn chord_root(&self) -> f64 {
        self.x1 - self.f1 * (self.x1 - self.x0) / (self.f1 - self.f0)
    }

    /// Replaces one endpoint with `(x2, f2)`.
    ///
    /// `x1` is replaced when `f0·f2 < 0`; every other case, including an exact
    /// zero product, replaces `x0`.
    pub(super) fn retain(&mut self, x2: f64, f2: f64) {
        if self.f0 * f2 < 0.0 {
            self.x1 = x2;
            self.f1 = f2;
        } else {
            self.x0 = x2;
            self.f0 = f2;
        }
    }
}
