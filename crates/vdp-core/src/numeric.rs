//! Float helpers shared by the solver and its tests.

use crate::CoreError;
use crate::state::State;

/// Floating point type used throughout the workspace
pub type Real = f64;

/// Absolute-or-relative comparison tolerance.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Pure absolute tolerance.
    pub const fn absolute(abs: Real) -> Self {
        Self { abs, rel: 0.0 }
    }

    /// Componentwise comparison of two oscillator states.
    pub fn states_close(&self, a: State, b: State) -> bool {
        nearly_equal(a.x, b.x, *self) && nearly_equal(a.y, b.y, *self)
    }
}

/// `|a - b| <= abs`, or within `rel` of the larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_tolerance_ignores_magnitude() {
        let tol = Tolerances::absolute(1e-3);
        assert!(nearly_equal(2.0, 2.0005, tol));
        assert!(!nearly_equal(1e6, 1e6 + 1.0, tol));
    }

    #[test]
    fn relative_tolerance_scales() {
        let tol = Tolerances::default();
        assert!(nearly_equal(1e6, 1e6 + 1e-4, tol));
        assert!(!nearly_equal(1e-3, 2e-3, tol));
    }

    #[test]
    fn states_close_checks_both_components() {
        let tol = Tolerances::absolute(1e-6);
        assert!(tol.states_close(State::new(1.0, 2.0), State::new(1.0 + 1e-7, 2.0)));
        assert!(!tol.states_close(State::new(1.0, 2.0), State::new(1.0, 2.1)));
    }

    #[test]
    fn nan_is_never_close() {
        assert!(!nearly_equal(Real::NAN, Real::NAN, Tolerances::absolute(1.0)));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "mu").unwrap_err();
        assert!(format!("{err}").contains("Non-finite numeric value for mu"));
        assert_eq!(ensure_finite(-2.5, "mu").unwrap(), -2.5);
    }
}
