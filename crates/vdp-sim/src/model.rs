//! Van der Pol equations in first-order form.

use vdp_core::{Real, State};

/// Rate of change of the oscillator state.
///
/// ```text
/// dx/dt = y
/// dy/dt = mu * (1 - x^2) * y - x
/// ```
///
/// `t` is unused; it is kept so the signature matches `f(state, t)`.
pub fn vanderpol(state: State, _t: Real, mu: Real) -> State {
    let State { x, y } = state;
    State {
        x: y,
        y: mu * (1.0 - x * x) * y - x,
    }
}

/// Jacobian of [`vanderpol`] at `state` applied to `v`.
///
/// ```text
/// J = [ 0,               1            ]
///     [ -2 mu x y - 1,   mu (1 - x^2) ]
/// ```
pub fn jacobian_product(state: State, mu: Real, v: State) -> State {
    let State { x, y } = state;
    State {
        x: v.y,
        y: (-2.0 * mu * x * y - 1.0) * v.x + mu * (1.0 - x * x) * v.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_fixed_point() {
        for mu in [0.0, 0.5, 1.0, 10.0, -3.0] {
            assert_eq!(vanderpol(State::ZERO, 0.0, mu), State::ZERO);
        }
    }

    #[test]
    fn reference_values() {
        // mu = 1, (1, 2): dx = 2, dy = 1 * 0 * 2 - 1
        assert_eq!(vanderpol(State::new(1.0, 2.0), 0.0, 1.0), State::new(2.0, -1.0));
        // mu = 2, (0.5, 1): dy = 2 * 0.75 * 1 - 0.5
        assert_eq!(vanderpol(State::new(0.5, 1.0), 3.0, 2.0), State::new(1.0, 1.0));
    }

    #[test]
    fn time_does_not_matter() {
        let s = State::new(0.3, -0.7);
        assert_eq!(vanderpol(s, 0.0, 1.5), vanderpol(s, 42.0, 1.5));
    }

    #[test]
    fn jacobian_matches_finite_difference() {
        let s = State::new(0.7, -1.3);
        let mu = 1.8;
        let v = State::new(0.4, 0.9);
        let eps = 1e-7;

        let plus = vanderpol(State::new(s.x + eps * v.x, s.y + eps * v.y), 0.0, mu);
        let minus = vanderpol(State::new(s.x - eps * v.x, s.y - eps * v.y), 0.0, mu);
        let fd = State::new((plus.x - minus.x) / (2.0 * eps), (plus.y - minus.y) / (2.0 * eps));

        let jv = jacobian_product(s, mu, v);
        assert!((jv.x - fd.x).abs() < 1e-6);
        assert!((jv.y - fd.y).abs() < 1e-6);
    }
}
