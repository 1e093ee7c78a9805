//! Oscillator state, run parameters and sampled trajectories.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::numeric::{Real, ensure_finite};

/// Oscillator state `(x, y)`: position and its rate of change.
///
/// Serialized as a two-element sequence `[x, y]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Real; 2]", into = "[Real; 2]")]
pub struct State {
    pub x: Real,
    pub y: Real,
}

impl State {
    /// The origin, a fixed point of the Van der Pol equations for every `mu`.
    pub const ZERO: State = State { x: 0.0, y: 0.0 };

    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    pub fn to_array(self) -> [Real; 2] {
        [self.x, self.y]
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[Real; 2]> for State {
    fn from(v: [Real; 2]) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

impl From<State> for [Real; 2] {
    fn from(s: State) -> Self {
        s.to_array()
    }
}

/// Damping coefficient and initial condition for one solve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub mu: Real,
    pub initial: State,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            mu: 1.0,
            initial: State::new(1.0, 2.0),
        }
    }
}

impl Parameters {
    pub fn new(mu: Real, initial: State) -> Self {
        Self { mu, initial }
    }

    /// Reject NaN or infinite values.
    pub fn validate(&self) -> CoreResult<()> {
        ensure_finite(self.mu, "mu")?;
        ensure_finite(self.initial.x, "initial.x")?;
        ensure_finite(self.initial.y, "initial.y")?;
        Ok(())
    }
}

/// Reject a time sequence with a repeated or decreasing sample.
pub fn ensure_strictly_increasing(t: &[Real]) -> CoreResult<()> {
    match t.windows(2).position(|w| !(w[0] < w[1])) {
        Some(i) => Err(CoreError::NonIncreasingTime {
            index: i + 1,
            prev: t[i],
            next: t[i + 1],
        }),
        None => Ok(()),
    }
}

/// States sampled on a time grid.
///
/// `t` and `states` always have the same length and `t` is strictly increasing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    t: Vec<Real>,
    states: Vec<State>,
}

impl Trajectory {
    pub fn new(t: Vec<Real>, states: Vec<State>) -> CoreResult<Self> {
        if t.len() != states.len() {
            return Err(CoreError::LengthMismatch {
                t: t.len(),
                states: states.len(),
            });
        }
        ensure_strictly_increasing(&t)?;
        Ok(Self { t, states })
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Time samples.
    pub fn t(&self) -> &[Real] {
        &self.t
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The x component at every sample.
    pub fn xs(&self) -> Vec<Real> {
        self.states.iter().map(|s| s.x).collect()
    }

    /// The y component at every sample.
    pub fn ys(&self) -> Vec<Real> {
        self.states.iter().map(|s| s.y).collect()
    }

    pub fn first(&self) -> Option<(Real, State)> {
        Some((*self.t.first()?, *self.states.first()?))
    }

    pub fn last(&self) -> Option<(Real, State)> {
        Some((*self.t.last()?, *self.states.last()?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Real, State)> + '_ {
        self.t.iter().copied().zip(self.states.iter().copied())
    }
}
