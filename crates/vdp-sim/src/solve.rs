//! Solve routine and its options.

use std::time::Instant;

use diffsol::{MatrixCommon, NalgebraLU, NalgebraMat, OdeBuilder, OdeSolverMethod};
use tracing::{debug, info};
use vdp_core::{
    Parameters, Real, RunConfig, State, Trajectory, ensure_finite, ensure_strictly_increasing,
};

use crate::error::{SimError, SimResult, integration_error};
use crate::grid::linspace;
use crate::model::{jacobian_product, vanderpol};

type M = NalgebraMat<f64>;
type LS = NalgebraLU<f64>;

/// Sampling grid and integrator settings for one solve.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveOptions {
    /// First grid point
    pub tstart: Real,
    /// Last grid point
    pub tend: Real,
    /// Number of grid points, both endpoints included
    pub tnum: usize,
    /// Relative tolerance; `None` keeps the solver default
    pub rtol: Option<Real>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            tstart: 0.0,
            tend: 20.0,
            tnum: 500,
            rtol: None,
        }
    }
}

impl From<&RunConfig> for SolveOptions {
    fn from(config: &RunConfig) -> Self {
        Self {
            tstart: config.tstart,
            tend: config.tend,
            tnum: config.tnum,
            rtol: config.rtol,
        }
    }
}

impl SolveOptions {
    pub fn validate(&self) -> SimResult<()> {
        ensure_finite(self.tstart, "tstart")?;
        ensure_finite(self.tend, "tend")?;
        if self.tstart >= self.tend {
            return Err(SimError::InvalidRange {
                tstart: self.tstart,
                tend: self.tend,
            });
        }
        if self.tnum == 0 {
            return Err(SimError::InvalidSampleCount { tnum: self.tnum });
        }
        if let Some(rtol) = self.rtol {
            if !(rtol > 0.0 && rtol.is_finite()) {
                return Err(SimError::InvalidArg {
                    what: "rtol must be positive and finite",
                });
            }
        }
        Ok(())
    }
}

/// Integrate the oscillator over `tnum` evenly spaced samples of `[tstart, tend]`.
pub fn solve(params: &Parameters, tstart: Real, tend: Real, tnum: usize) -> SimResult<Trajectory> {
    solve_with(
        params,
        &SolveOptions {
            tstart,
            tend,
            tnum,
            rtol: None,
        },
    )
}

/// Integrate the oscillator on the grid described by `opts`.
///
/// The first sample is the initial state itself. A single-sample grid
/// returns `[tstart]` without touching the integrator.
pub fn solve_with(params: &Parameters, opts: &SolveOptions) -> SimResult<Trajectory> {
    params.validate()?;
    opts.validate()?;

    let t = linspace(opts.tstart, opts.tend, opts.tnum);
    // Spacing below one ulp of tstart collapses neighbouring samples
    ensure_strictly_increasing(&t)?;
    debug!(
        mu = params.mu,
        x0 = params.initial.x,
        y0 = params.initial.y,
        tstart = opts.tstart,
        tend = opts.tend,
        tnum = opts.tnum,
        rtol = ?opts.rtol,
        "solving Van der Pol oscillator"
    );

    if t.len() == 1 {
        return Ok(Trajectory::new(t, vec![params.initial])?);
    }

    let start = Instant::now();
    let states = integrate(params, &t, opts.rtol)?;
    info!(
        samples = states.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "integration finished"
    );

    Ok(Trajectory::new(t, states)?)
}

/// Run the BDF solver and sample it at every grid point after the first.
fn integrate(params: &Parameters, t: &[Real], rtol: Option<Real>) -> SimResult<Vec<State>> {
    let initial = params.initial;

    let mut builder = OdeBuilder::<M>::new().t0(t[0]).p(vec![params.mu]);
    if let Some(rtol) = rtol {
        builder = builder.rtol(rtol);
    }

    let problem = builder
        .rhs_implicit(
            |x, p, time, y| {
                let dx = vanderpol(State::new(x[0], x[1]), time, p[0]);
                y[0] = dx.x;
                y[1] = dx.y;
            },
            |x, p, _t, v, y| {
                let jv = jacobian_product(State::new(x[0], x[1]), p[0], State::new(v[0], v[1]));
                y[0] = jv.x;
                y[1] = jv.y;
            },
        )
        .init(
            move |_p, _t, y| {
                y[0] = initial.x;
                y[1] = initial.y;
            },
            2,
        )
        .build()
        .map_err(integration_error)?;

    let mut solver = problem.bdf::<LS>().map_err(integration_error)?;
    let sampled = solver.solve_dense(&t[1..]).map_err(integration_error)?;
    let sampled = sampled.inner();

    let mut states = Vec::with_capacity(t.len());
    states.push(initial);
    for (j, &tj) in t[1..].iter().enumerate() {
        let state = State::new(sampled[(0, j)], sampled[(1, j)]);
        if !state.is_finite() {
            return Err(SimError::Integration {
                message: format!("non-finite state at t = {tj}"),
            });
        }
        states.push(state);
    }

    Ok(states)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_options_defaults() {
        let opts = SolveOptions::default();
        assert_eq!(opts.tstart, 0.0);
        assert_eq!(opts.tend, 20.0);
        assert_eq!(opts.tnum, 500);
        assert_eq!(opts.rtol, None);
    }

    #[test]
    fn solve_options_from_config() {
        let config = RunConfig {
            tnum: 42,
            rtol: Some(1e-9),
            ..RunConfig::default()
        };
        let opts = SolveOptions::from(&config);
        assert_eq!(opts.tnum, 42);
        assert_eq!(opts.rtol, Some(1e-9));
        assert_eq!(opts.tend, 20.0);
    }

    #[test]
    fn validate_order() {
        // Range is checked before the sample count
        let opts = SolveOptions {
            tstart: 5.0,
            tend: 1.0,
            tnum: 0,
            rtol: None,
        };
        assert!(matches!(opts.validate(), Err(SimError::InvalidRange { .. })));
    }

    #[test]
    fn validate_rejects_bad_rtol() {
        for rtol in [0.0, -1e-6, f64::NAN] {
            let opts = SolveOptions {
                rtol: Some(rtol),
                ..SolveOptions::default()
            };
            assert!(matches!(opts.validate(), Err(SimError::InvalidArg { .. })));
        }
    }

    #[test]
    fn validate_rejects_non_finite_bounds() {
        let opts = SolveOptions {
            tend: f64::INFINITY,
            ..SolveOptions::default()
        };
        assert!(matches!(opts.validate(), Err(SimError::Core(_))));
    }

    #[test]
    fn single_sample_skips_integration() {
        let params = Parameters::new(1.0, State::new(1.0, 2.0));
        let traj = solve(&params, 0.0, 20.0, 1).unwrap();
        assert_eq!(traj.t(), &[0.0]);
        assert_eq!(traj.states(), &[State::new(1.0, 2.0)]);
    }
}
