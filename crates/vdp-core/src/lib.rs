//! vdp-core: shared foundation for the Van der Pol workspace.
//!
//! Contains:
//! - state (oscillator state, parameters, sampled trajectory)
//! - numeric (tolerances + float helpers)
//! - config (YAML run configuration)
//! - error (shared error types)

pub mod config;
pub mod error;
pub mod numeric;
pub mod state;

pub use config::{RunConfig, load_yaml, save_yaml};
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use state::{Parameters, State, Trajectory, ensure_strictly_increasing};
