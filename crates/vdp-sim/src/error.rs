//! Error types for solve operations.

use thiserror::Error;

/// Errors encountered while integrating the oscillator.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid time range: tstart ({tstart}) must be less than tend ({tend})")]
    InvalidRange { tstart: f64, tend: f64 },

    #[error("Invalid sample count: {tnum} (at least one sample is required)")]
    InvalidSampleCount { tnum: usize },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Integration failed: {message}")]
    Integration { message: String },

    #[error(transparent)]
    Core(#[from] vdp_core::CoreError),
}

pub type SimResult<T> = Result<T, SimError>;

/// Wrap a failure reported by the integrator backend.
pub(crate) fn integration_error(e: impl std::fmt::Display) -> SimError {
    SimError::Integration {
        message: e.to_string(),
    }
}
