use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Time samples not strictly increasing at index {index}: {prev} then {next}")]
    NonIncreasingTime { index: usize, prev: f64, next: f64 },

    #[error("Trajectory length mismatch: {t} time samples, {states} states")]
    LengthMismatch { t: usize, states: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
