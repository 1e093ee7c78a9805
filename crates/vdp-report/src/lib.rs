//! vdp-report: plots and parameter export for a solved trajectory.

pub mod params;
pub mod plot;

pub use params::{render_params, write_params};
pub use plot::{PlotOptions, plot_phase, plot_states};

/// States against time.
pub const STATES_PLOT_FILE: &str = "vanderpol-1.svg";
/// Phase portrait, y against x.
pub const PHASE_PLOT_FILE: &str = "vanderpol-2.svg";
/// LaTeX macros holding mu and the initial condition.
pub const PARAMS_FILE: &str = "getparams.txt";

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Plot error: {message}")]
    Plot { message: String },

    #[error("Cannot plot an empty trajectory")]
    EmptyTrajectory,
}

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for ReportError
where
    E: std::error::Error + Send + Sync,
{
    fn from(e: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        ReportError::Plot {
            message: e.to_string(),
        }
    }
}
