//! YAML run configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::numeric::Real;
use crate::state::Parameters;

/// Everything needed for one run: parameters plus the sampling grid.
///
/// Missing fields fall back to the reference run (`mu = 1`, `[1, 2]`,
/// 500 samples over `[0, 20]`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub parameters: Parameters,
    pub tstart: Real,
    pub tend: Real,
    pub tnum: usize,
    /// Relative tolerance for the integrator; `None` keeps the solver default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtol: Option<Real>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            parameters: Parameters::default(),
            tstart: 0.0,
            tend: 20.0,
            tnum: 500,
            rtol: None,
        }
    }
}

pub fn load_yaml(path: &Path) -> CoreResult<RunConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: RunConfig = serde_yaml::from_str(&content)?;
    config.parameters.validate()?;
    Ok(config)
}

pub fn save_yaml(path: &Path, config: &RunConfig) -> CoreResult<()> {
    config.parameters.validate()?;
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
