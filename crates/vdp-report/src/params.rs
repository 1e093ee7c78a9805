//! LaTeX parameter export.

use std::path::Path;

use tracing::info;
use vdp_core::Parameters;

use crate::ReportResult;

/// Two `\newcommand` lines: `\getmu` and `\getinitial`.
pub fn render_params(params: &Parameters) -> String {
    let [x0, y0] = params.initial.to_array();
    format!(
        "\\newcommand{{\\getmu}}{{{:?}}}\n\\newcommand{{\\getinitial}}{{[{:?}, {:?}]}}\n",
        params.mu, x0, y0
    )
}

pub fn write_params(path: &Path, params: &Parameters) -> ReportResult<()> {
    std::fs::write(path, render_params(params))?;
    info!(path = %path.display(), "wrote parameter file");
    Ok(())
}
