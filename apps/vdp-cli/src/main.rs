use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use vdp_core::RunConfig;
use vdp_report::{PARAMS_FILE, PHASE_PLOT_FILE, PlotOptions, STATES_PLOT_FILE};
use vdp_sim::SolveOptions;

#[derive(Parser)]
#[command(name = "vdp-cli")]
#[command(about = "Solve the Van der Pol oscillator and plot the result", long_about = None)]
struct Cli {
    /// Run configuration (YAML); the reference run is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Directory receiving the plots and the parameter file
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Core(#[from] vdp_core::CoreError),

    #[error(transparent)]
    Sim(#[from] vdp_sim::SimError),

    #[error(transparent)]
    Report(#[from] vdp_report::ReportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => vdp_core::load_yaml(path)?,
        None => RunConfig::default(),
    };

    run(&config, &cli.out_dir)
}

fn run(config: &RunConfig, out_dir: &Path) -> CliResult<()> {
    std::fs::create_dir_all(out_dir)?;
    let params = &config.parameters;

    vdp_report::write_params(&out_dir.join(PARAMS_FILE), params)?;

    let start = Instant::now();
    let trajectory = vdp_sim::solve_with(params, &SolveOptions::from(config))?;
    let elapsed = start.elapsed().as_secs_f64();

    let opts = PlotOptions::default();
    vdp_report::plot_states(&trajectory, &out_dir.join(STATES_PLOT_FILE), opts)?;
    vdp_report::plot_phase(&trajectory, &out_dir.join(PHASE_PLOT_FILE), opts)?;

    println!(
        "mu = {}, initial = [{}, {}]",
        params.mu, params.initial.x, params.initial.y
    );
    println!(
        "Solved {} samples over [{}, {}] in {:.3}s",
        trajectory.len(),
        config.tstart,
        config.tend,
        elapsed
    );
    if let Some((t, s)) = trajectory.last() {
        println!("Final state at t = {t}: x = {:.6}, y = {:.6}", s.x, s.y);
    }
    println!("✓ Wrote {} and {} to {}", STATES_PLOT_FILE, PHASE_PLOT_FILE, out_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_writes_all_outputs() {
        let out_dir = std::env::temp_dir().join(format!("vdp_cli_run_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&out_dir);

        let config = RunConfig {
            tnum: 200,
            ..RunConfig::default()
        };
        run(&config, &out_dir).unwrap();

        assert!(out_dir.join(PARAMS_FILE).exists());
        assert!(out_dir.join(STATES_PLOT_FILE).exists());
        assert!(out_dir.join(PHASE_PLOT_FILE).exists());

        let _ = std::fs::remove_dir_all(&out_dir);
    }

    #[test]
    fn run_reports_invalid_range() {
        let out_dir = std::env::temp_dir().join(format!("vdp_cli_bad_{}", std::process::id()));
        let config = RunConfig {
            tstart: 20.0,
            tend: 0.0,
            ..RunConfig::default()
        };
        let err = run(&config, &out_dir).unwrap_err();
        assert!(matches!(
            err,
            CliError::Sim(vdp_sim::SimError::InvalidRange { .. })
        ));

        let _ = std::fs::remove_dir_all(&out_dir);
    }
}
