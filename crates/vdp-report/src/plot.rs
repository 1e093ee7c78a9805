//! SVG plots of a trajectory.

use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;
use tracing::info;
use vdp_core::Trajectory;

use crate::{ReportError, ReportResult};

const FONT: &str = "serif";

#[derive(Clone, Copy, Debug)]
pub struct PlotOptions {
    /// Image size in pixels
    pub width: u32,
    pub height: u32,
    /// Plot every N-th sample in the states-vs-time figure
    pub stride: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            stride: 5,
        }
    }
}

/// x and y against time, with markers and a legend.
pub fn plot_states(trajectory: &Trajectory, path: &Path, opts: PlotOptions) -> ReportResult<()> {
    if trajectory.is_empty() {
        return Err(ReportError::EmptyTrajectory);
    }
    let stride = opts.stride.max(1);
    let samples: Vec<_> = trajectory.iter().step_by(stride).collect();

    let t_range = padded_range(samples.iter().map(|(t, _)| *t));
    let v_range = padded_range(samples.iter().flat_map(|(_, s)| [s.x, s.y]));

    let root = SVGBackend::new(path, (opts.width, opts.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("States vs. Time", (FONT, 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(t_range, v_range)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Time")
        .y_desc("States")
        .label_style((FONT, 16))
        .axis_desc_style((FONT, 18))
        .draw()?;

    chart
        .draw_series(
            LineSeries::new(samples.iter().map(|(t, s)| (*t, s.x)), BLUE.stroke_width(1))
                .point_size(4),
        )?
        .label("x")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(1)));

    chart
        .draw_series(
            LineSeries::new(samples.iter().map(|(t, s)| (*t, s.y)), RED.stroke_width(2))
                .point_size(3),
        )?
        .label("y")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT, 16))
        .draw()?;

    root.present()?;
    info!(path = %path.display(), samples = samples.len(), "wrote states plot");
    Ok(())
}

/// Phase portrait: y against x over every sample.
pub fn plot_phase(trajectory: &Trajectory, path: &Path, opts: PlotOptions) -> ReportResult<()> {
    if trajectory.is_empty() {
        return Err(ReportError::EmptyTrajectory);
    }
    let states = trajectory.states();
    let x_range = padded_range(states.iter().map(|s| s.x));
    let y_range = padded_range(states.iter().map(|s| s.y));

    let root = SVGBackend::new(path, (opts.width, opts.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Phase Portrait", (FONT, 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .label_style((FONT, 16))
        .axis_desc_style((FONT, 18))
        .draw()?;

    chart.draw_series(LineSeries::new(
        states.iter().map(|s| (s.x, s.y)),
        BLUE.stroke_width(2),
    ))?;

    root.present()?;
    info!(path = %path.display(), samples = states.len(), "wrote phase plot");
    Ok(())
}

/// Data range widened by 5% on each side; a flat series gets a unit margin.
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !(lo.is_finite() && hi.is_finite()) {
        return -1.0..1.0;
    }
    let pad = if hi > lo { 0.05 * (hi - lo) } else { 1.0 };
    (lo - pad)..(hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_range_widens_span() {
        let r = padded_range([0.0, 10.0].into_iter());
        assert_eq!(r, -0.5..10.5);
    }

    #[test]
    fn padded_range_flat_series() {
        let r = padded_range([0.0, 0.0, 0.0].into_iter());
        assert_eq!(r, -1.0..1.0);
    }

    #[test]
    fn padded_range_empty() {
        let r = padded_range(std::iter::empty());
        assert_eq!(r, -1.0..1.0);
    }
}
