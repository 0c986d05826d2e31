//! Chart rendering for the divergence viewer.
//!
//! The chart opens on fixed axis ranges; curves leaving those ranges are
//! clipped. Box zoom and panning are allowed, and a fit request restores the
//! fixed ranges on the next frame.

use egui_plot::{Legend, Line, Plot, PlotResponse, PlotUi};

use crate::config::PlotBounds;
use crate::data::traces::TracesCollection;

pub const Y_AXIS_LABEL: &str = "x in m";

/// X axis label carrying the integrator step size, e.g. `t in s (∆t = 10s)`.
pub fn x_axis_label(dt: f64) -> String {
    format!("t in s (∆t = {dt}s)")
}

/// Build the `egui_plot` lines for every visible trace, in drawing order.
pub fn trace_lines(traces: &TracesCollection) -> Vec<Line<'static>> {
    traces
        .iter()
        .filter(|tr| tr.look.visible)
        .map(|tr| {
            Line::new(tr.name.clone(), tr.points.clone())
                .color(tr.look.color)
                .width(tr.look.stroke_width())
                .style(tr.look.style)
        })
        .collect()
}

fn apply_bounds(plot_ui: &mut PlotUi, bounds: &PlotBounds) {
    plot_ui.set_plot_bounds_x(bounds.x.0..=bounds.x.1);
    plot_ui.set_plot_bounds_y(bounds.y.0..=bounds.y.1);
}

/// Draw the chart into `ui`.
///
/// When `pending_fit` is set the fixed bounds are applied and the flag is
/// cleared.
pub fn render_plot(
    ui: &mut egui::Ui,
    traces: &TracesCollection,
    bounds: &PlotBounds,
    dt: f64,
    legend: bool,
    pending_fit: &mut bool,
) -> PlotResponse<()> {
    let mut plot = Plot::new("diverge_plot")
        .allow_scroll(false)
        .allow_boxed_zoom(true)
        .x_axis_label(x_axis_label(dt))
        .y_axis_label(Y_AXIS_LABEL);
    if legend {
        plot = plot.legend(Legend::default());
    }

    let fit = std::mem::take(pending_fit);
    plot.show(ui, |plot_ui| {
        if fit {
            apply_bounds(plot_ui, bounds);
        }
        for line in trace_lines(traces) {
            plot_ui.line(line);
        }
    })
}
