//! Diverge crate root: re-exports and module wiring.
//!
//! Compares the closed-form solution of constant-acceleration motion with a
//! fixed-step Euler integration of the same motion, and plots both together
//! with their difference:
//! - `kinematics`: closed-form displacement
//! - `integrator`: stepwise (symplectic and explicit) Euler iterators
//! - `sampling`: lockstep driver producing aligned series
//! - `config`: constants for the run and the viewer
//! - `app` / `plot`: egui/eframe viewer

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod error;
pub mod integrator;
pub mod kinematics;
pub mod plot;
pub mod sampling;

use tracing::info;

pub use app::{run_diverge, DivergeApp};
pub use color_scheme::ColorScheme;
pub use config::{DivergeConfig, PlotBounds, SamplingConfig};
pub use error::{Error, SampleError};
pub use integrator::{ExplicitEuler, IntegrationScheme, SymplecticEuler};
pub use kinematics::{displacement, Kinematics, GRAVITY};
pub use sampling::{sample, SampleRow, Samples};

/// Number of rows whose closed-form or stepwise value falls outside the
/// chart's fixed y-range.
pub fn clipped_rows(samples: &Samples, bounds: &PlotBounds) -> usize {
    samples
        .rows()
        .filter(|r| !bounds.contains_y(r.closed_form) || !bounds.contains_y(r.stepwise))
        .count()
}

/// Sample with `cfg`, log a summary, then show the chart until the window is closed.
pub fn run(cfg: DivergeConfig) -> Result<(), Error> {
    let samples = sample(&cfg.sampling)?;

    if let Some(last) = samples.last() {
        info!(
            t = last.time,
            closed_form = last.closed_form,
            stepwise = last.stepwise,
            difference = last.difference,
            "final sample"
        );
    }
    let clipped = clipped_rows(&samples, &cfg.bounds);
    if clipped > 0 {
        info!(
            clipped,
            total = samples.len(),
            y_max = cfg.bounds.y.1,
            "samples exceed the fixed y-range and are clipped in the chart"
        );
    }

    run_diverge(samples, cfg)?;
    Ok(())
}
