//! Configuration for a divergence run and its viewer.
//!
//! Everything here is fixed at compile time through the `Default` impls; the
//! binary never reads flags, environment or files for these values.

use crate::color_scheme::ColorScheme;
use crate::integrator::IntegrationScheme;
use crate::kinematics::GRAVITY;

// ─────────────────────────────────────────────────────────────────────────────
// Sampling
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters of the sampling driver.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplingConfig {
    /// Constant acceleration in m/s².
    pub gravity: f64,
    /// Integrator step size in seconds.
    pub dt: f64,
    /// Record every `sample_rate`-th step. Must be at least 1.
    pub sample_rate: u64,
    /// Number of recorded samples, not counting the leading zero. Must be at least 1.
    pub n_samples: usize,
    /// Stepwise scheme compared against the closed form.
    pub scheme: IntegrationScheme,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            dt: 10.0,
            sample_rate: 1,
            n_samples: 100,
            scheme: IntegrationScheme::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plot bounds
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed axis ranges of the chart. Data outside is clipped, not rescaled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotBounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Default for PlotBounds {
    fn default() -> Self {
        Self {
            x: (0.0, 100.0),
            y: (0.0, 50_000.0),
        }
    }
}

impl PlotBounds {
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.y.0 && y <= self.y.1
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DivergeConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field          | Purpose |
/// |----------------|---------|
/// | `sampling`     | Physics constants and driver stride/count |
/// | `bounds`       | Fixed chart ranges |
/// | `color_scheme` | Light or dark visuals and curve colors |
#[derive(Clone)]
pub struct DivergeConfig {
    pub sampling: SamplingConfig,
    pub bounds: PlotBounds,

    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the plot.
    pub headline: Option<String>,
    pub color_scheme: ColorScheme,
    pub legend: bool,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for DivergeConfig {
    fn default() -> Self {
        Self {
            sampling: SamplingConfig::default(),
            bounds: PlotBounds::default(),
            title: "Diverge".to_string(),
            headline: Some("Closed-form vs. Euler integration".to_string()),
            color_scheme: ColorScheme::default(),
            legend: true,
            native_options: None,
        }
    }
}
