//! Color scheme definitions for the divergence viewer.
//!
//! A scheme decides the egui visuals and the three curve colors. The light
//! scheme reproduces the classic blue/red/black chart; the dark scheme swaps
//! black for a light grey so the difference curve stays readable.

use eframe::egui::{Color32, Context, Visuals};

/// Visual theme for the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Colors of the three curves, in drawing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveColors {
    pub closed_form: Color32,
    pub stepwise: Color32,
    pub difference: Color32,
}

impl ColorScheme {
    /// All built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Light, ColorScheme::Dark]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Light => "Light",
            ColorScheme::Dark => "Dark",
        }
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            ColorScheme::Light => Visuals::light(),
            ColorScheme::Dark => Visuals::dark(),
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }

    pub fn curve_colors(&self) -> CurveColors {
        match self {
            ColorScheme::Light => CurveColors {
                closed_form: Color32::BLUE,
                stepwise: Color32::RED,
                difference: Color32::BLACK,
            },
            ColorScheme::Dark => CurveColors {
                closed_form: Color32::from_rgb(31, 119, 180),
                stepwise: Color32::from_rgb(214, 39, 40),
                difference: Color32::LIGHT_GRAY,
            },
        }
    }
}
