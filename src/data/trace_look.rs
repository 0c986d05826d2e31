//! TraceLook: visual styling for plot traces.

use eframe::egui;
use egui_plot::LineStyle;

/// The visual presentation of a trace (color, visibility, line style).
#[derive(Debug, Clone)]
pub struct TraceLook {
    pub color: egui::Color32,
    pub visible: bool,
    pub width: f32,
    pub style: LineStyle,
}

impl Default for TraceLook {
    fn default() -> Self {
        Self {
            color: egui::Color32::GRAY,
            visible: true,
            width: 1.5,
            style: LineStyle::Solid,
        }
    }
}

impl TraceLook {
    /// Solid line of the default width in `color`.
    pub fn with_color(color: egui::Color32) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Width actually used for drawing; never thinner than 0.1 px.
    pub fn stroke_width(&self) -> f32 {
        self.width.max(0.1)
    }
}
