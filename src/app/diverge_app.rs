//! Standalone application wrapper for the divergence chart.

use eframe::egui;
use egui_phosphor::regular::ARROWS_OUT;

use crate::color_scheme::ColorScheme;
use crate::config::{DivergeConfig, PlotBounds};
use crate::data::traces::{TracesCollection, DIFFERENCE_LABEL};
use crate::plot::render_plot;
use crate::sampling::Samples;

/// Shows one finished [`Samples`] run; the data never changes after creation.
pub struct DivergeApp {
    pub samples: Samples,
    pub traces: TracesCollection,
    pub bounds: PlotBounds,
    pub dt: f64,
    pub legend: bool,
    pub headline: Option<String>,

    pub color_scheme: ColorScheme,
    color_scheme_applied: bool,
    /// Restore the fixed bounds on the next frame.
    pending_fit: bool,
}

impl DivergeApp {
    pub fn new(samples: Samples, cfg: &DivergeConfig) -> Self {
        let traces =
            TracesCollection::from_samples(&samples, cfg.sampling.scheme, cfg.color_scheme);
        Self {
            samples,
            traces,
            bounds: cfg.bounds,
            dt: cfg.sampling.dt,
            legend: cfg.legend,
            headline: cfg.headline.clone(),
            color_scheme: cfg.color_scheme,
            color_scheme_applied: false,
            pending_fit: true,
        }
    }

    /// Ask for the fixed bounds to be restored on the next frame.
    pub fn request_fit(&mut self) {
        self.pending_fit = true;
    }

    pub fn fit_pending(&self) -> bool {
        self.pending_fit
    }

    /// Switch scheme; visuals are re-applied on the next frame.
    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        if scheme != self.color_scheme {
            self.color_scheme = scheme;
            self.traces.recolor(scheme);
            self.color_scheme_applied = false;
        }
    }

    /// Read-out of the final divergence shown in the top bar.
    pub fn summary(&self) -> String {
        match self.samples.last() {
            Some(row) => format!(
                "{DIFFERENCE_LABEL} at t = {} s: {:.1} m",
                row.time, row.difference
            ),
            None => "no samples".to_string(),
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("diverge_top_bar").show(ctx, |ui| {
            if let Some(h) = &self.headline {
                ui.heading(h);
            }
            ui.horizontal(|ui| {
                if ui
                    .button(format!("{ARROWS_OUT} Fit to view"))
                    .on_hover_text("Restore the fixed axis ranges")
                    .clicked()
                {
                    self.request_fit();
                }

                let mut selected = self.color_scheme;
                egui::ComboBox::from_id_salt("diverge_color_scheme")
                    .selected_text(selected.label())
                    .show_ui(ui, |ui| {
                        for scheme in ColorScheme::all() {
                            ui.selectable_value(&mut selected, *scheme, scheme.label());
                        }
                    });
                self.set_color_scheme(selected);

                ui.separator();
                ui.label(self.summary());
            });
        });
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// eframe integration
// ─────────────────────────────────────────────────────────────────────────────

impl eframe::App for DivergeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.color_scheme_applied {
            self.color_scheme.apply(ctx);
            self.color_scheme_applied = true;
        }

        self.render_top_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            render_plot(
                ui,
                &self.traces,
                &self.bounds,
                self.dt,
                self.legend,
                &mut self.pending_fit,
            );
        });
    }
}
