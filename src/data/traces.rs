//! The three curves of the divergence chart, ready for drawing.

use crate::color_scheme::ColorScheme;
use crate::data::trace_look::TraceLook;
use crate::integrator::IntegrationScheme;
use crate::sampling::Samples;

/// Which series a trace shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    ClosedForm,
    Stepwise,
    Difference,
}

impl CurveKind {
    /// Drawing order: closed form first, difference last.
    pub const ALL: [CurveKind; 3] = [
        CurveKind::ClosedForm,
        CurveKind::Stepwise,
        CurveKind::Difference,
    ];
}

pub const CLOSED_FORM_LABEL: &str = "Normale Integration";
pub const DIFFERENCE_LABEL: &str = "∆x";

#[derive(Debug, Clone)]
pub struct TraceData {
    pub kind: CurveKind,
    pub name: String,
    pub look: TraceLook,
    /// `[t, x]` pairs.
    pub points: Vec<[f64; 2]>,
}

/// Ordered set of traces built from one sampling run.
#[derive(Debug, Clone, Default)]
pub struct TracesCollection {
    traces: Vec<TraceData>,
}

impl TracesCollection {
    pub fn from_samples(
        samples: &Samples,
        scheme: IntegrationScheme,
        colors: ColorScheme,
    ) -> Self {
        let palette = colors.curve_colors();
        let traces = CurveKind::ALL
            .iter()
            .map(|&kind| {
                let (name, values, color) = match kind {
                    CurveKind::ClosedForm => {
                        (CLOSED_FORM_LABEL, &samples.closed_form, palette.closed_form)
                    }
                    CurveKind::Stepwise => (scheme.label(), &samples.stepwise, palette.stepwise),
                    CurveKind::Difference => {
                        (DIFFERENCE_LABEL, &samples.difference, palette.difference)
                    }
                };
                TraceData {
                    kind,
                    name: name.to_string(),
                    look: TraceLook::with_color(color),
                    points: samples
                        .time
                        .iter()
                        .zip(values)
                        .map(|(&t, &x)| [t, x])
                        .collect(),
                }
            })
            .collect();
        Self { traces }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraceData> {
        self.traces.iter()
    }

    pub fn get(&self, kind: CurveKind) -> Option<&TraceData> {
        self.traces.iter().find(|t| t.kind == kind)
    }

    pub fn get_mut(&mut self, kind: CurveKind) -> Option<&mut TraceData> {
        self.traces.iter_mut().find(|t| t.kind == kind)
    }

    /// Re-color all traces after the scheme changed.
    pub fn recolor(&mut self, colors: ColorScheme) {
        let palette = colors.curve_colors();
        for tr in &mut self.traces {
            tr.look.color = match tr.kind {
                CurveKind::ClosedForm => palette.closed_form,
                CurveKind::Stepwise => palette.stepwise,
                CurveKind::Difference => palette.difference,
            };
        }
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}
