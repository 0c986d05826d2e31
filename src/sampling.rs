//! Sampling driver: runs the closed form and a stepwise integrator in lockstep.
//!
//! The driver index `i` starts at 1 and grows by one per iteration. Every
//! iteration evaluates the closed form at `i * dt` and pulls exactly one value
//! from the integrator, so both stay on the same step even when only every
//! `sample_rate`-th iteration is recorded.

use tracing::debug;

use crate::config::SamplingConfig;
use crate::error::SampleError;
use crate::kinematics::displacement;

/// One aligned row across all series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRow {
    pub time: f64,
    pub closed_form: f64,
    pub stepwise: f64,
    pub difference: f64,
}

/// Aligned series produced by [`sample`].
///
/// All four vectors have the same length; index `k` of each belongs to the
/// same sample time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Samples {
    pub time: Vec<f64>,
    pub closed_form: Vec<f64>,
    pub stepwise: Vec<f64>,
    /// `stepwise[k] - closed_form[k]`
    pub difference: Vec<f64>,
}

impl Samples {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn row(&self, k: usize) -> Option<SampleRow> {
        Some(SampleRow {
            time: *self.time.get(k)?,
            closed_form: *self.closed_form.get(k)?,
            stepwise: *self.stepwise.get(k)?,
            difference: *self.difference.get(k)?,
        })
    }

    pub fn last(&self) -> Option<SampleRow> {
        self.row(self.len().checked_sub(1)?)
    }

    pub fn rows(&self) -> impl Iterator<Item = SampleRow> + '_ {
        (0..self.len()).filter_map(move |k| self.row(k))
    }

    /// Largest absolute divergence, or `0.0` when empty.
    pub fn max_abs_difference(&self) -> f64 {
        self.difference
            .iter()
            .fold(0.0_f64, |acc, d| acc.max(d.abs()))
    }
}

/// Run the driver until `cfg.n_samples` samples are recorded.
///
/// Every series starts with a leading zero at `t = 0`, so the result holds
/// `n_samples + 1` rows.
///
/// ```
/// # use diverge::{config::SamplingConfig, sampling::sample};
/// let samples = sample(&SamplingConfig::default()).unwrap();
/// assert_eq!(samples.len(), 101);
/// assert_eq!(samples.time[1], 10.0);
/// ```
pub fn sample(cfg: &SamplingConfig) -> Result<Samples, SampleError> {
    if cfg.sample_rate == 0 {
        return Err(SampleError::ZeroSampleRate);
    }
    if cfg.n_samples == 0 {
        return Err(SampleError::ZeroSampleCount);
    }
    if !cfg.dt.is_finite() || cfg.dt <= 0.0 {
        return Err(SampleError::InvalidStep(cfg.dt));
    }

    let capacity = cfg.n_samples + 1;
    let mut time = Vec::with_capacity(capacity);
    let mut closed_form = Vec::with_capacity(capacity);
    let mut stepwise = Vec::with_capacity(capacity);
    time.push(0.0);
    closed_form.push(0.0);
    stepwise.push(0.0);

    let mut integrator = cfg.scheme.integrator(cfg.dt, cfg.gravity);
    let mut recorded = 0usize;
    let mut i: u64 = 1;
    loop {
        let t = i as f64 * cfg.dt;
        let exact = displacement(cfg.gravity, t);
        // Infinite iterator; advances on every iteration, recorded or not.
        let approx = integrator.next().unwrap_or(f64::NAN);
        if i % cfg.sample_rate == 0 {
            time.push(t);
            closed_form.push(exact);
            stepwise.push(approx);
            recorded += 1;
        }
        if recorded == cfg.n_samples {
            break;
        }
        i += 1;
    }

    let difference = stepwise
        .iter()
        .zip(&closed_form)
        .map(|(s, c)| s - c)
        .collect();

    debug!(
        scheme = ?cfg.scheme,
        steps = integrator.steps(),
        samples = time.len(),
        "sampling finished"
    );

    Ok(Samples {
        time,
        closed_form,
        stepwise,
        difference,
    })
}
