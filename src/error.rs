//! Error types for sampling and for launching the viewer.

use thiserror::Error;

/// Rejected sampling parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    #[error("sample rate must be at least 1")]
    ZeroSampleRate,
    #[error("sample count must be at least 1")]
    ZeroSampleCount,
    #[error("step size must be finite and positive, got {0}")]
    InvalidStep(f64),
}

/// Top-level error returned by [`crate::run`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid sampling configuration: {0}")]
    Sample(#[from] SampleError),
    #[error("failed to open plot window: {0}")]
    Gui(#[from] eframe::Error),
}
