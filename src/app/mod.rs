//! Native viewer for a finished sampling run.
//!
//! | Sub-module       | Responsibility |
//! | ---------------- | -------------- |
//! | [`diverge_app`]  | [`DivergeApp`] (eframe) with the top bar and central chart |
//! | [`run`]          | [`run_diverge()`] entry point and icon loading |

mod diverge_app;
mod run;

pub use diverge_app::DivergeApp;
pub use run::run_diverge;
