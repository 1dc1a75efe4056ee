//! Sensitivity analysis built on the return engine
//!
//! Every driver here clones the caller's parameters, substitutes one or two
//! values and calls the engine again. Points and cells never share state.

mod sweep;
mod matrix;
mod scenarios;
mod banding;
mod report;

pub use sweep::{
    sweep_appreciation, sweep_break_even_by_appreciation, sweep_yield, BreakEvenPoint,
    SensitivityPoint,
};
pub use matrix::{build_break_even_matrix, build_roi_matrix, Matrix, MatrixCell, MatrixRow};
pub use scenarios::{generate_scenarios, generate_scenarios_with_break_even, Scenario, ScenarioKind, ScenarioSet};
pub use banding::{BreakEvenBand, RoiBand};
pub use report::AnalysisReport;

/// Round half away from zero to `decimals` places
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
