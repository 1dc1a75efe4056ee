//! Property Returns - investment-return and break-even engine for a single property
//!
//! This library provides:
//! - Holding-period evaluation (total ROI, annualized ROI, net profit)
//! - Year-by-year break-even simulation with mortgage equity paydown
//! - Sensitivity sweeps over appreciation and rental yield
//! - Appreciation x yield matrices for ROI and break-even year
//! - Conservative / base / optimistic scenario comparison
//!
//! Every computation is a pure function of its inputs.

pub mod error;
pub mod params;
pub mod assumptions;
pub mod projection;
pub mod analysis;

#[cfg(test)]
mod fixture;

// Re-export commonly used types
pub use error::{EngineError, Result};
pub use params::{InvestmentParameters, UsageType};
pub use assumptions::{AnalysisAxes, AnnualizationPolicy, CostAssumptions, ScenarioRules};
pub use projection::{BreakEvenResult, EvaluationBreakdown, ReturnEngine, ScenarioResult};
pub use analysis::AnalysisReport;
