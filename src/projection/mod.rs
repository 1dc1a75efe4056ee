//! Return projection engine: holding-period evaluation and break-even simulation

mod cost_model;
mod engine;
mod evaluator;
mod break_even;
mod results;

pub use cost_model::{CostModel, ProfitPolicy};
pub use engine::ReturnEngine;
pub use evaluator::annualize_roi;
pub use results::{BreakEvenResult, BreakEvenYear, EvaluationBreakdown, ScenarioResult};
