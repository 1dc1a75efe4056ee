//! Cost, annualization, sweep-axis and scenario assumptions
//!
//! All fixed percentages the engine applies live here as named, overridable
//! values with a single declared default.

mod costs;
mod axes;
mod scenario_rules;

pub use costs::{AnnualizationPolicy, CostAssumptions};
pub use axes::AnalysisAxes;
pub use scenario_rules::ScenarioRules;

// ============================================================================
// Default Cost Rates
// ============================================================================
// Transaction and holding costs expressed as a fraction of a property value.
// - Acquisition applies once to the purchase price
// - Ongoing applies every year to the purchase price
// - Exit applies once to the sale value

/// Default acquisition cost rate (7% of purchase price)
pub const DEFAULT_ACQUISITION_COST_RATE: f64 = 0.07;

/// Default annual ownership/maintenance cost rate (2% of purchase price)
pub const DEFAULT_ONGOING_COST_RATE: f64 = 0.02;

/// Default disposal cost rate (2.5% of exit value)
pub const DEFAULT_EXIT_COST_RATE: f64 = 0.025;

/// Default share of short-term letting revenue kept after platform fees (85%)
pub const DEFAULT_SHORT_TERM_NET_FACTOR: f64 = 0.85;

/// Default break-even simulation horizon in years
pub const DEFAULT_BREAK_EVEN_HORIZON: u32 = 30;
