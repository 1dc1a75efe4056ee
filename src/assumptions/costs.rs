//! Fixed-percentage cost assumptions

use serde::{Deserialize, Serialize};

use super::{
    DEFAULT_ACQUISITION_COST_RATE, DEFAULT_EXIT_COST_RATE, DEFAULT_ONGOING_COST_RATE,
    DEFAULT_SHORT_TERM_NET_FACTOR,
};

/// What to do when total ROI is at or below -100%, where the compound annual
/// rate has no real value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnualizationPolicy {
    /// Report -100% a year (a total loss)
    #[default]
    ClampToTotalLoss,
    /// Fail with `EngineError::DomainUndefined`
    Reject,
}

/// Cost rates applied by the evaluator and the break-even simulator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostAssumptions {
    /// One-off purchase costs as a fraction of purchase price
    #[serde(default = "default_acquisition")]
    pub acquisition_cost_rate: f64,

    /// Yearly ownership costs as a fraction of purchase price
    #[serde(default = "default_ongoing")]
    pub ongoing_cost_rate: f64,

    /// Sale costs as a fraction of exit value
    #[serde(default = "default_exit")]
    pub exit_cost_rate: f64,

    /// Fraction of gross short-term revenue left after booking platform fees
    #[serde(default = "default_short_term_net")]
    pub short_term_net_factor: f64,

    #[serde(default)]
    pub annualization: AnnualizationPolicy,
}

fn default_acquisition() -> f64 { DEFAULT_ACQUISITION_COST_RATE }
fn default_ongoing() -> f64 { DEFAULT_ONGOING_COST_RATE }
fn default_exit() -> f64 { DEFAULT_EXIT_COST_RATE }
fn default_short_term_net() -> f64 { DEFAULT_SHORT_TERM_NET_FACTOR }

impl Default for CostAssumptions {
    fn default() -> Self {
        Self {
            acquisition_cost_rate: DEFAULT_ACQUISITION_COST_RATE,
            ongoing_cost_rate: DEFAULT_ONGOING_COST_RATE,
            exit_cost_rate: DEFAULT_EXIT_COST_RATE,
            short_term_net_factor: DEFAULT_SHORT_TERM_NET_FACTOR,
            annualization: AnnualizationPolicy::ClampToTotalLoss,
        }
    }
}

impl CostAssumptions {
    /// Same rates, rejecting undefined annualized ROI instead of clamping it
    pub fn rejecting_total_loss(self) -> Self {
        Self {
            annualization: AnnualizationPolicy::Reject,
            ..self
        }
    }
}
