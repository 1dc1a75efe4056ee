//! Perturbation rules for the conservative and optimistic scenarios

use serde::{Deserialize, Serialize};

use crate::params::InvestmentParameters;

/// How the named scenarios shift the base parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRules {
    /// Percentage points removed from / added to appreciation
    #[serde(default = "default_appreciation_shift")]
    pub appreciation_shift: f64,

    /// Multiplier on rent and daily rate in the conservative case
    #[serde(default = "default_conservative_income")]
    pub conservative_income_factor: f64,

    /// Multiplier on rent and daily rate in the optimistic case
    #[serde(default = "default_optimistic_income")]
    pub optimistic_income_factor: f64,

    /// Occupancy points removed in the conservative case
    #[serde(default = "default_occupancy_cut")]
    pub occupancy_cut: f64,

    /// Lowest conservative occupancy (%)
    #[serde(default = "default_occupancy_floor")]
    pub occupancy_floor: f64,

    /// Occupancy points added in the optimistic case
    #[serde(default = "default_occupancy_lift")]
    pub occupancy_lift: f64,

    /// Highest optimistic occupancy (%)
    #[serde(default = "default_occupancy_cap")]
    pub occupancy_cap: f64,
}

fn default_appreciation_shift() -> f64 { 3.0 }
fn default_conservative_income() -> f64 { 0.85 }
fn default_optimistic_income() -> f64 { 1.15 }
fn default_occupancy_cut() -> f64 { 15.0 }
fn default_occupancy_floor() -> f64 { 30.0 }
fn default_occupancy_lift() -> f64 { 10.0 }
fn default_occupancy_cap() -> f64 { 95.0 }

impl Default for ScenarioRules {
    fn default() -> Self {
        Self {
            appreciation_shift: 3.0,
            conservative_income_factor: 0.85,
            optimistic_income_factor: 1.15,
            occupancy_cut: 15.0,
            occupancy_floor: 30.0,
            occupancy_lift: 10.0,
            occupancy_cap: 95.0,
        }
    }
}

impl ScenarioRules {
    /// Lower appreciation (never below zero), lower income and occupancy
    pub fn conservative(&self, base: &InvestmentParameters) -> InvestmentParameters {
        InvestmentParameters {
            appreciation_rate: (base.appreciation_rate - self.appreciation_shift).max(0.0),
            annual_rent: base.annual_rent * self.conservative_income_factor,
            daily_rate: base.daily_rate * self.conservative_income_factor,
            occupancy_rate: (base.occupancy_rate - self.occupancy_cut).max(self.occupancy_floor),
            ..*base
        }
    }

    /// Higher appreciation, higher income and occupancy (capped)
    pub fn optimistic(&self, base: &InvestmentParameters) -> InvestmentParameters {
        InvestmentParameters {
            appreciation_rate: base.appreciation_rate + self.appreciation_shift,
            annual_rent: base.annual_rent * self.optimistic_income_factor,
            daily_rate: base.daily_rate * self.optimistic_income_factor,
            occupancy_rate: (base.occupancy_rate + self.occupancy_lift).min(self.occupancy_cap),
            ..*base
        }
    }
}
