//! Result types returned by the engine

use serde::{Deserialize, Serialize, Serializer};

/// Outcome of holding the property for the full holding period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Total return on the initial cash investment (%)
    pub roi: f64,
    pub net_profit: f64,
    /// Compound annual equivalent of `roi` (%)
    pub annualized_roi: f64,
}

/// Every intermediate figure behind a [`ScenarioResult`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationBreakdown {
    pub loan_amount: f64,
    pub monthly_payment: f64,
    pub annual_payment: f64,
    pub acquisition_costs: f64,
    pub annual_ongoing_costs: f64,
    pub total_ongoing_costs: f64,
    pub rental_income_per_year: f64,
    pub total_rental_income: f64,
    pub exit_value: f64,
    pub exit_costs: f64,
    /// Instalments paid while the property is held
    pub total_financing_cost: f64,
    /// Interest over the whole loan term
    pub total_interest: f64,
    pub initial_investment: f64,
    pub result: ScenarioResult,
}

/// Year-by-year cumulative profit and the first year it turns non-negative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    /// 1-indexed year of the first non-negative entry, or horizon + 1 if never reached
    pub break_even_year: u32,
    pub is_profitable: bool,
    /// Index 0 is the end of year 1
    pub cumulative_profit_by_year: Vec<f64>,
}

impl BreakEvenResult {
    /// Number of simulated years
    pub fn horizon(&self) -> u32 {
        self.cumulative_profit_by_year.len() as u32
    }

    pub fn year(&self) -> BreakEvenYear {
        if self.is_profitable {
            BreakEvenYear::Year(self.break_even_year)
        } else {
            BreakEvenYear::Never
        }
    }
}

/// Break-even year as shown in tables: a year number or "never"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BreakEvenYear {
    Year(u32),
    /// Not reached within the simulated horizon
    Never,
}

impl Serialize for BreakEvenYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BreakEvenYear::Year(year) => serializer.serialize_u32(*year),
            BreakEvenYear::Never => serializer.serialize_str("never"),
        }
    }
}
