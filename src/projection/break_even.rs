//! Year-by-year break-even simulation

use log::debug;

use super::cost_model::{CostModel, ProfitPolicy};
use super::engine::ReturnEngine;
use super::results::BreakEvenResult;
use crate::assumptions::DEFAULT_BREAK_EVEN_HORIZON;
use crate::error::{EngineError, Result};
use crate::params::{within_year_limit, InvestmentParameters};

impl ReturnEngine {
    /// Simulate cumulative profit for years 1..=`max_years`
    ///
    /// `holding_period` is ignored. Unlike [`ReturnEngine::evaluate`], each
    /// year deducts the up-front cash and credits principal repaid so far.
    pub fn simulate_break_even(
        &self,
        params: &InvestmentParameters,
        max_years: u32,
    ) -> Result<BreakEvenResult> {
        params.validate_terms()?;
        if max_years == 0 {
            return Err(EngineError::invalid("max_years", "must be at least one year"));
        }
        within_year_limit("max_years", max_years)?;

        let model = CostModel::new(params, self.costs());

        let mut cumulative_profit_by_year = Vec::with_capacity(max_years as usize);
        let mut first_profitable: Option<u32> = None;

        for year in 1..=max_years {
            let net_profit = model.net_profit(year, ProfitPolicy::YearlyEquityCredit);
            if !net_profit.is_finite() {
                return Err(EngineError::invalid(
                    "appreciation_rate",
                    format!("drives the property value past representable range by year {year}"),
                ));
            }
            if first_profitable.is_none() && net_profit >= 0.0 {
                first_profitable = Some(year);
            }
            cumulative_profit_by_year.push(net_profit);
        }

        let result = BreakEvenResult {
            break_even_year: first_profitable.unwrap_or(max_years + 1),
            is_profitable: first_profitable.is_some(),
            cumulative_profit_by_year,
        };

        debug!(
            "Break-even over {} years: year {} (profitable: {})",
            max_years, result.break_even_year, result.is_profitable
        );

        Ok(result)
    }

    /// Simulate over the default 30-year horizon
    pub fn simulate_break_even_default(&self, params: &InvestmentParameters) -> Result<BreakEvenResult> {
        self.simulate_break_even(params, DEFAULT_BREAK_EVEN_HORIZON)
    }
}
