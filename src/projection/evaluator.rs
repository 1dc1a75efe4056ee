//! Holding-period evaluation: ROI, annualized ROI and net profit at sale

use log::debug;

use super::cost_model::{CostModel, ProfitPolicy};
use super::engine::ReturnEngine;
use super::results::{EvaluationBreakdown, ScenarioResult};
use crate::assumptions::AnnualizationPolicy;
use crate::error::{EngineError, Result};
use crate::params::InvestmentParameters;

/// Convert a total ROI over `years` into its compound annual rate
///
/// The root is undefined at or below -100%; `policy` decides between clamping
/// to -100% and failing. A non-finite ROI always fails.
pub fn annualize_roi(roi: f64, years: u32, policy: AnnualizationPolicy) -> Result<f64> {
    if years == 0 {
        return Err(EngineError::invalid("holding_period", "must be at least one year"));
    }
    if !roi.is_finite() {
        return Err(EngineError::DomainUndefined { roi });
    }
    if roi <= -100.0 {
        return match policy {
            AnnualizationPolicy::ClampToTotalLoss => {
                debug!("ROI {roi:.2}% is a total loss, annualized ROI clamped to -100%");
                Ok(-100.0)
            }
            AnnualizationPolicy::Reject => Err(EngineError::DomainUndefined { roi }),
        };
    }
    Ok(((1.0 + roi / 100.0).powf(1.0 / years as f64) - 1.0) * 100.0)
}

impl ReturnEngine {
    /// Evaluate the investment over its holding period
    pub fn evaluate(&self, params: &InvestmentParameters) -> Result<ScenarioResult> {
        self.evaluate_detailed(params).map(|breakdown| breakdown.result)
    }

    /// Evaluate and return every intermediate figure alongside the result
    pub fn evaluate_detailed(&self, params: &InvestmentParameters) -> Result<EvaluationBreakdown> {
        params.validate()?;

        let model = CostModel::new(params, self.costs());
        let years = params.holding_period;

        let net_profit = model.net_profit(years, ProfitPolicy::ExitLumpSum);
        let roi = net_profit / model.initial_investment * 100.0;
        let annualized_roi = annualize_roi(roi, years, self.costs().annualization)?;

        debug!(
            "Evaluated {} years: net profit {:.2}, ROI {:.4}%, annualized {:.4}%",
            years, net_profit, roi, annualized_roi
        );

        Ok(EvaluationBreakdown {
            loan_amount: model.loan_amount,
            monthly_payment: model.monthly_payment,
            annual_payment: model.annual_payment(),
            acquisition_costs: model.acquisition_costs,
            annual_ongoing_costs: model.annual_ongoing_costs,
            total_ongoing_costs: model.annual_ongoing_costs * years as f64,
            rental_income_per_year: model.rental_income_per_year,
            total_rental_income: model.rental_income_per_year * years as f64,
            exit_value: model.property_value(years),
            exit_costs: model.exit_costs(years),
            total_financing_cost: model.financing_cost(years),
            total_interest: if params.use_mortgage { model.total_interest() } else { 0.0 },
            initial_investment: model.initial_investment,
            result: ScenarioResult {
                roi,
                net_profit,
                annualized_roi,
            },
        })
    }
}
