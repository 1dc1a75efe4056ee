//! Shared per-year cost primitives
//!
//! Both the holding-period evaluator and the break-even simulator draw on the
//! same mortgage, rent and cost arithmetic. They differ only in how they
//! account for the loan, which is captured by [`ProfitPolicy`].

use crate::assumptions::CostAssumptions;
use crate::params::{InvestmentParameters, UsageType};

/// How net profit treats the mortgage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitPolicy {
    /// Profit at sale: the interest of the full loan term is charged in one
    /// lump and the cash invested up front is not deducted
    ExitLumpSum,
    /// Cumulative profit at a year end: the up-front cash is deducted and the
    /// principal repaid so far is credited back as equity
    YearlyEquityCredit,
}

/// Pre-computed financing and income figures for one parameter set
#[derive(Debug, Clone, Copy)]
pub struct CostModel {
    params: InvestmentParameters,
    costs: CostAssumptions,
    /// Principal borrowed
    pub loan_amount: f64,
    /// Monthly interest rate as a fraction
    pub monthly_rate: f64,
    /// Number of monthly instalments over the loan term
    pub total_months: u32,
    pub monthly_payment: f64,
    pub acquisition_costs: f64,
    pub annual_ongoing_costs: f64,
    pub rental_income_per_year: f64,
    /// Cash put in at purchase (down payment or full price, plus acquisition costs)
    pub initial_investment: f64,
}

impl CostModel {
    /// Build the model. Parameters are expected to be validated already.
    pub fn new(params: &InvestmentParameters, costs: &CostAssumptions) -> Self {
        let price = params.purchase_price;

        let loan_amount = if params.use_mortgage {
            price * (1.0 - params.down_payment_percent / 100.0)
        } else {
            0.0
        };

        let monthly_rate = params.interest_rate / 100.0 / 12.0;
        let total_months = params.loan_term_years * 12;
        let monthly_payment = monthly_payment(loan_amount, monthly_rate, total_months);

        let acquisition_costs = price * costs.acquisition_cost_rate;
        let annual_ongoing_costs = price * costs.ongoing_cost_rate;

        let rental_income_per_year = match params.usage_type {
            UsageType::LongTerm => params.annual_rent,
            UsageType::ShortTerm => {
                params.daily_rate * 365.0 * (params.occupancy_rate / 100.0) * costs.short_term_net_factor
            }
            UsageType::Personal => 0.0,
        };

        let initial_investment = if params.use_mortgage {
            price * params.down_payment_percent / 100.0 + acquisition_costs
        } else {
            price + acquisition_costs
        };

        Self {
            params: *params,
            costs: *costs,
            loan_amount,
            monthly_rate,
            total_months,
            monthly_payment,
            acquisition_costs,
            annual_ongoing_costs,
            rental_income_per_year,
            initial_investment,
        }
    }

    pub fn annual_payment(&self) -> f64 {
        self.monthly_payment * 12.0
    }

    /// Market value at the end of `year`
    pub fn property_value(&self, year: u32) -> f64 {
        self.params.purchase_price * (1.0 + self.params.appreciation_rate / 100.0).powi(year as i32)
    }

    /// Disposal costs if sold at the end of `year`
    pub fn exit_costs(&self, year: u32) -> f64 {
        self.property_value(year) * self.costs.exit_cost_rate
    }

    /// Mortgage instalments paid by the end of `year` (payments stop at the loan term)
    pub fn financing_cost(&self, year: u32) -> f64 {
        if !self.params.use_mortgage {
            return 0.0;
        }
        self.annual_payment() * year.min(self.params.loan_term_years) as f64
    }

    /// Interest over the entire loan term, independent of how long the property is held
    pub fn total_interest(&self) -> f64 {
        if self.loan_amount <= 0.0 {
            return 0.0;
        }
        self.monthly_payment * self.total_months as f64 - self.loan_amount
    }

    /// Outstanding principal at the end of `year`
    pub fn remaining_balance(&self, year: u32) -> f64 {
        if self.loan_amount <= 0.0 || year >= self.params.loan_term_years {
            return 0.0;
        }
        let remaining_months = (self.params.loan_term_years - year) * 12;
        if self.monthly_rate == 0.0 {
            return self.monthly_payment * remaining_months as f64;
        }
        self.monthly_payment * (1.0 - (1.0 + self.monthly_rate).powi(-(remaining_months as i32)))
            / self.monthly_rate
    }

    /// Net profit at the end of `year` under the given accounting policy
    pub fn net_profit(&self, year: u32, policy: ProfitPolicy) -> f64 {
        let years = year as f64;
        let capital_appreciation = self.property_value(year) - self.params.purchase_price;
        let operating = self.rental_income_per_year * years - self.annual_ongoing_costs * years;
        let base = capital_appreciation + operating - self.financing_cost(year) - self.exit_costs(year);

        match policy {
            ProfitPolicy::ExitLumpSum => {
                let interest = if self.params.use_mortgage { self.total_interest() } else { 0.0 };
                base - interest
            }
            ProfitPolicy::YearlyEquityCredit => {
                let equity = if self.params.use_mortgage {
                    self.loan_amount - self.remaining_balance(year)
                } else {
                    0.0
                };
                base - self.initial_investment + equity
            }
        }
    }
}

/// Fixed-rate annuity instalment. A zero rate spreads the principal evenly.
fn monthly_payment(loan_amount: f64, monthly_rate: f64, total_months: u32) -> f64 {
    if loan_amount <= 0.0 || total_months == 0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        return loan_amount / total_months as f64;
    }
    let growth = (1.0 + monthly_rate).powi(total_months as i32);
    loan_amount * monthly_rate * growth / (growth - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::reference_params;
    use approx::assert_relative_eq;

    #[test]
    fn test_annuity_payment() {
        let model = CostModel::new(&reference_params(), &CostAssumptions::default());

        assert_relative_eq!(model.loan_amount, 800_000.0);
        assert_relative_eq!(model.monthly_payment, 4_222.694_722, epsilon = 1e-5);
        assert_relative_eq!(model.total_interest(), 466_808.416_715, epsilon = 1e-4);
        assert_relative_eq!(model.initial_investment, 270_000.0);
    }

    #[test]
    fn test_remaining_balance_runs_down_to_zero() {
        let model = CostModel::new(&reference_params(), &CostAssumptions::default());

        assert_relative_eq!(model.remaining_balance(0), 800_000.0, epsilon = 1e-3);
        let mut previous = model.remaining_balance(0);
        for year in 1..25 {
            let balance = model.remaining_balance(year);
            assert!(balance < previous);
            previous = balance;
        }
        assert_eq!(model.remaining_balance(25), 0.0);
        assert_eq!(model.remaining_balance(40), 0.0);
    }

    #[test]
    fn test_zero_interest_mortgage() {
        let params = InvestmentParameters { interest_rate: 0.0, ..reference_params() };
        let model = CostModel::new(&params, &CostAssumptions::default());

        assert_relative_eq!(model.monthly_payment, 800_000.0 / 300.0);
        assert_relative_eq!(model.total_interest(), 0.0, epsilon = 1e-6);
        assert_relative_eq!(model.remaining_balance(5), 640_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_financing_stops_at_loan_term() {
        let model = CostModel::new(&reference_params(), &CostAssumptions::default());
        assert_relative_eq!(model.financing_cost(30), model.financing_cost(25));
        assert_relative_eq!(model.financing_cost(10), model.annual_payment() * 10.0);
    }

    #[test]
    fn test_rental_income_by_usage() {
        let costs = CostAssumptions::default();

        let long_term = CostModel::new(&reference_params(), &costs);
        assert_eq!(long_term.rental_income_per_year, 60_000.0);

        let short_term = InvestmentParameters {
            usage_type: UsageType::ShortTerm,
            daily_rate: 200.0,
            occupancy_rate: 60.0,
            ..reference_params()
        };
        let model = CostModel::new(&short_term, &costs);
        assert_relative_eq!(model.rental_income_per_year, 200.0 * 365.0 * 0.6 * 0.85);

        let personal = InvestmentParameters { usage_type: UsageType::Personal, ..reference_params() };
        assert_eq!(CostModel::new(&personal, &costs).rental_income_per_year, 0.0);
    }

    #[test]
    fn test_cash_purchase_has_no_financing() {
        let params = InvestmentParameters { use_mortgage: false, ..reference_params() };
        let model = CostModel::new(&params, &CostAssumptions::default());

        assert_eq!(model.loan_amount, 0.0);
        assert_eq!(model.monthly_payment, 0.0);
        assert_eq!(model.financing_cost(10), 0.0);
        assert_eq!(model.total_interest(), 0.0);
        assert_eq!(model.remaining_balance(3), 0.0);
        assert_relative_eq!(model.initial_investment, 1_070_000.0);
    }

    #[test]
    fn test_policies_differ_only_in_loan_treatment() {
        let model = CostModel::new(&reference_params(), &CostAssumptions::default());
        let lump = model.net_profit(5, ProfitPolicy::ExitLumpSum);
        let equity = model.net_profit(5, ProfitPolicy::YearlyEquityCredit);

        let paid_down = model.loan_amount - model.remaining_balance(5);
        assert_relative_eq!(
            equity - lump,
            model.total_interest() - model.initial_investment + paid_down,
            epsilon = 1e-6
        );
    }
}
