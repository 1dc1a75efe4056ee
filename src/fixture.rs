//! Fixtures for tests

use crate::params::{InvestmentParameters, UsageType};

/// Financed long-term let: 1,000,000 price, 5% appreciation, 60,000 rent,
/// 5 years held, 20% down at 4% over 25 years
pub(crate) fn reference_params() -> InvestmentParameters {
    InvestmentParameters {
        purchase_price: 1_000_000.0,
        appreciation_rate: 5.0,
        annual_rent: 60_000.0,
        holding_period: 5,
        use_mortgage: true,
        down_payment_percent: 20.0,
        interest_rate: 4.0,
        loan_term_years: 25,
        property_size: Some(120.0),
        usage_type: UsageType::LongTerm,
        daily_rate: 0.0,
        occupancy_rate: 0.0,
    }
}

/// The reference property bought outright
pub(crate) fn cash_params() -> InvestmentParameters {
    InvestmentParameters {
        use_mortgage: false,
        down_payment_percent: 0.0,
        interest_rate: 0.0,
        loan_term_years: 0,
        ..reference_params()
    }
}
