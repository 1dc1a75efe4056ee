//! Parameter set describing one property investment

use serde::{Deserialize, Serialize};

/// How the owner uses the property, which decides where rental income comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsageType {
    /// Owner-occupied, no rental income
    Personal,
    /// Let on an annual lease, income is `annual_rent`
    #[default]
    LongTerm,
    /// Holiday letting, income is derived from `daily_rate` and `occupancy_rate`
    ShortTerm,
}

impl UsageType {
    /// Whether the usage produces any rental income at all
    pub fn earns_rent(&self) -> bool {
        !matches!(self, UsageType::Personal)
    }
}

/// Inputs for a single property investment
///
/// Percentages are expressed in percent (5.0 = 5%), not as fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentParameters {
    /// Purchase price in currency units
    pub purchase_price: f64,

    /// Annual capital appreciation (%)
    #[serde(default)]
    pub appreciation_rate: f64,

    /// Rent per year, used for long-term letting
    #[serde(default)]
    pub annual_rent: f64,

    /// Years held before sale (evaluation only, the break-even simulation runs its own horizon)
    #[serde(default)]
    pub holding_period: u32,

    #[serde(default)]
    pub use_mortgage: bool,

    /// Down payment as % of the purchase price
    #[serde(default)]
    pub down_payment_percent: f64,

    /// Nominal annual mortgage rate (%), compounded monthly
    #[serde(default)]
    pub interest_rate: f64,

    #[serde(default)]
    pub loan_term_years: u32,

    /// Floor area, carried through for per-area metrics but not used in any return figure
    #[serde(default)]
    pub property_size: Option<f64>,

    #[serde(default)]
    pub usage_type: UsageType,

    /// Nightly rate for short-term letting
    #[serde(default)]
    pub daily_rate: f64,

    /// Share of nights booked (%) for short-term letting
    #[serde(default)]
    pub occupancy_rate: f64,
}

impl InvestmentParameters {
    /// Gross yield implied by the configured annual rent, in % of the purchase price
    pub fn rental_yield_percent(&self) -> f64 {
        self.annual_rent / self.purchase_price * 100.0
    }

    /// Copy with a different appreciation rate
    pub fn with_appreciation(&self, appreciation_rate: f64) -> Self {
        Self {
            appreciation_rate,
            ..*self
        }
    }

    /// Copy whose annual rent is `yield_percent` of the purchase price
    pub fn with_yield(&self, yield_percent: f64) -> Self {
        Self {
            annual_rent: self.purchase_price * yield_percent / 100.0,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_type_serde_names() {
        let json = serde_json::to_string(&UsageType::ShortTerm).unwrap();
        assert_eq!(json, "\"short-term\"");

        let parsed: UsageType = serde_json::from_str("\"long-term\"").unwrap();
        assert_eq!(parsed, UsageType::LongTerm);
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let params: InvestmentParameters =
            serde_json::from_str(r#"{"purchase_price": 500000.0, "holding_period": 10}"#).unwrap();

        assert_eq!(params.purchase_price, 500_000.0);
        assert_eq!(params.holding_period, 10);
        assert!(!params.use_mortgage);
        assert_eq!(params.usage_type, UsageType::LongTerm);
        assert_eq!(params.property_size, None);
    }

    #[test]
    fn test_with_yield_sets_rent() {
        let params: InvestmentParameters =
            serde_json::from_str(r#"{"purchase_price": 400000.0, "holding_period": 5}"#).unwrap();

        let shifted = params.with_yield(6.0);
        assert!((shifted.annual_rent - 24_000.0).abs() < 1e-9);
        assert!((shifted.rental_yield_percent() - 6.0).abs() < 1e-9);
        assert_eq!(shifted.holding_period, 5);
    }
}
