//! Input validation
//!
//! The engine never trusts values coming from the form layer, every entry point
//! re-validates before doing any arithmetic.

use super::InvestmentParameters;
use crate::error::{EngineError, Result};

/// Longest holding period, loan term or simulation horizon accepted, in years
pub const MAX_MODEL_YEARS: u32 = 100;

/// Reject year counts beyond [`MAX_MODEL_YEARS`]
pub(crate) fn within_year_limit(field: &'static str, years: u32) -> Result<()> {
    if years > MAX_MODEL_YEARS {
        return Err(EngineError::invalid(
            field,
            format!("must not exceed {MAX_MODEL_YEARS} years, got {years}"),
        ));
    }
    Ok(())
}

fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::invalid(field, format!("must be a finite number, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(EngineError::invalid(field, format!("must not be negative, got {value}")));
    }
    Ok(())
}

fn percentage(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(EngineError::invalid(field, format!("must be within [0, 100], got {value}")));
    }
    Ok(())
}

impl InvestmentParameters {
    /// Validate everything except the holding period (break-even simulation input)
    pub fn validate_terms(&self) -> Result<()> {
        finite("purchase_price", self.purchase_price)?;
        if self.purchase_price <= 0.0 {
            return Err(EngineError::invalid(
                "purchase_price",
                format!("must be greater than zero, got {}", self.purchase_price),
            ));
        }

        finite("appreciation_rate", self.appreciation_rate)?;
        non_negative("annual_rent", self.annual_rent)?;
        non_negative("daily_rate", self.daily_rate)?;
        percentage("occupancy_rate", self.occupancy_rate)?;
        percentage("down_payment_percent", self.down_payment_percent)?;
        non_negative("interest_rate", self.interest_rate)?;

        if let Some(size) = self.property_size {
            non_negative("property_size", size)?;
        }

        // Checked even for cash purchases, the term still feeds the month arithmetic
        within_year_limit("loan_term_years", self.loan_term_years)?;
        if self.use_mortgage && self.loan_term_years == 0 {
            return Err(EngineError::invalid(
                "loan_term_years",
                "must be greater than zero when a mortgage is used",
            ));
        }

        Ok(())
    }

    /// Validate the full parameter set including the holding period (evaluation input)
    pub fn validate(&self) -> Result<()> {
        self.validate_terms()?;
        if self.holding_period == 0 {
            return Err(EngineError::invalid("holding_period", "must be at least one year"));
        }
        within_year_limit("holding_period", self.holding_period)?;
        Ok(())
    }
}
