//! Investment parameter types and input validation

mod data;
mod validation;

pub use data::{InvestmentParameters, UsageType};
pub use validation::MAX_MODEL_YEARS;
pub(crate) use validation::within_year_limit;
