//! Error taxonomy for the return engine

use thiserror::Error;

/// Errors raised by the engine. All failures are synchronous and leave no partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid input: {field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    #[error("Annualized ROI is undefined for total ROI of {roi:.4}% (must be finite and above -100%)")]
    DomainUndefined { roi: f64 },
}

impl EngineError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
