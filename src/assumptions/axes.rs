//! Candidate values for sensitivity sweeps and matrices

use serde::{Deserialize, Serialize};

use super::DEFAULT_BREAK_EVEN_HORIZON;
use crate::error::{EngineError, Result};
use crate::params::within_year_limit;

/// Axis values used by the sweeper and matrix builder
///
/// Rates and yields are in percent. Yields are gross rent as a share of the
/// purchase price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisAxes {
    #[serde(default = "default_appreciation_sweep")]
    pub appreciation_sweep: Vec<f64>,

    #[serde(default = "default_yield_sweep")]
    pub yield_sweep: Vec<f64>,

    #[serde(default = "default_matrix_appreciation")]
    pub matrix_appreciation: Vec<f64>,

    #[serde(default = "default_matrix_yield")]
    pub matrix_yield: Vec<f64>,

    /// Years simulated for break-even figures
    #[serde(default = "default_horizon")]
    pub break_even_horizon: u32,

    /// Distance (percentage points) within which a swept yield counts as the current one
    #[serde(default = "default_yield_tolerance")]
    pub yield_baseline_tolerance: f64,
}

fn default_appreciation_sweep() -> Vec<f64> { vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 15.0] }
fn default_yield_sweep() -> Vec<f64> { vec![3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0] }
fn default_matrix_appreciation() -> Vec<f64> { vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0] }
fn default_matrix_yield() -> Vec<f64> { vec![3.0, 4.0, 5.0, 6.0, 7.0, 8.0] }
fn default_horizon() -> u32 { DEFAULT_BREAK_EVEN_HORIZON }
fn default_yield_tolerance() -> f64 { 0.5 }

impl Default for AnalysisAxes {
    fn default() -> Self {
        Self {
            appreciation_sweep: default_appreciation_sweep(),
            yield_sweep: default_yield_sweep(),
            matrix_appreciation: default_matrix_appreciation(),
            matrix_yield: default_matrix_yield(),
            break_even_horizon: DEFAULT_BREAK_EVEN_HORIZON,
            yield_baseline_tolerance: 0.5,
        }
    }
}

impl AnalysisAxes {
    pub fn validate(&self) -> Result<()> {
        let axes = [
            ("appreciation_sweep", &self.appreciation_sweep),
            ("yield_sweep", &self.yield_sweep),
            ("matrix_appreciation", &self.matrix_appreciation),
            ("matrix_yield", &self.matrix_yield),
        ];
        for (field, values) in axes {
            if values.is_empty() {
                return Err(EngineError::invalid(field, "must contain at least one value"));
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(EngineError::invalid(field, "must only contain finite values"));
            }
        }
        if self.break_even_horizon == 0 {
            return Err(EngineError::invalid("break_even_horizon", "must be at least one year"));
        }
        within_year_limit("break_even_horizon", self.break_even_horizon)?;
        if !self.yield_baseline_tolerance.is_finite() || self.yield_baseline_tolerance < 0.0 {
            return Err(EngineError::invalid(
                "yield_baseline_tolerance",
                "must be a non-negative finite number",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_axes() {
        let axes = AnalysisAxes::default();
        assert_eq!(axes.appreciation_sweep.len(), 8);
        assert_eq!(axes.appreciation_sweep.last(), Some(&15.0));
        assert_eq!(axes.yield_sweep.first(), Some(&3.0));
        assert_eq!(axes.matrix_appreciation.len(), 6);
        assert_eq!(axes.matrix_yield.len(), 6);
        assert_eq!(axes.break_even_horizon, 30);
        assert!(axes.validate().is_ok());
    }

    #[test]
    fn test_empty_axis_rejected() {
        let axes = AnalysisAxes {
            matrix_yield: vec![],
            ..Default::default()
        };
        assert!(matches!(
            axes.validate(),
            Err(EngineError::InvalidInput { field: "matrix_yield", .. })
        ));
    }
}
