//! Full sensitivity report for one property

use log::info;
use serde::Serialize;

use super::banding::{BreakEvenBand, RoiBand};
use super::matrix::{build_break_even_matrix, build_roi_matrix, Matrix};
use super::scenarios::{generate_scenarios_with_break_even, ScenarioSet};
use super::sweep::{
    sweep_appreciation, sweep_break_even_by_appreciation, sweep_yield, BreakEvenPoint,
    SensitivityPoint,
};
use crate::assumptions::{AnalysisAxes, ScenarioRules};
use crate::error::Result;
use crate::params::InvestmentParameters;
use crate::projection::{BreakEvenResult, BreakEvenYear, EvaluationBreakdown, ReturnEngine};

/// Everything the sensitivity views display, computed in one pass
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub params: InvestmentParameters,
    pub evaluation: EvaluationBreakdown,
    pub break_even: BreakEvenResult,
    pub appreciation_sweep: Vec<SensitivityPoint>,
    /// Empty for owner-occupied properties
    pub yield_sweep: Vec<SensitivityPoint>,
    pub break_even_sweep: Vec<BreakEvenPoint>,
    pub roi_matrix: Matrix<f64>,
    pub roi_bands: Matrix<RoiBand>,
    pub break_even_matrix: Matrix<BreakEvenYear>,
    pub break_even_bands: Matrix<BreakEvenBand>,
    pub scenarios: ScenarioSet,
}

impl AnalysisReport {
    pub fn build(
        engine: &ReturnEngine,
        params: &InvestmentParameters,
        axes: &AnalysisAxes,
        rules: &ScenarioRules,
    ) -> Result<Self> {
        params.validate()?;
        axes.validate()?;

        let horizon = axes.break_even_horizon;

        let evaluation = engine.evaluate_detailed(params)?;
        let break_even = engine.simulate_break_even(params, horizon)?;

        let appreciation_sweep = sweep_appreciation(engine, params, &axes.appreciation_sweep)?;
        let yield_sweep = sweep_yield(engine, params, &axes.yield_sweep, axes.yield_baseline_tolerance)?;
        let break_even_sweep =
            sweep_break_even_by_appreciation(engine, params, &axes.appreciation_sweep, horizon)?;

        let roi_matrix = build_roi_matrix(engine, params, &axes.matrix_appreciation, &axes.matrix_yield)?;
        let break_even_matrix = build_break_even_matrix(
            engine,
            params,
            &axes.matrix_appreciation,
            &axes.matrix_yield,
            horizon,
        )?;

        let scenarios = generate_scenarios_with_break_even(engine, params, rules, horizon)?;

        info!(
            "Report built: ROI {:.2}%, break-even {:?}, {}x{} matrix",
            evaluation.result.roi,
            break_even.year(),
            roi_matrix.rows.len(),
            roi_matrix.yield_axis.len()
        );

        Ok(Self {
            params: *params,
            evaluation,
            break_even,
            appreciation_sweep,
            yield_sweep,
            break_even_sweep,
            roi_bands: roi_matrix.map(|roi| RoiBand::classify(*roi)),
            roi_matrix,
            break_even_bands: break_even_matrix.map(|year| BreakEvenBand::classify(*year)),
            break_even_matrix,
            scenarios,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::UsageType;

    fn params() -> InvestmentParameters {
        InvestmentParameters {
            purchase_price: 320_000.0,
            appreciation_rate: 4.0,
            annual_rent: 19_200.0,
            holding_period: 10,
            use_mortgage: true,
            down_payment_percent: 25.0,
            interest_rate: 3.9,
            loan_term_years: 25,
            property_size: Some(70.0),
            usage_type: UsageType::LongTerm,
            daily_rate: 0.0,
            occupancy_rate: 0.0,
        }
    }

    #[test]
    fn test_report_sections() {
        let engine = ReturnEngine::default();
        let report = AnalysisReport::build(
            &engine,
            &params(),
            &AnalysisAxes::default(),
            &ScenarioRules::default(),
        )
        .unwrap();

        assert_eq!(report.break_even.cumulative_profit_by_year.len(), 30);
        assert_eq!(report.appreciation_sweep.len(), 8);
        assert_eq!(report.yield_sweep.len(), 8);
        assert_eq!(report.break_even_sweep.len(), 8);
        assert_eq!(report.roi_matrix.rows.len(), 6);
        assert_eq!(report.roi_bands.rows.len(), 6);
        assert_eq!(report.break_even_matrix.yield_axis.len(), 6);

        // 19,200 / 320,000 = 6% is the yield baseline
        let flagged: Vec<f64> = report.yield_sweep.iter().filter(|p| p.is_baseline).map(|p| p.axis_value).collect();
        assert_eq!(flagged, vec![6.0]);

        assert_eq!(report.scenarios.base.roi, report.evaluation.result.roi);
        assert_eq!(
            report.roi_bands.get(4.0, 6.0),
            Some(&RoiBand::classify(*report.roi_matrix.get(4.0, 6.0).unwrap()))
        );
    }

    #[test]
    fn test_report_serializes() {
        let engine = ReturnEngine::default();
        let report = AnalysisReport::build(
            &engine,
            &params(),
            &AnalysisAxes::default(),
            &ScenarioRules::default(),
        )
        .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["roi_matrix"]["rows"].is_array());
        assert_eq!(json["scenarios"]["base"]["name"], "Base");
        assert!(json["params"]["usage_type"] == "long-term");
    }

    #[test]
    fn test_invalid_axes_rejected() {
        let engine = ReturnEngine::default();
        let axes = AnalysisAxes { break_even_horizon: 0, ..Default::default() };
        assert!(AnalysisReport::build(&engine, &params(), &axes, &ScenarioRules::default()).is_err());
    }
}
