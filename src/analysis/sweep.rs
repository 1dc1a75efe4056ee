//! Single-variable sensitivity sweeps

use serde::Serialize;

use super::round_to;
use crate::error::Result;
use crate::params::InvestmentParameters;
use crate::projection::{BreakEvenYear, ReturnEngine};

/// One point of an ROI sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensitivityPoint {
    /// Swept value (appreciation % or yield %)
    pub axis_value: f64,
    /// Total ROI rounded to 1 decimal
    pub roi: f64,
    /// Annualized ROI rounded to 2 decimals
    pub annualized_roi: f64,
    /// Whether this point matches the caller's current parameters
    pub is_baseline: bool,
}

/// One point of a break-even sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakEvenPoint {
    pub axis_value: f64,
    pub break_even_year: BreakEvenYear,
    pub is_baseline: bool,
}

fn is_current_appreciation(params: &InvestmentParameters, rate: f64) -> bool {
    rate == params.appreciation_rate
}

fn point(axis_value: f64, roi: f64, annualized_roi: f64, is_baseline: bool) -> SensitivityPoint {
    SensitivityPoint {
        axis_value,
        roi: round_to(roi, 1),
        annualized_roi: round_to(annualized_roi, 2),
        is_baseline,
    }
}

/// Evaluate ROI at each appreciation rate, everything else held fixed
pub fn sweep_appreciation(
    engine: &ReturnEngine,
    params: &InvestmentParameters,
    rates: &[f64],
) -> Result<Vec<SensitivityPoint>> {
    params.validate()?;

    rates
        .iter()
        .map(|&rate| -> Result<SensitivityPoint> {
            let result = engine.evaluate(&params.with_appreciation(rate))?;
            Ok(point(
                rate,
                result.roi,
                result.annualized_roi,
                is_current_appreciation(params, rate),
            ))
        })
        .collect()
}

/// Evaluate ROI at each gross yield (% of purchase price)
///
/// Owner-occupied properties earn no rent, so the sweep is empty for them.
/// A yield within `tolerance` points of the current rent's yield is flagged
/// as the baseline.
pub fn sweep_yield(
    engine: &ReturnEngine,
    params: &InvestmentParameters,
    yields: &[f64],
    tolerance: f64,
) -> Result<Vec<SensitivityPoint>> {
    params.validate()?;
    if !params.usage_type.earns_rent() {
        return Ok(Vec::new());
    }

    let current_yield = params.rental_yield_percent();

    yields
        .iter()
        .map(|&yield_percent| -> Result<SensitivityPoint> {
            let result = engine.evaluate(&params.with_yield(yield_percent))?;
            Ok(point(
                yield_percent,
                result.roi,
                result.annualized_roi,
                (yield_percent - current_yield).abs() < tolerance,
            ))
        })
        .collect()
}

/// Break-even year at each appreciation rate
pub fn sweep_break_even_by_appreciation(
    engine: &ReturnEngine,
    params: &InvestmentParameters,
    rates: &[f64],
    max_years: u32,
) -> Result<Vec<BreakEvenPoint>> {
    params.validate_terms()?;

    rates
        .iter()
        .map(|&rate| -> Result<BreakEvenPoint> {
            let result = engine.simulate_break_even(&params.with_appreciation(rate), max_years)?;
            Ok(BreakEvenPoint {
                axis_value: rate,
                break_even_year: result.year(),
                is_baseline: is_current_appreciation(params, rate),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::AnalysisAxes;
    use crate::params::UsageType;

    fn cash_let() -> InvestmentParameters {
        InvestmentParameters {
            purchase_price: 400_000.0,
            appreciation_rate: 4.0,
            annual_rent: 22_000.0,
            holding_period: 10,
            use_mortgage: false,
            down_payment_percent: 0.0,
            interest_rate: 0.0,
            loan_term_years: 0,
            property_size: None,
            usage_type: UsageType::LongTerm,
            daily_rate: 0.0,
            occupancy_rate: 0.0,
        }
    }

    #[test]
    fn test_appreciation_sweep_flags_exact_match() {
        let engine = ReturnEngine::default();
        let axes = AnalysisAxes::default();
        let points = sweep_appreciation(&engine, &cash_let(), &axes.appreciation_sweep).unwrap();

        assert_eq!(points.len(), 8);
        let baselines: Vec<f64> = points.iter().filter(|p| p.is_baseline).map(|p| p.axis_value).collect();
        assert_eq!(baselines, vec![4.0]);

        // ROI rises with appreciation
        for pair in points.windows(2) {
            assert!(pair[1].roi > pair[0].roi);
        }
    }

    #[test]
    fn test_appreciation_sweep_rounding() {
        let engine = ReturnEngine::default();
        let params = cash_let();
        let points = sweep_appreciation(&engine, &params, &[6.0]).unwrap();

        let direct = engine.evaluate(&params.with_appreciation(6.0)).unwrap();
        assert_eq!(points[0].roi, (direct.roi * 10.0).round() / 10.0);
        assert_eq!(points[0].annualized_roi, (direct.annualized_roi * 100.0).round() / 100.0);
        assert!(!points[0].is_baseline);
    }

    #[test]
    fn test_no_baseline_for_off_axis_rate() {
        let engine = ReturnEngine::default();
        let params = InvestmentParameters { appreciation_rate: 3.0, ..cash_let() };
        let points = sweep_appreciation(&engine, &params, &AnalysisAxes::default().appreciation_sweep).unwrap();
        assert!(points.iter().all(|p| !p.is_baseline));
    }

    #[test]
    fn test_yield_sweep_baseline_tolerance() {
        let engine = ReturnEngine::default();
        // 26,000 / 400,000 = 6.5%, 1.5 points from both neighbours
        let params = InvestmentParameters { annual_rent: 26_000.0, ..cash_let() };
        let points = sweep_yield(&engine, &params, &[3.0, 5.0, 8.0], 0.5).unwrap();
        assert!(points.iter().all(|p| !p.is_baseline));

        // 22,400 / 400,000 = 5.6%
        let params = InvestmentParameters { annual_rent: 22_400.0, ..cash_let() };
        let points = sweep_yield(&engine, &params, &[3.0, 5.0, 6.0, 8.0], 0.5).unwrap();
        let flagged: Vec<f64> = points.iter().filter(|p| p.is_baseline).map(|p| p.axis_value).collect();
        assert_eq!(flagged, vec![6.0]);
    }

    #[test]
    fn test_yield_sweep_substitutes_rent() {
        let engine = ReturnEngine::default();
        let params = cash_let();
        let points = sweep_yield(&engine, &params, &[7.0], 0.5).unwrap();

        let direct = engine
            .evaluate(&InvestmentParameters { annual_rent: 28_000.0, ..params })
            .unwrap();
        assert_eq!(points[0].roi, (direct.roi * 10.0).round() / 10.0);
    }

    #[test]
    fn test_yield_sweep_empty_for_personal_use() {
        let engine = ReturnEngine::default();
        let params = InvestmentParameters { usage_type: UsageType::Personal, ..cash_let() };
        let points = sweep_yield(&engine, &params, &AnalysisAxes::default().yield_sweep, 0.5).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_break_even_sweep() {
        let engine = ReturnEngine::default();
        let points = sweep_break_even_by_appreciation(&engine, &cash_let(), &[0.0, 4.0, 10.0], 30).unwrap();

        assert_eq!(points.len(), 3);
        assert!(points[1].is_baseline);
        assert!(points[2].break_even_year <= points[1].break_even_year);
        assert!(points[1].break_even_year <= points[0].break_even_year);
    }

    #[test]
    fn test_invalid_params_fail_whole_sweep() {
        let engine = ReturnEngine::default();
        let params = InvestmentParameters { purchase_price: 0.0, ..cash_let() };
        assert!(sweep_appreciation(&engine, &params, &[1.0, 2.0]).is_err());
        assert!(sweep_yield(&engine, &params, &[5.0], 0.5).is_err());
    }
}
