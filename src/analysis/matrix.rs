//! Two-dimensional sensitivity matrices (appreciation x rental yield)

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{EngineError, Result};
use crate::params::InvestmentParameters;
use crate::projection::{BreakEvenYear, ReturnEngine};

/// One cell of a matrix row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixCell<T> {
    pub yield_rate: f64,
    pub value: T,
}

/// All cells sharing one appreciation rate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow<T> {
    /// Row key, e.g. "4%"
    pub label: String,
    pub appreciation_rate: f64,
    pub cells: Vec<MatrixCell<T>>,
}

/// Values indexed by (appreciation rate, yield rate)
///
/// Rows follow the appreciation axis order, cells within a row follow the
/// yield axis order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix<T> {
    pub yield_axis: Vec<f64>,
    pub rows: Vec<MatrixRow<T>>,
}

impl<T> Matrix<T> {
    /// Cell at the given axis values
    pub fn get(&self, appreciation_rate: f64, yield_rate: f64) -> Option<&T> {
        self.rows
            .iter()
            .find(|row| row.appreciation_rate == appreciation_rate)?
            .cells
            .iter()
            .find(|cell| cell.yield_rate == yield_rate)
            .map(|cell| &cell.value)
    }

    /// Column keys, e.g. "6%", in axis order
    pub fn column_labels(&self) -> Vec<String> {
        self.yield_axis.iter().map(|y| axis_label(*y)).collect()
    }

    /// Same shape with every value transformed, e.g. into severity bands
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Matrix<U> {
        Matrix {
            yield_axis: self.yield_axis.clone(),
            rows: self
                .rows
                .iter()
                .map(|row| MatrixRow {
                    label: row.label.clone(),
                    appreciation_rate: row.appreciation_rate,
                    cells: row
                        .cells
                        .iter()
                        .map(|cell| MatrixCell {
                            yield_rate: cell.yield_rate,
                            value: f(&cell.value),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

fn axis_label(value: f64) -> String {
    format!("{value}%")
}

/// Yield columns actually used: owner-occupied properties get one synthetic 0% column
fn effective_yield_axis(params: &InvestmentParameters, yield_axis: &[f64]) -> Vec<f64> {
    if params.usage_type.earns_rent() {
        yield_axis.to_vec()
    } else {
        vec![0.0]
    }
}

fn build_matrix<T, F>(
    params: &InvestmentParameters,
    appreciation_axis: &[f64],
    yield_axis: &[f64],
    cell_value: F,
) -> Result<Matrix<T>>
where
    T: Send,
    F: Fn(&InvestmentParameters) -> Result<T> + Sync,
{
    if appreciation_axis.is_empty() {
        return Err(EngineError::invalid("matrix_appreciation", "must contain at least one value"));
    }
    if yield_axis.is_empty() {
        return Err(EngineError::invalid("matrix_yield", "must contain at least one value"));
    }

    let yields = effective_yield_axis(params, yield_axis);

    // Cells are independent, rows are computed in parallel and collected in axis order
    let rows = appreciation_axis
        .par_iter()
        .map(|&rate| -> Result<MatrixRow<T>> {
            let cells = yields
                .iter()
                .map(|&yield_rate| -> Result<MatrixCell<T>> {
                    let cell_params = params.with_appreciation(rate).with_yield(yield_rate);
                    Ok(MatrixCell {
                        yield_rate,
                        value: cell_value(&cell_params)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(MatrixRow {
                label: axis_label(rate),
                appreciation_rate: rate,
                cells,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Matrix {
        yield_axis: yields,
        rows,
    })
}

/// Total ROI (%) for every appreciation x yield combination
pub fn build_roi_matrix(
    engine: &ReturnEngine,
    params: &InvestmentParameters,
    appreciation_axis: &[f64],
    yield_axis: &[f64],
) -> Result<Matrix<f64>> {
    params.validate()?;
    build_matrix(params, appreciation_axis, yield_axis, |cell| {
        engine.evaluate(cell).map(|result| result.roi)
    })
}

/// Break-even year for every appreciation x yield combination, "never" past `max_years`
pub fn build_break_even_matrix(
    engine: &ReturnEngine,
    params: &InvestmentParameters,
    appreciation_axis: &[f64],
    yield_axis: &[f64],
    max_years: u32,
) -> Result<Matrix<BreakEvenYear>> {
    params.validate_terms()?;
    build_matrix(params, appreciation_axis, yield_axis, |cell| {
        engine.simulate_break_even(cell, max_years).map(|result| result.year())
    })
}
