//! Run the full sensitivity analysis for one property
//!
//! Reads investment parameters (and optional assumption overrides) from JSON,
//! prints a summary and optionally writes the report as JSON and the ROI
//! matrix as CSV.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;

use property_returns::analysis::{AnalysisReport, Matrix};
use property_returns::{AnalysisAxes, CostAssumptions, InvestmentParameters, ReturnEngine, ScenarioRules};

#[derive(Parser, Debug)]
#[command(name = "run_analysis", about = "Investment return and break-even sensitivity analysis")]
struct Args {
    /// Investment parameters (JSON)
    #[arg(short, long)]
    params: PathBuf,

    /// Cost assumption overrides (JSON)
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Sweep and matrix axes (JSON)
    #[arg(long)]
    axes: Option<PathBuf>,

    /// Scenario perturbation rules (JSON)
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Break-even horizon in years, overrides the axes file
    #[arg(long)]
    horizon: Option<u32>,

    /// Fail instead of clamping annualized ROI when total ROI is -100% or worse
    #[arg(long)]
    reject_total_loss: bool,

    /// Write the full report here (JSON)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the ROI matrix here (CSV)
    #[arg(long)]
    matrix_csv: Option<PathBuf>,
}

#[derive(Serialize)]
struct ReportFile<'a> {
    generated_at: DateTime<Utc>,
    assumptions: &'a CostAssumptions,
    report: &'a AnalysisReport,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("Failed to parse {}", path.display()))
}

fn read_optional<T: DeserializeOwned + Default>(path: Option<&PathBuf>) -> Result<T> {
    match path {
        Some(path) => read_json(path),
        None => Ok(T::default()),
    }
}

fn write_matrix_csv(path: &Path, matrix: &Matrix<f64>) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("Failed to create {}", path.display()))?;

    let mut header = vec!["Appreciation".to_string()];
    header.extend(matrix.column_labels());
    writer.write_record(&header)?;

    for row in &matrix.rows {
        let mut record = vec![row.label.clone()];
        record.extend(row.cells.iter().map(|cell| format!("{:.4}", cell.value)));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let params: InvestmentParameters = read_json(&args.params)?;
    let mut costs: CostAssumptions = read_optional(args.assumptions.as_ref())?;
    let mut axes: AnalysisAxes = read_optional(args.axes.as_ref())?;
    let rules: ScenarioRules = read_optional(args.rules.as_ref())?;

    if args.reject_total_loss {
        costs = costs.rejecting_total_loss();
    }
    if let Some(horizon) = args.horizon {
        axes.break_even_horizon = horizon;
    }

    info!("Loaded parameters from {}", args.params.display());

    let engine = ReturnEngine::new(costs);
    let report = AnalysisReport::build(&engine, &params, &axes, &rules)
        .context("Analysis failed")?;

    let result = &report.evaluation.result;
    println!("Holding period: {} years", params.holding_period);
    println!("  Initial investment: {:.2}", report.evaluation.initial_investment);
    println!("  Net profit:         {:.2}", result.net_profit);
    println!("  ROI:                {:.2}%", result.roi);
    println!("  Annualized ROI:     {:.2}%", result.annualized_roi);
    if report.break_even.is_profitable {
        println!("  Break-even:         year {}", report.break_even.break_even_year);
    } else {
        println!("  Break-even:         not within {} years", axes.break_even_horizon);
    }

    println!("\nScenarios:");
    for scenario in report.scenarios.iter() {
        println!(
            "  {:<13} ROI {:>9.2}%  annualized {:>7.2}%  profit {:>14.2}",
            scenario.name, scenario.roi, scenario.annualized_roi, scenario.net_profit
        );
    }

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        let contents = ReportFile {
            generated_at: Utc::now(),
            assumptions: engine.costs(),
            report: &report,
        };
        serde_json::to_writer_pretty(file, &contents)?;
        println!("\nReport written to {}", path.display());
    }

    if let Some(path) = &args.matrix_csv {
        write_matrix_csv(path, &report.roi_matrix)?;
        println!("ROI matrix written to {}", path.display());
    }

    info!("Total time: {:?}", start.elapsed());
    Ok(())
}
