//! Conservative / base / optimistic scenario comparison

use serde::Serialize;

use crate::assumptions::ScenarioRules;
use crate::error::Result;
use crate::params::InvestmentParameters;
use crate::projection::{BreakEvenResult, ReturnEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    Conservative,
    Base,
    Optimistic,
}

impl ScenarioKind {
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::Conservative => "Conservative",
            ScenarioKind::Base => "Base",
            ScenarioKind::Optimistic => "Optimistic",
        }
    }

    /// Human-readable summary of how the scenario shifts the inputs
    pub fn describe(&self, rules: &ScenarioRules) -> String {
        match self {
            ScenarioKind::Conservative => format!(
                "Appreciation -{} pts (floor 0), income x{}, occupancy -{} pts (floor {}%)",
                rules.appreciation_shift,
                rules.conservative_income_factor,
                rules.occupancy_cut,
                rules.occupancy_floor
            ),
            ScenarioKind::Base => "Current assumptions".to_string(),
            ScenarioKind::Optimistic => format!(
                "Appreciation +{} pts, income x{}, occupancy +{} pts (cap {}%)",
                rules.appreciation_shift,
                rules.optimistic_income_factor,
                rules.occupancy_lift,
                rules.occupancy_cap
            ),
        }
    }

    /// Parameters for this scenario derived from the base set
    pub fn apply(&self, rules: &ScenarioRules, base: &InvestmentParameters) -> InvestmentParameters {
        match self {
            ScenarioKind::Conservative => rules.conservative(base),
            ScenarioKind::Base => *base,
            ScenarioKind::Optimistic => rules.optimistic(base),
        }
    }
}

/// Evaluated scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub name: String,
    pub description: String,
    pub roi: f64,
    pub annualized_roi: f64,
    pub net_profit: f64,
    /// Present when break-even was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_even: Option<BreakEvenResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSet {
    pub conservative: Scenario,
    pub base: Scenario,
    pub optimistic: Scenario,
}

impl ScenarioSet {
    /// Scenarios from worst to best case
    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        [&self.conservative, &self.base, &self.optimistic].into_iter()
    }
}

fn evaluate_kind(
    engine: &ReturnEngine,
    base: &InvestmentParameters,
    rules: &ScenarioRules,
    kind: ScenarioKind,
    break_even_years: Option<u32>,
) -> Result<Scenario> {
    let params = kind.apply(rules, base);
    let result = engine.evaluate(&params)?;
    let break_even = match break_even_years {
        Some(years) => Some(engine.simulate_break_even(&params, years)?),
        None => None,
    };

    Ok(Scenario {
        kind,
        name: kind.name().to_string(),
        description: kind.describe(rules),
        roi: result.roi,
        annualized_roi: result.annualized_roi,
        net_profit: result.net_profit,
        break_even,
    })
}

fn generate(
    engine: &ReturnEngine,
    params: &InvestmentParameters,
    rules: &ScenarioRules,
    break_even_years: Option<u32>,
) -> Result<ScenarioSet> {
    params.validate()?;
    Ok(ScenarioSet {
        conservative: evaluate_kind(engine, params, rules, ScenarioKind::Conservative, break_even_years)?,
        base: evaluate_kind(engine, params, rules, ScenarioKind::Base, break_even_years)?,
        optimistic: evaluate_kind(engine, params, rules, ScenarioKind::Optimistic, break_even_years)?,
    })
}

/// Evaluate the three named scenarios
pub fn generate_scenarios(
    engine: &ReturnEngine,
    params: &InvestmentParameters,
    rules: &ScenarioRules,
) -> Result<ScenarioSet> {
    generate(engine, params, rules, None)
}

/// Evaluate the three named scenarios and simulate break-even for each
pub fn generate_scenarios_with_break_even(
    engine: &ReturnEngine,
    params: &InvestmentParameters,
    rules: &ScenarioRules,
    max_years: u32,
) -> Result<ScenarioSet> {
    generate(engine, params, rules, Some(max_years))
}
