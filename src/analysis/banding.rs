//! Severity bands used to colour matrix cells

use serde::Serialize;

use crate::projection::BreakEvenYear;

/// ROI severity, best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoiBand {
    /// 100% and above
    Best,
    /// 50% to under 100%
    Strong,
    /// 25% to under 50%
    Good,
    /// 0% to under 25%
    Weak,
    /// -25% to under 0%
    Poor,
    /// Below -25%
    Worst,
}

impl RoiBand {
    pub fn classify(roi: f64) -> Self {
        if roi >= 100.0 {
            RoiBand::Best
        } else if roi >= 50.0 {
            RoiBand::Strong
        } else if roi >= 25.0 {
            RoiBand::Good
        } else if roi >= 0.0 {
            RoiBand::Weak
        } else if roi >= -25.0 {
            RoiBand::Poor
        } else {
            RoiBand::Worst
        }
    }
}

/// Break-even severity, best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakEvenBand {
    /// Within 3 years
    Best,
    /// 4 to 7 years
    Good,
    /// 8 to 10 years
    Fair,
    /// 11 to 15 years
    Poor,
    /// Over 15 years or never
    Worst,
}

impl BreakEvenBand {
    pub fn classify(year: BreakEvenYear) -> Self {
        match year {
            BreakEvenYear::Year(y) if y <= 3 => BreakEvenBand::Best,
            BreakEvenYear::Year(y) if y <= 7 => BreakEvenBand::Good,
            BreakEvenYear::Year(y) if y <= 10 => BreakEvenBand::Fair,
            BreakEvenYear::Year(y) if y <= 15 => BreakEvenBand::Poor,
            BreakEvenYear::Year(_) | BreakEvenYear::Never => BreakEvenBand::Worst,
        }
    }
}
