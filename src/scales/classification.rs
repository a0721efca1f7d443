//! Cross-classification of respondents by decision-making power.
//!
//! Combines the Shared Power Index and Decision Power Index into one of four
//! qualitative labels. The rules are checked in order and the first match
//! wins. Some combinations match no rule at all (for example a shared index
//! in `[lower, upper)` with a decision index at or below `lower`); those rows
//! stay unclassified rather than being forced into a label.

use super::indices::{compute_decision_power_index, compute_shared_power_index};
use crate::core::{Error, Responses, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PowerClassification {
    /// Most decisions are reported as shared equally
    Equalitarian,
    /// Few decisions shared
    FemaleDominant,
    /// Some decisions shared, decision power leans to the respondent
    MaleDominant,
    /// Some decisions shared, decision power in the middle band
    DividedPower,
}

impl PowerClassification {
    pub const ALL: [PowerClassification; 4] = [
        PowerClassification::Equalitarian,
        PowerClassification::FemaleDominant,
        PowerClassification::MaleDominant,
        PowerClassification::DividedPower,
    ];

    /// Label written to the export
    pub fn label(&self) -> &'static str {
        match self {
            PowerClassification::Equalitarian => "equalitarian",
            PowerClassification::FemaleDominant => "female-dominant",
            PowerClassification::MaleDominant => "male-dominant",
            PowerClassification::DividedPower => "divided-power",
        }
    }
}

impl std::fmt::Display for PowerClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Index cut points used by the classification rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    /// Shared index at or above this is equalitarian; decision index above
    /// it is male-dominant
    #[serde(default = "default_upper")]
    pub upper: f64,

    /// Shared index below this is female-dominant; decision index must be
    /// above it for divided-power
    #[serde(default = "default_lower")]
    pub lower: f64,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            upper: default_upper(),
            lower: default_lower(),
        }
    }
}

fn default_upper() -> f64 {
    66.0
}

fn default_lower() -> f64 {
    33.0
}

impl ClassificationThresholds {
    pub fn validate(&self) -> Result<()> {
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(self.lower) || !in_range(self.upper) {
            return Err(Error::Configuration(format!(
                "classification thresholds must lie within 0-100 (lower = {}, upper = {})",
                self.lower, self.upper
            )));
        }
        if self.lower >= self.upper {
            return Err(Error::Configuration(format!(
                "classification lower threshold ({}) must be below upper ({})",
                self.lower, self.upper
            )));
        }
        Ok(())
    }
}

/// Classify from already computed indices.
pub fn classify(
    shared_power_index: f64,
    decision_power_index: f64,
    thresholds: &ClassificationThresholds,
) -> Option<PowerClassification> {
    let ClassificationThresholds { upper, lower } = *thresholds;

    if shared_power_index >= upper {
        return Some(PowerClassification::Equalitarian);
    }
    if shared_power_index < lower {
        return Some(PowerClassification::FemaleDominant);
    }
    // shared_power_index < upper from here on
    if decision_power_index > upper {
        return Some(PowerClassification::MaleDominant);
    }
    if decision_power_index > lower && decision_power_index < upper {
        return Some(PowerClassification::DividedPower);
    }
    None
}

/// Classify a respondent using the default 66/33 cut points.
pub fn compute_cross_classification<R: Responses + ?Sized>(
    row: &R,
) -> Option<PowerClassification> {
    compute_cross_classification_with(row, &ClassificationThresholds::default())
}

/// Classify a respondent using the given cut points.
pub fn compute_cross_classification_with<R: Responses + ?Sized>(
    row: &R,
    thresholds: &ClassificationThresholds,
) -> Option<PowerClassification> {
    classify(
        compute_shared_power_index(row).value(),
        compute_decision_power_index(row).value(),
        thresholds,
    )
}
