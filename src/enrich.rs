//! Row enrichment: attach every derived scale value to each respondent.

use crate::core::RespondentRow;
use crate::scales::{
    classify, compute_decision_power_index, compute_ims, compute_shared_power_index,
    compute_spdm, ClassificationThresholds, Index0To100, PowerClassification,
};
use serde::Serialize;
use tracing::{debug, info_span};

/// Names of the derived columns, in export order.
pub const DERIVED_COLUMNS: [&str; 5] = [
    "spdm",
    "ims",
    "DecisionPowerIndex",
    "SharedPowerIndex",
    "CrossClassifyDecisionPowerIndex",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedFields {
    pub spdm: u32,
    pub ims: i32,
    pub decision_power_index: Index0To100,
    pub shared_power_index: Index0To100,
    /// `None` when the indices fall in a gap between classification rules
    pub classification: Option<PowerClassification>,
}

impl DerivedFields {
    /// Cell text for each derived column, aligned with [`DERIVED_COLUMNS`].
    pub fn to_cells(&self) -> [String; 5] {
        [
            self.spdm.to_string(),
            self.ims.to_string(),
            self.decision_power_index.to_string(),
            self.shared_power_index.to_string(),
            self.classification
                .map(|c| c.label().to_string())
                .unwrap_or_default(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRow {
    pub row: RespondentRow,
    pub derived: DerivedFields,
}

pub fn derive_fields(row: &RespondentRow, thresholds: &ClassificationThresholds) -> DerivedFields {
    let decision_power_index = compute_decision_power_index(row);
    let shared_power_index = compute_shared_power_index(row);
    DerivedFields {
        spdm: compute_spdm(row),
        ims: compute_ims(row),
        decision_power_index,
        shared_power_index,
        classification: classify(
            shared_power_index.value(),
            decision_power_index.value(),
            thresholds,
        ),
    }
}

pub fn enrich_row(row: RespondentRow, thresholds: &ClassificationThresholds) -> EnrichedRow {
    let derived = derive_fields(&row, thresholds);
    debug!(
        row = row.index(),
        spdm = derived.spdm,
        ims = derived.ims,
        classification = ?derived.classification,
        "Enriched row"
    );
    EnrichedRow { row, derived }
}

pub fn enrich_rows(
    rows: Vec<RespondentRow>,
    thresholds: &ClassificationThresholds,
) -> Vec<EnrichedRow> {
    let _span = info_span!("enrich", rows = rows.len()).entered();
    rows.into_iter()
        .map(|row| enrich_row(row, thresholds))
        .collect()
}
