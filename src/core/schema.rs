//! Positional column layout of the survey export.
//!
//! Columns are bound by position, never by the header text of the raw file.
//! `spdm_q7` sits in the last column because the question was added to the
//! questionnaire after collection had started.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Column names in input order.
pub const SURVEY_SCHEMA: [&str; 45] = [
    "Timestamp",
    "Above18",
    "Consent",
    "spdm_q1",
    "spdm_q2",
    "spdm_q3",
    "spdm_q4",
    "spdm_q5",
    "spdm_q6",
    "ims_q1",
    "ims_q2",
    "ims_q3",
    "ims_q4",
    "ims_q5",
    "ims_q6",
    "ims_q7",
    "ims_q8",
    "ims_q9",
    "ims_q10",
    "ims_q11",
    "ims_q12",
    "ims_q13",
    "ims_q14",
    "ims_q15",
    "ims_q16",
    "ims_q17",
    "ims_q18",
    "ims_q19",
    "ims_q20",
    "ims_q21",
    "ims_q22",
    "ims_q23",
    "ims_q24",
    "ims_q25",
    "Gender",
    "Age",
    "num_male_siblings",
    "num_female_siblings",
    "f_influence",
    "cousin_time",
    "cousins_num_males",
    "cousins_num_females",
    "relationship_status",
    "current_relationship_length",
    "spdm_q7",
];

pub const FIELD_COUNT: usize = SURVEY_SCHEMA.len();

pub const GENDER_FIELD: &str = "Gender";

/// SPDM questions in logical order (q1..q7), regardless of column position.
pub const SPDM_FIELDS: [&str; 7] = [
    "spdm_q1", "spdm_q2", "spdm_q3", "spdm_q4", "spdm_q5", "spdm_q6", "spdm_q7",
];

pub const IMS_FIELDS: [&str; 25] = [
    "ims_q1", "ims_q2", "ims_q3", "ims_q4", "ims_q5", "ims_q6", "ims_q7", "ims_q8", "ims_q9",
    "ims_q10", "ims_q11", "ims_q12", "ims_q13", "ims_q14", "ims_q15", "ims_q16", "ims_q17",
    "ims_q18", "ims_q19", "ims_q20", "ims_q21", "ims_q22", "ims_q23", "ims_q24", "ims_q25",
];

static FIELD_POSITIONS: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    SURVEY_SCHEMA
        .iter()
        .enumerate()
        .map(|(position, name)| (*name, position))
        .collect()
});

/// Column position of a schema field.
pub fn position_of(field: &str) -> Option<usize> {
    FIELD_POSITIONS.get(field).copied()
}
