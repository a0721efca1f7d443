// Export modules for library usage
pub mod cli;
pub mod cohort;
pub mod commands;
pub mod config;
pub mod core;
pub mod enrich;
pub mod io;
pub mod observability;
pub mod report;
pub mod scales;

// Re-export commonly used types
pub use crate::core::{Error, RespondentRow, Responses, Result, SURVEY_SCHEMA};

pub use crate::scales::{
    classify, compute_cross_classification, compute_decision_power_index, compute_ims,
    compute_shared_power_index, compute_spdm, ClassificationThresholds, Index0To100,
    PowerClassification,
};

pub use crate::enrich::{derive_fields, enrich_row, enrich_rows, DerivedFields, EnrichedRow};

pub use crate::cohort::{CohortFilter, CohortOutcome, FilterStatistics};

pub use crate::io::{read_respondents, write_enriched, InputEncoding};
