//! Survey scale scoring.
//!
//! Every function here is a pure function of a single respondent's
//! answers, read through [`Responses`](crate::core::Responses).

pub mod calculators;
pub mod classification;
pub mod indices;
pub mod score_maps;

pub use calculators::{compute_ims, compute_spdm};
pub use classification::{
    classify, compute_cross_classification, compute_cross_classification_with,
    ClassificationThresholds, PowerClassification,
};
pub use indices::{compute_decision_power_index, compute_shared_power_index, Index0To100};
