//! Cohort selection applied after enrichment.
//!
//! Two predicates decide whether an enriched row is kept:
//!
//! - **Completeness**: `ims >= 0`. A negative IMS means at least one of the
//!   25 questions had no recognized answer.
//! - **Gender exclusion**: rows whose `Gender` cell equals the excluded label
//!   exactly are dropped. The comparison is case-sensitive, so `"female"`
//!   is kept when the label is `"Female"`.
//!
//! # Examples
//!
//! ```rust
//! use scalemap::cohort::CohortFilter;
//! use scalemap::core::{RespondentRow, FIELD_COUNT};
//! use scalemap::enrich::enrich_rows;
//! use scalemap::scales::ClassificationThresholds;
//!
//! // every IMS answer blank, so ims = -25 and the row is incomplete
//! let blank = RespondentRow::from_values(0, vec![String::new(); FIELD_COUNT]).unwrap();
//! let enriched = enrich_rows(vec![blank], &ClassificationThresholds::default());
//!
//! let outcome = CohortFilter::default().apply(enriched);
//! assert_eq!(outcome.stats.dropped_incomplete, 1);
//! assert_eq!(outcome.stats.retained, 0);
//! ```

use crate::core::GENDER_FIELD;
use crate::enrich::EnrichedRow;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

/// Gender label removed from the cohort unless configured otherwise.
pub const DEFAULT_EXCLUDED_GENDER: &str = "Female";

/// Tracks why rows left the cohort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStatistics {
    /// Rows handed to the filter
    pub total_rows: usize,

    /// Rows dropped for an incomplete IMS questionnaire
    pub dropped_incomplete: usize,

    /// Rows dropped by the gender exclusion (only counts rows that passed
    /// the completeness check)
    pub dropped_by_gender: usize,

    /// Rows kept for export
    pub retained: usize,
}

impl FilterStatistics {
    pub fn total_dropped(&self) -> usize {
        self.dropped_incomplete + self.dropped_by_gender
    }

    /// Percentage of input rows kept.
    pub fn retention_rate(&self) -> f64 {
        if self.total_rows == 0 {
            return 0.0;
        }
        (self.retained as f64 / self.total_rows as f64) * 100.0
    }
}

#[inline]
pub fn has_complete_ims(row: &EnrichedRow) -> bool {
    row.derived.ims >= 0
}

#[inline]
pub fn matches_excluded_gender(row: &EnrichedRow, excluded_gender: &str) -> bool {
    row.row.get(GENDER_FIELD) == Some(excluded_gender)
}

#[derive(Debug)]
pub struct CohortOutcome {
    pub rows: Vec<EnrichedRow>,
    pub stats: FilterStatistics,
}

#[derive(Debug, Clone)]
pub struct CohortFilter {
    excluded_gender: String,
}

impl Default for CohortFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_GENDER)
    }
}

impl CohortFilter {
    pub fn new(excluded_gender: impl Into<String>) -> Self {
        Self {
            excluded_gender: excluded_gender.into(),
        }
    }

    pub fn excluded_gender(&self) -> &str {
        &self.excluded_gender
    }

    /// Run the completeness pass, then the gender pass.
    pub fn apply(&self, rows: Vec<EnrichedRow>) -> CohortOutcome {
        let _span = info_span!("cohort_filter", rows = rows.len()).entered();
        let mut stats = FilterStatistics {
            total_rows: rows.len(),
            ..FilterStatistics::default()
        };

        let complete: Vec<EnrichedRow> = rows
            .into_iter()
            .filter(|row| {
                let keep = has_complete_ims(row);
                if !keep {
                    debug!(row = row.row.index(), ims = row.derived.ims, "Dropping incomplete row");
                    stats.dropped_incomplete += 1;
                }
                keep
            })
            .collect();

        let retained: Vec<EnrichedRow> = complete
            .into_iter()
            .filter(|row| {
                let drop = matches_excluded_gender(row, &self.excluded_gender);
                if drop {
                    debug!(row = row.row.index(), "Dropping excluded gender");
                    stats.dropped_by_gender += 1;
                }
                !drop
            })
            .collect();

        stats.retained = retained.len();
        CohortOutcome {
            rows: retained,
            stats,
        }
    }
}
