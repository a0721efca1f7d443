//! Raw scores normalized onto a bounded 0-100 index.
//!
//! # Rounding
//!
//! Indices are rounded to two decimals, halves away from zero. Neither
//! `spdm / 35` nor `k / 7` can land exactly on a half hundredth, so this
//! agrees with round-half-to-even on every value the scales can produce.
//!
//! ```rust
//! use scalemap::scales::indices::Index0To100;
//!
//! let index = Index0To100::from_fraction(27.0, 35.0);
//! assert_eq!(index.value(), 77.14);
//! assert_eq!(index.to_string(), "77.14");
//! assert_eq!(Index0To100::new(100.0).to_string(), "100.0");
//! ```

use super::calculators::compute_spdm;
use super::score_maps::{spdm_points, SPDM_EQUAL};
use crate::core::{Responses, SPDM_FIELDS};
use serde::{Deserialize, Serialize};

/// Maximum SPDM total (7 questions at 5 points).
pub const SPDM_MAX: f64 = 35.0;

/// Index on a 0-100 scale, held at two-decimal precision.
///
/// Values are clamped to [0.0, 100.0] and rounded on construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Index0To100(f64);

impl Index0To100 {
    pub fn new(value: f64) -> Self {
        Self(round_to_hundredths(value.clamp(0.0, 100.0)))
    }

    /// `part * 100 / whole`, in that order of operations.
    pub fn from_fraction(part: f64, whole: f64) -> Self {
        Self::new((part * 100.0) / whole)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Renders with at least one decimal place, the way the export has always
/// written float columns (`100.0`, `57.14`).
impl std::fmt::Display for Index0To100 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// SPDM normalized onto 0-100 (20.0 to 100.0 in practice).
pub fn compute_decision_power_index<R: Responses + ?Sized>(row: &R) -> Index0To100 {
    Index0To100::from_fraction(compute_spdm(row) as f64, SPDM_MAX)
}

/// Share of SPDM questions answered as "equal".
///
/// Unlike [`compute_spdm`], an unrecognized or missing answer counts as
/// shared here.
pub fn compute_shared_power_index<R: Responses + ?Sized>(row: &R) -> Index0To100 {
    let shared = SPDM_FIELDS
        .iter()
        .filter(|field| is_shared_answer(row.answer(field)))
        .count();
    Index0To100::from_fraction(shared as f64, SPDM_FIELDS.len() as f64)
}

fn is_shared_answer(answer: Option<&str>) -> bool {
    match answer {
        Some(SPDM_EQUAL) => true,
        Some(answer) => spdm_points(answer).is_none(),
        None => true,
    }
}
