//! Raw sub-scale scores.

use super::score_maps::{ims_points, spdm_points};
use crate::core::{Responses, IMS_FIELDS, SPDM_FIELDS};

/// Points credited to an SPDM answer that is empty, missing or not in the map.
///
/// This is the scale midpoint. It backfills `spdm_q7` for early respondents
/// who were never shown the question, and applies to every SPDM question.
pub const SPDM_NEUTRAL_POINTS: u32 = 3;

/// Offset subtracted from the IMS point total.
pub const IMS_OFFSET: i32 = 25;

/// Self-perceived decision-making score, 7..=35.
pub fn compute_spdm<R: Responses + ?Sized>(row: &R) -> u32 {
    SPDM_FIELDS
        .iter()
        .map(|field| {
            row.answer(field)
                .and_then(spdm_points)
                .unwrap_or(SPDM_NEUTRAL_POINTS)
        })
        .sum()
}

/// Index of Marital Satisfaction, -25..=100.
///
/// Unrecognized answers contribute nothing, so any negative result means the
/// questionnaire was not completed with recognized answers.
pub fn compute_ims<R: Responses + ?Sized>(row: &R) -> i32 {
    let total: u32 = IMS_FIELDS
        .iter()
        .enumerate()
        .filter_map(|(offset, field)| {
            row.answer(field)
                .and_then(|answer| ims_points(offset + 1, answer))
        })
        .sum();
    total as i32 - IMS_OFFSET
}
