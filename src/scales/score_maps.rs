//! Answer-text to point lookup tables.
//!
//! Keys are matched exactly (case and whitespace included). Anything else is
//! "unrecognized" and each calculator applies its own fallback.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const SPDM_RESPONDENT_ALONE: &str = "you alone";
pub const SPDM_RESPONDENT_MORE: &str = "you more than your partner";
pub const SPDM_EQUAL: &str = "you and your partner exactly the same";
pub const SPDM_PARTNER_MORE: &str = "your partner more than you";
pub const SPDM_PARTNER_ALONE: &str = "your partner alone";

pub const IMS_RARELY: &str = "Rarely or none of the time";
pub const IMS_LITTLE: &str = "A little of the time";
pub const IMS_SOMETIME: &str = "Sometime";
pub const IMS_GOOD_PART: &str = "A good part of the time";
pub const IMS_MOST: &str = "Most or all of the time";

/// IMS question numbers (1-based) that are scored with the reverse map.
pub const IMS_REVERSE_QUESTIONS: [usize; 13] = [1, 3, 5, 8, 9, 11, 13, 16, 17, 19, 20, 21, 23];

pub static SPDM_SCORE_MAP: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        (SPDM_RESPONDENT_ALONE, 5),
        (SPDM_RESPONDENT_MORE, 4),
        (SPDM_EQUAL, 3),
        (SPDM_PARTNER_MORE, 2),
        (SPDM_PARTNER_ALONE, 1),
    ])
});

pub static IMS_SCORE_MAP: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        (IMS_RARELY, 1),
        (IMS_LITTLE, 2),
        (IMS_SOMETIME, 3),
        (IMS_GOOD_PART, 4),
        (IMS_MOST, 5),
    ])
});

/// Mirror image of [`IMS_SCORE_MAP`]: every value is `6 - forward`.
pub static IMS_REVERSE_SCORE_MAP: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    IMS_SCORE_MAP
        .iter()
        .map(|(answer, points)| (*answer, 6 - points))
        .collect()
});

pub fn spdm_points(answer: &str) -> Option<u32> {
    SPDM_SCORE_MAP.get(answer).copied()
}

/// Points for IMS question `question` (1-based), honouring reverse scoring.
pub fn ims_points(question: usize, answer: &str) -> Option<u32> {
    let map = if is_reverse_scored(question) {
        &IMS_REVERSE_SCORE_MAP
    } else {
        &IMS_SCORE_MAP
    };
    map.get(answer).copied()
}

pub fn is_reverse_scored(question: usize) -> bool {
    IMS_REVERSE_QUESTIONS.contains(&question)
}
