//! Property-based tests for the scale calculators
//!
//! These tests verify invariants that should hold for all answer patterns:
//! - IMS stays within [-25, 100]
//! - SPDM stays within [7, 35]
//! - A negative IMS always means some question lacked a recognized answer
//! - Classification is deterministic and respects the shared-index rules

use proptest::prelude::*;
use scalemap::core::{IMS_FIELDS, SPDM_FIELDS};
use scalemap::scales::score_maps::{IMS_SCORE_MAP, SPDM_SCORE_MAP};
use scalemap::scales::*;
use std::collections::HashMap;

/// A recognized answer, a blank, or free text nobody mapped
fn answer_from(known: Vec<String>) -> impl Strategy<Value = String> {
    prop_oneof![
        4 => proptest::sample::select(known),
        1 => Just(String::new()),
        1 => "[a-z ]{1,12}",
    ]
}

fn sorted_keys(map: &HashMap<&'static str, u32>) -> Vec<String> {
    let mut keys: Vec<String> = map.keys().map(|k| k.to_string()).collect();
    keys.sort();
    keys
}

fn questionnaire(
    fields: &'static [&'static str],
    known: Vec<String>,
) -> impl Strategy<Value = HashMap<String, String>> {
    proptest::collection::vec(answer_from(known), fields.len()).prop_map(move |answers| {
        fields
            .iter()
            .map(|f| f.to_string())
            .zip(answers)
            .collect()
    })
}

fn ims_answers() -> impl Strategy<Value = HashMap<String, String>> {
    questionnaire(&IMS_FIELDS, sorted_keys(&IMS_SCORE_MAP))
}

fn spdm_answers() -> impl Strategy<Value = HashMap<String, String>> {
    questionnaire(&SPDM_FIELDS, sorted_keys(&SPDM_SCORE_MAP))
}

proptest! {
    #[test]
    fn prop_ims_within_bounds(row in ims_answers()) {
        let ims = compute_ims(&row);
        prop_assert!((-25..=100).contains(&ims));
    }

    #[test]
    fn prop_negative_ims_implies_unrecognized_answer(row in ims_answers()) {
        let all_recognized = IMS_FIELDS
            .iter()
            .all(|f| IMS_SCORE_MAP.contains_key(row[*f].as_str()));
        if compute_ims(&row) < 0 {
            prop_assert!(!all_recognized);
        }
        if all_recognized {
            prop_assert!(compute_ims(&row) >= 0);
        }
    }

    #[test]
    fn prop_spdm_within_bounds(row in spdm_answers()) {
        let spdm = compute_spdm(&row);
        prop_assert!((7..=35).contains(&spdm));
    }

    #[test]
    fn prop_classification_is_deterministic(row in spdm_answers()) {
        prop_assert_eq!(
            compute_cross_classification(&row),
            compute_cross_classification(&row)
        );
    }

    #[test]
    fn prop_classification_follows_shared_index(shared in 0.0..=100.0f64, decision in 20.0..=100.0f64) {
        let thresholds = ClassificationThresholds::default();
        let class = classify(shared, decision, &thresholds);
        if shared >= 66.0 {
            prop_assert_eq!(class, Some(PowerClassification::Equalitarian));
        } else if shared < 33.0 {
            prop_assert_eq!(class, Some(PowerClassification::FemaleDominant));
        } else {
            prop_assert!(class != Some(PowerClassification::Equalitarian));
            prop_assert!(class != Some(PowerClassification::FemaleDominant));
        }
    }
}

#[test]
fn test_all_most_of_the_time_hits_exact_sum() {
    let row: HashMap<String, String> = IMS_FIELDS
        .iter()
        .map(|f| (f.to_string(), "Most or all of the time".to_string()))
        .collect();
    assert_eq!(compute_ims(&row), 48);
}

#[test]
fn test_ims_extremes() {
    let best: HashMap<String, String> = IMS_FIELDS
        .iter()
        .enumerate()
        .map(|(i, f)| {
            let answer = if score_maps::is_reverse_scored(i + 1) {
                "Rarely or none of the time"
            } else {
                "Most or all of the time"
            };
            (f.to_string(), answer.to_string())
        })
        .collect();
    assert_eq!(compute_ims(&best), 100);

    let blank: HashMap<String, String> = IMS_FIELDS
        .iter()
        .map(|f| (f.to_string(), String::new()))
        .collect();
    assert_eq!(compute_ims(&blank), -25);
}
