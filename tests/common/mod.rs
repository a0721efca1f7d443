//! Shared fixture builders for integration tests.
#![allow(dead_code)]

use scalemap::core::{IMS_FIELDS, SPDM_FIELDS, SURVEY_SCHEMA};
use scalemap::scales::score_maps::*;
use std::fs;
use std::path::{Path, PathBuf};

/// A respondent in schema order, every field blank until set.
#[derive(Debug, Clone)]
pub struct RespondentBuilder {
    values: Vec<String>,
}

impl Default for RespondentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RespondentBuilder {
    pub fn new() -> Self {
        Self {
            values: vec![String::new(); SURVEY_SCHEMA.len()],
        }
    }

    pub fn set(mut self, field: &str, value: &str) -> Self {
        let position = SURVEY_SCHEMA
            .iter()
            .position(|name| *name == field)
            .unwrap_or_else(|| panic!("unknown field {field}"));
        self.values[position] = value.to_string();
        self
    }

    pub fn demographics(self, gender: &str) -> Self {
        self.set("Timestamp", "2017/03/01 10:00:00")
            .set("Above18", "Yes")
            .set("Consent", "Yes")
            .set("Gender", gender)
            .set("Age", "30")
            .set("num_male_siblings", "1")
            .set("num_female_siblings", "1")
            .set("f_influence", "3")
            .set("cousin_time", "2")
            .set("cousins_num_males", "4")
            .set("cousins_num_females", "2")
            .set("relationship_status", "Married")
            .set("current_relationship_length", "5")
    }

    pub fn spdm(mut self, answers: [&str; 7]) -> Self {
        for (field, answer) in SPDM_FIELDS.iter().zip(answers) {
            self = self.set(field, answer);
        }
        self
    }

    pub fn all_ims(mut self, answer: &str) -> Self {
        for field in IMS_FIELDS {
            self = self.set(field, answer);
        }
        self
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn line(&self) -> String {
        self.values.join(",")
    }
}

/// spdm 27, three shared answers: DecisionPowerIndex 77.14,
/// SharedPowerIndex 42.86, male-dominant.
pub const MALE_DOMINANT_SPDM: [&str; 7] = [
    SPDM_RESPONDENT_ALONE,
    SPDM_RESPONDENT_ALONE,
    SPDM_EQUAL,
    SPDM_EQUAL,
    SPDM_RESPONDENT_MORE,
    SPDM_RESPONDENT_MORE,
    SPDM_EQUAL,
];

pub fn complete_male() -> RespondentBuilder {
    RespondentBuilder::new()
        .demographics("Male")
        .spdm(MALE_DOMINANT_SPDM)
        .all_ims(IMS_GOOD_PART)
}

pub fn complete_female() -> RespondentBuilder {
    RespondentBuilder::new()
        .demographics("Female")
        .spdm([SPDM_EQUAL; 7])
        .all_ims(IMS_SOMETIME)
}

/// Answered SPDM but left the whole IMS questionnaire blank.
pub fn incomplete_male() -> RespondentBuilder {
    RespondentBuilder::new()
        .demographics("Male")
        .spdm([SPDM_PARTNER_MORE; 7])
}

/// The raw header of the survey export; its text is never used for binding.
pub fn raw_header() -> String {
    (0..SURVEY_SCHEMA.len())
        .map(|i| format!("Question {}", i + 1))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn survey_csv(respondents: &[RespondentBuilder]) -> String {
    let mut text = raw_header();
    text.push('\n');
    for respondent in respondents {
        text.push_str(&respondent.line());
        text.push('\n');
    }
    text
}

pub fn write_survey(dir: &Path, respondents: &[RespondentBuilder]) -> PathBuf {
    let path = dir.join("survey.csv");
    fs::write(&path, survey_csv(respondents)).unwrap();
    path
}
