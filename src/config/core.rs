use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cohort::DEFAULT_EXCLUDED_GENDER;
use crate::io::{InputEncoding, DEFAULT_OUTPUT_PATH};
use crate::scales::ClassificationThresholds;

/// Root configuration structure for scalemap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScalemapConfig {
    /// Input decoding
    #[serde(default)]
    pub input: Option<InputConfig>,

    /// Export location
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Cohort selection
    #[serde(default)]
    pub cohort: Option<CohortConfig>,

    /// Cross-classification cut points
    #[serde(default)]
    pub classification: Option<ClassificationThresholds>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    #[serde(default)]
    pub encoding: InputEncoding,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CohortConfig {
    /// Exact, case-sensitive `Gender` value removed from the cohort
    #[serde(default = "default_excluded_gender")]
    pub excluded_gender: String,
}

impl Default for CohortConfig {
    fn default() -> Self {
        Self {
            excluded_gender: default_excluded_gender(),
        }
    }
}

fn default_excluded_gender() -> String {
    DEFAULT_EXCLUDED_GENDER.to_string()
}

impl ScalemapConfig {
    pub fn encoding(&self) -> InputEncoding {
        self.input.as_ref().map(|i| i.encoding).unwrap_or_default()
    }

    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_default().path
    }

    pub fn excluded_gender(&self) -> String {
        self.cohort.clone().unwrap_or_default().excluded_gender
    }

    pub fn thresholds(&self) -> ClassificationThresholds {
        self.classification.unwrap_or_default()
    }
}
