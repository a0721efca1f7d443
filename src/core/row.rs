use super::errors::{Error, Result};
use super::schema::{position_of, FIELD_COUNT};
use std::collections::{BTreeMap, HashMap};

/// Read-only view of one respondent's answers keyed by column name.
///
/// Scale calculators only ever ask for a field's text; they never coerce it.
/// A missing field and an empty cell are treated alike by every scorer.
pub trait Responses {
    fn answer(&self, field: &str) -> Option<&str>;
}

/// One data row of the survey export, bound positionally to the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RespondentRow {
    index: usize,
    values: Vec<String>,
}

impl RespondentRow {
    /// Build a row from values in schema order.
    ///
    /// `index` is the 0-based position of the row among the data rows of
    /// the input and is carried through to the export.
    pub fn from_values(index: usize, values: Vec<String>) -> Result<Self> {
        if values.len() != FIELD_COUNT {
            return Err(Error::Validation(format!(
                "row {} has {} fields, expected {}",
                index,
                values.len(),
                FIELD_COUNT
            )));
        }
        Ok(Self { index, values })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        position_of(field).map(|position| self.values[position].as_str())
    }
}

impl Responses for RespondentRow {
    fn answer(&self, field: &str) -> Option<&str> {
        self.get(field)
    }
}

impl Responses for HashMap<String, String> {
    fn answer(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl Responses for BTreeMap<String, String> {
    fn answer(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}
