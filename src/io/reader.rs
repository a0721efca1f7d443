//! Survey export reader.
//!
//! The first record is a header whose text is ignored; every later record is
//! bound to [`SURVEY_SCHEMA`](crate::core::SURVEY_SCHEMA) by position.

use crate::core::{Error, RespondentRow, Result, FIELD_COUNT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Text encoding of the input file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputEncoding {
    /// UTF-8 when the bytes are valid UTF-8, Latin-1 otherwise
    #[default]
    Auto,
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    #[serde(alias = "iso-8859-1")]
    Latin1,
}

pub fn read_respondents(path: &Path, encoding: InputEncoding) -> Result<Vec<RespondentRow>> {
    let bytes = fs::read(path).map_err(|e| {
        Error::file_system_with_source(
            format!("Failed to read input file {}", path.display()),
            path,
            e,
        )
    })?;
    let text = decode(&bytes, encoding, path)?;
    parse_respondents(&text, path)
}

pub fn decode(bytes: &[u8], encoding: InputEncoding, source: &Path) -> Result<String> {
    match encoding {
        InputEncoding::Latin1 => Ok(decode_latin1(bytes)),
        InputEncoding::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|e| {
            let valid = &bytes[..e.utf8_error().valid_up_to()];
            let line = valid.iter().filter(|b| **b == b'\n').count() + 1;
            Error::parse(source, line, "input is not valid UTF-8")
        }),
        InputEncoding::Auto => match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_string()),
            Err(_) => {
                log::debug!(
                    "{} is not valid UTF-8, decoding as Latin-1",
                    source.display()
                );
                Ok(decode_latin1(bytes))
            }
        },
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Parse already decoded CSV text. `source` is only used in error messages.
pub fn parse_respondents(text: &str, source: &Path) -> Result<Vec<RespondentRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = reader.records();

    let header = records
        .next()
        .ok_or_else(|| Error::parse(source, 1, "input has no header row"))??;
    check_field_count(&header, source)?;

    let mut rows = Vec::new();
    for (index, record) in records.enumerate() {
        let record = record?;
        check_field_count(&record, source)?;
        let values = record.iter().map(str::to_string).collect();
        rows.push(RespondentRow::from_values(index, values)?);
    }

    tracing::info!(rows = rows.len(), source = %source.display(), "Read survey responses");
    Ok(rows)
}

fn check_field_count(record: &csv::StringRecord, source: &Path) -> Result<()> {
    if record.len() == FIELD_COUNT {
        return Ok(());
    }
    let line = record
        .position()
        .map(|p| p.line() as usize)
        .unwrap_or_default();
    Err(Error::schema_mismatch(source, line, FIELD_COUNT, record.len()))
}
