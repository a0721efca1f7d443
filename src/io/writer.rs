//! Export of the enriched cohort.

use crate::core::{Error, Result, SURVEY_SCHEMA};
use crate::enrich::{EnrichedRow, DERIVED_COLUMNS};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Default export location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "output.csv";

/// Header row: an unnamed row-index column, the survey schema, then the
/// derived columns.
pub fn export_header() -> Vec<&'static str> {
    std::iter::once("")
        .chain(SURVEY_SCHEMA.iter().copied())
        .chain(DERIVED_COLUMNS.iter().copied())
        .collect()
}

pub fn write_enriched(path: &Path, rows: &[EnrichedRow]) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        Error::file_system_with_source(
            format!("Failed to create output file {}", path.display()),
            path,
            e,
        )
    })?;
    write_enriched_to(file, rows)?;
    tracing::info!(rows = rows.len(), output = %path.display(), "Wrote enriched cohort");
    Ok(())
}

pub fn write_enriched_to<W: Write>(sink: W, rows: &[EnrichedRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(export_header())?;
    for enriched in rows {
        let index = enriched.row.index().to_string();
        let cells = enriched.derived.to_cells();
        writer.write_record(
            std::iter::once(index.as_str())
                .chain(enriched.row.values().iter().map(String::as_str))
                .chain(cells.iter().map(String::as_str)),
        )?;
    }
    writer.flush()?;
    Ok(())
}
