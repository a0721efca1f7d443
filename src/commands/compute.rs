use crate::cli::SummaryFormat;
use crate::cohort::CohortFilter;
use crate::config::{self, ScalemapConfig};
use crate::enrich::enrich_rows;
use crate::io;
use crate::report::RunSummary;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

pub struct ComputeConfig {
    pub path: PathBuf,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: SummaryFormat,
}

pub fn handle_compute(config: ComputeConfig) -> Result<()> {
    let settings = load_settings(config.config.as_deref())?;
    let output = config.output.clone().unwrap_or_else(|| settings.output_path());

    let summary = run_pipeline(&config.path, &output, &settings)?;

    match config.format {
        SummaryFormat::Terminal => print!("{}", summary.to_terminal()),
        SummaryFormat::Json => println!("{}", summary.to_json()?),
    }
    Ok(())
}

fn load_settings(explicit: Option<&std::path::Path>) -> Result<ScalemapConfig> {
    match explicit {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load configuration {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// Read, enrich, filter and export. Returns the summary of the run.
pub fn run_pipeline(
    input: &std::path::Path,
    output: &std::path::Path,
    settings: &ScalemapConfig,
) -> Result<RunSummary> {
    let rows = io::read_respondents(input, settings.encoding())
        .with_context(|| format!("Failed to load survey responses from {}", input.display()))?;

    let enriched = enrich_rows(rows, &settings.thresholds());
    let filter = CohortFilter::new(settings.excluded_gender());
    let outcome = filter.apply(enriched);
    info!(
        excluded_gender = filter.excluded_gender(),
        retained = outcome.stats.retained,
        dropped_incomplete = outcome.stats.dropped_incomplete,
        dropped_by_gender = outcome.stats.dropped_by_gender,
        "Cohort selected"
    );

    io::write_enriched(output, &outcome.rows)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(RunSummary::new(
        input.to_path_buf(),
        output.to_path_buf(),
        outcome.stats,
        &outcome.rows,
    ))
}
