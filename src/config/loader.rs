use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::ScalemapConfig;
use crate::core::{Error, Result, ResultExt};

pub const CONFIG_FILE_NAME: &str = ".scalemap.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<ScalemapConfig> {
    let config = toml::from_str::<ScalemapConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;

    if let Some(thresholds) = &config.classification {
        thresholds.validate()?;
    }
    if let Some(cohort) = &config.cohort {
        if cohort.excluded_gender.is_empty() {
            return Err(Error::Configuration(
                "cohort.excluded_gender must not be empty".to_string(),
            ));
        }
    }

    Ok(config)
}

/// Load an explicitly requested config file. Any failure is fatal.
pub fn load_config_from(path: &Path) -> Result<ScalemapConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::file_system_with_source(
            format!("Failed to read config file {}", path.display()),
            path,
            e,
        )
    })?;
    let config = parse_and_validate_config(&contents)
        .context(format!("Invalid config file {}", path.display()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading a discovered config file; problems are logged, not fatal
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ScalemapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directories from `start` upwards, at most `max_depth` of them
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search the working directory and its ancestors for `.scalemap.toml`
pub fn load_config() -> ScalemapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return ScalemapConfig::default();
        }
    };

    discover_config(current, MAX_TRAVERSAL_DEPTH)
}

pub(crate) fn discover_config(start: PathBuf, max_depth: usize) -> ScalemapConfig {
    directory_ancestors(start, max_depth)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                max_depth
            );
            ScalemapConfig::default()
        })
}
