pub mod reader;
pub mod writer;

pub use reader::{read_respondents, InputEncoding};
pub use writer::{write_enriched, DEFAULT_OUTPUT_PATH};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
