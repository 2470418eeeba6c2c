use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ScrapeError;
use crate::models::ScrapedResult;

/// Pretty-prints with two-space indentation.
pub fn to_json(result: &ScrapedResult) -> Result<String, ScrapeError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Creates or truncates `path` and writes `json` to it.
pub fn save_to_file(json: &str, path: &Path) -> Result<(), ScrapeError> {
    let write_failed = |source| ScrapeError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(write_failed)?;
    file.write_all(json.as_bytes()).map_err(write_failed)?;
    Ok(())
}
