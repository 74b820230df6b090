use crate::consts::DEFAULT_ITEMS_FILE;
use eyre::{Result, eyre};
use std::path::{Path, PathBuf};

/// Locate the items file.
/// If `file_override` is Some(path) that path is used and must exist.
/// Otherwise `items.csv` is looked up in the current directory.
pub fn detect_items_file(file_override: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    detect_items_file_in(&cwd, file_override)
}

/// Same as [`detect_items_file`], resolving relative paths against `base`.
pub fn detect_items_file_in(base: &Path, file_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(f) = file_override {
        let path = if f.is_relative() { base.join(&f) } else { f };
        if !path.is_file() {
            return Err(eyre!("items file not found: {}", path.display()));
        }
        tracing::debug!(file = %path.display(), "using overridden items file");
        return Ok(path);
    }

    let candidate = base.join(DEFAULT_ITEMS_FILE);
    if candidate.is_file() {
        tracing::debug!(file = %candidate.display(), "found items file");
        return Ok(candidate);
    }
    Err(eyre!(
        "no {DEFAULT_ITEMS_FILE} in {}; pass --file to choose one",
        base.display()
    ))
}
