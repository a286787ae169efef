use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Error, Result};

pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::output_access(dir, e))
}

pub fn level_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.txt"))
}

/// Writes `<dir>/<name>.txt`, replacing any previous export.
pub fn write_level(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = level_path(dir, name);
    fs::write(&path, contents).map_err(|e| Error::output_access(&path, e))?;
    Ok(path)
}
