use crate::error::{DrdError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Writes `contents` to `path` through a temporary file in the same directory,
/// renamed into place once fully written. An existing file at `path` is left
/// untouched if anything fails before the rename.
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;

    tmp.persist(path).map_err(|e| DrdError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
