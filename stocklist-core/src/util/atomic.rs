//! Write-then-rename output files.
//!
//! Content goes to a temporary file in the destination directory and is
//! persisted over the final path only once every byte has been flushed.
//! Dropping before `persist` removes the temporary file.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::Result;

/// Creates missing parent directories, then runs `fill` against a buffered
/// temp file and atomically moves it to `path`.
pub fn write_atomic<F>(path: &Path, fill: F) -> Result<PathBuf>
where
    F: FnOnce(&mut BufWriter<NamedTempFile>) -> Result<()>,
{
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut w = BufWriter::new(NamedTempFile::new_in(parent)?);
    fill(&mut w)?;
    w.flush()?;
    let tmp = w.into_inner().map_err(|e| e.into_error())?;
    set_output_mode(&tmp, path)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(path.to_path_buf())
}

/// Temp files start out 0600. Give the result the mode an existing target
/// already has, or 0644 for a fresh file.
#[cfg(unix)]
fn set_output_mode(tmp: &NamedTempFile, path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mode = fs::metadata(path)
        .map(|md| md.permissions().mode() & 0o7777)
        .unwrap_or(0o644);
    tmp.as_file()
        .set_permissions(fs::Permissions::from_mode(mode))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_output_mode(_tmp: &NamedTempFile, _path: &Path) -> Result<()> {
    Ok(())
}
