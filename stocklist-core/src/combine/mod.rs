pub mod dedup;
pub mod load;
pub mod merge;
pub mod writer;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catalog::{FileCatalog, latest_files};
use crate::domain::CandidateFile;
use crate::error::{Result, StockListError};
use crate::options::CombineOptions;
use crate::util::date::{display_mtime, resolve_stamp};

#[derive(Clone, Debug, Serialize)]
pub struct CombineReport {
    pub output_path: PathBuf,
    /// Inputs in the order they were concatenated (newest first).
    pub inputs: Vec<PathBuf>,
    pub rows_before_dedup: usize,
    pub duplicates_removed: usize,
    pub rows: usize,
    pub columns: usize,
    pub bytes: u64,
}

pub fn output_path_for(output_dir: &Path, stamp: &str) -> PathBuf {
    output_dir.join(format!("{stamp}_combined.csv"))
}

/// Find the newest exports, merge them and write `<date>_combined.csv`.
pub fn combine_latest(catalog: &dyn FileCatalog, opts: &CombineOptions) -> Result<CombineReport> {
    let stamp = resolve_stamp(opts.date.as_deref())?;

    let files = latest_files(catalog, &opts.export_dir, &opts.pattern, None)?;
    if files.is_empty() {
        let pattern = opts.export_dir.join(&opts.pattern);
        tracing::warn!(pattern = %pattern.display(), "no CSV files matched");
        return Err(StockListError::NotFound(format!(
            "no CSV files to combine: {}",
            pattern.display()
        )));
    }
    tracing::info!(count = files.len(), "found CSV files");
    for (i, f) in files.iter().enumerate() {
        tracing::info!(
            "  {}. {} (modified {})",
            i + 1,
            f.path.file_name().unwrap_or(f.path.as_os_str()).to_string_lossy(),
            display_mtime(f.modified)
        );
    }

    let files = match opts.max_files.filter(|&n| n > 0) {
        Some(n) => {
            tracing::info!(max_files = n, "limiting to the most recent files");
            crate::catalog::select_latest(files, Some(n))
        }
        None => files,
    };

    let output = output_path_for(&opts.output_dir, &stamp);
    tracing::info!(output = %output.display(), "output file");
    combine_files(&files, &output, &opts.key_column)
}

/// Load `files` in order, concatenate, drop duplicate keys and write `output`.
pub fn combine_files(files: &[CandidateFile], output: &Path, key_column: &str) -> Result<CombineReport> {
    let mut sets = Vec::with_capacity(files.len());
    for f in files {
        tracing::info!(
            file = %f.path.file_name().unwrap_or(f.path.as_os_str()).to_string_lossy(),
            "reading"
        );
        sets.push(load::load_table(&f.path)?);
    }

    tracing::info!("combining CSV files");
    let mut combined = merge::concat(sets)?;
    let before = combined.len();

    let removed = if combined.column_index(key_column).is_some() {
        let removed = dedup::dedup_keep_last(&mut combined, key_column);
        tracing::info!(
            "dedup on {key_column}: {before} -> {} rows ({removed} removed)",
            combined.len()
        );
        removed
    } else {
        tracing::info!(key_column, "key column absent; skipping dedup");
        0
    };

    let output_path = writer::write_table(output, &combined)?;
    let bytes = fs::metadata(&output_path)?.len();

    tracing::info!(output = %output_path.display(), "combine complete");
    tracing::info!("  rows: {}", combined.len());
    tracing::info!("  columns: {}", combined.columns.len());
    tracing::info!("  size: {:.2} MB", bytes as f64 / (1024.0 * 1024.0));

    Ok(CombineReport {
        output_path,
        inputs: files.iter().map(|f| f.path.clone()).collect(),
        rows_before_dedup: before,
        duplicates_removed: removed,
        rows: combined.len(),
        columns: combined.columns.len(),
        bytes,
    })
}
