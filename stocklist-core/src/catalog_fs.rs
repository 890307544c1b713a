use std::path::Path;

use walkdir::WalkDir;

use crate::catalog::{FileCatalog, compile_pattern};
use crate::domain::CandidateFile;
use crate::error::Result;

/// Lists files directly under a directory (no recursion) using their on-disk mtimes.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsCatalog;

impl FileCatalog for FsCatalog {
    fn matching(&self, dir: &Path, pattern: &str) -> Result<Vec<CandidateFile>> {
        let pat = compile_pattern(pattern)?;
        if !dir.is_dir() {
            tracing::warn!(dir = %dir.display(), "export directory does not exist");
            return Ok(Vec::new());
        }

        let mut out = Vec::new();
        for e in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let e = e.map_err(std::io::Error::from)?;
            if !e.file_type().is_file() {
                continue;
            }
            let matched = e.file_name().to_str().is_some_and(|n| pat.matches(n));
            if !matched {
                continue;
            }
            let modified = e.metadata().map_err(std::io::Error::from)?.modified()?;
            out.push(CandidateFile {
                path: e.into_path(),
                modified,
            });
        }
        Ok(out)
    }
}
