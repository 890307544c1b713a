// stocklist_core/src/catalog.rs
use crate::domain::CandidateFile;
use crate::error::{Result, StockListError};
use std::path::Path;

/// Source of candidate input files. Implementations return matches in any order;
/// `latest_files` does the ordering.
pub trait FileCatalog {
    fn matching(&self, dir: &Path, pattern: &str) -> Result<Vec<CandidateFile>>;
}

/// Fixed list of files with caller-chosen timestamps.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    files: Vec<CandidateFile>,
}

impl StaticCatalog {
    pub fn new(files: Vec<CandidateFile>) -> Self {
        Self { files }
    }
}

impl FileCatalog for StaticCatalog {
    fn matching(&self, dir: &Path, pattern: &str) -> Result<Vec<CandidateFile>> {
        let pat = compile_pattern(pattern)?;
        Ok(self
            .files
            .iter()
            .filter(|f| f.path.parent() == Some(dir))
            .filter(|f| {
                f.path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| pat.matches(n))
            })
            .cloned()
            .collect())
    }
}

pub(crate) fn compile_pattern(pattern: &str) -> Result<glob::Pattern> {
    glob::Pattern::new(pattern)
        .map_err(|e| StockListError::Validation(format!("bad file pattern {pattern:?}: {e}")))
}

/// Newest first; equal mtimes fall back to path order.
pub fn sort_newest_first(files: &mut [CandidateFile]) {
    files.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.path.cmp(&b.path)));
}

/// Keep the first `max` entries. `None` and `Some(0)` keep everything.
pub fn select_latest(mut files: Vec<CandidateFile>, max: Option<usize>) -> Vec<CandidateFile> {
    if let Some(n) = max.filter(|&n| n > 0) {
        files.truncate(n);
    }
    files
}

/// Scan, order newest first and cap. An empty vec means nothing matched.
pub fn latest_files(
    catalog: &dyn FileCatalog,
    dir: &Path,
    pattern: &str,
    max: Option<usize>,
) -> Result<Vec<CandidateFile>> {
    let mut files = catalog.matching(dir, pattern)?;
    sort_newest_first(&mut files);
    Ok(select_latest(files, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{Duration, UNIX_EPOCH};

    fn cand(path: &str, secs: u64) -> CandidateFile {
        CandidateFile {
            path: PathBuf::from(path),
            modified: UNIX_EPOCH + Duration::from_secs(secs),
        }
    }

    #[test]
    fn orders_newest_first_and_filters_pattern() {
        let cat = StaticCatalog::new(vec![
            cand("Export/japanese_stocks_data_1.csv", 10),
            cand("Export/japanese_stocks_data_2.csv", 30),
            cand("Export/other.csv", 50),
            cand("Elsewhere/japanese_stocks_data_3.csv", 99),
            cand("Export/japanese_stocks_data_4.csv", 20),
        ]);
        let got = latest_files(&cat, Path::new("Export"), "japanese_stocks_data_*.csv", None)
            .unwrap();
        let names: Vec<_> = got.iter().map(|f| f.path.to_str().unwrap()).collect();
        assert_eq!(
            names,
            vec![
                "Export/japanese_stocks_data_2.csv",
                "Export/japanese_stocks_data_4.csv",
                "Export/japanese_stocks_data_1.csv",
            ]
        );
    }

    #[test]
    fn cap_keeps_most_recent() {
        let files = vec![cand("d/a", 3), cand("d/b", 2), cand("d/c", 1)];
        assert_eq!(select_latest(files.clone(), Some(2)).len(), 2);
        assert_eq!(select_latest(files.clone(), Some(0)).len(), 3);
        assert_eq!(select_latest(files.clone(), None).len(), 3);
        assert_eq!(select_latest(files, Some(10)).len(), 3);
    }

    #[test]
    fn ties_break_on_path() {
        let mut files = vec![cand("d/b", 5), cand("d/a", 5), cand("d/c", 6)];
        sort_newest_first(&mut files);
        let names: Vec<_> = files.iter().map(|f| f.path.to_str().unwrap()).collect();
        assert_eq!(names, vec!["d/c", "d/a", "d/b"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let cat = StaticCatalog::default();
        let got = latest_files(&cat, Path::new("Export"), "*.csv", Some(3)).unwrap();
        assert!(got.is_empty());
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let cat = StaticCatalog::default();
        let err = latest_files(&cat, Path::new("."), "[", None).unwrap_err();
        assert!(matches!(err, StockListError::Validation(_)));
    }
}
