// stocklist_core/src/domain.rs
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::time::SystemTime;

/// Byte-order mark that spreadsheet exports prepend to the first header cell.
pub const BOM: char = '\u{feff}';

/// A file picked up by a catalog scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// Ordered rows sharing one header.
///
/// Rows built by the loader and merger have exactly `columns.len()` cells;
/// lookups treat a missing trailing cell as absent rather than panicking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RecordSet {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell lookup by column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    /// Strip a leading BOM from the first column name. Data cells are untouched.
    pub fn normalize_header(&mut self) {
        if let Some(first) = self.columns.first_mut() {
            if first.starts_with(BOM) {
                *first = first.trim_start_matches(BOM).to_string();
            }
        }
    }

    /// Rename repeated column names to `name.1`, `name.2`, ... skipping any
    /// name already taken. Returns how many columns were renamed.
    pub fn disambiguate_columns(&mut self) -> usize {
        let taken: HashSet<String> = self.columns.iter().cloned().collect();
        let mut used: HashSet<String> = HashSet::with_capacity(self.columns.len());
        let mut next: HashMap<String, usize> = HashMap::new();
        let mut renamed = 0;
        for col in &mut self.columns {
            if used.insert(col.clone()) {
                continue;
            }
            let n = next.entry(col.clone()).or_insert(1);
            let mut candidate = format!("{col}.{n}");
            while taken.contains(&candidate) || used.contains(&candidate) {
                *n += 1;
                candidate = format!("{col}.{n}");
            }
            *n += 1;
            used.insert(candidate.clone());
            *col = candidate;
            renamed += 1;
        }
        renamed
    }
}
