pub mod chunker;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, StockListError};
use crate::options::SplitOptions;
use crate::util::atomic::write_atomic;

#[derive(Clone, Debug, Serialize)]
pub struct ChunkSummary {
    pub path: PathBuf,
    /// 0-based, end exclusive.
    pub start: usize,
    pub end: usize,
    /// Record count found when the file was read back.
    pub verified_len: usize,
}

impl ChunkSummary {
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SplitReport {
    pub total_records: usize,
    pub chunk_size: usize,
    pub chunks: Vec<ChunkSummary>,
}

/// Read a JSON array of arbitrary records.
pub fn load_records(path: &Path) -> Result<Vec<Value>> {
    let f = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            StockListError::NotFound(format!("input file {}", path.display()))
        }
        _ => StockListError::Io(e),
    })?;
    let doc: Value = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
        if e.is_io() {
            StockListError::from(e)
        } else {
            StockListError::Parse(format!("{}: {e}", path.display()))
        }
    })?;
    match doc {
        Value::Array(records) => Ok(records),
        _ => Err(StockListError::Parse(format!(
            "{}: expected a JSON array",
            path.display()
        ))),
    }
}

/// Pretty-printed (2-space) JSON array, non-ASCII written literally.
pub fn write_records(path: &Path, records: &[Value]) -> Result<PathBuf> {
    write_atomic(path, |w| {
        serde_json::to_writer_pretty(w, records)?;
        Ok(())
    })
}

pub fn chunk_path(output_dir: &Path, prefix: &str, index: usize) -> PathBuf {
    output_dir.join(format!("{prefix}_{index}.json"))
}

/// Split the input array into `<prefix>_<n>.json` files and read each one back.
pub fn split_stocks(opts: &SplitOptions) -> Result<SplitReport> {
    if opts.chunk_size == 0 {
        return Err(StockListError::Validation(
            "chunk size must be a positive integer".into(),
        ));
    }

    let records = load_records(&opts.input)?;
    let bounds = chunker::chunk_bounds(records.len(), opts.chunk_size)?;

    tracing::info!("total records: {}", records.len());
    tracing::info!("output files: {}", bounds.len());
    tracing::info!("max per file: {}", opts.chunk_size);

    let mut written = Vec::with_capacity(bounds.len());
    for (i, r) in bounds.iter().enumerate() {
        let path = chunk_path(&opts.output_dir, &opts.prefix, i + 1);
        write_records(&path, &records[r.clone()])?;
        tracing::info!(
            "{}: {} records (#{}-#{})",
            path.display(),
            r.len(),
            r.start + 1,
            r.end
        );
        written.push((path, r.clone()));
    }
    tracing::info!("split complete: {} files written", written.len());

    let mut chunks = Vec::with_capacity(written.len());
    for (path, r) in written {
        let verified_len = load_records(&path)?.len();
        if verified_len != r.len() {
            tracing::warn!(
                file = %path.display(),
                expected = r.len(),
                found = verified_len,
                "chunk length mismatch on read-back"
            );
        } else {
            tracing::info!("  {}: {} records", path.display(), verified_len);
        }
        chunks.push(ChunkSummary {
            path,
            start: r.start,
            end: r.end,
            verified_len,
        });
    }

    Ok(SplitReport {
        total_records: records.len(),
        chunk_size: opts.chunk_size,
        chunks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_pretty_utf8_and_keeps_key_order() {
        let tmp = TempDir::new().unwrap();
        let p = tmp.path().join("stocks_1.json");
        let recs = vec![json!({"code": "7203", "name": "トヨタ自動車", "a": 1})];
        write_records(&p, &recs).unwrap();
        let text = fs::read_to_string(&p).unwrap();
        assert_eq!(
            text,
            "[\n  {\n    \"code\": \"7203\",\n    \"name\": \"トヨタ自動車\",\n    \"a\": 1\n  }\n]"
        );
    }

    #[test]
    fn non_array_input_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let p = tmp.path().join("stocks.json");
        fs::write(&p, r#"{"code": "7203"}"#).unwrap();
        assert!(matches!(load_records(&p), Err(StockListError::Parse(_))));
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let p = tmp.path().join("stocks.json");
        fs::write(&p, "[{\"code\": ").unwrap();
        assert!(matches!(load_records(&p), Err(StockListError::Parse(_))));
    }

    #[test]
    fn missing_input_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = load_records(&tmp.path().join("stocks.json")).unwrap_err();
        assert!(matches!(err, StockListError::NotFound(_)));
    }

    #[test]
    fn chunk_names_are_one_based() {
        assert_eq!(
            chunk_path(Path::new("out"), "stocks", 1),
            Path::new("out").join("stocks_1.json")
        );
    }
}
