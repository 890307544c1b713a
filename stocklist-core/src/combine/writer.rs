use std::path::{Path, PathBuf};

use crate::domain::RecordSet;
use crate::error::Result;
use crate::util::atomic::write_atomic;

/// Write `rs` as UTF-8 CSV with a header row. Parent directories are created.
pub fn write_table(path: &Path, rs: &RecordSet) -> Result<PathBuf> {
    write_atomic(path, |w| {
        let mut wtr = csv::Writer::from_writer(w);
        wtr.write_record(&rs.columns)?;
        for row in &rs.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combine::load::load_table;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn written_table_reads_back() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("nested").join("20240101_combined.csv");
        let rs = RecordSet {
            columns: vec!["銘柄コード".into(), "銘柄名".into()],
            rows: vec![
                vec!["7203".into(), "トヨタ自動車".into()],
                vec!["0001".into(), "with, comma".into()],
            ],
        };
        write_table(&out, &rs).unwrap();
        assert_eq!(load_table(&out).unwrap(), rs);

        let text = fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("銘柄コード,銘柄名\n"));
        assert!(text.contains("\"with, comma\""));
    }
}
