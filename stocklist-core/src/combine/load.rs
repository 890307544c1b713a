use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::domain::RecordSet;
use crate::error::{Result, StockListError};

/// Load one UTF-8 CSV export with a header row and normalize its header.
pub fn load_table(path: &Path) -> Result<RecordSet> {
    let f = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            StockListError::NotFound(format!("input file {}", path.display()))
        }
        _ => StockListError::Io(e),
    })?;
    let rs = read_table(BufReader::new(f)).map_err(|e| match e {
        StockListError::Parse(msg) => StockListError::Parse(format!("{}: {msg}", path.display())),
        other => other,
    })?;
    tracing::info!(
        file = %path.file_name().unwrap_or(path.as_os_str()).to_string_lossy(),
        rows = rs.len(),
        columns = rs.columns.len(),
        "loaded"
    );
    Ok(rs)
}

/// Rows shorter than the header are padded with empty cells; longer rows are rejected.
pub fn read_table<R: Read>(r: R) -> Result<RecordSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(r);

    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    if columns.is_empty() {
        return Err(StockListError::Parse("missing header row".into()));
    }
    let mut rs = RecordSet::new(columns);
    rs.normalize_header();
    let renamed = rs.disambiguate_columns();
    if renamed > 0 {
        tracing::warn!(renamed, columns = ?rs.columns, "repeated header names renamed");
    }

    let width = rs.columns.len();
    for rec in rdr.records() {
        let rec = rec?;
        if rec.len() > width {
            let line = rec.position().map(|p| p.line()).unwrap_or(0);
            return Err(StockListError::Parse(format!(
                "line {line}: expected {width} fields, saw {}",
                rec.len()
            )));
        }
        let mut row: Vec<String> = rec.iter().map(str::to_string).collect();
        row.resize(width, String::new());
        rs.rows.push(row);
    }
    Ok(rs)
}
