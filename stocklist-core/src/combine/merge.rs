use std::collections::HashMap;

use crate::domain::RecordSet;
use crate::error::{Result, StockListError};

/// Concatenate record sets in the given order.
///
/// The output header is the union of all headers in first-appearance order;
/// rows from a set that lacks a column get an empty cell there.
pub fn concat(sets: Vec<RecordSet>) -> Result<RecordSet> {
    if sets.is_empty() {
        return Err(StockListError::NotFound("no data to combine".into()));
    }

    let mut columns: Vec<String> = Vec::new();
    let mut slot: HashMap<String, usize> = HashMap::new();
    for set in &sets {
        for c in &set.columns {
            if !slot.contains_key(c) {
                slot.insert(c.clone(), columns.len());
                columns.push(c.clone());
            }
        }
    }

    let width = columns.len();
    let total: usize = sets.iter().map(RecordSet::len).sum();
    let mut out = RecordSet::new(columns);
    out.rows.reserve(total);

    for set in sets {
        // same layout as the union prefix: rows move over untouched
        if set.columns.iter().enumerate().all(|(i, c)| slot[c] == i) {
            for mut row in set.rows {
                row.resize(width, String::new());
                out.rows.push(row);
            }
            continue;
        }
        let map: Vec<usize> = set.columns.iter().map(|c| slot[c]).collect();
        for row in set.rows {
            let mut wide = vec![String::new(); width];
            for (cell, &dst) in row.into_iter().zip(&map) {
                wide[dst] = cell;
            }
            out.rows.push(wide);
        }
    }
    Ok(out)
}
