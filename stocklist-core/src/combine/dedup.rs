use std::collections::HashSet;

use crate::domain::RecordSet;

/// Keep only the last row for each distinct value of `key`, preserving the
/// relative order of the survivors. Returns the number of rows dropped.
///
/// Keys compare by exact text, so every blank key counts as the same value.
/// A set without the key column passes through untouched.
pub fn dedup_keep_last(rs: &mut RecordSet, key: &str) -> usize {
    let Some(idx) = rs.column_index(key) else {
        return 0;
    };

    let keep = {
        let mut seen: HashSet<&str> = HashSet::with_capacity(rs.rows.len());
        let mut keep = vec![false; rs.rows.len()];
        for (i, row) in rs.rows.iter().enumerate().rev() {
            keep[i] = seen.insert(row.get(idx).map_or("", String::as_str));
        }
        keep
    };

    let before = rs.rows.len();
    let mut flags = keep.into_iter();
    rs.rows.retain(|_| flags.next().unwrap_or(false));
    before - rs.rows.len()
}
