use std::ops::Range;

use crate::error::{Result, StockListError};

/// Boundaries `[i*size, min((i+1)*size, total))` for every chunk, in order.
pub fn chunk_bounds(total: usize, size: usize) -> Result<Vec<Range<usize>>> {
    if size == 0 {
        return Err(StockListError::Validation(
            "chunk size must be a positive integer".into(),
        ));
    }
    let count = total.div_ceil(size);
    Ok((0..count)
        .map(|i| i * size..((i + 1) * size).min(total))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_chunk_holds_remainder() {
        assert_eq!(chunk_bounds(2500, 1000).unwrap(), vec![0..1000, 1000..2000, 2000..2500]);
    }

    #[test]
    fn exact_multiple() {
        assert_eq!(chunk_bounds(6, 3).unwrap(), vec![0..3, 3..6]);
    }

    #[test]
    fn oversized_chunk_covers_everything() {
        assert_eq!(chunk_bounds(5, 5).unwrap(), vec![0..5]);
        assert_eq!(chunk_bounds(5, 50).unwrap(), vec![0..5]);
    }

    #[test]
    fn empty_input_has_no_chunks() {
        assert!(chunk_bounds(0, 10).unwrap().is_empty());
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(chunk_bounds(10, 0), Err(StockListError::Validation(_))));
    }

    #[test]
    fn bounds_partition_the_input() {
        for total in 0..40 {
            for size in 1..12 {
                let b = chunk_bounds(total, size).unwrap();
                let mut next = 0;
                for r in &b {
                    assert_eq!(r.start, next);
                    assert!(r.end > r.start && r.end - r.start <= size);
                    next = r.end;
                }
                assert_eq!(next, total);
            }
        }
    }
}
