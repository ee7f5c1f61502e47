//! Row-grouping projection: flat sequence + row table → per-row slices.
//!
//! Pure and deterministic. The projection never drops content: a table that
//! under-counts pushes the leftovers into its last row, and a table that
//! over-counts yields short or empty trailing rows.

use crate::row::{ColumnCount, RowEntry};

/// Anything that claims a contiguous run of items from a flat sequence.
pub trait RowShape {
    /// Number of items the row claims.
    fn count(&self) -> usize;
}

/// Split `items` into contiguous per-row slices according to `rows`.
///
/// - An empty table over a non-empty sequence is one implicit row holding
///   every item. An empty table over an empty sequence yields no rows.
/// - Rows consume items in table order.
/// - Items left over after the last row are appended to the last row.
/// - Rows that run out of items get short or empty slices.
pub fn group_into_rows<'a, T, R: RowShape>(items: &'a [T], rows: &[R]) -> Vec<&'a [T]> {
    if rows.is_empty() {
        return if items.is_empty() { Vec::new() } else { vec![items] };
    }

    let len = items.len();
    let last = rows.len() - 1;
    let mut out = Vec::with_capacity(rows.len());
    let mut offset = 0usize;

    for (i, row) in rows.iter().enumerate() {
        let start = offset.min(len);
        let end = if i == last {
            len
        } else {
            offset.saturating_add(row.count()).min(len)
        };
        out.push(&items[start..end]);
        offset = offset.saturating_add(row.count());
    }

    out
}

/// The row table actually used for rendering `len` blocks.
///
/// Counts are corrected to the slice lengths `group_into_rows` produces, so
/// the result always sums to `len`.
pub fn effective_rows(rows: &[RowEntry], len: usize) -> Vec<RowEntry> {
    if rows.is_empty() {
        return if len == 0 {
            Vec::new()
        } else {
            vec![RowEntry::new(ColumnCount::One, len)]
        };
    }

    let lengths = slice_lengths(rows, len);
    rows.iter()
        .zip(lengths)
        .map(|(row, count)| RowEntry::new(row.columns, count))
        .collect()
}

/// Half-open flat index range `[start, end)` of every row, as projected.
pub fn row_ranges<R: RowShape>(rows: &[R], len: usize) -> Vec<std::ops::Range<usize>> {
    let mut start = 0usize;
    slice_lengths(rows, len)
        .into_iter()
        .map(|n| {
            let range = start..start + n;
            start += n;
            range
        })
        .collect()
}

fn slice_lengths<R: RowShape>(rows: &[R], len: usize) -> Vec<usize> {
    // Indices stand in for items so the projection logic lives in one place.
    let indices: Vec<usize> = (0..len).collect();
    group_into_rows(&indices, rows).iter().map(|s| s.len()).collect()
}
