//! Row table entries: how the flat block sequence is partitioned into rows.
//!
//! A row entry never names blocks. Row `i` owns the `block_count` blocks that
//! follow everything owned by rows `0..i`, so membership is purely positional.

use serde::{Deserialize, Serialize};

use crate::grouping::RowShape;

/// Number of rendered columns, persisted as the integer 1, 2, or 3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ColumnCount {
    /// Full width.
    #[default]
    One,
    Two,
    Three,
}

impl ColumnCount {
    /// Column count as a plain integer.
    pub fn get(&self) -> u8 {
        u8::from(*self)
    }
}

impl TryFrom<u8> for ColumnCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ColumnCount::One),
            2 => Ok(ColumnCount::Two),
            3 => Ok(ColumnCount::Three),
            other => Err(format!("column count must be 1, 2, or 3 (got {other})")),
        }
    }
}

impl From<ColumnCount> for u8 {
    fn from(columns: ColumnCount) -> u8 {
        match columns {
            ColumnCount::One => 1,
            ColumnCount::Two => 2,
            ColumnCount::Three => 3,
        }
    }
}

impl std::fmt::Display for ColumnCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// One row of the page body: its column layout and how many blocks it owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowEntry {
    #[serde(rename = "layout")]
    pub columns: ColumnCount,
    pub block_count: usize,
}

impl RowEntry {
    pub fn new(columns: ColumnCount, block_count: usize) -> Self {
        Self {
            columns,
            block_count,
        }
    }

    /// An empty row, as appended by "add row".
    pub fn empty(columns: ColumnCount) -> Self {
        Self::new(columns, 0)
    }
}

impl RowShape for RowEntry {
    fn count(&self) -> usize {
        self.block_count
    }
}

/// Sum of `block_count` over a row table.
pub fn total_block_count(rows: &[RowEntry]) -> usize {
    rows.iter().map(|r| r.block_count).sum()
}

/// Build a row table from a list of desired layouts.
///
/// Each row consumes as many blocks as it has columns, clamped to what is
/// left; layouts past the point where blocks run out are dropped.
pub fn generate_row_config(block_count: usize, layouts: &[ColumnCount]) -> Vec<RowEntry> {
    let mut remaining = block_count;
    let mut rows = Vec::new();

    for &layout in layouts {
        if remaining == 0 {
            break;
        }
        let count = usize::from(layout.get()).min(remaining);
        rows.push(RowEntry::new(layout, count));
        remaining -= count;
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_entry_persisted_shape() {
        let row = RowEntry::new(ColumnCount::Three, 2);
        let value = serde_json::to_value(row).unwrap();
        assert_eq!(value, json!({ "layout": 3, "blockCount": 2 }));

        let back: RowEntry = serde_json::from_value(value).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_row_entry_rejects_bad_values() {
        assert!(serde_json::from_value::<RowEntry>(json!({ "layout": 4, "blockCount": 1 })).is_err());
        assert!(serde_json::from_value::<RowEntry>(json!({ "layout": 1, "blockCount": -1 })).is_err());
        assert!(serde_json::from_value::<RowEntry>(json!({ "layout": 1 })).is_err());
    }

    #[test]
    fn test_generate_row_config() {
        use ColumnCount::*;
        assert_eq!(
            generate_row_config(6, &[One, Three, Two]),
            vec![RowEntry::new(One, 1), RowEntry::new(Three, 3), RowEntry::new(Two, 2)]
        );
        assert_eq!(
            generate_row_config(2, &[One, Three]),
            vec![RowEntry::new(One, 1), RowEntry::new(Three, 1)]
        );
        assert!(generate_row_config(0, &[One]).is_empty());
        assert_eq!(generate_row_config(1, &[Two, Two]), vec![RowEntry::new(Two, 1)]);
    }

    #[test]
    fn test_total_block_count() {
        let rows = [RowEntry::new(ColumnCount::One, 2), RowEntry::empty(ColumnCount::Two)];
        assert_eq!(total_block_count(&rows), 2);
        assert_eq!(total_block_count(&[]), 0);
    }
}
