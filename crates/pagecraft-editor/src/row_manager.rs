//! Row-level editing over a [`BlockStore`].
//!
//! Row membership is positional: row `i` owns the `block_count` blocks after
//! everything owned by rows `0..i`. Every operation here therefore changes the
//! row table and the flat sequence together, so the projection keeps showing
//! each block in the row the operation put it in.
//!
//! Each applied operation is a single undo entry, however many primitive
//! steps it takes.

use std::ops::Range;

use pagecraft_types::{Block, BlockId, BlockKind, ColumnCount, RowEntry, row_ranges};

use crate::block_store::BlockStore;

/// Mutable row view of a store, borrowed for the duration of a row operation.
pub struct RowManager<'a> {
    store: &'a mut BlockStore,
}

impl BlockStore {
    /// Borrow the row manager for this store.
    pub fn row_manager(&mut self) -> RowManager<'_> {
        RowManager::new(self)
    }
}

impl<'a> RowManager<'a> {
    pub fn new(store: &'a mut BlockStore) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &BlockStore {
        &*self.store
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn rows(&self) -> &[RowEntry] {
        self.store.rows()
    }

    pub fn row_count(&self) -> usize {
        self.store.rows().len()
    }

    /// Flat index range `[start, end)` owned by row `index`.
    pub fn row_range(&self, index: usize) -> Option<Range<usize>> {
        row_ranges(self.store.rows(), self.store.block_count())
            .into_iter()
            .nth(index)
    }

    /// Row that currently owns block `id`.
    pub fn row_of(&self, id: &BlockId) -> Option<usize> {
        let index = self.store.index_of(id)?;
        self.store.row_index_for(index)
    }

    /// Blocks grouped per row.
    pub fn grouped(&self) -> Vec<&[Block]> {
        self.store.grouped()
    }

    // =========================================================================
    // Row table operations
    // =========================================================================

    /// Append an empty row. Returns its index.
    pub fn add_row(&mut self, columns: ColumnCount) -> usize {
        self.store.apply("add_row", |s| {
            s.rows_mut().push(RowEntry::empty(columns));
            true
        });
        self.row_count() - 1
    }

    /// Remove row `index`, handing its blocks to the previous row (or the
    /// next one when deleting the first row). The only row is never removed.
    pub fn delete_row(&mut self, index: usize) -> bool {
        let count = self.row_count();
        if index >= count {
            tracing::warn!("delete_row: row {index} out of range ({count} rows), ignoring");
            return false;
        }
        if count <= 1 {
            tracing::warn!("delete_row: refusing to delete the only row");
            return false;
        }

        self.store.apply("delete_row", |s| {
            let rows = s.rows_mut();
            let removed = rows.remove(index);
            let heir = index.saturating_sub(1);
            rows[heir].block_count += removed.block_count;
            true
        })
    }

    /// Set the column count of row `index`. Membership is unchanged.
    pub fn change_row_layout(&mut self, index: usize, columns: ColumnCount) -> bool {
        let Some(row) = self.rows().get(index) else {
            tracing::warn!("change_row_layout: row {index} out of range, ignoring");
            return false;
        };
        if row.columns == columns {
            return false;
        }
        self.store.apply("change_row_layout", |s| {
            s.rows_mut()[index].columns = columns;
            true
        })
    }

    // =========================================================================
    // Block-in-row operations
    // =========================================================================

    /// Add a default-valued block at the end of row `row_index`.
    ///
    /// A table shorter than `row_index` is first padded with empty
    /// single-column rows. Indices more than one row past what the current
    /// blocks could fill are ignored and return `None`.
    pub fn add_block_to_row(&mut self, kind: BlockKind, row_index: usize) -> Option<BlockId> {
        let limit = self.store.rows().len() + self.store.block_count() + 1;
        if row_index > limit {
            tracing::warn!("add_block_to_row: row {row_index} is past padding limit {limit}, ignoring");
            return None;
        }

        let block = Block::new_default(kind);
        let id = block.id.clone();

        self.store.apply("add_block_to_row", |s| {
            while s.rows().len() <= row_index {
                s.rows_mut().push(RowEntry::empty(ColumnCount::One));
            }
            let end = row_ranges(s.rows(), s.block_count())[row_index].end;
            s.insert_at(end, block, Some(row_index));
            true
        });
        Some(id)
    }

    /// Delete a block and shrink its row, collapsing the row if it empties
    /// while other rows remain.
    pub fn delete_block_from_row(&mut self, id: &BlockId) -> bool {
        let Some(index) = self.store.index_of(id) else {
            tracing::warn!("delete_block_from_row: block {id} not found, ignoring");
            return false;
        };

        self.store.apply("delete_block_from_row", |s| {
            if let (_, Some(row)) = s.remove_at(index) {
                s.collapse_row(row);
            }
            true
        })
    }

    /// Move a block to position `position_in_row` of row `target_row`.
    ///
    /// Positions past the end of the row append to it. The source row
    /// collapses if the move empties it while other rows remain.
    pub fn move_block_to_row(&mut self, id: &BlockId, target_row: usize, position_in_row: usize) -> bool {
        let Some(from) = self.store.index_of(id) else {
            tracing::warn!("move_block_to_row: block {id} not found, ignoring");
            return false;
        };
        if target_row >= self.row_count() {
            tracing::warn!("move_block_to_row: row {target_row} out of range, ignoring");
            return false;
        }
        let Some(source_row) = self.store.row_index_for(from) else {
            return false;
        };

        // Destination in the sequence with the block already taken out.
        let rows = self.rows();
        let mut start: usize = rows[..target_row].iter().map(|r| r.block_count).sum();
        let mut len = rows[target_row].block_count;
        if source_row < target_row {
            start -= 1;
        }
        if source_row == target_row {
            len -= 1;
        }
        let dest = start + position_in_row.min(len);

        if source_row == target_row && dest == from {
            return false;
        }

        self.store.apply("move_block_to_row", |s| {
            let (block, _) = s.remove_at(from);
            s.blocks_mut().insert(dest, block);
            s.rows_mut()[target_row].block_count += 1;
            s.collapse_row(source_row);
            true
        })
    }

    /// Move row `source` to position `destination`, carrying its blocks.
    ///
    /// The row entry and its contiguous slice of blocks move together in one
    /// resequence of the flat sequence.
    pub fn reorder_rows(&mut self, source: usize, destination: usize) -> bool {
        let count = self.row_count();
        if source >= count || destination >= count {
            tracing::warn!("reorder_rows: {source} -> {destination} out of range ({count} rows), ignoring");
            return false;
        }
        if source == destination {
            return false;
        }

        self.store.apply("reorder_rows", |s| {
            let ranges = row_ranges(s.rows(), s.block_count());
            let mut rest = std::mem::take(s.blocks_mut()).into_iter();
            let mut segments: Vec<Vec<Block>> = ranges
                .iter()
                .map(|range| rest.by_ref().take(range.len()).collect())
                .collect();

            let segment = segments.remove(source);
            segments.insert(destination, segment);
            let row = s.rows_mut().remove(source);
            s.rows_mut().insert(destination, row);

            *s.blocks_mut() = segments.into_iter().flatten().collect();
            true
        })
    }
}
