//! Block store: the canonical block sequence, its row table, selection, and history.
//!
//! The flat `blocks` vector is authoritative for order. The row table beside it
//! partitions that vector positionally, and the store keeps the two reconciled:
//! after any operation the row counts sum to the number of blocks. Block-level
//! operations adjust the count of whichever row the touched position belongs
//! to; row-level operations live in [`RowManager`](crate::RowManager).
//!
//! Every operation is total. A stale id or bad index is logged and ignored,
//! returning `false` (or the unchanged state) rather than an error.

use std::sync::Arc;

use pagecraft_types::validate::parse_block;
use pagecraft_types::{
    Block, BlockId, BlockKind, ColumnCount, RowEntry, effective_rows, group_into_rows, row_ranges,
    validate_block_tree,
};
use serde_json::{Map, Value};

use crate::clock::{Clock, SystemClock};
use crate::config::EditorConfig;
use crate::history::{EditKey, History, Revision};

/// Ordered blocks plus row table, with bounded undo/redo.
///
/// Each applied public operation records exactly one history entry, except
/// field updates that coalesce into the previous one.
pub struct BlockStore {
    /// Top-level blocks in document order.
    blocks: Vec<Block>,

    /// Row table; counts always sum to `blocks.len()`.
    rows: Vec<RowEntry>,

    /// Currently selected block, always present in `blocks` when set.
    selected: Option<BlockId>,

    history: History,
    config: EditorConfig,
    clock: Arc<dyn Clock>,

    /// Store version (bumped on any applied mutation, undo, or redo).
    version: u64,
}

impl BlockStore {
    /// Create an empty store using the wall clock.
    pub fn new(config: EditorConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create an empty store with an explicit clock for edit coalescing.
    pub fn with_clock(config: EditorConfig, clock: Arc<dyn Clock>) -> Self {
        let config = config.clamped();
        let history = History::new(config.history_limit, config.coalesce_window_ms);
        Self {
            blocks: Vec::new(),
            rows: Vec::new(),
            selected: None,
            history,
            config,
            clock,
            version: 0,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Get the current version.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The row table.
    pub fn rows(&self) -> &[RowEntry] {
        &self.rows
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the store has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get a top-level block by id.
    pub fn get_block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    /// Flat position of a top-level block.
    pub fn index_of(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.index_of(id).is_some()
    }

    /// Blocks grouped per row, as they render.
    pub fn grouped(&self) -> Vec<&[Block]> {
        group_into_rows(&self.blocks, &self.rows)
    }

    /// Snapshot of the editable state.
    pub fn revision(&self) -> Revision {
        Revision {
            blocks: self.blocks.clone(),
            rows: self.rows.clone(),
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn selected(&self) -> Option<&BlockId> {
        self.selected.as_ref()
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selected.as_ref().and_then(|id| self.get_block(id))
    }

    /// Select a block. Ids not in the store are ignored.
    pub fn select(&mut self, id: &BlockId) -> bool {
        if !self.contains(id) {
            tracing::warn!("select: block {id} not found, ignoring");
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // =========================================================================
    // History
    // =========================================================================

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of entries available to undo.
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Number of entries available to redo.
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Restore the state before the most recent entry. No-op when there is none.
    pub fn undo(&mut self) -> bool {
        let present = self.revision();
        match self.history.undo(present) {
            Some(previous) => {
                self.restore(previous);
                tracing::debug!("undo: now at version {}", self.version);
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone entry. No-op when there is none.
    pub fn redo(&mut self) -> bool {
        let present = self.revision();
        match self.history.redo(present) {
            Some(next) => {
                self.restore(next);
                tracing::debug!("redo: now at version {}", self.version);
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, revision: Revision) {
        self.blocks = revision.blocks;
        self.rows = revision.rows;
        self.version += 1;
        self.drop_stale_selection();
    }

    // =========================================================================
    // Block Operations
    // =========================================================================

    /// Insert a default-valued block of `kind` after `after`, or at the end.
    ///
    /// An unknown anchor appends. The new block joins the anchor's row (the
    /// last row when appending). Returns the new block's id.
    pub fn add_block(&mut self, kind: BlockKind, after: Option<&BlockId>) -> BlockId {
        let block = Block::new_default(kind);
        let id = block.id.clone();

        let anchor = after.and_then(|a| {
            let index = self.index_of(a);
            if index.is_none() {
                tracing::warn!("add_block: anchor {a} not found, appending");
            }
            index
        });
        let (index, row) = match anchor {
            Some(i) => (i + 1, self.row_index_for(i)),
            None => (self.blocks.len(), None),
        };

        self.apply("add_block", |s| {
            s.insert_at(index, block, row);
            true
        });
        id
    }

    /// Merge `patch` into a block's persisted fields.
    ///
    /// Keys map to camelCase field names; a `null` value clears an optional
    /// field. `order` is ignored. The update is refused (returns `false`) when
    /// the id is absent, the patch changes `id` or `type`, the result fails its
    /// variant's schema or the tree rules, or nothing would change.
    pub fn update_block(&mut self, id: &BlockId, patch: Map<String, Value>) -> bool {
        let Some(index) = self.index_of(id) else {
            tracing::warn!("update_block: block {id} not found, ignoring");
            return false;
        };
        let Some(candidate) = self.patched(index, &patch) else {
            return false;
        };
        if candidate == self.blocks[index] {
            return false;
        }

        let before = self.revision();
        let key = EditKey::new(id.clone(), patch.keys().filter(|k| *k != "order").cloned());
        self.blocks[index] = candidate;

        if self.history.record_edit(before, key, self.clock.now_millis()) {
            tracing::trace!("update_block: coalesced edit of {}", id.short());
        }
        self.finish("update_block");
        true
    }

    /// Remove a block. Its row shrinks and collapses if it empties while
    /// other rows remain.
    pub fn delete_block(&mut self, id: &BlockId) -> bool {
        let Some(index) = self.index_of(id) else {
            tracing::warn!("delete_block: block {id} not found, ignoring");
            return false;
        };
        self.apply("delete_block", |s| {
            if let (_, Some(row)) = s.remove_at(index) {
                s.collapse_row(row);
            }
            true
        })
    }

    /// Move a block to `destination`, an index into the sequence with the
    /// block already removed. Row counts are untouched, so a move across a row
    /// boundary changes the membership of both rows by position.
    pub fn reorder_blocks(&mut self, id: &BlockId, destination: usize) -> bool {
        let Some(from) = self.index_of(id) else {
            tracing::warn!("reorder_blocks: block {id} not found, ignoring");
            return false;
        };
        let to = destination.min(self.blocks.len() - 1);
        if from == to {
            return false;
        }
        self.apply("reorder_blocks", |s| {
            let block = s.blocks.remove(from);
            s.blocks.insert(to, block);
            true
        })
    }

    /// Replace the whole sequence with a new baseline under one implicit row.
    ///
    /// Clears selection and both history stacks.
    pub fn reset_blocks(&mut self, blocks: Vec<Block>) -> pagecraft_types::Result<()> {
        self.reset(blocks, Vec::new())
    }

    /// Replace blocks and row table with a new baseline.
    ///
    /// A row table that disagrees with the block count is reconciled the way
    /// the projection reads it. Clears selection and both history stacks.
    pub fn reset(&mut self, blocks: Vec<Block>, rows: Vec<RowEntry>) -> pagecraft_types::Result<()> {
        validate_block_tree(&blocks, self.config.max_nesting_depth)?;

        self.rows = effective_rows(&rows, blocks.len());
        self.blocks = blocks;
        self.reindex_order();
        self.selected = None;
        self.history.clear();
        self.version += 1;
        tracing::debug!(
            "reset: {} blocks in {} rows (version {})",
            self.blocks.len(),
            self.rows.len(),
            self.version
        );
        Ok(())
    }

    // =========================================================================
    // Primitives shared with the row manager
    // =========================================================================

    /// Run `op` as one undoable operation. `op` returns whether it changed
    /// anything and must not mutate when it returns `false`.
    pub(crate) fn apply(&mut self, name: &str, op: impl FnOnce(&mut Self) -> bool) -> bool {
        let before = self.revision();
        if !op(self) {
            return false;
        }
        self.history.record(before);
        self.finish(name);
        true
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<RowEntry> {
        &mut self.rows
    }

    pub(crate) fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.blocks
    }

    /// Row whose projected slice contains flat position `index`.
    pub(crate) fn row_index_for(&self, index: usize) -> Option<usize> {
        row_ranges(&self.rows, self.blocks.len())
            .iter()
            .position(|range| range.contains(&index))
    }

    /// Insert `block` at flat position `index` and credit it to `row`
    /// (the last row when `None`). An empty table gains a single-column row.
    pub(crate) fn insert_at(&mut self, index: usize, block: Block, row: Option<usize>) {
        if self.rows.is_empty() {
            self.rows.push(RowEntry::empty(ColumnCount::One));
        }
        let last = self.rows.len() - 1;
        let row = row.map_or(last, |r| r.min(last));
        self.rows[row].block_count += 1;

        let index = index.min(self.blocks.len());
        self.blocks.insert(index, block);
    }

    /// Remove the block at `index`, debiting its row. Does not collapse.
    pub(crate) fn remove_at(&mut self, index: usize) -> (Block, Option<usize>) {
        let row = self.row_index_for(index);
        let block = self.blocks.remove(index);
        if let Some(r) = row {
            self.rows[r].block_count = self.rows[r].block_count.saturating_sub(1);
        }
        (block, row)
    }

    /// Remove row `row` if it is empty and not the only row.
    pub(crate) fn collapse_row(&mut self, row: usize) -> bool {
        let collapsible = self.rows.len() > 1 && self.rows.get(row).is_some_and(|r| r.block_count == 0);
        if collapsible {
            self.rows.remove(row);
            tracing::debug!("collapsed empty row {row}");
        }
        collapsible
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn finish(&mut self, name: &str) {
        self.reindex_order();
        self.version += 1;
        self.drop_stale_selection();
        tracing::debug!(
            "{name}: {} blocks in {} rows (version {})",
            self.blocks.len(),
            self.rows.len(),
            self.version
        );
    }

    fn reindex_order(&mut self) {
        for (i, block) in self.blocks.iter_mut().enumerate() {
            block.order = i as u32;
        }
    }

    fn drop_stale_selection(&mut self) {
        if let Some(id) = &self.selected {
            if !self.contains(id) {
                self.selected = None;
            }
        }
    }

    /// Build the block that `patch` would produce, or `None` if it is refused.
    fn patched(&self, index: usize, patch: &Map<String, Value>) -> Option<Block> {
        let current = &self.blocks[index];

        if let Some(id) = patch.get("id") {
            if id.as_str() != Some(current.id.as_str()) {
                tracing::warn!("update_block: refusing to change id of {}", current.id);
                return None;
            }
        }
        if let Some(kind) = patch.get("type") {
            if kind.as_str() != Some(current.kind().as_str()) {
                tracing::warn!(
                    "update_block: type {kind} does not match {} block {}",
                    current.kind(),
                    current.id
                );
                return None;
            }
        }

        let mut fields = match serde_json::to_value(current) {
            Ok(Value::Object(fields)) => fields,
            Ok(_) => return None,
            Err(e) => {
                tracing::warn!("update_block: failed to serialize {}: {e}", current.id);
                return None;
            }
        };
        for (key, value) in patch {
            if key == "order" {
                continue;
            }
            if value.is_null() {
                fields.remove(key);
            } else {
                fields.insert(key.clone(), value.clone());
            }
        }

        let candidate = match parse_block(&Value::Object(fields), &format!("blocks[{index}]")) {
            Ok(block) => block,
            Err(e) => {
                tracing::warn!("update_block: {e}");
                return None;
            }
        };

        if candidate.is_container() {
            let mut blocks = self.blocks.clone();
            blocks[index] = candidate.clone();
            if let Err(e) = validate_block_tree(&blocks, self.config.max_nesting_depth) {
                tracing::warn!("update_block: {e}");
                return None;
            }
        }

        Some(candidate)
    }
}

impl std::fmt::Debug for BlockStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockStore")
            .field("blocks", &self.blocks.len())
            .field("rows", &self.rows)
            .field("selected", &self.selected)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use pagecraft_types::{BlockContent, HeadingLevel};
    use serde_json::json;

    fn test_store() -> BlockStore {
        BlockStore::new(EditorConfig::default())
    }

    fn store_with(ids: &[&str]) -> BlockStore {
        let mut store = test_store();
        store
            .reset_blocks(ids.iter().map(|id| Block::text(*id, *id)).collect())
            .unwrap();
        store
    }

    fn ids(store: &BlockStore) -> Vec<&str> {
        store.blocks().iter().map(|b| b.id.as_str()).collect()
    }

    fn patch(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("patch must be an object"),
        }
    }

    fn id(s: &str) -> BlockId {
        BlockId::new(s)
    }

    #[test]
    fn test_new_store() {
        let store = test_store();
        assert!(store.is_empty());
        assert!(store.rows().is_empty());
        assert!(!store.can_undo());
        assert!(!store.can_redo());
    }

    #[test]
    fn test_add_block_appends_with_defaults() {
        let mut store = test_store();
        let a = store.add_block(BlockKind::Heading, None);

        assert_eq!(store.block_count(), 1);
        assert_eq!(store.rows(), &[RowEntry::new(ColumnCount::One, 1)]);
        match &store.get_block(&a).unwrap().content {
            BlockContent::Heading(h) => assert_eq!(h.level, HeadingLevel::H2),
            other => panic!("unexpected content: {other:?}"),
        }
        assert!(store.can_undo());
    }

    #[test]
    fn test_add_block_after_anchor() {
        let mut store = store_with(&["A", "B"]);
        let new = store.add_block(BlockKind::Divider, Some(&id("A")));
        assert_eq!(store.index_of(&new), Some(1));
        assert_eq!(store.blocks()[1].order, 1);
        assert_eq!(store.blocks()[2].order, 2);

        let appended = store.add_block(BlockKind::Spacer, Some(&id("missing")));
        assert_eq!(store.index_of(&appended), Some(3));
        assert_eq!(store.rows(), &[RowEntry::new(ColumnCount::One, 4)]);
    }

    #[test]
    fn test_add_block_joins_anchor_row() {
        let mut store = test_store();
        store
            .reset(
                vec![Block::text("A", ""), Block::text("B", ""), Block::text("C", "")],
                vec![RowEntry::new(ColumnCount::Two, 2), RowEntry::new(ColumnCount::One, 1)],
            )
            .unwrap();

        store.add_block(BlockKind::Text, Some(&id("A")));
        assert_eq!(
            store.rows(),
            &[RowEntry::new(ColumnCount::Two, 3), RowEntry::new(ColumnCount::One, 1)]
        );
    }

    #[test]
    fn test_update_block_merges_fields() {
        let mut store = store_with(&["A"]);
        assert!(store.update_block(&id("A"), patch(json!({ "content": "hello", "color": "#ff0000" }))));

        match &store.get_block(&id("A")).unwrap().content {
            BlockContent::Text(t) => {
                assert_eq!(t.content, "hello");
                assert_eq!(t.color.as_deref(), Some("#ff0000"));
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_update_block_null_clears_optional_field() {
        let mut store = test_store();
        let a = store.add_block(BlockKind::Text, None);
        assert!(store.update_block(&a, patch(json!({ "fontSize": null }))));
        match &store.get_block(&a).unwrap().content {
            BlockContent::Text(t) => assert_eq!(t.font_size, None),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_update_block_sets_and_clears_unknown_field() {
        let mut store = store_with(&["A"]);
        assert!(store.update_block(&id("A"), patch(json!({ "textAlign": "center" }))));
        assert_eq!(store.get_block(&id("A")).unwrap().extra["textAlign"], "center");
        assert!(!store.update_block(&id("A"), patch(json!({ "textAlign": "center" }))));

        assert!(store.update_block(&id("A"), patch(json!({ "textAlign": null }))));
        assert!(store.get_block(&id("A")).unwrap().extra.is_empty());

        assert!(store.undo());
        assert_eq!(store.get_block(&id("A")).unwrap().extra["textAlign"], "center");
    }

    #[test]
    fn test_update_block_soft_fails() {
        let mut store = store_with(&["A"]);
        let version = store.version();

        assert!(!store.update_block(&id("gone"), patch(json!({ "content": "x" }))));
        assert!(!store.update_block(&id("A"), patch(json!({ "type": "heading", "content": "x" }))));
        assert!(!store.update_block(&id("A"), patch(json!({ "id": "B" }))));
        assert!(!store.update_block(&id("A"), patch(json!({ "content": 42 }))));
        assert!(!store.update_block(&id("A"), patch(json!({ "content": "A" }))));

        assert_eq!(store.version(), version);
        assert!(!store.can_undo());
    }

    #[test]
    fn test_update_block_rejects_nested_container() {
        let mut store = test_store();
        let row = store.add_block(BlockKind::LayoutRow, None);
        let inner = json!({ "id": "inner", "type": "layout-grid", "template": "2x2", "children": [] });
        assert!(!store.update_block(&row, patch(json!({ "children": [[inner], []] }))));

        let child = json!({ "id": "child", "type": "divider" });
        assert!(store.update_block(&row, patch(json!({ "children": [[child], []] }))));
        assert_eq!(store.get_block(&row).unwrap().tree_size(), 2);
    }

    #[test]
    fn test_update_coalescing_uses_clock() {
        let clock = ManualClock::new(0);
        let mut store = BlockStore::with_clock(EditorConfig::default(), Arc::new(clock.clone()));
        store.reset_blocks(vec![Block::text("A", "")]).unwrap();

        for (i, text) in ["h", "he", "hel", "hell", "hello"].iter().enumerate() {
            clock.set(i as u64 * 200);
            assert!(store.update_block(&id("A"), patch(json!({ "content": text }))));
        }
        assert_eq!(store.undo_depth(), 1);

        clock.advance(5_000);
        store.update_block(&id("A"), patch(json!({ "content": "hello world" })));
        assert_eq!(store.undo_depth(), 2);

        store.update_block(&id("A"), patch(json!({ "color": "#000000" })));
        assert_eq!(store.undo_depth(), 3);

        store.undo();
        store.undo();
        match &store.get_block(&id("A")).unwrap().content {
            BlockContent::Text(t) => assert_eq!(t.content, "hello"),
            other => panic!("unexpected content: {other:?}"),
        }
        store.undo();
        match &store.get_block(&id("A")).unwrap().content {
            BlockContent::Text(t) => assert_eq!(t.content, ""),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_delete_block_clears_selection() {
        let mut store = store_with(&["A", "B"]);
        assert!(store.select(&id("B")));
        assert!(store.delete_block(&id("B")));
        assert_eq!(store.selected(), None);
        assert_eq!(ids(&store), vec!["A"]);
        assert_eq!(store.rows(), &[RowEntry::new(ColumnCount::One, 1)]);

        assert!(!store.delete_block(&id("B")));
    }

    #[test]
    fn test_delete_last_block_keeps_single_row() {
        let mut store = store_with(&["A"]);
        store.delete_block(&id("A"));
        assert!(store.is_empty());
        assert_eq!(store.rows(), &[RowEntry::new(ColumnCount::One, 0)]);
    }

    #[test]
    fn test_reorder_blocks() {
        let mut store = store_with(&["A", "B", "C", "D"]);
        assert!(store.reorder_blocks(&id("A"), 2));
        assert_eq!(ids(&store), vec!["B", "C", "A", "D"]);
        assert_eq!(store.blocks()[2].order, 2);

        assert!(store.reorder_blocks(&id("D"), 0));
        assert_eq!(ids(&store), vec!["D", "B", "C", "A"]);

        // Past the end clamps to the last position.
        assert!(store.reorder_blocks(&id("D"), 99));
        assert_eq!(ids(&store), vec!["B", "C", "A", "D"]);

        assert!(!store.reorder_blocks(&id("D"), 3));
        assert!(!store.reorder_blocks(&id("gone"), 0));
    }

    #[test]
    fn test_reset_clears_history_and_reconciles_rows() {
        let mut store = store_with(&["A"]);
        store.add_block(BlockKind::Text, None);
        store.undo();
        assert!(store.can_redo());

        store
            .reset(
                vec![Block::text("X", ""), Block::text("Y", ""), Block::text("Z", "")],
                vec![RowEntry::new(ColumnCount::Three, 1)],
            )
            .unwrap();
        assert!(!store.can_undo());
        assert!(!store.can_redo());
        assert_eq!(store.rows(), &[RowEntry::new(ColumnCount::Three, 3)]);
    }

    #[test]
    fn test_reset_rejects_duplicate_ids() {
        let mut store = store_with(&["A"]);
        assert!(store.reset_blocks(vec![Block::text("X", ""), Block::text("X", "")]).is_err());
        assert_eq!(ids(&store), vec!["A"]);
    }

    #[test]
    fn test_undo_redo_restores_state() {
        let mut store = store_with(&["A"]);
        let before = store.revision();
        let b = store.add_block(BlockKind::Image, None);
        let after = store.revision();

        assert!(store.undo());
        assert_eq!(store.revision(), before);
        assert!(!store.contains(&b));

        assert!(store.redo());
        assert_eq!(store.revision(), after);
        assert!(!store.redo());
    }

    #[test]
    fn test_select_requires_present_id() {
        let mut store = store_with(&["A"]);
        assert!(!store.select(&id("nope")));
        assert_eq!(store.selected(), None);
        assert!(store.select(&id("A")));
        assert_eq!(store.selected_block().map(|b| b.id.as_str()), Some("A"));
        store.clear_selection();
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn test_undo_drops_selection_of_removed_block() {
        let mut store = store_with(&["A"]);
        let b = store.add_block(BlockKind::Text, None);
        store.select(&b);
        store.undo();
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn test_zero_depth_config_still_loads_blocks() {
        let mut store = BlockStore::new(EditorConfig {
            max_nesting_depth: 0,
            ..EditorConfig::default()
        });
        assert_eq!(store.config().max_nesting_depth, 1);
        store.reset_blocks(vec![Block::text("A", "a")]).unwrap();
        assert_eq!(ids(&store), vec!["A"]);
    }

    #[test]
    fn test_history_limit_from_config() {
        let mut store = BlockStore::new(EditorConfig::default().with_history_limit(2));
        for _ in 0..5 {
            store.add_block(BlockKind::Divider, None);
        }
        assert_eq!(store.undo_depth(), 2);
        assert!(store.undo());
        assert!(store.undo());
        assert!(!store.undo());
        assert_eq!(store.block_count(), 3);
    }
}
