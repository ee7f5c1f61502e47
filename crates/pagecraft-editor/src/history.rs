//! Bounded linear undo/redo history.
//!
//! Each entry is a full [`Revision`] of the editable state taken *before* a
//! mutation. Undo swaps the present for the newest past entry and parks the
//! present on the redo stack; any new mutation clears the redo stack.
//!
//! Field edits coalesce: an update whose [`EditKey`] matches the previous
//! update, arriving within the window of the previous one, reuses that
//! update's entry instead of pushing a new one.

use std::collections::VecDeque;

use pagecraft_types::{Block, BlockId, RowEntry};

/// Snapshot of everything undo restores.
#[derive(Clone, Debug, PartialEq)]
pub struct Revision {
    pub blocks: Vec<Block>,
    pub rows: Vec<RowEntry>,
}

/// Identity of a field edit for coalescing: which block, which fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditKey {
    block: BlockId,
    fields: Vec<String>,
}

impl EditKey {
    /// Field names are sorted so patch key order does not matter.
    pub fn new(block: BlockId, fields: impl IntoIterator<Item = String>) -> Self {
        let mut fields: Vec<String> = fields.into_iter().collect();
        fields.sort();
        fields.dedup();
        Self { block, fields }
    }
}

#[derive(Clone, Debug)]
struct LastEdit {
    key: EditKey,
    at_ms: u64,
}

#[derive(Debug)]
pub(crate) struct History {
    past: VecDeque<Revision>,
    future: Vec<Revision>,
    limit: usize,
    coalesce_window_ms: u64,
    last_edit: Option<LastEdit>,
}

impl History {
    pub(crate) fn new(limit: usize, coalesce_window_ms: u64) -> Self {
        Self {
            past: VecDeque::new(),
            future: Vec::new(),
            limit,
            coalesce_window_ms,
            last_edit: None,
        }
    }

    pub(crate) fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub(crate) fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub(crate) fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub(crate) fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Record a structural mutation.
    pub(crate) fn record(&mut self, before: Revision) {
        self.last_edit = None;
        self.future.clear();
        self.push_past(before);
    }

    /// Record a field edit. Returns true when it was folded into the previous entry.
    pub(crate) fn record_edit(&mut self, before: Revision, key: EditKey, now_ms: u64) -> bool {
        self.future.clear();

        let coalesced = match &mut self.last_edit {
            Some(last) if last.key == key && now_ms.saturating_sub(last.at_ms) <= self.coalesce_window_ms => {
                last.at_ms = now_ms;
                true
            }
            _ => false,
        };

        // With history disabled there is no entry to fold into.
        if coalesced && self.can_undo() {
            return true;
        }

        self.push_past(before);
        self.last_edit = Some(LastEdit { key, at_ms: now_ms });
        false
    }

    /// Step back. `present` becomes the newest redo entry.
    pub(crate) fn undo(&mut self, present: Revision) -> Option<Revision> {
        let previous = self.past.pop_back()?;
        self.future.push(present);
        self.last_edit = None;
        Some(previous)
    }

    /// Step forward. `present` becomes the newest undo entry.
    pub(crate) fn redo(&mut self, present: Revision) -> Option<Revision> {
        let next = self.future.pop()?;
        self.push_past(present);
        self.last_edit = None;
        Some(next)
    }

    /// Forget everything.
    pub(crate) fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
        self.last_edit = None;
    }

    fn push_past(&mut self, revision: Revision) {
        if self.limit == 0 {
            return;
        }
        self.past.push_back(revision);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
    }
}
