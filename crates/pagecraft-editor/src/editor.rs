//! Editing session: one document, one store, one history.
//!
//! Nothing is shared between sessions. Loading a document replaces the
//! session's baseline and discards its history, so undo can never reach into
//! a previously loaded document.

use std::sync::Arc;

use pagecraft_types::{Block, Document, DocumentLoader, RowEntry};
use serde_json::Value;

use crate::block_store::BlockStore;
use crate::clock::Clock;
use crate::config::EditorConfig;
use crate::row_manager::RowManager;

/// Owner of one page document for the duration of an editing session.
#[derive(Debug)]
pub struct Editor {
    store: BlockStore,
    /// Version string carried through from the loaded document.
    version: String,
}

impl Editor {
    /// Start an empty session.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            store: BlockStore::new(config),
            version: pagecraft_types::DOCUMENT_VERSION.to_string(),
        }
    }

    /// Start an empty session with an explicit clock for edit coalescing.
    pub fn with_clock(config: EditorConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: BlockStore::with_clock(config, clock),
            version: pagecraft_types::DOCUMENT_VERSION.to_string(),
        }
    }

    /// Start a session on an existing document.
    pub fn from_document(config: EditorConfig, document: Document) -> pagecraft_types::Result<Self> {
        let mut editor = Self::new(config);
        editor.load(document)?;
        Ok(editor)
    }

    pub fn config(&self) -> &EditorConfig {
        self.store.config()
    }

    /// Document version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    // =========================================================================
    // Load / save
    // =========================================================================

    /// Make `document` the new baseline. Clears selection and history.
    pub fn load(&mut self, document: Document) -> pagecraft_types::Result<()> {
        let Document {
            blocks,
            rows,
            version,
        } = document;
        self.store.reset(blocks, rows)?;
        self.version = version;
        Ok(())
    }

    /// Parse, validate, and load a persisted document.
    pub fn load_json(&mut self, json: &str) -> pagecraft_types::Result<()> {
        let document = self.loader().load_str(json)?;
        self.load(document)
    }

    /// Validate and load an already-parsed document, which may be a JSON
    /// string holding the document.
    pub fn load_json_value(&mut self, value: Value) -> pagecraft_types::Result<()> {
        let document = self.loader().load_value(value)?;
        self.load(document)
    }

    /// Current state as a document, ready to save.
    pub fn to_document(&self) -> Document {
        Document {
            blocks: self.store.blocks().to_vec(),
            rows: self.store.rows().to_vec(),
            version: self.version.clone(),
        }
    }

    /// Current state in the persisted JSON shape.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        self.to_document().to_json_string()
    }

    fn loader(&self) -> DocumentLoader {
        DocumentLoader::new().max_depth(self.config().max_nesting_depth)
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Block-level operations, selection, and history.
    pub fn store(&self) -> &BlockStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BlockStore {
        &mut self.store
    }

    /// Row-level operations.
    pub fn rows(&mut self) -> RowManager<'_> {
        self.store.row_manager()
    }

    /// The row table.
    pub fn row_table(&self) -> &[RowEntry] {
        self.store.rows()
    }

    /// Blocks grouped per row, as they render.
    pub fn grouped(&self) -> Vec<&[Block]> {
        self.store.grouped()
    }

    pub fn undo(&mut self) -> bool {
        self.store.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.store.redo()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
