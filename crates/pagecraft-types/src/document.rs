//! Persisted page document: `{ blocks, rowConfig, version }`.
//!
//! Loading is strict about blocks and lenient about rows. Every block must
//! validate or the whole payload is rejected. A missing or empty row table over
//! a non-empty body becomes one implicit single-column row, and a table whose
//! counts disagree with the body is kept as-is (the projection reconciles it)
//! with a warning.
//!
//! Some stores hand the payload back as a JSON string holding the document
//! rather than the document itself; such a string is decoded exactly once.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::block::Block;
use crate::error::{Result, ValidationError};
use crate::grouping::{effective_rows, group_into_rows};
use crate::row::{ColumnCount, RowEntry, total_block_count};
use crate::validate::{MAX_NESTING_DEPTH, parse_block, validate_block_tree};

/// Version string written into new documents.
pub const DOCUMENT_VERSION: &str = "1.0";

fn default_version() -> String {
    DOCUMENT_VERSION.to_string()
}

/// A page body: ordered top-level blocks plus the row table over them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
    #[serde(rename = "rowConfig", default)]
    pub rows: Vec<RowEntry>,
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl Document {
    /// A document with no blocks and no rows.
    pub fn empty() -> Self {
        Self {
            blocks: Vec::new(),
            rows: Vec::new(),
            version: default_version(),
        }
    }

    /// Assemble a document from already-validated parts.
    pub fn new(blocks: Vec<Block>, rows: Vec<RowEntry>) -> Self {
        Self {
            blocks,
            rows,
            version: default_version(),
        }
    }

    /// Parse and validate a persisted document with default limits.
    pub fn from_json_str(s: &str) -> Result<Self> {
        DocumentLoader::default().load_str(s)
    }

    /// Validate an already-parsed JSON value with default limits.
    pub fn from_json_value(value: Value) -> Result<Self> {
        DocumentLoader::default().load_value(value)
    }

    /// Serialize to the persisted shape, refreshing each top-level `order`.
    pub fn to_json_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self.with_fresh_order())
    }

    /// Serialize to a JSON string, refreshing each top-level `order`.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.with_fresh_order())
    }

    /// Rewrite every top-level block's `order` to its array position.
    pub fn reindex_order(&mut self) {
        for (i, block) in self.blocks.iter_mut().enumerate() {
            block.order = i as u32;
        }
    }

    /// Blocks grouped per row, as they render.
    pub fn grouped(&self) -> Vec<&[Block]> {
        group_into_rows(&self.blocks, &self.rows)
    }

    /// The row table as the projection applies it; always sums to the block count.
    pub fn effective_rows(&self) -> Vec<RowEntry> {
        effective_rows(&self.rows, self.blocks.len())
    }

    /// Check whether the stored row counts sum to the number of blocks.
    pub fn is_reconciled(&self) -> bool {
        total_block_count(&self.rows) == self.blocks.len()
    }

    fn with_fresh_order(&self) -> Self {
        let mut doc = self.clone();
        doc.reindex_order();
        doc
    }
}

/// Loader with configurable limits.
///
/// ```
/// use pagecraft_types::DocumentLoader;
///
/// let doc = DocumentLoader::new()
///     .max_depth(2)
///     .load_str(r#"{ "blocks": [] }"#)
///     .unwrap();
/// assert!(doc.blocks.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct DocumentLoader {
    max_depth: usize,
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self {
            max_depth: MAX_NESTING_DEPTH,
        }
    }

    /// Maximum block-tree depth; the top level is depth 1.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn load_str(&self, s: &str) -> Result<Document> {
        let value: Value = serde_json::from_str(s)?;
        self.load_value(value)
    }

    pub fn load_value(&self, value: Value) -> Result<Document> {
        let value = match value {
            Value::String(inner) => serde_json::from_str(&inner)?,
            other => other,
        };

        let Value::Object(mut obj) = value else {
            return Err(ValidationError::NotADocument(
                "expected an object with a blocks array".to_string(),
            ));
        };

        let blocks_value = match obj.remove("blocks") {
            Some(Value::Array(items)) => items,
            Some(_) => return Err(ValidationError::NotADocument("blocks must be an array".to_string())),
            None => return Err(ValidationError::NotADocument("missing blocks array".to_string())),
        };

        let blocks = blocks_value
            .iter()
            .enumerate()
            .map(|(i, v)| parse_block(v, &format!("blocks[{i}]")))
            .collect::<Result<Vec<_>>>()?;
        validate_block_tree(&blocks, self.max_depth)?;

        let mut rows = match obj.remove("rowConfig") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => parse_rows(items)?,
            Some(_) => {
                return Err(ValidationError::NotADocument("rowConfig must be an array".to_string()));
            }
        };

        let version = match obj.remove("version") {
            None | Some(Value::Null) => default_version(),
            Some(Value::String(v)) => v,
            Some(_) => return Err(ValidationError::NotADocument("version must be a string".to_string())),
        };

        if rows.is_empty() && !blocks.is_empty() {
            rows.push(RowEntry::new(ColumnCount::One, blocks.len()));
        }

        let counted = total_block_count(&rows);
        if counted != blocks.len() {
            tracing::warn!(
                "row table covers {counted} blocks but document has {}, rendering with reconciled rows",
                blocks.len()
            );
        }

        Ok(Document {
            blocks,
            rows,
            version,
        })
    }
}

fn parse_rows(items: Vec<Value>) -> Result<Vec<RowEntry>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, v)| {
            serde_json::from_value(v).map_err(|e| ValidationError::InvalidRow {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}
