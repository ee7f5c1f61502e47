//! Error types for loading and validating page documents.

use thiserror::Error;

use crate::block::BlockKind;
use crate::ids::BlockId;

/// Errors that can occur when a persisted payload is turned into a document.
///
/// Block-level variants carry a path such as `blocks[2].children[1][0]` so a
/// rejected payload can be traced back to the offending value.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Payload is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload is JSON but not shaped like a page document.
    #[error("not a page document: {0}")]
    NotADocument(String),

    /// Block `type` is not one of the known variants.
    #[error("{path}: unknown block type {found:?}")]
    UnknownBlockType { path: String, found: String },

    /// Block has a known type but a missing or ill-typed field.
    #[error("{path}: invalid block: {reason}")]
    InvalidBlock { path: String, reason: String },

    /// Two blocks anywhere in the tree share an id.
    #[error("{path}: duplicate block id {id}")]
    DuplicateId { path: String, id: BlockId },

    /// A container block appears inside another container.
    #[error("{path}: {kind} cannot be nested inside another container")]
    NestedContainer { path: String, kind: BlockKind },

    /// The block tree is deeper than allowed.
    #[error("{path}: block tree exceeds maximum nesting depth of {max}")]
    TooDeep { path: String, max: usize },

    /// A row table entry is malformed.
    #[error("rowConfig[{index}]: {reason}")]
    InvalidRow { index: usize, reason: String },
}

/// Result type for document loading.
pub type Result<T> = std::result::Result<T, ValidationError>;
