//! Block and row editing for Pagecraft page bodies.
//!
//! A page body is a flat, ordered list of blocks plus a row table that
//! partitions it into rows of 1-3 columns. This crate keeps both views
//! consistent under editing and makes every edit undoable.
//!
//! # Design Philosophy
//!
//! The flat sequence is authoritative. Row membership is positional, so:
//! - Block operations (add, delete, reorder) adjust the owning row's count
//! - Row operations (move block to row, reorder rows) permute the flat
//!   sequence together with the row table
//! - After every operation the row counts sum to the number of blocks
//!
//! # Layers
//!
//! - [`BlockStore`]: blocks, row table, selection, bounded undo/redo
//! - [`RowManager`]: row-level operations, borrowed from a store
//! - [`Editor`]: one store per editing session, plus load/save
//!
//! # Failure Semantics
//!
//! Editing never fails. Stale ids and out-of-range indices are logged via
//! `tracing` and ignored; operations report whether they applied. Errors are
//! reserved for the load boundary ([`pagecraft_types::ValidationError`]) and
//! configuration ([`ConfigError`]).

mod block_store;
mod clock;
mod config;
mod editor;
mod error;
mod history;
mod row_manager;

pub use block_store::BlockStore;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{DEFAULT_COALESCE_WINDOW_MS, DEFAULT_HISTORY_LIMIT, EditorConfig};
pub use editor::Editor;
pub use error::ConfigError;
pub use history::{EditKey, Revision};
pub use row_manager::RowManager;

pub use pagecraft_types::{
    Block, BlockContent, BlockId, BlockKind, ColumnCount, Document, RowEntry, ValidationError,
};
