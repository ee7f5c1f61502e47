//! Shared block and document types for Pagecraft.
//!
//! This crate is the data foundation of the page editor: typed ids, the block
//! model, row tables, the row-grouping projection, and the persisted document
//! format. It has **no internal pagecraft dependencies** and no editing state;
//! `pagecraft-editor` builds the mutable store on top of it.
//!
//! # Overview
//!
//! ```text
//! Document
//!     └── blocks: Vec<Block>       flat, ordered, authoritative
//!     │       └── Block (BlockId + BlockContent)
//!     │               └── layout-row / layout-grid hold nested cells
//!     └── rowConfig: Vec<RowEntry> positional partition of `blocks`
//!             └── RowEntry (ColumnCount + block_count)
//! ```
//!
//! # Key Types
//!
//! |--------------------|----------------------------------------------|
//! | Type               | Purpose                                      |
//! |--------------------|----------------------------------------------|
//! | [`Block`]          | Id, order hint, and variant payload          |
//! | [`BlockContent`]   | The 15 block variants                        |
//! | [`BlockKind`]      | Variant discriminant without payload         |
//! | [`BlockId`]        | Stable block identifier                      |
//! | [`RowEntry`]       | One row: column count + owned block count    |
//! | [`Document`]       | Persisted `{blocks, rowConfig, version}`     |
//! | [`DocumentLoader`] | Validating loader with configurable limits   |
//! |--------------------|----------------------------------------------|

pub mod block;
pub mod document;
pub mod error;
pub mod grouping;
pub mod ids;
pub mod row;
pub mod validate;

// Re-export primary types at crate root for convenience.
pub use block::{
    AspectRatio, Block, BlockContent, BlockKind, ColumnDistribution, DividerBlock, DividerStyle,
    FontWeight, GalleryBlock, GalleryLayout, GridTemplate, HeadingBlock, HeadingLevel,
    HeroImageBlock, HeroSectionBlock, ImageAlign, ImageBlock, ImageDistribution, ImageEntry,
    ImageGridBlock, ImageGridRow, ImageRowBlock, ImageSize, LayoutGridBlock, LayoutRowBlock,
    OverlayPosition, SpacerBlock, SpacerHeight, SplitColumns, TextBlock, TextColumnWidth,
    TitleStyle, WorkLayoutConfigBlock, WorkMetadataBlock, WorkTitleBlock,
};
pub use document::{DOCUMENT_VERSION, Document, DocumentLoader};
pub use error::{Result, ValidationError};
pub use grouping::{RowShape, effective_rows, group_into_rows, row_ranges};
pub use ids::{BlockId, ImageId};
pub use row::{ColumnCount, RowEntry, generate_row_config, total_block_count};
pub use validate::{MAX_NESTING_DEPTH, validate_block_tree};
