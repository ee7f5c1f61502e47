//! Block model: the closed set of content units a page body is built from.
//!
//! A [`Block`] is an id, a non-authoritative `order` hint, and a
//! [`BlockContent`] variant. The persisted shape is a flat JSON object with a
//! kebab-case `type` discriminant and camelCase fields:
//!
//! ```json
//! { "id": "block-…", "order": 0, "type": "heading", "level": 2, "content": "Intro" }
//! ```
//!
//! ## Design: BlockContent + BlockKind
//!
//! `BlockContent` carries the payload and is matched exhaustively everywhere
//! (validation, default construction, grouping). `BlockKind` is the bare
//! discriminant, used when a caller names a variant without data (toolbars,
//! `add_block`, error reports).
//!
//! Two variants are containers: `layout-row` and `layout-grid` hold nested
//! blocks per cell. Containers only appear at the top level; see
//! [`crate::validate`].

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use serde_json::{Map, Value};
use strum::EnumString;

use crate::grouping::{RowShape, group_into_rows};
use crate::ids::{BlockId, ImageId};
use crate::row::ColumnCount;

/// One content unit in the page body.
///
/// Fields the model does not define are kept in `extra` and written back on
/// save, so documents from newer editors survive a load/save cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    /// Stable identifier, assigned at creation and never changed.
    pub id: BlockId,
    /// Display/debug position hint. Array position is authoritative.
    pub order: u32,
    /// Variant payload, flattened next to `id` and `order` with a `type` tag.
    pub content: BlockContent,
    /// Unrecognized fields, preserved verbatim.
    pub extra: Map<String, Value>,
}

/// Typed part of the persisted shape, for serialization.
#[derive(Serialize)]
struct BlockFieldsRef<'a> {
    id: &'a BlockId,
    order: u32,
    #[serde(flatten)]
    content: &'a BlockContent,
}

/// Typed part of the persisted shape, for deserialization.
#[derive(Deserialize)]
struct BlockFields {
    id: BlockId,
    #[serde(default)]
    order: u32,
    #[serde(flatten)]
    content: BlockContent,
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let typed = BlockFieldsRef {
            id: &self.id,
            order: self.order,
            content: &self.content,
        };
        if self.extra.is_empty() {
            return typed.serialize(serializer);
        }

        let mut value = serde_json::to_value(&typed).map_err(ser::Error::custom)?;
        if let Value::Object(fields) = &mut value {
            // Typed fields win over a stale extra of the same name.
            for (key, extra) in &self.extra {
                fields.entry(key.clone()).or_insert_with(|| extra.clone());
            }
        }
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Block::from_value(value).map_err(de::Error::custom)
    }
}

impl Block {
    /// Create a block from existing content.
    pub fn new(id: BlockId, content: BlockContent) -> Self {
        Self {
            id,
            order: 0,
            content,
            extra: Map::new(),
        }
    }

    /// Decode the persisted shape, splitting off fields the model does not
    /// define into `extra`.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        let BlockFields { id, order, content } = BlockFields::deserialize(&value)?;

        let mut extra = Map::new();
        if let Value::Object(fields) = value {
            let typed = serde_json::to_value(BlockFieldsRef {
                id: &id,
                order,
                content: &content,
            })?;
            for (key, field) in fields {
                if typed.get(&key).is_none() {
                    extra.insert(key, field);
                }
            }
        }

        Ok(Self {
            id,
            order,
            content,
            extra,
        })
    }

    /// Create a block of `kind` with a fresh id and renderable defaults.
    pub fn new_default(kind: BlockKind) -> Self {
        Self::new(BlockId::generate(), BlockContent::default_for(kind))
    }

    /// Shorthand for a text block, mostly useful when assembling fixtures.
    pub fn text(id: impl Into<BlockId>, content: impl Into<String>) -> Self {
        Self::new(
            id.into(),
            BlockContent::Text(TextBlock {
                content: content.into(),
                ..TextBlock::default()
            }),
        )
    }

    /// The variant discriminant.
    pub fn kind(&self) -> BlockKind {
        self.content.kind()
    }

    /// Check if this block holds nested blocks.
    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// Nested cells for container blocks, `None` for everything else.
    pub fn children(&self) -> Option<&[Vec<Block>]> {
        match &self.content {
            BlockContent::LayoutRow(row) => Some(&row.children),
            BlockContent::LayoutGrid(grid) => Some(&grid.children),
            _ => None,
        }
    }

    /// Mutable access to nested cells for container blocks.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Vec<Block>>> {
        match &mut self.content {
            BlockContent::LayoutRow(row) => Some(&mut row.children),
            BlockContent::LayoutGrid(grid) => Some(&mut grid.children),
            _ => None,
        }
    }

    /// Visit this block and every nested block, depth-first.
    ///
    /// `depth` is 1 for the block itself, 2 for its direct children, and so on.
    pub fn walk<'a>(&'a self, depth: usize, visit: &mut impl FnMut(&'a Block, usize)) {
        visit(self, depth);
        if let Some(cells) = self.children() {
            for cell in cells {
                for child in cell {
                    child.walk(depth + 1, visit);
                }
            }
        }
    }

    /// Count this block plus all nested blocks.
    pub fn tree_size(&self) -> usize {
        let mut n = 0;
        self.walk(1, &mut |_, _| n += 1);
        n
    }
}

/// Variant payloads, tagged by `type` in the persisted shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BlockContent {
    Text(TextBlock),
    Heading(HeadingBlock),
    Image(ImageBlock),
    Gallery(GalleryBlock),
    Spacer(SpacerBlock),
    Divider(DividerBlock),
    HeroImage(HeroImageBlock),
    HeroSection(HeroSectionBlock),
    WorkTitle(WorkTitleBlock),
    WorkMetadata(WorkMetadataBlock),
    WorkLayoutConfig(WorkLayoutConfigBlock),
    ImageRow(ImageRowBlock),
    ImageGrid(ImageGridBlock),
    LayoutRow(LayoutRowBlock),
    LayoutGrid(LayoutGridBlock),
}

impl BlockContent {
    /// The variant discriminant.
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Text(_) => BlockKind::Text,
            BlockContent::Heading(_) => BlockKind::Heading,
            BlockContent::Image(_) => BlockKind::Image,
            BlockContent::Gallery(_) => BlockKind::Gallery,
            BlockContent::Spacer(_) => BlockKind::Spacer,
            BlockContent::Divider(_) => BlockKind::Divider,
            BlockContent::HeroImage(_) => BlockKind::HeroImage,
            BlockContent::HeroSection(_) => BlockKind::HeroSection,
            BlockContent::WorkTitle(_) => BlockKind::WorkTitle,
            BlockContent::WorkMetadata(_) => BlockKind::WorkMetadata,
            BlockContent::WorkLayoutConfig(_) => BlockKind::WorkLayoutConfig,
            BlockContent::ImageRow(_) => BlockKind::ImageRow,
            BlockContent::ImageGrid(_) => BlockKind::ImageGrid,
            BlockContent::LayoutRow(_) => BlockKind::LayoutRow,
            BlockContent::LayoutGrid(_) => BlockKind::LayoutGrid,
        }
    }

    /// Default payload for a freshly inserted block of `kind`.
    ///
    /// Every required field is filled so the block renders immediately.
    pub fn default_for(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Text => BlockContent::Text(TextBlock::default()),
            BlockKind::Heading => BlockContent::Heading(HeadingBlock {
                level: HeadingLevel::H2,
                content: String::new(),
            }),
            BlockKind::Image => BlockContent::Image(ImageBlock {
                url: String::new(),
                alt: String::new(),
                caption: String::new(),
                size: ImageSize::Large,
                align: ImageAlign::Center,
            }),
            BlockKind::Gallery => BlockContent::Gallery(GalleryBlock {
                images: Vec::new(),
                layout: Some(GalleryLayout::Auto),
                image_layout: Some(ColumnCount::One),
            }),
            BlockKind::Spacer => BlockContent::Spacer(SpacerBlock {
                height: SpacerHeight::Medium,
            }),
            BlockKind::Divider => BlockContent::Divider(DividerBlock {
                style: Some(DividerStyle::Solid),
            }),
            BlockKind::HeroImage => BlockContent::HeroImage(HeroImageBlock {
                url: String::new(),
                alt: String::new(),
            }),
            BlockKind::HeroSection => BlockContent::HeroSection(HeroSectionBlock {
                url: String::new(),
                alt: String::new(),
                title: String::new(),
                author: String::new(),
                email: String::new(),
                style: TitleStyle::work_defaults(),
                overlay_position: Some(OverlayPosition::BottomLeft),
                overlay_opacity: Some(0.8),
                overlay_background: Some("rgba(0, 0, 0, 0.3)".to_string()),
            }),
            BlockKind::WorkTitle => BlockContent::WorkTitle(WorkTitleBlock {
                title: String::new(),
                author: String::new(),
                email: String::new(),
                style: TitleStyle::default(),
            }),
            BlockKind::WorkMetadata => BlockContent::WorkMetadata(WorkMetadataBlock {
                author: String::new(),
                email: String::new(),
            }),
            BlockKind::WorkLayoutConfig => BlockContent::WorkLayoutConfig(WorkLayoutConfigBlock {
                column_layout: ColumnCount::Two,
                column_gap: Some(90.0),
                text_column_width: Some(TextColumnWidth::Auto),
            }),
            BlockKind::ImageRow => BlockContent::ImageRow(ImageRowBlock {
                images: Vec::new(),
                distribution: Some(ImageDistribution::Equal),
                image_height: None,
                gap: None,
            }),
            BlockKind::ImageGrid => BlockContent::ImageGrid(ImageGridBlock {
                images: Vec::new(),
                rows: Vec::new(),
                gap: Some(16.0),
                aspect_ratio: Some(AspectRatio::Square),
            }),
            BlockKind::LayoutRow => BlockContent::LayoutRow(LayoutRowBlock {
                columns: SplitColumns::Two,
                children: vec![Vec::new(); 2],
                column_gap: Some(24.0),
                distribution: Some(ColumnDistribution::Equal),
                custom_widths: None,
            }),
            BlockKind::LayoutGrid => BlockContent::LayoutGrid(LayoutGridBlock {
                template: GridTemplate::TwoByTwo,
                children: GridTemplate::TwoByTwo.empty_cells(),
                gap: Some(16.0),
                min_cell_height: Some(200.0),
            }),
        }
    }
}

/// Block discriminant, without payload.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum BlockKind {
    Text,
    Heading,
    Image,
    Gallery,
    Spacer,
    Divider,
    HeroImage,
    HeroSection,
    WorkTitle,
    WorkMetadata,
    WorkLayoutConfig,
    ImageRow,
    ImageGrid,
    LayoutRow,
    LayoutGrid,
}

impl BlockKind {
    /// Every variant, in toolbar order.
    pub const ALL: [BlockKind; 15] = [
        BlockKind::Text,
        BlockKind::Heading,
        BlockKind::Image,
        BlockKind::Gallery,
        BlockKind::Spacer,
        BlockKind::Divider,
        BlockKind::HeroImage,
        BlockKind::HeroSection,
        BlockKind::WorkTitle,
        BlockKind::WorkMetadata,
        BlockKind::WorkLayoutConfig,
        BlockKind::ImageRow,
        BlockKind::ImageGrid,
        BlockKind::LayoutRow,
        BlockKind::LayoutGrid,
    ];

    /// Parse from the persisted discriminant (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        <Self as FromStr>::from_str(s).ok()
    }

    /// Convert to the persisted discriminant.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Heading => "heading",
            BlockKind::Image => "image",
            BlockKind::Gallery => "gallery",
            BlockKind::Spacer => "spacer",
            BlockKind::Divider => "divider",
            BlockKind::HeroImage => "hero-image",
            BlockKind::HeroSection => "hero-section",
            BlockKind::WorkTitle => "work-title",
            BlockKind::WorkMetadata => "work-metadata",
            BlockKind::WorkLayoutConfig => "work-layout-config",
            BlockKind::ImageRow => "image-row",
            BlockKind::ImageGrid => "image-grid",
            BlockKind::LayoutRow => "layout-row",
            BlockKind::LayoutGrid => "layout-grid",
        }
    }

    /// Check if blocks of this kind hold nested blocks.
    pub fn is_container(&self) -> bool {
        matches!(self, BlockKind::LayoutRow | BlockKind::LayoutGrid)
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Variant payloads
// ============================================================================

/// Markdown text with optional typography.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
}

impl Default for TextBlock {
    fn default() -> Self {
        Self {
            content: String::new(),
            font_size: Some(18.0),
            font_weight: Some(FontWeight::Regular),
            color: Some("#1b1d1f".to_string()),
            line_height: Some(1.8),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingBlock {
    pub level: HeadingLevel,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
    pub url: String,
    pub alt: String,
    pub caption: String,
    pub size: ImageSize,
    pub align: ImageAlign,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryBlock {
    pub images: Vec<ImageEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<GalleryLayout>,
    /// Columns used to lay out the images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_layout: Option<ColumnCount>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacerBlock {
    pub height: SpacerHeight,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<DividerStyle>,
}

/// Full-width image at the top of a work page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroImageBlock {
    pub url: String,
    pub alt: String,
}

/// Hero image with the title, author and email overlaid on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSectionBlock {
    pub url: String,
    pub alt: String,
    pub title: String,
    pub author: String,
    pub email: String,
    #[serde(flatten)]
    pub style: TitleStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_position: Option<OverlayPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_background: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkTitleBlock {
    pub title: String,
    pub author: String,
    pub email: String,
    #[serde(flatten)]
    pub style: TitleStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkMetadataBlock {
    pub author: String,
    pub email: String,
}

/// Column layout and spacing for the work detail page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLayoutConfigBlock {
    pub column_layout: ColumnCount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_gap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_column_width: Option<TextColumnWidth>,
}

/// A single row of 1-3 images.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRowBlock {
    pub images: Vec<ImageEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<ImageDistribution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
}

/// Images split into rows by the block's own row table.
///
/// Same contiguous-slice model as the page body: each grid row consumes
/// `image_count` images from the front of `images`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGridBlock {
    pub images: Vec<ImageEntry>,
    pub rows: Vec<ImageGridRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<AspectRatio>,
}

impl ImageGridBlock {
    /// Split `images` into rows, never dropping an image.
    pub fn image_rows(&self) -> Vec<&[ImageEntry]> {
        group_into_rows(&self.images, &self.rows)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGridRow {
    pub id: String,
    pub columns: ColumnCount,
    pub image_count: usize,
}

impl RowShape for ImageGridRow {
    fn count(&self) -> usize {
        self.image_count
    }
}

/// Horizontal container with 2 or 3 columns of nested blocks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRowBlock {
    pub columns: SplitColumns,
    /// One list of nested blocks per column.
    pub children: Vec<Vec<Block>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_gap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<ColumnDistribution>,
    /// Column widths in percent, used when `distribution` is `custom`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_widths: Option<Vec<f64>>,
}

/// Two-dimensional container; cells are filled row by row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutGridBlock {
    pub template: GridTemplate,
    /// One list of nested blocks per cell.
    pub children: Vec<Vec<Block>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_cell_height: Option<f64>,
}

// ============================================================================
// Shared sub-shapes
// ============================================================================

/// Image reference used by gallery, image-row, and image-grid blocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub id: ImageId,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ImageEntry {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: ImageId::generate(),
            url: url.into(),
            alt: None,
        }
    }
}

/// Optional title/author/email typography shared by work-title and hero-section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_color: Option<String>,
}

impl TitleStyle {
    /// Typography of the work detail page header (60px bold title).
    pub fn work_defaults() -> Self {
        Self {
            title_font_size: Some(60.0),
            author_font_size: Some(14.0),
            gap: Some(24.0),
            title_font_weight: Some(FontWeight::Bold),
            author_font_weight: Some(FontWeight::Medium),
            email_font_weight: Some(FontWeight::Regular),
            title_color: Some("#1b1d1f".to_string()),
            author_color: Some("#1b1d1f".to_string()),
            email_color: Some("#7b828e".to_string()),
        }
    }
}

// ============================================================================
// Small enums
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    #[serde(rename = "400")]
    Regular,
    #[serde(rename = "500")]
    Medium,
    #[serde(rename = "700")]
    Bold,
}

/// Heading level, persisted as the integer 1, 2, or 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            other => Err(format!("heading level must be 1, 2, or 3 (got {other})")),
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> u8 {
        match level {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// Column count of a layout-row container, persisted as 2 or 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SplitColumns {
    Two,
    Three,
}

impl TryFrom<u8> for SplitColumns {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(SplitColumns::Two),
            3 => Ok(SplitColumns::Three),
            other => Err(format!("layout-row columns must be 2 or 3 (got {other})")),
        }
    }
}

impl From<SplitColumns> for u8 {
    fn from(columns: SplitColumns) -> u8 {
        match columns {
            SplitColumns::Two => 2,
            SplitColumns::Three => 3,
        }
    }
}

/// Grid image aspect ratio, persisted as 1, 1.5, or 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum AspectRatio {
    Square,
    ThreeTwo,
    TwoOne,
}

impl TryFrom<f64> for AspectRatio {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 1.0 {
            Ok(AspectRatio::Square)
        } else if value == 1.5 {
            Ok(AspectRatio::ThreeTwo)
        } else if value == 2.0 {
            Ok(AspectRatio::TwoOne)
        } else {
            Err(format!("aspect ratio must be 1, 1.5, or 2 (got {value})"))
        }
    }
}

impl From<AspectRatio> for f64 {
    fn from(ratio: AspectRatio) -> f64 {
        match ratio {
            AspectRatio::Square => 1.0,
            AspectRatio::ThreeTwo => 1.5,
            AspectRatio::TwoOne => 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Small,
    Medium,
    Large,
    Full,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GalleryLayout {
    #[serde(rename = "1+2+3")]
    Staggered,
    #[serde(rename = "grid")]
    Grid,
    #[serde(rename = "auto")]
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacerHeight {
    Small,
    Medium,
    Large,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerStyle {
    Solid,
    Dashed,
    Dotted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayPosition {
    BottomLeft,
    BottomRight,
    Center,
    /// No overlay behind the title.
    #[serde(rename = "none")]
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColumnWidth {
    Auto,
    Narrow,
    Wide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageDistribution {
    Equal,
    GoldenLeft,
    GoldenCenter,
    GoldenRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnDistribution {
    Equal,
    GoldenLeft,
    GoldenCenter,
    GoldenRight,
    Custom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridTemplate {
    #[serde(rename = "2x2")]
    TwoByTwo,
    #[serde(rename = "3x1")]
    ThreeByOne,
    #[serde(rename = "1x3")]
    OneByThree,
    #[serde(rename = "2x3")]
    TwoByThree,
    #[serde(rename = "auto")]
    Auto,
}

impl GridTemplate {
    /// Number of cells the template lays out, `None` for `auto`.
    pub fn cell_count(&self) -> Option<usize> {
        match self {
            GridTemplate::TwoByTwo => Some(4),
            GridTemplate::ThreeByOne | GridTemplate::OneByThree => Some(3),
            GridTemplate::TwoByThree => Some(6),
            GridTemplate::Auto => None,
        }
    }

    /// One empty cell per template slot; `auto` starts with a single cell.
    pub fn empty_cells(&self) -> Vec<Vec<Block>> {
        vec![Vec::new(); self.cell_count().unwrap_or(1)]
    }
}

// ============================================================================
// Tests
// ============================================================================
