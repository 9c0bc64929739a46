//! Content blocks: the leaf payloads of a document.
//!
//! JSON uses the `type` field as discriminator. Any tag outside the six
//! known ones deserializes to [`ContentBlock::Unknown`], which renders as
//! nothing.

use serde::{Deserialize, Serialize};

// =============================================================================
// ContentBlock
// =============================================================================

/// One piece of visible material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentBlock {
    Text(Text),
    Paragraph(Paragraph),
    BulletList(BulletList),
    Image(Image),
    Divider(Divider),
    Spacer(Spacer),
    /// Unrecognized `type` tag
    #[serde(other)]
    Unknown,
}

impl ContentBlock {
    /// The `type` tag this block serializes with
    pub fn type_name(&self) -> &'static str {
        match self {
            ContentBlock::Text(_) => "text",
            ContentBlock::Paragraph(_) => "paragraph",
            ContentBlock::BulletList(_) => "bullet-list",
            ContentBlock::Image(_) => "image",
            ContentBlock::Divider(_) => "divider",
            ContentBlock::Spacer(_) => "spacer",
            ContentBlock::Unknown => "unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ContentBlock::Unknown)
    }
}

impl From<Text> for ContentBlock {
    fn from(value: Text) -> Self {
        Self::Text(value)
    }
}

impl From<Paragraph> for ContentBlock {
    fn from(value: Paragraph) -> Self {
        Self::Paragraph(value)
    }
}

impl From<BulletList> for ContentBlock {
    fn from(value: BulletList) -> Self {
        Self::BulletList(value)
    }
}

impl From<Image> for ContentBlock {
    fn from(value: Image) -> Self {
        Self::Image(value)
    }
}

impl From<Divider> for ContentBlock {
    fn from(value: Divider) -> Self {
        Self::Divider(value)
    }
}

impl From<Spacer> for ContentBlock {
    fn from(value: Spacer) -> Self {
        Self::Spacer(value)
    }
}

// =============================================================================
// Shared attribute types
// =============================================================================

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Right,
    Center,
    Justify,
}

impl Alignment {
    /// CSS `text-align` keyword
    pub fn as_css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Center => "center",
            Alignment::Justify => "justify",
        }
    }
}

/// Requested list marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Disc,
    Circle,
    Square,
    Decimal,
}

impl ListStyle {
    /// CSS `list-style-type` keyword
    pub fn as_css(self) -> &'static str {
        match self {
            ListStyle::Disc => "disc",
            ListStyle::Circle => "circle",
            ListStyle::Square => "square",
            ListStyle::Decimal => "decimal",
        }
    }

    /// Whether the marker numbers its items
    pub fn is_ordered(self) -> bool {
        matches!(self, ListStyle::Decimal)
    }
}

/// Borrowed view of the font properties shared by text-like blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fonts<'a> {
    pub family: Option<&'a str>,
    pub weight: Option<&'a str>,
    pub style: Option<&'a str>,
    pub size: Option<&'a str>,
    pub color: Option<&'a str>,
}

// =============================================================================
// Variants
// =============================================================================

/// A single run of text, optionally flowed over several columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn fonts(&self) -> Fonts<'_> {
        Fonts {
            family: self.font_family.as_deref(),
            weight: self.font_weight.as_deref(),
            style: self.font_style.as_deref(),
            size: self.font_size.as_deref(),
            color: self.font_color.as_deref(),
        }
    }
}

/// A run of paragraphs, each indented on its first line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub text: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
}

impl Paragraph {
    pub fn new<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: paragraphs.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn fonts(&self) -> Fonts<'_> {
        Fonts {
            family: self.font_family.as_deref(),
            weight: self.font_weight.as_deref(),
            style: self.font_style.as_deref(),
            size: self.font_size.as_deref(),
            color: self.font_color.as_deref(),
        }
    }
}

/// A list of items, optionally flowed over several columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletList {
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_style_type: Option<ListStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
}

impl BulletList {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn fonts(&self) -> Fonts<'_> {
        Fonts {
            family: self.font_family.as_deref(),
            weight: self.font_weight.as_deref(),
            style: self.font_style.as_deref(),
            size: self.font_size.as_deref(),
            color: self.font_color.as_deref(),
        }
    }
}

/// A captioned image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Rendered width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Rendered height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

impl Image {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Default::default()
        }
    }
}

/// A horizontal rule.
///
/// `thickness` and `width` are CSS lengths (`"4px"`, `"10%"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Divider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

/// Vertical whitespace measured in text lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacer {
    pub lines: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

impl Spacer {
    pub fn new(lines: f64) -> Self {
        Self {
            lines,
            alignment: None,
        }
    }
}
