//! Visual tree node types.
//!
//! The renderer's output: `Element`s and `Text` nodes forming a small
//! HTML virtual DOM, independent of the `Doc` it was rendered from.
//!
//! # Key Features
//!
//! - Every element records the [`ElementKind`] of the schema node that
//!   produced it, so callers can query "all figures" without parsing tags
//! - Inline styles are structured ([`crate::style::Style`]), not strings
//! - Children live inline in a `SmallVec` for the common short lists

mod element;
mod text;
mod tree;

pub use element::Element;
pub use text::Text;
pub use tree::{ElementIterator, Stats, VisualTree};

use smallvec::SmallVec;

/// Node in a visual tree - either Element or Text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
}

impl Node {
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::Element(Box::new(value))
    }
}

impl From<Text> for Node {
    fn from(value: Text) -> Self {
        Node::Text(value)
    }
}

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 8]>;

// =============================================================================
// ElementKind
// =============================================================================

/// What schema node an element stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElementKind {
    /// Root wrapper of a rendered document
    Document,
    /// `<section>` container
    Section,
    /// Section or column title heading
    Title,
    /// Container of a plain subsection
    Subsection,
    /// Container of a column subsection
    ColumnGroup,
    /// Flex row holding the column cells
    ColumnRow,
    /// One sized cell inside a column row
    ColumnCell,
    /// Multi-column text flow wrapper
    TextFlow,
    /// Paragraph of text
    Paragraph,
    /// List container
    List,
    ListItem,
    Figure,
    Image,
    Caption,
    Divider,
    Spacer,
    /// Element without schema meaning
    #[default]
    Other,
}

impl ElementKind {
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Document => "document",
            ElementKind::Section => "section",
            ElementKind::Title => "title",
            ElementKind::Subsection => "subsection",
            ElementKind::ColumnGroup => "column-group",
            ElementKind::ColumnRow => "column-row",
            ElementKind::ColumnCell => "column-cell",
            ElementKind::TextFlow => "text-flow",
            ElementKind::Paragraph => "paragraph",
            ElementKind::List => "list",
            ElementKind::ListItem => "list-item",
            ElementKind::Figure => "figure",
            ElementKind::Image => "image",
            ElementKind::Caption => "caption",
            ElementKind::Divider => "divider",
            ElementKind::Spacer => "spacer",
            ElementKind::Other => "other",
        }
    }

    /// Layout containers produced by subsections rather than content
    pub fn is_layout(self) -> bool {
        matches!(
            self,
            ElementKind::Subsection
                | ElementKind::ColumnGroup
                | ElementKind::ColumnRow
                | ElementKind::ColumnCell
        )
    }
}
