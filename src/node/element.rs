//! Element type - styled elements of the visual tree

use compact_str::CompactString;

use crate::attr::{Attrs, AttrsExt};
use crate::id::StableId;
use crate::style::Style;

use super::{Children, ElementKind, Node, Text};

// =============================================================================
// Element
// =============================================================================

/// Element with attributes, inline style and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// HTML tag name
    pub tag: CompactString,
    /// Schema node this element stands for
    pub kind: ElementKind,
    /// Path-derived id, set when the renderer emits ids
    pub id: Option<StableId>,
    /// Attributes other than `style`
    pub attrs: Attrs,
    /// Inline style declarations
    pub style: Style,
    /// Child nodes
    pub children: Children,
}

impl Element {
    /// Create an element with no schema meaning
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self::of_kind(tag, ElementKind::Other)
    }

    pub fn of_kind(tag: impl Into<CompactString>, kind: ElementKind) -> Self {
        Self {
            tag: tag.into(),
            kind,
            id: None,
            attrs: Vec::new(),
            style: Style::default(),
            children: Children::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builders
    // ─────────────────────────────────────────────────────────────────────────

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set_attr(name, value);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: Option<StableId>) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    #[must_use]
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.children.push(Node::Text(Text::new(content)));
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn extend<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = Element>,
    {
        self.children.extend(nodes.into_iter().map(Node::from));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Access
    // ─────────────────────────────────────────────────────────────────────────

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Inline style value for `prop`
    pub fn css(&self, prop: &str) -> Option<&str> {
        self.style.get(prop)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Iterate over direct child elements
    pub fn children_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| n.as_element())
    }

    /// Direct child elements of one kind, in order
    pub fn children_of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &Element> {
        self.children_elements().filter(move |e| e.kind == kind)
    }

    pub fn first_child(&self) -> Option<&Element> {
        self.children_elements().next()
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => buf.push_str(&t.content),
                Node::Element(e) => e.collect_text(buf),
            }
        }
    }
}
