//! VisualTree - the root of a rendered document, with query APIs

use super::{Element, ElementKind, Node};

// =============================================================================
// VisualTree
// =============================================================================

/// A rendered document
#[derive(Debug, Clone, PartialEq)]
pub struct VisualTree {
    /// Root wrapper element (kind `Document`)
    pub root: Element,
}

impl VisualTree {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query API
    // ─────────────────────────────────────────────────────────────────────────

    /// Find first element matching predicate (depth-first, document order)
    pub fn find<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.elements().find(|e| predicate(e))
    }

    /// Find all elements matching predicate, in document order
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.elements().filter(|e| predicate(e)).collect()
    }

    /// All elements of one kind, in document order
    pub fn find_kind(&self, kind: ElementKind) -> Vec<&Element> {
        self.find_all(|e| e.kind == kind)
    }

    /// Check if any element matches predicate
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Element) -> bool,
    {
        self.elements().any(|e| predicate(e))
    }

    /// Depth-first iterator over all elements, root included
    pub fn elements(&self) -> ElementIterator<'_> {
        ElementIterator::new(&self.root)
    }

    /// Total number of elements, root included
    pub fn element_count(&self) -> usize {
        self.elements().count()
    }

    /// Collect counts by kind
    pub fn stats(&self) -> Stats {
        let mut stats = Stats::default();
        Self::collect_stats(&self.root, &mut stats);
        stats
    }

    fn collect_stats(elem: &Element, stats: &mut Stats) {
        stats.element_count += 1;

        match elem.kind {
            ElementKind::Section => stats.section_count += 1,
            ElementKind::ColumnGroup => stats.column_group_count += 1,
            ElementKind::Paragraph => stats.paragraph_count += 1,
            ElementKind::ListItem => stats.list_item_count += 1,
            ElementKind::Figure => stats.figure_count += 1,
            ElementKind::Divider => stats.divider_count += 1,
            ElementKind::Spacer => stats.spacer_count += 1,
            _ => {}
        }

        for child in &elem.children {
            match child {
                Node::Element(e) => Self::collect_stats(e, stats),
                Node::Text(_) => stats.text_count += 1,
            }
        }
    }
}

// =============================================================================
// ElementIterator - depth-first element traversal
// =============================================================================

/// Depth-first pre-order iterator over elements
pub struct ElementIterator<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> ElementIterator<'a> {
    fn new(root: &'a Element) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for ElementIterator<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.stack.pop()?;
        // reversed so children come out left-to-right
        for child in elem.children.iter().rev() {
            if let Some(child_elem) = child.as_element() {
                self.stack.push(child_elem);
            }
        }
        Some(elem)
    }
}

// =============================================================================
// Stats
// =============================================================================

/// Element counts collected from traversal
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    pub section_count: usize,
    pub column_group_count: usize,
    pub paragraph_count: usize,
    pub list_item_count: usize,
    pub figure_count: usize,
    pub divider_count: usize,
    pub spacer_count: usize,
    pub text_count: usize,
    pub element_count: usize,
}

impl Stats {
    /// Content elements (paragraphs, list items, figures, dividers, spacers)
    pub fn content_count(&self) -> usize {
        self.paragraph_count
            + self.list_item_count
            + self.figure_count
            + self.divider_count
            + self.spacer_count
    }
}
