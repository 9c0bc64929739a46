//! Document renderer: `Doc` → `VisualTree`
//!
//! A single recursive descent over the document:
//!
//! ```text
//! Doc ─► Section ─► Subsection ─┬─► ContentBlock ─► leaf elements
//!                               ├─► Subsection (nested, any depth)
//!                               └─► Column ─► cell ─► Subsection
//! ```
//!
//! # Design
//!
//! - Pure: the document is only borrowed, every call builds a fresh tree
//! - The inherited text color flows strictly downward as a `Copy` value
//! - Unknown content blocks render as nothing; siblings are unaffected
//! - Nesting deeper than [`RenderConfig::max_depth`] fails the whole render

mod content;
pub mod html;
mod section;
mod subsection;

pub use html::{DEFAULT_ID_ATTR, HtmlConfig, render_page, to_html};

use crate::error::{DocError, DocResult};
use crate::id::{DocSeed, NodePath, StableId};
use crate::node::{Element, ElementKind, VisualTree};
use crate::schema::Doc;

// =============================================================================
// RenderConfig
// =============================================================================

/// Default limit on subsection nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration for building the visual tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Attach path-derived stable ids to section and subsection containers
    pub emit_ids: bool,
    /// Maximum subsection nesting below a section
    pub max_depth: usize,
    /// Use the requested list marker instead of always numbering items
    pub honor_list_style: bool,
}

impl RenderConfig {
    /// Preview config (no ids, numbered lists)
    pub const PREVIEW: Self = Self {
        emit_ids: false,
        max_depth: DEFAULT_MAX_DEPTH,
        honor_list_style: false,
    };

    /// Editor config: ids on, so clicks can be mapped back to schema nodes
    pub fn for_editor() -> Self {
        Self {
            emit_ids: true,
            ..Self::PREVIEW
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_list_style(mut self, honor: bool) -> Self {
        self.honor_list_style = honor;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::PREVIEW
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Render a document with the default config.
pub fn render(doc: &Doc) -> DocResult<VisualTree> {
    render_with_config(doc, &RenderConfig::default())
}

/// Render a document.
///
/// # Errors
///
/// Returns [`DocError::DepthExceeded`] when subsections nest deeper than
/// `config.max_depth`. No other input makes rendering fail.
pub fn render_with_config(doc: &Doc, config: &RenderConfig) -> DocResult<VisualTree> {
    let renderer = Renderer::new(doc, config);
    let mut root = Element::of_kind("div", ElementKind::Document);
    for (i, section) in doc.sections.iter().enumerate() {
        root.push(renderer.render_section(section, NodePath::root().child(i))?);
    }
    let tree = VisualTree::new(root);
    log::debug!(
        "rendered {:?}: {} sections, {} elements",
        doc.document_title,
        doc.sections.len(),
        tree.element_count()
    );
    Ok(tree)
}

/// Render independent documents.
///
/// Results are index-aligned with `docs`; one failing document does not
/// affect the others. With the `parallel` feature the documents are
/// rendered on the rayon thread pool.
pub fn render_batch(docs: &[Doc], config: &RenderConfig) -> Vec<DocResult<VisualTree>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        docs.par_iter()
            .map(|doc| render_with_config(doc, config))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        docs.iter()
            .map(|doc| render_with_config(doc, config))
            .collect()
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Defaults a node receives from its ancestors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Inherited<'a> {
    /// Nearest ancestor section's explicit text color
    pub text_color: Option<&'a str>,
}

/// Per-render state; read-only during the traversal.
pub(crate) struct Renderer<'c> {
    config: &'c RenderConfig,
    seed: DocSeed,
}

impl<'c> Renderer<'c> {
    fn new(doc: &Doc, config: &'c RenderConfig) -> Self {
        Self {
            config,
            seed: DocSeed::from_title(&doc.document_title),
        }
    }

    fn id_for(&self, path: &NodePath) -> Option<StableId> {
        self.config
            .emit_ids
            .then(|| StableId::for_path(self.seed, path))
    }

    /// Fail once a subsection path nests deeper than allowed.
    ///
    /// The first path index is the section, so depth counts subsections only.
    fn check_depth(&self, path: &NodePath) -> DocResult<()> {
        let depth = path.depth().saturating_sub(1);
        if depth > self.config.max_depth {
            return Err(DocError::DepthExceeded {
                limit: self.config.max_depth,
                path: path.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Column, Section, Spacer, Subsection, Text};

    fn nested(depth: usize) -> Subsection {
        let mut sub = Subsection::block("normal", "leaf", Text::new("deep"));
        for _ in 1..depth {
            sub = Subsection::Column(Column::new([sub]));
        }
        sub
    }

    #[test]
    fn test_empty_document() {
        let tree = render(&Doc::new("Empty")).unwrap();
        assert_eq!(tree.root.kind, ElementKind::Document);
        assert_eq!(tree.root.tag, "div");
        assert!(tree.root.is_empty());
    }

    #[test]
    fn test_depth_limit_is_hard_failure() {
        let doc = Doc::new("Deep").with_section(Section::new("S").with_subsection(nested(6)));

        assert!(render_with_config(&doc, &RenderConfig::default().with_max_depth(6)).is_ok());

        let err = render_with_config(&doc, &RenderConfig::default().with_max_depth(5)).unwrap_err();
        match err {
            DocError::DepthExceeded { limit, path } => {
                assert_eq!(limit, 5);
                assert_eq!(path, "0/0/0/0/0/0/0");
            }
            other => panic!("Expected DepthExceeded, got {:?}", other),
        }
    }

    #[test]
    fn test_ids_only_when_enabled() {
        let doc = Doc::new("Ids").with_section(
            Section::new("S").with_subsection(Subsection::block("spacer", "Gap", Spacer::new(1.0))),
        );

        let plain = render(&doc).unwrap();
        assert!(plain.elements().all(|e| e.id.is_none()));

        let with_ids = render_with_config(&doc, &RenderConfig::for_editor()).unwrap();
        let section = with_ids.find_kind(ElementKind::Section)[0];
        let sub = with_ids.find_kind(ElementKind::Subsection)[0];
        let seed = DocSeed::from_title("Ids");
        assert_eq!(section.id, Some(StableId::for_path(seed, &NodePath::root().child(0))));
        assert_eq!(
            sub.id,
            Some(StableId::for_path(seed, &NodePath::root().child(0).child(0)))
        );
    }

    #[test]
    fn test_batch_preserves_order_and_isolates_failures() {
        let ok = Doc::new("A").with_section(Section::new("first"));
        let deep = Doc::new("B").with_section(Section::new("S").with_subsection(nested(4)));
        let also_ok = Doc::new("C").with_section(Section::new("third"));
        let config = RenderConfig::default().with_max_depth(2);

        let results = render_batch(&[ok, deep, also_ok], &config);
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_ref().unwrap().find_kind(ElementKind::Title)[0].text_content(),
            "first"
        );
        assert!(matches!(results[1], Err(DocError::DepthExceeded { .. })));
        assert_eq!(
            results[2].as_ref().unwrap().find_kind(ElementKind::Title)[0].text_content(),
            "third"
        );
    }
}
