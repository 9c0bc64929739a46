//! docedit - typed document templates rendered to a styled visual tree
//!
//! ## Core Concepts
//!
//! **Schema**: a [`Doc`] holds [`Section`]s, which hold [`Subsection`]s
//! nesting to any depth, which hold [`ContentBlock`]s (text, paragraphs,
//! lists, images, dividers, spacers). Templates are plain data, written in
//! Rust or loaded from JSON.
//!
//! **Rendering**: [`render`] walks the document once and produces a
//! [`VisualTree`] of styled elements. Section text colors flow down to every
//! block that does not set its own; columns size their cells from explicit
//! percentages or by equal division.
//!
//! ## Modules
//! - `schema`: Document, Section, Subsection, Column, ContentBlock
//! - `render`: the renderer and the HTML serializer
//! - `node`: Element/Text/VisualTree output types
//! - `style`: inline style declarations and the fixed styling values
//! - `templates`: built-in templates and the template registry
//! - `id`: path-derived stable node ids
//!
//! ## Usage
//!
//! ```
//! use docedit::{render, templates};
//! use docedit::render::{HtmlConfig, to_html};
//!
//! let tree = render(&templates::cover_page()).unwrap();
//! let html = to_html(&tree, &HtmlConfig::default());
//! assert!(html.starts_with("<div><section"));
//! ```

/// Document schema: Doc, Section, Subsection, ContentBlock
pub mod schema;

/// Visual tree node types: VisualTree, Element, Node, Text
pub mod node;

/// Renderer and HTML serialization
pub mod render;

/// Inline style declarations
pub mod style;

/// Attribute helpers
pub mod attr;

/// Built-in templates and registry
pub mod templates;

/// Stable identity for rendered nodes
pub mod id;

/// Deterministic hashing
pub mod hash;

/// Error types
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use schema::{
    Alignment, Block, BulletList, Column, ContentBlock, Divider, Doc, Image, ListStyle, Paragraph,
    Section, Spacer, Subsection, Text,
};

pub use node::{Element, ElementKind, Node, VisualTree};

pub use render::{
    HtmlConfig, RenderConfig, render, render_batch, render_page, render_with_config, to_html,
};

pub use style::Style;

pub use templates::TemplateRegistry;

pub use id::{DocSeed, NodePath, StableId};

pub use error::{DocError, DocResult};

// =============================================================================
// Tests
// =============================================================================
