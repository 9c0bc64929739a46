//! HTML serialization: VisualTree → HTML string
//!
//! # Design
//!
//! - Simple recursive traversal writing into one `String` buffer
//! - Text escapes `& < >`, attribute values additionally escape `"`
//! - Void elements (`hr`, `img`, ...) are never closed
//! - The structured [`Style`](crate::style::Style) becomes the `style` attribute
//! - Element ids become `data-doc-id` (or a custom attribute name)
//!
//! Pretty mode puts every element on its own line; elements holding only
//! text stay on one line so no whitespace leaks into text content.

use crate::error::DocResult;
use crate::node::{Element, Node, VisualTree};
use crate::schema::Doc;

use super::{RenderConfig, render_with_config};

// =============================================================================
// HtmlConfig
// =============================================================================

/// Default attribute name for stable ids.
pub const DEFAULT_ID_ATTR: &str = "data-doc-id";

/// Configuration for HTML serialization.
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Whether to omit newlines and indentation
    pub minify: bool,
    /// Indent string (only used when not minifying)
    pub indent: &'static str,
    /// Attribute name for stable ids (default: "data-doc-id").
    pub id_attr_name: String,
}

impl HtmlConfig {
    /// Single-line output
    pub fn minified() -> Self {
        Self {
            minify: true,
            indent: "  ",
            id_attr_name: DEFAULT_ID_ATTR.to_string(),
        }
    }

    /// One element per line, two-space indent
    pub fn pretty() -> Self {
        Self {
            minify: false,
            ..Self::minified()
        }
    }

    /// Set custom attribute name for stable ids.
    pub fn with_id_attr(mut self, attr_name: impl Into<String>) -> Self {
        self.id_attr_name = attr_name.into();
        self
    }

    pub fn id_attr(&self) -> &str {
        if self.id_attr_name.is_empty() {
            DEFAULT_ID_ATTR
        } else {
            &self.id_attr_name
        }
    }
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self::minified()
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Serialize a visual tree.
pub fn to_html(tree: &VisualTree, config: &HtmlConfig) -> String {
    let mut writer = HtmlWriter::new(config);
    writer.write_element(&tree.root);
    writer.finish()
}

/// Render a document into a standalone HTML page.
///
/// The page title comes from the document title; author and date become
/// `<meta>` tags when set.
pub fn render_page(doc: &Doc, render: &RenderConfig, html: &HtmlConfig) -> DocResult<String> {
    let tree = render_with_config(doc, render)?;

    let mut head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(Element::new("title").text(doc.document_title.as_str()));
    if !doc.author.is_empty() {
        head.push(
            Element::new("meta")
                .attr("name", "author")
                .attr("content", doc.author.as_str()),
        );
    }
    if !doc.date.is_empty() {
        head.push(
            Element::new("meta")
                .attr("name", "date")
                .attr("content", doc.date.as_str()),
        );
    }

    let page = Element::new("html")
        .attr("lang", "en")
        .child(head)
        .child(Element::new("body").child(tree.root));

    let mut writer = HtmlWriter::new(html);
    writer.write_str("<!DOCTYPE html>");
    writer.write_newline();
    writer.write_element(&page);
    Ok(writer.finish())
}

// =============================================================================
// HtmlWriter
// =============================================================================

struct HtmlWriter<'c> {
    config: &'c HtmlConfig,
    buffer: String,
    /// Current indentation level (only used when not minifying)
    indent_level: usize,
}

impl<'c> HtmlWriter<'c> {
    fn new(config: &'c HtmlConfig) -> Self {
        Self {
            config,
            buffer: String::with_capacity(16 * 1024),
            indent_level: 0,
        }
    }

    fn finish(self) -> String {
        self.buffer
    }

    #[inline]
    fn pretty(&self) -> bool {
        !self.config.minify
    }

    /// Element in block position: own line in pretty mode
    fn write_element(&mut self, elem: &Element) {
        self.write_indent();
        self.write_open_tag(elem);
        if is_void_element(&elem.tag) {
            self.write_newline();
            return;
        }

        let block = self.pretty() && elem.children.iter().any(Node::is_element);
        if block {
            self.write_newline();
            self.indent_level += 1;
            for child in &elem.children {
                match child {
                    Node::Element(e) => self.write_element(e),
                    Node::Text(t) => {
                        self.write_indent();
                        self.write_text_escaped(&t.content);
                        self.write_newline();
                    }
                }
            }
            self.indent_level -= 1;
            self.write_indent();
        } else {
            for child in &elem.children {
                self.write_node_inline(child);
            }
        }

        self.write_close_tag(elem);
        self.write_newline();
    }

    /// Node in inline position: no added whitespace
    fn write_node_inline(&mut self, node: &Node) {
        match node {
            Node::Element(elem) => {
                self.write_open_tag(elem);
                if is_void_element(&elem.tag) {
                    return;
                }
                for child in &elem.children {
                    self.write_node_inline(child);
                }
                self.write_close_tag(elem);
            }
            Node::Text(text) => self.write_text_escaped(&text.content),
        }
    }

    fn write_open_tag(&mut self, elem: &Element) {
        self.buffer.push('<');
        self.buffer.push_str(&elem.tag);

        if let Some(id) = elem.id {
            self.buffer.push(' ');
            self.buffer.push_str(self.config.id_attr());
            self.buffer.push_str("=\"");
            self.buffer.push_str(&id.to_attr_value());
            self.buffer.push('"');
        }

        for (name, value) in &elem.attrs {
            self.buffer.push(' ');
            self.buffer.push_str(name);
            self.buffer.push_str("=\"");
            self.write_attr_escaped(value);
            self.buffer.push('"');
        }

        if !elem.style.is_empty() {
            self.buffer.push_str(" style=\"");
            let style = elem.style.to_string();
            self.write_attr_escaped(&style);
            self.buffer.push('"');
        }

        self.buffer.push('>');
    }

    fn write_close_tag(&mut self, elem: &Element) {
        self.buffer.push_str("</");
        self.buffer.push_str(&elem.tag);
        self.buffer.push('>');
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Buffer operations
    // ─────────────────────────────────────────────────────────────────────────

    #[inline]
    fn write_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    fn write_indent(&mut self) {
        if self.pretty() {
            for _ in 0..self.indent_level {
                self.buffer.push_str(self.config.indent);
            }
        }
    }

    fn write_newline(&mut self) {
        if self.pretty() {
            self.buffer.push('\n');
        }
    }

    fn write_attr_escaped(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '&' => self.buffer.push_str("&amp;"),
                '"' => self.buffer.push_str("&quot;"),
                '<' => self.buffer.push_str("&lt;"),
                '>' => self.buffer.push_str("&gt;"),
                _ => self.buffer.push(c),
            }
        }
    }

    fn write_text_escaped(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '&' => self.buffer.push_str("&amp;"),
                '<' => self.buffer.push_str("&lt;"),
                '>' => self.buffer.push_str("&gt;"),
                _ => self.buffer.push(c),
            }
        }
    }
}

/// Check if tag is a void element (no closing tag)
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img"
            | "input" | "link" | "meta" | "param" | "source" | "track" | "wbr"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::StableId;
    use crate::node::ElementKind;
    use crate::schema::{Section, Spacer, Subsection};
    use crate::style::Style;
    use pretty_assertions::assert_eq;

    fn tree(root: Element) -> VisualTree {
        VisualTree::new(root)
    }

    #[test]
    fn test_simple_element() {
        let html = to_html(&tree(Element::new("div").text("Hello")), &HtmlConfig::default());
        assert_eq!(html, "<div>Hello</div>");
    }

    #[test]
    fn test_void_element() {
        let root = Element::new("div")
            .child(Element::new("hr").with_style(Style::new().set("border", "none")));
        let html = to_html(&tree(root), &HtmlConfig::default());
        assert_eq!(html, r#"<div><hr style="border: none"></div>"#);
    }

    #[test]
    fn test_attribute_escaping() {
        let root = Element::new("img")
            .attr("src", "img?a=1&b=2")
            .attr("alt", r#"say "hi""#);
        let html = to_html(&tree(root), &HtmlConfig::default());
        assert_eq!(
            html,
            r#"<img src="img?a=1&amp;b=2" alt="say &quot;hi&quot;">"#
        );
    }

    #[test]
    fn test_text_escaping() {
        let html = to_html(
            &tree(Element::new("p").text("1 < 2 && 3 > 2")),
            &HtmlConfig::default(),
        );
        assert_eq!(html, "<p>1 &lt; 2 &amp;&amp; 3 &gt; 2</p>");
    }

    #[test]
    fn test_style_attribute_escaped() {
        let root = Element::new("p")
            .with_style(Style::new().set("font-family", r#""Times New Roman", serif"#));
        let html = to_html(&tree(root), &HtmlConfig::default());
        assert_eq!(
            html,
            r#"<p style="font-family: &quot;Times New Roman&quot;, serif"></p>"#
        );
    }

    #[test]
    fn test_id_attribute() {
        let root = Element::of_kind("section", ElementKind::Section)
            .with_id(Some(StableId::from_raw(0x7b)));

        let html = to_html(&tree(root.clone()), &HtmlConfig::default());
        assert_eq!(html, r#"<section data-doc-id="7b"></section>"#);

        let html = to_html(&tree(root), &HtmlConfig::default().with_id_attr("data-node"));
        assert_eq!(html, r#"<section data-node="7b"></section>"#);
    }

    #[test]
    fn test_pretty_output() {
        let root = Element::new("div")
            .child(Element::new("p").text("Hello"))
            .child(Element::new("hr"))
            .text("tail");
        let html = to_html(&tree(root), &HtmlConfig::pretty());
        assert_eq!(html, "<div>\n  <p>Hello</p>\n  <hr>\n  tail\n</div>\n");
    }

    #[test]
    fn test_render_page() {
        let doc = Doc {
            author: "Jane Doe".into(),
            date: "2025-06-09".into(),
            ..Doc::new("A & B")
        }
        .with_section(
            Section::new("Only").with_subsection(Subsection::block("spacer", "Gap", Spacer::new(2.0))),
        );

        let html = render_page(&doc, &RenderConfig::default(), &HtmlConfig::default()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains(r#"<meta name="author" content="Jane Doe">"#));
        assert!(html.contains(r#"<meta name="date" content="2025-06-09">"#));
        assert!(html.contains(r#"<div style="margin-top: 3em"></div>"#));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn test_render_page_skips_empty_meta() {
        let html = render_page(&Doc::new("Bare"), &RenderConfig::default(), &HtmlConfig::pretty())
            .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">\n"));
        assert!(!html.contains("name=\"author\""));
        assert!(html.contains("    <title>Bare</title>\n"));
    }
}
