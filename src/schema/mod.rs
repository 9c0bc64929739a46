//! Document schema
//!
//! A [`Doc`] is an ordered list of [`Section`]s; each section holds
//! [`Subsection`]s which nest to arbitrary depth and bottom out in
//! [`ContentBlock`]s. The whole tree is plain owned data: the renderer only
//! borrows it.
//!
//! Templates can be authored in Rust or loaded from JSON using the
//! camelCase field names (`documentTitle`, `backgroundColor`, ...).

mod content;
mod subsection;

pub use content::{
    Alignment, BulletList, ContentBlock, Divider, Fonts, Image, ListStyle, Paragraph, Spacer, Text,
};
pub use subsection::{Block, Column, Subsection, COLUMN_TYPE};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DocError, DocResult};

// =============================================================================
// Doc
// =============================================================================

/// Root of a document template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doc {
    pub document_title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Doc {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            document_title: title.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Parse a document from JSON text
    pub fn from_json_str(json: &str) -> DocResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON document file
    pub fn from_json_file(path: impl AsRef<Path>) -> DocResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DocError::io(path, e))?;
        Self::from_json_str(&content)
    }

    pub fn to_json(&self) -> DocResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> DocResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deepest subsection nesting across all sections
    pub fn max_depth(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| s.subsections.iter())
            .map(Subsection::depth)
            .max()
            .unwrap_or(0)
    }
}

// =============================================================================
// Section
// =============================================================================

/// A visually styled group of subsections.
///
/// `color` is inherited as the default text color by every descendant
/// block that does not set its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub subsections: Vec<Subsection>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_subsection(mut self, subsection: impl Into<Subsection>) -> Self {
        self.subsections.push(subsection.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_doc_from_json() {
        let json = r#"{
            "documentTitle": "Minimal",
            "author": "A. Writer",
            "date": "2025-06-09",
            "sections": [{
                "title": "Intro",
                "backgroundColor": "navy",
                "color": "white",
                "subsections": [
                    {"type": "text", "title": "Hello", "content": {"type": "text", "text": "Hi"}}
                ]
            }]
        }"#;
        let doc = Doc::from_json_str(json).unwrap();
        assert_eq!(doc.document_title, "Minimal");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].background_color.as_deref(), Some("navy"));
        assert_eq!(doc.sections[0].subsections[0].title(), "Hello");
    }

    #[test]
    fn test_doc_json_rejects_wrong_shape() {
        let err = Doc::from_json_str(r#"{"documentTitle": 3}"#).unwrap_err();
        assert!(matches!(err, DocError::Json(_)));
    }

    #[test]
    fn test_doc_json_file_missing() {
        let err = Doc::from_json_file("/nonexistent/template.json").unwrap_err();
        assert!(matches!(err, DocError::Io { .. }));
    }

    #[test]
    fn test_builder_and_json_agree() {
        let doc = Doc::new("Built").with_section(
            Section::new("Only").with_subsection(Subsection::block("spacer", "Gap", Spacer::new(2.0))),
        );
        let back = Doc::from_json_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(back, doc);
        assert_eq!(doc.max_depth(), 1);
    }
}
