//! Subsections: the recursive structural nodes of a document.
//!
//! In JSON every subsection carries a free-form `type` string. Only
//! `"column"` changes the shape; every other value is a plain [`Block`].

use serde::{Deserialize, Serialize};

use super::content::ContentBlock;

/// `type` tag that selects the [`Column`] layout.
pub const COLUMN_TYPE: &str = "column";

// =============================================================================
// Subsection
// =============================================================================

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSubsection", into = "RawSubsection")]
pub enum Subsection {
    /// Content block, nested subsections, or both
    Block(Block),
    /// Children laid out side by side
    Column(Column),
}

impl Subsection {
    /// Plain subsection holding a single content block
    pub fn block(
        kind: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<ContentBlock>,
    ) -> Self {
        Self::Block(Block {
            kind: kind.into(),
            title: title.into(),
            content: Some(content.into()),
            ..Default::default()
        })
    }

    pub fn title(&self) -> &str {
        match self {
            Subsection::Block(block) => &block.title,
            Subsection::Column(column) => &column.title,
        }
    }

    /// Nested subsections, in order
    pub fn children(&self) -> &[Subsection] {
        match self {
            Subsection::Block(block) => &block.subsections,
            Subsection::Column(column) => &column.subsections,
        }
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Subsection::Column(_))
    }

    /// Deepest nesting below and including this node
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Subsection::depth).max().unwrap_or(0)
    }
}

impl From<Block> for Subsection {
    fn from(value: Block) -> Self {
        Self::Block(value)
    }
}

impl From<Column> for Subsection {
    fn from(value: Column) -> Self {
        Self::Column(value)
    }
}

/// A plain subsection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    /// The producer's `type` string; has no rendering effect
    pub kind: String,
    pub title: String,
    pub content: Option<ContentBlock>,
    pub subsections: Vec<Subsection>,
    /// CSS width of the container, `auto` when absent
    pub width: Option<String>,
}

/// Side-by-side layout of child subsections.
///
/// Child `i` is `column_percentage[i]` percent wide when that entry exists
/// and is non-zero; otherwise every child gets `100 / max(columns, len)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Column {
    pub title: String,
    pub width: Option<String>,
    pub columns: u32,
    pub column_percentage: Vec<f64>,
    pub subsections: Vec<Subsection>,
}

impl Column {
    pub fn new<I>(subsections: I) -> Self
    where
        I: IntoIterator<Item = Subsection>,
    {
        Self {
            subsections: subsections.into_iter().collect(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_percentages(mut self, percentages: impl Into<Vec<f64>>) -> Self {
        self.column_percentage = percentages.into();
        self
    }

    /// Width in percent of the child at `index`.
    pub fn child_width(&self, index: usize) -> f64 {
        match self.column_percentage.get(index) {
            Some(&pct) if pct != 0.0 => pct,
            _ => {
                let divisor = (self.columns as usize).max(self.subsections.len()).max(1);
                100.0 / divisor as f64
            }
        }
    }
}

// =============================================================================
// JSON bridge
// =============================================================================

/// Flat wire shape shared by both subsection variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSubsection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<ContentBlock>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    subsections: Vec<Subsection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    column_percentage: Vec<f64>,
}

impl From<RawSubsection> for Subsection {
    fn from(raw: RawSubsection) -> Self {
        if raw.kind == COLUMN_TYPE {
            Subsection::Column(Column {
                title: raw.title,
                width: raw.width,
                columns: raw.columns.unwrap_or(0),
                column_percentage: raw.column_percentage,
                subsections: raw.subsections,
            })
        } else {
            Subsection::Block(Block {
                kind: raw.kind,
                title: raw.title,
                content: raw.content,
                subsections: raw.subsections,
                width: raw.width,
            })
        }
    }
}

impl From<Subsection> for RawSubsection {
    fn from(sub: Subsection) -> Self {
        match sub {
            Subsection::Block(block) => RawSubsection {
                kind: block.kind,
                title: block.title,
                content: block.content,
                subsections: block.subsections,
                width: block.width,
                columns: None,
                column_percentage: Vec::new(),
            },
            Subsection::Column(column) => RawSubsection {
                kind: COLUMN_TYPE.to_string(),
                title: column.title,
                content: None,
                subsections: column.subsections,
                width: column.width,
                columns: (column.columns > 0).then_some(column.columns),
                column_percentage: column.column_percentage,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::content::{Spacer, Text};
    use pretty_assertions::assert_eq;

    fn leaf(title: &str) -> Subsection {
        Subsection::block("normal", title, Text::new(title))
    }

    #[test]
    fn test_child_width_uses_percentages() {
        let column = Column::new([leaf("left"), leaf("right")]).with_percentages([60.0, 40.0]);
        assert_eq!(column.child_width(0), 60.0);
        assert_eq!(column.child_width(1), 40.0);
    }

    #[test]
    fn test_child_width_equal_division() {
        let column = Column::new([leaf("a"), leaf("b"), leaf("c")]);
        assert_eq!(column.child_width(1), 100.0 / 3.0);

        // declared count larger than children
        let column = Column {
            columns: 4,
            ..Column::new([leaf("a"), leaf("b")])
        };
        assert_eq!(column.child_width(0), 25.0);
    }

    #[test]
    fn test_child_width_partial_percentages() {
        let column = Column::new([leaf("a"), leaf("b")]).with_percentages([70.0]);
        assert_eq!(column.child_width(0), 70.0);
        assert_eq!(column.child_width(1), 50.0);

        let column = Column::new([leaf("a"), leaf("b")]).with_percentages([0.0, 30.0]);
        assert_eq!(column.child_width(0), 50.0);
        assert_eq!(column.child_width(1), 30.0);
    }

    #[test]
    fn test_deserialize_column_by_type() {
        let json = r#"{
            "type": "column",
            "title": "Two Columns",
            "columnPercentage": [60, 40],
            "subsections": [
                {"type": "paragraph", "title": "Left", "content": {"type": "spacer", "lines": 1}},
                {"type": "normal", "title": "Right"}
            ]
        }"#;
        let sub: Subsection = serde_json::from_str(json).unwrap();
        let Subsection::Column(column) = &sub else {
            panic!("Expected Column, got {:?}", sub);
        };
        assert_eq!(column.title, "Two Columns");
        assert_eq!(column.columns, 0);
        assert_eq!(column.column_percentage, vec![60.0, 40.0]);
        assert_eq!(column.subsections.len(), 2);

        let Subsection::Block(left) = &column.subsections[0] else {
            panic!("Expected Block");
        };
        assert_eq!(left.kind, "paragraph");
        assert_eq!(left.content, Some(ContentBlock::Spacer(Spacer::new(1.0))));
    }

    #[test]
    fn test_serialize_keeps_type_tags() {
        let column = Subsection::Column(Column {
            title: "Cols".into(),
            columns: 2,
            ..Column::new([leaf("a")])
        });
        let json = serde_json::to_value(&column).unwrap();
        assert_eq!(json["type"], "column");
        assert_eq!(json["columns"], 2);
        assert_eq!(json["subsections"][0]["type"], "normal");
        assert!(json.get("content").is_none());
    }

    #[test]
    fn test_depth() {
        let nested = Subsection::Column(Column::new([Subsection::Column(Column::new([leaf("x")]))]));
        assert_eq!(nested.depth(), 3);
        assert_eq!(leaf("x").depth(), 1);
    }
}
