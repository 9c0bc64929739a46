//! Text node type

/// Text content node, escaped when serialized
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    pub content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Check if text is only whitespace
    pub fn is_whitespace(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_node() {
        let text = Text::new("  Main Title Placeholder  ");
        assert!(!text.is_empty());
        assert!(!text.is_whitespace());
        assert!(Text::new(" \n").is_whitespace());
    }
}
