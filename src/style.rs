//! Inline style declarations
//!
//! Every visual element carries a [`Style`]: an ordered list of CSS
//! declarations, serialized as `prop: value; prop: value` into the element's
//! `style` attribute. Absent values are simply not declared.

use std::fmt;

// =============================================================================
// Styling contract
// =============================================================================

/// Section container padding
pub const SECTION_PADDING: &str = "20px";
/// Section container border
pub const SECTION_BORDER: &str = "2px solid black";
/// Section text color when the section sets none
pub const SECTION_COLOR_FALLBACK: &str = "inherit";
/// Vertical margin around every subsection container
pub const SUBSECTION_MARGIN: &str = "1rem 0";
/// Gap between side-by-side column cells
pub const COLUMN_ROW_GAP: &str = "1rem";
/// Gap between flowed text columns
pub const TEXT_COLUMN_GAP: &str = "2rem";
/// First-line indent of paragraph entries
pub const PARAGRAPH_INDENT: &str = "2em";
/// List left padding
pub const LIST_PADDING_LEFT: &str = "1.5rem";
/// Spacer height per line, in em
pub const SPACER_LINE_HEIGHT: f64 = 1.5;
/// Divider thickness when unspecified
pub const DIVIDER_THICKNESS: &str = "2px";
/// Divider color when neither the divider nor an ancestor sets one
pub const DIVIDER_COLOR: &str = "#000";

/// Vertical extent of a spacer, in em
#[inline]
pub fn spacer_height(lines: f64) -> f64 {
    lines * SPACER_LINE_HEIGHT
}

// =============================================================================
// Style
// =============================================================================

/// Ordered CSS declarations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    decls: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `prop`, replacing an earlier declaration in place
    #[must_use]
    pub fn set(mut self, prop: &'static str, value: impl Into<String>) -> Self {
        self.insert(prop, value);
        self
    }

    /// Declare `prop` only when a value is present
    #[must_use]
    pub fn set_opt<V: Into<String>>(mut self, prop: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(prop, value);
        }
        self
    }

    pub fn insert(&mut self, prop: &'static str, value: impl Into<String>) {
        let value = value.into();
        if let Some(decl) = self.decls.iter_mut().find(|(p, _)| *p == prop) {
            decl.1 = value;
        } else {
            self.decls.push((prop, value));
        }
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, prop: &str) -> bool {
        self.get(prop).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.decls.iter().map(|(p, v)| (*p, v.as_str()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (prop, value)) in self.decls.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{prop}: {value}")?;
        }
        Ok(())
    }
}

/// Format a length in percent, e.g. `60%` or `33.333333333333336%`
pub fn percent(value: f64) -> String {
    format!("{value}%")
}

/// Format a length in em, e.g. `4.5em`
pub fn em(value: f64) -> String {
    format!("{value}em")
}

/// Format a length in pixels, e.g. `100px`
pub fn px(value: u32) -> String {
    format!("{value}px")
}

/// Parse a `NN%` length back into a number
pub fn parse_percent(value: &str) -> Option<f64> {
    value.strip_suffix('%')?.trim().parse().ok()
}

/// Parse a `NNem` length back into a number
pub fn parse_em(value: &str) -> Option<f64> {
    value.strip_suffix("em")?.trim().parse().ok()
}
