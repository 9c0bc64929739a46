//! Path-based stable node identity
//!
//! Every rendered element that stands for a schema node can carry an id
//! derived from the document title and the node's index path:
//!
//! - **Section**: `[section]`
//! - **Subsection**: `[section, sub, nested, ...]`
//!
//! A host that receives a click on a rendered element can map the id back
//! to the schema node without keeping pointers into the document.

use std::fmt;

use smallvec::SmallVec;

use crate::hash::StableHasher;

// =============================================================================
// DocSeed
// =============================================================================

/// Document-specific seed so ids are unique across documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DocSeed(pub u64);

impl DocSeed {
    /// Derive a seed from a document title
    pub fn from_title(title: &str) -> Self {
        Self(StableHasher::new().update_str("__doc__").update_str(title).finish())
    }

    /// Zero seed (single-document or test scenarios)
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

// =============================================================================
// NodePath
// =============================================================================

/// Index path from the document root to a schema node.
///
/// Paths are short in practice, so they live inline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(SmallVec<[u32; 8]>);

impl NodePath {
    /// Empty path (the document itself)
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    /// Path of the `index`-th child of this node
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut next = self.0.clone();
        next.push(index as u32);
        Self(next)
    }

    /// Number of steps from the root
    #[inline]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn indices(&self) -> &[u32] {
        &self.0
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for (i, idx) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{idx}")?;
        }
        Ok(())
    }
}

// =============================================================================
// StableId
// =============================================================================

/// Stable node identifier
///
/// - 8 bytes, Copy
/// - Same document title + same path = same id, on every run
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct StableId(u64);

impl StableId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(&self) -> u64 {
        self.0
    }

    /// Create the id for the node at `path` inside the document seeded by `seed`
    pub fn for_path(seed: DocSeed, path: &NodePath) -> Self {
        let hasher = path
            .indices()
            .iter()
            .fold(StableHasher::new().update_u64(seed.as_u64()), |h, idx| {
                h.update_u32(*idx)
            });
        Self(hasher.update_u64(path.depth() as u64).finish())
    }

    /// Lowercase hex, used as the attribute value
    #[inline]
    pub fn to_attr_value(self) -> String {
        format!("{:x}", self.as_raw())
    }
}

impl fmt::Debug for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StableId({:016x})", self.0)
    }
}

impl fmt::Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display() {
        let path = NodePath::root().child(0).child(3).child(1);
        assert_eq!(path.to_string(), "0/3/1");
        assert_eq!(path.depth(), 3);
        assert_eq!(NodePath::root().to_string(), "/");
    }

    #[test]
    fn test_for_path_deterministic() {
        let seed = DocSeed::from_title("Cover Page Template");
        let path = NodePath::root().child(0).child(4);
        assert_eq!(StableId::for_path(seed, &path), StableId::for_path(seed, &path));
    }

    #[test]
    fn test_for_path_differs_by_path_and_seed() {
        let seed = DocSeed::from_title("Sample Document");
        let a = StableId::for_path(seed, &NodePath::root().child(0).child(1));
        let b = StableId::for_path(seed, &NodePath::root().child(1).child(0));
        assert_ne!(a, b);

        let other = DocSeed::from_title("Cover Page Template");
        let c = StableId::for_path(other, &NodePath::root().child(0).child(1));
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_format() {
        let id = StableId::from_raw(0x123456789abcdef0);
        assert_eq!(format!("{}", id), "#123456789abcdef0");
        assert_eq!(id.to_attr_value(), "123456789abcdef0");
    }
}
