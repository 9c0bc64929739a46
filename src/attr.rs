//! Attribute system for visual elements
//!
//! Attributes are kept as an ordered `Vec<(String, String)>` so the
//! serialized HTML lists them in insertion order.

/// Element attributes as ordered key-value pairs
pub type Attrs = Vec<(String, String)>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or update in place)
    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>);

    /// Remove an attribute by name, returning the old value if present
    fn remove_attr(&mut self, name: &str) -> Option<String>;

    /// Set an attribute only when a value is present
    fn set_opt_attr<V: ToString>(&mut self, name: &str, value: Option<V>) {
        if let Some(value) = value {
            self.set_attr(name, value.to_string());
        }
    }
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.iter_mut().find(|(k, _)| k == &name) {
            attr.1 = value;
        } else {
            self.push((name, value));
        }
    }

    fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.iter()
            .position(|(k, _)| k == name)
            .map(|pos| self.remove(pos).1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_operations() {
        let mut attrs: Attrs = Vec::new();

        attrs.set_attr("src", "logo.png");
        attrs.set_attr("alt", "Brand Logo");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get_attr("src"), Some("logo.png"));
        assert_eq!(attrs.get_attr("width"), None);
        assert!(attrs.has_attr("alt"));

        // update keeps position
        attrs.set_attr("src", "other.png");
        assert_eq!(attrs[0], ("src".to_string(), "other.png".to_string()));
        assert_eq!(attrs.len(), 2);

        attrs.set_opt_attr("width", Some(100u32));
        attrs.set_opt_attr::<u32>("height", None);
        assert_eq!(attrs.get_attr("width"), Some("100"));
        assert!(!attrs.has_attr("height"));
        attrs.remove_attr("width");

        let removed = attrs.remove_attr("alt");
        assert_eq!(removed.as_deref(), Some("Brand Logo"));
        assert!(!attrs.has_attr("alt"));
        assert_eq!(attrs.len(), 1);
    }
}
