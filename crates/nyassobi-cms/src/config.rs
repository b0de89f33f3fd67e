//! Compiler configuration

use std::collections::HashSet;

/// Fragment compiler configuration
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// Tag name of the widget placeholder
    pub placeholder_tag: String,
    /// Attributes read (in order) for the placeholder's specifier
    pub name_attributes: Vec<String>,
    /// Elements dropped together with their subtree
    pub dropped_tags: HashSet<String>,
    /// Elements that never carry children
    pub void_elements: HashSet<String>,
    /// Prefix of traversal keys for top-level nodes
    pub key_prefix: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            placeholder_tag: "wp-component".into(),
            name_attributes: vec!["name".into(), "data-name".into()],
            dropped_tags: ["script", "noscript", "style"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            void_elements: [
                "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
                "param", "source", "track", "wbr",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            key_prefix: "wp".into(),
        }
    }
}

impl CompilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different placeholder tag
    pub fn with_placeholder_tag(mut self, tag: &str) -> Self {
        self.placeholder_tag = tag.to_ascii_lowercase();
        self
    }

    /// Replace the specifier attributes
    pub fn with_name_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.name_attributes = names.into_iter().map(Into::into).collect();
        self
    }

    /// Drop an additional element kind
    pub fn with_dropped_tag(mut self, tag: &str) -> Self {
        self.dropped_tags.insert(tag.to_ascii_lowercase());
        self
    }

    pub fn with_key_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    #[inline]
    pub fn is_placeholder(&self, tag: &str) -> bool {
        self.placeholder_tag == tag
    }

    #[inline]
    pub fn is_dropped(&self, tag: &str) -> bool {
        self.dropped_tags.contains(tag)
    }

    #[inline]
    pub fn is_void(&self, tag: &str) -> bool {
        self.void_elements.contains(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CompilerConfig::default();
        assert!(config.is_placeholder("wp-component"));
        assert!(config.is_dropped("script"));
        assert!(config.is_dropped("noscript"));
        assert!(config.is_void("img"));
        assert!(!config.is_void("div"));
        assert_eq!(config.name_attributes, vec!["name", "data-name"]);
    }

    #[test]
    fn test_builder() {
        let config = CompilerConfig::new()
            .with_placeholder_tag("CMS-Widget")
            .with_dropped_tag("iframe")
            .with_name_attributes(["widget"])
            .with_key_prefix("page");

        assert!(config.is_placeholder("cms-widget"));
        assert!(config.is_dropped("iframe"));
        assert_eq!(config.name_attributes, vec!["widget"]);
        assert_eq!(config.key_prefix, "page");
    }
}
