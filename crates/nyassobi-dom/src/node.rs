//! Generic parsed node
//!
//! Owned, immutable view of a parsed fragment. One tree is produced per
//! compile call and dropped once it has been converted.

/// A parsed document node
#[derive(Debug, Clone, PartialEq)]
pub enum GenericNode {
    /// Text content (whitespace preserved as parsed)
    Text(String),
    /// Comment
    Comment(String),
    /// Element
    Element(ElementData),
}

impl GenericNode {
    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        GenericNode::Text(content.into())
    }

    /// Create a comment node
    pub fn comment(content: impl Into<String>) -> Self {
        GenericNode::Comment(content.into())
    }

    /// Create an empty element node
    pub fn element(name: impl Into<String>) -> Self {
        GenericNode::Element(ElementData::new(name))
    }

    /// Append an attribute (no-op on non-elements)
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let GenericNode::Element(elem) = &mut self {
            elem.set_attr(name, value);
        }
        self
    }

    /// Append a child (no-op on non-elements)
    pub fn with_child(mut self, child: GenericNode) -> Self {
        if let GenericNode::Element(elem) = &mut self {
            elem.children.push(child);
        }
        self
    }

    /// Append several children (no-op on non-elements)
    pub fn with_children(mut self, children: impl IntoIterator<Item = GenericNode>) -> Self {
        if let GenericNode::Element(elem) = &mut self {
            elem.children.extend(children);
        }
        self
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, GenericNode::Element(_))
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, GenericNode::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match self {
            GenericNode::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            GenericNode::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Child nodes (empty for text and comments)
    pub fn children(&self) -> &[GenericNode] {
        match self {
            GenericNode::Element(e) => &e.children,
            _ => &[],
        }
    }
}

/// Element-specific data
#[derive(Debug, Clone, PartialEq)]
pub struct ElementData {
    /// Lower-cased local tag name
    pub name: String,
    /// Attributes in source order
    pub attrs: Vec<Attribute>,
    /// Child nodes in source order
    pub children: Vec<GenericNode>,
}

impl ElementData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Set an attribute
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        // Check if attribute already exists
        for attr in self.attrs.iter_mut() {
            if attr.name == name {
                attr.value = value;
                return;
            }
        }
        self.attrs.push(Attribute { name, value });
    }
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
