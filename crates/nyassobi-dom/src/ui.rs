//! UI element tree
//!
//! Output of the content renderer. Page views render these nodes; the
//! tree also serializes to JSON for hand-off to a client.

use crate::PropertyMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Opaque reference to an app-defined widget implementation
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ComponentRef(Arc<str>);

impl ComponentRef {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Widget implementation name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentRef({})", self.0)
    }
}

impl Serialize for ComponentRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Payload of a title element: one node, or several siblings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TitleContent {
    Single(Box<UiNode>),
    Multiple(Vec<UiNode>),
}

/// UI element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UiNode {
    /// Text leaf
    Text { content: String },

    /// Generic element (tag carried through from the source)
    Element {
        key: String,
        tag: String,
        props: PropertyMap,
        children: Vec<UiNode>,
    },

    /// Resolved widget
    Widget {
        key: String,
        component: ComponentRef,
        props: PropertyMap,
        children: Vec<UiNode>,
    },

    /// Transparent grouping of siblings
    Fragment { key: String, children: Vec<UiNode> },

    /// Primary page title
    Title { key: String, content: TitleContent },

    /// Secondary title
    Subtitle { key: String, content: TitleContent },

    /// Unconverted HTML, rendered verbatim
    RawHtml { key: String, html: String },
}

impl UiNode {
    pub fn text(content: impl Into<String>) -> Self {
        UiNode::Text {
            content: content.into(),
        }
    }

    pub fn element(tag: impl Into<String>, key: impl Into<String>) -> Self {
        UiNode::Element {
            key: key.into(),
            tag: tag.into(),
            props: PropertyMap::new(),
            children: Vec::new(),
        }
    }

    pub fn widget(component: ComponentRef, key: impl Into<String>) -> Self {
        UiNode::Widget {
            key: key.into(),
            component,
            props: PropertyMap::new(),
            children: Vec::new(),
        }
    }

    pub fn fragment(key: impl Into<String>, children: Vec<UiNode>) -> Self {
        UiNode::Fragment {
            key: key.into(),
            children,
        }
    }

    pub fn raw_html(key: impl Into<String>, html: impl Into<String>) -> Self {
        UiNode::RawHtml {
            key: key.into(),
            html: html.into(),
        }
    }

    /// Replace the props of an element or widget
    pub fn with_props(mut self, new_props: PropertyMap) -> Self {
        if let UiNode::Element { ref mut props, .. } | UiNode::Widget { ref mut props, .. } = self {
            *props = new_props;
        }
        self
    }

    /// Append children to an element, widget or fragment
    pub fn with_children(mut self, new_children: Vec<UiNode>) -> Self {
        if let UiNode::Element { ref mut children, .. }
        | UiNode::Widget { ref mut children, .. }
        | UiNode::Fragment { ref mut children, .. } = self
        {
            children.extend(new_children);
        }
        self
    }

    /// Traversal key (text leaves have none)
    pub fn key(&self) -> Option<&str> {
        match self {
            UiNode::Text { .. } => None,
            UiNode::Element { key, .. }
            | UiNode::Widget { key, .. }
            | UiNode::Fragment { key, .. }
            | UiNode::Title { key, .. }
            | UiNode::Subtitle { key, .. }
            | UiNode::RawHtml { key, .. } => Some(key),
        }
    }

    pub fn props(&self) -> Option<&PropertyMap> {
        match self {
            UiNode::Element { props, .. } | UiNode::Widget { props, .. } => Some(props),
            _ => None,
        }
    }

    pub fn children(&self) -> &[UiNode] {
        match self {
            UiNode::Element { children, .. }
            | UiNode::Widget { children, .. }
            | UiNode::Fragment { children, .. } => children,
            _ => &[],
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            UiNode::Text { content } => Some(content),
            _ => None,
        }
    }

    /// Tag name of a generic element
    pub fn tag(&self) -> Option<&str> {
        match self {
            UiNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PropValue;

    #[test]
    fn test_element_builder() {
        let mut props = PropertyMap::new();
        props.insert("className", "intro");
        let node = UiNode::element("p", "wp-0")
            .with_props(props)
            .with_children(vec![UiNode::text("Hello")]);

        assert_eq!(node.tag(), Some("p"));
        assert_eq!(node.key(), Some("wp-0"));
        assert_eq!(node.props().and_then(|p| p.get_str("className")), Some("intro"));
        assert_eq!(node.children()[0].as_text(), Some("Hello"));
    }

    #[test]
    fn test_text_has_no_key() {
        assert!(UiNode::text("x").key().is_none());
        assert!(UiNode::text("x").children().is_empty());
    }

    #[test]
    fn test_serialize_widget() {
        let mut props = PropertyMap::new();
        props.insert("size", PropValue::from("l"));
        let node = UiNode::widget(ComponentRef::new("NyassoButtonOne"), "wp-1").with_props(props);

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "widget");
        assert_eq!(json["component"], "NyassoButtonOne");
        assert_eq!(json["props"]["size"], "l");
    }

    #[test]
    fn test_serialize_title_single() {
        let node = UiNode::Title {
            key: "wp-0".into(),
            content: TitleContent::Single(Box::new(UiNode::text("Bienvenue"))),
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "title");
        assert_eq!(json["content"]["content"], "Bienvenue");
    }
}
