//! HTML5 Parser implementation
//!
//! Uses html5ever's built-in RcDom and converts the body's subtree into
//! owned generic nodes. Fragments are parsed as full documents so the
//! tree builder applies its usual recovery rules (implicit html/head/body,
//! unclosed tags, misnested inline elements).

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use nyassobi_dom::{Attribute, ElementData, GenericNode};

use crate::ParseError;

/// HTML5 parser
#[derive(Debug, Clone, Copy)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse an HTML fragment, returning the body's child nodes
    pub fn parse_fragment(&self, html: &str) -> Result<Vec<GenericNode>, ParseError> {
        tracing::debug!("Parsing HTML fragment ({} bytes)", html.len());

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let body = find_element(&dom.document, "body").ok_or(ParseError::MissingBody)?;
        let nodes: Vec<GenericNode> = body
            .children
            .borrow()
            .iter()
            .filter_map(|child| self.convert_node(child))
            .collect();

        tracing::debug!("Parsed {} top-level nodes", nodes.len());
        Ok(nodes)
    }

    /// Convert an RcDom node to a generic node
    fn convert_node(&self, handle: &Handle) -> Option<GenericNode> {
        match &handle.data {
            RcNodeData::Text { contents } => Some(GenericNode::Text(contents.borrow().to_string())),
            RcNodeData::Comment { contents } => Some(GenericNode::Comment(contents.to_string())),
            RcNodeData::Element { name, attrs, .. } => {
                let mut elem = ElementData::new(name.local.to_string());

                elem.attrs = attrs
                    .borrow()
                    .iter()
                    .map(|attr| Attribute::new(attr.name.local.to_string(), attr.value.to_string()))
                    .collect();

                elem.children = handle
                    .children
                    .borrow()
                    .iter()
                    .filter_map(|child| self.convert_node(child))
                    .collect();

                Some(GenericNode::Element(elem))
            }
            // Document, doctype and processing instructions carry no content
            _ => None,
        }
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first search for the first element with the given local name
fn find_element(handle: &Handle, local: &str) -> Option<Handle> {
    if let RcNodeData::Element { name, .. } = &handle.data {
        if &*name.local == local {
            return Some(handle.clone());
        }
    }

    handle
        .children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, local))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let nodes = HtmlParser::new().parse_fragment("<p>Hello</p>").unwrap();

        assert_eq!(nodes.len(), 1);
        let p = nodes[0].as_element().unwrap();
        assert_eq!(p.name, "p");
        assert_eq!(p.children[0].as_text(), Some("Hello"));
    }

    #[test]
    fn test_parse_attributes_in_order() {
        let html = r#"<a href="/contact" class="btn" data-track="cta">Contact</a>"#;
        let nodes = HtmlParser::new().parse_fragment(html).unwrap();

        let a = nodes[0].as_element().unwrap();
        let names: Vec<&str> = a.attrs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["href", "class", "data-track"]);
        assert_eq!(a.get_attr("data-track"), Some("cta"));
    }

    #[test]
    fn test_tag_names_lowercased() {
        let nodes = HtmlParser::new().parse_fragment("<DIV><SPAN>x</SPAN></DIV>").unwrap();
        let div = nodes[0].as_element().unwrap();
        assert_eq!(div.name, "div");
        assert_eq!(div.children[0].as_element().unwrap().name, "span");
    }

    #[test]
    fn test_comment_kept() {
        let nodes = HtmlParser::new().parse_fragment("<p>x</p><!-- /wp:paragraph -->").unwrap();
        assert!(nodes[0].is_element());
        assert_eq!(nodes[1], GenericNode::comment(" /wp:paragraph "));
    }

    #[test]
    fn test_empty_input_has_no_nodes() {
        let nodes = HtmlParser::new().parse_fragment("").unwrap();
        assert!(nodes.is_empty());
    }
}
