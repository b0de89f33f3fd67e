//! Nyassobi HTML Parser
//!
//! Permissive HTML5 front-end built on html5ever.
//! Parses CMS fragments into owned [`GenericNode`] trees.

mod parser;

pub use parser::HtmlParser;
pub use nyassobi_dom::{Attribute, ElementData, GenericNode};

/// Parse an HTML fragment into the children of its body
pub fn parse_fragment(html: &str) -> Result<Vec<GenericNode>, ParseError> {
    HtmlParser::new().parse_fragment(html)
}

/// Capability to turn an HTML fragment into a generic node tree.
///
/// The renderer receives this as a dependency; a renderer built without
/// one falls back to passing the raw HTML through.
pub trait FragmentParser: Send + Sync {
    /// Parse `html`, returning the body's child nodes
    fn parse_fragment(&self, html: &str) -> Result<Vec<GenericNode>, ParseError>;
}

impl FragmentParser for HtmlParser {
    fn parse_fragment(&self, html: &str) -> Result<Vec<GenericNode>, ParseError> {
        HtmlParser::parse_fragment(self, html)
    }
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsed document has no body element")]
    MissingBody,

    #[error("Malformed HTML: {message}")]
    Malformed { message: String },
}
