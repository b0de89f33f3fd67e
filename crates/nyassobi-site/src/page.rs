//! Page assembly
//!
//! Looks a route up in the CMS and turns the node into a page view with
//! its body compiled to a UI tree.

use nyassobi_cms::FragmentCompiler;
use nyassobi_dom::UiNode;
use serde::Serialize;

use crate::content::ContentNode;
use crate::source::{ContentError, ContentSource};
use crate::uri::normalize_uri;

/// Page loading error, mapped onto an HTTP-like status
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Contenu introuvable: {uri}")]
    NotFound { uri: String },

    #[error("Erreur de contenu: {0}")]
    Content(#[from] ContentError),
}

impl PageError {
    pub fn status(&self) -> u16 {
        match self {
            PageError::NotFound { .. } => 404,
            PageError::Content(_) => 500,
        }
    }

    pub fn status_text(&self) -> &'static str {
        match self {
            PageError::NotFound { .. } => "Page introuvable",
            PageError::Content(_) => "Erreur de contenu",
        }
    }
}

/// Featured image of a simple page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedImageView {
    pub src: String,
    pub alt: String,
}

/// A page ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "camelCase")]
pub enum PageView {
    /// Post-like node: body only, in an article card
    Article { content: Option<Vec<UiNode>> },

    /// Any other node: optional title and featured image above the body
    #[serde(rename_all = "camelCase")]
    Simple {
        title: Option<String>,
        featured_image: Option<FeaturedImageView>,
        content: Option<Vec<UiNode>>,
    },
}

impl PageView {
    /// Build the view of a fetched node
    pub fn from_node(node: &ContentNode, compiler: &FragmentCompiler) -> Self {
        let content = compiler.compile(Some(node.html()));

        if node.is_article() {
            return PageView::Article { content };
        }

        PageView::Simple {
            title: node.title.clone().filter(|t| !t.is_empty()),
            featured_image: node.featured_image().map(|(src, alt)| FeaturedImageView {
                src: src.to_string(),
                alt: alt.to_string(),
            }),
            content,
        }
    }

    pub fn content(&self) -> Option<&[UiNode]> {
        match self {
            PageView::Article { content } | PageView::Simple { content, .. } => content.as_deref(),
        }
    }
}

/// Load the page at a route path
pub fn load_page<S: ContentSource>(
    source: &S,
    path: &str,
    compiler: &FragmentCompiler,
) -> Result<PageView, PageError> {
    let uri = normalize_uri(path);
    tracing::debug!("Loading CMS page {}", uri);

    let node = source
        .node_by_uri(&uri)
        .inspect_err(|e| tracing::warn!(uri = %uri, "CMS lookup failed: {}", e))?
        .ok_or_else(|| PageError::NotFound { uri: uri.clone() })?;

    Ok(PageView::from_node(&node, compiler))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let missing = PageError::NotFound { uri: "x".into() };
        assert_eq!(missing.status(), 404);
        assert_eq!(missing.status_text(), "Page introuvable");

        let broken = PageError::from(ContentError::EmptyPayload);
        assert_eq!(broken.status(), 500);
        assert_eq!(broken.status_text(), "Erreur de contenu");
    }
}
