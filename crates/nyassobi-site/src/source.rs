//! Content source interface
//!
//! The transport (GraphQL over HTTP) lives outside this crate; pages only
//! need a way to look a node up by URI.

use crate::content::ContentNode;

/// Content source error
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("CMS returned an empty payload")]
    EmptyPayload,

    #[error("CMS request failed: {0}")]
    Transport(String),

    #[error("Invalid CMS payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Lookup of content nodes by normalized URI
pub trait ContentSource {
    /// `Ok(None)` when no node exists at `uri`
    fn node_by_uri(&self, uri: &str) -> Result<Option<ContentNode>, ContentError>;
}

impl<S: ContentSource + ?Sized> ContentSource for &S {
    fn node_by_uri(&self, uri: &str) -> Result<Option<ContentNode>, ContentError> {
        (**self).node_by_uri(uri)
    }
}
