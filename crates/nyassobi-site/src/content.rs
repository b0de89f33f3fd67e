//! CMS content nodes
//!
//! Payload model of the GraphQL `nodeByUri` lookup.

use serde::Deserialize;

use crate::source::ContentError;

/// GraphQL document fetching a node by URI
pub const NODE_BY_URI_QUERY: &str = r#"
  query GetNodeByUri($uri: String!) {
    nodeByUri(uri: $uri) {
      __typename
      ... on ContentNode {
        id
        databaseId
        slug
        date
        modified
      }
      ... on UniformResourceIdentifiable {
        uri
      }
      ... on NodeWithTitle {
        title
      }
      ... on NodeWithContentEditor {
        content
      }
      ... on NodeWithExcerpt {
        excerpt
      }
      ... on NodeWithFeaturedImage {
        featuredImage {
          node {
            sourceUrl
            altText
          }
        }
      }
    }
  }
"#;

/// A page, post or other content entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentNode {
    #[serde(rename = "__typename")]
    pub typename: String,
    pub id: Option<String>,
    pub database_id: Option<i64>,
    pub slug: Option<String>,
    pub date: Option<String>,
    pub modified: Option<String>,
    pub uri: Option<String>,
    pub title: Option<String>,
    /// Rendered HTML body
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub featured_image: Option<FeaturedImage>,
}

/// `featuredImage` edge
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeaturedImage {
    pub node: Option<MediaItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub source_url: Option<String>,
    pub alt_text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodeByUriData {
    node_by_uri: Option<ContentNode>,
}

impl ContentNode {
    /// Decode the `data` object of a `nodeByUri` response
    pub fn from_query_response(json: &str) -> Result<Option<ContentNode>, ContentError> {
        let value: Option<NodeByUriData> = serde_json::from_str(json)?;
        let data = value.ok_or(ContentError::EmptyPayload)?;
        Ok(data.node_by_uri)
    }

    /// HTML to render: the body, else the excerpt
    pub fn html(&self) -> &str {
        self.content
            .as_deref()
            .or(self.excerpt.as_deref())
            .unwrap_or_default()
    }

    /// Posts and news items get the article layout
    pub fn is_article(&self) -> bool {
        let typename = self.typename.to_lowercase();
        matches!(typename.as_str(), "post" | "news" | "article") || typename.ends_with("post")
    }

    /// Featured image URL and alt text (alt defaults to empty)
    pub fn featured_image(&self) -> Option<(&str, &str)> {
        let media = self.featured_image.as_ref()?.node.as_ref()?;
        let url = media.source_url.as_deref().filter(|u| !u.is_empty())?;
        Some((url, media.alt_text.as_deref().unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(typename: &str) -> ContentNode {
        ContentNode {
            typename: typename.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_article() {
        assert!(node("Post").is_article());
        assert!(node("news").is_article());
        assert!(node("Article").is_article());
        assert!(node("EventPost").is_article());
        assert!(!node("Page").is_article());
        assert!(!node("").is_article());
    }

    #[test]
    fn test_html_prefers_content() {
        let mut n = node("Page");
        assert_eq!(n.html(), "");
        n.excerpt = Some("<p>court</p>".into());
        assert_eq!(n.html(), "<p>court</p>");
        n.content = Some("<p>long</p>".into());
        assert_eq!(n.html(), "<p>long</p>");
    }

    #[test]
    fn test_decode_response() {
        let json = r#"{
            "nodeByUri": {
                "__typename": "Page",
                "id": "cG9zdDox",
                "databaseId": 12,
                "title": "Association",
                "content": "<p>Bonjour</p>",
                "featuredImage": { "node": { "sourceUrl": "https://cdn/x.jpg", "altText": null } }
            }
        }"#;

        let node = ContentNode::from_query_response(json).unwrap().unwrap();
        assert_eq!(node.typename, "Page");
        assert_eq!(node.database_id, Some(12));
        assert_eq!(node.title.as_deref(), Some("Association"));
        assert_eq!(node.featured_image(), Some(("https://cdn/x.jpg", "")));
    }

    #[test]
    fn test_decode_missing_node() {
        assert_eq!(ContentNode::from_query_response(r#"{"nodeByUri": null}"#).unwrap(), None);
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(
            ContentNode::from_query_response("null"),
            Err(ContentError::EmptyPayload)
        ));
        assert!(matches!(
            ContentNode::from_query_response("{"),
            Err(ContentError::Decode(_))
        ));
    }
}
