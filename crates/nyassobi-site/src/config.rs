//! Site configuration

use url::Url;

/// Environment variable overriding the GraphQL endpoint
pub const GRAPHQL_URL_ENV: &str = "WORDPRESS_GRAPHQL_URL";

/// Endpoint of the local development CMS
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "http://react-nyassobi.local/graphql";

/// Site configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// CMS GraphQL endpoint
    pub graphql_endpoint: String,
    /// CMS site root, derived from the endpoint
    pub base_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::with_endpoint(DEFAULT_GRAPHQL_ENDPOINT)
    }
}

impl SiteConfig {
    /// Read the endpoint from the environment, falling back to the default
    pub fn from_env() -> Self {
        match std::env::var(GRAPHQL_URL_ENV) {
            Ok(endpoint) if !endpoint.trim().is_empty() => Self::with_endpoint(endpoint.trim()),
            _ => Self::default(),
        }
    }

    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            graphql_endpoint: endpoint.to_string(),
            base_url: derive_base_url(endpoint),
        }
    }
}

/// `scheme://host[:port]/path` with a trailing `/graphql` segment and
/// trailing slashes removed. `None` for an invalid URL.
pub fn derive_base_url(endpoint: &str) -> Option<String> {
    let url = Url::parse(endpoint).ok()?;
    let host = url.host_str()?;

    let path = url.path();
    let path = path
        .strip_suffix("/graphql/")
        .or_else(|| path.strip_suffix("/graphql"))
        .unwrap_or(path)
        .trim_end_matches('/');

    let authority = match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };

    Some(format!("{}://{}{}", url.scheme(), authority, path))
}
