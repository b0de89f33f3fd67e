//! Nyassobi site
//!
//! Glue between the CMS and the renderer: content node model, route
//! normalization, page assembly and the site's widget registry.
//!
//! # Example
//! ```rust,ignore
//! use nyassobi_site::{load_page, site_registry, FragmentCompiler};
//!
//! let compiler = FragmentCompiler::new(site_registry());
//! let page = load_page(&cms, "/association/", &compiler)?;
//! ```

mod config;
mod content;
mod page;
mod registry;
mod source;
mod uri;

pub use config::{DEFAULT_GRAPHQL_ENDPOINT, GRAPHQL_URL_ENV, SiteConfig, derive_base_url};
pub use content::{ContentNode, FeaturedImage, MediaItem, NODE_BY_URI_QUERY};
pub use page::{FeaturedImageView, PageError, PageView, load_page};
pub use registry::{SITE_WIDGETS, site_registry};
pub use source::{ContentError, ContentSource};
pub use uri::normalize_uri;

pub use nyassobi_cms::FragmentCompiler;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
