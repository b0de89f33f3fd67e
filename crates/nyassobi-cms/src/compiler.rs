//! Fragment compiler
//!
//! Entry point of the renderer: parse, convert, or fall back to a single
//! raw-HTML node when no structural parse is available.

use nyassobi_dom::UiNode;
use nyassobi_html::{FragmentParser, HtmlParser};
use std::fmt;
use std::sync::Arc;

use crate::config::CompilerConfig;
use crate::converter::{Diagnostic, TreeConverter};
use crate::registry::ComponentRegistry;

/// Key of the raw-HTML fallback node
pub const FALLBACK_KEY: &str = "fallback-html";

/// Output of a compilation together with its diagnostics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compilation {
    /// `None` for empty input
    pub nodes: Option<Vec<UiNode>>,
    pub diagnostics: Vec<Diagnostic>,
}

/// HTML fragment → UI tree compiler
///
/// Holds the read-only registry; safe to share between threads.
pub struct FragmentCompiler {
    registry: Arc<ComponentRegistry>,
    parser: Option<Box<dyn FragmentParser>>,
    config: CompilerConfig,
}

impl FragmentCompiler {
    /// Compiler backed by the html5ever front-end
    pub fn new(registry: impl Into<Arc<ComponentRegistry>>) -> Self {
        Self {
            registry: registry.into(),
            parser: Some(Box::new(HtmlParser::new())),
            config: CompilerConfig::default(),
        }
    }

    /// Compiler without a parser; every fragment takes the raw-HTML path
    pub fn without_parser(registry: impl Into<Arc<ComponentRegistry>>) -> Self {
        Self {
            parser: None,
            ..Self::new(registry)
        }
    }

    pub fn with_parser(mut self, parser: impl FragmentParser + 'static) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    pub fn with_config(mut self, config: CompilerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compile a fragment. `None` for absent or empty input.
    pub fn compile(&self, html: Option<&str>) -> Option<Vec<UiNode>> {
        self.compile_with_diagnostics(html).nodes
    }

    /// Compile a fragment, keeping the conversion diagnostics
    pub fn compile_with_diagnostics(&self, html: Option<&str>) -> Compilation {
        let Some(html) = html.filter(|h| !h.is_empty()) else {
            return Compilation::default();
        };

        let Some(parser) = &self.parser else {
            tracing::debug!("No HTML parser available, passing fragment through");
            return fallback(html);
        };

        let document = match parser.parse_fragment(html) {
            Ok(nodes) => nodes,
            Err(e) => {
                tracing::debug!("Fragment parse failed, passing through: {}", e);
                return fallback(html);
            }
        };

        let mut converter = TreeConverter::new(&self.registry, &self.config);
        let nodes = converter.convert(&document);
        tracing::debug!("Compiled fragment into {} top-level nodes", nodes.len());

        Compilation {
            nodes: Some(nodes),
            diagnostics: converter.into_diagnostics(),
        }
    }
}

impl fmt::Debug for FragmentCompiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FragmentCompiler")
            .field("registry", &self.registry)
            .field("has_parser", &self.parser.is_some())
            .field("config", &self.config)
            .finish()
    }
}

fn fallback(html: &str) -> Compilation {
    Compilation {
        nodes: Some(vec![UiNode::raw_html(FALLBACK_KEY, html)]),
        diagnostics: Vec::new(),
    }
}
