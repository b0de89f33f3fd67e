//! Tree converter
//!
//! Recursive GenericNode → UiNode conversion with per-tag overrides.
//! Every emitted node carries a traversal key: children of a node keyed
//! `k` are keyed `k-<index>`, counting source children.

use nyassobi_dom::{ElementData, GenericNode, TitleContent, UiNode};
use std::fmt;

use crate::attributes::{extract_component_props, normalize_attributes};
use crate::config::CompilerConfig;
use crate::registry::{ComponentRegistry, RenderCall, Renderable, ResolveContext, ResolvedComponent};

const NBSP: &str = "\u{a0}";

/// Non-fatal conversion report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A placeholder named a widget the registry does not know
    UnresolvedComponent { specifier: String, key: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedComponent { specifier, key } => {
                write!(f, "Unresolved CMS component {:?} at {}", specifier, key)
            }
        }
    }
}

/// How a source node is treated
enum NodeKind<'n> {
    Text(&'n str),
    Skipped,
    Placeholder(&'n ElementData),
    Title(&'n ElementData),
    Subtitle(&'n ElementData),
    Void(&'n ElementData),
    Element(&'n ElementData),
}

/// Converter for one compilation
pub struct TreeConverter<'a> {
    registry: &'a ComponentRegistry,
    config: &'a CompilerConfig,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> TreeConverter<'a> {
    pub fn new(registry: &'a ComponentRegistry, config: &'a CompilerConfig) -> Self {
        Self {
            registry,
            config,
            diagnostics: Vec::new(),
        }
    }

    /// Convert top-level nodes, keyed from the configured prefix
    pub fn convert(&mut self, nodes: &[GenericNode]) -> Vec<UiNode> {
        let prefix = self.config.key_prefix.clone();
        self.convert_children(nodes, &prefix)
    }

    /// Convert a sibling list, dropping nodes that produce nothing
    pub fn convert_children(&mut self, nodes: &[GenericNode], parent_key: &str) -> Vec<UiNode> {
        nodes
            .iter()
            .enumerate()
            .filter_map(|(index, node)| self.convert_node(node, format!("{}-{}", parent_key, index)))
            .collect()
    }

    /// Convert one node. `None` means the node emits nothing.
    pub fn convert_node(&mut self, node: &GenericNode, key: String) -> Option<UiNode> {
        match self.classify(node) {
            NodeKind::Text(text) => convert_text(text),
            NodeKind::Skipped => None,
            NodeKind::Placeholder(elem) => self.convert_placeholder(node, elem, key),
            NodeKind::Title(elem) => self
                .title_content(elem, &key)
                .map(|content| UiNode::Title { key, content }),
            NodeKind::Subtitle(elem) => self
                .title_content(elem, &key)
                .map(|content| UiNode::Subtitle { key, content }),
            NodeKind::Void(elem) => {
                Some(UiNode::element(elem.name.to_ascii_lowercase(), key).with_props(normalize_attributes(&elem.attrs)))
            }
            NodeKind::Element(elem) => {
                let children = self.convert_children(&elem.children, &key);
                Some(
                    UiNode::element(elem.name.to_ascii_lowercase(), key)
                        .with_props(normalize_attributes(&elem.attrs))
                        .with_children(children),
                )
            }
        }
    }

    /// Diagnostics reported so far
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn classify<'n>(&self, node: &'n GenericNode) -> NodeKind<'n> {
        let elem = match node {
            GenericNode::Text(text) => return NodeKind::Text(text),
            GenericNode::Comment(_) => return NodeKind::Skipped,
            GenericNode::Element(elem) => elem,
        };

        let tag = elem.name.to_ascii_lowercase();
        match tag.as_str() {
            t if self.config.is_dropped(t) => NodeKind::Skipped,
            t if self.config.is_placeholder(t) => NodeKind::Placeholder(elem),
            "h1" => NodeKind::Title(elem),
            "h2" => NodeKind::Subtitle(elem),
            t if self.config.is_void(t) => NodeKind::Void(elem),
            _ => NodeKind::Element(elem),
        }
    }

    fn convert_placeholder(&mut self, node: &GenericNode, elem: &ElementData, key: String) -> Option<UiNode> {
        let children = self.convert_children(&elem.children, &key);

        let specifier = self
            .config
            .name_attributes
            .iter()
            .filter_map(|name| elem.get_attr(name))
            .find(|value| !value.is_empty());

        let resolved = specifier.and_then(|specifier| {
            let context = ResolveContext {
                component_props: extract_component_props(elem, &self.config.name_attributes),
                source_node: Some(node),
                children: &children,
            };
            self.registry.resolve(specifier, &context)
        });

        match resolved {
            Some(ResolvedComponent {
                renderable: Renderable::Component(component),
                props,
                ..
            }) => Some(UiNode::widget(component, key).with_props(props).with_children(children)),
            Some(ResolvedComponent {
                renderable: Renderable::Render(widget),
                props,
                specifier,
                ..
            }) => widget.render(RenderCall {
                key: &key,
                props,
                children,
                source_node: node,
                specifier: &specifier,
            }),
            None => {
                if let Some(specifier) = specifier {
                    tracing::warn!(specifier, key = %key, "Unresolved CMS component");
                    self.diagnostics.push(Diagnostic::UnresolvedComponent {
                        specifier: specifier.to_string(),
                        key: key.clone(),
                    });
                }
                pass_through(children, key)
            }
        }
    }

    /// Zero children: nothing. One: the child itself. More: the list.
    fn title_content(&mut self, elem: &ElementData, key: &str) -> Option<TitleContent> {
        let mut children = self.convert_children(&elem.children, key);
        match children.len() {
            0 => None,
            1 => children.pop().map(|child| TitleContent::Single(Box::new(child))),
            _ => Some(TitleContent::Multiple(children)),
        }
    }
}

fn convert_text(text: &str) -> Option<UiNode> {
    if !text.trim().is_empty() {
        return Some(UiNode::text(text));
    }
    text.contains(NBSP).then(|| UiNode::text(NBSP))
}

/// Children of an unresolved placeholder
fn pass_through(mut children: Vec<UiNode>, key: String) -> Option<UiNode> {
    match children.len() {
        0 => None,
        1 => children.pop(),
        _ => Some(UiNode::fragment(key, children)),
    }
}
