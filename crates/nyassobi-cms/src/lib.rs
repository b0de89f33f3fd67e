//! Nyassobi CMS renderer
//!
//! Turns HTML fragments produced by the CMS into a tree of typed UI
//! elements. Placeholder tags (`<wp-component name="...">`) are resolved
//! through a [`ComponentRegistry`] into app-defined widgets.
//!
//! # Example
//! ```rust,ignore
//! use nyassobi_cms::{ComponentDefinition, ComponentRegistry, FragmentCompiler};
//!
//! let registry = ComponentRegistry::new([
//!     ("PressKitButton", ComponentDefinition::component("PressKitButton").with_alias("PressKit")),
//! ]);
//! let compiler = FragmentCompiler::new(registry);
//! let nodes = compiler.compile(Some(r#"<p>Hi</p><wp-component name="PressKit(2024)"></wp-component>"#));
//! ```
//!
//! Conversion never fails: malformed markup falls back to a raw-HTML
//! node and unknown widgets pass their children through.

mod args;
mod attributes;
mod compiler;
mod config;
mod converter;
mod registry;
mod specifier;

pub use args::{COMPONENT_ARGS_PROP, args_to_props, decode_args, decode_scalar};
pub use attributes::{extract_component_props, normalize_attributes, parse_style, to_camel_case};
pub use compiler::{Compilation, FALLBACK_KEY, FragmentCompiler};
pub use config::CompilerConfig;
pub use converter::{Diagnostic, TreeConverter};
pub use registry::{
    ArgsDecoder, ComponentDefinition, ComponentRegistry, DefaultProps, DefaultPropsProvider,
    HookContext, PropsMapper, Renderable, RenderCall, RenderWidget, ResolveContext,
    ResolvedComponent,
};
pub use specifier::{ComponentSpecifier, SpecifierSyntax};

pub use nyassobi_dom::{ComponentRef, GenericNode, PropValue, PropertyMap, TitleContent, UiNode};
pub use nyassobi_html::{FragmentParser, HtmlParser, ParseError};
