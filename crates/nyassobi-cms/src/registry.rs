//! Component registry
//!
//! Immutable name → widget index built once at startup. Lookup keys are
//! trimmed and lower-cased; aliases point at the same entry.
//!
//! Resolution merges props with increasing precedence:
//! entry defaults < decoded arguments < call-site attributes,
//! then hands the result to the entry's props mapper if it has one.

use nyassobi_dom::{ComponentRef, GenericNode, PropValue, PropertyMap, UiNode};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::args::{args_to_props, decode_args};
use crate::specifier::{ComponentSpecifier, SpecifierSyntax};

/// Call-site context of a resolution
#[derive(Debug, Clone, Default)]
pub struct ResolveContext<'a> {
    /// Props taken from the placeholder's own attributes
    pub component_props: PropertyMap,
    /// The placeholder element
    pub source_node: Option<&'a GenericNode>,
    /// Already converted children of the placeholder
    pub children: &'a [UiNode],
}

/// Everything a per-widget hook can see
#[derive(Debug, Clone, Copy)]
pub struct HookContext<'a> {
    pub specifier: &'a str,
    pub syntax: SpecifierSyntax,
    pub raw_args: Option<&'a str>,
    /// Decoded arguments (always `None` while decoding)
    pub args: Option<&'a PropValue>,
    pub component_props: &'a PropertyMap,
    pub source_node: Option<&'a GenericNode>,
    pub children: &'a [UiNode],
}

/// Custom argument decoder
pub trait ArgsDecoder: Send + Sync {
    fn decode(&self, raw_args: &str, ctx: &HookContext<'_>) -> Option<PropValue>;
}

/// Computed default props. Returning `None` contributes nothing.
pub trait DefaultPropsProvider: Send + Sync {
    fn default_props(&self, ctx: &HookContext<'_>) -> Option<PropertyMap>;
}

/// Final props shaping after the standard merge
pub trait PropsMapper: Send + Sync {
    fn map_props(&self, props: PropertyMap, ctx: &HookContext<'_>) -> PropertyMap;
}

/// Arguments of a custom render function
#[derive(Debug)]
pub struct RenderCall<'a> {
    pub key: &'a str,
    pub props: PropertyMap,
    pub children: Vec<UiNode>,
    pub source_node: &'a GenericNode,
    pub specifier: &'a str,
}

/// Widget that builds its own UI node instead of naming a component
pub trait RenderWidget: Send + Sync {
    fn render(&self, call: RenderCall<'_>) -> Option<UiNode>;
}

struct FnArgsDecoder<F>(F);

impl<F> ArgsDecoder for FnArgsDecoder<F>
where
    F: Fn(&str, &HookContext<'_>) -> Option<PropValue> + Send + Sync,
{
    fn decode(&self, raw_args: &str, ctx: &HookContext<'_>) -> Option<PropValue> {
        (self.0)(raw_args, ctx)
    }
}

struct FnDefaultProps<F>(F);

impl<F> DefaultPropsProvider for FnDefaultProps<F>
where
    F: Fn(&HookContext<'_>) -> Option<PropertyMap> + Send + Sync,
{
    fn default_props(&self, ctx: &HookContext<'_>) -> Option<PropertyMap> {
        (self.0)(ctx)
    }
}

struct FnPropsMapper<F>(F);

impl<F> PropsMapper for FnPropsMapper<F>
where
    F: Fn(PropertyMap, &HookContext<'_>) -> PropertyMap + Send + Sync,
{
    fn map_props(&self, props: PropertyMap, ctx: &HookContext<'_>) -> PropertyMap {
        (self.0)(props, ctx)
    }
}

struct FnRender<F>(F);

impl<F> RenderWidget for FnRender<F>
where
    F: Fn(RenderCall<'_>) -> Option<UiNode> + Send + Sync,
{
    fn render(&self, call: RenderCall<'_>) -> Option<UiNode> {
        (self.0)(call)
    }
}

/// Default props of an entry
#[derive(Clone)]
pub enum DefaultProps {
    Static(PropertyMap),
    Computed(Arc<dyn DefaultPropsProvider>),
}

impl fmt::Debug for DefaultProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultProps::Static(props) => f.debug_tuple("Static").field(props).finish(),
            DefaultProps::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// What a resolved placeholder renders as
#[derive(Clone)]
pub enum Renderable {
    Component(ComponentRef),
    Render(Arc<dyn RenderWidget>),
}

impl fmt::Debug for Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Renderable::Component(component) => f.debug_tuple("Component").field(component).finish(),
            Renderable::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Registration-time widget definition
#[derive(Clone, Default)]
pub struct ComponentDefinition {
    component: Option<ComponentRef>,
    render: Option<Arc<dyn RenderWidget>>,
    default_props: Option<DefaultProps>,
    aliases: Vec<String>,
    parse_args: Option<Arc<dyn ArgsDecoder>>,
    map_props: Option<Arc<dyn PropsMapper>>,
}

impl ComponentDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Definition backed by a named component
    pub fn component(name: &str) -> Self {
        Self::new().with_component(ComponentRef::new(name))
    }

    /// Definition backed by a render function
    pub fn render<F>(f: F) -> Self
    where
        F: Fn(RenderCall<'_>) -> Option<UiNode> + Send + Sync + 'static,
    {
        Self::new().with_render_widget(FnRender(f))
    }

    pub fn with_component(mut self, component: ComponentRef) -> Self {
        self.component = Some(component);
        self
    }

    pub fn with_render_widget(mut self, widget: impl RenderWidget + 'static) -> Self {
        self.render = Some(Arc::new(widget));
        self
    }

    pub fn with_default_props(mut self, props: PropertyMap) -> Self {
        self.default_props = Some(DefaultProps::Static(props));
        self
    }

    pub fn with_default_props_fn<F>(self, f: F) -> Self
    where
        F: Fn(&HookContext<'_>) -> Option<PropertyMap> + Send + Sync + 'static,
    {
        self.with_default_props_provider(FnDefaultProps(f))
    }

    pub fn with_default_props_provider(mut self, provider: impl DefaultPropsProvider + 'static) -> Self {
        self.default_props = Some(DefaultProps::Computed(Arc::new(provider)));
        self
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    pub fn with_parse_args<F>(self, f: F) -> Self
    where
        F: Fn(&str, &HookContext<'_>) -> Option<PropValue> + Send + Sync + 'static,
    {
        self.with_args_decoder(FnArgsDecoder(f))
    }

    pub fn with_args_decoder(mut self, decoder: impl ArgsDecoder + 'static) -> Self {
        self.parse_args = Some(Arc::new(decoder));
        self
    }

    pub fn with_map_props<F>(self, f: F) -> Self
    where
        F: Fn(PropertyMap, &HookContext<'_>) -> PropertyMap + Send + Sync + 'static,
    {
        self.with_props_mapper(FnPropsMapper(f))
    }

    pub fn with_props_mapper(mut self, mapper: impl PropsMapper + 'static) -> Self {
        self.map_props = Some(Arc::new(mapper));
        self
    }

    /// A render function takes over from a component reference
    fn renderable(&self) -> Option<Renderable> {
        match (&self.render, &self.component) {
            (Some(render), _) => Some(Renderable::Render(render.clone())),
            (None, Some(component)) => Some(Renderable::Component(component.clone())),
            (None, None) => None,
        }
    }
}

impl fmt::Debug for ComponentDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDefinition")
            .field("component", &self.component)
            .field("render", &self.render.is_some())
            .field("default_props", &self.default_props)
            .field("aliases", &self.aliases)
            .field("parse_args", &self.parse_args.is_some())
            .field("map_props", &self.map_props.is_some())
            .finish()
    }
}

struct RegistryEntry {
    renderable: Renderable,
    default_props: Option<DefaultProps>,
    parse_args: Option<Arc<dyn ArgsDecoder>>,
    map_props: Option<Arc<dyn PropsMapper>>,
}

/// Result of resolving a placeholder specifier
#[derive(Debug, Clone)]
pub struct ResolvedComponent {
    pub renderable: Renderable,
    /// Final merged props
    pub props: PropertyMap,
    /// Decoded arguments
    pub args: Option<PropValue>,
    pub raw_args: Option<String>,
    pub specifier: String,
    pub syntax: SpecifierSyntax,
}

/// Immutable widget registry
#[derive(Default)]
pub struct ComponentRegistry {
    entries: HashMap<String, Arc<RegistryEntry>>,
}

impl ComponentRegistry {
    /// Build a registry from `name → definition` pairs.
    ///
    /// Definitions with neither a component nor a render function are
    /// skipped, as are blank names and aliases.
    pub fn new<I, K>(definitions: I) -> Self
    where
        I: IntoIterator<Item = (K, ComponentDefinition)>,
        K: AsRef<str>,
    {
        let mut entries = HashMap::new();

        for (name, definition) in definitions {
            let name = name.as_ref();
            let Some(renderable) = definition.renderable() else {
                tracing::debug!("Skipping component {:?}: nothing to render", name);
                continue;
            };

            let entry = Arc::new(RegistryEntry {
                renderable,
                default_props: definition.default_props,
                parse_args: definition.parse_args,
                map_props: definition.map_props,
            });

            for key in std::iter::once(name).chain(definition.aliases.iter().map(String::as_str)) {
                let key = normalize_key(key);
                if !key.is_empty() {
                    entries.insert(key, entry.clone());
                }
            }
        }

        tracing::debug!("Component registry built with {} keys", entries.len());
        Self { entries }
    }

    /// Registry with no widgets
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of lookup keys (aliases included)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether a widget name or alias is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_key(name))
    }

    /// Resolve a specifier to a renderable and its merged props
    pub fn resolve(&self, specifier: &str, context: &ResolveContext<'_>) -> Option<ResolvedComponent> {
        let parsed = ComponentSpecifier::parse(specifier);
        if parsed.is_empty() {
            return None;
        }

        let entry = self.entries.get(&normalize_key(&parsed.base_name))?;
        let raw_args = parsed.raw_args.as_deref();

        let decode_ctx = HookContext {
            specifier,
            syntax: parsed.syntax,
            raw_args,
            args: None,
            component_props: &context.component_props,
            source_node: context.source_node,
            children: context.children,
        };

        let args = raw_args.and_then(|raw| match &entry.parse_args {
            Some(decoder) => decoder.decode(raw, &decode_ctx),
            None => decode_args(Some(raw)),
        });

        let ctx = HookContext {
            args: args.as_ref(),
            ..decode_ctx
        };

        let mut props = match &entry.default_props {
            Some(DefaultProps::Static(defaults)) => defaults.clone(),
            Some(DefaultProps::Computed(provider)) => provider.default_props(&ctx).unwrap_or_default(),
            None => PropertyMap::new(),
        };
        props.merge(args_to_props(args.as_ref()));
        props.merge(context.component_props.clone());

        if let Some(mapper) = &entry.map_props {
            props = mapper.map_props(props, &ctx);
        }

        Some(ResolvedComponent {
            renderable: entry.renderable.clone(),
            props,
            raw_args: parsed.raw_args.clone(),
            args,
            specifier: specifier.to_string(),
            syntax: parsed.syntax,
        })
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("ComponentRegistry").field("keys", &keys).finish()
    }
}

impl<K: AsRef<str>> FromIterator<(K, ComponentDefinition)> for ComponentRegistry {
    fn from_iter<I: IntoIterator<Item = (K, ComponentDefinition)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::COMPONENT_ARGS_PROP;

    fn props(pairs: &[(&str, &str)]) -> PropertyMap {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn button_registry() -> ComponentRegistry {
        ComponentRegistry::new([
            (
                "NyassoButtonOne",
                ComponentDefinition::component("NyassoButtonOne")
                    .with_default_props(props(&[("size", "s"), ("tone", "warm")])),
            ),
            (
                "PressKitButton",
                ComponentDefinition::component("PressKitButton").with_alias("PressKit"),
            ),
        ])
    }

    fn component_name(resolved: &ResolvedComponent) -> &str {
        match &resolved.renderable {
            Renderable::Component(c) => c.name(),
            Renderable::Render(_) => panic!("expected a component"),
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trimmed() {
        let registry = button_registry();
        assert!(registry.contains("nyassobuttonone"));
        assert!(registry.contains("  NYASSOBUTTONONE "));
        assert!(registry.contains("presskit"));
        assert_eq!(registry.len(), 3);

        let resolved = registry.resolve(" pressKit ", &ResolveContext::default()).unwrap();
        assert_eq!(component_name(&resolved), "PressKitButton");
    }

    #[test]
    fn test_unresolved() {
        let registry = button_registry();
        assert!(registry.resolve("", &ResolveContext::default()).is_none());
        assert!(registry.resolve("   ", &ResolveContext::default()).is_none());
        assert!(registry.resolve("Unknown(1,2)", &ResolveContext::default()).is_none());
    }

    #[test]
    fn test_merge_precedence() {
        let registry = button_registry();
        let context = ResolveContext {
            component_props: props(&[("size", "l")]),
            ..Default::default()
        };

        let resolved = registry.resolve("NyassoButtonOne?size=m&label=Go", &context).unwrap();
        assert_eq!(resolved.props.get_str("size"), Some("l"));
        assert_eq!(resolved.props.get_str("tone"), Some("warm"));
        assert_eq!(resolved.props.get_str("label"), Some("Go"));

        let resolved = registry.resolve("NyassoButtonOne?size=m", &ResolveContext::default()).unwrap();
        assert_eq!(resolved.props.get_str("size"), Some("m"));

        let resolved = registry.resolve("NyassoButtonOne", &ResolveContext::default()).unwrap();
        assert_eq!(resolved.props.get_str("size"), Some("s"));
        assert!(resolved.args.is_none());
    }

    #[test]
    fn test_positional_args() {
        let registry = button_registry();
        let resolved = registry.resolve("PressKit(2024, fr)", &ResolveContext::default()).unwrap();

        assert_eq!(resolved.syntax, SpecifierSyntax::Parentheses);
        assert_eq!(resolved.raw_args.as_deref(), Some("2024, fr"));
        assert_eq!(
            resolved.props.get(COMPONENT_ARGS_PROP),
            Some(&PropValue::List(vec![PropValue::Number(2024.0), PropValue::from(" fr")]))
        );
    }

    #[test]
    fn test_custom_hooks() {
        let registry = ComponentRegistry::new([(
            "DonNyassoWidget",
            ComponentDefinition::component("DonNyassoWidget")
                .with_parse_args(|raw: &str, _ctx: &HookContext<'_>| {
                    Some(PropValue::from(raw.to_uppercase()))
                })
                .with_default_props_fn(|ctx: &HookContext<'_>| {
                    let mut defaults = PropertyMap::new();
                    defaults.insert("from", ctx.raw_args.unwrap_or("none"));
                    defaults.insert("childCount", ctx.children.len() as f64);
                    Some(defaults)
                })
                .with_map_props(|mut props: PropertyMap, ctx: &HookContext<'_>| {
                    props.insert("syntax", format!("{:?}", ctx.syntax));
                    props
                }),
        )]);

        let children = vec![UiNode::text("a")];
        let context = ResolveContext {
            children: &children,
            ..Default::default()
        };
        let resolved = registry.resolve("DonNyassoWidget|monthly", &context).unwrap();

        assert_eq!(resolved.args, Some(PropValue::from("MONTHLY")));
        assert_eq!(resolved.props.get_str(COMPONENT_ARGS_PROP), Some("MONTHLY"));
        assert_eq!(resolved.props.get_str("from"), Some("monthly"));
        assert_eq!(resolved.props.get("childCount"), Some(&PropValue::Number(1.0)));
        assert_eq!(resolved.props.get_str("syntax"), Some("Pipe"));
    }

    #[test]
    fn test_non_map_defaults_ignored() {
        let registry = ComponentRegistry::new([(
            "NyassoSocial",
            ComponentDefinition::component("NyassoSocial").with_default_props_fn(|_: &HookContext<'_>| None),
        )]);

        let resolved = registry.resolve("NyassoSocial", &ResolveContext::default()).unwrap();
        assert!(resolved.props.is_empty());
    }

    #[test]
    fn test_definitions_without_renderable_are_skipped() {
        let registry = ComponentRegistry::new([
            ("Empty", ComponentDefinition::new()),
            ("", ComponentDefinition::component("Nameless")),
            ("   ", ComponentDefinition::component("Blank").with_alias(" ")),
        ]);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_render_takes_over_component() {
        let definition = ComponentDefinition::component("Ignored")
            .with_render_widget(FnRender(|call: RenderCall<'_>| Some(UiNode::text(call.key))));
        let registry = ComponentRegistry::new([("Both", definition)]);

        let resolved = registry.resolve("Both", &ResolveContext::default()).unwrap();
        assert!(matches!(resolved.renderable, Renderable::Render(_)));
    }
}
