//! Site widget registry

use nyassobi_cms::{ComponentDefinition, ComponentRegistry};

/// Widgets the CMS can embed with `<wp-component name="...">`
pub const SITE_WIDGETS: &[&str] = &[
    "NyassoButtonOne",
    "NyassoButtonTwo",
    "DonNyassoWidget",
    "NyassoContact",
    "NyassoSocial",
    "PressKitButton",
];

/// Build the association's widget registry
pub fn site_registry() -> ComponentRegistry {
    ComponentRegistry::new(SITE_WIDGETS.iter().map(|&name| {
        let definition = ComponentDefinition::component(name);
        let definition = match name {
            "PressKitButton" => definition.with_alias("PressKit"),
            _ => definition,
        };
        (name, definition)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_widgets_registered() {
        let registry = site_registry();
        for name in SITE_WIDGETS {
            assert!(registry.contains(name), "{} missing", name);
        }
        assert!(registry.contains("presskit"));
        assert_eq!(registry.len(), SITE_WIDGETS.len() + 1);
    }
}
