//! Attribute normalization
//!
//! Maps raw HTML attributes onto the property names UI elements expect:
//! - `on*` handlers are dropped
//! - `style` becomes a nested camel-cased mapping
//! - `data-*` / `aria-*` pass through verbatim
//! - irregular names go through a fixed table, other hyphenated names are camel-cased

use nyassobi_dom::{Attribute, ElementData, PropValue, PropertyMap};
use std::borrow::Cow;

use crate::args::decode_scalar;

/// Known irregular renamings
const ATTRIBUTE_NAME_MAP: &[(&str, &str)] = &[
    ("class", "className"),
    ("for", "htmlFor"),
    ("colspan", "colSpan"),
    ("rowspan", "rowSpan"),
    ("cellpadding", "cellPadding"),
    ("cellspacing", "cellSpacing"),
    ("tabindex", "tabIndex"),
    ("readonly", "readOnly"),
    ("maxlength", "maxLength"),
    ("minlength", "minLength"),
    ("autoplay", "autoPlay"),
    ("playsinline", "playsInline"),
    ("frameborder", "frameBorder"),
    ("allowfullscreen", "allowFullScreen"),
    ("srcset", "srcSet"),
    ("crossorigin", "crossOrigin"),
    ("datetime", "dateTime"),
];

const DATA_PROP_PREFIX: &str = "data-prop-";
const CAMEL_DATA_PROP_PREFIX: &str = "dataProp";

/// Normalize an element's attributes into a property map
pub fn normalize_attributes(attrs: &[Attribute]) -> PropertyMap {
    let mut props = PropertyMap::new();

    for attr in attrs {
        let name = attr.name.as_str();

        if name.starts_with("on") {
            continue;
        }

        if name == "style" {
            let style = parse_style(&attr.value);
            if !style.is_empty() {
                props.insert("style", PropValue::Map(style));
            }
            continue;
        }

        if name.starts_with("data-") || name.starts_with("aria-") {
            props.insert(name, attr.value.as_str());
            continue;
        }

        props.insert(property_name(name), attr.value.as_str());
    }

    props
}

/// Parse inline `style` text into camel-cased declarations.
///
/// Declarations without a name or with an empty value are skipped. Values
/// may contain `:` (only the first one separates name from value).
pub fn parse_style(style: &str) -> PropertyMap {
    let mut declarations = PropertyMap::new();

    for declaration in style.split(';').map(str::trim).filter(|d| !d.is_empty()) {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };

        let value = value.trim();
        if property.is_empty() || value.is_empty() {
            continue;
        }

        declarations.insert(to_camel_case(property), value);
    }

    declarations
}

/// Convert kebab-case to camelCase.
///
/// Only a hyphen followed by a lowercase ASCII letter is folded; the
/// result is trimmed.
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('-', Some(next)) if next.is_ascii_lowercase() => {
                result.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => result.push(c),
        }
    }

    result.trim().to_string()
}

/// Call-site props of a placeholder element.
///
/// Specifier attributes are removed; `data-prop-foo-bar` becomes
/// `fooBar` with a decoded value; everything else is passed through
/// after normalization.
pub fn extract_component_props(elem: &ElementData, name_attributes: &[String]) -> PropertyMap {
    let mut raw = normalize_attributes(&elem.attrs);
    for name in name_attributes {
        raw.remove(name);
        raw.remove(&to_camel_case(name));
    }

    let mut props = PropertyMap::new();
    for (key, value) in raw {
        if let Some(rest) = key.strip_prefix(DATA_PROP_PREFIX) {
            props.insert(to_camel_case(rest), decode_prop(value));
        } else if let Some(rest) = key.strip_prefix(CAMEL_DATA_PROP_PREFIX) {
            props.insert(lowercase_first(rest), decode_prop(value));
        } else {
            props.insert(key, value);
        }
    }

    props
}

fn property_name(name: &str) -> Cow<'_, str> {
    if let Some((_, mapped)) = ATTRIBUTE_NAME_MAP.iter().find(|(raw, _)| *raw == name) {
        Cow::Borrowed(*mapped)
    } else if name.contains('-') {
        Cow::Owned(to_camel_case(name))
    } else {
        Cow::Borrowed(name)
    }
}

fn decode_prop(value: PropValue) -> PropValue {
    match value {
        PropValue::String(s) => decode_scalar(&s),
        other => other,
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
