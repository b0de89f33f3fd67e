//! Argument decoding
//!
//! Decodes the argument text of a specifier. Layered fallback:
//! 1. literals (`true`, `false`, numbers, JSON)
//! 2. query strings (`key=value&key=value`), repeated keys accumulate
//! 3. comma lists
//! 4. the trimmed text itself

use nyassobi_dom::{PropValue, PropertyMap};
use url::form_urlencoded;

/// Prop under which positional arguments are handed to a widget
pub const COMPONENT_ARGS_PROP: &str = "componentArgs";

/// Decode a single attribute or argument value.
///
/// Blank input yields an empty string. Undecodable input is returned
/// unchanged (untrimmed).
pub fn decode_scalar(value: &str) -> PropValue {
    let trimmed = value.trim();

    match trimmed {
        "" => return PropValue::String(String::new()),
        "true" => return PropValue::Bool(true),
        "false" => return PropValue::Bool(false),
        _ => {}
    }

    if is_decimal(trimmed) {
        if let Ok(n) = trimmed.parse::<f64>() {
            return PropValue::Number(n);
        }
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(json) => PropValue::from(json),
        Err(_) => PropValue::String(value.to_string()),
    }
}

/// Decode specifier arguments. `None` for absent or blank input.
pub fn decode_args(raw_args: Option<&str>) -> Option<PropValue> {
    let trimmed = raw_args?.trim();
    if trimmed.is_empty() {
        return None;
    }

    // A literal that decoded to something other than the text itself wins
    match decode_scalar(trimmed) {
        PropValue::String(s) if s == trimmed => {}
        literal => return Some(literal),
    }

    let candidate = trimmed.strip_prefix('?').unwrap_or(trimmed);
    if candidate.contains('=') {
        let params = decode_query(candidate);
        if !params.is_empty() {
            return Some(PropValue::Map(params));
        }
    }

    if trimmed.contains(',') {
        let items = trimmed.split(',').map(decode_scalar).collect();
        return Some(PropValue::List(items));
    }

    Some(PropValue::String(trimmed.to_string()))
}

/// Turn decoded arguments into widget props.
///
/// Lists and scalars land under [`COMPONENT_ARGS_PROP`]; mappings are
/// spread; `null` contributes nothing.
pub fn args_to_props(args: Option<&PropValue>) -> PropertyMap {
    let mut props = PropertyMap::new();
    match args {
        None | Some(PropValue::Null) => {}
        Some(PropValue::Map(map)) => props = map.clone(),
        Some(other) => {
            props.insert(COMPONENT_ARGS_PROP, other.clone());
        }
    }
    props
}

/// URLSearchParams-style decoding with accumulation of repeated keys
fn decode_query(query: &str) -> PropertyMap {
    let mut params = PropertyMap::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let decoded = decode_scalar(&value);
        let key = key.into_owned();

        match params.get_mut(&key) {
            None => {
                params.insert(key, decoded);
            }
            Some(PropValue::List(items)) => items.push(decoded),
            Some(existing) => {
                let first = std::mem::replace(existing, PropValue::Null);
                *existing = PropValue::List(vec![first, decoded]);
            }
        }
    }

    params
}

/// `-?\d+(\.\d+)?`
fn is_decimal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(int) && frac.is_none_or(all_digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> PropValue {
        PropValue::from(v)
    }

    #[test]
    fn test_is_decimal() {
        assert!(is_decimal("12"));
        assert!(is_decimal("-3.25"));
        assert!(!is_decimal("1."));
        assert!(!is_decimal(".5"));
        assert!(!is_decimal("1e3"));
        assert!(!is_decimal("-"));
    }

    #[test]
    fn test_decode_scalar_literals() {
        assert_eq!(decode_scalar("true"), PropValue::Bool(true));
        assert_eq!(decode_scalar(" false "), PropValue::Bool(false));
        assert_eq!(decode_scalar("42"), PropValue::Number(42.0));
        assert_eq!(decode_scalar("-0.5"), PropValue::Number(-0.5));
        assert_eq!(decode_scalar("null"), PropValue::Null);
        assert_eq!(decode_scalar("   "), s(""));
    }

    #[test]
    fn test_decode_scalar_json() {
        assert_eq!(decode_scalar("\"quoted\""), s("quoted"));
        assert_eq!(
            decode_scalar("[1, \"two\"]"),
            PropValue::List(vec![PropValue::Number(1.0), s("two")])
        );
        let map = decode_scalar(r#"{"size": "l"}"#);
        assert_eq!(map.as_map().and_then(|m| m.get_str("size")), Some("l"));
    }

    #[test]
    fn test_decode_scalar_keeps_original_text() {
        assert_eq!(decode_scalar(" hello "), s(" hello "));
    }

    #[test]
    fn test_decode_args_absent() {
        assert_eq!(decode_args(None), None);
        assert_eq!(decode_args(Some("  ")), None);
    }

    #[test]
    fn test_decode_args_list() {
        assert_eq!(
            decode_args(Some("a,b,1")),
            Some(PropValue::List(vec![s("a"), s("b"), PropValue::Number(1.0)]))
        );
        assert_eq!(
            decode_args(Some("a, true")),
            Some(PropValue::List(vec![s("a"), PropValue::Bool(true)]))
        );
    }

    #[test]
    fn test_decode_args_list_keeps_segment_spacing() {
        assert_eq!(
            decode_args(Some("a, b ,2")),
            Some(PropValue::List(vec![s("a"), s(" b "), PropValue::Number(2.0)]))
        );
    }

    #[test]
    fn test_decode_args_json_object_keeps_key_order() {
        let args = decode_args(Some(r#"{"size":"l","color":"x","alpha":1}"#)).unwrap();
        let map = args.as_map().unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["size", "color", "alpha"]);

        let nested = decode_scalar(r#"{"z": {"b": 1, "a": 2}}"#);
        let inner = nested.as_map().and_then(|m| m.get("z")).and_then(PropValue::as_map).unwrap();
        assert_eq!(inner.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_decode_args_query() {
        let args = decode_args(Some("x=1&y=2")).unwrap();
        let map = args.as_map().unwrap();
        assert_eq!(map.get("x"), Some(&PropValue::Number(1.0)));
        assert_eq!(map.get("y"), Some(&PropValue::Number(2.0)));

        let args = decode_args(Some("?label=Faire+un+don&url=%2Fdon")).unwrap();
        let map = args.as_map().unwrap();
        assert_eq!(map.get_str("label"), Some("Faire un don"));
        assert_eq!(map.get_str("url"), Some("/don"));
    }

    #[test]
    fn test_decode_args_repeated_keys_accumulate() {
        let args = decode_args(Some("tag=a&other=x&tag=b&tag=3")).unwrap();
        let map = args.as_map().unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["tag", "other"]);
        assert_eq!(
            map.get("tag"),
            Some(&PropValue::List(vec![s("a"), s("b"), PropValue::Number(3.0)]))
        );
        assert_eq!(map.get_str("other"), Some("x"));
    }

    #[test]
    fn test_decode_args_literals_win() {
        assert_eq!(decode_args(Some("true")), Some(PropValue::Bool(true)));
        assert_eq!(decode_args(Some("7")), Some(PropValue::Number(7.0)));
        assert_eq!(decode_args(Some("\"a,b\"")), Some(s("a,b")));
        let json = decode_args(Some(r#"{"a": [1, 2]}"#)).unwrap();
        assert!(json.as_map().is_some());
    }

    #[test]
    fn test_decode_args_bare_word() {
        assert_eq!(decode_args(Some(" primary ")), Some(s("primary")));
    }

    #[test]
    fn test_args_to_props() {
        assert!(args_to_props(None).is_empty());
        assert!(args_to_props(Some(&PropValue::Null)).is_empty());

        let props = args_to_props(Some(&s("primary")));
        assert_eq!(props.get_str(COMPONENT_ARGS_PROP), Some("primary"));

        let list = PropValue::List(vec![s("a")]);
        let props = args_to_props(Some(&list));
        assert_eq!(props.get(COMPONENT_ARGS_PROP), Some(&list));

        let map: PropertyMap = [("size", "m")].into_iter().collect();
        let props = args_to_props(Some(&PropValue::Map(map)));
        assert_eq!(props.get_str("size"), Some("m"));
        assert!(!props.contains_key(COMPONENT_ARGS_PROP));
    }
}
