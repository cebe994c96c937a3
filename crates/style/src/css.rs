//! Serialization of a resolved style map to CSS declaration text.
use crate::resolve::StyleMap;
use itertools::Itertools;

/// Converts a medially cased property name to its hyphenated CSS form:
/// `backgroundColor` becomes `background-color`. Each property name has
/// exactly one hyphenated form under the standard CSS naming convention.
pub fn camel_to_kebab(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Serializes a style map to a `property: value; property: value` string
/// suitable for an inline `style` attribute, in map order.
pub fn to_declarations(styles: &StyleMap) -> String {
    styles
        .iter()
        .map(|(property, value)| format!("{}: {}", camel_to_kebab(property), value))
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_to_kebab() {
        assert_eq!(camel_to_kebab("width"), "width");
        assert_eq!(camel_to_kebab("backgroundColor"), "background-color");
        assert_eq!(camel_to_kebab("borderTopLeftRadius"), "border-top-left-radius");
        assert_eq!(camel_to_kebab("zIndex"), "z-index");
    }

    #[test]
    fn test_to_declarations_preserves_map_order() {
        let mut styles = StyleMap::new();
        styles.insert("width".into(), "100%".into());
        styles.insert("backgroundColor".into(), "#fff".into());
        assert_eq!(to_declarations(&styles), "width: 100%; background-color: #fff");
    }

    #[test]
    fn test_empty_map_serializes_to_empty_string() {
        assert_eq!(to_declarations(&StyleMap::new()), "");
    }
}
