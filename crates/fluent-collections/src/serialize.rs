//! Recursive value-to-text serializer
//!
//! Produces compact JSON-compatible text for lists, dictionaries and
//! primitives. Output is valid JSON only when every contained value has a
//! JSON shape (strings, booleans, numbers, `None`, nested containers);
//! [`Opaque`](crate::Opaque) values and literal non-finite floats fall back
//! to plain text.

use crate::config::SerializeConfig;
use crate::element::{write_quoted, Element};

/// Serialize a value with the default configuration
pub fn serialize<T: Element>(value: &T) -> String {
    serialize_with(value, &SerializeConfig::default())
}

/// Serialize a value with explicit options
pub fn serialize_with<T: Element>(value: &T, config: &SerializeConfig) -> String {
    let mut out = String::new();
    value.write_json(&mut out, config);
    out
}

/// Write `[e1,e2,...]`
pub(crate) fn write_array<'a, T, I>(items: I, out: &mut String, config: &SerializeConfig)
where
    T: Element,
    I: IntoIterator<Item = &'a T>,
{
    out.push('[');
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        item.write_json(out, config);
    }
    out.push(']');
}

/// Write `{k1:v1,k2:v2,...}`
pub(crate) fn write_object<'a, K, V, I>(fields: I, out: &mut String, config: &SerializeConfig)
where
    K: Element,
    V: Element,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    out.push('{');
    for (i, (key, value)) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_key(key, out, config);
        out.push(':');
        value.write_json(out, config);
    }
    out.push('}');
}

fn write_key<K: Element>(key: &K, out: &mut String, config: &SerializeConfig) {
    let text = serialize_with(key, config);
    if !config.quote_keys || text.starts_with('"') {
        out.push_str(&text);
    } else {
        write_quoted(&text, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NonFiniteFloats;

    #[test]
    fn test_serialize_primitives() {
        assert_eq!(serialize(&42u8), "42");
        assert_eq!(serialize(&"text"), "\"text\"");
        assert_eq!(serialize(&false), "false");
        assert_eq!(serialize(&None::<String>), "null");
    }

    #[test]
    fn test_write_array() {
        let mut out = String::new();
        write_array(&[1, 2, 3], &mut out, &SerializeConfig::default());
        assert_eq!(out, "[1,2,3]");

        let mut out = String::new();
        write_array(&Vec::<i32>::new(), &mut out, &SerializeConfig::default());
        assert_eq!(out, "[]");
    }

    #[test]
    fn test_write_object_quotes_keys() {
        let fields = [(1, true)];
        let mut out = String::new();
        write_object(
            fields.iter().map(|(k, v)| (k, v)),
            &mut out,
            &SerializeConfig::default(),
        );
        assert_eq!(out, r#"{"1":true}"#);
    }

    #[test]
    fn test_write_object_raw_keys() {
        let config = SerializeConfig {
            non_finite: NonFiniteFloats::Literal,
            quote_keys: false,
        };
        let fields = [(1, true)];
        let mut out = String::new();
        write_object(fields.iter().map(|(k, v)| (k, v)), &mut out, &config);
        assert_eq!(out, "{1:true}");
    }

    #[test]
    fn test_string_keys_not_double_quoted() {
        let fields = [("a", 1)];
        let mut out = String::new();
        write_object(
            fields.iter().map(|(k, v)| (k, v)),
            &mut out,
            &SerializeConfig::default(),
        );
        assert_eq!(out, r#"{"a":1}"#);
    }
}
