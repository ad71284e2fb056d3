//! Element capabilities
//!
//! Every value stored in a [`List`](crate::List) or [`Dict`](crate::Dict)
//! implements [`Element`]. The trait carries a kind tag that numeric and
//! sorting operations check once per call, the serializer hook, and the
//! numeric/ordering views those operations use.
//!
//! Types without a JSON shape can still be stored by wrapping them in
//! [`Opaque`], which serializes through `Debug`.

use crate::config::{NonFiniteFloats, SerializeConfig};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Declared kind of an element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Signed or unsigned integer of any width
    Integer,
    /// Floating point of any width
    Float,
    /// Text
    String,
    /// Boolean
    Bool,
    /// Value that may be absent (`Option<T>`)
    Nullable,
    /// Nested List or Dict
    Container,
    /// Dynamic JSON value
    Json,
    /// Anything else
    Other,
}

impl ElementKind {
    /// Integers and floats support sum/prod/avg/min/max
    pub fn is_numeric(self) -> bool {
        matches!(self, ElementKind::Integer | ElementKind::Float)
    }

    /// Numbers and strings support sort
    pub fn is_sortable(self) -> bool {
        self.is_numeric() || self == ElementKind::String
    }

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Integer => "integer",
            ElementKind::Float => "float",
            ElementKind::String => "string",
            ElementKind::Bool => "bool",
            ElementKind::Nullable => "nullable",
            ElementKind::Container => "container",
            ElementKind::Json => "json",
            ElementKind::Other => "other",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value that can live inside a List or Dict
pub trait Element: Clone + PartialEq + 'static {
    /// Kind tag checked by type-constrained operations
    const KIND: ElementKind;

    /// Append the serialized form of this value to `out`
    fn write_json(&self, out: &mut String, config: &SerializeConfig);

    /// Numeric view; `Some` for every numeric kind
    fn to_f64(&self) -> Option<f64> {
        None
    }

    /// Ascending order used by sort. Only consulted for sortable kinds.
    fn sort_cmp(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }
}

macro_rules! integer_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                const KIND: ElementKind = ElementKind::Integer;

                fn write_json(&self, out: &mut String, _config: &SerializeConfig) {
                    out.push_str(&self.to_string());
                }

                fn to_f64(&self) -> Option<f64> {
                    Some(*self as f64)
                }

                fn sort_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

integer_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                const KIND: ElementKind = ElementKind::Float;

                fn write_json(&self, out: &mut String, config: &SerializeConfig) {
                    if self.is_finite() {
                        // Display is the shortest round-trip form and never uses an exponent
                        out.push_str(&self.to_string());
                    } else {
                        write_non_finite(&self.to_string(), out, config);
                    }
                }

                fn to_f64(&self) -> Option<f64> {
                    Some(*self as f64)
                }

                fn sort_cmp(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }
        )*
    };
}

float_element!(f32, f64);

fn write_non_finite(text: &str, out: &mut String, config: &SerializeConfig) {
    match config.non_finite {
        NonFiniteFloats::Null => out.push_str("null"),
        NonFiniteFloats::Literal => {
            tracing::debug!(value = text, "writing non-finite float outside JSON");
            out.push_str(text);
        }
    }
}

/// Append `text` as a JSON string literal
pub(crate) fn write_quoted(text: &str, out: &mut String) {
    out.push_str(&serde_json::Value::from(text).to_string());
}

impl Element for String {
    const KIND: ElementKind = ElementKind::String;

    fn write_json(&self, out: &mut String, _config: &SerializeConfig) {
        write_quoted(self, out);
    }

    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Element for &'static str {
    const KIND: ElementKind = ElementKind::String;

    fn write_json(&self, out: &mut String, _config: &SerializeConfig) {
        write_quoted(self, out);
    }

    fn sort_cmp(&self, other: &Self) -> Ordering {
        (*self).cmp(*other)
    }
}

impl Element for Rc<str> {
    const KIND: ElementKind = ElementKind::String;

    fn write_json(&self, out: &mut String, _config: &SerializeConfig) {
        write_quoted(self, out);
    }

    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.as_ref().cmp(other.as_ref())
    }
}

impl Element for char {
    const KIND: ElementKind = ElementKind::String;

    fn write_json(&self, out: &mut String, _config: &SerializeConfig) {
        let mut buf = [0u8; 4];
        write_quoted(self.encode_utf8(&mut buf), out);
    }

    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Element for bool {
    const KIND: ElementKind = ElementKind::Bool;

    fn write_json(&self, out: &mut String, _config: &SerializeConfig) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

impl<T: Element> Element for Option<T> {
    const KIND: ElementKind = ElementKind::Nullable;

    fn write_json(&self, out: &mut String, config: &SerializeConfig) {
        match self {
            Some(value) => value.write_json(out, config),
            None => out.push_str("null"),
        }
    }
}

impl Element for serde_json::Value {
    const KIND: ElementKind = ElementKind::Json;

    fn write_json(&self, out: &mut String, _config: &SerializeConfig) {
        out.push_str(&self.to_string());
    }
}

/// Wrapper for element types with no JSON shape.
///
/// Serializes through `Debug`, so containers holding `Opaque` values produce
/// readable but not necessarily parseable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Opaque<T>(pub T);

impl<T> Opaque<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: fmt::Debug + Clone + PartialEq + 'static> Element for Opaque<T> {
    const KIND: ElementKind = ElementKind::Other;

    fn write_json(&self, out: &mut String, _config: &SerializeConfig) {
        tracing::debug!("writing opaque value with Debug fallback");
        out.push_str(&format!("{:?}", self.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json<T: Element>(value: T) -> String {
        let mut out = String::new();
        value.write_json(&mut out, &SerializeConfig::default());
        out
    }

    #[test]
    fn test_kind_capabilities() {
        assert!(ElementKind::Integer.is_numeric());
        assert!(ElementKind::Float.is_sortable());
        assert!(ElementKind::String.is_sortable());
        assert!(!ElementKind::String.is_numeric());
        assert!(!ElementKind::Bool.is_sortable());
        assert!(!ElementKind::Nullable.is_numeric());
    }

    #[test]
    fn test_declared_kinds() {
        assert_eq!(<u8 as Element>::KIND, ElementKind::Integer);
        assert_eq!(<i128 as Element>::KIND, ElementKind::Integer);
        assert_eq!(<f32 as Element>::KIND, ElementKind::Float);
        assert_eq!(<&str as Element>::KIND, ElementKind::String);
        assert_eq!(<Option<i32> as Element>::KIND, ElementKind::Nullable);
        assert_eq!(<Opaque<Vec<i32>> as Element>::KIND, ElementKind::Other);
    }

    #[test]
    fn test_primitive_json() {
        assert_eq!(json(-7i8), "-7");
        assert_eq!(json(u64::MAX), "18446744073709551615");
        assert_eq!(json(3.14f32), "3.14");
        assert_eq!(json(5.0f64), "5");
        assert_eq!(json(1e21f64), "1000000000000000000000");
        assert_eq!(json(true), "true");
        assert_eq!(json('x'), "\"x\"");
        assert_eq!(json(None::<i32>), "null");
        assert_eq!(json(Some(2u16)), "2");
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(json("say \"hi\"\n"), r#""say \"hi\"\n""#);
        assert_eq!(json(String::from("tab\t")), r#""tab\t""#);
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(json(f64::NAN), "NaN");
        assert_eq!(json(f64::NEG_INFINITY), "-inf");

        let mut out = String::new();
        f64::INFINITY.write_json(&mut out, &SerializeConfig::strict_json());
        assert_eq!(out, "null");
    }

    #[test]
    fn test_opaque_uses_debug() {
        assert_eq!(json(Opaque(vec![1, 2])), "[1, 2]");
    }

    #[test]
    fn test_sort_cmp() {
        assert_eq!(2i32.sort_cmp(&5), Ordering::Less);
        assert_eq!((-0.5f64).sort_cmp(&-1.0), Ordering::Greater);
        assert_eq!("b".sort_cmp(&"a"), Ordering::Greater);
    }
}
