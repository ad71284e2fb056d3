//! Fluent Collections - mutable List and Dict containers
//!
//! This library provides two generic container types with fluent mutation,
//! structural equality, functional combinators and JSON-style serialization:
//! - [`List<T>`]: ordered sequence with positional access and numeric aggregation
//! - [`Dict<K, V>`]: unordered key-value mapping with field access
//! - [`serialize`]: the shared recursive serializer behind `to_string()`
//! - [`map_list`] / [`map_dict`]: maps that change the element type
//!
//! Every fallible operation returns [`CollectionResult`]; mutating operations
//! return the receiver so calls chain with `?`.
//!
//! # Example
//!
//! ```
//! use fluent_collections::{dict, list, CollectionResult};
//!
//! fn run() -> CollectionResult<()> {
//!     let scores = dict! { "ada" => 3, "grace" => 5 };
//!     scores.set("linus", 4)?.unset(["ada"])?;
//!     assert_eq!(scores.values()?.sum()?, 9.0);
//!
//!     let l = list![1, 2];
//!     assert_eq!(l.add([3])?.to_string(), "[1,2,3]");
//!     Ok(())
//! }
//! run().unwrap();
//! ```

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod dict;
pub mod element;
pub mod error;
pub mod list;
pub mod serialize;
pub mod transform;

pub use config::{NonFiniteFloats, SerializeConfig};
pub use dict::Dict;
pub use element::{Element, ElementKind, Opaque};
pub use error::{CollectionError, CollectionResult};
pub use list::List;
pub use serialize::{serialize, serialize_with};
pub use transform::{map_dict, map_list};

/// Build a [`List`] from literal elements
///
/// ```
/// use fluent_collections::list;
///
/// let l = list![1, 2, 3];
/// assert_eq!(l.count().unwrap(), 3);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::List::from_vec(::std::vec![$($value),+])
    };
}

/// Build a [`Dict`] from literal fields
///
/// ```
/// use fluent_collections::dict;
///
/// let d = dict! { "first" => 1, "second" => 2 };
/// assert_eq!(d.get(&"second").unwrap(), 2);
/// ```
#[macro_export]
macro_rules! dict {
    () => {
        $crate::Dict::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = ::std::collections::HashMap::new();
        $(
            fields.insert($key, $value);
        )+
        $crate::Dict::from_map(fields)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoke() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_macros() {
        let empty: List<i32> = list![];
        assert!(empty.is_empty().unwrap());

        let d: Dict<String, i32> = dict! {};
        assert!(d.is_empty().unwrap());

        let d = dict! { 1 => "one", 2 => "two", };
        assert_eq!(d.count().unwrap(), 2);
    }
}
