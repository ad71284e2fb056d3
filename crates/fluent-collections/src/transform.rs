//! Type-changing maps
//!
//! [`List::map`] and [`Dict::map`] keep the element type. These free
//! functions build containers of a different element type instead.

use crate::dict::Dict;
use crate::element::Element;
use crate::error::CollectionResult;
use crate::list::List;
use std::hash::Hash;

/// New list with `function` applied to every element of `list`, in order
///
/// # Example
///
/// ```
/// use fluent_collections::{list, map_list};
///
/// let labels = map_list(&list![1, 2, 3], |n| n.to_string()).unwrap();
/// assert!(labels.equals(&list!["1".to_string(), "2".to_string(), "3".to_string()]).unwrap());
/// ```
pub fn map_list<T, N>(list: &List<T>, mut function: impl FnMut(&T) -> N) -> CollectionResult<List<N>>
where
    T: Element,
    N: Element,
{
    let mut mapped = Vec::new();
    list.for_each(|value| mapped.push(function(value)))?;
    Ok(List::from_vec(mapped))
}

/// New dictionary with the keys of `dict` and each value replaced by
/// `function(key, value)`
pub fn map_dict<K, V, N>(
    dict: &Dict<K, V>,
    mut function: impl FnMut(&K, &V) -> N,
) -> CollectionResult<Dict<K, N>>
where
    K: Element + Eq + Hash,
    V: Element,
    N: Element,
{
    let mut mapped = Vec::new();
    dict.for_each(|key, value| mapped.push((key.clone(), function(key, value))))?;
    Ok(mapped.into_iter().collect())
}
