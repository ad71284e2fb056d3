//! List - mutable ordered sequence
//!
//! `List<T>` is a handle to a growable sequence with positional access,
//! fluent in-place mutation, functional combinators and numeric aggregation.
//!
//! Handles have reference semantics: `Clone` on the handle shares storage
//! and `==` on handles compares identity. [`List::duplicate`] makes a new
//! top-level copy; nested lists and dictionaries inside it stay shared.
//!
//! # Example
//!
//! ```
//! use fluent_collections::{list, List};
//!
//! let l = list![3, 1, 2];
//! l.add([5, 4]).unwrap().sort().unwrap();
//! assert!(l.equals(&list![1, 2, 3, 4, 5]).unwrap());
//! assert_eq!(l.sum().unwrap(), 15.0);
//! ```

use crate::config::SerializeConfig;
use crate::element::{Element, ElementKind};
use crate::error::{CollectionError, CollectionResult};
use crate::serialize::write_array;
use serde::ser::{Error as _, Serialize, Serializer};
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Mutable ordered sequence of `T`
pub struct List<T> {
    inner: Option<Rc<RefCell<Vec<T>>>>,
}

impl<T> List<T> {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// A handle with no backing store. Every operation on it fails with
    /// [`CollectionError::Uninitialized`].
    pub const fn uninit() -> Self {
        Self { inner: None }
    }

    /// Wrap an existing vector; the list takes ownership of it
    pub fn from_vec(values: Vec<T>) -> Self {
        Self {
            inner: Some(Rc::new(RefCell::new(values))),
        }
    }

    /// Wrap a vector that may be absent; `None` gives an uninitialized list
    pub fn from_option(values: Option<Vec<T>>) -> Self {
        match values {
            Some(values) => Self::from_vec(values),
            None => Self::uninit(),
        }
    }

    /// Create a list from any sequence of values
    pub fn of(values: impl IntoIterator<Item = T>) -> Self {
        Self::from_vec(values.into_iter().collect())
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.is_some()
    }

    /// True if both handles point at the same storage
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    fn read(&self) -> CollectionResult<Ref<'_, Vec<T>>> {
        self.inner
            .as_ref()
            .map(|cell| cell.borrow())
            .ok_or_else(CollectionError::uninit_list)
    }

    fn write(&self) -> CollectionResult<RefMut<'_, Vec<T>>> {
        self.inner
            .as_ref()
            .map(|cell| cell.borrow_mut())
            .ok_or_else(CollectionError::uninit_list)
    }

    /// Number of elements
    pub fn count(&self) -> CollectionResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> CollectionResult<bool> {
        Ok(self.read()?.is_empty())
    }
}

impl<T: Element> List<T> {
    /// Create a list holding `count` copies of `value`
    pub fn repeat(value: T, count: usize) -> Self {
        Self::from_vec(vec![value; count])
    }

    /// Append values at the end
    pub fn add(&self, values: impl IntoIterator<Item = T>) -> CollectionResult<&Self> {
        let values: Vec<T> = values.into_iter().collect();
        self.write()?.extend(values);
        Ok(self)
    }

    /// Insert `value` before `index`; `index == count` appends
    pub fn insert(&self, index: usize, value: T) -> CollectionResult<&Self> {
        let mut items = self.write()?;
        if index > items.len() {
            return Err(out_of_range(index, items.len()));
        }
        items.insert(index, value);
        drop(items);
        Ok(self)
    }

    /// Overwrite the element at `index`
    pub fn replace(&self, index: usize, value: T) -> CollectionResult<&Self> {
        let mut items = self.write()?;
        let len = items.len();
        match items.get_mut(index) {
            Some(slot) => *slot = value,
            None => return Err(out_of_range(index, len)),
        }
        drop(items);
        Ok(self)
    }

    /// Remove the elements at the given positions.
    ///
    /// Positions refer to the list as passed in: removal runs from the highest
    /// index down, so earlier removals never shift a later one. Each index is
    /// checked right before its own removal; on failure the removals already
    /// made stay applied.
    pub fn delete(&self, indices: impl IntoIterator<Item = usize>) -> CollectionResult<&Self> {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        indices.sort_unstable_by(|a, b| b.cmp(a));
        let mut items = self.write()?;
        for (applied, index) in indices.into_iter().enumerate() {
            if index >= items.len() {
                tracing::debug!(index, applied, "list delete aborted mid-batch");
                return Err(out_of_range(index, items.len()));
            }
            items.remove(index);
        }
        drop(items);
        Ok(self)
    }

    /// Remove and return the last element
    pub fn pop(&self) -> CollectionResult<T> {
        self.write()?.pop().ok_or(CollectionError::Empty)
    }

    /// Remove all elements
    pub fn clear(&self) -> CollectionResult<&Self> {
        let mut items = self.write()?;
        tracing::trace!(count = items.len(), "clearing list");
        items.clear();
        drop(items);
        Ok(self)
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> CollectionResult<T> {
        let items = self.read()?;
        items
            .get(index)
            .cloned()
            .ok_or_else(|| out_of_range(index, items.len()))
    }

    /// Same length and pairwise equal elements, in order.
    ///
    /// Nested lists and dictionaries compare by identity.
    pub fn equals(&self, other: &Self) -> CollectionResult<bool> {
        let items = self.read()?;
        let others = other.read()?;
        Ok(items.as_slice() == others.as_slice())
    }

    /// New list with the elements of `self` followed by those of `other`
    pub fn concat(&self, other: &Self) -> CollectionResult<Self> {
        let items = self.read()?;
        let others = other.read()?;
        Ok(Self::from_vec(
            items.iter().chain(others.iter()).cloned().collect(),
        ))
    }

    /// New list with the elements in `[start, end)`.
    ///
    /// `end <= 0` counts from the back: `sub_list(0, -2)` drops the last two
    /// elements and `sub_list(0, 0)` copies the whole list.
    pub fn sub_list(&self, start: isize, end: isize) -> CollectionResult<Self> {
        let items = self.read()?;
        let len = items.len() as isize;
        let resolved_end = if end <= 0 { len + end } else { end };
        if start < 0 || resolved_end > len || start > resolved_end {
            return Err(CollectionError::InvalidRange {
                start: start as i64,
                end: end as i64,
                len: items.len(),
            });
        }
        Ok(Self::from_vec(
            items[start as usize..resolved_end as usize].to_vec(),
        ))
    }

    pub fn contains(&self, value: &T) -> CollectionResult<bool> {
        Ok(self.read()?.contains(value))
    }

    /// Position of the first element equal to `value`, `None` if absent
    pub fn index_of(&self, value: &T) -> CollectionResult<Option<usize>> {
        Ok(self.read()?.iter().position(|item| item == value))
    }

    /// Sort ascending in place. Numbers sort by value, strings lexicographically.
    pub fn sort(&self) -> CollectionResult<&Self> {
        let mut items = self.write()?;
        require_kind::<T>("sort", ElementKind::is_sortable)?;
        tracing::trace!(count = items.len(), "sorting list");
        items.sort_by(|a, b| a.sort_cmp(b));
        drop(items);
        Ok(self)
    }

    /// Reverse element order in place
    pub fn reverse(&self) -> CollectionResult<&Self> {
        let mut items = self.write()?;
        tracing::trace!(count = items.len(), "reversing list");
        items.reverse();
        drop(items);
        Ok(self)
    }

    /// Call `function` on every element in order
    pub fn for_each(&self, mut function: impl FnMut(&T)) -> CollectionResult<&Self> {
        for item in self.to_vec()? {
            function(&item);
        }
        Ok(self)
    }

    /// New list with `function` applied to every element
    ///
    /// Use [`map_list`](crate::map_list) when the element type changes.
    pub fn map(&self, mut function: impl FnMut(&T) -> T) -> CollectionResult<Self> {
        Ok(self.to_vec()?.iter().map(&mut function).collect())
    }

    /// Left fold starting from `initial`
    pub fn reduce<A>(&self, initial: A, mut function: impl FnMut(A, &T) -> A) -> CollectionResult<A> {
        Ok(self
            .to_vec()?
            .iter()
            .fold(initial, |acc, item| function(acc, item)))
    }

    /// New list with the elements satisfying `predicate`, order preserved
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> CollectionResult<Self> {
        Ok(self
            .to_vec()?
            .into_iter()
            .filter(|item| predicate(item))
            .collect())
    }

    /// Sum of the elements; 0 for an empty list
    pub fn sum(&self) -> CollectionResult<f64> {
        Ok(self.numbers("sum")?.iter().sum())
    }

    /// Product of the elements; 0 for an empty list
    pub fn prod(&self) -> CollectionResult<f64> {
        let numbers = self.numbers("prod")?;
        if numbers.is_empty() {
            return Ok(0.0);
        }
        Ok(numbers.iter().product())
    }

    /// Arithmetic mean; 0 for an empty list
    pub fn avg(&self) -> CollectionResult<f64> {
        let numbers = self.numbers("avg")?;
        if numbers.is_empty() {
            return Ok(0.0);
        }
        Ok(numbers.iter().sum::<f64>() / numbers.len() as f64)
    }

    /// Smallest element; 0 for an empty list
    pub fn min(&self) -> CollectionResult<f64> {
        let numbers = self.numbers("min")?;
        Ok(numbers.into_iter().reduce(f64::min).unwrap_or(0.0))
    }

    /// Largest element; 0 for an empty list
    pub fn max(&self) -> CollectionResult<f64> {
        let numbers = self.numbers("max")?;
        Ok(numbers.into_iter().reduce(f64::max).unwrap_or(0.0))
    }

    fn numbers(&self, operation: &'static str) -> CollectionResult<Vec<f64>> {
        let items = self.read()?;
        require_kind::<T>(operation, ElementKind::is_numeric)?;
        Ok(items.iter().filter_map(|item| item.to_f64()).collect())
    }

    /// Shallow copy with independent top-level storage
    pub fn duplicate(&self) -> CollectionResult<Self> {
        Ok(Self::from_vec(self.to_vec()?))
    }

    /// Copy the elements out into a vector
    pub fn to_vec(&self) -> CollectionResult<Vec<T>> {
        Ok(self.read()?.clone())
    }

    /// Take the backing vector, copying only if other handles share it
    pub fn into_vec(self) -> CollectionResult<Vec<T>> {
        let cell = self.inner.ok_or_else(CollectionError::uninit_list)?;
        Ok(Rc::try_unwrap(cell)
            .map(RefCell::into_inner)
            .unwrap_or_else(|shared| {
                let items = shared.borrow().clone();
                items
            }))
    }

    /// Serialize with explicit options
    pub fn to_string_with(&self, config: &SerializeConfig) -> String {
        let mut out = String::new();
        self.write_json(&mut out, config);
        out
    }
}

fn out_of_range(index: usize, len: usize) -> CollectionError {
    CollectionError::IndexOutOfRange {
        index: index as i64,
        len,
    }
}

fn require_kind<T: Element>(
    operation: &'static str,
    allowed: impl Fn(ElementKind) -> bool,
) -> CollectionResult<()> {
    if allowed(T::KIND) {
        Ok(())
    } else {
        Err(CollectionError::UnsupportedType {
            operation,
            kind: T::KIND,
        })
    }
}

impl<T> Clone for List<T> {
    /// Shares storage with `self`; see [`List::duplicate`] for a copy
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for List<T> {}

impl<T> Default for List<T> {
    /// The uninitialized handle
    fn default() -> Self {
        Self::uninit()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(cell) => f.debug_tuple("List").field(&*cell.borrow()).finish(),
            None => f.write_str("List(<uninitialized>)"),
        }
    }
}

impl<T: Element> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&SerializeConfig::default()))
    }
}

impl<T: Element> Element for List<T> {
    const KIND: ElementKind = ElementKind::Container;

    fn write_json(&self, out: &mut String, config: &SerializeConfig) {
        match self.read() {
            Ok(items) => write_array(items.iter(), out, config),
            Err(_) => out.push_str("null"),
        }
    }
}

impl<T: Serialize> Serialize for List<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.read() {
            Ok(items) => serializer.collect_seq(items.iter()),
            Err(e) => Err(S::Error::custom(e)),
        }
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}
