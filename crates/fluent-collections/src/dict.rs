//! Dict - mutable unordered key-value mapping
//!
//! `Dict<K, V>` is a handle to a hash map of fields with fluent in-place
//! mutation, functional combinators and [`List`] snapshots of its keys and
//! values. Iteration order is unspecified.
//!
//! As with [`List`], `Clone` on the handle shares storage, `==` compares
//! identity, and [`Dict::duplicate`] makes a shallow copy.

use crate::config::SerializeConfig;
use crate::element::{Element, ElementKind};
use crate::error::{CollectionError, CollectionResult};
use crate::list::List;
use crate::serialize::{serialize, write_object};
use serde::ser::{Error as _, Serialize, Serializer};
use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

/// Mutable unordered mapping from `K` to `V`
pub struct Dict<K, V> {
    inner: Option<Rc<RefCell<HashMap<K, V>>>>,
}

impl<K, V> Dict<K, V> {
    /// Create a new empty dictionary
    pub fn new() -> Self {
        Self::from_map(HashMap::new())
    }

    /// A handle with no backing store
    pub const fn uninit() -> Self {
        Self { inner: None }
    }

    /// Wrap an existing map; the dictionary takes ownership of it
    pub fn from_map(map: HashMap<K, V>) -> Self {
        Self {
            inner: Some(Rc::new(RefCell::new(map))),
        }
    }

    /// Wrap a map that may be absent; `None` gives an uninitialized dictionary
    pub fn from_option(map: Option<HashMap<K, V>>) -> Self {
        match map {
            Some(map) => Self::from_map(map),
            None => Self::uninit(),
        }
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

    fn read(&self) -> CollectionResult<Ref<'_, HashMap<K, V>>> {
        self.inner
            .as_ref()
            .map(|cell| cell.borrow())
            .ok_or_else(CollectionError::uninit_dict)
    }

    fn write(&self) -> CollectionResult<RefMut<'_, HashMap<K, V>>> {
        self.inner
            .as_ref()
            .map(|cell| cell.borrow_mut())
            .ok_or_else(CollectionError::uninit_dict)
    }

    /// Number of fields
    pub fn count(&self) -> CollectionResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> CollectionResult<bool> {
        Ok(self.read()?.is_empty())
    }
}

impl<K, V> Dict<K, V>
where
    K: Element + Eq + Hash,
    V: Element,
{
    /// Insert or overwrite the field under `key`
    pub fn set(&self, key: K, value: V) -> CollectionResult<&Self> {
        self.write()?.insert(key, value);
        Ok(self)
    }

    /// Remove the fields under `keys`, one after another.
    ///
    /// Fails on the first key that does not exist; fields removed before it
    /// stay removed.
    pub fn unset(&self, keys: impl IntoIterator<Item = K>) -> CollectionResult<&Self> {
        let keys: Vec<K> = keys.into_iter().collect();
        let mut fields = self.write()?;
        for (applied, key) in keys.iter().enumerate() {
            if fields.remove(key).is_none() {
                tracing::debug!(applied, "dictionary unset aborted mid-batch");
                return Err(missing_key(key));
            }
        }
        drop(fields);
        Ok(self)
    }

    /// Remove all fields
    pub fn clear(&self) -> CollectionResult<&Self> {
        let mut fields = self.write()?;
        tracing::trace!(count = fields.len(), "clearing dictionary");
        fields.clear();
        drop(fields);
        Ok(self)
    }

    /// Value under `key`
    pub fn get(&self, key: &K) -> CollectionResult<V> {
        self.read()?
            .get(key)
            .cloned()
            .ok_or_else(|| missing_key(key))
    }

    pub fn key_exists(&self, key: &K) -> CollectionResult<bool> {
        Ok(self.read()?.contains_key(key))
    }

    /// Same field count, and every key of `self` maps to an equal value in
    /// `other`. Keys present only in `other` are not looked at.
    ///
    /// Nested lists and dictionaries compare by identity.
    pub fn equals(&self, other: &Self) -> CollectionResult<bool> {
        let fields = self.read()?;
        let others = other.read()?;
        if fields.len() != others.len() {
            return Ok(false);
        }
        Ok(fields
            .iter()
            .all(|(key, value)| others.get(key) == Some(value)))
    }

    /// New dictionary with the fields of `self` overwritten by those of `other`
    pub fn merge(&self, other: &Self) -> CollectionResult<Self> {
        let mut merged = self.to_map()?;
        merged.extend(other.to_map()?);
        Ok(Self::from_map(merged))
    }

    /// New dictionary restricted to `keys`; every key must exist
    pub fn pluck(&self, keys: impl IntoIterator<Item = K>) -> CollectionResult<Self> {
        let keys: Vec<K> = keys.into_iter().collect();
        let fields = self.read()?;
        let mut plucked = HashMap::with_capacity(keys.len());
        for key in keys {
            let value = fields.get(&key).cloned().ok_or_else(|| missing_key(&key))?;
            plucked.insert(key, value);
        }
        Ok(Self::from_map(plucked))
    }

    /// True if any field holds `value`
    pub fn contains(&self, value: &V) -> CollectionResult<bool> {
        Ok(self.read()?.values().any(|item| item == value))
    }

    /// A key whose field holds `value`; which one is unspecified when several do
    pub fn key_of(&self, value: &V) -> CollectionResult<K> {
        self.read()?
            .iter()
            .find(|(_, item)| *item == value)
            .map(|(key, _)| key.clone())
            .ok_or_else(|| CollectionError::ValueNotFound {
                value: serialize(value),
            })
    }

    /// Snapshot of the keys
    pub fn keys(&self) -> CollectionResult<List<K>> {
        Ok(self.read()?.keys().cloned().collect())
    }

    /// Snapshot of the values
    pub fn values(&self) -> CollectionResult<List<V>> {
        Ok(self.read()?.values().cloned().collect())
    }

    /// Call `function` on every field
    pub fn for_each(&self, mut function: impl FnMut(&K, &V)) -> CollectionResult<&Self> {
        for (key, value) in self.to_map()? {
            function(&key, &value);
        }
        Ok(self)
    }

    /// New dictionary with the same keys and values replaced by `function`
    ///
    /// Use [`map_dict`](crate::map_dict) when the value type changes.
    pub fn map(&self, mut function: impl FnMut(&K, &V) -> V) -> CollectionResult<Self> {
        Ok(self
            .to_map()?
            .into_iter()
            .map(|(key, value)| {
                let mapped = function(&key, &value);
                (key, mapped)
            })
            .collect())
    }

    /// Shallow copy with independent top-level storage
    pub fn duplicate(&self) -> CollectionResult<Self> {
        Ok(Self::from_map(self.to_map()?))
    }

    /// Copy the fields out into a map
    pub fn to_map(&self) -> CollectionResult<HashMap<K, V>> {
        Ok(self.read()?.clone())
    }

    /// Take the backing map, copying only if other handles share it
    pub fn into_map(self) -> CollectionResult<HashMap<K, V>> {
        let cell = self.inner.ok_or_else(CollectionError::uninit_dict)?;
        Ok(Rc::try_unwrap(cell)
            .map(RefCell::into_inner)
            .unwrap_or_else(|shared| {
                let fields = shared.borrow().clone();
                fields
            }))
    }

    /// Serialize with explicit options
    pub fn to_string_with(&self, config: &SerializeConfig) -> String {
        let mut out = String::new();
        self.write_json(&mut out, config);
        out
    }
}

fn missing_key<K: Element>(key: &K) -> CollectionError {
    CollectionError::KeyNotFound {
        key: serialize(key),
    }
}

impl<K, V> Clone for Dict<K, V> {
    /// Shares storage with `self`; see [`Dict::duplicate`] for a copy
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> PartialEq for Dict<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<K, V> Eq for Dict<K, V> {}

impl<K, V> Default for Dict<K, V> {
    /// The uninitialized handle
    fn default() -> Self {
        Self::uninit()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Dict<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(cell) => f.debug_tuple("Dict").field(&*cell.borrow()).finish(),
            None => f.write_str("Dict(<uninitialized>)"),
        }
    }
}

impl<K, V> fmt::Display for Dict<K, V>
where
    K: Element + Eq + Hash,
    V: Element,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&SerializeConfig::default()))
    }
}

impl<K, V> Element for Dict<K, V>
where
    K: Element + Eq + Hash,
    V: Element,
{
    const KIND: ElementKind = ElementKind::Container;

    fn write_json(&self, out: &mut String, config: &SerializeConfig) {
        match self.read() {
            Ok(fields) => write_object(fields.iter(), out, config),
            Err(_) => out.push_str("null"),
        }
    }
}

impl<K: Serialize, V: Serialize> Serialize for Dict<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.read() {
            Ok(fields) => serializer.collect_map(fields.iter()),
            Err(e) => Err(S::Error::custom(e)),
        }
    }
}

impl<K, V> From<HashMap<K, V>> for Dict<K, V> {
    fn from(map: HashMap<K, V>) -> Self {
        Self::from_map(map)
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Dict<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(iter.into_iter().collect())
    }
}
