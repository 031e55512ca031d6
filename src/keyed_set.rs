//! Hash-keyed collections of state payloads.
//!
//! The engine uses two of these: the *visited set* of already-expanded states
//! and the *goal set* of terminal state descriptors. Both derive keys the
//! same way, from a shared [`KeySpec`].
//!
//! Storage is a `BTreeMap` (not a `HashMap`) so `keys()`/`values()` iterate
//! deterministically.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{Result, SearchError};

/// How a deduplication key is derived from a state payload.
///
/// Either a named field read off the serialized state (failing if that field
/// is absent or null), or a caller-supplied function over the state.
pub enum KeySpec<S> {
    /// Read the named field from the `serde_json` image of the state.
    Field(String),
    /// Invoke the function on the state.
    Func(Box<dyn Fn(&S) -> String + Send + Sync>),
}

impl<S> fmt::Debug for KeySpec<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Self::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl<S: Serialize> KeySpec<S> {
    /// Derive the key for one state.
    ///
    /// # Errors
    ///
    /// [`SearchError::Configuration`] if the state cannot be serialized or
    /// the configured field is missing/null on it.
    pub fn key_of(&self, item: &S) -> Result<String> {
        match self {
            Self::Field(name) => {
                let value = serde_json::to_value(item).map_err(|e| {
                    SearchError::config(format!("state is not serializable for keying: {e}"))
                })?;
                match value.get(name) {
                    None | Some(serde_json::Value::Null) => Err(SearchError::config(format!(
                        "key field '{name}' is undefined on state {value}"
                    ))),
                    Some(serde_json::Value::String(s)) => Ok(s.clone()),
                    Some(other) => Ok(other.to_string()),
                }
            }
            Self::Func(f) => Ok(f(item)),
        }
    }
}

/// A mapping from derived key to stored state payload.
///
/// Insertion is first-writer-wins: adding a value whose key already exists is
/// a no-op that reports "not added"; it never overwrites the stored value.
#[derive(Debug)]
pub struct KeyedSet<S> {
    items: BTreeMap<String, S>,
    key: Arc<KeySpec<S>>,
}

impl<S: Serialize> KeyedSet<S> {
    /// Create an empty set deriving keys with `key`.
    #[must_use]
    pub fn new(key: Arc<KeySpec<S>>) -> Self {
        Self {
            items: BTreeMap::new(),
            key,
        }
    }

    /// Insert a value, returning `true` if it was newly added.
    ///
    /// # Errors
    ///
    /// Fails if the key cannot be derived from `value`.
    pub fn add(&mut self, value: S) -> Result<bool> {
        let key = self.key.key_of(&value)?;
        if self.items.contains_key(&key) {
            return Ok(false);
        }
        self.items.insert(key, value);
        Ok(true)
    }

    /// Insert many values, returning one added/ignored flag per value.
    ///
    /// # Errors
    ///
    /// Fails on the first value whose key cannot be derived.
    pub fn add_all(&mut self, values: impl IntoIterator<Item = S>) -> Result<Vec<bool>> {
        values.into_iter().map(|v| self.add(v)).collect()
    }

    /// Whether a value with the same derived key is present.
    ///
    /// # Errors
    ///
    /// Fails if the key cannot be derived from `value`.
    pub fn has(&self, value: &S) -> Result<bool> {
        Ok(self.items.contains_key(&self.key.key_of(value)?))
    }

    /// Whether the given pre-derived key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// The stored value for a key, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&S> {
        self.items.get(key)
    }

    /// Derive the key this set would use for `value`.
    ///
    /// # Errors
    ///
    /// Fails if the key cannot be derived.
    pub fn key_of(&self, value: &S) -> Result<String> {
        self.key.key_of(value)
    }

    /// Remove the entry matching `value`'s key. Returns whether one existed.
    ///
    /// # Errors
    ///
    /// Fails if the key cannot be derived from `value`.
    pub fn remove(&mut self, value: &S) -> Result<bool> {
        Ok(self.items.remove(&self.key.key_of(value)?).is_some())
    }

    /// Remove the entry for a pre-derived key. Returns whether one existed.
    pub fn remove_key(&mut self, key: &str) -> bool {
        self.items.remove(key).is_some()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every entry, keeping the key specifier.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Stored keys in deterministic (sorted) order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Stored values, ordered by key.
    pub fn values(&self) -> impl Iterator<Item = &S> {
        self.items.values()
    }
}

impl<S: Serialize + Clone> KeyedSet<S> {
    /// A new set (sharing this one's key specifier) holding the values that
    /// satisfy `predicate`.
    #[must_use]
    pub fn filter(&self, predicate: impl Fn(&S) -> bool) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|(_, v)| predicate(v))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            key: Arc::clone(&self.key),
        }
    }
}
