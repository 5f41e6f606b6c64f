//! Keyed entity registry.
//!
//! A [`Registry`] owns the canonical instances of one entity type. Adding
//! under an existing key replaces the stored item; iteration follows
//! insertion order so reports are stable across runs.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::types::{GamesError, GamesResult};

/// Unique-key to value store.
///
/// # Example
///
/// ```
/// use games_loader::Registry;
///
/// let mut registry = Registry::new("country");
/// registry.add_item("Australia".to_string(), "AUS");
///
/// assert_eq!(registry.find_item("Australia").unwrap(), &"AUS");
/// assert!(registry.find_item("Atlantis").is_err());
/// ```
#[derive(Clone)]
pub struct Registry<K, V> {
    kind: &'static str,
    items: IndexMap<K, V>,
}

impl<K: Hash + Eq, V> Registry<K, V> {
    /// Creates an empty registry. `kind` names the entity in lookup errors.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            items: IndexMap::new(),
        }
    }

    /// Entity name used in lookup errors.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Adds an item, replacing and returning any item already under `key`.
    ///
    /// A replaced item keeps its original position.
    pub fn add_item(&mut self, key: K, item: V) -> Option<V> {
        self.items.insert(key, item)
    }

    /// Returns the item stored under `key`.
    ///
    /// # Errors
    /// Returns [`GamesError::KeyNotFound`] if no item is stored under `key`.
    pub fn find_item<Q>(&self, key: &Q) -> GamesResult<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        self.items.get(key).ok_or_else(|| self.not_found(key))
    }

    /// Returns the item stored under `key` for mutation.
    pub fn find_item_mut<Q>(&mut self, key: &Q) -> GamesResult<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let kind = self.kind;
        self.items
            .get_mut(key)
            .ok_or_else(|| GamesError::KeyNotFound {
                kind,
                key: key.to_string(),
            })
    }

    /// Returns the item stored under `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.get(key)
    }

    /// Removes and returns the item stored under `key`, keeping the order of
    /// the remaining items.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.shift_remove(key)
    }

    /// Returns true if an item is stored under `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.contains_key(key)
    }

    /// All items, in insertion order.
    pub fn get_items(&self) -> Vec<&V> {
        self.items.values().collect()
    }

    /// Iterates over keys and items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.items.iter()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.items.keys()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the registry holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn not_found<Q: fmt::Display + ?Sized>(&self, key: &Q) -> GamesError {
        GamesError::KeyNotFound {
            kind: self.kind,
            key: key.to_string(),
        }
    }
}

impl<K, V> fmt::Debug for Registry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kind", &self.kind)
            .field("items", &self.items.len())
            .finish()
    }
}
