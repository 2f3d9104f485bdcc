//! Class map: a table of style keys to class names or aliases.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::StyleValidationError;
use super::key::StyleKey;
use super::resolver::StyleResolver;
use super::value::ClassValue;

/// A lookup table from style keys to class names.
///
/// Built once with the consuming [`add`](ClassMap::add) builder, then shared
/// read-only. Entries may alias other keys; lookups follow alias chains to a
/// concrete class. A dangling alias or a cycle resolves to `None`, so a broken
/// map degrades to unstyled output. Use [`validate`](ClassMap::validate) to
/// surface those problems as errors instead.
///
/// # Example
///
/// ```rust
/// use base_template::{ClassMap, ClassValue, StyleKey, StyleResolver};
///
/// let classes = ClassMap::new()
///     .add("surface", "relative flex flex-col bg-gray-50")
///     .add("container", ClassValue::alias("surface"));
///
/// assert_eq!(
///     classes.resolve(&StyleKey::from("container")),
///     Some("relative flex flex-col bg-gray-50"),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassMap {
    entries: BTreeMap<String, ClassValue>,
}

impl ClassMap {
    /// Creates an empty class map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the updated map for chaining.
    ///
    /// Re-adding a key replaces the previous entry.
    pub fn add(mut self, key: impl Into<String>, value: impl Into<ClassValue>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Returns `true` if `key` has an entry (concrete or alias).
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the raw entry for `key` without following aliases.
    pub fn get(&self, key: &str) -> Option<&ClassValue> {
        self.entries.get(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Follows aliases from `key` to a concrete class.
    ///
    /// An acyclic chain visits each entry at most once, so a walk longer than
    /// the map means a cycle.
    fn lookup(&self, key: &str) -> Option<&str> {
        let mut current = key;
        for _ in 0..self.entries.len() {
            match self.entries.get(current)? {
                ClassValue::Class(class) => return Some(class),
                ClassValue::Alias { alias } => current = alias,
            }
        }
        None
    }

    /// Checks that every alias reaches a concrete class.
    ///
    /// Rendering never calls this; it is the opt-in check for callers that
    /// want a broken map treated as a configuration error.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in key order.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        for (key, value) in &self.entries {
            if value.alias_target().is_none() {
                continue;
            }
            let mut path = vec![key.clone()];
            let mut current = key.as_str();
            while let Some(target) = self.entries.get(current).and_then(ClassValue::alias_target) {
                if path.iter().any(|seen| seen == target) {
                    path.push(target.to_string());
                    return Err(StyleValidationError::CycleDetected { path });
                }
                if !self.entries.contains_key(target) {
                    return Err(StyleValidationError::UnresolvedAlias {
                        from: current.to_string(),
                        to: target.to_string(),
                    });
                }
                path.push(target.to_string());
                current = target;
            }
        }
        Ok(())
    }
}

impl StyleResolver for ClassMap {
    fn resolve(&self, key: &StyleKey) -> Option<&str> {
        self.lookup(key.as_str())
    }
}

impl<K: Into<String>, V: Into<ClassValue>> FromIterator<(K, V)> for ClassMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
