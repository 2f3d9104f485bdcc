//! The style lookup seam between components and class tables.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use super::key::StyleKey;

/// Maps a [`StyleKey`] to the class name that should appear in markup.
///
/// Returning `None` means the key is not registered. Callers must treat that
/// as "render unstyled", never as a failure.
///
/// Resolvers are read-only once built, so a single instance can serve any
/// number of concurrent renders through `&R` or `Arc<R>`.
pub trait StyleResolver {
    /// Looks up the class name registered for `key`.
    fn resolve(&self, key: &StyleKey) -> Option<&str>;
}

impl<R: StyleResolver + ?Sized> StyleResolver for &R {
    fn resolve(&self, key: &StyleKey) -> Option<&str> {
        (**self).resolve(key)
    }
}

impl<R: StyleResolver + ?Sized> StyleResolver for Box<R> {
    fn resolve(&self, key: &StyleKey) -> Option<&str> {
        (**self).resolve(key)
    }
}

impl<R: StyleResolver + ?Sized> StyleResolver for Arc<R> {
    fn resolve(&self, key: &StyleKey) -> Option<&str> {
        (**self).resolve(key)
    }
}

impl StyleResolver for HashMap<String, String> {
    fn resolve(&self, key: &StyleKey) -> Option<&str> {
        self.get(key.as_str()).map(String::as_str)
    }
}

impl StyleResolver for BTreeMap<String, String> {
    fn resolve(&self, key: &StyleKey) -> Option<&str> {
        self.get(key.as_str()).map(String::as_str)
    }
}

/// A class name resolved ahead of time, independent of the key.
///
/// Useful when the host has already performed the lookup and only wants the
/// component to place the result.
///
/// # Example
///
/// ```rust
/// use base_template::{BaseTemplate, ResolvedClass, TemplateInput};
///
/// let template = BaseTemplate::new(ResolvedClass::new("card"));
/// let node = template.render(&TemplateInput::new("x"));
/// assert_eq!(node.class(), Some("card"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedClass(Option<String>);

impl ResolvedClass {
    /// Wraps a known class name.
    pub fn new(class: impl Into<String>) -> Self {
        Self(Some(class.into()))
    }

    /// A resolution that found nothing.
    pub fn none() -> Self {
        Self(None)
    }
}

impl From<Option<String>> for ResolvedClass {
    fn from(class: Option<String>) -> Self {
        Self(class)
    }
}

impl StyleResolver for ResolvedClass {
    fn resolve(&self, _key: &StyleKey) -> Option<&str> {
        self.0.as_deref()
    }
}
