//! Logical style identifiers.

use std::borrow::{Borrow, Cow};
use std::fmt;

/// The name of a visual style, as declared by a component.
///
/// Keys are opaque: nothing interprets their contents beyond equality.
/// Components hold theirs as a `'static` constant, so constructing one
/// with [`StyleKey::from_static`] does not allocate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StyleKey(Cow<'static, str>);

impl StyleKey {
    /// Creates a key from a string literal.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a key from any string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StyleKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StyleKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for StyleKey {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for StyleKey {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
