//! Class map entry values.

use serde::{Deserialize, Serialize};

/// A class map entry: either a concrete class name or an alias to another key.
///
/// Plain strings convert into [`ClassValue::Class`]. Aliases must be spelled
/// out with [`ClassValue::alias`] (or `{ alias: <key> }` in configuration),
/// since a class name and a key are both just strings.
///
/// # Example
///
/// ```rust
/// use base_template::ClassValue;
///
/// let concrete: ClassValue = "flex flex-col".into();
/// assert_eq!(concrete, ClassValue::Class("flex flex-col".into()));
///
/// let alias = ClassValue::alias("surface");
/// assert_eq!(alias.alias_target(), Some("surface"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassValue {
    /// A final class-name string, used verbatim in the `class` attribute.
    Class(String),
    /// Refers to another key in the same map.
    Alias {
        /// The key this entry resolves through.
        alias: String,
    },
}

impl ClassValue {
    /// Creates a concrete class entry.
    pub fn class(name: impl Into<String>) -> Self {
        ClassValue::Class(name.into())
    }

    /// Creates an alias entry pointing at `target`.
    pub fn alias(target: impl Into<String>) -> Self {
        ClassValue::Alias {
            alias: target.into(),
        }
    }

    /// Returns the alias target, or `None` for concrete classes.
    pub fn alias_target(&self) -> Option<&str> {
        match self {
            ClassValue::Class(_) => None,
            ClassValue::Alias { alias } => Some(alias),
        }
    }
}

impl From<&str> for ClassValue {
    fn from(name: &str) -> Self {
        ClassValue::Class(name.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(name: String) -> Self {
        ClassValue::Class(name)
    }
}
