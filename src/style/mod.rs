//! Style keys and their resolution to class names.
//!
//! This module provides the styling primitives used by components:
//!
//! - [`StyleKey`]: The logical name of a visual style, fixed by a component
//! - [`StyleResolver`]: Looks a key up and yields a class name, if any
//! - [`ClassMap`]: The standard resolver, a table of keys to classes or aliases
//! - [`ClassValue`]: A class map entry, either a concrete class or an alias
//! - [`ResolvedClass`]: A class name resolved ahead of time
//!
//! Class maps can alias one key to another, so a component-level key such as
//! `container` can point at a shared layout class without repeating it.

mod config;
mod error;
mod key;
mod registry;
mod resolver;
mod value;

pub use error::{ClassMapError, StyleValidationError};
pub use key::StyleKey;
pub use registry::ClassMap;
pub use resolver::{ResolvedClass, StyleResolver};
pub use value::ClassValue;
