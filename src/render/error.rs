//! HTML serialization errors.

use thiserror::Error;

/// Error returned when a node tree cannot be serialized.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A tag or attribute name contains characters that are not allowed in markup.
    #[error("invalid markup name \"{name}\"")]
    InvalidName { name: String },

    /// The underlying template failed.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}
