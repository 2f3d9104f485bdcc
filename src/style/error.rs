//! Class map validation and loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when class map validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleValidationError {
    /// An alias references a key that doesn't exist
    #[error("style '{from}' aliases non-existent style '{to}'")]
    UnresolvedAlias { from: String, to: String },
    /// A cycle was detected in alias resolution
    #[error("cycle detected in style aliases: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}

/// Error returned when a class map cannot be loaded from configuration.
#[derive(Debug, Error)]
pub enum ClassMapError {
    /// The file could not be read.
    #[error("failed to read class map \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid YAML class map.
    #[error("invalid YAML class map: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document is not a valid JSON class map.
    #[error("invalid JSON class map: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension does not name a supported format.
    #[error("unsupported class map format \"{}\" (expected .yaml, .yml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },
}
