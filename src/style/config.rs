//! Loading class maps from YAML and JSON documents.
//!
//! A class map document is a flat mapping. Each value is either a class
//! string or an `alias` record:
//!
//! ```yaml
//! surface: "relative flex min-h-screen flex-col justify-center"
//! container:
//!   alias: surface
//! ```

use std::fs;
use std::path::Path;

use super::error::ClassMapError;
use super::registry::ClassMap;

impl ClassMap {
    /// Parses a class map from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ClassMapError::Yaml`] if the document is not a mapping of
    /// keys to class strings or alias records.
    pub fn from_yaml(source: &str) -> Result<Self, ClassMapError> {
        let map: ClassMap = serde_yaml::from_str(source)?;
        tracing::debug!(entries = map.len(), "loaded YAML class map");
        Ok(map)
    }

    /// Parses a class map from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClassMapError::Json`] if the document is not a mapping of
    /// keys to class strings or alias records.
    pub fn from_json(source: &str) -> Result<Self, ClassMapError> {
        let map: ClassMap = serde_json::from_str(source)?;
        tracing::debug!(entries = map.len(), "loaded JSON class map");
        Ok(map)
    }

    /// Reads a class map file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` are parsed as YAML, `.json` as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClassMapError::UnsupportedFormat`] for other extensions,
    /// [`ClassMapError::Io`] if the file cannot be read, or a parse error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClassMapError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ClassMapError> = match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(ClassMapError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = fs::read_to_string(path).map_err(|source| ClassMapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "reading class map file");
        parse(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{ClassValue, StyleKey, StyleResolver};
    use std::io::Write;

    #[test]
    fn test_from_yaml_concrete_and_alias() {
        let map = ClassMap::from_yaml(
            "surface: relative flex\ncontainer:\n  alias: surface\n",
        )
        .unwrap();
        assert_eq!(map.get("container"), Some(&ClassValue::alias("surface")));
        assert_eq!(
            map.resolve(&StyleKey::from("container")),
            Some("relative flex")
        );
    }

    #[test]
    fn test_from_json() {
        let map = ClassMap::from_json(r#"{"container": "layout-box"}"#).unwrap();
        assert_eq!(map.resolve(&StyleKey::from("container")), Some("layout-box"));
    }

    #[test]
    fn test_from_yaml_rejects_non_mapping() {
        let err = ClassMap::from_yaml("- a\n- b\n").unwrap_err();
        assert!(matches!(err, ClassMapError::Yaml(_)));
    }

    #[test]
    fn test_from_json_rejects_numbers() {
        let err = ClassMap::from_json(r#"{"container": 3}"#).unwrap_err();
        assert!(matches!(err, ClassMapError::Json(_)));
    }

    #[test]
    fn test_from_file_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "container: layout-box").unwrap();

        let map = ClassMap::from_file(file.path()).unwrap();
        assert_eq!(map.resolve(&StyleKey::from("container")), Some("layout-box"));
    }

    #[test]
    fn test_from_file_json() {
        let mut file = tempfile::Builder::new().suffix(".JSON").tempfile().unwrap();
        write!(file, r#"{{"container": {{"alias": "base"}}, "base": "b"}}"#).unwrap();

        let map = ClassMap::from_file(file.path()).unwrap();
        assert_eq!(map.resolve(&StyleKey::from("container")), Some("b"));
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let err = ClassMap::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ClassMapError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClassMap::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ClassMapError::Io { .. }));
    }
}
