//! Format-agnostic configuration loading and saving

use crate::{Error, Result};
use serde::{Serialize, de::DeserializeOwned};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and handles
/// serialization/deserialization transparently.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let parse_error = |format: &str, message: String| Error::ConfigParse {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        };

        match extension_of(path).as_str() {
            "toml" => toml::from_str(&content).map_err(|e| parse_error("TOML", e.to_string())),
            "json" => serde_json::from_str(&content).map_err(|e| parse_error("JSON", e.to_string())),
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| parse_error("YAML", e.to_string()))
            }
            other => Err(Error::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }

    /// Save configuration to a file.
    ///
    /// Format is determined from file extension. The content is written to a
    /// sibling temp file first and renamed into place.
    pub fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let serialize_error = |format: &str, message: String| Error::ConfigSerialize {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        };

        let content = match extension_of(path).as_str() {
            "toml" => {
                toml::to_string_pretty(value).map_err(|e| serialize_error("TOML", e.to_string()))?
            }
            "json" => serde_json::to_string_pretty(value)
                .map_err(|e| serialize_error("JSON", e.to_string()))?,
            "yaml" | "yml" => {
                serde_yaml::to_string(value).map_err(|e| serialize_error("YAML", e.to_string()))?
            }
            other => {
                return Err(Error::UnsupportedFormat {
                    extension: other.to_string(),
                });
            }
        };

        tracing::debug!(path = %path.display(), "Saving config");
        write_replacing(path, content.as_bytes())
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

fn write_replacing(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory keeps the rename on one file system
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = fs::File::create(&temp_path).map_err(|e| Error::io(&temp_path, e))?;
    temp_file
        .write_all(content)
        .and_then(|_| temp_file.sync_all())
        .map_err(|e| Error::io(&temp_path, e))?;
    drop(temp_file);

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppContext;
    use tempfile::tempdir;

    #[test]
    fn toml_round_trip_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("context.toml");
        let ctx = AppContext::rooted_at("/srv/app");

        ConfigStore::new().save(&path, &ctx).unwrap();
        let loaded: AppContext = ConfigStore::new().load(&path).unwrap();

        assert_eq!(loaded, ctx);
        let leftovers = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("context.ini");
        let result = ConfigStore::new().save(&path, &AppContext::rooted_at("/x"));
        assert!(matches!(result, Err(Error::UnsupportedFormat { extension }) if extension == "ini"));
    }

    #[test]
    fn malformed_json_reports_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("context.json");
        fs::write(&path, "{ not json").unwrap();

        let result: Result<AppContext> = ConfigStore::new().load(&path);
        assert!(matches!(result, Err(Error::ConfigParse { format, .. }) if format == "JSON"));
    }
}
