//! Application storage roots

use crate::{ConfigStore, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application name used when none is given.
pub const DEFAULT_APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Storage roots of the running application.
///
/// `documents_dir` holds persistent user data, `temp_dir` holds cache data
/// the platform may purge, and `resources_dir` holds bundled read-only
/// resources such as images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppContext {
    pub documents_dir: PathBuf,
    pub temp_dir: PathBuf,
    pub resources_dir: PathBuf,
}

impl Default for AppContext {
    fn default() -> Self {
        Self::for_app(DEFAULT_APP_NAME)
    }
}

impl AppContext {
    /// Derive the platform's data and cache roots for `app_name`.
    ///
    /// Falls back to the system temp directory when the platform reports no
    /// data or cache directory.
    pub fn for_app(app_name: &str) -> Self {
        let fallback = std::env::temp_dir();
        let data = dirs::data_dir().unwrap_or_else(|| fallback.clone()).join(app_name);
        let cache = dirs::cache_dir().unwrap_or(fallback).join(app_name);
        Self {
            resources_dir: data.join("resources"),
            documents_dir: data,
            temp_dir: cache,
        }
    }

    /// Place all roots under a single base directory.
    pub fn rooted_at(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            documents_dir: base.join("files"),
            temp_dir: base.join("cache"),
            resources_dir: base.join("resources"),
        }
    }

    /// Load a context from a TOML, JSON or YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        ConfigStore::new().load(path.as_ref())
    }

    /// Save this context, format chosen by file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        ConfigStore::new().save(path.as_ref(), self)
    }
}
