//! Descriptions of files and folders found on disk

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A file or folder on the file system.
///
/// Constructed per call from the native path; never persisted. `extension`
/// is only present for file entities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityInfo {
    /// Absolute path of the entity
    pub path: String,
    /// Base name (last path component)
    pub name: String,
    /// Extension including the leading dot, or empty if there is none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl EntityInfo {
    /// Describe a file entity, deriving its extension from the path.
    pub fn file(path: &Path) -> Self {
        let mut info = Self::folder(path);
        info.extension = Some(get_file_extension(&info.path));
        info
    }

    /// Describe a folder entity. Folders carry no extension.
    pub fn folder(path: &Path) -> Self {
        let absolute = crate::path::to_absolute(path);
        Self {
            name: base_name(&absolute),
            path: crate::path::display_string(&absolute),
            extension: None,
        }
    }

    /// Whether this entity was described as a file.
    pub fn is_file(&self) -> bool {
        self.extension.is_some()
    }
}

/// Get the extension of the last path component, from its last dot on.
///
/// A hidden file keeps its whole name as the extension
/// (`/home/user/.profile` gives `.profile`). Empty when the name has no dot,
/// or when the path is nothing but a dot-leading name.
pub fn get_file_extension(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    let name = base_name(path);
    match name.rfind('.') {
        Some(0) if path.as_os_str().len() == name.len() => String::new(),
        Some(idx) => name[idx..].to_string(),
        None => String::new(),
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
