//! File and folder operations
//!
//! [`FileSystemAccess`] forwards each call to the native file system and
//! translates failures into [`Error`]. Operations run to completion on the
//! calling thread; none are retried.

use crate::entity::EntityInfo;
use crate::remove::{delete_folder_content, remove_entry};
use crate::{AppContext, Error, Result, TextEncoding, path as paths};
use chrono::{DateTime, Utc};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;

/// Uniform access to the platform file system.
#[derive(Debug, Clone)]
pub struct FileSystemAccess {
    context: AppContext,
    path_separator: String,
}

impl Default for FileSystemAccess {
    fn default() -> Self {
        Self::new(AppContext::default())
    }
}

impl FileSystemAccess {
    pub fn new(context: AppContext) -> Self {
        Self {
            context,
            path_separator: paths::separator().to_string(),
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Last modification time of `path`.
    ///
    /// Errors are not reported: a missing or unreadable entry yields the
    /// Unix epoch.
    pub fn get_last_modified(&self, path: impl AsRef<Path>) -> DateTime<Utc> {
        let modified = fs::metadata(path.as_ref())
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        DateTime::<Utc>::from(modified)
    }

    /// Describe the folder containing `path`.
    pub fn get_parent(&self, path: impl AsRef<Path>) -> Result<EntityInfo> {
        let path = path.as_ref();
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| Error::NoParent {
                path: path.to_path_buf(),
            })?;
        Ok(EntityInfo::folder(parent))
    }

    /// Get the file at `path`, creating it when absent.
    ///
    /// Missing parent folders are not created.
    pub fn get_file(&self, path: impl AsRef<Path>) -> Result<EntityInfo> {
        let path = path.as_ref();
        self.ensure_entity(path, false)?;
        Ok(EntityInfo::file(path))
    }

    /// Get the folder at `path`, creating it and any missing ancestors.
    pub fn get_folder(&self, path: impl AsRef<Path>) -> Result<EntityInfo> {
        let path = path.as_ref();
        self.ensure_entity(path, true)?;
        Ok(EntityInfo::folder(path))
    }

    /// Visit the immediate children of a folder.
    ///
    /// Stops early when `visit` returns `false`. Entries come in native
    /// listing order.
    pub fn each_entity<F>(&self, path: impl AsRef<Path>, mut visit: F) -> Result<()>
    where
        F: FnMut(EntityInfo) -> bool,
    {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(Error::NoSuchFolder {
                path: path.to_path_buf(),
            });
        }

        let entries = fs::read_dir(path).map_err(|e| Error::io(path, e))?;
        for entry in entries {
            let child = entry.map_err(|e| Error::io(path, e))?.path();
            let info = if child.is_file() {
                EntityInfo::file(&child)
            } else {
                EntityInfo::folder(&child)
            };

            if !visit(info) {
                tracing::trace!(folder = %path.display(), "Enumeration stopped by visitor");
                break;
            }
        }

        Ok(())
    }

    /// Collect the immediate children of a folder.
    pub fn get_entities(&self, path: impl AsRef<Path>) -> Result<Vec<EntityInfo>> {
        let mut entities = Vec::new();
        self.each_entity(path, |info| {
            entities.push(info);
            true
        })?;
        Ok(entities)
    }

    pub fn file_exists(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref().is_file()
    }

    pub fn folder_exists(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref().is_dir()
    }

    /// Delete a plain file. Fails for folders.
    pub fn delete_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::NotAFile {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(path = %path.display(), "Deleting file");
        remove_entry(path, false)
    }

    /// Delete a folder and everything in it.
    ///
    /// The contents are always removed. When `is_known_empty` is set the
    /// caller vouches for the folder being empty and the folder itself is
    /// left in place.
    pub fn delete_folder(&self, path: impl AsRef<Path>, is_known_empty: bool) -> Result<()> {
        let path = path.as_ref();
        self.require_folder(path)?;

        tracing::debug!(path = %path.display(), is_known_empty, "Deleting folder");
        delete_folder_content(path)?;

        if is_known_empty {
            return Ok(());
        }
        remove_entry(path, true)
    }

    /// Delete everything inside a folder, keeping the folder.
    pub fn empty_folder(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.require_folder(path)?;

        tracing::debug!(path = %path.display(), "Emptying folder");
        delete_folder_content(path)
    }

    /// Rename or move an entity. Never overwrites an existing entity.
    pub fn rename(&self, path: impl AsRef<Path>, new_path: impl AsRef<Path>) -> Result<()> {
        let (path, new_path) = (path.as_ref(), new_path.as_ref());
        if !path.exists() {
            return Err(Error::SourceNotFound {
                path: path.to_path_buf(),
            });
        }
        if new_path.exists() {
            return Err(Error::AlreadyExists {
                path: new_path.to_path_buf(),
            });
        }

        tracing::debug!(from = %path.display(), to = %new_path.display(), "Renaming");
        fs::rename(path, new_path).map_err(|source| Error::RenameFailed {
            from: path.to_path_buf(),
            to: new_path.to_path_buf(),
            source,
        })
    }

    pub fn get_documents_folder_path(&self) -> String {
        root_path(&self.context.documents_dir)
    }

    pub fn get_temp_folder_path(&self) -> String {
        root_path(&self.context.temp_dir)
    }

    /// Read a whole text file, `encoding` defaulting to UTF-8.
    ///
    /// Line breaks (`\n`, `\r\n`, `\r`) come back as a single `\n`, and a
    /// trailing line break is not preserved.
    pub fn read_text(
        &self,
        path: impl AsRef<Path>,
        encoding: Option<TextEncoding>,
    ) -> Result<String> {
        let path = path.as_ref();
        let encoding = encoding.unwrap_or_default();
        tracing::trace!(path = %path.display(), %encoding, "Reading text");

        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        Ok(join_lines(&encoding.decode(&bytes)))
    }

    /// Write `content` in one shot, replacing any existing file.
    pub fn write_text(
        &self,
        path: impl AsRef<Path>,
        content: &str,
        encoding: Option<TextEncoding>,
    ) -> Result<()> {
        let path = path.as_ref();
        let encoding = encoding.unwrap_or_default();
        tracing::debug!(path = %path.display(), %encoding, "Writing text");

        fs::write(path, encoding.encode(content)).map_err(|e| Error::io(path, e))
    }

    pub fn get_path_separator(&self) -> &str {
        &self.path_separator
    }

    pub fn normalize_path(&self, path: &str) -> String {
        paths::normalize(path)
    }

    pub fn join_path(&self, left: &str, right: &str) -> String {
        paths::join(left, right)
    }

    pub fn join_paths<S: AsRef<str>>(&self, segments: &[S]) -> String {
        paths::join_all(segments)
    }

    fn require_folder(&self, path: &Path) -> Result<()> {
        if path.is_dir() {
            Ok(())
        } else {
            Err(Error::NotAFolder {
                path: path.to_path_buf(),
            })
        }
    }

    fn ensure_entity(&self, path: &Path, is_folder: bool) -> Result<()> {
        if path.exists() {
            return Ok(());
        }

        tracing::debug!(path = %path.display(), is_folder, "Creating entity");
        if is_folder {
            fs::create_dir_all(path).map_err(|e| Error::io(path, e))?;
        } else {
            match OpenOptions::new().write(true).create_new(true).open(path) {
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    return Err(Error::CreateFailed {
                        path: paths::to_absolute(path),
                    });
                }
                Err(e) => return Err(Error::io(path, e)),
            }
        }

        make_read_write(path);
        Ok(())
    }
}

/// Absolute form of a storage root, created on first use as the platform does.
fn root_path(dir: &Path) -> String {
    if let Err(e) = fs::create_dir_all(dir) {
        tracing::debug!(path = %dir.display(), error = %e, "Storage root not created");
    }
    paths::display_string(&paths::to_absolute(dir))
}

/// Grant owner read and write access. Failure leaves the entity as created.
fn make_read_write(path: &Path) {
    let result = fs::metadata(path).and_then(|metadata| {
        let mut permissions = metadata.permissions();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            permissions.set_mode(permissions.mode() | 0o600);
        }
        #[cfg(not(unix))]
        permissions.set_readonly(false);
        fs::set_permissions(path, permissions)
    });

    if let Err(e) = result {
        tracing::debug!(path = %path.display(), error = %e, "Could not grant read/write access");
    }
}

/// Re-join text line by line with `\n`, dropping one trailing line break.
fn join_lines(text: &str) -> String {
    let mut joined = text.replace("\r\n", "\n").replace('\r', "\n");
    if joined.ends_with('\n') {
        joined.pop();
    }
    joined
}
