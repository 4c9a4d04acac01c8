//! Recursive folder deletion
//!
//! Depth-first and short-circuiting: the first entry that cannot be removed
//! aborts the walk and is reported. Nothing is rolled back, so entries
//! processed before the failure stay deleted and the rest stay in place.
//! Symlinks are removed as links and never followed.

use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Delete everything inside `folder`, keeping `folder` itself.
pub fn delete_folder_content(folder: &Path) -> Result<()> {
    delete_content_with(folder, &mut remove_entry)
}

/// Walk `folder` depth-first, handing each entry to `remove` once its own
/// contents are gone.
fn delete_content_with<R>(folder: &Path, remove: &mut R) -> Result<()>
where
    R: FnMut(&Path, bool) -> Result<()>,
{
    let entries = fs::read_dir(folder).map_err(|e| Error::io(folder, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| Error::io(folder, e))?;
        let child = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&child, e))?;

        if file_type.is_dir() {
            if let Err(e) = delete_content_with(&child, remove) {
                tracing::warn!(folder = %child.display(), error = %e, "Aborting recursive delete");
                return Err(e);
            }
        }

        remove(&child, file_type.is_dir())?;
    }

    Ok(())
}

/// Remove a single file, empty folder or symlink.
///
/// `is_folder` names what the caller believes it is removing; a symlink is
/// always removed as a link.
pub(crate) fn remove_entry(path: &Path, is_folder: bool) -> Result<()> {
    let is_link = fs::symlink_metadata(path).is_ok_and(|m| m.is_symlink());
    let result = if is_folder && !is_link {
        fs::remove_dir(path)
    } else {
        unlink(path)
    };

    result.map_err(|source| {
        tracing::debug!(path = %path.display(), error = %source, "Entry removal failed");
        Error::DeleteFailed {
            path: path.to_path_buf(),
            is_folder,
            source,
        }
    })
}

// Windows removes directory symlinks with `remove_dir`.
#[cfg(windows)]
fn unlink(path: &Path) -> std::io::Result<()> {
    if path.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(not(windows))]
fn unlink(path: &Path) -> std::io::Result<()> {
    fs::remove_file(path)
}
