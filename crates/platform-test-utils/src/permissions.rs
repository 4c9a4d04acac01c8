//! Injecting permission-denied entries on unix.
//!
//! Running as root bypasses permission checks, so tests using these helpers
//! should bail out early when [`is_root`] returns true.

#[cfg(unix)]
use std::path::{Path, PathBuf};

pub fn is_root() -> bool {
    match std::process::Command::new("id").arg("-u").output() {
        Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
        Err(_) => false,
    }
}

/// Removes write permission from a folder until dropped, so entries inside it
/// cannot be deleted or created.
#[cfg(unix)]
pub struct ReadOnlyFolder {
    path: PathBuf,
}

#[cfg(unix)]
impl ReadOnlyFolder {
    pub fn new(path: &Path) -> Self {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o555))
            .unwrap_or_else(|e| panic!("ReadOnlyFolder: failed to lock {path:?}: {e}"));
        Self {
            path: path.to_path_buf(),
        }
    }
}

#[cfg(unix)]
impl Drop for ReadOnlyFolder {
    fn drop(&mut self) {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o755));
    }
}
