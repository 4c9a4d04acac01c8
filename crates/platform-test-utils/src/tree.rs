//! [`TestTree`] builder for temporary folder hierarchies.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary folder with helpers for laying out and inspecting entries.
///
/// # Example
///
/// ```rust,no_run
/// use platform_test_utils::tree::TestTree;
///
/// let tree = TestTree::new();
/// tree.file("docs/a.txt", "alpha").folder("empty");
/// tree.assert_file("docs/a.txt");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the tree. Nothing is created.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Absolute path of `rel` as a string, as the access layer takes it.
    pub fn path_str(&self, rel: &str) -> String {
        self.path(rel).to_string_lossy().into_owned()
    }

    /// Write a file, creating missing parent folders.
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("TestTree::file: failed to create {parent:?}: {e}"));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestTree::file: failed to write {path:?}: {e}"));
        self
    }

    /// Create a folder and its ancestors.
    pub fn folder(&self, rel: &str) -> &Self {
        let path = self.path(rel);
        fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("TestTree::folder: failed to create {path:?}: {e}"));
        self
    }

    /// Names of the immediate children of `rel`, sorted.
    pub fn children(&self, rel: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path(rel))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn assert_file(&self, rel: &str) {
        assert!(self.path(rel).is_file(), "expected file at {rel}");
    }

    pub fn assert_folder(&self, rel: &str) {
        assert!(self.path(rel).is_dir(), "expected folder at {rel}");
    }

    pub fn assert_missing(&self, rel: &str) {
        assert!(!self.path(rel).exists(), "expected nothing at {rel}");
    }
}
