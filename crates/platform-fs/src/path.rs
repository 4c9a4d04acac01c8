//! Path joining and normalization
//!
//! Paths are rendered in their absolute form: relative inputs are resolved
//! against the current directory, and redundant separators, `.` components
//! and trailing separators are dropped. `..` components are kept and symlinks
//! are never resolved, so the result always names the same entry the caller
//! gave, even if it does not exist yet.

use std::path::{Component, MAIN_SEPARATOR_STR, Path, PathBuf};

/// The platform's path separator.
pub fn separator() -> &'static str {
    MAIN_SEPARATOR_STR
}

/// Resolve `path` to its absolute form without touching the file system.
pub fn to_absolute(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(e) => {
                tracing::warn!(error = %e, "Cannot resolve current directory, keeping relative path");
                path.to_path_buf()
            }
        }
    };
    joined.components().collect()
}

/// Render a path for callers, stripping verbatim prefixes where possible.
pub fn display_string(path: &Path) -> String {
    dunce::simplified(path).to_string_lossy().into_owned()
}

/// Return the canonical absolute form of `path`.
pub fn normalize(path: &str) -> String {
    display_string(&to_absolute(Path::new(path)))
}

/// Combine two path segments, returning the absolute form.
///
/// `right` is always treated as a child of `left`: a leading separator on
/// `right` does not discard `left`.
pub fn join(left: &str, right: &str) -> String {
    let mut combined = PathBuf::from(left);
    for component in Path::new(right).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {}
            other => combined.push(other),
        }
    }
    display_string(&to_absolute(&combined))
}

/// Left-fold [`join`] across `paths`.
///
/// An empty list yields an empty string and a single element is returned
/// verbatim, without normalization.
pub fn join_all<S: AsRef<str>>(paths: &[S]) -> String {
    match paths {
        [] => String::new(),
        [single] => single.as_ref().to_string(),
        [first, rest @ ..] => {
            let joined = rest
                .iter()
                .fold(first.as_ref().to_string(), |acc, next| join(&acc, next.as_ref()));
            normalize(&joined)
        }
    }
}
