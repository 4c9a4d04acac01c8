//! Error types for platform-fs

use std::path::PathBuf;

/// Result type for platform-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in platform-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The specified parameter is not a File entity.")]
    NotAFile { path: PathBuf },

    #[error("The specified parameter is not a Folder entity.")]
    NotAFolder { path: PathBuf },

    #[error("There is no folder existing at path {}", path.display())]
    NoSuchFolder { path: PathBuf },

    #[error("Path {} has no parent folder", path.display())]
    NoParent { path: PathBuf },

    #[error("The file to rename does not exist")]
    SourceNotFound { path: PathBuf },

    #[error("A file with the same name already exists.")]
    AlreadyExists { path: PathBuf },

    #[error("Failed to create new file for path {}", path.display())]
    CreateFailed { path: PathBuf },

    #[error("{} deletion failed", if *is_folder { "Folder" } else { "File" })]
    DeleteFailed {
        path: PathBuf,
        is_folder: bool,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rename file '{}' to '{}'", from.display(), to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown text encoding: {name}")]
    UnknownEncoding { name: String },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} config for {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The path the failed operation was working on.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Io { path, .. }
            | Self::NotAFile { path }
            | Self::NotAFolder { path }
            | Self::NoSuchFolder { path }
            | Self::NoParent { path }
            | Self::SourceNotFound { path }
            | Self::AlreadyExists { path }
            | Self::CreateFailed { path }
            | Self::DeleteFailed { path, .. }
            | Self::ConfigParse { path, .. }
            | Self::ConfigSerialize { path, .. } => Some(path),
            Self::RenameFailed { from, .. } => Some(from),
            Self::UnknownEncoding { .. } | Self::UnsupportedFormat { .. } => None,
        }
    }
}
