//! Error types for platform-image

use std::path::PathBuf;

/// Result type for platform-image operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in platform-image operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image to {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("No resource named {name} in {}", dir.display())]
    ResourceNotFound { name: String, dir: PathBuf },

    #[error("No image is loaded")]
    Empty,

    #[error("Unsupported image format: {name}")]
    UnsupportedFormat { name: String },

    #[error("Failed to fetch image from {url}: {message}")]
    Fetch { url: String, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
