//! File system access for platform modules
//!
//! Provides a uniform interface over native file and folder operations:
//! entity creation, enumeration, deletion, renaming, text I/O and path
//! helpers. Every operation runs synchronously and reports failures through
//! [`Error`].

pub mod access;
pub mod config;
pub mod context;
pub mod entity;
pub mod error;
pub mod logging;
pub mod path;
pub mod remove;
pub mod text;

pub use access::FileSystemAccess;
pub use config::ConfigStore;
pub use context::AppContext;
pub use entity::{EntityInfo, get_file_extension};
pub use error::{Error, Result};
pub use text::TextEncoding;
