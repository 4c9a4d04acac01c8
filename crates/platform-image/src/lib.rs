//! Image decoding and encoding for platform modules
//!
//! An [`ImageSource`] holds at most one decoded image. It can be loaded from
//! a bundled resource, a file, an in-memory buffer or an already decoded
//! image, queried for its dimensions and saved back to disk as PNG or JPEG.

pub mod error;
pub mod fetch;
pub mod format;
pub mod native;
pub mod source;

pub use error::{Error, Result};
pub use fetch::ImageFetcher;
#[cfg(feature = "http")]
pub use fetch::HttpImageFetcher;
pub use format::ImageFormat;
pub use source::{
    ImageSource, from_data, from_file, from_native_source, from_resource, from_url,
};
