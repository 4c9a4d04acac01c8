//! The image source and its factory functions

use crate::{Error, ImageFetcher, ImageFormat, Result, native};
use image::DynamicImage;
use platform_fs::AppContext;
use std::path::{Path, PathBuf};

/// Holds at most one decoded image.
///
/// Every load replaces the held image, whether or not it succeeds: a failed
/// load leaves the source empty.
#[derive(Debug, Clone)]
pub struct ImageSource {
    native: Option<DynamicImage>,
    resources_dir: PathBuf,
}

impl ImageSource {
    /// An empty source resolving resources against the default
    /// application context.
    pub fn new() -> Self {
        Self::with_context(&AppContext::default())
    }

    /// An empty source resolving resources under `context.resources_dir`.
    pub fn with_context(context: &AppContext) -> Self {
        Self {
            native: None,
            resources_dir: context.resources_dir.clone(),
        }
    }

    /// Decode a bundled resource by name. Returns whether an image is now held.
    pub fn load_from_resource(&mut self, name: &str) -> bool {
        let loaded = self.try_load_from_resource(name);
        self.settle(loaded)
    }

    /// Decode an image file. Returns whether an image is now held.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> bool {
        let loaded = self.try_load_from_file(path);
        self.settle(loaded)
    }

    /// Decode an encoded image buffer. Returns whether an image is now held.
    pub fn load_from_data(&mut self, data: &[u8]) -> bool {
        let loaded = self.try_load_from_data(data);
        self.settle(loaded)
    }

    /// Adopt an already decoded image. `None` empties the source.
    pub fn set_native_source(&mut self, source: Option<DynamicImage>) -> bool {
        self.native = source;
        self.native.is_some()
    }

    /// Re-encode the held image and write it to `path`.
    ///
    /// Returns false when nothing is held or encoding fails.
    pub fn save_to_file(&self, path: impl AsRef<Path>, format: ImageFormat, quality: u8) -> bool {
        match self.try_save_to_file(path, format, quality) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Image save failed");
                false
            }
        }
    }

    pub fn try_load_from_resource(&mut self, name: &str) -> Result<()> {
        self.native = None;
        let path = native::resolve_resource(&self.resources_dir, name)?;
        self.try_load_from_file(path)
    }

    pub fn try_load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.native = None;
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading image file");
        self.native = Some(native::decode_file(path)?);
        Ok(())
    }

    pub fn try_load_from_data(&mut self, data: &[u8]) -> Result<()> {
        self.native = None;
        tracing::debug!(len = data.len(), "Loading image data");
        self.native = Some(native::decode_data(data)?);
        Ok(())
    }

    pub fn try_save_to_file(
        &self,
        path: impl AsRef<Path>,
        format: ImageFormat,
        quality: u8,
    ) -> Result<()> {
        let image = self.native.as_ref().ok_or(Error::Empty)?;
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), %format, quality, "Saving image");
        native::encode_to_file(image, path, format, quality)
    }

    /// Pixel width of the held image, `None` when empty.
    pub fn width(&self) -> Option<u32> {
        self.native.as_ref().map(DynamicImage::width)
    }

    /// Pixel height of the held image, `None` when empty.
    pub fn height(&self) -> Option<u32> {
        self.native.as_ref().map(DynamicImage::height)
    }

    pub fn is_empty(&self) -> bool {
        self.native.is_none()
    }

    pub fn native(&self) -> Option<&DynamicImage> {
        self.native.as_ref()
    }

    pub fn into_native(self) -> Option<DynamicImage> {
        self.native
    }

    fn settle(&self, loaded: Result<()>) -> bool {
        if let Err(e) = loaded {
            tracing::debug!(error = %e, "Image load failed");
        }
        self.native.is_some()
    }
}

impl Default for ImageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl From<DynamicImage> for ImageSource {
    fn from(image: DynamicImage) -> Self {
        let mut source = Self::new();
        source.native = Some(image);
        source
    }
}

/// Load a bundled resource, `None` if it cannot be decoded.
pub fn from_resource(name: &str) -> Option<ImageSource> {
    let mut source = ImageSource::new();
    source.load_from_resource(name).then_some(source)
}

/// Load an image file, `None` if it cannot be decoded.
pub fn from_file(path: impl AsRef<Path>) -> Option<ImageSource> {
    let mut source = ImageSource::new();
    source.load_from_file(path).then_some(source)
}

/// Load an encoded buffer, `None` if it cannot be decoded.
pub fn from_data(data: &[u8]) -> Option<ImageSource> {
    let mut source = ImageSource::new();
    source.load_from_data(data).then_some(source)
}

/// Wrap an already decoded image, `None` for an empty handle.
pub fn from_native_source(native: Option<DynamicImage>) -> Option<ImageSource> {
    let mut source = ImageSource::new();
    source.set_native_source(native).then_some(source)
}

/// Fetch and decode an image through `fetcher`.
pub fn from_url(fetcher: &impl ImageFetcher, url: &str) -> Result<ImageSource> {
    fetcher.get_image(url)
}
