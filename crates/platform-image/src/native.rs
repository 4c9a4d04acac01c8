//! Decode and encode calls into the imaging backend.

use crate::{Error, ImageFormat, Result};
use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Extensions tried, in order, when a resource name has none.
pub const RESOURCE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "gif", "bmp"];

/// Decode an image file. The format is detected from the content.
pub fn decode_file(path: &Path) -> Result<DynamicImage> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    image::load_from_memory(&bytes).map_err(|source| Error::Decode {
        origin: path.display().to_string(),
        source,
    })
}

/// Decode an in-memory encoded image.
pub fn decode_data(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|source| Error::Decode {
        origin: format!("{} byte buffer", bytes.len()),
        source,
    })
}

/// Find the file backing a bundled resource.
///
/// `name` is tried as given first, then with each of
/// [`RESOURCE_EXTENSIONS`] appended. Names must stay inside
/// `resources_dir`: absolute names and `.`/`..` segments are not found.
pub fn resolve_resource(resources_dir: &Path, name: &str) -> Result<PathBuf> {
    let not_found = || Error::ResourceNotFound {
        name: name.to_string(),
        dir: resources_dir.to_path_buf(),
    };
    let relative = Path::new(name);
    if name.is_empty() || !relative.components().all(|c| matches!(c, Component::Normal(_))) {
        tracing::debug!(name, "Rejecting resource name outside the resources folder");
        return Err(not_found());
    }

    let exact = resources_dir.join(name);
    if exact.is_file() {
        return Ok(exact);
    }

    RESOURCE_EXTENSIONS
        .iter()
        .map(|ext| resources_dir.join(format!("{name}.{ext}")))
        .find(|candidate| candidate.is_file())
        .ok_or_else(not_found)
}

/// Encode `image` in `format` and write it to `path`, replacing any file.
///
/// The image is encoded in memory first; an existing file is only touched
/// once encoding has succeeded.
pub fn encode_to_file(
    image: &DynamicImage,
    path: &Path,
    format: ImageFormat,
    quality: u8,
) -> Result<()> {
    let mut buffer = Vec::new();
    let encode_error = |source| Error::Encode {
        path: path.to_path_buf(),
        source,
    };

    match format.encoder_quality(quality) {
        None => image
            .write_with_encoder(PngEncoder::new(&mut buffer))
            .map_err(encode_error)?,
        Some(quality) => {
            // JPEG has no alpha channel
            let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
            rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut buffer, quality))
                .map_err(encode_error)?
        }
    }

    fs::write(path, &buffer).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform_test_utils::images;
    use tempfile::tempdir;

    #[test]
    fn decode_data_reads_png() {
        let image = decode_data(&images::png_bytes(7, 3)).unwrap();
        assert_eq!((image.width(), image.height()), (7, 3));
    }

    #[test]
    fn decode_garbage_fails() {
        let result = decode_data(b"definitely not an image");
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn decode_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = decode_file(&dir.path().join("none.png"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn resource_lookup_appends_extensions() {
        let dir = tempdir().unwrap();
        images::write_png(&dir.path().join("icon.png"), 2, 2);

        assert_eq!(resolve_resource(dir.path(), "icon").unwrap(), dir.path().join("icon.png"));
        assert_eq!(
            resolve_resource(dir.path(), "icon.png").unwrap(),
            dir.path().join("icon.png")
        );
        assert!(matches!(
            resolve_resource(dir.path(), "logo"),
            Err(Error::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn resource_names_cannot_leave_the_folder() {
        let dir = tempdir().unwrap();
        let resources = dir.path().join("resources");
        fs::create_dir(&resources).unwrap();
        images::write_png(&dir.path().join("private.png"), 2, 2);
        let absolute = dir.path().join("private.png");

        for name in ["../private", "../private.png", "./../private", ""] {
            assert!(
                matches!(resolve_resource(&resources, name), Err(Error::ResourceNotFound { .. })),
                "{name:?} resolved outside the resources folder"
            );
        }
        assert!(matches!(
            resolve_resource(&resources, &absolute.to_string_lossy()),
            Err(Error::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn nested_resource_names_are_allowed() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("icons")).unwrap();
        images::write_png(&dir.path().join("icons/star.png"), 2, 2);

        assert_eq!(
            resolve_resource(dir.path(), "icons/star").unwrap(),
            dir.path().join("icons/star.png")
        );
    }

    #[cfg(unix)]
    #[test]
    fn write_failure_is_reported() {
        let image = decode_data(&images::png_bytes(4, 4)).unwrap();

        let result = encode_to_file(&image, Path::new("/dev/full"), ImageFormat::Png, 100);

        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
