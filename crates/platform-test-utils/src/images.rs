//! Generated image fixtures of known dimensions.

use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// A gradient image, so encoders have something non-trivial to compress.
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
}

/// Encode a gradient image in memory.
pub fn encoded(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    gradient(width, height)
        .write_to(&mut bytes, format)
        .unwrap_or_else(|e| panic!("images::encoded: failed to encode {format:?}: {e}"));
    bytes.into_inner()
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encoded(width, height, ImageFormat::Png)
}

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encoded(width, height, ImageFormat::Jpeg)
}

/// Write a PNG of the given size to `path`.
pub fn write_png(path: &Path, width: u32, height: u32) {
    std::fs::write(path, png_bytes(width, height))
        .unwrap_or_else(|e| panic!("images::write_png: failed to write {path:?}: {e}"));
}
