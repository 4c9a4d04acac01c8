//! Output formats for saving images

use crate::{Error, Result};
use std::str::FromStr;

/// Encodings an image can be saved in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Lossless; quality is ignored
    #[default]
    Png,
    /// Lossy; quality 0-100, higher is better
    Jpeg,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }

    /// Encoder quality for this format, if it takes one.
    ///
    /// JPEG quality is clamped to 1..=100, so 0 means lowest quality.
    pub fn encoder_quality(&self, quality: u8) -> Option<u8> {
        match self {
            Self::Png => None,
            Self::Jpeg => Some(quality.clamp(1, 100)),
        }
    }
}

impl From<ImageFormat> for image::ImageFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}

impl FromStr for ImageFormat {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            _ => Err(Error::UnsupportedFormat {
                name: name.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
