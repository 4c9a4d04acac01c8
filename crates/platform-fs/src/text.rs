//! Character encodings for text read/write
//!
//! Decoding is lossy: malformed input becomes U+FFFD. Encoding replaces
//! characters the target charset cannot represent with `?`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported text encodings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextEncoding {
    #[serde(rename = "ISO-8859-1")]
    Iso8859_1,
    #[serde(rename = "US-ASCII")]
    UsAscii,
    /// Big-endian unless a byte order mark says otherwise; writes a BOM.
    #[serde(rename = "UTF-16")]
    Utf16,
    #[serde(rename = "UTF-16BE")]
    Utf16Be,
    #[serde(rename = "UTF-16LE")]
    Utf16Le,
    #[default]
    #[serde(rename = "UTF-8")]
    Utf8,
}

const REPLACEMENT: u8 = b'?';

impl TextEncoding {
    pub const ALL: [TextEncoding; 6] = [
        Self::Iso8859_1,
        Self::UsAscii,
        Self::Utf16,
        Self::Utf16Be,
        Self::Utf16Le,
        Self::Utf8,
    ];

    /// The canonical charset name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iso8859_1 => "ISO-8859-1",
            Self::UsAscii => "US-ASCII",
            Self::Utf16 => "UTF-16",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf8 => "UTF-8",
        }
    }

    /// Decode raw bytes into a string.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Iso8859_1 => bytes.iter().map(|&b| char::from(b)).collect(),
            Self::UsAscii => bytes
                .iter()
                .map(|&b| if b.is_ascii() { char::from(b) } else { char::REPLACEMENT_CHARACTER })
                .collect(),
            Self::Utf16Be => decode_utf16(bytes, u16::from_be_bytes),
            Self::Utf16Le => decode_utf16(bytes, u16::from_le_bytes),
            Self::Utf16 => match bytes {
                [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
                [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
                _ => decode_utf16(bytes, u16::from_be_bytes),
            },
        }
    }

    /// Encode a string into raw bytes.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Iso8859_1 => text
                .chars()
                .map(|c| u8::try_from(c).unwrap_or(REPLACEMENT))
                .collect(),
            Self::UsAscii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { REPLACEMENT })
                .collect(),
            Self::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Self::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Self::Utf16 => [0xFE, 0xFF]
                .into_iter()
                .chain(text.encode_utf16().flat_map(u16::to_be_bytes))
                .collect(),
        }
    }
}

fn decode_utf16(bytes: &[u8], read: fn([u8; 2]) -> u16) -> String {
    let units = bytes.chunks(2).map(|pair| match pair {
        [a, b] => read([*a, *b]),
        // Dangling odd byte
        _ => 0xFFFD,
    });
    char::decode_utf16(units)
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

impl FromStr for TextEncoding {
    type Err = Error;

    /// Look up an encoding by charset name, ignoring case and the
    /// common aliases `latin1`, `ascii`, `utf8`.
    fn from_str(name: &str) -> Result<Self> {
        let upper = name.trim().to_ascii_uppercase();
        let found = match upper.as_str() {
            "ISO-8859-1" | "ISO8859_1" | "LATIN1" => Self::Iso8859_1,
            "US-ASCII" | "ASCII" => Self::UsAscii,
            "UTF-16" | "UTF16" => Self::Utf16,
            "UTF-16BE" | "UTF16BE" => Self::Utf16Be,
            "UTF-16LE" | "UTF16LE" => Self::Utf16Le,
            "UTF-8" | "UTF8" => Self::Utf8,
            _ => {
                return Err(Error::UnknownEncoding {
                    name: name.to_string(),
                });
            }
        };
        Ok(found)
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
