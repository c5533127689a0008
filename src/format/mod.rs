//! Image formats and header sniffing.
//!
//! This module knows the leading magic bytes of every supported
//! [`ImageFormat`] and can tell whether a (possibly truncated) buffer starts
//! like one of them. Nothing past the signature is decoded.
//!
//! # Examples
//!
//! ```rust
//! use fastimage::format::{matches, matches_any, ImageFormat};
//!
//! let png = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];
//! assert!(matches(&png, ImageFormat::Png));
//! assert!(!matches(&png, ImageFormat::Gif));
//! assert!(matches_any(&png, &[ImageFormat::Jpeg, ImageFormat::Png]));
//!
//! // Short buffers never panic, they just do not match.
//! assert!(!matches(b"RIFF", ImageFormat::Webp));
//! ```

pub mod signature;

pub use signature::{detect_format, first_match, matches, matches_any};

use std::fmt;
use std::str::FromStr;

/// Image formats recognised by their leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Jpeg2000,
    Png,
    Gif,
    Bmp,
    Webp,
    Jfif,
    Exif,
    Heic,
}

impl ImageFormat {
    /// Every supported format, in declaration order.
    pub const ALL: [ImageFormat; 9] = [
        ImageFormat::Jpeg,
        ImageFormat::Jpeg2000,
        ImageFormat::Png,
        ImageFormat::Gif,
        ImageFormat::Bmp,
        ImageFormat::Webp,
        ImageFormat::Jfif,
        ImageFormat::Exif,
        ImageFormat::Heic,
    ];

    /// Number of leading bytes needed to decide whether a buffer matches.
    pub fn signature_len(self) -> usize {
        match self {
            ImageFormat::Jpeg | ImageFormat::Bmp => 2,
            ImageFormat::Jfif | ImageFormat::Exif => 3,
            ImageFormat::Gif => 6,
            ImageFormat::Png | ImageFormat::Heic => 8,
            ImageFormat::Jpeg2000 | ImageFormat::Webp => 12,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Jpeg2000 => "jpeg2000",
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Webp => "webp",
            ImageFormat::Jfif => "jfif",
            ImageFormat::Exif => "exif",
            ImageFormat::Heic => "heic",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown image format: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for ImageFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            "jpeg2000" | "jp2" => Ok(ImageFormat::Jpeg2000),
            "png" => Ok(ImageFormat::Png),
            "gif" => Ok(ImageFormat::Gif),
            "bmp" => Ok(ImageFormat::Bmp),
            "webp" => Ok(ImageFormat::Webp),
            "jfif" => Ok(ImageFormat::Jfif),
            "exif" => Ok(ImageFormat::Exif),
            "heic" => Ok(ImageFormat::Heic),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}
