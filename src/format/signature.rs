//! Magic-byte matching.
//!
//! JFIF and EXIF share the same rule (`FF D8 FF`), so any JPEG stream that
//! starts with a marker matches both labels. Callers may rely on either one,
//! which is why the two are kept as separate formats with identical rules.

use super::ImageFormat;

const JPEG_SOI: &[u8] = &[0xFF, 0xD8];
const JPEG_MARKER: &[u8] = &[0xFF, 0xD8, 0xFF];
const JPEG2000: &[u8] = &[
    0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20, 0x0D, 0x0A, 0x87, 0x0A,
];
const PNG: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];
const GIF89A: &[u8] = b"GIF89a";
const GIF87A: &[u8] = b"GIF87a";
const BMP: &[u8] = b"BM";
const RIFF: &[u8] = b"RIFF";
const WEBP: &[u8] = b"WEBP";
const WEBP_OFFSET: usize = 8;
const HEIC: &[u8] = b"ftypheic";

/// Check whether `data` starts with the signature of `format`.
///
/// Buffers shorter than the signature simply do not match.
///
/// # Examples
///
/// ```
/// use fastimage::format::{matches, ImageFormat};
///
/// assert!(matches(&[0xFF, 0xD8, 0xFF, 0xE0], ImageFormat::Jpeg));
/// assert!(matches(b"GIF87a....", ImageFormat::Gif));
/// assert!(!matches(&[0xFF], ImageFormat::Jpeg));
/// ```
pub fn matches(data: &[u8], format: ImageFormat) -> bool {
    match format {
        ImageFormat::Jpeg => data.starts_with(JPEG_SOI),
        ImageFormat::Jfif | ImageFormat::Exif => data.starts_with(JPEG_MARKER),
        ImageFormat::Jpeg2000 => data.starts_with(JPEG2000),
        ImageFormat::Png => data.starts_with(PNG),
        ImageFormat::Gif => data.starts_with(GIF89A) || data.starts_with(GIF87A),
        ImageFormat::Bmp => data.starts_with(BMP),
        ImageFormat::Webp => {
            data.starts_with(RIFF)
                && data
                    .get(WEBP_OFFSET..)
                    .is_some_and(|rest| rest.starts_with(WEBP))
        }
        ImageFormat::Heic => data.starts_with(HEIC),
    }
}

/// Check whether `data` matches any of `formats`.
///
/// An empty list never matches.
pub fn matches_any(data: &[u8], formats: &[ImageFormat]) -> bool {
    first_match(data, formats).is_some()
}

/// Return the first of `formats`, in the given order, that `data` matches.
pub fn first_match(data: &[u8], formats: &[ImageFormat]) -> Option<ImageFormat> {
    formats.iter().copied().find(|&format| matches(data, format))
}

/// Detect the format of `data` among every known format.
///
/// More specific signatures win over generic ones, so a JPEG stream with a
/// marker is reported as [`ImageFormat::Jfif`] rather than plain JPEG.
pub fn detect_format(data: &[u8]) -> Option<ImageFormat> {
    const BY_SPECIFICITY: [ImageFormat; 8] = [
        ImageFormat::Jpeg2000,
        ImageFormat::Webp,
        ImageFormat::Png,
        ImageFormat::Heic,
        ImageFormat::Gif,
        ImageFormat::Jfif,
        ImageFormat::Jpeg,
        ImageFormat::Bmp,
    ];
    first_match(data, &BY_SPECIFICITY)
}
