//! Validation policy.
//!
//! A [`Policy`] says which formats are acceptable, how large the resource may
//! be and whether the whole body should be fetched once the header checks
//! pass. It is built once with chained setters and only read afterwards, so a
//! single policy can be shared by any number of concurrent validations.
//!
//! # Examples
//!
//! ```rust
//! use fastimage::{ImageFormat, Policy};
//!
//! let policy = Policy::new()
//!     .with_formats([ImageFormat::Jpeg, ImageFormat::Png])
//!     .with_min_bytes(100)
//!     .with_max_bytes(5 * 1024 * 1024)
//!     .with_fetch_full_body(true);
//!
//! assert!(policy.allows(ImageFormat::Png));
//! assert_eq!(policy.max_bytes(), 5 * 1024 * 1024);
//! ```

use crate::format::ImageFormat;

/// What a remote image must look like to be accepted.
///
/// The default policy allows no format at all, so every validation against
/// it fails with [`Error::UnsupportedType`](crate::Error::UnsupportedType).
/// A `max_bytes` of `0` means unbounded. Sizes are unsigned, so there is no
/// such thing as a negative limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    formats: Vec<ImageFormat>,
    min_bytes: u64,
    max_bytes: u64,
    fetch_full_body: bool,
}

impl Policy {
    /// Creates a policy with the default options.
    pub fn new() -> Self {
        Policy::default()
    }

    /// Replace the allowed formats.
    ///
    /// Order is kept: when several formats match, the first one listed is
    /// the one reported.
    pub fn with_formats<I>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = ImageFormat>,
    {
        self.formats = formats.into_iter().collect();
        self
    }

    /// Set the maximum accepted size, `0` for no limit.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Set the minimum accepted size.
    pub fn with_min_bytes(mut self, min_bytes: u64) -> Self {
        self.min_bytes = min_bytes;
        self
    }

    /// Fetch the rest of the body after the probe window passed.
    pub fn with_fetch_full_body(mut self, fetch_full_body: bool) -> Self {
        self.fetch_full_body = fetch_full_body;
        self
    }

    /// Gets the allowed formats.
    pub fn formats(&self) -> &[ImageFormat] {
        &self.formats
    }

    /// Gets the minimum size in bytes.
    pub fn min_bytes(&self) -> u64 {
        self.min_bytes
    }

    /// Gets the maximum size in bytes, `0` meaning unbounded.
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Gets whether the full body is fetched.
    pub fn fetch_full_body(&self) -> bool {
        self.fetch_full_body
    }

    /// Whether `format` is one of the allowed formats.
    pub fn allows(&self, format: ImageFormat) -> bool {
        self.formats.contains(&format)
    }

    /// Whether a resource of `size` bytes is out of bounds.
    pub(crate) fn size_violation(&self, size: u64) -> Option<crate::Error> {
        if size < self.min_bytes {
            return Some(crate::Error::FileTooSmall {
                size,
                min: self.min_bytes,
            });
        }
        if self.max_bytes > 0 && size > self.max_bytes {
            return Some(crate::Error::FileTooLarge {
                size,
                max: self.max_bytes,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_default_policy() {
        let policy = Policy::new();
        assert!(policy.formats().is_empty());
        assert_eq!(policy.min_bytes(), 0);
        assert_eq!(policy.max_bytes(), 0);
        assert!(!policy.fetch_full_body());
    }

    #[test]
    fn test_with_formats_replaces() {
        let policy = Policy::new()
            .with_formats([ImageFormat::Gif])
            .with_formats(vec![ImageFormat::Jpeg, ImageFormat::Png]);
        assert_eq!(policy.formats(), &[ImageFormat::Jpeg, ImageFormat::Png]);
        assert!(!policy.allows(ImageFormat::Gif));
    }

    #[test]
    fn test_size_violation() {
        let policy = Policy::new().with_min_bytes(100).with_max_bytes(1000);
        assert!(policy.size_violation(100).is_none());
        assert!(policy.size_violation(1000).is_none());
        assert_eq!(
            policy.size_violation(99).map(|e| e.kind()),
            Some(ErrorKind::FileTooSmall)
        );
        assert_eq!(
            policy.size_violation(1001).map(|e| e.kind()),
            Some(ErrorKind::FileTooLarge)
        );
    }

    #[test]
    fn test_zero_max_is_unbounded() {
        let policy = Policy::new().with_max_bytes(0);
        assert!(policy.size_violation(u64::MAX).is_none());
    }
}
