//! Validation result.
//!
//! A [`ValidationResult`] is returned by every validation, successful or not.
//! Failures keep whatever was read before they happened: the probe bytes are
//! there even when the size check or the remainder fetch failed.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fastimage::{ImageFormat, Policy, ValidatorBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = ValidatorBuilder::new().build()?;
//! let policy = Policy::new().with_formats([ImageFormat::Png]);
//!
//! let result = validator.validate("https://example.com/logo.png", &policy).await;
//! match result.error() {
//!     None => println!("valid {:?}, {} bytes", result.format(), result.bytes().len()),
//!     Some(e) => println!("rejected ({}): {}", e.kind(), e),
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};
use crate::format::ImageFormat;
use crate::http::ResponseMeta;

/// Outcome of a single validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Probe bytes, followed by the remainder when it was fetched.
    bytes: Vec<u8>,
    /// Metadata of the last response received.
    response: Option<ResponseMeta>,
    /// Size of the whole resource, once known.
    content_length: Option<u64>,
    /// First allowed format that matched the probe.
    format: Option<ImageFormat>,
    /// Why the validation failed.
    error: Option<Error>,
}

impl ValidationResult {
    /// Create an empty result.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Attach the bytes read and the response they came from.
    pub(crate) fn with_response(self, response: ResponseMeta, bytes: Vec<u8>) -> Self {
        Self {
            response: Some(response),
            bytes,
            ..self
        }
    }

    pub(crate) fn set_response(&mut self, response: ResponseMeta) {
        self.response = Some(response);
    }

    pub(crate) fn set_format(&mut self, format: ImageFormat) {
        self.format = Some(format);
    }

    pub(crate) fn set_content_length(&mut self, content_length: u64) {
        self.content_length = Some(content_length);
    }

    pub(crate) fn replace_bytes(&mut self, bytes: Vec<u8>) {
        self.bytes = bytes;
    }

    pub(crate) fn append_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Mark the result as failed.
    pub(crate) fn fail(self, error: Error) -> Self {
        Self {
            error: Some(error),
            ..self
        }
    }

    /// Whether every check passed.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Get the bytes read.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the metadata of the last response received.
    pub fn response(&self) -> Option<&ResponseMeta> {
        self.response.as_ref()
    }

    /// Get the size of the whole resource, if it got that far.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Get the matched format.
    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    /// Get the error, if the validation failed.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Take the bytes out of the result.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Turn the result into a `Result`, dropping partial bytes on failure.
    pub fn into_result(self) -> Result<Vec<u8>> {
        match self.error {
            None => Ok(self.bytes),
            Some(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use reqwest::header::HeaderMap;
    use reqwest::StatusCode;

    fn meta(status: StatusCode) -> ResponseMeta {
        ResponseMeta {
            status,
            headers: HeaderMap::new(),
            content_length: Some(12),
        }
    }

    #[test]
    fn test_failed_result_keeps_bytes() {
        let result = ValidationResult::new()
            .with_response(meta(StatusCode::PARTIAL_CONTENT), vec![0xFF, 0xD8])
            .fail(Error::UnsupportedType);

        assert!(!result.is_valid());
        assert_eq!(result.bytes(), &[0xFF, 0xD8]);
        assert_eq!(result.error().map(|e| e.kind()), Some(ErrorKind::UnsupportedType));
        assert_eq!(
            result.response().map(|r| r.status),
            Some(StatusCode::PARTIAL_CONTENT)
        );
        assert!(result.into_result().is_err());
    }

    #[test]
    fn test_successful_result() {
        let mut result =
            ValidationResult::new().with_response(meta(StatusCode::PARTIAL_CONTENT), vec![1, 2]);
        result.append_bytes(&[3, 4]);
        result.set_format(ImageFormat::Bmp);
        result.set_content_length(4);

        assert!(result.is_valid());
        assert_eq!(result.format(), Some(ImageFormat::Bmp));
        assert_eq!(result.content_length(), Some(4));
        assert_eq!(result.into_result().unwrap(), vec![1, 2, 3, 4]);
    }
}
