//! fastimage checks that a URL points to an image of an allowed type and
//! size without downloading it: it asks for the first 12 bytes with a range
//! request, sniffs the magic bytes and reads the resource size from the
//! response headers.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fastimage::{ImageFormat, Policy, ValidatorBuilder, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let validator = ValidatorBuilder::new().build()?;
//! let policy = Policy::new()
//!     .with_formats([ImageFormat::Jpeg, ImageFormat::Png])
//!     .with_min_bytes(1024)
//!     .with_max_bytes(10 * 1024 * 1024);
//!
//! let result = validator.validate("https://example.com/photo.jpg", &policy).await;
//! let probe = result.into_result()?;
//! println!("first bytes: {:02x?}", probe);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`format`] - Image formats and magic-byte matching
//! - [`validator`] - The `Validator`, its builder, the `Policy` and results
//! - [`http`] - HTTP client setup, the transport trait and range requests
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`utils`] - Shared utility functions

pub mod error;
pub mod format;
pub mod http;
pub mod utils;
pub mod validator;

pub use error::{Error, ErrorKind, Result};
pub use format::{detect_format, matches, matches_any, ImageFormat};
pub use http::{create_http_client, HttpClient, HttpClientConfig, ResponseMeta};
pub use utils::content_length::{effective_content_length, parse_content_range_total};
pub use validator::{Policy, ValidationResult, Validator, ValidatorBuilder};

/// Validate `url` against `policy` with a default client.
///
/// Building a [`Validator`] once and reusing it is cheaper when validating
/// many URLs, as the connection pool is kept.
pub async fn validate_url(url: &str, policy: &Policy) -> ValidationResult {
    match ValidatorBuilder::new().build() {
        Ok(validator) => validator.validate(url, policy).await,
        Err(e) => ValidationResult::new().fail(e),
    }
}
