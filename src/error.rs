//! Error handling for the fastimage library.
//!
//! Every failure of a validation is returned to the caller as one of the
//! variants below. Nothing is retried internally and nothing is fatal to the
//! process: the [`Validator`](crate::Validator) hands the error back together
//! with whatever bytes were read so far.

use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// Boxed error used to carry transport failures untranslated.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can happen when validating a remote image.
#[derive(Error, Debug)]
pub enum Error {
    /// The transport failed to deliver a response or its body.
    ///
    /// Network, DNS and TLS failures as well as errors raised while reading
    /// the response stream end up here, with the original cause attached.
    #[error("Transport error: {source}")]
    Transport {
        #[source]
        source: BoxError,
    },

    /// The URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a status outside of `200..=299`.
    #[error("Invalid HTTP status code: {status}")]
    InvalidStatus { status: StatusCode },

    /// None of the formats allowed by the policy matched the probe bytes.
    #[error("Unsupported image type")]
    UnsupportedType,

    /// The resource is smaller than the policy minimum.
    #[error("File size too small: {size} bytes (minimum {min})")]
    FileTooSmall { size: u64, min: u64 },

    /// The resource is larger than the policy maximum.
    #[error("File size too large: {size} bytes (maximum {max})")]
    FileTooLarge { size: u64, max: u64 },
}

/// Fieldless tag of an [`Error`], handy for matching and structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Transport,
    InvalidUrl,
    InvalidStatus,
    UnsupportedType,
    FileTooSmall,
    FileTooLarge,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Transport => "transport",
            ErrorKind::InvalidUrl => "invalid_url",
            ErrorKind::InvalidStatus => "invalid_status",
            ErrorKind::UnsupportedType => "unsupported_type",
            ErrorKind::FileTooSmall => "file_too_small",
            ErrorKind::FileTooLarge => "file_too_large",
        };
        f.write_str(name)
    }
}

impl Error {
    /// Wrap any error raised by a transport.
    pub fn transport<E>(source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Error::Transport {
            source: source.into(),
        }
    }

    /// Get the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport { .. } => ErrorKind::Transport,
            Error::InvalidUrl(_) => ErrorKind::InvalidUrl,
            Error::InvalidStatus { .. } => ErrorKind::InvalidStatus,
            Error::UnsupportedType => ErrorKind::UnsupportedType,
            Error::FileTooSmall { .. } => ErrorKind::FileTooSmall,
            Error::FileTooLarge { .. } => ErrorKind::FileTooLarge,
        }
    }

    /// Whether the failure happened before a usable response was obtained.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. } | Error::InvalidUrl(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::transport(source)
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(source: reqwest_middleware::Error) -> Self {
        match source {
            reqwest_middleware::Error::Reqwest(e) => Error::transport(e),
            reqwest_middleware::Error::Middleware(e) => Error::transport(e),
        }
    }
}

/// Result type alias for operations that can fail with a fastimage error.
pub type Result<T> = std::result::Result<T, Error>;
