//! Core validation logic.
//!
//! A validation runs these steps in order and stops at the first failure:
//!
//! 1. fetch the probe window (`Range: bytes=0-11`)
//! 2. check the status is `2xx`
//! 3. match the probe against the allowed signatures
//! 4. check the resource size against the policy
//! 5. optionally fetch the remainder (`Range: bytes=12-`) and append it
//!
//! At most two requests are made, strictly one after the other, and every
//! response body is fully drained before the next step.

use super::policy::Policy;
use super::result::ValidationResult;
use crate::error::Error;
use crate::format::first_match;
use crate::http::{HttpClient, RangeFetcher};
use crate::utils::content_length::effective_content_length;

use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use tracing::{debug, warn};

/// Validates remote images.
///
/// A validator can be created via its builder:
///
/// ```rust
/// # fn main() -> Result<(), fastimage::Error> {
/// use fastimage::ValidatorBuilder;
///
/// let v = ValidatorBuilder::new().build()?;
/// # Ok(())
/// # }
/// ```
///
/// or around any [`HttpClient`] with [`Validator::new`].
#[derive(Clone)]
pub struct Validator<C = ClientWithMiddleware> {
    fetcher: RangeFetcher<C>,
}

impl<C> fmt::Debug for Validator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

impl<C: HttpClient> Validator<C> {
    /// Creates a validator sending requests through `client`.
    pub fn new(client: C) -> Self {
        Self {
            fetcher: RangeFetcher::new(client),
        }
    }

    /// Send `headers` with every request.
    pub fn with_headers(self, headers: HeaderMap) -> Self {
        Self {
            fetcher: self.fetcher.with_headers(headers),
        }
    }

    /// Gets the underlying client.
    pub fn client(&self) -> &C {
        self.fetcher.client()
    }

    /// Gets the headers sent with every request.
    pub fn headers(&self) -> &HeaderMap {
        self.fetcher.headers()
    }

    /// Check that `url` points to an image accepted by `policy`.
    #[tracing::instrument(skip_all, fields(url = %url))]
    pub async fn validate(&self, url: &str, policy: &Policy) -> ValidationResult {
        let result = ValidationResult::new();

        let url = match Url::parse(url) {
            Ok(url) => url,
            Err(e) => return result.fail(Error::InvalidUrl(format!("{url}: {e}"))),
        };

        // Fetch the probe window.
        let probe = match self.fetcher.fetch_probe(&url).await {
            Ok(response) => response.drain().await,
            Err(e) => {
                warn!(error = %e, "Probe request failed");
                return result.fail(e);
            }
        };
        let status = probe.meta.status;
        let content_length = effective_content_length(&probe.meta);
        debug!(%status, received = probe.bytes.len(), "Probe fetched");
        let mut result = result.with_response(probe.meta, probe.bytes);

        // Servers often close the stream right after a short range, which
        // surfaces as a read error. On 206 the bytes we got are what we asked for.
        if let Some(e) = probe.error {
            if status != StatusCode::PARTIAL_CONTENT {
                warn!(error = %e, "Failed to read probe body");
                return result.fail(e);
            }
            debug!(error = %e, "Ignoring read error on partial content");
        }

        if !status.is_success() {
            return result.fail(Error::InvalidStatus { status });
        }

        let Some(format) = first_match(result.bytes(), policy.formats()) else {
            debug!("No allowed signature matched");
            return result.fail(Error::UnsupportedType);
        };
        result.set_format(format);
        debug!(%format, "Signature matched");

        result.set_content_length(content_length);
        debug!(content_length, "Resource size");

        if let Some(e) = policy.size_violation(content_length) {
            return result.fail(e);
        }

        if !policy.fetch_full_body() {
            return result;
        }

        // The server ignored the range and already sent everything.
        if status == StatusCode::OK {
            debug!("Probe returned the full body");
            return result;
        }

        self.fetch_remainder(&url, result).await
    }

    /// Fetch everything after the probe and append it to `result`.
    async fn fetch_remainder(&self, url: &Url, mut result: ValidationResult) -> ValidationResult {
        let remainder = match self.fetcher.fetch_remainder(url).await {
            Ok(response) => response.drain().await,
            Err(e) => {
                warn!(error = %e, "Remainder request failed");
                return result.fail(e);
            }
        };
        let status = remainder.meta.status;
        debug!(%status, received = remainder.bytes.len(), "Remainder fetched");
        result.set_response(remainder.meta);

        if let Some(e) = remainder.error {
            warn!(error = %e, "Failed to read remainder body");
            return result.fail(e);
        }

        match status {
            // Nothing past the probe window.
            StatusCode::RANGE_NOT_SATISFIABLE => {}
            // Range ignored: the body is the whole resource.
            StatusCode::OK => result.replace_bytes(remainder.bytes),
            s if s.is_success() => result.append_bytes(&remainder.bytes),
            s => return result.fail(Error::InvalidStatus { status: s }),
        }

        result
    }
}
