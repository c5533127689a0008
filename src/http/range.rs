//! Range requests.
//!
//! The [`RangeFetcher`] issues `GET` requests carrying a `Range` header and
//! returns the response untouched. Servers may answer `206 Partial Content`,
//! ignore the header and answer `200` with the whole body, or answer `416`
//! when the resource is shorter than the range; it is up to the caller to
//! make sense of the status.

use super::transport::{HttpClient, TransportRequest, TransportResponse};
use crate::error::{Error, Result};

use reqwest::header::{HeaderMap, HeaderValue, RANGE};
use reqwest::Url;
use std::fmt;
use tracing::trace;

/// Size of the probe window, enough for the longest known signature.
pub const PROBE_LEN: usize = 12;

/// An inclusive byte range, open-ended when `end` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: Option<u64>,
}

impl ByteRange {
    /// Bytes `start` through `end`, both inclusive.
    pub fn bounded(start: u64, end: u64) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Bytes from `start` to the end of the resource.
    pub fn from_offset(start: u64) -> Self {
        Self { start, end: None }
    }

    /// The probe window: bytes `0..PROBE_LEN`.
    pub fn probe() -> Self {
        Self::bounded(0, PROBE_LEN as u64 - 1)
    }

    /// Everything after the probe window.
    pub fn remainder() -> Self {
        Self::from_offset(PROBE_LEN as u64)
    }

    /// Value of the `Range` request header.
    pub fn header_value(&self) -> Result<HeaderValue> {
        HeaderValue::from_str(&self.to_string()).map_err(Error::transport)
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "bytes={}-{}", self.start, end),
            None => write!(f, "bytes={}-", self.start),
        }
    }
}

/// Issues ranged `GET` requests over an [`HttpClient`].
#[derive(Debug, Clone)]
pub struct RangeFetcher<C> {
    client: C,
    headers: HeaderMap,
}

impl<C: HttpClient> RangeFetcher<C> {
    /// Create a fetcher sending through `client`.
    pub fn new(client: C) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
        }
    }

    /// Extra headers sent with every request. `Range` is always overridden.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Get the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get the extra request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Fetch `range` of the resource at `url`.
    ///
    /// Transport failures are returned as they come.
    pub async fn fetch_range(&self, url: &Url, range: ByteRange) -> Result<TransportResponse> {
        let mut request = TransportRequest::get(url.clone());
        request.headers.extend(self.headers.clone());
        let request = request.header(RANGE, range.header_value()?);

        trace!(url = %url, range = %range, "Sending range request");
        self.client.send(request).await
    }

    /// Fetch the probe window.
    pub async fn fetch_probe(&self, url: &Url) -> Result<TransportResponse> {
        self.fetch_range(url, ByteRange::probe()).await
    }

    /// Fetch everything after the probe window.
    pub async fn fetch_remainder(&self, url: &Url) -> Result<TransportResponse> {
        self.fetch_range(url, ByteRange::remainder()).await
    }
}
