//! Content length extraction utilities.
//!
//! Some CDNs only tell the size of a resource through `Content-Range` when
//! answering a range request, so the total is taken from there on
//! `206 Partial Content` and from the reported body length otherwise.

use crate::http::ResponseMeta;

use reqwest::header::CONTENT_RANGE;
use reqwest::StatusCode;

/// Parse Content-Range header to extract total size.
///
/// Content-Range header format: "bytes start-end/total". The second
/// `/`-separated segment must be an integer; anything else (including the
/// `*` unknown-size marker) yields `None`.
///
/// # Example
///
/// ```rust
/// use fastimage::utils::parse_content_range_total;
///
/// assert_eq!(parse_content_range_total("bytes 0-11/2048"), Some(2048));
/// assert_eq!(parse_content_range_total("bytes 0-11/*"), None);
/// ```
pub fn parse_content_range_total(content_range: &str) -> Option<u64> {
    let mut segments = content_range.split('/');
    segments.next()?;
    segments
        .next()
        .and_then(|size| size.trim().parse::<u64>().ok())
}

/// Size of the whole resource behind a response.
///
/// On `206` the `Content-Range` total is used; when it is missing or
/// unparseable this silently falls back to the transport-reported length.
/// An unknown length counts as zero.
pub fn effective_content_length(meta: &ResponseMeta) -> u64 {
    let reported = meta.content_length.unwrap_or(0);
    if meta.status != StatusCode::PARTIAL_CONTENT {
        return reported;
    }

    meta.headers
        .get(CONTENT_RANGE)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_content_range_total)
        .unwrap_or(reported)
}
