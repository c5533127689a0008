//! The transport seam.
//!
//! The validator never talks to reqwest directly. It goes through the
//! [`HttpClient`] trait, which sends one request and hands back the status,
//! the headers and a one-shot body stream. The reqwest clients implement it;
//! tests plug in scripted doubles.

use crate::error::{Error, Result};

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, Stream, StreamExt};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::pin::Pin;
use std::sync::Arc;

/// One-shot response body.
pub type BodyStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

/// Anything able to send a [`TransportRequest`].
///
/// Implementations must be usable from several in-flight validations at
/// once; connection pooling, TLS and deadlines are their business.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send the request and return the response head with an unread body.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// A request as seen by the transport.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

impl TransportRequest {
    /// Create a `GET` request without headers.
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            headers: HeaderMap::new(),
        }
    }

    /// Set a header, replacing any previous value.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Get a header value as a string, if present and visible ASCII.
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Response metadata kept once the body has been consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Body length as reported by the transport.
    pub content_length: Option<u64>,
}

impl ResponseMeta {
    /// Get a header value as a string, if present and visible ASCII.
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A response whose body has not been read yet.
pub struct TransportResponse {
    meta: ResponseMeta,
    body: BodyStream,
}

impl fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportResponse")
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

/// Everything read out of a [`TransportResponse`].
#[derive(Debug)]
pub struct DrainedBody {
    pub meta: ResponseMeta,
    /// Bytes read before the stream ended or failed.
    pub bytes: Vec<u8>,
    /// The read error that cut the body short, if any.
    pub error: Option<Error>,
}

impl TransportResponse {
    /// Create a response from its parts.
    pub fn new(
        status: StatusCode,
        headers: HeaderMap,
        content_length: Option<u64>,
        body: BodyStream,
    ) -> Self {
        Self {
            meta: ResponseMeta {
                status,
                headers,
                content_length,
            },
            body,
        }
    }

    /// Create a response with an in-memory body.
    ///
    /// The reported content length is the length of `body`.
    pub fn from_bytes(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        let body: Bytes = body.into();
        let content_length = Some(body.len() as u64);
        Self::new(
            status,
            headers,
            content_length,
            Box::pin(stream::once(async move { Ok::<_, Error>(body) })),
        )
    }

    fn from_reqwest(response: reqwest::Response) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let content_length = response.content_length();
        let body = response.bytes_stream().map(|chunk| chunk.map_err(Error::from));
        Self::new(status, headers, content_length, Box::pin(body))
    }

    /// Get the response status.
    pub fn status(&self) -> StatusCode {
        self.meta.status
    }

    /// Get the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.meta.headers
    }

    /// Get the body length reported by the transport.
    pub fn content_length(&self) -> Option<u64> {
        self.meta.content_length
    }

    /// Get the response metadata.
    pub fn meta(&self) -> &ResponseMeta {
        &self.meta
    }

    /// Read the body to its end.
    ///
    /// A read error stops the drain; the bytes received until then are kept
    /// and returned along with the error. The stream is dropped before this
    /// returns, which releases the underlying connection.
    pub async fn drain(self) -> DrainedBody {
        let Self { meta, mut body } = self;
        let capacity = meta.content_length.unwrap_or(0).min(64 * 1024) as usize;
        let mut bytes = Vec::with_capacity(capacity);
        let mut error = None;

        while let Some(chunk) = body.next().await {
            match chunk {
                Ok(chunk) => bytes.extend_from_slice(&chunk),
                Err(e) => {
                    error = Some(e);
                    break;
                }
            }
        }
        drop(body);

        DrainedBody { meta, bytes, error }
    }
}

#[async_trait]
impl HttpClient for ClientWithMiddleware {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        let response = self
            .request(request.method, request.url)
            .headers(request.headers)
            .send()
            .await?;
        Ok(TransportResponse::from_reqwest(response))
    }
}

#[async_trait]
impl HttpClient for reqwest::Client {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        let response = self
            .request(request.method, request.url)
            .headers(request.headers)
            .send()
            .await?;
        Ok(TransportResponse::from_reqwest(response))
    }
}

#[async_trait]
impl<T> HttpClient for Arc<T>
where
    T: HttpClient + ?Sized,
{
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        (**self).send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::CONTENT_RANGE;

    #[tokio::test]
    async fn test_drain_in_memory_body() {
        let response =
            TransportResponse::from_bytes(StatusCode::OK, HeaderMap::new(), &b"hello"[..]);
        assert_eq!(response.content_length(), Some(5));

        let drained = response.drain().await;
        assert_eq!(drained.bytes, b"hello");
        assert!(drained.error.is_none());
        assert_eq!(drained.meta.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_drain_keeps_bytes_read_before_error() {
        let chunks: Vec<Result<Bytes>> = vec![
            Ok(Bytes::from_static(b"abc")),
            Ok(Bytes::from_static(b"def")),
            Err(Error::transport("connection closed")),
            Ok(Bytes::from_static(b"never read")),
        ];
        let response = TransportResponse::new(
            StatusCode::PARTIAL_CONTENT,
            HeaderMap::new(),
            Some(12),
            Box::pin(stream::iter(chunks)),
        );

        let drained = response.drain().await;
        assert_eq!(drained.bytes, b"abcdef");
        assert!(drained.error.is_some_and(|e| e.is_transport()));
    }

    #[test]
    fn test_header_str() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_RANGE, HeaderValue::from_static("bytes 0-11/500"));
        let response =
            TransportResponse::from_bytes(StatusCode::PARTIAL_CONTENT, headers, Bytes::new());

        assert_eq!(
            response.meta().header_str("content-range"),
            Some("bytes 0-11/500")
        );
        assert_eq!(response.meta().header_str("content-length"), None);
    }

    #[test]
    fn test_request_builder_replaces_header() {
        let url = Url::parse("https://example.com/a.png").unwrap();
        let request = TransportRequest::get(url)
            .header(reqwest::header::RANGE, HeaderValue::from_static("bytes=0-1"))
            .header(reqwest::header::RANGE, HeaderValue::from_static("bytes=0-11"));

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.header_str("range"), Some("bytes=0-11"));
        assert_eq!(request.headers.len(), 1);
    }
}
