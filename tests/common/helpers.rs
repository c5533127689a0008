#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use fastimage::error::{Error, Result};
use fastimage::http::{HttpClient, TransportRequest, TransportResponse};
use fastimage::{ImageFormat, Policy};
use futures::stream;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_RANGE};
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// Common test constants
pub const TEST_URL: &str = "https://images.example.com/photo.jpg";
pub const TEST_TOTAL_SIZE: usize = 500;

/// JPEG/JFIF header as served by most cameras and encoders.
pub const JPEG_PROBE: [u8; 12] = [
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01,
];
pub const PNG_PROBE: [u8; 12] = [
    0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n', 0x00, 0x00, 0x00, 0x0D,
];
pub const HTML_PAGE: &[u8] = b"<!DOCTYPE html><html><body>Not Found</body></html>";

/// What the scripted client answers to the next request.
pub enum Scripted {
    Response(TransportResponse),
    Failure(Error),
}

/// An in-memory [`HttpClient`] replaying queued answers and recording requests.
#[derive(Clone, Default)]
pub struct ScriptedClient {
    answers: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<TransportRequest>>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn respond(self, response: TransportResponse) -> Self {
        self.answers
            .lock()
            .unwrap()
            .push_back(Scripted::Response(response));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, error: Error) -> Self {
        self.answers
            .lock()
            .unwrap()
            .push_back(Scripted::Failure(error));
        self
    }

    /// Requests sent so far.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// `Range` headers of the requests sent so far.
    pub fn ranges(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r.header_str("range").unwrap_or_default().to_string())
            .collect()
    }
}

#[async_trait]
impl HttpClient for ScriptedClient {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(request);
        let next = self.answers.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Response(response)) => Ok(response),
            Some(Scripted::Failure(error)) => Err(error),
            None => Err(Error::transport("no scripted response left")),
        }
    }
}

// === Response Helpers ===

/// Creates the content of a test resource of `size` bytes starting with `header`.
pub fn create_test_content(header: &[u8], size: usize) -> Vec<u8> {
    let mut content = header.to_vec();
    content.extend((header.len()..size).map(|i| (i % 256) as u8));
    content
}

/// Headers carrying a `Content-Range` value.
pub fn content_range_headers(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_RANGE,
        HeaderValue::from_str(value).expect("Invalid header value"),
    );
    headers
}

/// A `206` answer to the probe request for a resource of `total` bytes.
pub fn partial_probe(probe: &[u8], total: usize) -> TransportResponse {
    let end = probe.len().saturating_sub(1);
    TransportResponse::from_bytes(
        StatusCode::PARTIAL_CONTENT,
        content_range_headers(&format!("bytes 0-{end}/{total}")),
        probe.to_vec(),
    )
}

/// A `206` answer to the remainder request.
pub fn partial_remainder(remainder: &[u8], total: usize) -> TransportResponse {
    TransportResponse::from_bytes(
        StatusCode::PARTIAL_CONTENT,
        content_range_headers(&format!("bytes 12-{}/{total}", total - 1)),
        remainder.to_vec(),
    )
}

/// A plain answer without range headers.
pub fn plain_response(status: StatusCode, body: &[u8]) -> TransportResponse {
    TransportResponse::from_bytes(status, HeaderMap::new(), body.to_vec())
}

/// A response whose body stream fails after delivering `body`.
pub fn truncated_response(
    status: StatusCode,
    headers: HeaderMap,
    body: &[u8],
    reported: Option<u64>,
) -> TransportResponse {
    let chunks: Vec<Result<Bytes>> = vec![
        Ok(Bytes::copy_from_slice(body)),
        Err(Error::transport("connection closed before message completed")),
    ];
    TransportResponse::new(status, headers, reported, Box::pin(stream::iter(chunks)))
}

// === Policy Helpers ===

/// JPEG only, between 100 and 1000 bytes.
pub fn create_jpeg_policy() -> Policy {
    Policy::new()
        .with_formats([ImageFormat::Jpeg])
        .with_min_bytes(100)
        .with_max_bytes(1000)
}
