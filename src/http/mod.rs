//! HTTP plumbing: client construction, the transport trait and range requests.
//!
//! # Overview
//!
//! - [`client`] - reqwest client creation and middleware configuration
//! - [`transport`] - the [`HttpClient`] trait the validator sends requests through
//! - [`range`] - `Range` header formatting and the [`RangeFetcher`]
//!
//! # Examples
//!
//! ## Fetching the probe window
//!
//! ```rust,no_run
//! use fastimage::http::{create_http_client, HttpClientConfig, RangeFetcher};
//! use reqwest::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! let fetcher = RangeFetcher::new(client);
//!
//! let url = Url::parse("https://example.com/photo.jpg")?;
//! let response = fetcher.fetch_probe(&url).await?;
//! println!("status: {}", response.status());
//!
//! let drained = response.drain().await;
//! println!("first bytes: {:02x?}", drained.bytes);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod range;
pub mod transport;

pub use client::{create_http_client, HttpClientConfig};
pub use range::{ByteRange, RangeFetcher, PROBE_LEN};
pub use transport::{
    BodyStream, DrainedBody, HttpClient, ResponseMeta, TransportRequest, TransportResponse,
};
