//! Builder pattern implementation for creating Validator instances.
//!
//! # Examples
//!
//! ```rust
//! use fastimage::ValidatorBuilder;
//! use reqwest::header::{self, HeaderValue};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = ValidatorBuilder::new()
//!     .timeout(Duration::from_secs(5))
//!     .header(header::USER_AGENT, HeaderValue::from_static("fastimage/0.1"))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use super::validator::Validator;
use crate::error::Result;
use crate::http::{create_http_client, HttpClient, HttpClientConfig};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use reqwest::Proxy;
use reqwest_middleware::ClientWithMiddleware;
use std::time::Duration;

/// A builder used to create a [`Validator`].
#[derive(Debug, Default)]
pub struct ValidatorBuilder {
    http: HttpClientConfig,
    headers: Option<HeaderMap>,
}

impl ValidatorBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ValidatorBuilder::default()
    }

    /// Replace the HTTP client configuration.
    pub fn http_config(mut self, config: HttpClientConfig) -> Self {
        self.http = config;
        self
    }

    /// Set the total timeout of each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.http.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout of each request.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.http.connect_timeout = Some(timeout);
        self
    }

    /// Route requests through a proxy.
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.http.proxy = Some(proxy);
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be
    /// merged into a single one. A `Range` header is always overridden.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.headers = Some(new);
        self
    }

    /// Add the http header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.headers = Some(new);
        self
    }

    /// Create the [`Validator`] with a reqwest client built from the options.
    pub fn build(self) -> Result<Validator<ClientWithMiddleware>> {
        let client = create_http_client(self.http)?;
        Ok(Self::finish(Validator::new(client), self.headers))
    }

    /// Create the [`Validator`] around an existing client.
    ///
    /// The HTTP client options of this builder are ignored; headers are kept.
    pub fn build_with_client<C: HttpClient>(self, client: C) -> Validator<C> {
        Self::finish(Validator::new(client), self.headers)
    }

    fn finish<C: HttpClient>(validator: Validator<C>, headers: Option<HeaderMap>) -> Validator<C> {
        match headers {
            Some(headers) => validator.with_headers(headers),
            None => validator,
        }
    }
}
