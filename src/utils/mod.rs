//! Shared utility functions.
//!
//! - [`content_length`] - resource size from `Content-Range` / reported length
//!
//! # Examples
//!
//! ```rust
//! use fastimage::utils::parse_content_range_total;
//!
//! let header_value = "bytes 0-11/2048";
//! if let Some(total_size) = parse_content_range_total(header_value) {
//!     println!("Total file size: {} bytes", total_size);
//! }
//! ```

pub mod content_length;

pub use content_length::{effective_content_length, parse_content_range_total};
