//! Example validating the URLs given on the command line.
//!
//! ```sh
//! RUST_LOG=fastimage=debug cargo run --example validate -- https://example.com/a.jpg
//! ```

use color_eyre::{eyre::eyre, Result};
use fastimage::{ImageFormat, Policy, ValidatorBuilder};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        return Err(eyre!("usage: validate <url>..."));
    }

    let validator = ValidatorBuilder::new()
        .timeout(Duration::from_secs(10))
        .build()?;
    let policy = Policy::new()
        .with_formats([
            ImageFormat::Jpeg,
            ImageFormat::Png,
            ImageFormat::Gif,
            ImageFormat::Webp,
        ])
        .with_max_bytes(20 * 1024 * 1024);

    for url in &urls {
        let result = validator.validate(url, &policy).await;
        match result.error() {
            None => println!(
                "[valid] {url} ({}, {} bytes)",
                result.format().map(|f| f.to_string()).unwrap_or_default(),
                result.content_length().unwrap_or_default()
            ),
            Some(e) => println!("[{}] {url} - {e}", e.kind()),
        }
    }

    Ok(())
}
