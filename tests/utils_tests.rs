//! Tests for utility functions.

use fastimage::{effective_content_length, parse_content_range_total, ResponseMeta};
use reqwest::StatusCode;

mod common;
use common::helpers::*;

#[test]
fn test_content_range_parsing_table() {
    let cases = [
        ("bytes 0-1023/2048", Some(2048)),
        ("bytes 200-1023/5000", Some(5000)),
        ("bytes 0-11/500", Some(500)),
        ("bytes 0-0/1", Some(1)),
        ("bytes 0-11/*", None),
        ("invalid", None),
        ("bytes 0-1023", None),
        ("", None),
    ];

    for (input, expected) in cases {
        assert_eq!(parse_content_range_total(input), expected, "input: {input:?}");
    }
}

#[test]
fn test_effective_content_length() {
    let partial = ResponseMeta {
        status: StatusCode::PARTIAL_CONTENT,
        headers: content_range_headers("bytes 0-11/500"),
        content_length: Some(12),
    };
    assert_eq!(effective_content_length(&partial), 500);

    let full = ResponseMeta {
        status: StatusCode::OK,
        headers: content_range_headers("bytes 0-11/500"),
        content_length: Some(2048),
    };
    assert_eq!(effective_content_length(&full), 2048);
}
