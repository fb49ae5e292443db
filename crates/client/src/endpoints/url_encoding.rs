//! Percent-encoding for uid path segments.
//!
//! Uids come from callers and are interpolated into request paths. Anything
//! outside the RFC 3986 unreserved set is encoded, so a uid like `a/b` or
//! `a?b` can never change which endpoint is hit.
//!
//! # Example
//!
//! ```
//! use grafana_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("ops/latency"), "ops%2Flatency");
//! ```

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except ALPHA / DIGIT / `-` / `.` / `_` / `~`.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string for safe use as a single URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}
