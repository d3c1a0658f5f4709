//! Percent-encoding for URL path segments.
//!
//! Collection names and item IDs are interpolated into request paths, and a
//! string primary key may hold anything. Without encoding, a `/` in an ID
//! would address a different resource, a `?` would start a query string, and
//! a literal `%` would be decoded a second time by the server.
//!
//! # Example
//!
//! ```
//! use directus_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("report/2024"), "report%2F2024");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters percent-encoded in path segments.
///
/// RFC 3986 section 3.3 reserved characters plus the set that breaks URL
/// handling in practice: whitespace and quoting characters, the URI-template
/// brackets, `%` against double decoding, and `/`, `?`, `#` against path and
/// query confusion.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'~')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a value for safe use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
