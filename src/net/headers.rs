//! Header set sent with every JSON API request.

pub const CONTENT_HEADERS: [(&str, &str); 2] = [
    ("Accept", "application/json"),
    ("Content-Type", "application/json"),
];

/// Borrow the shared JSON content headers.
pub fn content_headers() -> &'static [(&'static str, &'static str)] {
    &CONTENT_HEADERS
}
