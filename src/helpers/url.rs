//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped inside a path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode each segment of a path, keeping the `/` separators
///
/// # Examples
/// ```ignore
/// encode_path("2024/你好 world") // -> "2024/%E4%BD%A0%E5%A5%BD%20world"
/// ```
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Join a site URL and an absolute path without doubling slashes
///
/// # Examples
/// ```ignore
/// full_url("https://idaibin.dev/", "/blog/intro/") // -> "https://idaibin.dev/blog/intro/"
/// ```
pub fn full_url(site: &str, path: &str) -> String {
    format!(
        "{}/{}",
        site.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Route of a post page
pub fn post_path(id: &str) -> String {
    format!("/blog/{}/", encode_path(id))
}
