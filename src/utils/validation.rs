//! Absolute URL validation for the shortener.

use regex::Regex;
use std::sync::LazyLock;

/// Accepts http/https/ftp/ftps URLs whose host is a dotted hostname,
/// `localhost`, or a dotted-quad IPv4 address, with optional port, path,
/// and query.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:http|ftp)s?://(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)|localhost|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})(?::\d+)?(?:/?|[/?]\S+)$",
    )
    .expect("URL regex must compile")
});

/// Returns true when `url` is an acceptable absolute URL.
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}
