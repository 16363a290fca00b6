/// URL normalization and registrable-domain extraction for the URL dedupe tool
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::{Result, TkdError};

static SCHEME_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://").expect("scheme prefix pattern is valid")
});

/// Trim whitespace and byte-order marks from both ends of an input line
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Ensure the line carries an http(s) scheme, prepending `http://` when it does not.
///
/// The check is anchored and case-insensitive, so `HTTPS://site.com` is kept as is
/// while `site.com/path` becomes `http://site.com/path`. Any other scheme is
/// treated as part of the host and gets the prefix too.
pub fn normalize_url(line: &str) -> String {
    let trimmed = trim_line(line);
    if SCHEME_PREFIX.is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

/// Parse a raw input line into a URL after scheme normalization
pub fn parse_line(line: &str) -> Result<Url> {
    let normalized = normalize_url(line);
    Url::parse(&normalized).map_err(|e| TkdError::InvalidUrl {
        line: trim_line(line).to_string(),
        reason: e.to_string(),
    })
}

/// Reduce a hostname to its grouping key
///
/// Algorithm:
/// 1. Split hostname by "."
/// 2. Two or more labels → last two labels joined by "."
/// 3. Otherwise → the hostname itself
///
/// Multi-label public suffixes are not special-cased:
/// - blog.example.com → example.com
/// - news.bbc.co.uk → co.uk
/// - localhost → localhost
pub fn registrable_domain(hostname: &str) -> String {
    let parts: Vec<&str> = hostname.split('.').collect();

    if parts.len() < 2 {
        return hostname.to_string();
    }

    parts[parts.len() - 2..].join(".")
}

/// Extract the grouping key for a raw input line
pub fn extract_domain(line: &str) -> Result<String> {
    let url = parse_line(line)?;
    let host = url.host_str().ok_or_else(|| TkdError::InvalidUrl {
        line: trim_line(line).to_string(),
        reason: "URL has no host".to_string(),
    })?;

    Ok(registrable_domain(host))
}
