//! URL normalization and validation for user-entered addresses.

use url::Url;

use crate::error::{TableScrapeError, TableScrapeResult};

/// Normalize a user-entered URL
///
/// Surrounding whitespace is dropped and `https://` is prepended when no
/// scheme is present, so `example.com/stats` loads as
/// `https://example.com/stats`.
///
/// # Errors
///
/// Returns [`TableScrapeError::InvalidUrl`] when the result does not parse or
/// is not an http(s) URL.
pub fn normalize_url(raw: &str) -> TableScrapeResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TableScrapeError::InvalidUrl(String::new()));
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else if trimmed.contains("://") {
        // Explicit non-http scheme, leave it for validation to reject
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    if !is_valid_url(&candidate) {
        return Err(TableScrapeError::InvalidUrl(trimmed.to_string()));
    }

    Ok(candidate)
}

/// Check if a URL is valid
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    // Skip data URLs, javascript URLs, and other non-http schemes
    if url.starts_with("data:") || url.starts_with("javascript:") || url.starts_with("mailto:") {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some(),
        Err(_) => false,
    }
}
