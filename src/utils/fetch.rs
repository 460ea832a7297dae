//! Page retrieval for the summarize endpoint.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::info;

use crate::errors::FetchError;

const TEXTUAL_APPLICATION_TYPES: &[&str] =
    &["application/xhtml+xml", "application/xml", "application/json"];

/// Lowercased MIME type without parameters (`text/html; charset=utf-8` → `text/html`).
#[must_use]
pub fn canonicalize_mime(mime: &str) -> String {
    mime.split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

#[must_use]
pub fn is_textual_mime(mime: &str) -> bool {
    let canonical = canonicalize_mime(mime);
    canonical.starts_with("text/") || TEXTUAL_APPLICATION_TYPES.contains(&canonical.as_str())
}

/// GET `url` and return its body as text.
///
/// # Errors
///
/// [`FetchError::Status`] on a non-success status,
/// [`FetchError::UnsupportedContentType`] when the declared type is not
/// textual, and [`FetchError::Http`] for transport failures.
pub async fn fetch_content(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.to_string()));
    }

    if let Some(content_type) = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        && !is_textual_mime(content_type)
    {
        return Err(FetchError::UnsupportedContentType(canonicalize_mime(
            content_type,
        )));
    }

    let body = response.text().await?;
    info!(body_chars = body.len(), "Fetched page content");
    Ok(body)
}
