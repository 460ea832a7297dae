use url::{Host, Url};

/// Link shorteners are refused: their targets are unknown until followed.
const SHORTENER_DOMAINS: &[&str] = &["bit.ly", "goo.gl", "t.co"];

/// Whether `raw` is an `http(s)` URL that does not point at a local address or
/// a link shortener.
#[must_use]
pub fn is_valid_url(raw: &str) -> bool {
    let Ok(url) = Url::parse(raw) else {
        return false;
    };

    if url.scheme() != "http" && url.scheme() != "https" {
        return false;
    }

    let hostname = match url.host() {
        Some(Host::Domain(domain)) => domain.to_ascii_lowercase(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(_)) | None => return false,
    };

    let is_local = hostname == "localhost"
        || hostname.starts_with("127.")
        || hostname.starts_with("10.")
        || hostname.starts_with("192.168.");
    if is_local {
        return false;
    }

    !SHORTENER_DOMAINS.contains(&hostname.as_str())
}
