use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

/// Fallback User-Agent when the configured one is not a valid header value.
const FALLBACK_USER_AGENT: &str = concat!("statefacts/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every request.
///
/// Wikimedia rejects requests without a descriptive User-Agent, so one is
/// always present.
pub(crate) fn default_headers(user_agent: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/json;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static(FALLBACK_USER_AGENT)),
    );
    headers
}
