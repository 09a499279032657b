use crate::error::{Result, StateFactsError};
use reqwest::StatusCode;

/// Reject non-success statuses with a readable reason.
///
/// Bodies are not inspected; a 200 with an unexpected page is left for the
/// extractors to report as `NotFound`.
pub(super) fn validate_status(url: &str, status: StatusCode) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    let reason = match status {
        StatusCode::TOO_MANY_REQUESTS => "rate limited",
        StatusCode::FORBIDDEN => "forbidden",
        StatusCode::NOT_FOUND => "not found",
        StatusCode::UNAUTHORIZED => "unauthorized",
        StatusCode::BAD_REQUEST => "bad request",
        s if s.is_server_error() => "server error",
        _ => "unexpected status",
    };
    Err(StateFactsError::fetch_error(
        url,
        &format!("status {} ({})", status.as_u16(), reason),
    ))
}
