mod client;
mod headers;
mod profile;
mod utils;

pub use profile::TlsProfile;

use crate::engine::Fetcher;
use crate::error::{Result, StateFactsError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use utils::validate_status;

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_USER_AGENT: &str = concat!(
    "statefacts/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/statefacts/statefacts)"
);

/// Transport settings shared by every client the fetcher builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchOptions {
    pub user_agent: String,
    pub timeout_ms: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// HTTP fetcher backed by reqwest.
///
/// Holds one verifying client for the lifetime of the fetcher. Unverified
/// clients are built per call by [`Fetcher::fetch_text_insecure`] and dropped
/// with the response, so relaxed TLS never leaks into other requests.
pub struct ReqwestFetcher {
    client: Client,
    opts: FetchOptions,
}

impl ReqwestFetcher {
    pub fn new(opts: FetchOptions) -> Result<Self> {
        let client = client::build_client(&opts)?;
        Ok(Self { client, opts })
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "GET");
        get_text(&self.client, url).await
    }

    async fn fetch_text_insecure(&self, url: &str, profile: TlsProfile) -> Result<String> {
        tracing::debug!(url, tls = %profile, "GET without certificate verification");
        let client = client::build_insecure_client(&self.opts, profile)?;
        get_text(&client, url).await
    }
}

async fn get_text(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| StateFactsError::fetch_error(url, &format!("HTTP request failed: {e}")))?;

    validate_status(url, response.status())?;

    // Always UTF-8, whatever charset the server declares.
    let bytes = response
        .bytes()
        .await
        .map_err(|e| StateFactsError::fetch_error(url, &format!("failed to read response: {e}")))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
