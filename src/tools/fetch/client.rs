use super::headers::default_headers;
use super::profile::TlsProfile;
use super::FetchOptions;
use crate::error::{Result, StateFactsError};
use reqwest::{redirect, Client, ClientBuilder};
use std::time::Duration;

const REDIRECT_LIMIT: usize = 10;
const POOL_IDLE_TIMEOUT_SEC: u64 = 90;

fn base_builder(opts: &FetchOptions) -> ClientBuilder {
    Client::builder()
        .use_rustls_tls()
        .default_headers(default_headers(&opts.user_agent))
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .timeout(Duration::from_millis(opts.timeout_ms))
        .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SEC))
}

/// Build the shared client. Certificates and hostnames are always verified.
pub(crate) fn build_client(opts: &FetchOptions) -> Result<Client> {
    base_builder(opts)
        .build()
        .map_err(|e| StateFactsError::Config(format!("failed to build client: {e}")))
}

/// Build a one-off client that skips certificate verification.
///
/// With rustls, turning off certificate verification also turns off hostname
/// checks, so anyone on the network path can impersonate the server. The
/// returned client must only ever be used for the single request it was built
/// for and then dropped; it is never cached or shared.
pub(crate) fn build_insecure_client(opts: &FetchOptions, profile: TlsProfile) -> Result<Client> {
    base_builder(opts)
        .danger_accept_invalid_certs(true)
        .min_tls_version(profile.version())
        .max_tls_version(profile.version())
        .build()
        .map_err(|e| StateFactsError::Config(format!("failed to build {profile} client: {e}")))
}
