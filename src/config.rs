//! Configuration
//!
//! Layered lowest to highest: built-in defaults, an optional JSON file,
//! `STATEFACTS_*` environment variables, then command-line flags (applied by
//! the caller).

use crate::engine::Sources;
use crate::error::{Result, StateFactsError};
use crate::tools::fetch::{FetchOptions, TlsProfile, DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

pub const DEFAULT_CENSUS_URL: &str =
    "https://api.census.gov/data/2020/dec/pl?get=NAME,P1_001N&for=state:*";
pub const DEFAULT_WIKIPEDIA_BASE: &str = "https://en.wikipedia.org";
pub const DEFAULT_COMMONS_BASE: &str = "https://commons.wikimedia.org";
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

const ENV_PREFIX: &str = "STATEFACTS_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub census_url: String,
    pub wikipedia_base: String,
    pub commons_base: String,
    pub user_agent: String,
    pub timeout_ms: u64,
    /// Fetch article pages for symbols without certificate verification.
    pub legacy_tls: bool,
    pub tls_profile: TlsProfile,
    pub bind: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            census_url: DEFAULT_CENSUS_URL.to_string(),
            wikipedia_base: DEFAULT_WIKIPEDIA_BASE.to_string(),
            commons_base: DEFAULT_COMMONS_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            legacy_tls: false,
            tls_profile: TlsProfile::default(),
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl Config {
    /// Defaults, overlaid with `path` (if given) and then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file; missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            StateFactsError::Config(format!("{}: {e}", path.display()))
        })
    }

    /// Overlay `STATEFACTS_*` variables read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(v) = var("CENSUS_URL") {
            self.census_url = v;
        }
        if let Some(v) = var("WIKIPEDIA_BASE") {
            self.wikipedia_base = v;
        }
        if let Some(v) = var("COMMONS_BASE") {
            self.commons_base = v;
        }
        if let Some(v) = var("USER_AGENT") {
            self.user_agent = v;
        }
        if let Some(v) = var("TIMEOUT_MS") {
            self.timeout_ms = v
                .parse()
                .map_err(|_| StateFactsError::Config(format!("{ENV_PREFIX}TIMEOUT_MS={v}")))?;
        }
        if let Some(v) = var("LEGACY_TLS") {
            self.legacy_tls = parse_bool(&v)
                .ok_or_else(|| StateFactsError::Config(format!("{ENV_PREFIX}LEGACY_TLS={v}")))?;
        }
        if let Some(v) = var("TLS_PROFILE") {
            self.tls_profile = v.parse().map_err(StateFactsError::Config)?;
        }
        if let Some(v) = var("BIND") {
            self.bind = v;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.sources()?;
        if self.timeout_ms == 0 {
            return Err(StateFactsError::Config("timeout_ms must be positive".into()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(StateFactsError::Config("user_agent must not be empty".into()));
        }
        Ok(())
    }

    pub fn sources(&self) -> Result<Sources> {
        Ok(Sources {
            census_url: parse_http_url("census_url", &self.census_url)?,
            wikipedia_base: parse_http_url("wikipedia_base", &self.wikipedia_base)?,
            commons_base: parse_http_url("commons_base", &self.commons_base)?,
            legacy_tls: self.legacy_tls,
            tls_profile: self.tls_profile,
        })
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            user_agent: self.user_agent.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

fn parse_http_url(field: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| StateFactsError::Config(format!("{field}: {raw:?} is not a URL ({e})")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(StateFactsError::Config(format!(
            "{field}: scheme must be http or https"
        )));
    }
    Ok(url)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
