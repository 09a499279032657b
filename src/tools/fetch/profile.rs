//! TLS Profiles
//!
//! Protocol version an insecure client is pinned to. Only meaningful for
//! [`super::ReqwestFetcher`]'s unverified path; the default client negotiates
//! freely.

use reqwest::tls::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TlsProfile {
    /// TLS 1.2 only
    #[serde(rename = "TLSv1.2")]
    Tls12,

    /// TLS 1.3 only
    #[default]
    #[serde(rename = "TLSv1.3")]
    Tls13,
}

impl TlsProfile {
    /// TLS Profile Name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tls12 => "TLSv1.2",
            Self::Tls13 => "TLSv1.3",
        }
    }

    pub(crate) fn version(&self) -> Version {
        match self {
            Self::Tls12 => Version::TLS_1_2,
            Self::Tls13 => Version::TLS_1_3,
        }
    }
}

impl fmt::Display for TlsProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TlsProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tlsv1.2" | "tls1.2" | "1.2" => Ok(Self::Tls12),
            "tlsv1.3" | "tls1.3" | "1.3" => Ok(Self::Tls13),
            other => Err(format!("unknown TLS profile: {other}")),
        }
    }
}
