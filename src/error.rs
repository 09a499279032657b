use thiserror::Error;

pub type Result<T> = std::result::Result<T, StateFactsError>;

#[derive(Debug, Error)]
pub enum StateFactsError {
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("could not parse {what}: {reason}")]
    Parse { what: String, reason: String },

    #[error("{what} not found")]
    NotFound { what: String },

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StateFactsError {
    pub fn fetch_error(url: &str, reason: &str) -> Self {
        Self::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(what: &str, reason: &str) -> Self {
        Self::Parse {
            what: what.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn not_found(what: &str) -> Self {
        Self::NotFound {
            what: what.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/* Conversions so `?` works smoothly */
impl From<reqwest::Error> for StateFactsError {
    fn from(e: reqwest::Error) -> Self {
        let url = e.url().map(|u| u.to_string()).unwrap_or_default();
        StateFactsError::Fetch {
            url,
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for StateFactsError {
    fn from(e: serde_json::Error) -> Self {
        StateFactsError::parse_error("json", &e.to_string())
    }
}

impl From<url::ParseError> for StateFactsError {
    fn from(e: url::ParseError) -> Self {
        StateFactsError::InvalidUrl(e.to_string())
    }
}
