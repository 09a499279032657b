use crate::error::*;
use crate::tools::fetch::TlsProfile;
use crate::tools::{fields, images, names, population};
use crate::tools::images::ImageKind;
use crate::types::*;
use async_trait::async_trait;
use tracing::warn;
use url::Url;

/// Source of raw response bodies.
#[async_trait]
pub trait Fetcher: Send + Sync {
    fn name(&self) -> &'static str;

    /// GET `url` with full certificate and hostname verification.
    async fn fetch_text(&self, url: &str) -> Result<String>;

    /// GET `url` on a dedicated client that skips certificate and hostname
    /// verification, pinned to `profile`.
    async fn fetch_text_insecure(&self, url: &str, profile: TlsProfile) -> Result<String>;
}

/// Where each fact comes from.
#[derive(Debug, Clone)]
pub struct Sources {
    /// Bulk population endpoint, fetched as-is.
    pub census_url: Url,
    /// Base for `/wiki/<identifier>` article pages.
    pub wikipedia_base: Url,
    /// Base for `/wiki/File:<name>` media pages.
    pub commons_base: Url,
    /// Fetch article pages for symbols without certificate verification.
    pub legacy_tls: bool,
    pub tls_profile: TlsProfile,
}

impl Sources {
    /// Article URL for a state, e.g. `.../wiki/New_York_(state)`.
    pub fn article_url(&self, query: &StateQuery) -> Result<String> {
        wiki_url(&self.wikipedia_base, &query.identifier)
    }

    /// Commons file page for a state's flag or seal.
    pub fn media_url(&self, query: &StateQuery, kind: ImageKind) -> Result<String> {
        let stem = names::commons_form(&query.identifier);
        wiki_url(&self.commons_base, &format!("File:{}", kind.commons_file(&stem)))
    }
}

fn wiki_url(base: &Url, title: &str) -> Result<String> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| StateFactsError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .push("wiki")
        .push(title);
    Ok(url.to_string())
}

/// Runs lookups against a [`Fetcher`]. Holds no state between calls.
pub struct Engine<'a> {
    pub fetcher: &'a dyn Fetcher,
    pub sources: &'a Sources,
}

impl<'a> Engine<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, sources: &'a Sources) -> Self {
        Self { fetcher, sources }
    }

    pub async fn lookup(&self, state: &str, information_type: InformationType) -> FactSheet {
        match information_type {
            InformationType::Symbols => self.symbols(state).await,
            InformationType::Facts => self.facts(state).await,
        }
    }

    /// Population plus flag and seal with their credits.
    ///
    /// The four source requests are independent and run concurrently.
    pub async fn symbols(&self, state: &str) -> FactSheet {
        let query = StateQuery::from_display(state);

        let (population, page, flag_credit, seal_credit) = tokio::join!(
            self.population(&query.display_name),
            self.symbols_page(&query),
            self.credit(&query, ImageKind::Flag),
            self.credit(&query, ImageKind::Seal),
        );

        let population = degrade("population", &query, population);
        let page = degrade("article", &query, page);
        let (flag_url, seal_url) = match page.as_deref() {
            Some(html) => (
                degrade("flag", &query, images::extract_flag_url(html)),
                degrade("seal", &query, images::extract_seal_url(html)),
            ),
            None => (None, None),
        };

        let facts = StateFacts {
            population,
            flag_url,
            flag_credit: Some(flag_credit),
            seal_url,
            seal_credit: Some(seal_credit),
            ..StateFacts::default()
        };
        let display = StateQuery::from_identifier(&query.identifier).display_name;
        FactSheet::new(InformationType::Symbols, &display, facts)
    }

    /// Capital and governor, both read from one article fetch.
    pub async fn facts(&self, state: &str) -> FactSheet {
        let query = StateQuery::from_display(state);

        let page = match self.sources.article_url(&query) {
            Ok(url) => self.fetcher.fetch_text(&url).await,
            Err(e) => Err(e),
        };
        let (capital, governor) = match degrade("article", &query, page) {
            Some(html) => (
                degrade("capital", &query, fields::extract_capital(&html)),
                degrade("governor", &query, fields::extract_governor(&html)),
            ),
            None => (None, None),
        };

        let facts = StateFacts {
            capital,
            governor,
            ..StateFacts::default()
        };
        let display = StateQuery::from_identifier(&query.identifier).display_name;
        FactSheet::new(InformationType::Facts, &display, facts)
    }

    /// Population for a display name from the bulk census table.
    pub async fn population(&self, state: &str) -> Result<String> {
        let body = self
            .fetcher
            .fetch_text(self.sources.census_url.as_str())
            .await?;
        population::lookup_population(&body, state)
    }

    /// Article page used for flag and seal extraction.
    ///
    /// This is the only call site allowed to skip certificate verification,
    /// and only when `legacy_tls` is configured.
    async fn symbols_page(&self, query: &StateQuery) -> Result<String> {
        let url = self.sources.article_url(query)?;
        if self.sources.legacy_tls {
            self.fetcher
                .fetch_text_insecure(&url, self.sources.tls_profile)
                .await
        } else {
            self.fetcher.fetch_text(&url).await
        }
    }

    /// Uploader credit for a flag or seal; `"N.A."` on any failure.
    pub async fn credit(&self, query: &StateQuery, kind: ImageKind) -> String {
        let page = match self.sources.media_url(query, kind) {
            Ok(url) => self.fetcher.fetch_text(&url).await,
            Err(e) => Err(e),
        };
        match page {
            Ok(html) => fields::extract_credit(&html),
            Err(e) => {
                warn!(
                    state = %query.display_name,
                    kind = kind.name(),
                    error = %e,
                    "credit unavailable"
                );
                CREDIT_UNAVAILABLE.to_string()
            }
        }
    }
}

/// Turn a failed field into `None`, logging why.
fn degrade<T>(field: &str, query: &StateQuery, result: Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(state = %query.display_name, field, error = %e, "field unavailable");
            None
        }
    }
}
