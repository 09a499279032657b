//! Tests

#[cfg(test)]
mod tests {
    use crate::engine::{Engine, Fetcher, Sources};
    use crate::error::{Result, StateFactsError};
    use crate::tools::fetch::TlsProfile;
    use crate::tools::images::ImageKind;
    use crate::types::{InformationType, StateQuery};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use url::Url;

    /// Serves canned bodies by URL and records every call.
    #[derive(Default)]
    struct CannedFetcher {
        pages: HashMap<String, String>,
        calls: Mutex<Vec<(String, Option<TlsProfile>)>>,
    }

    impl CannedFetcher {
        fn with(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }

        fn serve(&self, url: &str, profile: Option<TlsProfile>) -> Result<String> {
            self.calls.lock().unwrap().push((url.to_string(), profile));
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| StateFactsError::fetch_error(url, "404 (not found)"))
        }

        fn calls(&self) -> Vec<(String, Option<TlsProfile>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetcher for CannedFetcher {
        fn name(&self) -> &'static str {
            "canned"
        }

        async fn fetch_text(&self, url: &str) -> Result<String> {
            self.serve(url, None)
        }

        async fn fetch_text_insecure(&self, url: &str, profile: TlsProfile) -> Result<String> {
            self.serve(url, Some(profile))
        }
    }

    const CENSUS: &str = "https://census.test/pl?get=NAME,P1_001N&for=state:*";

    fn sources(legacy_tls: bool) -> Sources {
        Sources {
            census_url: Url::parse(CENSUS).unwrap(),
            wikipedia_base: Url::parse("https://en.wiki.test").unwrap(),
            commons_base: Url::parse("https://commons.wiki.test").unwrap(),
            legacy_tls,
            tls_profile: TlsProfile::Tls12,
        }
    }

    const OHIO_ARTICLE: &str = concat!(
        r#"<div class="ib-settlement-cols-cell"><span typeof="mw:File"><a href="/wiki/File:Flag_of_Ohio.svg"><img src="//img.test/flag.svg"></a></span></div>"#,
        r#"<div class="ib-settlement-cols-cell"><span typeof="mw:File"><a href="/wiki/File:Seal_of_Ohio.svg"><img src="//img.test/seal.svg"></a></span></div>"#,
    );

    #[test]
    fn article_and_media_urls() {
        let sources = sources(false);
        let ny = StateQuery::from_display("New York");
        assert_eq!(
            sources.article_url(&ny).unwrap(),
            "https://en.wiki.test/wiki/New_York_(state)"
        );

        let georgia = StateQuery::from_display("Georgia");
        assert_eq!(
            sources.media_url(&georgia, ImageKind::Seal).unwrap(),
            "https://commons.wiki.test/wiki/File:Seal_of_the_State_of_Georgia.svg"
        );
    }

    #[tokio::test]
    async fn symbols_use_insecure_client_only_for_article() {
        let fetcher = CannedFetcher::default()
            .with(CENSUS, r#"[["NAME","P1_001N"],["Ohio","11799448"]]"#)
            .with("https://en.wiki.test/wiki/Ohio", OHIO_ARTICLE);
        let sources = sources(true);

        let sheet = Engine::new(&fetcher, &sources)
            .lookup("Ohio", InformationType::Symbols)
            .await;

        assert_eq!(sheet.facts.population.as_deref(), Some("11799448"));
        assert_eq!(sheet.facts.flag_url.as_deref(), Some("//img.test/flag.svg"));
        assert_eq!(sheet.facts.seal_url.as_deref(), Some("//img.test/seal.svg"));
        assert_eq!(sheet.facts.flag_credit.as_deref(), Some("N.A."));

        let insecure: Vec<_> = fetcher
            .calls()
            .into_iter()
            .filter(|(_, profile)| profile.is_some())
            .collect();
        assert_eq!(
            insecure,
            vec![(
                "https://en.wiki.test/wiki/Ohio".to_string(),
                Some(TlsProfile::Tls12)
            )]
        );
    }

    #[tokio::test]
    async fn verified_client_by_default() {
        let fetcher = CannedFetcher::default();
        let sources = sources(false);

        Engine::new(&fetcher, &sources)
            .lookup("Ohio", InformationType::Symbols)
            .await;

        let calls = fetcher.calls();
        assert_eq!(calls.len(), 4);
        assert!(calls.iter().all(|(_, profile)| profile.is_none()));
    }

    #[tokio::test]
    async fn facts_fetch_article_once() {
        let fetcher = CannedFetcher::default();
        let sources = sources(true);

        let sheet = Engine::new(&fetcher, &sources)
            .lookup("Washington", InformationType::Facts)
            .await;

        assert_eq!(sheet.state, "Washington");
        assert!(sheet.facts.capital.is_none());
        assert!(sheet.facts.governor.is_none());
        assert_eq!(
            fetcher.calls(),
            vec![("https://en.wiki.test/wiki/Washington_(state)".to_string(), None)]
        );
    }

    #[tokio::test]
    async fn symbols_degrade_when_every_source_fails() {
        let fetcher = CannedFetcher::default();
        let sources = sources(false);

        let sheet = Engine::new(&fetcher, &sources)
            .lookup("Georgia", InformationType::Symbols)
            .await;

        assert_eq!(sheet.state, "Georgia");
        assert!(sheet.facts.population.is_none());
        assert!(sheet.facts.flag_url.is_none());
        assert!(sheet.facts.seal_url.is_none());
        assert_eq!(sheet.facts.seal_credit.as_deref(), Some("N.A."));
    }
}
