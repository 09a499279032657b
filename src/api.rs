use crate::config::Config;
use crate::engine::*;
use crate::error::*;
use crate::tools::fetch::ReqwestFetcher;
use crate::types::*;
use std::time::Instant;
use tracing::info;

/* ------------ public facade components ------------ */

pub struct Components {
    pub fetcher: Box<dyn Fetcher>,
    pub sources: Sources,
}

impl Components {
    /// Production components: a reqwest fetcher and the configured sources.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = ReqwestFetcher::new(config.fetch_options())?;
        Ok(Self {
            fetcher: Box::new(fetcher),
            sources: config.sources()?,
        })
    }

    pub fn with_fetcher(fetcher: Box<dyn Fetcher>, sources: Sources) -> Self {
        Self { fetcher, sources }
    }
}

pub fn make_engine(components: &Components) -> Engine<'_> {
    Engine::new(&*components.fetcher, &components.sources)
}

/* ------------ lookup entrypoints ------------ */

/// Look up one group of facts for a state.
///
/// Only an unusable state name is an error; source failures leave the
/// affected fields empty.
pub async fn lookup(
    components: &Components,
    state: &str,
    information_type: InformationType,
) -> Result<FactSheet> {
    let state = normalize_input(state)?;
    let start_time = Instant::now();

    let sheet = make_engine(components).lookup(&state, information_type).await;

    let found = sheet.template_vars().iter().filter(|(_, v)| v.is_some()).count();
    info!(
        state = %sheet.state,
        kind = information_type.as_param(),
        fields = found,
        fetcher = components.fetcher.name(),
        "lookup finished in {}ms",
        start_time.elapsed().as_millis()
    );
    Ok(sheet)
}

/// Population, flag, seal and image credits.
pub async fn population_and_symbols(components: &Components, state: &str) -> Result<FactSheet> {
    lookup(components, state, InformationType::Symbols).await
}

/// Capital and governor.
pub async fn state_facts(components: &Components, state: &str) -> Result<FactSheet> {
    lookup(components, state, InformationType::Facts).await
}

/// Trim the user's input and refuse names that cannot be a page title.
fn normalize_input(state: &str) -> Result<String> {
    let state = state.trim();
    if state.is_empty() {
        return Err(StateFactsError::not_found("state name"));
    }
    if state.contains(['/', '#', '?']) {
        return Err(StateFactsError::InvalidUrl(format!(
            "state name {state:?} contains a reserved character"
        )));
    }
    if state.chars().all(|c| c == '.') {
        return Err(StateFactsError::InvalidUrl(format!(
            "state name {state:?} is not a page title"
        )));
    }
    Ok(state.to_string())
}
