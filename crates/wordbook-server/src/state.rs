use std::sync::Arc;

use anyhow::Context;
use wordbook_config::Config;
use wordbook_core::{CachedValue, HttpFetcher, LookupService, MemoryCache};
use wordbook_lang_english::EnglishDictionary;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupService>,
}

impl AppState {
    pub fn new(lookup: LookupService) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    /// Wire the English dictionary, HTTP fetcher and in-memory cache from config
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let fetcher = HttpFetcher::new(
            config.upstream.request_timeout(),
            &config.upstream.user_agent,
        )
        .context("Failed to build HTTP client")?;

        let cache = MemoryCache::<CachedValue>::new(config.cache.max_entries);
        let source = EnglishDictionary::from_config(&config.upstream);

        tracing::info!(
            dictionary = %config.upstream.dictionary_base_url,
            conjugation = %config.upstream.conjugation_base_url,
            ttl_seconds = config.cache.ttl_seconds,
            max_entries = config.cache.max_entries,
            "Lookup service configured"
        );

        Ok(Self::new(LookupService::new(
            Arc::new(source),
            Arc::new(fetcher),
            Arc::new(cache),
            config.cache.ttl(),
        )))
    }
}
