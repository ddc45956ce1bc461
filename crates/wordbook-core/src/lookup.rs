use std::sync::Arc;
use std::time::Duration;

use wordbook_types::{Language, LookupResult, VerbForm};

use crate::cache::{Cache, CachedValue, cache_key};
use crate::dictionary::DictionarySource;
use crate::error::LookupError;
use crate::fetch::{FetchError, PageFetcher};
use crate::normalize::normalize;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// Fetches, merges and caches dictionary entries
pub struct LookupService {
    source: Arc<dyn DictionarySource>,
    fetcher: Arc<dyn PageFetcher>,
    cache: Arc<dyn Cache<CachedValue>>,
    ttl: Duration,
}

impl LookupService {
    pub fn new(
        source: Arc<dyn DictionarySource>,
        fetcher: Arc<dyn PageFetcher>,
        cache: Arc<dyn Cache<CachedValue>>,
        ttl: Duration,
    ) -> Self {
        Self {
            source,
            fetcher,
            cache,
            ttl,
        }
    }

    /// Look up `word` in the edition named by the `language` tag
    pub async fn lookup(&self, word: &str, language: &str) -> Result<Arc<LookupResult>, LookupError> {
        let language: Language = language.parse()?;
        self.lookup_in(word, language).await
    }

    pub async fn lookup_in(
        &self,
        word: &str,
        language: Language,
    ) -> Result<Arc<LookupResult>, LookupError> {
        let word = DefaultPreprocessor.process(word);
        if word.is_empty() {
            return Err(LookupError::InvalidArgument("word must not be empty".to_string()));
        }

        let url = self.source.entry_url(&word, language);
        let key = cache_key(&url);

        if let Some(CachedValue::Entry(hit)) = self.cache.get(&key).await {
            tracing::debug!(%word, %language, "cache hit");
            return Ok(hit);
        }

        tracing::info!(%word, %language, %url, source = %self.source.metadata().name, "cache miss, fetching");

        let (page, verbs) = tokio::join!(self.fetcher.fetch(&url), self.verbs_for(&word));

        let html = page.map_err(|e| match e {
            FetchError::Status(status) => {
                tracing::info!(%word, status, "dictionary page unavailable");
                LookupError::NotFound(word.clone())
            }
            other => {
                tracing::error!(%word, error = %other, "dictionary fetch failed");
                LookupError::UpstreamUnavailable(other)
            }
        })?;

        let mut result = self.source.extract_entry(&html, &word)?;
        result.verbs = verbs;
        normalize(&mut result);

        let result = Arc::new(result);
        self.cache
            .set(key, CachedValue::Entry(Arc::clone(&result)), self.ttl)
            .await;

        Ok(result)
    }

    /// Verb forms are best effort: any failure yields an empty list
    async fn verbs_for(&self, word: &str) -> Vec<VerbForm> {
        match self.fetch_verbs(word).await {
            Ok(verbs) => (*verbs).clone(),
            Err(e) => {
                tracing::warn!(%word, error = %e, source = %self.source.metadata().verbs_name, "verb forms unavailable");
                Vec::new()
            }
        }
    }

    async fn fetch_verbs(&self, word: &str) -> Result<Arc<Vec<VerbForm>>, LookupError> {
        let url = self.source.verbs_url(word);
        let key = cache_key(&url);

        if let Some(CachedValue::Verbs(hit)) = self.cache.get(&key).await {
            return Ok(hit);
        }

        let html = self
            .fetcher
            .fetch(&url)
            .await
            .map_err(LookupError::UpstreamUnavailable)?;

        let verbs = Arc::new(self.source.extract_verbs(&html)?);
        self.cache
            .set(key, CachedValue::Verbs(Arc::clone(&verbs)), self.ttl)
            .await;

        Ok(verbs)
    }
}
