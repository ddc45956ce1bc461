use wordbook_types::{Language, LookupResult, VerbForm};

use crate::error::LookupError;

/// A pair of scraped sites that together answer a lookup.
///
/// Implementations own URL construction and HTML extraction; fetching,
/// caching and merging are handled by [`crate::lookup::LookupService`].
pub trait DictionarySource: Send + Sync {
    /// Dictionary page for `word` in the given edition
    fn entry_url(&self, word: &str, language: Language) -> String;

    /// Conjugation page for `word`; independent of the edition
    fn verbs_url(&self, word: &str) -> String;

    /// Parse a dictionary page. `word` is used when the page has no headword.
    ///
    /// Fails with [`LookupError::NotFound`] when the page has no entry at all.
    /// The returned result has no verbs.
    fn extract_entry(&self, html: &str, word: &str) -> Result<LookupResult, LookupError>;

    /// Parse a conjugation page into verb forms, in page order
    fn extract_verbs(&self, html: &str) -> Result<Vec<VerbForm>, LookupError>;

    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub verbs_name: String,
}
