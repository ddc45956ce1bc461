use wordbook_config::upstream::UpstreamConfig;
use wordbook_core::{DictionaryMetadata, DictionarySource, LookupError};
use wordbook_types::{Language, LookupResult, VerbForm};

use crate::{cambridge, conjugation};

/// Cambridge Dictionary entries with verb forms from Simple English Wiktionary
#[derive(Debug, Clone)]
pub struct EnglishDictionary {
    dictionary_base_url: String,
    conjugation_base_url: String,
}

impl EnglishDictionary {
    pub fn new(dictionary_base_url: impl Into<String>, conjugation_base_url: impl Into<String>) -> Self {
        Self {
            dictionary_base_url: dictionary_base_url.into(),
            conjugation_base_url: conjugation_base_url.into(),
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self::new(&config.dictionary_base_url, &config.conjugation_base_url)
    }
}

impl Default for EnglishDictionary {
    fn default() -> Self {
        Self::from_config(&UpstreamConfig::default())
    }
}

impl DictionarySource for EnglishDictionary {
    fn entry_url(&self, word: &str, language: Language) -> String {
        cambridge::entry_url(&self.dictionary_base_url, word, language.as_str())
    }

    fn verbs_url(&self, word: &str) -> String {
        conjugation::verbs_url(&self.conjugation_base_url, word)
    }

    fn extract_entry(&self, html: &str, word: &str) -> Result<LookupResult, LookupError> {
        cambridge::extract_entry(html, word, &self.dictionary_base_url)
    }

    fn extract_verbs(&self, html: &str) -> Result<Vec<VerbForm>, LookupError> {
        conjugation::extract_verbs(html)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "Cambridge Dictionary".to_string(),
            verbs_name: "Simple English Wiktionary".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_follow_configured_hosts() {
        let dict = EnglishDictionary::new("http://127.0.0.1:9000", "http://127.0.0.1:9001");

        assert_eq!(
            dict.entry_url("class", Language::EnglishChineseTraditional),
            "http://127.0.0.1:9000/us/dictionary/english-chinese-traditional/class"
        );
        assert_eq!(dict.verbs_url("class"), "http://127.0.0.1:9001/wiki/class");
    }

    #[test]
    fn test_verbs_url_ignores_language() {
        let dict = EnglishDictionary::default();
        let uk = dict.entry_url("class", Language::BritishEnglish);
        let us = dict.entry_url("class", Language::English);

        assert_ne!(uk, us);
        assert_eq!(dict.verbs_url("class"), "https://simple.wiktionary.org/wiki/class");
    }
}
