use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Assembled dictionary entry returned to clients
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub word: String,
    #[serde(rename = "pos")]
    pub parts_of_speech: Vec<String>,
    pub verbs: Vec<VerbForm>,
    #[serde(rename = "pronunciation")]
    pub pronunciations: Vec<Pronunciation>,
    #[serde(rename = "definition")]
    pub definitions: Vec<Definition>,
}

impl LookupResult {
    /// Empty result for a headword; fields are filled in by the extractors
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    #[serde(rename = "pos")]
    pub part_of_speech: String,
    #[serde(rename = "lang")]
    pub region: String,
    #[serde(rename = "url")]
    pub audio_url: String,
    #[serde(rename = "pron")]
    pub phonetic: String,
}

impl Pronunciation {
    /// Identity used for deduplication; the audio url is not part of it
    pub fn key(&self) -> (&str, &str, &str) {
        (&self.part_of_speech, &self.region, &self.phonetic)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub id: usize,
    #[serde(rename = "pos")]
    pub part_of_speech: String,
    /// Dictionary the sense came from (`data-id` on the page), empty if unknown
    pub source: String,
    pub text: String,
    pub translation: String,
    #[serde(rename = "example")]
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Scoped to the parent definition
    pub id: usize,
    pub text: String,
    pub translation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbForm {
    pub id: usize,
    #[serde(rename = "type")]
    pub form_type: String,
    pub text: String,
}

impl VerbForm {
    pub fn key(&self) -> (&str, &str) {
        (&self.form_type, &self.text)
    }
}

/// Dictionary editions the service knows how to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "uk")]
    BritishEnglish,
    #[serde(rename = "en-tw")]
    EnglishChineseTraditional,
    #[serde(rename = "en-cn")]
    EnglishChineseSimplified,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::BritishEnglish,
        Language::EnglishChineseTraditional,
        Language::EnglishChineseSimplified,
    ];

    /// Tag as it appears in request paths
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::BritishEnglish => "uk",
            Language::EnglishChineseTraditional => "en-tw",
            Language::EnglishChineseSimplified => "en-cn",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_round_trips_through_tag() {
        for lang in Language::ALL {
            assert_eq!(lang.as_str().parse::<Language>(), Ok(lang));
        }
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert_eq!(
            "fr".parse::<Language>(),
            Err(UnknownLanguage("fr".to_string()))
        );
        assert!("EN".parse::<Language>().is_err());
    }

    #[test]
    fn test_lookup_result_wire_names() {
        let mut result = LookupResult::new("class");
        result.parts_of_speech.push("noun".into());
        result.verbs.push(VerbForm {
            id: 0,
            form_type: "past tense".into(),
            text: "classed".into(),
        });
        result.pronunciations.push(Pronunciation {
            part_of_speech: "noun".into(),
            region: "us".into(),
            audio_url: "https://example.org/a.mp3".into(),
            phonetic: "klæs".into(),
        });
        result.definitions.push(Definition {
            id: 0,
            part_of_speech: "noun".into(),
            source: String::new(),
            text: "a group of students".into(),
            translation: String::new(),
            examples: vec![],
        });

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["word"], "class");
        assert_eq!(json["pos"][0], "noun");
        assert_eq!(json["verbs"][0]["type"], "past tense");
        assert_eq!(json["pronunciation"][0]["lang"], "us");
        assert_eq!(json["pronunciation"][0]["pron"], "klæs");
        assert_eq!(json["definition"][0]["source"], "");
        assert!(json["definition"][0]["example"].as_array().unwrap().is_empty());
    }
}
