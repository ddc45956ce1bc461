use std::collections::HashSet;
use std::hash::Hash;

use wordbook_types::LookupResult;

/// Bring an assembled result into canonical order.
///
/// Only reorders and removes duplicates; sequence ids are left as extracted.
/// Ordering is by code point, so the output does not depend on locale.
pub fn normalize(result: &mut LookupResult) {
    result.parts_of_speech.sort();
    result.parts_of_speech.dedup();

    retain_first_by_key(&mut result.verbs, |v| {
        let (form_type, text) = v.key();
        (form_type.to_owned(), text.to_owned())
    });
    result.verbs.sort_by(|a, b| a.form_type.cmp(&b.form_type));

    retain_first_by_key(&mut result.pronunciations, |p| {
        let (pos, region, phonetic) = p.key();
        (pos.to_owned(), region.to_owned(), phonetic.to_owned())
    });

    result
        .definitions
        .sort_by(|a, b| a.part_of_speech.cmp(&b.part_of_speech));
}

fn retain_first_by_key<T, K, F>(items: &mut Vec<T>, key: F)
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(key(item)));
}

#[cfg(test)]
mod tests {
    use wordbook_types::{Definition, Pronunciation, VerbForm};

    use super::*;

    fn verb(id: usize, form_type: &str, text: &str) -> VerbForm {
        VerbForm {
            id,
            form_type: form_type.into(),
            text: text.into(),
        }
    }

    fn pron(pos: &str, region: &str, phonetic: &str, url: &str) -> Pronunciation {
        Pronunciation {
            part_of_speech: pos.into(),
            region: region.into(),
            audio_url: url.into(),
            phonetic: phonetic.into(),
        }
    }

    fn def(id: usize, pos: &str) -> Definition {
        Definition {
            id,
            part_of_speech: pos.into(),
            text: format!("sense {id}"),
            ..Definition::default()
        }
    }

    fn sample() -> LookupResult {
        LookupResult {
            word: "class".into(),
            parts_of_speech: vec!["verb".into(), "noun".into(), "verb".into(), "adjective".into()],
            verbs: vec![
                verb(0, "simple present", "class"),
                verb(1, "past tense", "classed"),
                verb(2, "simple present", "class"),
                verb(3, "simple present", "classes"),
                verb(4, "past tense", "classed"),
            ],
            pronunciations: vec![
                pron("noun", "uk", "klɑːs", "/uk.mp3"),
                pron("noun", "us", "klæs", "/us.mp3"),
                pron("noun", "uk", "klɑːs", "/uk-other.mp3"),
                pron("verb", "us", "klæs", "/us.mp3"),
            ],
            definitions: vec![def(0, "verb"), def(1, "noun"), def(2, "verb"), def(3, "adjective")],
        }
    }

    #[test]
    fn test_parts_of_speech_sorted_and_unique() {
        let mut result = sample();
        normalize(&mut result);
        assert_eq!(result.parts_of_speech, vec!["adjective", "noun", "verb"]);
    }

    #[test]
    fn test_verbs_deduped_then_stably_sorted() {
        let mut result = sample();
        normalize(&mut result);

        let ids: Vec<usize> = result.verbs.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 0, 3]);
        assert_eq!(result.verbs[0].form_type, "past tense");
    }

    #[test]
    fn test_verb_count_matches_distinct_pairs() {
        let mut result = sample();
        let distinct: HashSet<(String, String)> = result
            .verbs
            .iter()
            .map(|v| (v.form_type.clone(), v.text.clone()))
            .collect();
        normalize(&mut result);
        assert_eq!(result.verbs.len(), distinct.len());
    }

    #[test]
    fn test_pronunciations_keep_first_and_order() {
        let mut result = sample();
        normalize(&mut result);

        let urls: Vec<&str> = result.pronunciations.iter().map(|p| p.audio_url.as_str()).collect();
        assert_eq!(urls, vec!["/uk.mp3", "/us.mp3", "/us.mp3"]);
    }

    #[test]
    fn test_definitions_sorted_by_pos_stably() {
        let mut result = sample();
        normalize(&mut result);

        let ids: Vec<usize> = result.definitions.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![3, 1, 0, 2]);
        assert!(
            result
                .definitions
                .windows(2)
                .all(|w| w[0].part_of_speech <= w[1].part_of_speech)
        );
    }

    #[test]
    fn test_idempotent() {
        let mut once = sample();
        normalize(&mut once);
        let mut twice = once.clone();
        normalize(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_result_untouched() {
        let mut result = LookupResult::new("x");
        normalize(&mut result);
        assert_eq!(result, LookupResult::new("x"));
    }
}
