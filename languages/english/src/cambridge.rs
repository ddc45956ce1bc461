//! Cambridge Dictionary entry pages.
//!
//! A page holds one `.pr.dictionary` block per source dictionary, each with
//! one `.pr.entry-body__el` per part of speech. The header of every entry
//! carries the headword, the part of speech and the pronunciations; the body
//! carries the definition blocks with their examples.

use wordbook_core::LookupError;
use wordbook_core::document::{Document, DocumentError, Node};
use wordbook_types::{Definition, Example, LookupResult, Pronunciation};

use crate::page_url;

const HEADWORD: &str = ".hw.dhw";
const ENTRY: &str = ".pr.entry-body__el";
const DICTIONARY: &str = ".pr.dictionary";
const POS: &str = ".pos.dpos";
const POS_HEADER: &str = ".pos-header.dpos-h";
const POS_GROUP: &str = ".dpos-g";
const PRON_ENTRY: &str = ".dpron-i";
const REGION: &str = ".region";
const AUDIO_SOURCE: &str = "audio source[src]";
const IPA: &str = ".ipa";
const PRON: &str = ".pron";
const DEF_BLOCK: &str = ".def-block.ddef_block";
const DEF_TEXT: &str = ".def.ddef_d";
const DEF_TRANSLATION: &str = ".def-body.ddef_b > span.trans.dtrans";
const EXAMPLE: &str = ".def-body.ddef_b > .examp.dexamp";
const EXAMPLE_TEXT: &str = ".eg.deg";
const EXAMPLE_TRANSLATION: &str = ".trans.dtrans";

/// Dictionary slug and site region for a language tag; unknown tags get US English
pub fn site_params(tag: &str) -> (&'static str, &'static str) {
    match tag {
        "uk" => ("english", "uk"),
        "en-tw" => ("english-chinese-traditional", "us"),
        "en-cn" => ("english-chinese-simplified", "us"),
        _ => ("english", "us"),
    }
}

pub fn entry_url(base: &str, word: &str, tag: &str) -> String {
    let (slug, region) = site_params(tag);
    page_url(base, &[region, "dictionary", slug, word])
}

/// Parse an entry page. Audio paths are resolved against `base`.
pub fn extract_entry(html: &str, word: &str, base: &str) -> Result<LookupResult, LookupError> {
    let doc = Document::parse(html);

    let headword = doc
        .first(HEADWORD)?
        .map(|node| node.text())
        .filter(|text| !text.is_empty());

    let headword = match headword {
        Some(headword) => headword,
        None if doc.contains(ENTRY)? || doc.contains(DEF_BLOCK)? => word.to_string(),
        None => return Err(LookupError::NotFound(word.to_string())),
    };

    let mut result = LookupResult::new(headword);
    result.parts_of_speech = parts_of_speech(&doc)?;
    result.pronunciations = pronunciations(&doc, base)?;
    result.definitions = definitions(&doc)?;

    Ok(result)
}

fn parts_of_speech(doc: &Document) -> Result<Vec<String>, DocumentError> {
    let mut seen = Vec::new();
    for node in doc.select(POS)? {
        let pos = node.text();
        if !pos.is_empty() && !seen.contains(&pos) {
            seen.push(pos);
        }
    }
    Ok(seen)
}

fn pronunciations(doc: &Document, base: &str) -> Result<Vec<Pronunciation>, DocumentError> {
    let mut out = Vec::new();

    for header in doc.select(POS_HEADER)? {
        let Some(group) = header.first(POS_GROUP)? else {
            continue;
        };
        let mut pos = group.text_of(POS)?;
        if pos.is_empty() {
            pos = group.text();
        }

        for entry in header.select(PRON_ENTRY)? {
            let Some(src) = entry.first(AUDIO_SOURCE)?.and_then(|s| s.attr("src")) else {
                continue;
            };
            let phonetic = phonetic(&entry)?;
            if src.trim().is_empty() || phonetic.is_empty() {
                continue;
            }

            out.push(Pronunciation {
                part_of_speech: pos.clone(),
                region: entry.text_of(REGION)?,
                audio_url: absolute(base, src.trim()),
                phonetic,
            });
        }
    }

    Ok(out)
}

fn phonetic(entry: &Node<'_>) -> Result<String, DocumentError> {
    let ipa = entry.text_of(IPA)?;
    if !ipa.is_empty() {
        return Ok(ipa);
    }
    let pron = entry.text_of(PRON)?;
    Ok(pron.trim_matches(|c: char| c == '/' || c.is_whitespace()).to_string())
}

fn absolute(base: &str, src: &str) -> String {
    if src.starts_with("http://") || src.starts_with("https://") {
        src.to_string()
    } else if let Some(rest) = src.strip_prefix("//") {
        format!("https://{rest}")
    } else {
        format!("{}/{}", base.trim_end_matches('/'), src.trim_start_matches('/'))
    }
}

fn definitions(doc: &Document) -> Result<Vec<Definition>, DocumentError> {
    doc.select(DEF_BLOCK)?
        .into_iter()
        .enumerate()
        .map(|(id, block)| definition(id, &block))
        .collect()
}

fn definition(id: usize, block: &Node<'_>) -> Result<Definition, DocumentError> {
    let part_of_speech = match block.closest(ENTRY)? {
        Some(entry) => entry.text_of(POS)?,
        None => String::new(),
    };

    let source = block
        .closest(DICTIONARY)?
        .and_then(|dict| dict.attr("data-id"))
        .unwrap_or_default()
        .to_string();

    let examples = block
        .select(EXAMPLE)?
        .into_iter()
        .enumerate()
        .map(|(id, example)| {
            Ok(Example {
                id,
                text: example.text_of(EXAMPLE_TEXT)?,
                translation: example.text_of(EXAMPLE_TRANSLATION)?,
            })
        })
        .collect::<Result<Vec<_>, DocumentError>>()?;

    Ok(Definition {
        id,
        part_of_speech,
        source,
        text: block.text_of(DEF_TEXT)?,
        translation: block.text_of(DEF_TRANSLATION)?,
        examples,
    })
}
