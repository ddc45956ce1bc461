//! Verb forms from the inflection table on Simple English Wiktionary.
//!
//! Each table cell holds a label and a form, e.g. `simple present` over
//! `class`, separated by a line break in the markup.

use wordbook_core::LookupError;
use wordbook_core::document::{Document, DocumentError, Node, collapse_whitespace};
use wordbook_types::VerbForm;

use crate::page_url;

const CELL: &str = ".inflection-table td";
const LINE_BREAK: &str = "<br>";

pub fn verbs_url(base: &str, word: &str) -> String {
    page_url(base, &["wiki", word])
}

pub fn extract_verbs(html: &str) -> Result<Vec<VerbForm>, LookupError> {
    let doc = Document::parse(html);
    let mut verbs = Vec::new();

    for cell in doc.select(CELL)? {
        if cell.text().is_empty() {
            continue;
        }

        let Some((form_type, text)) = split_lines(&cell)?.or_else(|| split_break(&cell)) else {
            continue;
        };

        verbs.push(VerbForm {
            id: verbs.len(),
            form_type,
            text,
        });
    }

    Ok(verbs)
}

/// Paragraph whose text runs over two lines: label, then form
fn split_lines(cell: &Node<'_>) -> Result<Option<(String, String)>, DocumentError> {
    let Some(paragraph) = cell.first("p")? else {
        return Ok(None);
    };

    let raw = paragraph.raw_text();
    let mut lines = raw.lines().map(str::trim).filter(|line| !line.is_empty());

    Ok(match (lines.next(), lines.next()) {
        (Some(label), Some(form)) => pair(label, form),
        _ => None,
    })
}

/// Markup split on the first `<br>`, tags stripped from both halves
fn split_break(cell: &Node<'_>) -> Option<(String, String)> {
    let inner = cell.inner_html();
    let mut parts = inner.split(LINE_BREAK);

    let label = parts.next()?;
    let form = parts.next()?;

    pair(&strip_markup(label), &strip_markup(form))
}

fn strip_markup(fragment: &str) -> String {
    Document::parse_fragment(fragment).text()
}

fn pair(label: &str, form: &str) -> Option<(String, String)> {
    let label = collapse_whitespace(label);
    let form = collapse_whitespace(form);

    (!label.is_empty() && !form.is_empty()).then_some((label, form))
}
