//! Narrow query interface over parsed HTML.
//!
//! Extractors only ever need to select elements by CSS pattern, read their
//! text or attributes and walk up to an enclosing element, so that is all
//! this module exposes. Everything here is synchronous and the parsed tree
//! is not `Send`; parse, extract into owned values, then drop the document.

use scraper::{ElementRef, Html, Selector};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

fn selector(pattern: &str) -> Result<Selector, DocumentError> {
    Selector::parse(pattern).map_err(|_| DocumentError::InvalidSelector(pattern.to_string()))
}

/// Collapse runs of whitespace into single spaces and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parsed HTML page or fragment
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    pub fn parse_fragment(html: &str) -> Self {
        Self {
            html: Html::parse_fragment(html),
        }
    }

    /// All elements matching `pattern`, in document order
    pub fn select(&self, pattern: &str) -> Result<Vec<Node<'_>>, DocumentError> {
        let selector = selector(pattern)?;
        Ok(self.html.select(&selector).map(Node::new).collect())
    }

    pub fn first(&self, pattern: &str) -> Result<Option<Node<'_>>, DocumentError> {
        let selector = selector(pattern)?;
        Ok(self.html.select(&selector).next().map(Node::new))
    }

    pub fn contains(&self, pattern: &str) -> Result<bool, DocumentError> {
        Ok(self.first(pattern)?.is_some())
    }

    /// Whitespace-collapsed text of the whole document
    pub fn text(&self) -> String {
        Node::new(self.html.root_element()).text()
    }
}

/// A single element inside a [`Document`]
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Descendants matching `pattern`
    pub fn select(&self, pattern: &str) -> Result<Vec<Node<'a>>, DocumentError> {
        let selector = selector(pattern)?;
        Ok(self.element.select(&selector).map(Node::new).collect())
    }

    pub fn first(&self, pattern: &str) -> Result<Option<Node<'a>>, DocumentError> {
        let selector = selector(pattern)?;
        Ok(self.element.select(&selector).next().map(Node::new))
    }

    /// Text of the first descendant matching `pattern`, empty when there is none
    pub fn text_of(&self, pattern: &str) -> Result<String, DocumentError> {
        Ok(self
            .first(pattern)?
            .map(|node| node.text())
            .unwrap_or_default())
    }

    /// Nearest element matching `pattern`, starting with this one
    pub fn closest(&self, pattern: &str) -> Result<Option<Node<'a>>, DocumentError> {
        let selector = selector(pattern)?;
        if selector.matches(&self.element) {
            return Ok(Some(*self));
        }

        Ok(self
            .element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|ancestor| selector.matches(ancestor))
            .map(Node::new))
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.element.value().classes().any(|c| c == class)
    }

    /// Whitespace-collapsed text content
    pub fn text(&self) -> String {
        collapse_whitespace(&self.raw_text())
    }

    /// Text content exactly as it appears in the markup, line breaks included
    pub fn raw_text(&self) -> String {
        self.element.text().collect()
    }

    pub fn inner_html(&self) -> String {
        self.element.inner_html()
    }
}
