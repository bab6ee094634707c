//! HTML parsing support.
//!
//! This module parses HTML strings with scraper/html5ever and converts the
//! result to the [`Element`] tree used by the translator.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::{Element, Node, Text};

/// Elements whose content is kept as a single opaque text node
pub const BLOCK_TEXT_ELEMENTS: &[&str] = &["code", "script", "style", "noscript"];

/// Elements removed from the tree during parsing
pub const STRIPPED_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Parser configuration
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Tags whose descendants are flattened into one text node
    pub block_text_elements: Vec<String>,

    /// Tags dropped together with their content
    pub stripped_elements: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            block_text_elements: BLOCK_TEXT_ELEMENTS.iter().map(|s| s.to_string()).collect(),
            stripped_elements: STRIPPED_ELEMENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Parse an HTML string into an element tree with the default options.
///
/// The returned element is the synthetic `html` root of the fragment.
///
/// # Example
///
/// ```rust
/// use chatdown::parse_html;
///
/// let root = parse_html("<h1>Hello <em>World</em></h1>");
/// assert_eq!(root.tag_name(), "html");
/// assert_eq!(root.text_content(), "Hello World");
/// ```
pub fn parse_html(html: &str) -> Element {
    parse_html_with(html, &ParseOptions::default())
}

/// Parse an HTML string into an element tree.
pub fn parse_html_with(html: &str, options: &ParseOptions) -> Element {
    let document = Html::parse_fragment(html);
    scraper_to_element(document.root_element(), options)
}

/// Convert a scraper ElementRef to our Element structure
fn scraper_to_element(element: ElementRef, options: &ParseOptions) -> Element {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Element::with_attrs(tag, attrs);

    if options.block_text_elements.iter().any(|t| t == tag) {
        let content: String = element.text().collect();
        if !content.is_empty() {
            node.add_child(Node::Text(Text::new(&content)));
        }
        return node;
    }

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(el) => {
                if options.stripped_elements.iter().any(|t| t == el.name()) {
                    continue;
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(Node::Element(scraper_to_element(child_element, options)));
                }
            }
            _ => {}
        }
    }

    node
}
