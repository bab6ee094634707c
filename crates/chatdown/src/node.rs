//! Document tree consumed by the translator.
//!
//! Any HTML parser can produce this structure; the bundled `html` feature
//! builds it from scraper/html5ever output. Tag names are stored lowercase.

use indexmap::IndexMap;

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Element node with tag name, attributes and children
    Element(Element),
    /// Literal text
    Text(Text),
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// Lowercase tag name, e.g. `"p"`
    pub tag_name: String,

    /// Attributes in source order
    pub attributes: IndexMap<String, String>,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

/// A text node.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Raw text content (entities already decoded)
    pub content: String,

    /// Whether the content consists only of whitespace
    pub is_whitespace: bool,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element::new(tag_name))
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        Node::Element(Element::with_attrs(tag_name, attrs))
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(Text::new(content))
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Borrow the element, if this is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.content.clone(),
            Node::Element(element) => element.text_content(),
        }
    }
}

impl Text {
    /// Create a text node, computing the whitespace flag
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            is_whitespace: content.chars().all(char::is_whitespace),
        }
    }
}

impl Element {
    /// Create an element without attributes
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_lowercase(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create an element with attributes
    pub fn with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v.to_string()))
            .collect();

        Self {
            tag_name: tag_name.to_lowercase(),
            attributes,
            children: Vec::new(),
        }
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name.to_lowercase().as_str())
            .map(String::as_str)
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute, replacing any existing value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_lowercase(), value.to_string());
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Builder-style variant of [`Element::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Get all text content from this element and descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(&text.content),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    /// Depth-first search for the first descendant with the given tag
    pub fn find_descendant(&self, tag: &str) -> Option<&Element> {
        for child in self.element_children() {
            if child.tag_name == tag {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(tag) {
                return Some(found);
            }
        }
        None
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}
