//! Recursive tree walker.
//!
//! The walker translates the children of an element, dispatching each child
//! element to its registered translator and joining the results according to
//! the translator's [`Display`].

use crate::node::{Element, Node};
use crate::rules::{Display, Rules};
use crate::translation::Translation;
use crate::utilities::{collapse_whitespace, escape_markdown};
use crate::Result;

/// Walks element trees using a rule registry.
///
/// Translators receive the walker so they can translate their own children.
#[derive(Debug, Clone, Copy)]
pub struct Walker<'r> {
    rules: &'r Rules,
}

impl<'r> Walker<'r> {
    pub fn new(rules: &'r Rules) -> Self {
        Self { rules }
    }

    /// Translate the children of `element`.
    ///
    /// Elements without a translator are walked transparently so nested
    /// content survives. Literal text only contributes when
    /// `capture_plaintext` is set.
    pub fn walk(&self, element: &Element, capture_plaintext: bool) -> Result<Translation> {
        let mut out = Translation::default();

        for child in element.children() {
            match child {
                Node::Element(child) => match self.rules.for_tag(child.tag_name()) {
                    Some(translator) => {
                        let fragment = translator.translate(child, self)?;
                        if let Some(text) = fragment.markdown {
                            match translator.display() {
                                Display::Inline => join_inline(&mut out.markdown, &text),
                                Display::Block => join_block(&mut out.markdown, &text),
                            }
                        }
                        out.images.extend(fragment.images);
                    }
                    None => out.extend(self.walk(child, capture_plaintext)?),
                },
                Node::Text(text) if capture_plaintext && !text.is_whitespace => {
                    push_text(&mut out.markdown, &text.content);
                }
                Node::Text(_) => {}
            }
        }

        Ok(out)
    }
}

fn ends_with_whitespace(s: &str) -> bool {
    s.chars().next_back().is_some_and(char::is_whitespace)
}

/// Append inline output, separated by a space unless whitespace is already there
fn join_inline(markdown: &mut String, text: &str) {
    let starts_with_whitespace = text.chars().next().is_some_and(char::is_whitespace);
    if !markdown.is_empty() && !ends_with_whitespace(markdown) && !starts_with_whitespace {
        markdown.push(' ');
    }
    markdown.push_str(text);
}

/// Append block output on its own line, terminated by a newline
fn join_block(markdown: &mut String, text: &str) {
    let kept = markdown.trim_end_matches([' ', '\t']).len();
    markdown.truncate(kept);

    if !markdown.is_empty() && !markdown.ends_with('\n') {
        markdown.push('\n');
    }
    markdown.push_str(text);
    if !text.ends_with('\n') {
        markdown.push('\n');
    }
}

/// Append escaped literal text with collapsed whitespace
fn push_text(markdown: &mut String, content: &str) {
    let collapsed = collapse_whitespace(content);
    let text = if markdown.is_empty() || ends_with_whitespace(markdown) {
        collapsed.trim_start()
    } else {
        collapsed.as_ref()
    };
    markdown.push_str(&escape_markdown(text));
}
