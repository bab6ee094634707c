//! # chatdown
//!
//! Convert HTML documents to chat markdown.
//!
//! Chat clients render a reduced markdown flavor: no headings that survive a
//! paste, no tables and no inline images. This crate translates an HTML
//! document (typically a rendered manual page) into text that reads well in
//! a chat message, and returns every image it met as a separate list.
//!
//! ## Design
//!
//! - A fixed registry maps tag names to [`Translator`] variants.
//! - A [`Walker`] translates children recursively and joins inline and block
//!   output with the right spacing.
//! - Images travel in a side channel next to the text.
//!
//! ## Example
//!
//! ```rust
//! use chatdown::translate;
//!
//! let result = translate(r#"<p>Hello <b>world</b><img src="logo.png"></p>"#).unwrap();
//! assert_eq!(result.markdown, "Hello **world**");
//! assert_eq!(result.images[0].src, "logo.png");
//! ```

#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod rules;
mod service;
mod translation;
mod utilities;
mod walker;

#[cfg(feature = "html")]
pub use html::{parse_html, parse_html_with, ParseOptions};
pub use node::{Element, Node, Text};
pub use rules::{render_table, Display, Rules, Translator};
#[cfg(feature = "html")]
pub use service::{translate, translate_with};
pub use service::{ChatdownService, TranslateOptions};
pub use translation::{Fragment, ImageRef, Translation};
pub use utilities::escape_markdown;
pub use walker::Walker;

/// Error type for chatdown operations
#[derive(Debug, thiserror::Error)]
pub enum ChatdownError {
    #[error("<{tag}> is missing required attribute `{attribute}`")]
    MissingAttribute {
        tag: &'static str,
        attribute: &'static str,
    },
}

impl ChatdownError {
    pub(crate) fn missing_attribute(tag: &'static str, attribute: &'static str) -> Self {
        ChatdownError::MissingAttribute { tag, attribute }
    }
}

pub type Result<T> = std::result::Result<T, ChatdownError>;
