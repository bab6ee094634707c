//! ChatdownService - the main entry point for HTML to chat markdown conversion.

use tracing::{debug, debug_span, warn};

use crate::node::Element;
use crate::rules::Rules;
use crate::translation::Translation;
use crate::walker::Walker;
use crate::Result;

/// Options for ChatdownService
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// Let literal text directly under the document root contribute.
    ///
    /// Text inside recognized elements is always kept.
    pub capture_plaintext: bool,

    /// Parser configuration
    #[cfg(feature = "html")]
    pub parse: crate::html::ParseOptions,
}

/// The main service for converting HTML to chat markdown
#[derive(Debug, Clone, Default)]
pub struct ChatdownService {
    options: TranslateOptions,
}

impl ChatdownService {
    /// Create a new ChatdownService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ChatdownService with custom options
    pub fn with_options(options: TranslateOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut TranslateOptions {
        &mut self.options
    }

    /// Convert an HTML string to chat markdown
    #[cfg(feature = "html")]
    pub fn translate(&self, html: &str) -> Result<Translation> {
        let _span = debug_span!("translate", input_bytes = html.len()).entered();
        let root = crate::html::parse_html_with(html, &self.options.parse);
        self.translate_element(&root)
    }

    /// Convert an already parsed tree to chat markdown.
    ///
    /// Only the children of `root` are translated.
    pub fn translate_element(&self, root: &Element) -> Result<Translation> {
        let walker = Walker::new(Rules::global());
        let walked = walker.walk(root, self.options.capture_plaintext)?;

        let markdown = walked.markdown.trim().to_string();
        if markdown.is_empty() && walked.images.is_empty() {
            warn!("translation produced empty output");
        }
        debug!(
            output_bytes = markdown.len(),
            images = walked.images.len(),
            "translated document"
        );

        Ok(Translation {
            markdown,
            images: walked.images,
        })
    }
}

/// Convert HTML to chat markdown, ignoring stray text at the document root
#[cfg(feature = "html")]
pub fn translate(html: &str) -> Result<Translation> {
    translate_with(html, false)
}

/// Convert HTML to chat markdown with an explicit plaintext capture mode
#[cfg(feature = "html")]
pub fn translate_with(html: &str, capture_plaintext: bool) -> Result<Translation> {
    let options = TranslateOptions {
        capture_plaintext,
        ..Default::default()
    };
    ChatdownService::with_options(options).translate(html)
}

#[cfg(all(test, feature = "html"))]
mod tests {
    use super::*;
    use crate::ChatdownError;

    #[test]
    fn test_simple_paragraph() {
        let result = translate("<p>Hello World</p>").unwrap();
        assert_eq!(result.markdown, "Hello World");
        assert!(result.images.is_empty());
    }

    #[test]
    fn test_root_text_needs_capture() {
        assert_eq!(translate("loose <b>bold</b>").unwrap().markdown, "**bold**");
        assert_eq!(
            translate_with("loose <b>bold</b>", true).unwrap().markdown,
            "loose **bold**"
        );
    }

    #[test]
    fn test_service_options() {
        let mut service = ChatdownService::new();
        assert!(!service.options().capture_plaintext);
        service.options_mut().capture_plaintext = true;
        assert_eq!(service.translate("a_b").unwrap().markdown, "a\\_b");
    }

    #[test]
    fn test_output_trimmed() {
        let result = translate("<p>\n  padded  \n</p><hr>").unwrap();
        assert_eq!(result.markdown, "padded");
    }

    #[test]
    fn test_heading() {
        let result = translate("<h1>NAME</h1><p>ls - list</p>").unwrap();
        assert_eq!(result.markdown, "\u{200b}**NAME**\nls - list");
    }

    #[test]
    fn test_inline_code_keeps_markup_literal() {
        let result = translate("<p>run <code>ls <b>-l</b></code></p>").unwrap();
        assert_eq!(result.markdown, "run `ls -l`");
    }

    #[test]
    fn test_fenced_code_block() {
        let html = "<pre><code class=\"language-sh\">ls -l\nwc -l\n</code></pre>";
        let result = translate(html).unwrap();
        assert_eq!(result.markdown, "```sh\nls -l\nwc -l\n```");
    }

    #[test]
    fn test_missing_src() {
        let err = translate("<p>x <img alt=\"nope\"></p>").unwrap_err();
        assert!(matches!(
            err,
            ChatdownError::MissingAttribute { tag: "img", attribute: "src" }
        ));
    }

    #[test]
    fn test_translate_element() {
        let root = Element::new("body").with_child(
            Element::new("u")
                .with_child(crate::Node::text("under"))
                .into(),
        );
        let result = ChatdownService::new().translate_element(&root).unwrap();
        assert_eq!(result.markdown, "__under__");
    }
}
