//! Result types shared by the walker and the translators.

use serde::Serialize;

/// An image pulled out of the document.
///
/// Chat markdown cannot inline arbitrary images, so they travel next to the
/// text instead of inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ImageRef {
    pub fn new(src: impl Into<String>, alt: Option<String>) -> Self {
        Self {
            src: src.into(),
            alt,
        }
    }
}

/// Output of a single translator.
///
/// `markdown: None` contributes nothing to the text; an empty `images`
/// list contributes no images.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    pub markdown: Option<String>,
    pub images: Vec<ImageRef>,
}

impl Fragment {
    /// A fragment with no text and no images
    pub fn empty() -> Self {
        Self::default()
    }

    /// A text-only fragment
    pub fn text(markdown: impl Into<String>) -> Self {
        Self {
            markdown: Some(markdown.into()),
            images: Vec::new(),
        }
    }

    /// An image-only fragment
    pub fn image(image: ImageRef) -> Self {
        Self {
            markdown: None,
            images: vec![image],
        }
    }

    /// Build a fragment from walked children, formatting the trimmed text.
    ///
    /// Blank content yields no text; the images are carried over either way.
    pub fn wrap<F>(inner: Translation, format: F) -> Self
    where
        F: FnOnce(&str) -> String,
    {
        let trimmed = inner.markdown.trim();
        let markdown = if trimmed.is_empty() {
            None
        } else {
            Some(format(trimmed))
        };

        Self {
            markdown,
            images: inner.images,
        }
    }

    /// Attach images collected elsewhere, keeping their order
    pub fn with_images(mut self, images: Vec<ImageRef>) -> Self {
        self.images.extend(images);
        self
    }
}

/// Accumulated output of a walk: text plus the image side channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub markdown: String,
    pub images: Vec<ImageRef>,
}

impl Translation {
    /// Append another translation verbatim
    pub fn extend(&mut self, other: Translation) {
        self.markdown.push_str(&other.markdown);
        self.images.extend(other.images);
    }
}
