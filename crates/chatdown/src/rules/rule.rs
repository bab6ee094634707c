//! Translator variants and their declared facts.

/// How a translator's output joins the surrounding text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    /// Stays on the current line, separated by a space when needed
    Inline,
    /// Starts on its own line and ends with a newline
    Block,
}

/// One conversion rule per element family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Translator {
    Anchor,
    Strong,
    Emphasis,
    Strike,
    Underline,
    Quote,
    Abbreviation,
    InlineCode,
    LineBreak,
    HorizontalRule,
    Image,
    Heading,
    Paragraph,
    Division,
    BlockQuote,
    CodeBlock,
    OrderedList,
    UnorderedList,
    DescriptionList,
    Table,
}

impl Translator {
    /// Registration order; earlier variants win on a shared tag
    pub const ALL: [Translator; 20] = [
        Translator::Anchor,
        Translator::Strong,
        Translator::Emphasis,
        Translator::Strike,
        Translator::Underline,
        Translator::Quote,
        Translator::Abbreviation,
        Translator::InlineCode,
        Translator::LineBreak,
        Translator::HorizontalRule,
        Translator::Image,
        Translator::Heading,
        Translator::Paragraph,
        Translator::Division,
        Translator::BlockQuote,
        Translator::CodeBlock,
        Translator::OrderedList,
        Translator::UnorderedList,
        Translator::DescriptionList,
        Translator::Table,
    ];

    /// Tags handled by this translator
    pub fn tag_names(self) -> &'static [&'static str] {
        match self {
            Translator::Anchor => &["a"],
            Translator::Strong => &["b", "strong"],
            Translator::Emphasis => &["i", "em", "var", "cite", "dfn"],
            Translator::Strike => &["s", "strike", "del"],
            Translator::Underline => &["u", "ins"],
            Translator::Quote => &["q"],
            Translator::Abbreviation => &["abbr"],
            Translator::InlineCode => &["code", "kbd", "samp", "tt"],
            Translator::LineBreak => &["br"],
            Translator::HorizontalRule => &["hr"],
            Translator::Image => &["img"],
            Translator::Heading => &["h1", "h2", "h3", "h4", "h5", "h6"],
            Translator::Paragraph => &["p"],
            Translator::Division => &[
                "div", "section", "article", "header", "footer", "main", "nav", "aside",
                "figure", "figcaption",
            ],
            Translator::BlockQuote => &["blockquote"],
            Translator::CodeBlock => &["pre"],
            Translator::OrderedList => &["ol"],
            Translator::UnorderedList => &["ul"],
            Translator::DescriptionList => &["dl"],
            Translator::Table => &["table"],
        }
    }

    /// Whether the output is joined inline or as a block
    pub fn display(self) -> Display {
        match self {
            Translator::Anchor
            | Translator::Strong
            | Translator::Emphasis
            | Translator::Strike
            | Translator::Underline
            | Translator::Quote
            | Translator::Abbreviation
            | Translator::InlineCode
            | Translator::LineBreak
            | Translator::Image => Display::Inline,
            Translator::HorizontalRule
            | Translator::Heading
            | Translator::Paragraph
            | Translator::Division
            | Translator::BlockQuote
            | Translator::CodeBlock
            | Translator::OrderedList
            | Translator::UnorderedList
            | Translator::DescriptionList
            | Translator::Table => Display::Block,
        }
    }

    pub fn is_inline(self) -> bool {
        self.display() == Display::Inline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tag_sets_are_disjoint() {
        let mut seen = HashSet::new();
        for translator in Translator::ALL {
            for tag in translator.tag_names() {
                assert!(seen.insert(*tag), "tag {} registered twice", tag);
            }
        }
    }

    #[test]
    fn test_tag_names_are_lowercase() {
        for translator in Translator::ALL {
            for tag in translator.tag_names() {
                assert_eq!(*tag, tag.to_lowercase());
            }
        }
    }

    #[test]
    fn test_display() {
        assert!(Translator::Strong.is_inline());
        assert!(Translator::Image.is_inline());
        assert!(!Translator::Paragraph.is_inline());
        assert_eq!(Translator::Table.display(), Display::Block);
    }
}
