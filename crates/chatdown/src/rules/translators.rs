//! Chat markdown translators, one function per element family.

use super::table;
use super::Translator;
use crate::node::Element;
use crate::translation::{Fragment, ImageRef};
use crate::utilities::{clean_attribute, indent_continuation, strip_asterisks, ZERO_WIDTH_SPACE};
use crate::walker::Walker;
use crate::{ChatdownError, Result};

const BULLET: &str = " • ";

impl Translator {
    /// Translate an element owned by this translator
    pub fn translate(self, element: &Element, walker: &Walker) -> Result<Fragment> {
        match self {
            Translator::Anchor => anchor(element, walker),
            Translator::Strong => wrap(element, walker, |t| {
                format!("**{}**", strip_asterisks(t, 2))
            }),
            Translator::Emphasis => wrap(element, walker, |t| {
                format!("*{}*", strip_asterisks(t, 1))
            }),
            Translator::Strike => wrap(element, walker, |t| format!("~~{}~~", t)),
            Translator::Underline => wrap(element, walker, |t| format!("__{}__", t)),
            Translator::Quote => wrap(element, walker, |t| format!("\"{}\"", t)),
            Translator::Abbreviation => {
                let title = clean_attribute(element.attr("title"));
                wrap(element, walker, |t| match title {
                    Some(title) => format!("{} ({})", t, title),
                    None => t.to_string(),
                })
            }
            Translator::InlineCode => wrap(element, walker, |t| format!("`{}`", t)),
            Translator::LineBreak | Translator::HorizontalRule => Ok(Fragment::text("\n")),
            Translator::Image => image(element),
            Translator::Heading => wrap(element, walker, |t| {
                format!("{}**{}**", ZERO_WIDTH_SPACE, strip_asterisks(t, 2))
            }),
            Translator::Paragraph | Translator::Division => wrap(element, walker, str::to_string),
            Translator::BlockQuote => blockquote(element, walker),
            Translator::CodeBlock => code_block(element, walker),
            Translator::OrderedList => list(element, walker, |i| format!("{}. ", i + 1)),
            Translator::UnorderedList => list(element, walker, |_| BULLET.to_string()),
            Translator::DescriptionList => description_list(element, walker),
            Translator::Table => table::translate(element, walker),
        }
    }
}

fn wrap<F>(element: &Element, walker: &Walker, format: F) -> Result<Fragment>
where
    F: FnOnce(&str) -> String,
{
    let inner = walker.walk(element, true)?;
    Ok(Fragment::wrap(inner, format))
}

fn anchor(element: &Element, walker: &Walker) -> Result<Fragment> {
    let inner = walker.walk(element, true)?;
    let Some(href) = clean_attribute(element.attr("href")) else {
        return Ok(Fragment::wrap(inner, str::to_string));
    };

    let text = inner.markdown.trim();
    let label = if text.is_empty() { href.as_str() } else { text };
    Ok(Fragment::text(format!("[{}]({})", label, href)).with_images(inner.images))
}

fn image(element: &Element) -> Result<Fragment> {
    let src = element
        .attr("src")
        .ok_or_else(|| ChatdownError::missing_attribute("img", "src"))?;
    let alt = clean_attribute(element.attr("alt"));
    Ok(Fragment::image(ImageRef::new(src.trim(), alt)))
}

/// Raw text lines, trimmed, blank lines dropped, each prefixed with `> `
fn quoted_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("> {}", line))
}

/// Walk only for the image side channel; the text is rendered raw
fn nested_images(element: &Element, walker: &Walker) -> Result<Vec<ImageRef>> {
    Ok(walker.walk(element, true)?.images)
}

fn blockquote(element: &Element, walker: &Walker) -> Result<Fragment> {
    let images = nested_images(element, walker)?;
    let text = element.text_content();
    let mut lines: Vec<String> = quoted_lines(&text).collect();

    if let Some(cite) = clean_attribute(element.attr("cite")) {
        lines.push(format!("> [{}]({})", cite, cite));
    }

    if lines.is_empty() {
        return Ok(Fragment::empty().with_images(images));
    }
    Ok(Fragment::text(lines.join("\n")).with_images(images))
}

fn code_block(element: &Element, walker: &Walker) -> Result<Fragment> {
    let images = nested_images(element, walker)?;
    let code = element.text_content();
    let code = code.trim_end_matches(['\n', '\r']);
    let language = code_language(element)
        .or_else(|| element.find_descendant("code").and_then(code_language))
        .unwrap_or_default();

    Ok(Fragment::text(format!("```{}\n{}\n```", language, code)).with_images(images))
}

/// Language named by `data-lang`, `lang` or a `language-`/`lang-` class
fn code_language(element: &Element) -> Option<String> {
    if let Some(lang) = clean_attribute(element.attr("data-lang")) {
        return Some(lang);
    }
    if let Some(lang) = clean_attribute(element.attr("lang")) {
        return Some(lang);
    }
    element.attr("class").and_then(|class| {
        class.split_whitespace().find_map(|token| {
            token
                .strip_prefix("language-")
                .or_else(|| token.strip_prefix("lang-"))
                .filter(|lang| !lang.is_empty())
                .map(str::to_string)
        })
    })
}

fn list<F>(element: &Element, walker: &Walker, marker: F) -> Result<Fragment>
where
    F: Fn(usize) -> String,
{
    let mut items = Vec::new();
    let mut images = Vec::new();

    for (i, child) in element.element_children().enumerate() {
        let inner = walker.walk(child, true)?;
        let prefix = marker(i);
        let width = prefix.chars().count();
        let body = indent_continuation(inner.markdown.trim(), width);
        items.push(format!("{}{}", prefix, body).trim_end().to_string());
        images.extend(inner.images);
    }

    if items.is_empty() {
        return Ok(Fragment::empty().with_images(images));
    }
    Ok(Fragment::text(items.join("\n")).with_images(images))
}

fn description_list(element: &Element, walker: &Walker) -> Result<Fragment> {
    let mut lines = Vec::new();
    let mut images = Vec::new();
    describe(element, walker, &mut lines, &mut images)?;

    if lines.is_empty() {
        return Ok(Fragment::empty().with_images(images));
    }
    Ok(Fragment::text(lines.join("\n")).with_images(images))
}

fn describe(
    element: &Element,
    walker: &Walker,
    lines: &mut Vec<String>,
    images: &mut Vec<ImageRef>,
) -> Result<()> {
    for child in element.element_children() {
        // HTML allows `<div>` groups of dt/dd pairs inside a dl
        if child.tag_name() == "div" {
            describe(child, walker, lines, images)?;
            continue;
        }

        let inner = walker.walk(child, true)?;
        images.extend(inner.images);

        // Details keep their source line breaks, which the walker collapses
        if child.tag_name() == "dd" {
            lines.extend(quoted_lines(&child.text_content()));
            continue;
        }

        let text = inner.markdown.trim();
        if text.is_empty() {
            continue;
        }

        match child.tag_name() {
            "dt" => lines.push(format!("**{}**", strip_asterisks(text, 2))),
            _ => lines.push(text.to_string()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::rules::Rules;

    fn run(translator: Translator, element: &Element) -> Result<Fragment> {
        let walker = Walker::new(Rules::global());
        translator.translate(element, &walker)
    }

    fn text_of(fragment: Fragment) -> String {
        fragment.markdown.unwrap_or_default()
    }

    fn el(tag: &str, text: &str) -> Element {
        Element::new(tag).with_child(Node::text(text))
    }

    #[test]
    fn test_wrappers() {
        assert_eq!(text_of(run(Translator::Strike, &el("del", "x")).unwrap()), "~~x~~");
        assert_eq!(text_of(run(Translator::Underline, &el("u", "x")).unwrap()), "__x__");
        assert_eq!(text_of(run(Translator::Quote, &el("q", "x")).unwrap()), "\"x\"");
        assert_eq!(text_of(run(Translator::InlineCode, &el("code", "ls")).unwrap()), "`ls`");
    }

    #[test]
    fn test_blank_wrapper_contributes_nothing() {
        let fragment = run(Translator::Strong, &el("b", "   ")).unwrap();
        assert_eq!(fragment, Fragment::empty());
    }

    #[test]
    fn test_strong_strips_nested_bold() {
        let inner = el("strong", "x");
        let b = Element::new("b")
            .with_child(Node::text("a "))
            .with_child(inner.into());
        assert_eq!(text_of(run(Translator::Strong, &b).unwrap()), "**a x**");
    }

    #[test]
    fn test_emphasis_strips_nested_italic_only() {
        let em = el("em", "x");
        let b = el("b", "y");
        let i = Element::new("i").with_child(em.into()).with_child(b.into());
        assert_eq!(text_of(run(Translator::Emphasis, &i).unwrap()), "*x **y***");
    }

    #[test]
    fn test_abbreviation() {
        let mut abbr = el("abbr", "HTML");
        assert_eq!(text_of(run(Translator::Abbreviation, &abbr).unwrap()), "HTML");
        abbr.set_attr("title", "HyperText Markup Language");
        assert_eq!(
            text_of(run(Translator::Abbreviation, &abbr).unwrap()),
            "HTML (HyperText Markup Language)"
        );
    }

    #[test]
    fn test_anchor_without_href_keeps_text() {
        let a = el("a", "plain");
        assert_eq!(text_of(run(Translator::Anchor, &a).unwrap()), "plain");
    }

    #[test]
    fn test_image() {
        let img = Element::with_attrs("img", vec![("src", "a.png"), ("alt", "An A")]);
        let fragment = run(Translator::Image, &img).unwrap();
        assert_eq!(fragment.markdown, None);
        assert_eq!(fragment.images, vec![ImageRef::new("a.png", Some("An A".to_string()))]);
    }

    #[test]
    fn test_image_blank_alt_omitted() {
        let img = Element::with_attrs("img", vec![("src", "a.png"), ("alt", " ")]);
        let fragment = run(Translator::Image, &img).unwrap();
        assert_eq!(fragment.images[0].alt, None);
    }

    #[test]
    fn test_image_missing_src() {
        let err = run(Translator::Image, &Element::new("img")).unwrap_err();
        assert!(matches!(err, ChatdownError::MissingAttribute { .. }));
        assert_eq!(err.to_string(), "<img> is missing required attribute `src`");
    }

    #[test]
    fn test_heading() {
        let h = Element::new("h2")
            .with_child(Node::text("Title "))
            .with_child(el("b", "bold").into());
        assert_eq!(
            text_of(run(Translator::Heading, &h).unwrap()),
            "\u{200b}**Title bold**"
        );
    }

    #[test]
    fn test_blockquote() {
        let quote = Element::with_attrs("blockquote", vec![("cite", "http://x")])
            .with_child(Node::text("\n  one \n\n   two\n"));
        assert_eq!(
            text_of(run(Translator::BlockQuote, &quote).unwrap()),
            "> one\n> two\n> [http://x](http://x)"
        );
    }

    #[test]
    fn test_blockquote_empty() {
        let quote = el("blockquote", " \n ");
        assert_eq!(run(Translator::BlockQuote, &quote).unwrap(), Fragment::empty());
    }

    #[test]
    fn test_blockquote_carries_nested_images() {
        let quote = Element::new("blockquote")
            .with_child(Node::text("q "))
            .with_child(Node::element_with_attrs("img", vec![("src", "2.png")]));
        let fragment = run(Translator::BlockQuote, &quote).unwrap();
        assert_eq!(fragment.markdown.as_deref(), Some("> q"));
        assert_eq!(fragment.images, vec![ImageRef::new("2.png", None)]);
    }

    #[test]
    fn test_blockquote_nested_image_without_src() {
        let quote = Element::new("blockquote")
            .with_child(Node::text("q "))
            .with_child(Node::element_with_attrs("img", vec![("alt", "a")]));
        let err = run(Translator::BlockQuote, &quote).unwrap_err();
        assert!(matches!(err, ChatdownError::MissingAttribute { .. }));
    }

    #[test]
    fn test_code_block_carries_nested_images() {
        let pre = Element::new("pre")
            .with_child(Node::text("q "))
            .with_child(Node::element_with_attrs("img", vec![("src", "p.png")]));
        let fragment = run(Translator::CodeBlock, &pre).unwrap();
        assert_eq!(fragment.markdown.as_deref(), Some("```\nq \n```"));
        assert_eq!(fragment.images, vec![ImageRef::new("p.png", None)]);

        let broken = Element::new("pre").with_child(Node::element("img"));
        assert!(run(Translator::CodeBlock, &broken).is_err());
    }

    #[test]
    fn test_code_block_language_from_child() {
        let code = Element::with_attrs("code", vec![("class", "sourceCode language-rust")])
            .with_child(Node::text("fn main() {\n    let x = 1;\n}\n"));
        let pre = Element::new("pre").with_child(code.into());
        assert_eq!(
            text_of(run(Translator::CodeBlock, &pre).unwrap()),
            "```rust\nfn main() {\n    let x = 1;\n}\n```"
        );
    }

    #[test]
    fn test_code_block_language_from_self_wins() {
        let code = Element::with_attrs("code", vec![("class", "language-rust")])
            .with_child(Node::text("x"));
        let pre = Element::with_attrs("pre", vec![("data-lang", "sh")]).with_child(code.into());
        assert_eq!(text_of(run(Translator::CodeBlock, &pre).unwrap()), "```sh\nx\n```");
    }

    #[test]
    fn test_code_block_without_language() {
        let pre = el("pre", "  a\n    b");
        assert_eq!(text_of(run(Translator::CodeBlock, &pre).unwrap()), "```\n  a\n    b\n```");
    }

    #[test]
    fn test_unordered_list() {
        let ul = Element::new("ul")
            .with_child(el("li", "one").into())
            .with_child(Node::text("\n"))
            .with_child(el("li", "two").into());
        assert_eq!(
            text_of(run(Translator::UnorderedList, &ul).unwrap()),
            " • one\n • two"
        );
    }

    #[test]
    fn test_nested_list_indented() {
        let inner = Element::new("ol")
            .with_child(el("li", "a").into())
            .with_child(el("li", "b").into());
        let li = Element::new("li")
            .with_child(Node::text("outer"))
            .with_child(inner.into());
        let ol = Element::new("ol").with_child(li.into());
        assert_eq!(
            text_of(run(Translator::OrderedList, &ol).unwrap()),
            "1. outer\n   1. a\n   2. b"
        );
    }

    #[test]
    fn test_description_list() {
        let dd = el("dd", "first line");
        let dl = Element::new("dl")
            .with_child(el("dt", "-v").into())
            .with_child(dd.into());
        assert_eq!(
            text_of(run(Translator::DescriptionList, &dl).unwrap()),
            "**-v**\n> first line"
        );
    }

    #[test]
    fn test_description_detail_keeps_source_lines() {
        let dl = Element::new("dl")
            .with_child(el("dt", "t").into())
            .with_child(el("dd", "line one\n\n  line two  ").into());
        assert_eq!(
            text_of(run(Translator::DescriptionList, &dl).unwrap()),
            "**t**\n> line one\n> line two"
        );
    }

    #[test]
    fn test_description_list_grouped_in_div() {
        let group = Element::new("div")
            .with_child(el("dt", "term").into())
            .with_child(el("dd", "detail").into());
        let dl = Element::new("dl").with_child(group.into());
        assert_eq!(
            text_of(run(Translator::DescriptionList, &dl).unwrap()),
            "**term**\n> detail"
        );
    }
}
