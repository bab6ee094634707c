//! Fixed-width rendering for `<table>`.
//!
//! Chat markdown has no table syntax, so tables become an ASCII grid inside
//! a code fence:
//!
//! ```text
//! .--------.
//! | Fruits |
//! |--------|
//! | Apple  |
//! '--------'
//! ```

use unicode_width::UnicodeWidthStr;

use crate::node::Element;
use crate::translation::{Fragment, ImageRef};
use crate::utilities::collapse_whitespace;
use crate::walker::Walker;
use crate::Result;

const ROW_GROUPS: &[&str] = &["thead", "tbody", "tfoot"];

pub(crate) fn translate(element: &Element, walker: &Walker) -> Result<Fragment> {
    let mut caption = None;
    let mut rows = Vec::new();
    let mut images = Vec::new();

    for child in element.element_children() {
        match child.tag_name() {
            "caption" if caption.is_none() => {
                images.extend(walker.walk(child, true)?.images);
                caption = Some(cell_text(child));
            }
            "tr" => rows.push(read_row(child, walker, &mut images)?),
            tag if ROW_GROUPS.contains(&tag) => {
                for tr in child.element_children().filter(|e| e.tag_name() == "tr") {
                    rows.push(read_row(tr, walker, &mut images)?);
                }
            }
            _ => {}
        }
    }

    rows.retain(|row| !row.is_empty());

    // A present caption, even an empty one, keeps its header row
    if rows.is_empty() && caption.is_none() {
        return Ok(Fragment::empty().with_images(images));
    }

    let grid = render_table(caption.as_deref(), &rows);
    Ok(Fragment::text(format!("```\n{}\n```", grid)).with_images(images))
}

fn read_row(tr: &Element, walker: &Walker, images: &mut Vec<ImageRef>) -> Result<Vec<String>> {
    let mut row = Vec::new();
    for cell in tr
        .element_children()
        .filter(|e| matches!(e.tag_name(), "td" | "th"))
    {
        images.extend(walker.walk(cell, true)?.images);
        row.push(cell_text(cell));
    }
    Ok(row)
}

fn cell_text(element: &Element) -> String {
    collapse_whitespace(&element.text_content()).trim().to_string()
}

/// Render rows as a fixed-width grid, with an optional centered header.
///
/// Rows shorter than the widest row are padded with empty cells. A caption
/// wider than the grid widens the last column.
pub fn render_table(caption: Option<&str>, rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0).max(1);
    let mut widths = vec![0usize; columns];

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    // Each cell carries one space of padding per side, plus inner separators.
    let inner_width = |widths: &[usize]| widths.iter().map(|w| w + 2).sum::<usize>() + columns - 1;

    if let Some(caption) = caption {
        let needed = caption.width() + 2;
        let current = inner_width(&widths);
        if needed > current {
            widths[columns - 1] += needed - current;
        }
    }

    let inner = inner_width(&widths);
    let mut out = String::new();

    out.push('.');
    out.push_str(&"-".repeat(inner));
    out.push_str(".\n");

    if let Some(caption) = caption {
        let free = inner - caption.width();
        let left = free / 2;
        out.push('|');
        out.push_str(&" ".repeat(left));
        out.push_str(caption);
        out.push_str(&" ".repeat(free - left));
        out.push_str("|\n|");
        out.push_str(&"-".repeat(inner));
        out.push_str("|\n");
    }

    for row in rows {
        out.push('|');
        for (i, width) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            out.push(' ');
            out.push_str(cell);
            out.push_str(&" ".repeat(width - cell.width()));
            out.push_str(" |");
        }
        out.push('\n');
    }

    out.push('\'');
    out.push_str(&"-".repeat(inner));
    out.push('\'');

    out
}
