//! Rule system for HTML to chat markdown conversion.

mod rule;
mod table;
mod translators;

pub use rule::{Display, Translator};
pub use table::render_table;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

static RULES: Lazy<Rules> = Lazy::new(Rules::new);

/// Tag name to translator lookup.
///
/// Built once from [`Translator::ALL`]; the first translator to claim a tag
/// keeps it.
#[derive(Debug, Clone)]
pub struct Rules {
    by_tag: IndexMap<&'static str, Translator>,
}

impl Rules {
    /// Create a new registry holding every built-in translator
    pub fn new() -> Self {
        let mut by_tag = IndexMap::new();
        for translator in Translator::ALL {
            for tag in translator.tag_names() {
                by_tag.entry(*tag).or_insert(translator);
            }
        }
        Self { by_tag }
    }

    /// The process-wide registry
    pub fn global() -> &'static Rules {
        &RULES
    }

    /// Find the translator for a tag
    pub fn for_tag(&self, tag: &str) -> Option<Translator> {
        self.by_tag.get(tag).copied()
    }

    /// Registered tags in registration order
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_tag.keys().copied()
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
