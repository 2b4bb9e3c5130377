//! Class-name aliasing.
//!
//! Generated class names are long and change whenever a style changes. Each
//! distinct selector gets a positional alias (`c0`, `c1`, ...) in the order it
//! was first extracted, and every occurrence of its name in the CSS and the
//! printed tree is replaced with that alias.
//!
//! The replacement is a plain substring replacement over the whole output, so
//! the same text anywhere else in the printed tree (a text child, another
//! prop) is replaced too.

use std::collections::HashSet;

use regex::{NoExpand, Regex};

use crate::error::SerializeError;

/// Selector to alias assignments, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    entries: Vec<(String, String)>,
}

impl AliasMap {
    /// Assign `c{index}` to each distinct selector in order. Repeated
    /// selectors keep their first alias.
    #[must_use]
    pub fn from_selectors<S: AsRef<str>>(selectors: &[S]) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for selector in selectors {
            let selector = selector.as_ref();
            if seen.insert(selector) {
                entries.push((selector.to_owned(), format!("c{}", entries.len())));
            }
        }
        Self { entries }
    }

    /// The alias of `selector`, if it was assigned one.
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(seen, _)| seen == selector)
            .map(|(_, alias)| alias.as_str())
    }

    /// `(selector, alias)` pairs in assignment order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(selector, alias)| (selector.as_str(), alias.as_str()))
    }

    /// Number of distinct selectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no selector was aliased.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Join `css` and `printed` with a blank line and replace every selector's
/// name with its alias.
///
/// The leading `.` of a class selector is not part of the replaced text, so
/// `.css-1x2y{...}` and `className="css-1x2y"` both become `c0`. When `css`
/// is empty, `printed` is returned as is.
///
/// # Errors
///
/// Returns [`SerializeError::Pattern`] if a selector is too large to compile
/// into a pattern.
pub fn rewrite<S: AsRef<str>>(
    selectors: &[S],
    css: &str,
    printed: &str,
) -> Result<String, SerializeError> {
    if css.is_empty() {
        return Ok(printed.to_owned());
    }

    let aliases = AliasMap::from_selectors(selectors);
    let mut output = format!("{css}\n\n{printed}");

    for (selector, alias) in aliases.pairs() {
        let name = selector.strip_prefix('.').unwrap_or(selector);
        if name.is_empty() {
            continue;
        }
        let pattern = Regex::new(&regex::escape(name))?;
        let replaced = pattern.replace_all(&output, NoExpand(alias)).into_owned();
        output = replaced;
    }

    Ok(output)
}
