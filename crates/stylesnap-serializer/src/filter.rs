//! Stylesheet filtering.
//!
//! Parses the full stylesheet and keeps the style rules whose base selector
//! (the text before the first `:` or space) is one of the extracted
//! selectors. `@media` blocks keep only their matching rules and disappear
//! when none match. Kept media blocks are emitted after all kept plain rules.

use std::collections::HashSet;

use stylesnap_common::warning::warn_once;
use stylesnap_css::{CssError, MediaRule, OutputStyle, Rule, StyleRule, Stylesheet, parse_stylesheet};

/// Parse `css`, drop the rules no selector in `selectors` uses, and
/// serialize what is left.
///
/// Returns the empty string when nothing matches.
///
/// # Errors
///
/// Returns a [`CssError`] if `css` cannot be parsed.
pub fn filter_stylesheet<S: AsRef<str>>(
    css: &str,
    selectors: &[S],
    output: OutputStyle,
) -> Result<String, CssError> {
    let stylesheet = parse_stylesheet(css)?;
    Ok(filter_rules(stylesheet, selectors).to_css(output))
}

/// Filter an already parsed stylesheet.
///
/// Plain rules keep their relative order, as do media blocks, but every
/// media block follows every plain rule. At-rules other than `@media` are
/// dropped.
#[must_use]
pub fn filter_rules<S: AsRef<str>>(stylesheet: Stylesheet, selectors: &[S]) -> Stylesheet {
    let wanted: HashSet<&str> = selectors.iter().map(AsRef::as_ref).collect();

    let mut rules = Vec::new();
    let mut media_rules = Vec::new();

    for rule in stylesheet.rules {
        match rule {
            Rule::Style(rule) => {
                if is_used(&rule, &wanted) {
                    rules.push(Rule::Style(rule));
                }
            }
            Rule::Media(media) => {
                if let Some(media) = filter_media(media, &wanted) {
                    media_rules.push(Rule::Media(media));
                }
            }
            Rule::At(at) => {
                warn_once("Filter", &format!("dropping unsupported @{} rule", at.name));
            }
        }
    }

    rules.extend(media_rules);
    Stylesheet { rules }
}

fn filter_media(media: MediaRule, wanted: &HashSet<&str>) -> Option<MediaRule> {
    let rules: Vec<Rule> = media
        .rules
        .into_iter()
        .filter(|rule| match rule {
            Rule::Style(rule) => is_used(rule, wanted),
            Rule::Media(_) | Rule::At(_) => {
                warn_once(
                    "Filter",
                    &format!("dropping rule nested in @media {}", media.query),
                );
                false
            }
        })
        .collect();

    if rules.is_empty() {
        None
    } else {
        Some(MediaRule {
            query: media.query,
            rules,
        })
    }
}

fn is_used(rule: &StyleRule, wanted: &HashSet<&str>) -> bool {
    rule.selectors
        .iter()
        .any(|selector| wanted.contains(selector.base()))
}
