//! CSS tokenizer, parser and serializer for stylesnap.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - All token types, comment handling, escape sequences
//!   - Source locations for every token
//!
//! - **CSS Parser** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   - Style rules with comma-separated selector lists
//!   - `@media` blocks with nested rules
//!   - Other at-rules as opaque prelude + block
//!   - Declarations with `!important`
//!
//! - **Serializer** ([§ 9 Serialization](https://www.w3.org/TR/css-syntax-3/#serialization))
//!   - Pretty and compressed output
//!
//! # Not Implemented
//!
//! - Selector parsing beyond raw text (matching is done on text)
//! - Error recovery: malformed input is reported, not repaired

/// Stylesheet errors.
pub mod error;
/// CSS parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// Stylesheet serialization per [§ 9 Serialization](https://www.w3.org/TR/css-syntax-3/#serialization).
pub mod serializer;
/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;

pub use error::CssError;
pub use parser::{CSSParser, MediaRule, Rule, Selector, StyleRule, Stylesheet};
pub use serializer::OutputStyle;
pub use tokenizer::{CSSToken, CSSTokenizer, SourceLocation};

/// Tokenize and parse stylesheet text in one step.
///
/// # Errors
///
/// Returns a [`CssError`] if the text is not a well-formed stylesheet.
pub fn parse_stylesheet(css: &str) -> Result<Stylesheet, CssError> {
    let mut tokenizer = CSSTokenizer::new(css);
    tokenizer.run()?;
    let (tokens, locations) = tokenizer.into_parts();
    CSSParser::with_locations(tokens, locations).parse_stylesheet()
}
