//! CSS Token types per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! Numeric tokens keep the source representation of their number so that a
//! filtered stylesheet serializes back to the text the style injector wrote
//! (`.5em` stays `.5em`, not `0.5em`).

use core::fmt;

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// "A `<hash-token>` with the type flag set to 'id'... or 'unrestricted'."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashType {
    /// The hash token's value is a valid identifier
    Id,
    /// The hash token's value is not a valid identifier
    Unrestricted,
}

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// "A `<number-token>` has a type flag set to either 'integer' or 'number'."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericType {
    /// No decimal point or exponent
    Integer,
    /// Has a decimal point or exponent
    Number,
}

/// A position in the stylesheet source, 1-based like editor positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number in code points, starting at 1.
    pub column: usize,
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// CSS tokens as defined by the CSS Syntax Module Level 3.
#[derive(Debug, Clone, PartialEq)]
pub enum CSSToken {
    /// `<ident-token>`
    Ident(String),

    /// `<function-token>`, the name without the opening parenthesis
    Function(String),

    /// `<at-keyword-token>`, the name without the `@`
    AtKeyword(String),

    /// `<hash-token>`
    Hash {
        /// The name after `#`
        value: String,
        /// Whether the value would start an identifier
        hash_type: HashType,
    },

    /// `<string-token>`, unquoted value
    String(String),

    /// `<bad-string-token>`
    BadString,

    /// `<url-token>`, the unquoted url
    Url(String),

    /// `<bad-url-token>`
    BadUrl,

    /// `<delim-token>`
    Delim(char),

    /// `<number-token>`
    Number {
        /// Parsed numeric value
        value: f64,
        /// Source text of the number, sign included
        repr: String,
        /// Integer or number flag
        numeric_type: NumericType,
    },

    /// `<percentage-token>`
    Percentage {
        /// Parsed numeric value
        value: f64,
        /// Source text of the number, without the `%`
        repr: String,
    },

    /// `<dimension-token>`
    Dimension {
        /// Parsed numeric value
        value: f64,
        /// Source text of the number, without the unit
        repr: String,
        /// The unit, e.g. `px`
        unit: String,
    },

    /// `<whitespace-token>`
    Whitespace,

    /// `<CDO-token>` (`<!--`)
    CDO,

    /// `<CDC-token>` (`-->`)
    CDC,

    /// `<colon-token>`
    Colon,

    /// `<semicolon-token>`
    Semicolon,

    /// `<comma-token>`
    Comma,

    /// `<[-token>`
    LeftBracket,

    /// `<]-token>`
    RightBracket,

    /// `<(-token>`
    LeftParen,

    /// `<)-token>`
    RightParen,

    /// `<{-token>`
    LeftBrace,

    /// `<}-token>`
    RightBrace,

    /// End of input
    EOF,
}

impl CSSToken {
    /// Create a new ident token.
    #[must_use]
    pub fn ident(value: impl Into<String>) -> Self {
        Self::Ident(value.into())
    }

    /// Create a new delim token.
    #[must_use]
    pub const fn delim(c: char) -> Self {
        Self::Delim(c)
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EOF)
    }
}

impl fmt::Display for CSSToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(v) => write!(f, "<ident:{v}>"),
            Self::Function(v) => write!(f, "<function:{v}(>"),
            Self::AtKeyword(v) => write!(f, "<at-keyword:@{v}>"),
            Self::Hash { value, .. } => write!(f, "<hash:#{value}>"),
            Self::String(v) => write!(f, "<string:\"{v}\">"),
            Self::BadString => write!(f, "<bad-string>"),
            Self::Url(v) => write!(f, "<url:{v}>"),
            Self::BadUrl => write!(f, "<bad-url>"),
            Self::Delim(c) => write!(f, "<delim:{c}>"),
            Self::Number { repr, .. } => write!(f, "<number:{repr}>"),
            Self::Percentage { repr, .. } => write!(f, "<percentage:{repr}%>"),
            Self::Dimension { repr, unit, .. } => write!(f, "<dimension:{repr}{unit}>"),
            Self::Whitespace => write!(f, "<whitespace>"),
            Self::CDO => write!(f, "<CDO>"),
            Self::CDC => write!(f, "<CDC>"),
            Self::Colon => write!(f, "<colon>"),
            Self::Semicolon => write!(f, "<semicolon>"),
            Self::Comma => write!(f, "<comma>"),
            Self::LeftBracket => write!(f, "<[>"),
            Self::RightBracket => write!(f, "<]>"),
            Self::LeftParen => write!(f, "<(>"),
            Self::RightParen => write!(f, "<)>"),
            Self::LeftBrace => write!(f, "<{{>"),
            Self::RightBrace => write!(f, "<}}>"),
            Self::EOF => write!(f, "<EOF>"),
        }
    }
}
