//! Errors raised while reading stylesheet text.
//!
//! Any of these aborts the whole parse: a filtered stylesheet built from a
//! partially understood source would silently drop rules from snapshots.

use thiserror::Error;

use crate::tokenizer::SourceLocation;

/// A fatal problem in stylesheet text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CssError {
    /// A `/*` comment runs to the end of input.
    #[error("{location}: end of comment missing")]
    UnterminatedComment {
        /// Where the comment starts.
        location: SourceLocation,
    },

    /// A selector list is not followed by a `{` block.
    #[error("{location}: missing '{{' after '{prelude}'")]
    MissingOpenBrace {
        /// Where the rule starts.
        location: SourceLocation,
        /// The text read so far.
        prelude: String,
    },

    /// A block reaches the end of input without its closing `}`, `]` or `)`.
    #[error("{location}: missing '{expected}'")]
    MissingCloseBrace {
        /// Where the unclosed block starts.
        location: SourceLocation,
        /// The closing character that never came.
        expected: char,
    },

    /// A `{` block with nothing in front of it.
    #[error("{location}: selector missing")]
    MissingSelector {
        /// Where the block starts.
        location: SourceLocation,
    },

    /// A declaration name not followed by `:`.
    #[error("{location}: property '{property}' missing ':'")]
    MissingColon {
        /// Where the declaration starts.
        location: SourceLocation,
        /// The property name.
        property: String,
    },

    /// A token that cannot start a declaration.
    #[error("{location}: unexpected {found} in declaration block")]
    UnexpectedToken {
        /// Where the token is.
        location: SourceLocation,
        /// Debug rendering of the token.
        found: String,
    },

    /// A `}` with no open block.
    #[error("{location}: unexpected '}}'")]
    UnexpectedCloseBrace {
        /// Where the brace is.
        location: SourceLocation,
    },
}

impl CssError {
    /// Where in the source the problem was found.
    #[must_use]
    pub const fn location(&self) -> SourceLocation {
        match self {
            Self::UnterminatedComment { location }
            | Self::MissingOpenBrace { location, .. }
            | Self::MissingCloseBrace { location, .. }
            | Self::MissingSelector { location }
            | Self::MissingColon { location, .. }
            | Self::UnexpectedToken { location, .. }
            | Self::UnexpectedCloseBrace { location } => *location,
        }
    }
}
