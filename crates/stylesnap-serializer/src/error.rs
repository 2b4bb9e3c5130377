//! Errors surfaced to the caller of a print pass.
//!
//! Nothing here is recovered locally: a stylesheet that fails to parse fails
//! the snapshot.

use stylesnap_css::CssError;
use thiserror::Error;

/// Errors that can occur while serializing a styled tree.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// The injected stylesheet text is not valid CSS.
    #[error("failed to parse stylesheet: {0}")]
    Stylesheet(#[from] CssError),

    /// A class name could not be turned into a replacement pattern.
    #[error("failed to build class name pattern: {0}")]
    Pattern(#[from] regex::Error),
}
