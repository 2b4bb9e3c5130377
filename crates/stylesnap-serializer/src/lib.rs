//! Snapshot serializer plugin for CSS-in-JS rendered trees.
//!
//! Given a rendered tree and the stylesheet the styling library injected, a
//! print pass:
//!
//! 1. collects the class and `data-*` selectors the subtree references
//!    ([`extract_selectors`]),
//! 2. keeps only the rules those selectors match ([`filter_stylesheet`]),
//! 3. renders the tree with the host printer, and
//! 4. swaps generated class names for short aliases `c0`, `c1`, ... in both
//!    the kept CSS and the rendered tree ([`rewrite`]).
//!
//! The result reads as the CSS block, a blank line, then the tree.
//!
//! ```ignore
//! let store = SharedStyleSheet::new();
//! store.inject(".css-1x2y{color:red}");
//! let tree = RenderTree::from_json(r#"{"type":"div","props":{"className":"css-1x2y"}}"#)?;
//! let snapshot = StyleSerializer::new(store).snapshot(&tree)?;
//! ```

/// Errors raised while printing.
pub mod error;
/// Stylesheet filtering by selector membership.
pub mod filter;
/// Serializer and printer configuration.
pub mod options;
/// The plugin contract and the styled print pass.
pub mod plugin;
/// Host printer in the test-component markup format.
pub mod printer;
/// Class-name aliasing.
pub mod rewrite;
/// Selector extraction from rendered nodes.
pub mod selectors;
/// Where stylesheet text comes from.
pub mod source;

pub use error::SerializeError;
pub use filter::{filter_rules, filter_stylesheet};
pub use options::{PrinterOptions, SerializerOptions};
pub use plugin::{Plugin, PrintPass, StyleSerializer};
pub use printer::SnapshotPrinter;
pub use rewrite::{AliasMap, rewrite};
pub use selectors::extract_selectors;
pub use source::{SharedStyleSheet, StyleSheetSource};
