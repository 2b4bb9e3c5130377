//! The plugin contract and the styled print pass.
//!
//! A host printer walks a tree and, for each node, asks its plugins whether
//! they want to print it (`test`) before falling back to its own rendering.
//! [`PrintPass`] is the plugin that prepends the node's CSS. It hands the node
//! back to the host printer to render it, so it remembers which nodes it has
//! already handled; otherwise the host would offer the same node to it again.
//! Only the printed node is remembered: styled descendants are still offered
//! when the host recurses, and each gets its own CSS block.

use std::cell::RefCell;
use std::collections::HashSet;

use stylesnap_tree::{NodeId, NodeRef, RenderTree};

use crate::error::SerializeError;
use crate::filter::filter_stylesheet;
use crate::options::{PrinterOptions, SerializerOptions};
use crate::printer::SnapshotPrinter;
use crate::rewrite::rewrite;
use crate::selectors::extract_selectors;
use crate::source::StyleSheetSource;

/// A serializer plugin.
pub trait Plugin {
    /// Whether this plugin prints `node`.
    fn test(&self, node: NodeRef<'_>) -> bool;

    /// Print `node`. `printer` renders a node with the host's default
    /// format, consulting plugins again.
    ///
    /// # Errors
    ///
    /// Returns a [`SerializeError`] if the node or its styles cannot be printed.
    fn print(
        &self,
        node: NodeRef<'_>,
        printer: &dyn Fn(NodeRef<'_>) -> Result<String, SerializeError>,
    ) -> Result<String, SerializeError>;
}

/// Inlines the CSS a rendered tree uses above its printed form.
#[derive(Debug, Clone, Default)]
pub struct StyleSerializer<S> {
    source: S,
    options: SerializerOptions,
}

impl<S: StyleSheetSource> StyleSerializer<S> {
    /// Create a serializer reading from `source` with default options.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_options(source, SerializerOptions::default())
    }

    /// Create a serializer with explicit options.
    #[must_use]
    pub const fn with_options(source: S, options: SerializerOptions) -> Self {
        Self { source, options }
    }

    /// The stylesheet source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// The serializer options.
    #[must_use]
    pub const fn options(&self) -> &SerializerOptions {
        &self.options
    }

    /// Start a print pass. Nodes printed by one pass are not offered to it
    /// again; a new pass starts with nothing printed.
    #[must_use]
    pub fn pass(&self) -> PrintPass<'_, S> {
        PrintPass {
            serializer: self,
            visited: RefCell::new(HashSet::new()),
        }
    }

    /// The current stylesheet reduced to the rules `selectors` use.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::Stylesheet`] if the stylesheet does not parse.
    pub fn filtered_css<T: AsRef<str>>(&self, selectors: &[T]) -> Result<String, SerializeError> {
        let css = self.source.text();
        Ok(filter_stylesheet(&css, selectors, self.options.output)?)
    }

    /// Print every top-level node of `tree` with the bundled printer in a
    /// fresh pass.
    ///
    /// # Errors
    ///
    /// Returns a [`SerializeError`] if the stylesheet does not parse.
    pub fn snapshot(&self, tree: &RenderTree) -> Result<String, SerializeError> {
        self.snapshot_with(tree, &SnapshotPrinter::new(PrinterOptions::default()))
    }

    /// Like [`snapshot`](Self::snapshot) with a configured printer.
    ///
    /// # Errors
    ///
    /// Returns a [`SerializeError`] if the stylesheet does not parse.
    pub fn snapshot_with(
        &self,
        tree: &RenderTree,
        printer: &SnapshotPrinter,
    ) -> Result<String, SerializeError> {
        let pass = self.pass();
        printer.print_tree(tree, &[&pass])
    }
}

/// One print invocation of a [`StyleSerializer`].
pub struct PrintPass<'a, S> {
    serializer: &'a StyleSerializer<S>,
    visited: RefCell<HashSet<NodeId>>,
}

impl<S> PrintPass<'_, S> {
    /// Whether `node` was already printed in this pass.
    #[must_use]
    pub fn is_visited(&self, node: NodeRef<'_>) -> bool {
        self.visited.borrow().contains(&node.id())
    }

    fn mark_visited(&self, node: NodeRef<'_>) {
        let _ = self.visited.borrow_mut().insert(node.id());
    }
}

impl<S: StyleSheetSource> Plugin for PrintPass<'_, S> {
    fn test(&self, node: NodeRef<'_>) -> bool {
        node.is_element() && !self.is_visited(node)
    }

    fn print(
        &self,
        node: NodeRef<'_>,
        printer: &dyn Fn(NodeRef<'_>) -> Result<String, SerializeError>,
    ) -> Result<String, SerializeError> {
        let selectors = extract_selectors(node);
        let css = self.serializer.filtered_css(&selectors)?;
        self.mark_visited(node);
        let printed = printer(node)?;
        rewrite(&selectors, &css, &printed)
    }
}
