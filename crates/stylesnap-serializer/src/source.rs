//! Stylesheet sources.
//!
//! A styling library injects CSS at runtime, one fragment per `<style>` tag.
//! The serializer only reads those fragments, through [`StyleSheetSource`],
//! so tests can hand it a fixed list instead of a live store.

use std::sync::{Arc, PoisonError, RwLock};

/// Read access to the injected CSS fragments.
pub trait StyleSheetSource {
    /// All fragments currently injected, in injection order.
    fn fragments(&self) -> Vec<String>;

    /// The fragments joined with newlines.
    fn text(&self) -> String {
        self.fragments().join("\n")
    }
}

impl StyleSheetSource for Vec<String> {
    fn fragments(&self) -> Vec<String> {
        self.clone()
    }
}

impl StyleSheetSource for [String] {
    fn fragments(&self) -> Vec<String> {
        self.to_vec()
    }
}

impl StyleSheetSource for [&str] {
    fn fragments(&self) -> Vec<String> {
        self.iter().copied().map(str::to_owned).collect()
    }
}

impl<T: StyleSheetSource + ?Sized> StyleSheetSource for &T {
    fn fragments(&self) -> Vec<String> {
        (**self).fragments()
    }
}

/// A process-wide style store that styling code injects into and
/// serializers read from.
///
/// Clones share the same fragments.
#[derive(Debug, Clone, Default)]
pub struct SharedStyleSheet {
    tags: Arc<RwLock<Vec<String>>>,
}

impl SharedStyleSheet {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a CSS fragment.
    pub fn inject(&self, css: impl Into<String>) {
        self.tags
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(css.into());
    }

    /// Remove every fragment.
    pub fn flush(&self) {
        self.tags
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of injected fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing has been injected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StyleSheetSource for SharedStyleSheet {
    fn fragments(&self) -> Vec<String> {
        self.tags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
