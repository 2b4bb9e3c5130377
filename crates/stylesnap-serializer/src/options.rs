//! Options for the serializer and the bundled printer.
//!
//! Both load from JSON with every field optional:
//!
//! ```json
//! { "output": { "style": "compressed" } }
//! { "indent": 4 }
//! ```

use serde::{Deserialize, Serialize};
use stylesnap_css::OutputStyle;

/// Options for [`StyleSerializer`](crate::StyleSerializer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerOptions {
    /// Layout of the inlined CSS block.
    pub output: OutputStyle,
}

/// Options for [`SnapshotPrinter`](crate::SnapshotPrinter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterOptions {
    /// Spaces per nesting level for props and children.
    pub indent: usize,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}
