//! Host printer for rendered trees.
//!
//! Produces the markup layout test renderers use for component snapshots:
//!
//! ```text
//! <div
//!   className="css-1x2y"
//!   data-active={true}
//! >
//!   Hello
//!   <span />
//! </div>
//! ```
//!
//! Props are sorted by name. String props are quoted, everything else is
//! wrapped in braces. Every node is offered to the registered plugins first.

use std::fmt::Write;

use serde_json::Value;
use stylesnap_tree::{ElementData, NodeRef, NodeType, RenderTree};

use crate::error::SerializeError;
use crate::options::PrinterOptions;
use crate::plugin::Plugin;

/// Prints rendered nodes, delegating to plugins that claim them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotPrinter {
    options: PrinterOptions,
}

impl SnapshotPrinter {
    /// Create a printer.
    #[must_use]
    pub const fn new(options: PrinterOptions) -> Self {
        Self { options }
    }

    /// The printer options.
    #[must_use]
    pub const fn options(&self) -> &PrinterOptions {
        &self.options
    }

    /// Print every top-level node of `tree`, one after another.
    ///
    /// # Errors
    ///
    /// Returns the first error a plugin reports.
    pub fn print_tree(
        &self,
        tree: &RenderTree,
        plugins: &[&dyn Plugin],
    ) -> Result<String, SerializeError> {
        match tree.node(tree.root()) {
            Some(root) => self.print(root, plugins),
            None => Ok(String::new()),
        }
    }

    /// Print `node`, letting the first plugin whose `test` accepts it take
    /// over. Plugins get this method back as their printer callback.
    ///
    /// # Errors
    ///
    /// Returns the first error a plugin reports.
    pub fn print(
        &self,
        node: NodeRef<'_>,
        plugins: &[&dyn Plugin],
    ) -> Result<String, SerializeError> {
        if let Some(plugin) = plugins.iter().find(|plugin| plugin.test(node)) {
            return plugin.print(node, &|inner: NodeRef<'_>| self.print(inner, plugins));
        }

        match node.node_type() {
            Some(NodeType::Element(element)) => self.print_element(node, element, plugins),
            Some(NodeType::Text(text)) => Ok(escape_text(text)),
            Some(NodeType::Fragment) => Ok(self.print_children(node, plugins)?.join("\n")),
            None => Ok(String::new()),
        }
    }

    fn print_children(
        &self,
        node: NodeRef<'_>,
        plugins: &[&dyn Plugin],
    ) -> Result<Vec<String>, SerializeError> {
        node.children()
            .map(|child| self.print(child, plugins))
            .collect()
    }

    fn print_element(
        &self,
        node: NodeRef<'_>,
        element: &ElementData,
        plugins: &[&dyn Plugin],
    ) -> Result<String, SerializeError> {
        let indent = " ".repeat(self.options.indent);
        let mut props: Vec<(&String, &Value)> = element
            .props
            .iter()
            .filter(|(name, _)| name.as_str() != "children")
            .collect();
        props.sort_by(|a, b| a.0.cmp(b.0));

        let mut out = format!("<{}", element.element_type);
        for (name, value) in &props {
            let _ = write!(out, "\n{indent}{name}={}", print_prop(value, &indent));
        }
        if !props.is_empty() {
            out.push('\n');
        }

        let children = self.print_children(node, plugins)?;
        if children.is_empty() {
            out.push_str(if props.is_empty() { " />" } else { "/>" });
            return Ok(out);
        }

        out.push('>');
        for child in &children {
            out.push('\n');
            out.push_str(&indent_lines(child, &indent));
        }
        let _ = write!(out, "\n</{}>", element.element_type);
        Ok(out)
    }
}

fn print_prop(value: &Value, indent: &str) -> String {
    if let Value::String(text) = value {
        return quote(text);
    }
    let printed = print_value(value, indent);
    if printed.contains('\n') {
        format!(
            "{{\n{}\n{indent}}}",
            indent_lines(&printed, &indent.repeat(2))
        )
    } else {
        format!("{{{printed}}}")
    }
}

fn print_value(value: &Value, indent: &str) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => quote(text),
        Value::Array(items) if items.is_empty() => "Array []".to_string(),
        Value::Array(items) => {
            let mut out = String::from("Array [\n");
            for item in items {
                let _ = writeln!(out, "{},", indent_lines(&print_value(item, indent), indent));
            }
            out.push(']');
            out
        }
        Value::Object(map) if map.is_empty() => "Object {}".to_string(),
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut out = String::from("Object {\n");
            for (key, item) in entries {
                let entry = format!("{}: {}", quote(key), print_value(item, indent));
                let _ = writeln!(out, "{},", indent_lines(&entry, indent));
            }
            out.push('}');
            out
        }
    }
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

fn escape_text(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Prefix every non-empty line of `text`.
fn indent_lines(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
