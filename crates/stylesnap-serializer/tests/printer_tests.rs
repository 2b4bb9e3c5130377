//! Tests for the bundled host printer.

use serde_json::json;
use stylesnap_serializer::{Plugin, PrinterOptions, SerializeError, SnapshotPrinter};
use stylesnap_tree::{NodeRef, RenderTree};

fn print(value: serde_json::Value) -> String {
    let tree = RenderTree::from_value(value).unwrap();
    SnapshotPrinter::default().print_tree(&tree, &[]).unwrap()
}

#[test]
fn test_empty_element_self_closes() {
    assert_eq!(print(json!({ "type": "br" })), "<br />");
}

#[test]
fn test_props_are_sorted_and_typed() {
    assert_eq!(
        print(json!({
            "type": "input",
            "props": { "value": "hi", "disabled": true, "size": 3, "form": null }
        })),
        "<input\n  disabled={true}\n  form={null}\n  size={3}\n  value=\"hi\"\n/>"
    );
}

#[test]
fn test_string_props_are_escaped() {
    assert_eq!(
        print(json!({ "type": "a", "props": { "title": "say \"hi\"" } })),
        "<a\n  title=\"say \\\"hi\\\"\"\n/>"
    );
}

#[test]
fn test_children_are_indented() {
    assert_eq!(
        print(json!({
            "type": "ul",
            "children": [
                { "type": "li", "children": ["one"] },
                { "type": "li", "props": { "className": "last" }, "children": ["two"] }
            ]
        })),
        "<ul>\n  <li>\n    one\n  </li>\n  <li\n    className=\"last\"\n  >\n    two\n  </li>\n</ul>"
    );
}

#[test]
fn test_children_prop_is_not_printed() {
    assert_eq!(
        print(json!({ "type": "p", "props": { "children": "x" }, "children": ["x"] })),
        "<p>\n  x\n</p>"
    );
}

#[test]
fn test_text_is_escaped() {
    assert_eq!(
        print(json!({ "type": "code", "children": ["a < b > c"] })),
        "<code>\n  a &lt; b &gt; c\n</code>"
    );
}

#[test]
fn test_object_prop_spans_lines() {
    assert_eq!(
        print(json!({
            "type": "div",
            "props": { "style": { "width": 10, "color": "red" }, "items": [] }
        })),
        "<div\n  items={Array []}\n  style={\n    Object {\n      \"color\": \"red\",\n      \"width\": 10,\n    }\n  }\n/>"
    );
}

#[test]
fn test_top_level_nodes_are_printed_in_order() {
    assert_eq!(
        print(json!([{ "type": "h1", "children": ["A"] }, "plain"])),
        "<h1>\n  A\n</h1>\nplain"
    );
}

#[test]
fn test_custom_indent() {
    let tree = RenderTree::from_json(r#"{"type":"div","props":{"id":"x"},"children":["y"]}"#)
        .unwrap();
    let printer = SnapshotPrinter::new(PrinterOptions { indent: 4 });
    assert_eq!(
        printer.print_tree(&tree, &[]).unwrap(),
        "<div\n    id=\"x\"\n>\n    y\n</div>"
    );
}

#[test]
fn test_printer_options_from_json() {
    let options: PrinterOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options.indent, 2);
    let options: PrinterOptions = serde_json::from_str(r#"{"indent":0}"#).unwrap();
    assert_eq!(options.indent, 0);
}

/// Prints `span` elements as `[span]` and leaves everything else alone.
struct BracketSpans;

impl Plugin for BracketSpans {
    fn test(&self, node: NodeRef<'_>) -> bool {
        node.as_element()
            .is_some_and(|element| element.element_type == "span")
    }

    fn print(
        &self,
        node: NodeRef<'_>,
        _printer: &dyn Fn(NodeRef<'_>) -> Result<String, SerializeError>,
    ) -> Result<String, SerializeError> {
        Ok(format!("[{}]", node.as_element().map_or("", |e| e.element_type.as_str())))
    }
}

#[test]
fn test_plugins_are_consulted_for_nested_nodes() {
    let tree = RenderTree::from_json(
        r#"{"type":"div","children":[{"type":"span"},{"type":"em","children":[{"type":"span"}]}]}"#,
    )
    .unwrap();
    let output = SnapshotPrinter::default()
        .print_tree(&tree, &[&BracketSpans])
        .unwrap();
    assert_eq!(output, "<div>\n  [span]\n  <em>\n    [span]\n  </em>\n</div>");
}
