//! Tests for selector extraction.

use serde_json::json;
use stylesnap_serializer::extract_selectors;
use stylesnap_tree::RenderTree;

fn selectors_of(value: serde_json::Value) -> Vec<String> {
    let tree = RenderTree::from_value(value).unwrap();
    extract_selectors(tree.node(tree.roots()[0]).unwrap())
}

#[test]
fn test_bare_node_has_no_selectors() {
    assert!(selectors_of(json!({ "type": "div" })).is_empty());
    assert!(selectors_of(json!({ "type": "div", "props": {}, "children": [] })).is_empty());
}

#[test]
fn test_class_list_in_order() {
    let selectors = selectors_of(json!({ "type": "div", "props": { "className": "a b c" } }));
    assert_eq!(selectors, vec![".a", ".b", ".c"]);
}

#[test]
fn test_data_attributes_follow_classes() {
    let selectors = selectors_of(json!({
        "type": "div",
        "props": { "data-foo": true, "className": "x", "data-bar": "" }
    }));
    assert_eq!(selectors, vec![".x", "[data-foo]", "[data-bar]"]);
}

#[test]
fn test_children_come_before_own_props() {
    let selectors = selectors_of(json!({
        "type": "div",
        "props": { "className": "parent" },
        "children": [
            { "type": "span", "props": { "className": "first" } },
            "text",
            {
                "type": "p",
                "props": { "className": "second" },
                "children": [{ "type": "b", "props": { "data-deep": 1 } }]
            }
        ]
    }));
    assert_eq!(
        selectors,
        vec![".first", "[data-deep]", ".second", ".parent"]
    );
}

#[test]
fn test_duplicates_are_kept() {
    let selectors = selectors_of(json!({
        "type": "div",
        "props": { "className": "same" },
        "children": [{ "type": "span", "props": { "className": "same" } }]
    }));
    assert_eq!(selectors, vec![".same", ".same"]);
}

#[test]
fn test_class_prop_is_used_when_class_name_missing() {
    let selectors = selectors_of(json!({ "type": "div", "props": { "class": "legacy" } }));
    assert_eq!(selectors, vec![".legacy"]);
}

#[test]
fn test_non_string_class_name_contributes_nothing() {
    let selectors = selectors_of(json!({ "type": "div", "props": { "className": 7 } }));
    assert!(selectors.is_empty());
}

#[test]
fn test_repeated_spaces_do_not_produce_empty_classes() {
    let selectors = selectors_of(json!({ "type": "div", "props": { "className": " a  b " } }));
    assert_eq!(selectors, vec![".a", ".b"]);
}

#[test]
fn test_fragment_root_collects_every_top_level_node() {
    let tree = RenderTree::from_value(json!([
        { "type": "h1", "props": { "className": "title" } },
        { "type": "p", "props": { "className": "body" } }
    ]))
    .unwrap();
    let selectors = extract_selectors(tree.node(tree.root()).unwrap());
    assert_eq!(selectors, vec![".title", ".body"]);
}
