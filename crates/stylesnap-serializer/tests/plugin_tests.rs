//! End-to-end tests for the styled print pass.

use stylesnap_css::{CssError, OutputStyle};
use stylesnap_serializer::{
    Plugin, SerializeError, SerializerOptions, SharedStyleSheet, SnapshotPrinter, StyleSerializer,
    StyleSheetSource,
};
use stylesnap_tree::{NodeRef, RenderTree};

fn compressed<S: StyleSheetSource>(source: S) -> StyleSerializer<S> {
    StyleSerializer::with_options(
        source,
        SerializerOptions {
            output: OutputStyle::Compressed,
        },
    )
}

#[test]
fn test_used_rule_is_inlined_with_alias() {
    let serializer = compressed(vec![".foo{color:red}\n.baz{color:blue}".to_string()]);
    let tree = RenderTree::from_json(r#"{"type":"div","props":{"className":"foo"}}"#).unwrap();

    assert_eq!(
        serializer.snapshot(&tree).unwrap(),
        ".c0{color:red}\n\n<div\n  className=\"c0\"\n/>"
    );
}

#[test]
fn test_pretty_snapshot() {
    let store = SharedStyleSheet::new();
    store.inject(".css-1abc{display:flex}");
    store.inject(".css-2def{color:red}");
    store.inject(".css-unused{margin:0}");
    store.inject("@media (min-width:100px){.css-1abc{display:block}.css-unused{margin:1px}}");

    let tree = RenderTree::from_json(
        r#"{
            "type": "div",
            "props": { "className": "css-1abc" },
            "children": [
                { "type": "span", "props": { "className": "css-2def" }, "children": ["Hello"] }
            ]
        }"#,
    )
    .unwrap();

    let output = StyleSerializer::new(store).snapshot(&tree).unwrap();
    insta::assert_snapshot!(output, @r###"
    .c1 {
      display: flex;
    }

    .c0 {
      color: red;
    }

    @media (min-width:100px) {
      .c1 {
        display: block;
      }
    }

    <div
      className="c1"
    >
      .c0 {
        color: red;
      }

      <span
        className="c0"
      >
        Hello
      </span>
    </div>
    "###);
}

#[test]
fn test_media_block_keeps_only_used_rule() {
    let serializer = compressed(vec![
        "@media (min-width:100px){ .foo{color:red} .unused{color:green} }".to_string(),
    ]);
    let tree = RenderTree::from_json(r#"{"type":"p","props":{"className":"foo"}}"#).unwrap();

    insta::assert_snapshot!(serializer.snapshot(&tree).unwrap(), @r###"
    @media (min-width:100px){.c0{color:red}}

    <p
      className="c0"
    />
    "###);
}

#[test]
fn test_data_attribute_rules_are_inlined() {
    let serializer = compressed(vec!["[data-css-x]{display:none}".to_string()]);
    let tree = RenderTree::from_json(r#"{"type":"div","props":{"data-css-x":""}}"#).unwrap();

    assert_eq!(
        serializer.snapshot(&tree).unwrap(),
        "c0{display:none}\n\n<div\n  data-css-x=\"\"\n/>"
    );
}

#[test]
fn test_unstyled_tree_is_printed_unchanged() {
    let serializer = StyleSerializer::new(vec![".foo{color:red}".to_string()]);
    let tree = RenderTree::from_json(r#"{"type":"div","children":["hi"]}"#).unwrap();

    assert_eq!(serializer.snapshot(&tree).unwrap(), "<div>\n  hi\n</div>");
}

#[test]
fn test_empty_store_prints_tree_unchanged() {
    let serializer = StyleSerializer::new(SharedStyleSheet::new());
    let tree = RenderTree::from_json(r#"{"type":"div","props":{"className":"foo"}}"#).unwrap();

    assert_eq!(
        serializer.snapshot(&tree).unwrap(),
        "<div\n  className=\"foo\"\n/>"
    );
}

#[test]
fn test_node_is_not_offered_twice_in_one_pass() {
    let serializer = StyleSerializer::new(vec![".foo{color:red}".to_string()]);
    let tree = RenderTree::from_json(
        r#"{"type":"div","props":{"className":"foo"},"children":[{"type":"span"}]}"#,
    )
    .unwrap();
    let div = tree.node(tree.roots()[0]).unwrap();
    let span = tree.node(tree.children(div.id())[0]).unwrap();

    let pass = serializer.pass();
    let printer = SnapshotPrinter::default();
    assert!(pass.test(div));

    let output = pass
        .print(div, &|inner: NodeRef<'_>| printer.print(inner, &[]))
        .unwrap();
    assert!(output.starts_with(".c0 {"));

    assert!(!pass.test(div));
    assert!(!pass.test(div));
    assert!(pass.is_visited(div));

    // Only the printed node is marked.
    assert!(pass.test(span));
    assert!(!pass.is_visited(span));

    assert!(serializer.pass().test(div));
}

#[test]
fn test_children_reached_through_the_host_printer_are_offered() {
    let serializer = compressed(vec![".foo{color:red}\n.bar{color:blue}".to_string()]);
    let tree = RenderTree::from_json(
        r#"{"type":"div","props":{"className":"foo"},"children":[{"type":"span","props":{"className":"bar"}}]}"#,
    )
    .unwrap();
    let div = tree.node(tree.roots()[0]).unwrap();
    let span = tree.node(tree.children(div.id())[0]).unwrap();

    let pass = serializer.pass();
    let printer = SnapshotPrinter::default();
    let _ = pass
        .print(div, &|inner: NodeRef<'_>| printer.print(inner, &[&pass]))
        .unwrap();

    assert!(pass.is_visited(div));
    assert!(pass.is_visited(span));
    assert!(!pass.test(span));
}

#[test]
fn test_styled_child_gets_its_own_block() {
    let serializer = compressed(vec![".foo{color:red}\n.bar{color:blue}".to_string()]);
    let tree = RenderTree::from_json(
        r#"{"type":"div","props":{"className":"foo"},"children":[{"type":"span","props":{"className":"bar"}}]}"#,
    )
    .unwrap();

    insta::assert_snapshot!(serializer.snapshot(&tree).unwrap(), @r###"
    .c1{color:red}.c0{color:blue}

    <div
      className="c1"
    >
      .c0{color:blue}

      <span
        className="c0"
      />
    </div>
    "###);
}

#[test]
fn test_text_nodes_are_not_claimed() {
    let serializer = StyleSerializer::new(Vec::<String>::new());
    let tree = RenderTree::from_json(r#"["text"]"#).unwrap();
    let text = tree.node(tree.roots()[0]).unwrap();
    assert!(!serializer.pass().test(text));
}

#[test]
fn test_invalid_stylesheet_fails_the_snapshot() {
    let serializer = StyleSerializer::new(vec![".foo{color:red".to_string()]);
    let tree = RenderTree::from_json(r#"{"type":"div","props":{"className":"foo"}}"#).unwrap();

    let err = serializer.snapshot(&tree).unwrap_err();
    assert!(matches!(
        err,
        SerializeError::Stylesheet(CssError::MissingCloseBrace { .. })
    ));
    assert_eq!(
        err.to_string(),
        "failed to parse stylesheet: 1:5: missing '}'"
    );
}

#[test]
fn test_fragments_are_joined_before_parsing() {
    let fragments = [".a{color:red}", ".b{color:blue}"];
    let serializer = compressed(&fragments[..]);
    let tree = RenderTree::from_json(r#"{"type":"i","props":{"className":"b"}}"#).unwrap();

    assert_eq!(serializer.source().text(), ".a{color:red}\n.b{color:blue}");
    assert_eq!(
        serializer.snapshot(&tree).unwrap(),
        ".c0{color:blue}\n\n<i\n  className=\"c0\"\n/>"
    );
}

#[test]
fn test_shared_store_is_read_at_print_time() {
    let store = SharedStyleSheet::new();
    let serializer = compressed(store.clone());
    let tree = RenderTree::from_json(r#"{"type":"div","props":{"className":"late"}}"#).unwrap();

    assert!(store.is_empty());
    store.inject(".late{color:red}");
    assert_eq!(store.len(), 1);
    assert_eq!(
        serializer.snapshot(&tree).unwrap(),
        ".c0{color:red}\n\n<div\n  className=\"c0\"\n/>"
    );

    store.flush();
    assert_eq!(
        serializer.snapshot(&tree).unwrap(),
        "<div\n  className=\"late\"\n/>"
    );
}

#[test]
fn test_serializer_options_from_json() {
    let options: SerializerOptions =
        serde_json::from_str(r#"{"output":{"style":"compressed"}}"#).unwrap();
    assert_eq!(options.output, OutputStyle::Compressed);

    let options: SerializerOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, SerializerOptions::default());
}

#[test]
fn test_only_empty_rule_matches() {
    let serializer = compressed(vec![".a{}".to_string()]);
    let tree = RenderTree::from_json(r#"{"type":"div","props":{"className":"a"}}"#).unwrap();

    assert_eq!(
        serializer.snapshot(&tree).unwrap(),
        "<div\n  className=\"a\"\n/>"
    );
}
