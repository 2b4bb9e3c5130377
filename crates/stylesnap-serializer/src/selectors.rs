//! Selector extraction.
//!
//! Every class in a node's class list becomes `.class`, every `data-*` prop
//! becomes `[data-*]`. Children contribute before the node itself.

use stylesnap_tree::NodeRef;

/// Collect the selectors referenced by `node` and its descendants.
///
/// Children are visited first, in order, then the node's own class list
/// followed by its `data-*` props in props order. Duplicates are kept.
/// Text nodes and nodes without props contribute nothing.
#[must_use]
pub fn extract_selectors(node: NodeRef<'_>) -> Vec<String> {
    let mut selectors: Vec<String> = node.children().flat_map(extract_selectors).collect();

    let Some(element) = node.as_element() else {
        return selectors;
    };

    if let Some(classes) = element.class_list() {
        // Doubled spaces would otherwise yield a bare `.`
        selectors.extend(
            classes
                .split(' ')
                .filter(|class| !class.is_empty())
                .map(|class| format!(".{class}")),
        );
    }
    selectors.extend(element.data_attributes().map(|key| format!("[{key}]")));

    selectors
}
