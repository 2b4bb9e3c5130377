//! Rendered component tree for stylesnap.
//!
//! A test renderer hands over its output as JSON: each element is an object
//! with a `type`, an optional `props` mapping and an optional `children`
//! list whose entries are elements or plain strings. This crate loads that
//! JSON into an arena so nodes can be addressed by [`NodeId`], which is what
//! a print pass uses to remember which nodes it has already handled.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships,
//! providing O(1) access and traversal without borrow checker issues. A
//! synthetic [`NodeType::Fragment`] node sits at [`NodeId::ROOT`] and owns the
//! top-level rendered nodes.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Ordered map of prop names to values, in the order the renderer emitted them.
pub type Props = serde_json::Map<String, Value>;

/// Prefix of props that become `[data-*]` attribute selectors.
pub const DATA_PREFIX: &str = "data-";

/// A type-safe index into the render tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The synthetic fragment node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// A node in the arena with its parent/child links.
#[derive(Debug, Clone)]
pub struct Node {
    /// What kind of node this is.
    pub node_type: NodeType,
    /// The parent node, `None` for the root and for detached nodes.
    pub parent: Option<NodeId>,
    /// Children in render order.
    pub children: Vec<NodeId>,
}

/// The kinds of node a test renderer produces.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeType {
    /// Container for the top-level rendered nodes.
    Fragment,
    /// A rendered host element such as `div`.
    Element(ElementData),
    /// A text child.
    Text(String),
}

/// Element-specific data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementData {
    /// The element type, e.g. `div`.
    pub element_type: String,
    /// The element's props in emitted order.
    pub props: Props,
}

impl ElementData {
    /// Create element data from a type and props.
    #[must_use]
    pub fn new(element_type: impl Into<String>, props: Props) -> Self {
        Self {
            element_type: element_type.into(),
            props,
        }
    }

    /// The class list: `className`, or `class` when `className` is absent,
    /// empty or not a string.
    #[must_use]
    pub fn class_list(&self) -> Option<&str> {
        ["className", "class"]
            .into_iter()
            .filter_map(|key| self.props.get(key).and_then(Value::as_str))
            .find(|classes| !classes.is_empty())
    }

    /// Names of all `data-*` props, in props order.
    pub fn data_attributes(&self) -> impl Iterator<Item = &str> {
        self.props
            .keys()
            .map(String::as_str)
            .filter(|key| key.starts_with(DATA_PREFIX))
    }
}

/// Errors from loading a rendered tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The input is not rendered-tree JSON.
    #[error("invalid rendered tree JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The JSON shape of a rendered node.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RenderedJson {
    Text(String),
    Element {
        #[serde(rename = "type")]
        element_type: String,
        #[serde(default)]
        props: Option<Props>,
        #[serde(default)]
        children: Option<Vec<RenderedJson>>,
    },
    Many(Vec<RenderedJson>),
}

/// Arena-based render tree with O(1) node access.
#[derive(Debug, Clone)]
pub struct RenderTree {
    /// All nodes, indexed by `NodeId`. The fragment root is at index 0.
    nodes: Vec<Node>,
}

impl RenderTree {
    /// Create a tree holding only the fragment root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                node_type: NodeType::Fragment,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Load a tree from the renderer's JSON output.
    ///
    /// The top level may be a single element, an array of elements and
    /// strings, or `null` for an empty render.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Json`] if the text is not valid rendered-tree JSON.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let rendered: Option<RenderedJson> = serde_json::from_str(json)?;
        Ok(Self::from_rendered(rendered))
    }

    /// Load a tree from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Json`] if the value does not have the rendered-tree shape.
    pub fn from_value(value: Value) -> Result<Self, TreeError> {
        let rendered: Option<RenderedJson> = serde_json::from_value(value)?;
        Ok(Self::from_rendered(rendered))
    }

    fn from_rendered(rendered: Option<RenderedJson>) -> Self {
        let mut tree = Self::new();
        if let Some(rendered) = rendered {
            tree.append_rendered(NodeId::ROOT, rendered);
        }
        tree
    }

    fn append_rendered(&mut self, parent: NodeId, rendered: RenderedJson) {
        match rendered {
            RenderedJson::Text(text) => {
                let _ = self.append_text(parent, text);
            }
            RenderedJson::Element {
                element_type,
                props,
                children,
            } => {
                let id = self.append_element(parent, element_type, props.unwrap_or_default());
                for child in children.unwrap_or_default() {
                    self.append_rendered(id, child);
                }
            }
            RenderedJson::Many(items) => {
                for item in items {
                    self.append_rendered(parent, item);
                }
            }
        }
    }

    /// Get the fragment root ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The top-level rendered nodes.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        self.children(NodeId::ROOT)
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// A borrowed handle to a node, if it exists.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.get(id).map(|_| NodeRef { tree: self, id })
    }

    /// Allocate a detached node and return its ID.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(child);
        }
        if let Some(node) = self.nodes.get_mut(child.0) {
            node.parent = Some(parent);
        }
    }

    /// Allocate an element and append it to `parent`.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        element_type: impl Into<String>,
        props: Props,
    ) -> NodeId {
        let id = self.alloc(NodeType::Element(ElementData::new(element_type, props)));
        self.append_child(parent, id);
        id
    }

    /// Allocate a text node and append it to `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        let id = self.alloc(NodeType::Text(text.into()));
        self.append_child(parent, id);
        id
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Iterate over `id` and all its descendants in document order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> DescendantIterator<'_> {
        DescendantIterator {
            tree: self,
            stack: vec![id],
        }
    }
}

impl Default for RenderTree {
    fn default() -> Self {
        Self::new()
    }
}

/// A node together with the tree it lives in.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a RenderTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    /// The tree this node belongs to.
    #[must_use]
    pub const fn tree(self) -> &'a RenderTree {
        self.tree
    }

    /// The node's ID.
    #[must_use]
    pub const fn id(self) -> NodeId {
        self.id
    }

    /// The node's type, or `None` if the ID is not in the tree.
    #[must_use]
    pub fn node_type(self) -> Option<&'a NodeType> {
        self.tree.get(self.id).map(|n| &n.node_type)
    }

    /// Element data if this is an element.
    #[must_use]
    pub fn as_element(self) -> Option<&'a ElementData> {
        self.tree.as_element(self.id)
    }

    /// Text content if this is a text node.
    #[must_use]
    pub fn as_text(self) -> Option<&'a str> {
        self.tree.as_text(self.id)
    }

    /// Whether this is a rendered element (not text, not the fragment root).
    #[must_use]
    pub fn is_element(self) -> bool {
        self.as_element().is_some()
    }

    /// The node's children.
    pub fn children(self) -> impl Iterator<Item = NodeRef<'a>> {
        let tree = self.tree;
        tree.children(self.id)
            .iter()
            .map(move |&id| NodeRef { tree, id })
    }
}

/// Pre-order iterator over a node and its descendants.
pub struct DescendantIterator<'a> {
    tree: &'a RenderTree,
    stack: Vec<NodeId>,
}

impl Iterator for DescendantIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
