//! Document/selection collaborator interface
//!
//! The toolbar never owns or mutates the document. Every recomputation reads
//! an immutable snapshot through [`DocumentSelection`], which the host editor
//! hands over on mount and after every update.

pub mod memory;

use serde::{Deserialize, Serialize};

pub use memory::MemoryDocument;

/// Stable identifier of a node in the document tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeKey(pub u64);

impl std::fmt::Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A block-level node (paragraph, heading, code block, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockNode {
    pub key: NodeKey,
    /// Schema type tag (e.g. "paragraph", "heading1", "code_block")
    pub node_type: String,
}

/// An inline node embedded in a line of text (e.g. a hyperlink)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineNode {
    pub key: NodeKey,
    /// Schema type tag (e.g. "link")
    pub node_type: String,
    /// Link target, when the inline carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl InlineNode {
    pub fn is_type(&self, node_type: &str) -> bool {
        self.node_type == node_type
    }
}

/// Read-only view of the document and its current selection
///
/// Range queries may fail while the selection and the tree are briefly out of
/// sync during an in-flight edit. Callers on the render path must treat an
/// error as "nothing found".
pub trait DocumentSelection {
    /// Whether the selection is a caret (zero-width)
    fn is_collapsed(&self) -> bool;

    /// The block containing the start of the selection
    fn start_block(&self) -> Option<&BlockNode>;

    /// Inline nodes intersecting the selection range, in document order
    fn inlines_in_selection(&self) -> anyhow::Result<Vec<InlineNode>>;

    /// Whether the selection starts or ends inside `node`
    fn has_edge_in(&self, node: &InlineNode) -> anyhow::Result<bool>;
}
