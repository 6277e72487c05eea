//! Call-tree construction from a Profile's samples and frame table.
//!
//! The tree is an arena: nodes live in a flat `Vec` and reference each other
//! by index. Parent links are relation-only indices and never participate in
//! ownership; the arena owns every node, and the tree as a whole is frozen
//! once [`CallTree::build`] returns.

use crate::parser::{Profile, StackFrame};
use crate::utils::config::{SUPER_ROOT_CATEGORY, SUPER_ROOT_ID, SUPER_ROOT_NAME};
use crate::utils::error::TreeError;
use log::debug;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Index of a node within its [`CallTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One frame occurrence in the constructed call tree
///
/// Distinct from the flat frame-table entry: a frame identifier corresponds
/// to exactly one tree position, reconstructed from parent links. Derived
/// metrics are memoized behind `OnceLock`, so they are computed at most once
/// and the frozen tree stays safe for concurrent reads.
#[derive(Debug)]
pub struct CallNode {
    /// Frame identifier (the synthetic super-root uses a fixed identifier
    /// that never appears in any frame table)
    pub id: String,

    /// Display name
    pub name: String,

    /// Category label
    pub category: String,

    /// Source/resolved-URL string
    pub url: String,

    /// Relation-only backreference; `None` for the super-root
    pub parent: Option<NodeId>,

    /// Index of this node within its parent's child sequence
    pub child_index: usize,

    /// Child nodes in first-seen insertion order
    pub children: Vec<NodeId>,

    /// Number of samples whose exact leaf is this node
    pub exclusive_samples: u64,

    pub(super) depth: OnceLock<u32>,
    pub(super) inclusive: OnceLock<u64>,
    pub(super) ratio: OnceLock<f64>,
}

impl CallNode {
    fn new(
        id: String,
        name: String,
        category: String,
        url: String,
        parent: Option<NodeId>,
        child_index: usize,
    ) -> Self {
        Self {
            id,
            name,
            category,
            url,
            parent,
            child_index,
            children: Vec::new(),
            exclusive_samples: 0,
            depth: OnceLock::new(),
            inclusive: OnceLock::new(),
            ratio: OnceLock::new(),
        }
    }
}

/// A frozen call tree built from one Profile
///
/// **Public** - produced by [`Profile::build_call_tree`]
#[derive(Debug)]
pub struct CallTree {
    nodes: Vec<CallNode>,
    /// frame identifier -> node, exact-match lookup
    index: HashMap<String, NodeId>,
}

impl CallTree {
    /// Tree containing only the synthetic super-root
    fn with_super_root() -> Self {
        let root = CallNode::new(
            SUPER_ROOT_ID.to_string(),
            SUPER_ROOT_NAME.to_string(),
            SUPER_ROOT_CATEGORY.to_string(),
            String::new(),
            None,
            0,
        );
        Self {
            nodes: vec![root],
            index: HashMap::new(),
        }
    }

    /// Build the call tree for a Profile
    ///
    /// **Public** - single construction pass
    ///
    /// For each sample the leaf frame is resolved, the parent chain is walked
    /// back to a root frame, and nodes are attached under the super-root.
    /// Revisiting an identifier through another sample reuses the existing
    /// node; only the exact leaf of each sample gains an exclusive count.
    ///
    /// # Errors
    /// `TreeError::UnresolvedFrame` if the leaf or any ancestor identifier is
    /// absent from the frame table. The partial tree is discarded.
    pub fn build(profile: &Profile) -> Result<Self, TreeError> {
        let mut tree = Self::with_super_root();

        for sample in profile.samples() {
            let leaf = tree.ensure_chain(profile, &sample.sf)?;
            tree.nodes[leaf.0].exclusive_samples += 1;
        }

        debug!(
            "Built call tree: {} nodes from {} samples",
            tree.nodes.len(),
            profile.samples().len()
        );

        Ok(tree)
    }

    /// Resolve `id` to a node, creating it and its ancestor chain on demand
    ///
    /// **Private** - construction helper
    fn ensure_chain(&mut self, profile: &Profile, id: &str) -> Result<NodeId, TreeError> {
        if let Some(&node) = self.index.get(id) {
            return Ok(node);
        }

        let frame = profile
            .frames()
            .get(id)
            .ok_or_else(|| TreeError::UnresolvedFrame(id.to_string()))?;

        let parent = match frame.parent.as_deref() {
            Some(parent_id) => self.ensure_chain(profile, parent_id)?,
            None => self.root(),
        };

        let node = self.push_child(parent, id, frame);
        self.index.insert(id.to_string(), node);
        Ok(node)
    }

    /// Append a new child under `parent`
    ///
    /// **Private** - construction helper
    fn push_child(&mut self, parent: NodeId, id: &str, frame: &StackFrame) -> NodeId {
        let child_index = self.nodes[parent.0].children.len();
        let node = NodeId(self.nodes.len());
        self.nodes.push(CallNode::new(
            id.to_string(),
            frame.name.clone(),
            frame.category.clone(),
            frame.resolved_url.clone(),
            Some(parent),
            child_index,
        ));
        self.nodes[parent.0].children.push(node);
        node
    }

    /// The synthetic super-root, single entry point of every tree
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Access a node by id
    pub fn node(&self, id: NodeId) -> &CallNode {
        &self.nodes[id.0]
    }

    /// Number of nodes, super-root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the super-root exists in every tree
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Locate the tree node for a frame identifier, if any sample reached it
    pub fn find(&self, frame_id: &str) -> Option<NodeId> {
        self.index.get(frame_id).copied()
    }

    /// Walk parent references up to the node with no parent
    ///
    /// Pure traversal over the frozen tree; not memoized.
    pub fn root_of(&self, mut id: NodeId) -> NodeId {
        while let Some(parent) = self.nodes[id.0].parent {
            id = parent;
        }
        id
    }
}
