//! Derived metrics over a frozen call tree.
//!
//! All three metrics are memoized: each is computed at most once per node.
//! The tree is never mutated after [`super::CallTree::build`] returns, so the
//! `OnceLock` cells make repeated and concurrent reads cheap and safe.

use super::call_tree::{CallTree, NodeId};
use crate::utils::error::TreeError;

impl CallTree {
    /// Subtree depth of a node
    ///
    /// 1 for a leaf, otherwise `1 + max(child depth)`.
    pub fn depth(&self, id: NodeId) -> u32 {
        let node = self.node(id);
        *node.depth.get_or_init(|| {
            1 + node
                .children
                .iter()
                .map(|&child| self.depth(child))
                .max()
                .unwrap_or(0)
        })
    }

    /// Inclusive sample count of a node
    ///
    /// Exclusive count plus the inclusive counts of all children. On the
    /// super-root this equals the total number of samples used for the build.
    pub fn inclusive_samples(&self, id: NodeId) -> u64 {
        let node = self.node(id);
        *node.inclusive.get_or_init(|| {
            node.exclusive_samples
                + node
                    .children
                    .iter()
                    .map(|&child| self.inclusive_samples(child))
                    .sum::<u64>()
        })
    }

    /// CPU consumption ratio of a node
    ///
    /// This node's inclusive count divided by the root's inclusive count.
    ///
    /// # Errors
    /// `TreeError::UndefinedRatio` when the root's inclusive count is zero;
    /// never a silent 0 or NaN.
    pub fn cpu_ratio(&self, id: NodeId) -> Result<f64, TreeError> {
        let total = self.inclusive_samples(self.root_of(id));
        if total == 0 {
            return Err(TreeError::UndefinedRatio);
        }
        let node = self.node(id);
        Ok(*node
            .ratio
            .get_or_init(|| self.inclusive_samples(id) as f64 / total as f64))
    }
}
