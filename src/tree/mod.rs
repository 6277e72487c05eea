//! Call tree built from a Profile, with lazily memoized metrics.

pub mod call_tree;
pub mod metrics;

pub use call_tree::{CallNode, CallTree, NodeId};
