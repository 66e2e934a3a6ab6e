//! Arena-resident tree node
//!
//! Nodes live in a per-tree slot vector and refer to their children by
//! [`NodeId`]. A node is owned by exactly one tree; ids are never valid
//! across trees.

use std::fmt;

/// Height reported for an absent child.
pub(crate) const EMPTY_HEIGHT: i32 = -1;

/// Stable handle to a node slot inside one tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Slot index inside the owning arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One key participating in an ordered set.
#[derive(Debug, Clone)]
pub struct TreeNode<K> {
    /// Payload.
    pub key: K,

    /// Cached subtree height (leaf = 0). Only used for rebalancing.
    pub height: i32,

    /// Keys not greater than `key`.
    pub left: Option<NodeId>,

    /// Keys not less than `key`; equal keys are routed here on insert.
    pub right: Option<NodeId>,
}

impl<K> TreeNode<K> {
    /// Fresh leaf holding `key`.
    pub fn leaf(key: K) -> Self {
        Self {
            key,
            height: 0,
            left: None,
            right: None,
        }
    }

    /// Check if leaf
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Height recomputed from the children's cached heights.
#[inline]
pub(crate) fn combined_height(left: i32, right: i32) -> i32 {
    1 + left.max(right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_height_is_zero() {
        let node = TreeNode::leaf(7u32);
        assert!(node.is_leaf());
        assert_eq!(node.height, 0);
        assert_eq!(combined_height(EMPTY_HEIGHT, EMPTY_HEIGHT), 0);
    }

    #[test]
    fn test_combined_height_takes_taller_child() {
        assert_eq!(combined_height(0, EMPTY_HEIGHT), 1);
        assert_eq!(combined_height(2, 4), 5);
    }
}
