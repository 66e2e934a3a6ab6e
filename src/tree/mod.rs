//! Height-balanced ordered set (AVL discipline)
//!
//! Keys are kept with multiplicity: descent compares with strict `<`, so a
//! key equal to the current node goes right and is stored again rather than
//! merged.
//!
//! Storage is one arena per tree. Children are [`NodeId`] handles into that
//! arena, freed slots are recycled, and dropping the set releases every node.
//!
//! Insertion descends to the leaf position first, attaches the new node, and
//! then every ancestor re-evaluates its weight on the way back up:
//!
//!   weight = height(right) - height(left),  absent child = -1
//!   weight >  1  → rotate left  (right child rotated right first if its weight < 0)
//!   weight < -1  → rotate right (left child rotated left first if its weight > 0)

mod node;
mod traversal;

pub use node::{NodeId, TreeNode};
pub use traversal::{Iter, PreOrder};

use std::cmp::Ordering;
use std::fmt;

use node::{combined_height, EMPTY_HEIGHT};
use thiserror::Error;

/// Errors reported by tree mutation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// No storage could be obtained for a new node. The tree is unchanged.
    #[error("node allocation failed; key was not inserted")]
    AllocationFailure,
}

/// Ordered multiset of keys backed by an AVL tree.
#[derive(Clone)]
pub struct OrderedSet<K> {
    slots: Vec<Option<TreeNode<K>>>,
    free: Vec<NodeId>,
    root: Option<NodeId>,
    len: usize,
    node_limit: Option<usize>,
}

impl<K> OrderedSet<K> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
            node_limit: None,
        }
    }

    /// Create an empty set that refuses to hold more than `limit` nodes.
    ///
    /// Inserts past the limit fail with [`TreeError::AllocationFailure`]
    /// exactly as an exhausted allocator would.
    pub fn with_node_limit(limit: usize) -> Self {
        Self {
            node_limit: Some(limit),
            ..Self::new()
        }
    }

    /// Number of stored keys, counting duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no keys are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; `None` when empty, `Some(0)` for a single node.
    pub fn height(&self) -> Option<usize> {
        self.root.map(|id| self.node(id).height as usize)
    }

    /// Root handle, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Borrow a node by handle.
    ///
    /// # Panics
    /// Panics if `id` does not name a live node of this tree.
    pub fn node(&self, id: NodeId) -> &TreeNode<K> {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("node {id} is not live in this tree"),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut TreeNode<K> {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("node {id} is not live in this tree"),
        }
    }

    /// Ascending traversal over all keys.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    /// Pre-order traversal over all keys.
    pub fn preorder(&self) -> PreOrder<'_, K> {
        PreOrder::new(self)
    }

    /// Release every node. Safe on an empty set.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// Check every node: |weight| ≤ 1 and cached height matches its children.
    pub fn is_balanced(&self) -> bool {
        self.checked_height(self.root).is_some()
    }

    fn checked_height(&self, link: Option<NodeId>) -> Option<i32> {
        let Some(id) = link else {
            return Some(EMPTY_HEIGHT);
        };
        let node = self.node(id);
        let left = self.checked_height(node.left)?;
        let right = self.checked_height(node.right)?;
        let height = combined_height(left, right);
        ((right - left).abs() <= 1 && node.height == height).then_some(height)
    }

    #[inline]
    fn height_of(&self, link: Option<NodeId>) -> i32 {
        link.map_or(EMPTY_HEIGHT, |id| self.node(id).height)
    }

    /// Right-subtree height minus left-subtree height.
    fn weight(&self, id: NodeId) -> i32 {
        let node = self.node(id);
        self.height_of(node.right) - self.height_of(node.left)
    }

    fn update_height(&mut self, id: NodeId) {
        let node = self.node(id);
        let height = combined_height(self.height_of(node.left), self.height_of(node.right));
        self.node_mut(id).height = height;
    }

    /// Right child becomes the local root; returns it.
    fn rotate_left(&mut self, id: NodeId) -> NodeId {
        let Some(pivot) = self.node(id).right else {
            return id;
        };
        let moved = self.node(pivot).left;
        self.node_mut(id).right = moved;
        self.node_mut(pivot).left = Some(id);
        // Old root is now the pivot's child: refresh it first.
        self.update_height(id);
        self.update_height(pivot);
        pivot
    }

    /// Left child becomes the local root; returns it.
    fn rotate_right(&mut self, id: NodeId) -> NodeId {
        let Some(pivot) = self.node(id).left else {
            return id;
        };
        let moved = self.node(pivot).right;
        self.node_mut(id).left = moved;
        self.node_mut(pivot).right = Some(id);
        self.update_height(id);
        self.update_height(pivot);
        pivot
    }

    /// Refresh `id` after one of its subtrees changed; returns the new local root.
    fn rebalance(&mut self, id: NodeId) -> NodeId {
        self.update_height(id);
        let weight = self.weight(id);

        if weight > 1 {
            if let Some(right) = self.node(id).right {
                if self.weight(right) < 0 {
                    let right = self.rotate_right(right);
                    self.node_mut(id).right = Some(right);
                }
            }
            self.rotate_left(id)
        } else if weight < -1 {
            if let Some(left) = self.node(id).left {
                if self.weight(left) > 0 {
                    let left = self.rotate_left(left);
                    self.node_mut(id).left = Some(left);
                }
            }
            self.rotate_right(id)
        } else {
            id
        }
    }

    fn allocate(&mut self, key: K) -> Result<NodeId, TreeError> {
        if self.node_limit.is_some_and(|limit| self.len >= limit) {
            return Err(TreeError::AllocationFailure);
        }

        let node = Some(TreeNode::leaf(key));
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = node;
                id
            }
            None => {
                self.slots
                    .try_reserve(1)
                    .map_err(|_| TreeError::AllocationFailure)?;
                self.slots.push(node);
                NodeId(self.slots.len() - 1)
            }
        };
        self.len += 1;
        Ok(id)
    }

    fn release(&mut self, id: NodeId) -> Option<K> {
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id);
        self.len -= 1;
        Some(node.key)
    }

    /// Unlink the minimum of the subtree at `id`.
    ///
    /// Returns the rebalanced remainder and the detached node.
    fn detach_min(&mut self, id: NodeId) -> (Option<NodeId>, NodeId) {
        match self.node(id).left {
            None => (self.node(id).right, id),
            Some(left) => {
                let (rest, min) = self.detach_min(left);
                self.node_mut(id).left = rest;
                (Some(self.rebalance(id)), min)
            }
        }
    }
}

impl<K: Ord> OrderedSet<K> {
    /// Insert `key`, keeping any equal keys already present.
    ///
    /// On [`TreeError::AllocationFailure`] the set is left exactly as it was.
    pub fn insert(&mut self, key: K) -> Result<(), TreeError> {
        let fresh = self.allocate(key)?;
        let root = self.insert_at(self.root, fresh);
        self.root = Some(root);
        Ok(())
    }

    fn insert_at(&mut self, link: Option<NodeId>, fresh: NodeId) -> NodeId {
        let Some(id) = link else {
            return fresh;
        };

        if self.node(fresh).key < self.node(id).key {
            let left = self.insert_at(self.node(id).left, fresh);
            self.node_mut(id).left = Some(left);
        } else {
            let right = self.insert_at(self.node(id).right, fresh);
            self.node_mut(id).right = Some(right);
        }

        self.rebalance(id)
    }

    /// Remove one occurrence of `key`. Returns whether anything was removed.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(root) = self.root else {
            return false;
        };
        let (root, removed) = self.remove_at(root, key);
        self.root = root;
        removed
    }

    fn remove_at(&mut self, id: NodeId, key: &K) -> (Option<NodeId>, bool) {
        let node = self.node(id);
        let (left, right) = (node.left, node.right);

        match key.cmp(&node.key) {
            Ordering::Less => {
                let Some(left) = left else {
                    return (Some(id), false);
                };
                let (left, removed) = self.remove_at(left, key);
                self.node_mut(id).left = left;
                (Some(if removed { self.rebalance(id) } else { id }), removed)
            }
            Ordering::Greater => {
                let Some(right) = right else {
                    return (Some(id), false);
                };
                let (right, removed) = self.remove_at(right, key);
                self.node_mut(id).right = right;
                (Some(if removed { self.rebalance(id) } else { id }), removed)
            }
            Ordering::Equal => {
                self.release(id);
                let replacement = match (left, right) {
                    (None, None) => None,
                    (Some(child), None) | (None, Some(child)) => Some(child),
                    (Some(left), Some(right)) => {
                        let (right, successor) = self.detach_min(right);
                        let node = self.node_mut(successor);
                        node.left = Some(left);
                        node.right = right;
                        Some(self.rebalance(successor))
                    }
                };
                (replacement, true)
            }
        }
    }

    /// True if at least one occurrence of `key` is stored.
    pub fn contains(&self, key: &K) -> bool {
        let mut link = self.root;
        while let Some(id) = link {
            let node = self.node(id);
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Number of stored occurrences of `key`.
    pub fn count(&self, key: &K) -> usize {
        self.iter()
            .skip_while(|stored| *stored < key)
            .take_while(|stored| *stored == key)
            .count()
    }
}

impl<K> Default for OrderedSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for OrderedSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K> IntoIterator for &'a OrderedSet<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<K: serde::Serialize> serde::Serialize for OrderedSet<K> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Keys whose node cannot be allocated are dropped.
impl<K: Ord> FromIterator<K> for OrderedSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        for key in iter {
            if set.insert(key).is_err() {
                break;
            }
        }
        set
    }
}
