//! Lazy traversals over an [`OrderedSet`]
//!
//! Both iterators keep an explicit stack of O(height) node ids, so a
//! traversal never recurses. Each call to [`OrderedSet::iter`] or
//! [`OrderedSet::preorder`] starts over from the root.

use std::iter::FusedIterator;

use super::{NodeId, OrderedSet};

/// Ascending (in-order) traversal. Duplicate keys come out adjacent.
#[derive(Debug)]
pub struct Iter<'a, K> {
    set: &'a OrderedSet<K>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(super) fn new(set: &'a OrderedSet<K>) -> Self {
        let mut iter = Self {
            set,
            stack: Vec::new(),
            remaining: set.len(),
        };
        iter.push_left_spine(set.root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<NodeId>) {
        while let Some(id) = link {
            self.stack.push(id);
            link = self.set.node(id).left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.set.node(id);
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

/// Node-then-left-then-right traversal.
///
/// Visits every key exactly once, in no particular key order.
#[derive(Debug)]
pub struct PreOrder<'a, K> {
    set: &'a OrderedSet<K>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K> PreOrder<'a, K> {
    pub(super) fn new(set: &'a OrderedSet<K>) -> Self {
        Self {
            set,
            stack: set.root.into_iter().collect(),
            remaining: set.len(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.set.node(id);
        // Right first so the left subtree is popped next.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for PreOrder<'_, K> {}
impl<K> FusedIterator for PreOrder<'_, K> {}
