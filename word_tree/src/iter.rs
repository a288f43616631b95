use core::fmt;
use core::iter::FusedIterator;

use crate::arena::{Arena, NodeId};
use crate::node::Node;

/// In-order iterator over the words of a [`WordSet`].
///
/// Created by [`WordSet::iter`]. Nodes are visited lazily: the iterator only
/// remembers the path of not yet visited ancestors, so it holds at most
/// `O(log n)` handles at a time.
///
/// [`WordSet`]: crate::WordSet
#[derive(Clone)]
pub struct Iter<'a> {
    nodes: &'a Arena<Node>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(nodes: &'a Arena<Node>, root: Option<NodeId>, len: usize) -> Self {
        let mut iter = Self {
            nodes,
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut cursor: Option<NodeId>) {
        while let Some(id) = cursor {
            self.stack.push(id);
            cursor = self.nodes.get(id).left;
        }
    }
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let nodes = self.nodes;
        let node = nodes.get(id);
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
