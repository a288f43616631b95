use core::fmt;
use core::mem;
use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::arena::{Arena, NodeId};
use crate::iter::Iter;
use crate::node::{Color, Node};

/// Where a node hangs relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodePos {
    Root,
    Left(NodeId),
    Right(NodeId),
}

/// Set of unique words kept in byte-lexicographic order.
///
/// Backed by a red-black tree, so inserting is `O(log n)` in the worst case
/// and [`iter`] walks the words in ascending order. Inserting a word that is
/// already present changes nothing.
///
/// ```
/// use word_tree::WordSet;
///
/// let mut set = WordSet::new();
/// for word in ["banana", "apple", "cherry", "apple"] {
///     set.insert(word);
/// }
/// assert!(set.iter().eq(["apple", "banana", "cherry"]));
/// ```
///
/// [`iter`]: WordSet::iter
pub struct WordSet {
    nodes: Arena<Node>,
    root: Option<NodeId>,
}

impl Drop for WordSet {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for WordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct NodesDebug<'a>(&'a WordSet);

        impl fmt::Debug for NodesDebug<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let set = self.0;
                let mut f = f.debug_list();
                let mut stack = Vec::new();
                let mut cursor = set.root;
                loop {
                    while let Some(id) = cursor {
                        stack.push(id);
                        cursor = set.node(id).left;
                    }
                    let Some(id) = stack.pop() else { break };
                    let node = set.node(id);
                    f.entry(&(node.key(), node.color));
                    cursor = node.right;
                }
                f.finish()
            }
        }

        f.debug_struct("WordSet")
            .field("len", &self.len())
            .field("root", &self.root.map(|root| self.node(root).key()))
            .field("nodes", &NodesDebug(self))
            .finish()
    }
}

impl Default for WordSet {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSet {
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns an iterator over the words in ascending byte order.
    ///
    /// The iterator only reads the set, so any number of them may run at the
    /// same time and calling `iter` again restarts from the smallest word.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.nodes, self.root, self.len())
    }

    pub fn contains(&self, word: &str) -> bool {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.node(id);
            cursor = match word.cmp(node.key()) {
                Ordering::Less => node.left,
                Ordering::Equal => return true,
                Ordering::Greater => node.right,
            };
        }
        false
    }

    /// Smallest word in the set.
    pub fn first(&self) -> Option<&str> {
        let mut id = self.root?;
        while let Some(left) = self.node(id).left {
            id = left;
        }
        Some(self.node(id).key())
    }

    /// Largest word in the set.
    pub fn last(&self) -> Option<&str> {
        let mut id = self.root?;
        while let Some(right) = self.node(id).right {
            id = right;
        }
        Some(self.node(id).key())
    }

    /// Adds `word` to the set.
    ///
    /// Returns `false` and leaves the set untouched if the word was already
    /// present. Words are compared byte-wise, so `"Apple"` and `"apple"` are
    /// distinct and `"Zebra"` sorts before `"apple"`.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        match self.attach(word.into().into_boxed_str()) {
            Some(new_node) => {
                self.insert_fixup(new_node);
                true
            }
            None => false,
        }
    }

    /// Consuming form of [`insert`], for threading a set through a chain of
    /// calls.
    ///
    /// [`insert`]: WordSet::insert
    #[must_use]
    pub fn with(mut self, word: impl Into<String>) -> Self {
        self.insert(word);
        self
    }

    /// Releases every word, leaving an empty set that can be reused.
    pub fn clear(&mut self) {
        let released = self.release(drop);
        if released > 0 {
            debug!(released, "released word set");
        }
    }

    /// Takes every node out of the tree in post-order (both children before
    /// their parent) and hands its key to `f`. Returns the number of nodes
    /// released.
    ///
    /// Only the owning child links are followed. An explicit stack keeps the
    /// walk independent of the call stack depth.
    pub(crate) fn release<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(Box<str>),
    {
        let Some(root) = self.root.take() else {
            return 0;
        };

        let mut released = 0;
        // (node, children already scheduled)
        let mut stack = vec![(root, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                f(self.nodes.take(id).into_key());
                released += 1;
            } else {
                let (left, right) = self.node(id).children();
                stack.push((id, true));
                stack.extend(right.map(|right| (right, false)));
                stack.extend(left.map(|left| (left, false)));
            }
        }

        debug_assert!(self.nodes.is_empty());
        self.nodes.clear();
        released
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        self.nodes.get(id)
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes.get_mut(id)
    }

    #[inline]
    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Absent children count as black.
    #[inline]
    fn color(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.node(id).color)
    }

    #[inline]
    fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color;
    }

    fn pos(&self, id: NodeId) -> NodePos {
        match self.parent(id) {
            None => NodePos::Root,
            Some(parent) if self.node(parent).left == Some(id) => NodePos::Left(parent),
            Some(parent) => {
                debug_assert_eq!(self.node(parent).right, Some(id));
                NodePos::Right(parent)
            }
        }
    }

    /// Points the slot `pos` at `child`. The child's own parent link is left
    /// to the caller.
    fn link(&mut self, pos: NodePos, child: NodeId) {
        match pos {
            NodePos::Root => self.root = Some(child),
            NodePos::Left(parent) => self.node_mut(parent).left = Some(child),
            NodePos::Right(parent) => self.node_mut(parent).right = Some(child),
        }
    }

    fn grandparent(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).and_then(|parent| self.parent(parent))
    }

    /// Sibling of `id`'s parent.
    fn uncle(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let grandparent = self.parent(parent)?;
        let grandparent = self.node(grandparent);
        if grandparent.left == Some(parent) {
            grandparent.right
        } else {
            grandparent.left
        }
    }

    fn rotate_left(&mut self, node: NodeId) {
        //    p                       p
        //    |                       |
        // +-node-+               +-right-+
        // |      |      -->      |       |
        // a  +-right-+       +-node-+    c
        //    |       |       |      |
        //    b       c       a      b
        // where a, b, c can be any subtrees
        let Some(right) = self.node(node).right else {
            debug_assert!(false, "left rotation without a right child");
            return;
        };

        // attach b to node
        let b = self.node(right).left;
        self.node_mut(node).right = b;
        if let Some(b) = b {
            self.node_mut(b).parent = Some(node);
        }

        // attach right to parent
        let pos = self.pos(node);
        self.node_mut(right).parent = self.parent(node);
        self.link(pos, right);

        // attach node to right
        self.node_mut(right).left = Some(node);
        self.node_mut(node).parent = Some(right);
    }

    fn rotate_right(&mut self, node: NodeId) {
        //         p              p
        //         |              |
        //     +-node-+       +-left-+
        //     |      |       |      |
        // +-left-+   c  -->  a  +-node-+
        // |      |              |      |
        // a      b              b      c
        // where a, b, c can be any subtrees
        let Some(left) = self.node(node).left else {
            debug_assert!(false, "right rotation without a left child");
            return;
        };

        // attach b to node
        let b = self.node(left).right;
        self.node_mut(node).left = b;
        if let Some(b) = b {
            self.node_mut(b).parent = Some(node);
        }

        // attach left to parent
        let pos = self.pos(node);
        self.node_mut(left).parent = self.parent(node);
        self.link(pos, left);

        // attach node to left
        self.node_mut(left).right = Some(node);
        self.node_mut(node).parent = Some(left);
    }

    /// Plain binary search tree insertion. Returns the new (red) node, or
    /// `None` if `word` was already present.
    fn attach(&mut self, word: Box<str>) -> Option<NodeId> {
        // Move left/right down the tree until we find an empty slot
        let mut pos = NodePos::Root;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.node(id);
            // `str` orders by bytes, not by locale
            match (*word).cmp(node.key()) {
                Ordering::Less => {
                    pos = NodePos::Left(id);
                    cursor = node.left;
                }
                Ordering::Equal => {
                    trace!(word = &*word, "word already present");
                    return None;
                }
                Ordering::Greater => {
                    pos = NodePos::Right(id);
                    cursor = node.right;
                }
            }
        }

        let parent = match pos {
            NodePos::Root => None,
            NodePos::Left(parent) | NodePos::Right(parent) => Some(parent),
        };
        let new_node = self.nodes.alloc(Node::new(word, parent));
        self.link(pos, new_node);
        Some(new_node)
    }

    fn insert_fixup(&mut self, new_node: NodeId) {
        let mut node = new_node;
        // Only one violation exists at a time: `node` and its parent are both
        // red. Recoloring may move it up to the grandparent, a rotation ends it.
        while let Some(mut parent) = self
            .parent(node)
            .filter(|&parent| self.node(parent).color.is_red())
        {
            // A red parent is never the root, so the grandparent exists.
            let Some(grandparent) = self.grandparent(node) else {
                break;
            };
            debug_assert!(self.node(grandparent).color.is_black());
            let uncle = self.uncle(node);

            if let (Some(uncle), Color::Red) = (uncle, self.color(uncle)) {
                //     +--- gp:b ---+               +--- gp:r ---+
                //     |            |               |            |
                //  + p:r +      + u:r +   -->   + p:b +      + u:b +
                //  |     |                      |     |
                // n:r                          n:r
                trace!("red uncle, recoloring");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            // Handle comparison, not key comparison: an absent uncle matches an
            // absent right child.
            if uncle == self.node(grandparent).right {
                if self.node(parent).right == Some(node) {
                    //       +-- gp:b --+                 +-- gp:b --+
                    //       |          |                 |          |
                    //  +-- p:r --+    u:b  -->       +- n:r --+    u:b
                    //  |         |                   |        |
                    // a:b    +- n:r -+           +- p:r -+   c:b
                    //        |       |           |       |
                    //       b:b     c:b         a:b     b:b
                    trace!("black uncle, straightening left zig-zag");
                    self.rotate_left(parent);
                    mem::swap(&mut parent, &mut node);
                }

                //           +-- gp:b --+            +----- p:b -----+
                //           |          |            |               |
                //      +-- p:r --+    u:b  -->   +- n:r -+     +- gp:r -+
                //      |         |               |       |     |        |
                //  +- n:r -+    c:b             a:b     b:b   c:b      u:b
                //  |       |
                // a:b     b:b
                trace!("black uncle, rotating right");
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate_right(grandparent);
            } else {
                if self.node(parent).left == Some(node) {
                    trace!("black uncle, straightening right zig-zag");
                    self.rotate_right(parent);
                    mem::swap(&mut parent, &mut node);
                }

                trace!("black uncle, rotating left");
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate_left(grandparent);
            }
            break;
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> Extend<S> for WordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
