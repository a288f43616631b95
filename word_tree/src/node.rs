use crate::arena::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns `true` if the color is [`Red`].
    ///
    /// [`Red`]: Color::Red
    #[must_use]
    pub(crate) fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    /// Returns `true` if the color is [`Black`].
    ///
    /// [`Black`]: Color::Black
    #[must_use]
    pub(crate) fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }
}

/// A single word of the set.
///
/// `left` and `right` are the owning edges of the tree. `parent` is a plain
/// back-reference used for walking upwards during fixup and is never
/// followed when releasing nodes.
#[derive(Debug)]
pub(crate) struct Node {
    key: Box<str>,
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl Node {
    /// New nodes always start red and childless.
    pub(crate) fn new(key: Box<str>, parent: Option<NodeId>) -> Self {
        Self {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub(crate) fn into_key(self) -> Box<str> {
        self.key
    }

    #[inline]
    pub(crate) fn children(&self) -> (Option<NodeId>, Option<NodeId>) {
        (self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_nodes_are_red_leaves() {
        let node = Node::new("word".into(), None);
        assert!(node.color.is_red());
        assert!(!node.color.is_black());
        assert_eq!(node.children(), (None, None));
        assert_eq!(node.key(), "word");
        assert!(Color::Black.is_black());
        assert!(!Color::Black.is_red());
    }
}
