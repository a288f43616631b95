use core::num::NonZeroU32;

/// Handle to a node stored in an [`Arena`].
///
/// Two handles compare equal only if they name the same slot, so `==` on
/// handles is node identity, never key equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub(crate) struct NodeId(NonZeroU32);

impl NodeId {
    pub(crate) const MAX: usize = (u32::MAX - 1) as usize;

    #[inline]
    fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`NodeId::from_index()` - `index` > `NodeId::MAX`");
        #[allow(clippy::cast_possible_truncation)]
        let raw = (index + 1) as u32;
        match NonZeroU32::new(raw) {
            Some(raw) => Self(raw),
            None => unreachable!("index + 1 is never zero"),
        }
    }

    #[inline]
    fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

/// Slot storage for tree nodes.
///
/// Slots are only ever appended; a slot becomes empty when its element is
/// taken during teardown and stays empty until the arena is cleared.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    live: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            live: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub(crate) fn alloc(&mut self, element: T) -> NodeId {
        // Running out of handles is as fatal as running out of memory.
        assert!(
            self.slots.len() <= NodeId::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            NodeId::MAX
        );
        self.slots.push(Some(element));
        self.live += 1;
        NodeId::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &T {
        match self.slots.get(id.to_index()) {
            Some(Some(element)) => element,
            _ => panic!("`Arena::get()` - `{id:?}` is not a live node"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut T {
        match self.slots.get_mut(id.to_index()) {
            Some(Some(element)) => element,
            _ => panic!("`Arena::get_mut()` - `{id:?}` is not a live node"),
        }
    }

    pub(crate) fn take(&mut self, id: NodeId) -> T {
        match self.slots.get_mut(id.to_index()).and_then(Option::take) {
            Some(element) => {
                self.live -= 1;
                element
            }
            None => panic!("`Arena::take()` - `{id:?}` is not a live node"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.live = 0;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn option_niche() {
        assert_eq!(
            core::mem::size_of::<NodeId>(),
            core::mem::size_of::<Option<NodeId>>()
        );
    }

    #[test]
    fn ids_are_identities() {
        let mut arena = Arena::new();
        let a = arena.alloc("same");
        let b = arena.alloc("same");
        assert_ne!(a, b);
        assert_eq!(arena.get(a), arena.get(b));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn take_then_clear() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        assert_eq!(arena.take(a), 1);
        assert_eq!(arena.len(), 1);
        *arena.get_mut(b) += 40;
        assert_eq!(*arena.get(b), 42);
        arena.clear();
        assert!(arena.is_empty());
    }

    #[test]
    #[should_panic(expected = "is not a live node")]
    fn get_after_take() {
        let mut arena = Arena::new();
        let a = arena.alloc(7);
        arena.take(a);
        arena.get(a);
    }

    proptest! {
        #[test]
        fn id_round_trip(index in 0..=NodeId::MAX) {
            prop_assert_eq!(NodeId::from_index(index).to_index(), index);
        }
    }
}
