use crate::error::TreeError;

/// Handle stored in a child slot that holds no node.
pub const EMPTY: usize = usize::MAX;

/// A node of a k-ary tree: one value and exactly `K` child slots.
///
/// Child slots hold arena indices of the owning [`Tree`](crate::Tree), or
/// [`EMPTY`] when the slot is free.
#[derive(Debug, Clone)]
pub struct Node<T, const K: usize> {
    pub(crate) value: T,
    pub(crate) children: [usize; K],
}

impl<T, const K: usize> Node<T, K> {
    #[must_use]
    pub fn new(value: T) -> Node<T, K> {
        Node {
            value,
            children: [EMPTY; K],
        }
    }

    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Number of occupied slots, not the slot capacity.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|&&child| child != EMPTY).count()
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }

    /// Returns the handle stored at slot `index`, `None` when the slot is free.
    pub fn child_at(&self, index: usize) -> Result<Option<usize>, TreeError> {
        match self.children.get(index) {
            Some(&EMPTY) => Ok(None),
            Some(&child) => Ok(Some(child)),
            None => Err(TreeError::IndexOutOfRange { index, capacity: K }),
        }
    }

    /// Stores `child` at slot `index`, replacing any previous occupant.
    pub fn set_child_at(&mut self, child: usize, index: usize) -> Result<(), TreeError> {
        if index >= K {
            return Err(TreeError::IndexOutOfRange { index, capacity: K });
        }
        if child == EMPTY {
            return Err(TreeError::EmptyChild);
        }
        self.children[index] = child;
        Ok(())
    }

    /// Occupied child handles, left to right.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.children.iter().copied().filter(|&child| child != EMPTY)
    }

    #[must_use]
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.children.iter().position(|&child| child == EMPTY)
    }

    // Slot lookup that never fails, for traversals that already checked `K`.
    pub(crate) fn slot(&self, index: usize) -> Option<usize> {
        self.children.get(index).copied().filter(|&child| child != EMPTY)
    }
}

impl<T: Default, const K: usize> Default for Node<T, K> {
    fn default() -> Self {
        Node::new(T::default())
    }
}
