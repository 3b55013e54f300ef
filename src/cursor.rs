use std::iter::FusedIterator;

use crate::{
    error::TreeError,
    traversal::{Bfs, Dfs, Frontier, InOrder, PostOrder, PreOrder},
    tree::Tree,
};

/// A forward, single-pass cursor over the values of a tree.
///
/// Two cursors compare equal when both are exhausted or both are not; the
/// position is not compared. This is enough for `while cursor != end` loops
/// and for checking that a traversal of an empty tree starts at its end, but
/// it is not a positional comparison.
#[derive(Debug)]
pub struct Cursor<'a, T, const K: usize, F> {
    tree: &'a Tree<T, K>,
    frontier: F,
}

impl<'a, T, const K: usize, F: Frontier> Cursor<'a, T, K, F> {
    #[must_use]
    pub(crate) fn new(tree: &'a Tree<T, K>, frontier: F) -> Self {
        Cursor { tree, frontier }
    }

    /// Value of the current node, `None` once exhausted.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        let tree = self.tree;
        self.frontier.current().and_then(|id| tree.value(id))
    }

    /// Handle of the current node, for mutation through [`Tree::value_mut`].
    #[must_use]
    pub fn node_id(&self) -> Option<usize> {
        self.frontier.current()
    }

    pub fn advance(&mut self) -> &mut Self {
        self.frontier.advance(self.tree);
        self
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_exhausted()
    }

    /// Releases the tree borrow, keeping the traversal position.
    #[must_use]
    pub fn into_frontier(self) -> F {
        self.frontier
    }
}

impl<'a, T, const K: usize, F: Frontier> Iterator for Cursor<'a, T, K, F> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.get()?;
        self.frontier.advance(self.tree);
        Some(value)
    }
}

impl<'a, T, const K: usize, F: Frontier> FusedIterator for Cursor<'a, T, K, F> {}

impl<'a, 'b, T, const K: usize, F: Frontier> PartialEq<Cursor<'b, T, K, F>> for Cursor<'a, T, K, F> {
    fn eq(&self, other: &Cursor<'b, T, K, F>) -> bool {
        self.is_exhausted() == other.is_exhausted()
    }
}

impl<'a, T, const K: usize, F: Clone> Clone for Cursor<'a, T, K, F> {
    fn clone(&self) -> Self {
        Cursor {
            tree: self.tree,
            frontier: self.frontier.clone(),
        }
    }
}

/// A cursor that holds the tree mutably, so the current value can be edited
/// while traversing.
///
/// The tree stays borrowed for the whole traversal, which rules out holding
/// an `end_*` cursor of the same tree next to it. Compare against the
/// exhausted frontier instead, `while it != PreOrder::default()`, or check
/// [`CursorMut::is_exhausted`]. Equality is the same weak comparison as on
/// [`Cursor`].
///
/// Values may be changed freely; the shape of the tree cannot be, since the
/// tree is only reachable through this cursor.
#[derive(Debug)]
pub struct CursorMut<'a, T, const K: usize, F> {
    tree: &'a mut Tree<T, K>,
    frontier: F,
}

impl<'a, T, const K: usize, F: Frontier> CursorMut<'a, T, K, F> {
    pub(crate) fn new(tree: &'a mut Tree<T, K>, frontier: F) -> Self {
        CursorMut { tree, frontier }
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.frontier.current().and_then(|id| self.tree.value(id))
    }

    /// Value of the current node, `None` once exhausted.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        let id = self.frontier.current()?;
        self.tree.value_mut(id)
    }

    #[must_use]
    pub fn node_id(&self) -> Option<usize> {
        self.frontier.current()
    }

    pub fn advance(&mut self) -> &mut Self {
        self.frontier.advance(&*self.tree);
        self
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_exhausted()
    }

    /// Gives up mutable access and continues as a shared [`Cursor`] from the
    /// same position.
    #[must_use]
    pub fn into_cursor(self) -> Cursor<'a, T, K, F> {
        Cursor::new(self.tree, self.frontier)
    }
}

impl<'a, T, const K: usize, F: Frontier> PartialEq<F> for CursorMut<'a, T, K, F> {
    fn eq(&self, other: &F) -> bool {
        self.is_exhausted() == other.is_exhausted()
    }
}

impl<T, const K: usize> Tree<T, K> {
    pub fn begin_pre_order(&self) -> Result<Cursor<'_, T, K, PreOrder>, TreeError> {
        Ok(Cursor::new(self, PreOrder::new(self)?))
    }

    #[must_use]
    pub fn end_pre_order(&self) -> Cursor<'_, T, K, PreOrder> {
        Cursor::new(self, PreOrder::default())
    }

    pub fn begin_post_order(&self) -> Result<Cursor<'_, T, K, PostOrder>, TreeError> {
        Ok(Cursor::new(self, PostOrder::new(self)?))
    }

    #[must_use]
    pub fn end_post_order(&self) -> Cursor<'_, T, K, PostOrder> {
        Cursor::new(self, PostOrder::default())
    }

    pub fn begin_in_order(&self) -> Result<Cursor<'_, T, K, InOrder>, TreeError> {
        Ok(Cursor::new(self, InOrder::new(self)?))
    }

    #[must_use]
    pub fn end_in_order(&self) -> Cursor<'_, T, K, InOrder> {
        Cursor::new(self, InOrder::default())
    }

    #[must_use]
    pub fn begin_bfs(&self) -> Cursor<'_, T, K, Bfs> {
        Cursor::new(self, Bfs::new(self))
    }

    #[must_use]
    pub fn end_bfs(&self) -> Cursor<'_, T, K, Bfs> {
        Cursor::new(self, Bfs::default())
    }

    #[must_use]
    pub fn begin_dfs(&self) -> Cursor<'_, T, K, Dfs> {
        Cursor::new(self, Dfs::new(self))
    }

    #[must_use]
    pub fn end_dfs(&self) -> Cursor<'_, T, K, Dfs> {
        Cursor::new(self, Dfs::default())
    }

    pub fn begin_pre_order_mut(&mut self) -> Result<CursorMut<'_, T, K, PreOrder>, TreeError> {
        let frontier = PreOrder::new(self)?;
        Ok(CursorMut::new(self, frontier))
    }

    pub fn begin_post_order_mut(&mut self) -> Result<CursorMut<'_, T, K, PostOrder>, TreeError> {
        let frontier = PostOrder::new(self)?;
        Ok(CursorMut::new(self, frontier))
    }

    pub fn begin_in_order_mut(&mut self) -> Result<CursorMut<'_, T, K, InOrder>, TreeError> {
        let frontier = InOrder::new(self)?;
        Ok(CursorMut::new(self, frontier))
    }

    pub fn begin_bfs_mut(&mut self) -> CursorMut<'_, T, K, Bfs> {
        let frontier = Bfs::new(self);
        CursorMut::new(self, frontier)
    }

    pub fn begin_dfs_mut(&mut self) -> CursorMut<'_, T, K, Dfs> {
        let frontier = Dfs::new(self);
        CursorMut::new(self, frontier)
    }

    /// Values in breadth-first order.
    #[must_use]
    pub fn iter(&self) -> Cursor<'_, T, K, Bfs> {
        self.begin_bfs()
    }
}

impl<'a, T, const K: usize> IntoIterator for &'a Tree<T, K> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T, K, Bfs>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin_bfs()
    }
}
