use crate::{
    cursor::{Cursor, CursorMut},
    traversal::{Bfs, Frontier},
    tree::Tree,
};

impl<T: Ord, const K: usize> Tree<T, K> {
    /// Rearranges the values in place so that every node is no greater than
    /// any value in its subtree. The shape of the tree is left untouched.
    ///
    /// Nodes are processed bottom-up; each one is sifted down along its
    /// smallest child (the leftmost one on ties) until both sides agree.
    ///
    /// A total order is required. Floats can be wrapped in
    /// `ordered_float::OrderedFloat`; a bare `f64` tree is rejected:
    ///
    /// ```compile_fail
    /// let mut tree: ktree::Tree<f64, 2> = ktree::Tree::new();
    /// tree.add_root(f64::NAN);
    /// tree.heapify();
    /// ```
    pub fn heapify(&mut self) {
        let mut order = Vec::with_capacity(self.len());
        let mut frontier = Bfs::new(&*self);
        while let Some(id) = frontier.current() {
            order.push(id);
            frontier.advance(&*self);
        }

        let mut swaps = 0;
        for &node in order.iter().rev() {
            swaps += self.sift_down(node);
        }
        log::debug!("heapified {} nodes with {} swaps", order.len(), swaps);
    }

    /// Heapifies the tree and returns a breadth-first cursor over the result,
    /// so the first value yielded is the minimum. Editing values through the
    /// cursor does not restore the heap order.
    pub fn begin_heap(&mut self) -> CursorMut<'_, T, K, Bfs> {
        self.heapify();
        self.begin_bfs_mut()
    }

    #[must_use]
    pub fn end_heap(&self) -> Cursor<'_, T, K, Bfs> {
        self.end_bfs()
    }

    fn sift_down(&mut self, mut node: usize) -> usize {
        let mut swaps = 0;
        loop {
            let nodes = self.nodes();
            let smallest = nodes[node].children().fold(None, |best: Option<usize>, child| match best {
                Some(best) if !(nodes[child].value < nodes[best].value) => Some(best),
                _ => Some(child),
            });
            let child = match smallest {
                Some(child) if nodes[child].value < nodes[node].value => child,
                _ => return swaps,
            };
            self.swap_values(node, child);
            swaps += 1;
            node = child;
        }
    }

    // Children are always appended after their parent, so `parent < child`.
    fn swap_values(&mut self, parent: usize, child: usize) {
        let (head, tail) = self.nodes_mut().split_at_mut(child);
        std::mem::swap(&mut head[parent].value, &mut tail[0].value);
    }
}
