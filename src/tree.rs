use std::{collections::VecDeque, fmt};

use crate::{
    error::TreeError,
    node::{Node, EMPTY},
    traversal::{Dfs, Frontier},
};

/// A k-ary tree whose nodes live in an arena and address their children by index.
///
/// Every node has exactly `K` child slots. Nodes are only ever appended:
/// the public API neither removes nor relocates a node, so each node has a
/// single parent and the structure is always acyclic.
#[derive(Debug, Clone)]
pub struct Tree<T, const K: usize> {
    root: usize,
    nodes: Vec<Node<T, K>>,
}

impl<T, const K: usize> Default for Tree<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const K: usize> Tree<T, K> {
    #[must_use]
    pub fn new() -> Self {
        Tree {
            root: EMPTY,
            nodes: Vec::new(),
        }
    }

    /// Creates a fresh root, releasing the whole previous tree.
    pub fn add_root(&mut self, value: T) -> usize {
        if !self.nodes.is_empty() {
            log::debug!("replacing root, releasing {} nodes", self.nodes.len());
        }
        self.nodes.clear();
        self.root = self.add_slot(Node::new(value));
        self.root
    }

    /// Attaches `value` to the node `parent` in its first empty slot.
    ///
    /// This is the identity-based counterpart of [`Tree::add_sub_node`] and
    /// is deterministic even when several nodes hold equal values.
    pub fn add_child(&mut self, parent: usize, value: T) -> Result<usize, TreeError> {
        let slot = self
            .nodes
            .get(parent)
            .ok_or(TreeError::UnknownNode(parent))?
            .first_empty_slot()
            .ok_or(TreeError::NoFreeSlot)?;

        let child = self.add_slot(Node::new(value));
        self.nodes[parent].set_child_at(child, slot)?;
        log::trace!("attached node {child} to node {parent} at slot {slot}");
        Ok(child)
    }

    #[must_use]
    pub fn root(&self) -> Option<usize> {
        if self.root == EMPTY {
            None
        } else {
            Some(self.root)
        }
    }

    #[must_use]
    pub fn branching_factor(&self) -> usize {
        K
    }

    /// Number of nodes reachable from the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn node(&self, id: usize) -> Option<&Node<T, K>> {
        self.nodes.get(id)
    }

    #[must_use]
    pub fn value(&self, id: usize) -> Option<&T> {
        self.nodes.get(id).map(Node::value)
    }

    pub fn value_mut(&mut self, id: usize) -> Option<&mut T> {
        self.nodes.get_mut(id).map(Node::value_mut)
    }

    /// Number of levels, 0 for an empty tree.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(usize, usize)> = self.root().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(self.nodes[node].children().map(|child| (child, depth + 1)));
        }
        height
    }

    /// Applies `f` to every value, in the order the frontier visits the nodes.
    /// Stops at the first handle this tree does not know.
    pub fn visit_mut<F, V>(&mut self, mut frontier: F, mut f: V)
    where
        F: Frontier,
        V: FnMut(&mut T),
    {
        while let Some(id) = frontier.current() {
            let Some(node) = self.nodes.get_mut(id) else {
                return;
            };
            f(&mut node.value);
            frontier.advance(&*self);
        }
    }

    pub(crate) fn nodes(&self) -> &[Node<T, K>] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node<T, K>] {
        &mut self.nodes
    }

    fn add_slot(&mut self, node: Node<T, K>) -> usize {
        let slot_id = self.nodes.len();
        self.nodes.push(node);
        slot_id
    }
}

impl<T: PartialEq, const K: usize> Tree<T, K> {
    /// First node holding `value`, searching in pre-order.
    #[must_use]
    pub fn find(&self, value: &T) -> Option<usize> {
        let mut frontier = Dfs::new(self);
        while let Some(id) = frontier.current() {
            if self.nodes[id].value() == value {
                return Some(id);
            }
            frontier.advance(self);
        }
        None
    }

    /// Attaches `child` under the first node (in pre-order) equal to `parent`.
    ///
    /// Callers should keep values unique when the choice of parent matters;
    /// [`Tree::add_child`] addresses the parent by handle instead.
    pub fn add_sub_node(&mut self, parent: &T, child: T) -> Result<usize, TreeError> {
        let parent = self.find(parent).ok_or(TreeError::ParentNotFound)?;
        self.add_child(parent, child)
    }
}

impl<T: fmt::Display, const K: usize> fmt::Display for Tree<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = match self.root() {
            Some(root) => root,
            None => return write!(f, "Tree is empty."),
        };

        let mut queue = VecDeque::from([root]);
        while let Some(id) = queue.pop_front() {
            let node = &self.nodes[id];
            write!(f, "{}: ", node.value())?;
            for child in node.children() {
                write!(f, "{} ", self.nodes[child].value())?;
                queue.push_back(child);
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
