//! Frontier state machines for every traversal order.
//!
//! A frontier only stores node handles, so it holds no borrow of the tree
//! between steps. Each step re-reads the tree passed to [`Frontier::advance`],
//! which should be the tree the frontier was created from. A handle that the
//! given tree does not know ends the traversal instead of panicking.

use std::collections::VecDeque;

use crate::{error::TreeError, tree::Tree};

/// The explicit stack or queue that drives a traversal without recursion.
pub trait Frontier {
    /// Handle of the node the traversal is positioned on.
    fn current(&self) -> Option<usize>;

    /// Moves past the current node. Does nothing once exhausted.
    fn advance<T, const K: usize>(&mut self, tree: &Tree<T, K>);

    fn is_exhausted(&self) -> bool {
        self.current().is_none()
    }
}

fn require_binary<T, const K: usize>(_tree: &Tree<T, K>) -> Result<(), TreeError> {
    if K == 2 {
        Ok(())
    } else {
        Err(TreeError::NotBinary { branching_factor: K })
    }
}

/// Node, left subtree, right subtree. Binary trees only.
#[derive(Debug, Clone, Default)]
pub struct PreOrder {
    stack: Vec<usize>,
}

impl PreOrder {
    pub fn new<T, const K: usize>(tree: &Tree<T, K>) -> Result<Self, TreeError> {
        require_binary(tree)?;
        Ok(PreOrder {
            stack: tree.root().into_iter().collect(),
        })
    }
}

impl Frontier for PreOrder {
    fn current(&self) -> Option<usize> {
        self.stack.last().copied()
    }

    fn advance<T, const K: usize>(&mut self, tree: &Tree<T, K>) {
        if let Some(node) = self.stack.pop() {
            match tree.node(node) {
                // Reverse slot order so the left child is on top
                Some(node) => self.stack.extend(node.children().rev()),
                None => self.stack.clear(),
            }
        }
    }
}

/// Left subtree, right subtree, node. Binary trees only.
#[derive(Debug, Clone, Default)]
pub struct PostOrder {
    stack: Vec<usize>,
}

impl PostOrder {
    pub fn new<T, const K: usize>(tree: &Tree<T, K>) -> Result<Self, TreeError> {
        require_binary(tree)?;
        let mut frontier = PostOrder::default();
        if let Some(root) = tree.root() {
            frontier.push_spine(tree, root);
        }
        Ok(frontier)
    }

    // Descend to the left child, or to the right one when there is no left,
    // until a leaf is reached. The leaf ends up on top of the stack.
    fn push_spine<T, const K: usize>(&mut self, tree: &Tree<T, K>, mut node: usize) {
        loop {
            let Some(current) = tree.node(node) else {
                self.stack.clear();
                return;
            };
            self.stack.push(node);
            match current.slot(0).or_else(|| current.slot(1)) {
                Some(child) => node = child,
                None => break,
            }
        }
    }
}

impl Frontier for PostOrder {
    fn current(&self) -> Option<usize> {
        self.stack.last().copied()
    }

    fn advance<T, const K: usize>(&mut self, tree: &Tree<T, K>) {
        let Some(node) = self.stack.pop() else {
            return;
        };
        // Below every entry sits its parent. Coming up from the left child
        // means the right subtree is still pending.
        if let Some(&parent) = self.stack.last() {
            let Some(parent) = tree.node(parent) else {
                self.stack.clear();
                return;
            };
            if parent.slot(0) == Some(node) {
                if let Some(right) = parent.slot(1) {
                    self.push_spine(tree, right);
                }
            }
        }
    }
}

/// Left subtree, node, right subtree. Binary trees only.
#[derive(Debug, Clone, Default)]
pub struct InOrder {
    stack: Vec<usize>,
}

impl InOrder {
    pub fn new<T, const K: usize>(tree: &Tree<T, K>) -> Result<Self, TreeError> {
        require_binary(tree)?;
        let mut frontier = InOrder::default();
        frontier.push_left_spine(tree, tree.root());
        Ok(frontier)
    }

    fn push_left_spine<T, const K: usize>(&mut self, tree: &Tree<T, K>, mut node: Option<usize>) {
        while let Some(id) = node {
            let Some(current) = tree.node(id) else {
                self.stack.clear();
                return;
            };
            self.stack.push(id);
            node = current.slot(0);
        }
    }
}

impl Frontier for InOrder {
    fn current(&self) -> Option<usize> {
        self.stack.last().copied()
    }

    fn advance<T, const K: usize>(&mut self, tree: &Tree<T, K>) {
        if let Some(node) = self.stack.pop() {
            match tree.node(node) {
                Some(node) => self.push_left_spine(tree, node.slot(1)),
                None => self.stack.clear(),
            }
        }
    }
}

/// Level order over any branching factor.
#[derive(Debug, Clone, Default)]
pub struct Bfs {
    queue: VecDeque<usize>,
}

impl Bfs {
    #[must_use]
    pub fn new<T, const K: usize>(tree: &Tree<T, K>) -> Self {
        Bfs {
            queue: tree.root().into_iter().collect(),
        }
    }
}

impl Frontier for Bfs {
    fn current(&self) -> Option<usize> {
        self.queue.front().copied()
    }

    fn advance<T, const K: usize>(&mut self, tree: &Tree<T, K>) {
        if let Some(node) = self.queue.pop_front() {
            match tree.node(node) {
                Some(node) => self.queue.extend(node.children()),
                None => self.queue.clear(),
            }
        }
    }
}

/// Depth first, node before children, over any branching factor.
#[derive(Debug, Clone, Default)]
pub struct Dfs {
    stack: Vec<usize>,
}

impl Dfs {
    #[must_use]
    pub fn new<T, const K: usize>(tree: &Tree<T, K>) -> Self {
        Dfs {
            stack: tree.root().into_iter().collect(),
        }
    }
}

impl Frontier for Dfs {
    fn current(&self) -> Option<usize> {
        self.stack.last().copied()
    }

    fn advance<T, const K: usize>(&mut self, tree: &Tree<T, K>) {
        if let Some(node) = self.stack.pop() {
            match tree.node(node) {
                Some(node) => self.stack.extend(node.children().rev()),
                None => self.stack.clear(),
            }
        }
    }
}
