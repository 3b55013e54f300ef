use thiserror::Error;

/// Errors raised by tree, node and cursor operations.
///
/// Every error is reported before any state is touched, so a failed call
/// leaves the tree exactly as it was.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TreeError {
    /// A slot index is not smaller than the branching factor.
    #[error("slot index {index} is out of range for a node with {capacity} slots")]
    IndexOutOfRange { index: usize, capacity: usize },
    /// The empty handle was passed where a child node was expected.
    #[error("cannot attach an empty handle as a child")]
    EmptyChild,
    /// No node in the tree holds the requested parent value.
    #[error("parent node not found")]
    ParentNotFound,
    /// The handle does not address a node of this tree.
    #[error("node {0} does not belong to the tree")]
    UnknownNode(usize),
    /// Every child slot of the parent is already occupied.
    #[error("no available slot for a new child")]
    NoFreeSlot,
    /// The traversal is only defined for binary trees.
    #[error("traversal requires a binary tree, got branching factor {branching_factor}")]
    NotBinary { branching_factor: usize },
    /// Writing the rendered document failed.
    #[error("failed to render the tree")]
    Render(#[from] std::fmt::Error),
}

impl TreeError {
    /// The caller passed an argument that does not describe a valid target.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EmptyChild | Self::ParentNotFound | Self::UnknownNode(_) | Self::NotBinary { .. }
        )
    }

    /// A slot index or the slot capacity of a node was exceeded.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. } | Self::NoFreeSlot)
    }
}

#[cfg(test)]
mod tests {
    use super::TreeError;

    #[test]
    fn taxonomy() {
        assert!(TreeError::EmptyChild.is_invalid_argument());
        assert!(TreeError::ParentNotFound.is_invalid_argument());
        assert!(TreeError::NotBinary { branching_factor: 3 }.is_invalid_argument());
        assert!(!TreeError::NoFreeSlot.is_invalid_argument());

        assert!(TreeError::NoFreeSlot.is_out_of_range());
        assert!(TreeError::IndexOutOfRange { index: 3, capacity: 3 }.is_out_of_range());
        assert!(!TreeError::UnknownNode(7).is_out_of_range());
    }

    #[test]
    fn messages() {
        let err = TreeError::IndexOutOfRange { index: 5, capacity: 2 };
        assert_eq!(
            err.to_string(),
            "slot index 5 is out of range for a node with 2 slots"
        );
        assert_eq!(
            TreeError::NotBinary { branching_factor: 3 }.to_string(),
            "traversal requires a binary tree, got branching factor 3"
        );
    }
}
