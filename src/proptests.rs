use super::*;

use proptest::prelude::*;

// Each entry picks a parent among the nodes inserted so far, modulo the
// current size. Full parents are skipped, exactly as a caller would see.
fn build<const K: usize>(root: i32, ops: &[(usize, i32)]) -> (Tree<i32, K>, Vec<i32>) {
    let mut tree = Tree::new();
    let mut ids = vec![tree.add_root(root)];
    let mut values = vec![root];
    for &(parent, value) in ops {
        let parent = ids[parent % ids.len()];
        match tree.add_child(parent, value) {
            Ok(id) => {
                ids.push(id);
                values.push(value);
            }
            Err(err) => assert_eq!(err, TreeError::NoFreeSlot),
        }
    }
    (tree, values)
}

fn sorted(mut values: Vec<i32>) -> Vec<i32> {
    values.sort_unstable();
    values
}

// Recursive reference traversal, only used as an oracle.
fn reference_pre<const K: usize>(tree: &Tree<i32, K>, node: usize, out: &mut Vec<i32>) {
    let current = tree.node(node).unwrap();
    out.push(*current.value());
    for child in current.children() {
        reference_pre(tree, child, out);
    }
}

fn reference_in(tree: &Tree<i32, 2>, node: Option<usize>, out: &mut Vec<i32>) {
    if let Some(node) = node {
        let current = tree.node(node).unwrap();
        reference_in(tree, current.child_at(0).unwrap(), out);
        out.push(*current.value());
        reference_in(tree, current.child_at(1).unwrap(), out);
    }
}

fn reference_post(tree: &Tree<i32, 2>, node: Option<usize>, out: &mut Vec<i32>) {
    if let Some(node) = node {
        let current = tree.node(node).unwrap();
        reference_post(tree, current.child_at(0).unwrap(), out);
        reference_post(tree, current.child_at(1).unwrap(), out);
        out.push(*current.value());
    }
}

proptest! {
    #[test]
    fn bfs_visits_every_node(root in any::<i32>(), ops in prop::collection::vec((any::<usize>(), any::<i32>()), 0..64)) {
        let (tree, values) = build::<3>(root, &ops);
        prop_assert_eq!(tree.begin_bfs().count(), values.len());
        prop_assert_eq!(tree.len(), values.len());
        prop_assert_eq!(sorted(tree.begin_dfs().copied().collect()), sorted(values));
    }

    #[test]
    fn dfs_matches_recursive_pre_order(ops in prop::collection::vec((any::<usize>(), -50..50i32), 0..64)) {
        let (tree, _) = build::<4>(0, &ops);
        let mut expected = Vec::new();
        reference_pre(&tree, tree.root().unwrap(), &mut expected);
        prop_assert_eq!(tree.begin_dfs().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn binary_orders_match_recursion(ops in prop::collection::vec((any::<usize>(), -50..50i32), 0..64)) {
        let (tree, _) = build::<2>(0, &ops);

        let mut pre = Vec::new();
        reference_pre(&tree, tree.root().unwrap(), &mut pre);
        prop_assert_eq!(tree.begin_pre_order().unwrap().copied().collect::<Vec<_>>(), pre);

        let mut in_order = Vec::new();
        reference_in(&tree, tree.root(), &mut in_order);
        prop_assert_eq!(tree.begin_in_order().unwrap().copied().collect::<Vec<_>>(), in_order);

        let mut post = Vec::new();
        reference_post(&tree, tree.root(), &mut post);
        prop_assert_eq!(tree.begin_post_order().unwrap().copied().collect::<Vec<_>>(), post);
    }

    #[test]
    fn heap_yields_minimum_first(root in any::<i32>(), ops in prop::collection::vec((any::<usize>(), any::<i32>()), 0..64)) {
        let (mut tree, values) = build::<3>(root, &ops);
        let yielded: Vec<i32> = tree.begin_heap().into_cursor().copied().collect();
        let minimum = *values.iter().min().unwrap();
        prop_assert_eq!(yielded[0], minimum);
        prop_assert_eq!(sorted(yielded), sorted(values));

        for id in 0..tree.len() {
            let node = tree.node(id).unwrap();
            for child in node.children() {
                prop_assert!(node.value() <= tree.value(child).unwrap());
            }
        }
    }
}
