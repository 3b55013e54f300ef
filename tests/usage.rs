use ktree::{Complex, PostOrder, Tree, TreeError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn basic_usage() {
    init_logger();
    let mut tree: Tree<i32, 2> = Tree::new();

    // Build the tree 1 -> (2, 3), 2 -> (4, 5), 3 -> (6)
    tree.add_root(1);
    tree.add_sub_node(&1, 2).unwrap();
    tree.add_sub_node(&1, 3).unwrap();
    tree.add_sub_node(&2, 4).unwrap();
    tree.add_sub_node(&2, 5).unwrap();
    tree.add_sub_node(&3, 6).unwrap();

    let pre: Vec<i32> = tree.begin_pre_order().unwrap().copied().collect();
    let post: Vec<i32> = tree.begin_post_order().unwrap().copied().collect();
    let in_order: Vec<i32> = tree.begin_in_order().unwrap().copied().collect();
    let bfs: Vec<i32> = tree.begin_bfs().copied().collect();
    assert_eq!(pre, vec![1, 2, 4, 5, 3, 6]);
    assert_eq!(post, vec![4, 5, 2, 6, 3, 1]);
    assert_eq!(in_order, vec![4, 2, 5, 1, 6, 3]);
    assert_eq!(bfs, vec![1, 2, 3, 4, 5, 6]);

    // The parent 1 is full
    assert_eq!(tree.add_sub_node(&1, 7), Err(TreeError::NoFreeSlot));
    assert!(tree.add_sub_node(&1, 7).unwrap_err().is_out_of_range());
}

#[test]
fn ternary_tree_of_floats() {
    init_logger();
    let mut tree: Tree<f64, 3> = Tree::new();
    tree.add_root(1.1);
    tree.add_sub_node(&1.1, 1.2).unwrap();
    tree.add_sub_node(&1.1, 1.3).unwrap();
    tree.add_sub_node(&1.1, 1.4).unwrap();
    tree.add_sub_node(&1.2, 1.5).unwrap();
    tree.add_sub_node(&1.3, 1.6).unwrap();

    assert_eq!(
        tree.to_string(),
        "1.1: 1.2 1.3 1.4 \n1.2: 1.5 \n1.3: 1.6 \n1.4: \n1.5: \n1.6: \n"
    );
    assert!(tree.begin_pre_order().unwrap_err().is_invalid_argument());
}

#[test]
fn complex_values() {
    init_logger();
    let mut tree: Tree<Complex, 2> = Tree::new();
    tree.add_root(Complex::new(1.0, 2.0));
    tree.add_sub_node(&Complex::new(1.0, 2.0), Complex::new(3.0, 4.0))
        .unwrap();
    tree.add_sub_node(&Complex::new(1.0, 2.0), Complex::new(5.0, 6.0))
        .unwrap();
    tree.add_sub_node(&Complex::new(3.0, 4.0), Complex::new(7.0, 8.0))
        .unwrap();

    let pre: Vec<String> = tree
        .begin_pre_order()
        .unwrap()
        .map(ToString::to_string)
        .collect();
    assert_eq!(pre, vec!["(1 + 2i)", "(3 + 4i)", "(7 + 8i)", "(5 + 6i)"]);

    // Heapify keeps the root since it has the smallest magnitude
    let first = *tree.begin_heap().get().unwrap();
    assert_eq!(first, Complex::new(1.0, 2.0));
}

#[test]
fn mutate_values_during_traversal() {
    init_logger();
    let mut tree: Tree<i32, 3> = Tree::new();
    tree.add_root(1);
    tree.add_sub_node(&1, 2).unwrap();
    tree.add_sub_node(&1, 3).unwrap();

    let frontier = tree.begin_dfs().into_frontier();
    tree.visit_mut(frontier, |value| *value *= 10);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
}

#[test]
fn edit_values_through_cursor() {
    init_logger();
    let mut tree: Tree<i32, 2> = Tree::new();
    tree.add_root(1);
    tree.add_sub_node(&1, 2).unwrap();
    tree.add_sub_node(&1, 3).unwrap();
    tree.add_sub_node(&2, 4).unwrap();

    // Each node learns how many nodes were visited before it in post-order
    let mut it = tree.begin_post_order_mut().unwrap();
    let mut visited = 0;
    while it != PostOrder::default() {
        if let Some(value) = it.get_mut() {
            *value = visited;
        }
        visited += 1;
        it.advance();
    }
    assert_eq!(visited, 4);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2, 0]);
}
