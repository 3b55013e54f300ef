use ktree::{render_svg, Complex, LayoutOptions, Tree};
use std::fmt::Display;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let output = std::env::args().nth(1).unwrap_or_else(|| "tree.svg".to_string());

    // Binary tree of integers
    //
    //       1
    //     /   \
    //    2     3
    //   / \   /
    //  4   5 6
    let mut tree: Tree<i32, 2> = Tree::new();
    tree.add_root(1);
    for (parent, child) in [(1, 2), (1, 3), (2, 4), (2, 5), (3, 6)] {
        tree.add_sub_node(&parent, child)?;
    }
    print_traversal("Pre-Order Traversal:", tree.begin_pre_order()?);
    print_traversal("Post-Order Traversal:", tree.begin_post_order()?);
    print_traversal("In-Order Traversal:", tree.begin_in_order()?);
    print_traversal("BFS Traversal:", tree.begin_bfs());
    print_traversal("DFS Traversal:", tree.begin_dfs());
    print_traversal("Heap Traversal:", tree.begin_heap().into_cursor());

    // 3-ary tree of floats
    //
    //       1.1
    //     /  |  \
    //   1.2 1.3 1.4
    //   /    |
    // 1.5   1.6
    let mut three_ary: Tree<f64, 3> = Tree::new();
    three_ary.add_root(1.1);
    for (parent, child) in [(1.1, 1.2), (1.1, 1.3), (1.1, 1.4), (1.2, 1.5), (1.3, 1.6)] {
        three_ary.add_sub_node(&parent, child)?;
    }
    println!("3-ary Tree Structure:");
    print!("{three_ary}");
    if let Err(err) = three_ary.begin_in_order() {
        println!("In-order on the 3-ary tree: {err}");
    }

    // Binary tree of complex numbers
    let mut complex: Tree<Complex, 2> = Tree::new();
    complex.add_root(Complex::new(1.0, 2.0));
    complex.add_sub_node(&Complex::new(1.0, 2.0), Complex::new(3.0, 4.0))?;
    complex.add_sub_node(&Complex::new(1.0, 2.0), Complex::new(5.0, 6.0))?;
    complex.add_sub_node(&Complex::new(3.0, 4.0), Complex::new(7.0, 8.0))?;
    print_traversal("Complex Tree Pre-Order Traversal:", complex.begin_pre_order()?);

    // 3-ary tree of integers, drawn to the output file
    let mut drawn: Tree<i32, 3> = Tree::new();
    drawn.add_root(1);
    let mut next = 2;
    for parent in 1..=6 {
        for _ in 0..3 {
            drawn.add_sub_node(&parent, next)?;
            next += 1;
        }
    }
    let svg = render_svg(&drawn, &LayoutOptions::default())?;
    std::fs::write(&output, svg)?;
    println!("Wrote {} nodes to {output}", drawn.len());
    Ok(())
}

fn print_traversal<'a, V, I>(title: &str, values: I)
where
    V: Display + 'a,
    I: Iterator<Item = &'a V>,
{
    println!("{title}");
    let line: Vec<String> = values.map(ToString::to_string).collect();
    println!("{}", line.join(" "));
}
