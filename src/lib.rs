mod complex;
mod cursor;
mod error;
mod heap;
mod layout;
mod node;
mod svg;
mod traversal;
mod tree;

pub use complex::Complex;
pub use cursor::{Cursor, CursorMut};
pub use error::TreeError;
pub use layout::{layout, Edge, Layout, LayoutOptions, Placement};
pub use node::{Node, EMPTY};
pub use svg::render_svg;
pub use traversal::{Bfs, Dfs, Frontier, InOrder, PostOrder, PreOrder};
pub use tree::Tree;

#[cfg(test)]
mod proptests;
