use std::fmt::{Display, Write};

use crate::{
    error::TreeError,
    layout::{layout, LayoutOptions},
    tree::Tree,
};

/// Draws the tree as a standalone SVG document.
///
/// Edges run from the bottom of a parent circle to the top of the child
/// circle and are drawn first, so circles and labels paint over them.
pub fn render_svg<T: Display, const K: usize>(
    tree: &Tree<T, K>,
    options: &LayoutOptions,
) -> Result<String, TreeError> {
    let placed = layout(tree, options);
    let radius = options.radius;

    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = options.width,
        h = options.height,
    )?;
    writeln!(out, r#"  <rect width="100%" height="100%" fill="white"/>"#)?;

    for edge in &placed.edges {
        let parent = &placed.placements[edge.parent];
        let child = &placed.placements[edge.child];
        writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
            parent.x,
            parent.y + radius,
            child.x,
            child.y - radius,
        )?;
    }

    for placement in &placed.placements {
        let label = match tree.value(placement.node) {
            Some(value) => escape(&value.to_string()),
            None => continue,
        };
        writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{radius}" fill="white" stroke="black" stroke-width="2"/>"#,
            placement.x, placement.y,
        )?;
        writeln!(
            out,
            r#"  <text x="{}" y="{}" font-size="20" text-anchor="middle" dominant-baseline="central">{label}</text>"#,
            placement.x, placement.y,
        )?;
    }

    writeln!(out, "</svg>")?;
    log::debug!(
        "rendered {} nodes and {} edges",
        placed.placements.len(),
        placed.edges.len()
    );
    Ok(out)
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
