//! Diagnostic renderings of an [`AvlTree`].
//!
//! Two views, both read-only: a box-drawn text layout (used by the tree's
//! `Display` and `Debug` impls) and an SVG document. Neither takes part in
//! any tree invariant.

use std::fmt::{self, Write as _};

use crate::avl::{AvlTree, NodeRef};

/// Layout settings for [`svg`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgOptions {
    /// Circle radius of a node, in pixels.
    pub node_radius: u32,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { node_radius: 16 }
    }
}

/// `value,h=height,↑parent` with `None` in place of a missing parent.
pub fn node_label<T, F>(node: NodeRef<'_, T>, show: &F) -> String
where
    F: Fn(&T) -> String,
{
    let parent = match node.parent() {
        Some(p) => show(p.value()),
        None => "None".to_string(),
    };
    format!("{},h={},↑{}", show(node.value()), node.height(), parent)
}

#[derive(Default)]
struct Block {
    lines: Vec<String>,
    width: usize,
    /// Column span of the subtree root's label.
    start: usize,
    end: usize,
}

fn pad(out: &mut String, ch: char, n: usize) {
    out.extend(std::iter::repeat(ch).take(n));
}

/// Builds the box for the subtree at `node`: the root label on top, branch
/// glyphs underneath, and the two child boxes side by side below that.
fn layout<T, F>(node: Option<NodeRef<'_, T>>, show: &F) -> Block
where
    F: Fn(&T) -> String,
{
    let Some(node) = node else {
        return Block::default();
    };

    let label = node_label(node, show);
    let label_width = label.chars().count();
    let left = layout(node.left(), show);
    let right = layout(node.right(), show);

    let mut top = String::new();
    let mut branch = String::new();
    let mut gap = label_width;

    let start = if left.width > 0 {
        let anchor = (left.start + left.end) / 2 + 1;
        pad(&mut top, ' ', anchor + 1);
        pad(&mut top, '_', left.width - anchor);
        pad(&mut branch, ' ', anchor);
        branch.push('/');
        pad(&mut branch, ' ', left.width - anchor);
        gap += 1;
        left.width + 1
    } else {
        0
    };

    top.push_str(&label);
    pad(&mut branch, ' ', label_width);

    if right.width > 0 {
        let anchor = (right.start + right.end) / 2;
        pad(&mut top, '_', anchor);
        pad(&mut top, ' ', right.width - anchor + 1);
        pad(&mut branch, ' ', anchor);
        branch.push('\\');
        pad(&mut branch, ' ', right.width - anchor);
        gap += 1;
    }

    let width = top.chars().count();
    let mut lines = vec![top, branch];
    for i in 0..left.lines.len().max(right.lines.len()) {
        let mut line = String::with_capacity(width);
        match left.lines.get(i) {
            Some(l) => line.push_str(l),
            None => pad(&mut line, ' ', left.width),
        }
        pad(&mut line, ' ', gap);
        match right.lines.get(i) {
            Some(r) => line.push_str(r),
            None => pad(&mut line, ' ', right.width),
        }
        lines.push(line);
    }

    Block {
        lines,
        width,
        start,
        end: start + label_width - 1,
    }
}

/// Box layout of the whole tree, one entry per text row.
pub fn pretty_lines<T, F>(tree: &AvlTree<T>, show: F) -> Vec<String>
where
    F: Fn(&T) -> String,
{
    layout(tree.origin(), &show).lines
}

/// Multi-line rendering with trailing blanks trimmed, or `Empty AVL Tree`.
///
/// Starts with a newline so the layout lines up when embedded in a message.
pub fn render<T, F>(tree: &AvlTree<T>, show: F) -> String
where
    F: Fn(&T) -> String,
{
    if tree.is_empty() {
        return "Empty AVL Tree".to_string();
    }
    let mut lines = pretty_lines(tree, show);
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    let mut out = String::new();
    for line in &lines {
        out.push('\n');
        out.push_str(line.trim_end());
    }
    out
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn document(width: f64, height: f64, body: &str) -> String {
    format!(
        r##"
<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
<style>
    .value {{
        font: 300 16px monospace;
        text-align: center;
        dominant-baseline: middle;
        text-anchor: middle;
    }}
    .node {{
        fill: lightgray;
        stroke-width: 1;
    }}
</style>
<g stroke="#000000">
{body}
</g>
</svg>
"##
    )
}

/// SVG drawing of the tree: every level on its own row, each node placed
/// in the column it would occupy in a complete tree of the same height.
pub fn svg<T: fmt::Display>(tree: &AvlTree<T>, options: &SvgOptions) -> String {
    let Some(root) = tree.origin() else {
        return document(0.0, 0.0, "");
    };

    let tree_height = root.height();
    let radius = f64::from(options.node_radius);
    let scale = radius * 3.0;
    let scale_x = |x: usize, y: i32| {
        let diff = tree_height - y;
        let x = 2f64.powi(diff + 1) * x as f64 + 2f64.powi(diff) - 1.0;
        1.0 + radius + scale * x / 2.0
    };
    let scale_y = |y: i32| scale * f64::from(1 + y);

    let mut edges = Vec::new();
    let mut circles = String::new();
    let mut add_node = |x: usize, y: i32, node: NodeRef<'_, T>| {
        let (cx, cy) = (scale_x(x, y), scale_y(y));
        let _ = writeln!(
            circles,
            r#"<circle class="node" cx="{cx}" cy="{cy}" r="{radius}"/>"#
        );
        let _ = writeln!(
            circles,
            r#"<text class="value" x="{cx}" y="{}">{}</text>"#,
            cy + 5.0,
            escape_xml(&node.value().to_string())
        );
    };

    add_node(0, 0, root);
    let mut level = vec![root.left(), root.right()];
    let mut y = 1;
    let mut more = true;
    while more {
        more = false;
        let mut below = Vec::with_capacity(level.len() * 2);
        for (x, node) in level.iter().enumerate() {
            let Some(node) = *node else {
                below.push(None);
                below.push(None);
                continue;
            };
            if node.left().is_some() || node.right().is_some() {
                more = true;
            }
            edges.push(format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                scale_x(x / 2, y - 1),
                scale_y(y - 1),
                scale_x(x, y),
                scale_y(y)
            ));
            add_node(x, y, node);
            below.push(node.left());
            below.push(node.right());
        }
        level = below;
        y += 1;
    }

    // Edges first so circles are painted over them.
    let mut body = String::new();
    for edge in edges.iter().rev() {
        body.push_str(edge);
        body.push('\n');
    }
    body.push_str(circles.trim_end());

    document(
        scale * 2f64.powi(tree_height),
        scale * f64::from(2 + tree_height),
        &body,
    )
}
