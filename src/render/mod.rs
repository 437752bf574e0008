//! Tree-rendering layout engine
//!
//! Walks the node tree depth-first and renders one line per node, plus
//! continuation lines for wrapped annotations. Each line is built from
//! the ancestor connector columns, a branch glyph, the path text,
//! padding out to a fixed annotation column, and the `<= `-delimited
//! description.
//!
//! All width and offset arithmetic is in chars (code points), never
//! bytes; the box-drawing glyphs and path placeholders are multi-byte.

pub mod wrap;

use crate::models::TreeNode;
use self::wrap::wrap;

/// Column at which the `<= ` annotation delimiter is aligned
///
/// Lines whose prefix and path overrun this column render with zero
/// padding; alignment degrades for that line only, it never widens the
/// whole document.
pub const PATH_FIELD_WIDTH: usize = 43;

/// Overall target line width; annotations wrap at
/// `TOTAL_LINE_WIDTH - PATH_FIELD_WIDTH`
pub const TOTAL_LINE_WIDTH: usize = 80;

/// Delimiter between the path field and the annotation text
const DELIMITER: &str = "<= ";

/// Placeholder for nodes with an empty description list
const NO_DESCRIPTION: &str = "[no description]";

/// Render the whole diagram for an ordered list of top-level nodes
///
/// Returns one newline-terminated line per rendered row. An empty input
/// renders an empty buffer.
pub fn generate(nodes: &[TreeNode]) -> String {
    let mut out = String::new();
    let mut connectors = ConnectorState::new();
    for (i, node) in nodes.iter().enumerate() {
        let is_last = i == nodes.len() - 1;
        render_node(node, is_last, 0, &mut connectors, &mut out);
    }
    out
}

/// Vertical connector columns for the current walk
///
/// A marked column means an ancestor there still has a following
/// sibling, so every line of the current subtree draws a `│` through
/// it. Mutation is stack-scoped: `render_node` saves the prior value on
/// entry and restores it on exit, so a later sibling never observes
/// state left behind by an earlier subtree.
#[derive(Debug, Default)]
struct ConnectorState {
    columns: Vec<bool>,
}

impl ConnectorState {
    fn new() -> Self {
        Self {
            columns: vec![false; PATH_FIELD_WIDTH],
        }
    }

    fn get(&self, column: usize) -> bool {
        self.columns.get(column).copied().unwrap_or(false)
    }

    fn set(&mut self, column: usize, marked: bool) {
        if column >= self.columns.len() {
            self.columns.resize(column + 1, false);
        }
        self.columns[column] = marked;
    }

    /// Ancestor prefix for one output line: `│` through marked columns,
    /// spaces elsewhere, covering columns `0..width`
    fn prefix(&self, width: usize) -> String {
        (0..width)
            .map(|col| if self.get(col) { '│' } else { ' ' })
            .collect()
    }
}

fn render_node(
    node: &TreeNode,
    is_last: bool,
    start: usize,
    connectors: &mut ConnectorState,
    out: &mut String,
) {
    let prior = connectors.get(start);
    connectors.set(start, !is_last);

    let child_start = child_start_column(&node.path, start);
    let glyph = branch_glyph(is_last, start);

    out.push_str(&connectors.prefix(start));
    out.push_str(glyph);
    out.push_str(&node.path);

    let printed = start + glyph.chars().count() + node.path.chars().count();
    out.push_str(&" ".repeat(PATH_FIELD_WIDTH.saturating_sub(printed)));

    let wrap_limit = TOTAL_LINE_WIDTH - PATH_FIELD_WIDTH;
    let fragments: Vec<String> = node
        .desc
        .iter()
        .flat_map(|desc| wrap(desc, wrap_limit))
        .collect();

    if fragments.is_empty() {
        out.push_str(NO_DESCRIPTION);
        out.push('\n');
    } else {
        for (i, fragment) in fragments.iter().enumerate() {
            if i == 0 {
                out.push_str(DELIMITER);
            } else {
                // Continuation lines keep the vertical line running down
                // to the children, or a blank column for a leaf.
                out.push_str(&connectors.prefix(child_start));
                out.push(if node.children.is_empty() { ' ' } else { '│' });
                let text_column = PATH_FIELD_WIDTH + DELIMITER.chars().count();
                out.push_str(&" ".repeat(text_column.saturating_sub(child_start + 1)));
            }
            out.push_str(fragment);
            out.push('\n');
        }
    }

    for (i, child) in node.children.iter().enumerate() {
        let child_is_last = i == node.children.len() - 1;
        render_node(child, child_is_last, child_start, connectors, out);
    }

    connectors.set(start, prior);
}

/// Column at which this node's children's branch glyphs begin
///
/// Children align under the char after the last `/` of the parent path
/// (a trailing separator is ignored), so branches line up under the
/// directory name rather than the full path. Offsets are char
/// positions.
fn child_start_column(path: &str, start: usize) -> usize {
    let base = if start == 0 { 0 } else { start + 2 };
    let chars: Vec<char> = path.chars().collect();
    let scan_end = chars.len().saturating_sub(1);
    for i in (0..scan_end).rev() {
        if chars[i] == '/' {
            return base + i + 1;
        }
    }
    base
}

fn branch_glyph(is_last: bool, start: usize) -> &'static str {
    if start == 0 {
        ""
    } else if is_last {
        "└─"
    } else {
        "├─"
    }
}
