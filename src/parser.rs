//! Input-boundary parsing for dirgram
//!
//! Turns raw YAML bytes into the tree model. Every failure mode of the
//! render pipeline lives here; the layout engine itself is total over a
//! valid tree and never performs I/O.

use crate::error::{DirgramError, DirgramResult};
use crate::models::TreeNode;

/// Parse a YAML document into the ordered list of top-level tree nodes
///
/// The input is the whole file contents. An empty document (or a bare
/// `null`) yields an empty list, which renders as an empty diagram.
/// On failure nothing is rendered; the error carries the underlying
/// YAML message plus its location when the parser reports one.
pub fn parse_nodes(input: &[u8]) -> DirgramResult<Vec<TreeNode>> {
    let nodes: Option<Vec<TreeNode>> =
        serde_yaml_ng::from_slice(input).map_err(|e| DirgramError::InvalidInput {
            message: format_yaml_error(&e),
        })?;
    Ok(nodes.unwrap_or_default())
}

fn format_yaml_error(err: &serde_yaml_ng::Error) -> String {
    let err_str = err.to_string();
    // serde_yaml_ng usually embeds "at line X column Y" already; only
    // append the location when the display lacks it.
    if err_str.contains("at line") {
        return err_str;
    }
    match err.location() {
        Some(loc) => format!("{} at line {} column {}", err_str, loc.line(), loc.column()),
        None => err_str,
    }
}
