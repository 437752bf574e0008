//! Dirgram - annotated directory-tree diagram renderer
//!
//! Dirgram reads a YAML description of a directory hierarchy (a path,
//! optional description lines, and children per node) and renders an
//! ASCII/Unicode tree diagram with box-drawing connectors and
//! column-aligned, word-wrapped annotations.

pub mod cli;
pub mod error;
pub mod models;
pub mod parser;
pub mod render;

// Re-exports for convenience
pub use error::{DirgramError, DirgramResult};
pub use models::TreeNode;
pub use parser::parse_nodes;
pub use render::wrap::wrap;
pub use render::{generate, PATH_FIELD_WIDTH, TOTAL_LINE_WIDTH};
