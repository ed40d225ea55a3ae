//! Profile input parsing: JSON frame trees and collapsed stack text.

pub mod collapsed;
pub mod schema;

pub use collapsed::{build_tree, parse_collapsed, StackLine};
pub use schema::{to_profile, FrameNode, FrameRecord, LayoutProfile};

use crate::utils::error::ParseError;
use std::path::Path;

/// Read a frame tree from a JSON file
///
/// **Public** - used by the render and validate commands
pub fn read_tree(path: impl AsRef<Path>) -> Result<FrameNode, ParseError> {
    let file = std::fs::File::open(path.as_ref())?;
    let tree: FrameNode = serde_json::from_reader(file)?;
    Ok(tree)
}
