//! Sibling layout strategies.
//!
//! A strategy reorders a frame's children before widths and offsets are
//! assigned. It never touches weights or structure, and it is applied at
//! every level of the walk, not just under the root.

use crate::parser::schema::FrameNode;
use std::cmp::Ordering;
use std::str::FromStr;

/// Ordering policy for a frame's children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiblingLayout {
    /// Keep caller-supplied order (call traces usually encode call sequence)
    #[default]
    AsGiven,

    /// Heaviest child first; ties keep as-given order
    WeightDescending,

    /// Byte-wise name order; ties keep as-given order
    Alphabetical,
}

impl SiblingLayout {
    /// Reorder a sibling slice according to the strategy.
    ///
    /// The reorder is total and stable: std's stable sort resolves ties
    /// to input order, so a fixed input always produces the same output.
    pub fn order<'a>(self, siblings: &'a [FrameNode]) -> Vec<&'a FrameNode> {
        let mut ordered: Vec<&FrameNode> = siblings.iter().collect();
        match self {
            SiblingLayout::AsGiven => {}
            SiblingLayout::WeightDescending => {
                // Weights are validated finite before layout runs.
                ordered.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
            }
            SiblingLayout::Alphabetical => {
                ordered.sort_by(|a, b| a.name.cmp(&b.name));
            }
        }
        ordered
    }

    /// Name used in exported profiles and CLI help
    pub fn as_str(self) -> &'static str {
        match self {
            SiblingLayout::AsGiven => "as-given",
            SiblingLayout::WeightDescending => "weight-descending",
            SiblingLayout::Alphabetical => "alphabetical",
        }
    }
}

impl FromStr for SiblingLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "as-given" | "given" => Ok(SiblingLayout::AsGiven),
            "weight-descending" | "weight" => Ok(SiblingLayout::WeightDescending),
            "alphabetical" | "alpha" => Ok(SiblingLayout::Alphabetical),
            other => Err(format!(
                "unknown layout '{other}' (expected as-given, weight-descending or alphabetical)"
            )),
        }
    }
}
