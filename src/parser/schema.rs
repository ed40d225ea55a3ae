//! Data shapes: the raw weighted tree we read and the
//! layout profile JSON we write to disk.
//!
//! The output schema is versioned to allow future evolution.

use crate::layout::LayoutEntry;
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// A single frame in the weighted input tree.
///
/// This is the engine's only input shape: a name, a non-negative weight,
/// and an ordered list of child frames. The layout engine borrows the tree
/// immutably; it never clones or mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameNode {
    /// Display name of the frame (function, span, category, ...)
    pub name: String,

    /// Weight of the frame (samples, gas, nanoseconds, ...)
    pub value: f64,

    /// Child frames, in caller-supplied order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FrameNode>,
}

impl FrameNode {
    /// Create a leaf frame
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            children: Vec::new(),
        }
    }

    /// Attach children, builder style
    pub fn with_children(mut self, children: Vec<FrameNode>) -> Self {
        self.children = children;
        self
    }

    /// Total weight of the direct children
    pub fn children_total(&self) -> f64 {
        self.children.iter().map(|c| c.value).sum()
    }
}

/// Top-level layout profile structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutProfile {
    /// Schema version for compatibility checking
    pub version: String,

    /// Profile title (flamegraph heading)
    pub title: String,

    /// Sibling layout strategy the entries were built with
    pub strategy: String,

    /// Weight of the root frame
    pub total_weight: f64,

    /// Number of laid-out frames
    pub frame_count: usize,

    /// One record per layout entry, in index-table order
    pub frames: Vec<FrameRecord>,

    /// Timestamp when the profile was generated
    pub generated_at: String,
}

/// A single positioned frame in the exported profile.
///
/// `index` is the entry's position in the index table; `children` are the
/// positions of its direct children. Consumers resolve interaction events
/// through these indices, never by re-walking the tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameRecord {
    pub index: usize,
    pub name: String,
    pub value: f64,
    pub row: usize,
    pub left_ratio: f64,
    pub width_ratio: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<usize>,
}

/// Convert a built index table into an exportable profile
///
/// **Public** - used by the render command before writing JSON output
pub fn to_profile(entries: &[LayoutEntry<'_>], title: &str, strategy: &str) -> LayoutProfile {
    let frames: Vec<FrameRecord> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| FrameRecord {
            index,
            name: entry.original.name.clone(),
            value: entry.original.value,
            row: entry.row_number,
            left_ratio: entry.left_ratio,
            width_ratio: entry.width_ratio,
            children: entry.children.clone(),
        })
        .collect();

    LayoutProfile {
        version: SCHEMA_VERSION.to_string(),
        title: title.to_string(),
        strategy: strategy.to_string(),
        total_weight: entries.first().map(|e| e.original.value).unwrap_or(0.0),
        frame_count: frames.len(),
        frames,
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}
