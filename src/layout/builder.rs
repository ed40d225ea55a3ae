//! The layout builder: raw weighted trees in, flat positioned entries out.
//!
//! A build is a single depth-first pre-order pass. Every entry gets a row
//! (depth), a left offset and a width, both as ratios of the rendered
//! width, so the caller can scale the whole layout by multiplying with a
//! pixel width. The output order is part of the contract: entries appear
//! exactly in the order the walk visited them, and an entry's position in
//! the vector is the identity consumers hand back for hit testing.

use crate::layout::order::SiblingLayout;
use crate::parser::schema::FrameNode;
use crate::utils::config::DEFAULT_RENDER_WIDTH;
use crate::utils::error::LayoutError;
use log::debug;

/// Layout configuration
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Sibling ordering strategy, applied at every level
    pub layout: SiblingLayout,

    /// Rendered width in pixels; only consulted by the minimum-bar cull
    pub render_width: f64,

    /// Bars narrower than this many pixels are culled together with
    /// their subtree. `None` disables culling.
    pub minimum_bar_size: Option<f64>,

    /// Rows deeper than this are culled. `None` keeps every row.
    pub max_depth: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            layout: SiblingLayout::AsGiven,
            render_width: DEFAULT_RENDER_WIDTH,
            minimum_bar_size: None,
            max_depth: None,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: SiblingLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_render_width(mut self, width: f64) -> Self {
        self.render_width = width;
        self
    }

    pub fn with_minimum_bar_size(mut self, size: Option<f64>) -> Self {
        self.minimum_bar_size = size;
        self
    }

    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }
}

/// One positioned rectangle in the flat layout.
///
/// `original` is a shared borrow of the source frame; it is payload for
/// display and events, never an input to geometry. `children` holds the
/// index-table positions of the entry's direct children, so the flat list
/// and the tree view are the same structure.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEntry<'a> {
    /// Depth below the current root (0 = root row)
    pub row_number: usize,

    /// Left edge as a fraction of the rendered width, in [0, 1]
    pub left_ratio: f64,

    /// Width as a fraction of the rendered width, in [0, 1]
    pub width_ratio: f64,

    /// The source frame this rectangle was laid out from
    pub original: &'a FrameNode,

    /// Index-table positions of this entry's children
    pub children: Vec<usize>,
}

/// Build the flat layout for a frame tree
///
/// **Public** - the engine's main entry point
///
/// # Arguments
/// * `root` - Tree to lay out; borrowed read-only
/// * `config` - Strategy, render width and cull thresholds
///
/// # Returns
/// Entries in depth-first pre-order. The root entry is always present,
/// at index 0, spanning `[0, 1)` (width 0 for a zero-weight root).
///
/// # Errors
/// * `LayoutError::InvalidWeight` - a frame weight is negative or
///   non-finite; detected before any layout work happens
pub fn build<'a>(
    root: &'a FrameNode,
    config: &LayoutConfig,
) -> Result<Vec<LayoutEntry<'a>>, LayoutError> {
    validate_weights(root)?;

    let mut entries = Vec::new();
    let root_width = if root.value > 0.0 { 1.0 } else { 0.0 };

    entries.push(LayoutEntry {
        row_number: 0,
        left_ratio: 0.0,
        width_ratio: root_width,
        original: root,
        children: Vec::new(),
    });

    // A zero-weight root is a degenerate tree: nothing below it can have
    // visible width, so its children are not visited at all.
    if root.value > 0.0 {
        lay_out_children(root, 0, 0.0, 1.0, 0, config, &mut entries);
    }

    debug!(
        "Laid out {} frames ({} strategy)",
        entries.len(),
        config.layout.as_str()
    );

    Ok(entries)
}

/// Position one frame's children inside `[left, left + width)` and recurse.
fn lay_out_children<'a>(
    node: &'a FrameNode,
    depth: usize,
    left: f64,
    width: f64,
    parent: usize,
    config: &LayoutConfig,
    entries: &mut Vec<LayoutEntry<'a>>,
) {
    let total = node.children_total();
    // Zero-weight sibling sets inherit no width; the subtree below them
    // is never rendered, even if the raw tree keeps descending.
    if total <= 0.0 {
        return;
    }

    if let Some(max_depth) = config.max_depth {
        if depth + 1 > max_depth {
            return;
        }
    }

    let mut cursor = left;
    for child in config.layout.order(&node.children) {
        let child_width = width * (child.value / total);
        let child_left = cursor;
        cursor += child_width;

        // Culling is an output decision only: the child's weight has
        // already moved the cursor, so surviving siblings keep the exact
        // ratios they would have without the cull.
        if is_culled(child_width, config) {
            continue;
        }

        let index = entries.len();
        entries.push(LayoutEntry {
            row_number: depth + 1,
            left_ratio: child_left,
            width_ratio: child_width,
            original: child,
            children: Vec::new(),
        });
        entries[parent].children.push(index);

        lay_out_children(child, depth + 1, child_left, child_width, index, config, entries);
    }
}

fn is_culled(width_ratio: f64, config: &LayoutConfig) -> bool {
    match config.minimum_bar_size {
        Some(minimum) => width_ratio * config.render_width < minimum,
        None => false,
    }
}

/// Re-root the layout at one of its entries (zoom).
///
/// **Public** - the zoom operation
///
/// This is a fresh layout pass over the target's raw subtree, never an
/// arithmetic rescale of existing ratios, so repeated zooms do not
/// accumulate floating-point drift. Ancestors of the target are dropped;
/// resetting the zoom is the caller re-running [`build`] on the top-level
/// root it retained.
///
/// # Errors
/// * `LayoutError::UnknownEntry` - `target` is not a valid index-table
///   position
pub fn reroot<'a>(
    entries: &[LayoutEntry<'a>],
    target: usize,
    config: &LayoutConfig,
) -> Result<Vec<LayoutEntry<'a>>, LayoutError> {
    let entry = entries.get(target).ok_or(LayoutError::UnknownEntry(target))?;
    debug!("Re-rooting layout at '{}'", entry.original.name);
    build(entry.original, config)
}

/// Resolve an interaction index against the index table.
///
/// **Public** - hit-test resolution
///
/// The index arrives from untrusted UI state (a parsed element attribute,
/// possibly from a stale render), so negative, out-of-range and otherwise
/// nonsensical values resolve to `None` rather than failing.
pub fn resolve<'e, 'a>(entries: &'e [LayoutEntry<'a>], index: i64) -> Option<&'e LayoutEntry<'a>> {
    if index < 0 {
        return None;
    }
    entries.get(index as usize)
}

/// Reject negative and non-finite weights before traversal.
///
/// Cyclic inputs do not need a check: `FrameNode` owns its children by
/// value, so the structure is a tree by construction.
fn validate_weights(root: &FrameNode) -> Result<(), LayoutError> {
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        if !node.value.is_finite() || node.value < 0.0 {
            return Err(LayoutError::InvalidWeight {
                name: node.name.clone(),
                value: node.value,
            });
        }
        pending.extend(node.children.iter());
    }
    Ok(())
}
