//! Interaction surface: turning pointer reports into frame events.
//!
//! The engine itself knows nothing about pointers. A UI host reports
//! "the pointer is over the bar tagged with index N" (or left the graph,
//! clicked, double-clicked) and this module derives the domain events,
//! owning the one piece of state the contract needs: which entry is
//! currently hovered. Hover transitions are ordered - at most one `Leave`
//! for the previous frame before any `Enter`, and no repeated `Enter`
//! while the pointer stays on the same logical frame, however much it
//! moves inside that frame's rectangle.

use crate::layout::{resolve, LayoutEntry};
use crate::parser::schema::FrameNode;

/// A domain event derived from pointer input.
///
/// Hover and click events carry the raw frame (payload for tooltips and
/// click handlers); a zoom request carries the full positioned entry so
/// the caller can feed it straight back into `reroot`.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent<'e, 'a> {
    Enter(&'a FrameNode),
    Leave(&'a FrameNode),
    Click(&'a FrameNode),
    Zoom(&'e LayoutEntry<'a>),
}

/// Tracks the currently hovered index-table position.
///
/// Indices do not survive a rebuild: call [`HoverTracker::reset`] whenever
/// the entry table is replaced. A stale index that no longer resolves
/// degrades to silence, never to a wrong event.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    current: Option<usize>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The index-table position currently hovered, if any
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Report the pointer over the bar tagged `index` (or any untagged
    /// part of the graph - anything that does not resolve).
    ///
    /// Returns the ordered events this transition produces: nothing while
    /// the resolved frame is unchanged, otherwise a `Leave` for the
    /// previous frame (if there was one) followed by an `Enter` for the
    /// new one (if the index resolved).
    pub fn pointer_over<'e, 'a>(
        &mut self,
        entries: &'e [LayoutEntry<'a>],
        index: i64,
    ) -> Vec<FrameEvent<'e, 'a>> {
        let hit = if resolve(entries, index).is_some() {
            Some(index as usize)
        } else {
            None
        };

        if hit == self.current {
            return Vec::new();
        }

        let mut events = Vec::new();
        if let Some(previous) = self.current.take() {
            if let Some(entry) = entries.get(previous) {
                events.push(FrameEvent::Leave(entry.original));
            }
        }
        if let Some(index) = hit {
            events.push(FrameEvent::Enter(entries[index].original));
            self.current = Some(index);
        }
        events
    }

    /// Report the pointer leaving the graph entirely.
    pub fn pointer_out<'e, 'a>(
        &mut self,
        entries: &'e [LayoutEntry<'a>],
    ) -> Option<FrameEvent<'e, 'a>> {
        let previous = self.current.take()?;
        entries
            .get(previous)
            .map(|entry| FrameEvent::Leave(entry.original))
    }

    /// Forget hover state. Call after every rebuild or re-root.
    pub fn reset(&mut self) {
        self.current = None;
    }
}

/// Derive the click event for the bar tagged `index`, if it resolves.
pub fn click<'e, 'a>(entries: &'e [LayoutEntry<'a>], index: i64) -> Option<FrameEvent<'e, 'a>> {
    resolve(entries, index).map(|entry| FrameEvent::Click(entry.original))
}

/// Derive the zoom request for the bar tagged `index`, if it resolves.
pub fn double_click<'e, 'a>(
    entries: &'e [LayoutEntry<'a>],
    index: i64,
) -> Option<FrameEvent<'e, 'a>> {
    resolve(entries, index).map(FrameEvent::Zoom)
}
