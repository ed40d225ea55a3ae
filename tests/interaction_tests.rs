use flamelay::interaction::{click, double_click, FrameEvent, HoverTracker};
use flamelay::layout::{build, reroot, LayoutConfig};
use flamelay::parser::FrameNode;

fn tree() -> FrameNode {
    FrameNode::new("root", 10.0).with_children(vec![
        FrameNode::new("a", 6.0).with_children(vec![FrameNode::new("a_1", 6.0)]),
        FrameNode::new("b", 4.0),
    ])
}

#[test]
fn test_enter_fires_once_per_frame() {
    let tree = tree();
    let entries = build(&tree, &LayoutConfig::default()).unwrap();
    let mut tracker = HoverTracker::new();

    let events = tracker.pointer_over(&entries, 1);
    assert_eq!(events, vec![FrameEvent::Enter(entries[1].original)]);

    // The pointer keeps moving inside the same bar: no repeat enter.
    assert!(tracker.pointer_over(&entries, 1).is_empty());
    assert!(tracker.pointer_over(&entries, 1).is_empty());
    assert_eq!(tracker.current(), Some(1));
}

#[test]
fn test_leave_precedes_enter_on_frame_change() {
    let tree = tree();
    let entries = build(&tree, &LayoutConfig::default()).unwrap();
    let mut tracker = HoverTracker::new();

    tracker.pointer_over(&entries, 1);
    let events = tracker.pointer_over(&entries, 3);

    assert_eq!(
        events,
        vec![
            FrameEvent::Leave(entries[1].original),
            FrameEvent::Enter(entries[3].original),
        ]
    );
}

#[test]
fn test_moving_onto_background_leaves_only() {
    let tree = tree();
    let entries = build(&tree, &LayoutConfig::default()).unwrap();
    let mut tracker = HoverTracker::new();

    tracker.pointer_over(&entries, 2);
    let events = tracker.pointer_over(&entries, 99);
    assert_eq!(events, vec![FrameEvent::Leave(entries[2].original)]);

    // Still on background: nothing more to say.
    assert!(tracker.pointer_over(&entries, -5).is_empty());
    assert_eq!(tracker.current(), None);
}

#[test]
fn test_pointer_out_emits_single_leave() {
    let tree = tree();
    let entries = build(&tree, &LayoutConfig::default()).unwrap();
    let mut tracker = HoverTracker::new();

    tracker.pointer_over(&entries, 0);
    assert_eq!(
        tracker.pointer_out(&entries),
        Some(FrameEvent::Leave(entries[0].original))
    );
    assert_eq!(tracker.pointer_out(&entries), None);
}

#[test]
fn test_stale_index_degrades_to_silence() {
    let tree = tree();
    let config = LayoutConfig::default();
    let entries = build(&tree, &config).unwrap();
    let mut tracker = HoverTracker::new();

    // Hover the last entry, then zoom: the rebuilt table is shorter and
    // the tracked index no longer resolves.
    tracker.pointer_over(&entries, 3);
    let zoomed = reroot(&entries, 3, &config).unwrap();
    assert!(zoomed.len() <= 3);

    // Without a reset, the stale index must not produce a bogus leave.
    let events = tracker.pointer_over(&zoomed, 0);
    assert_eq!(events, vec![FrameEvent::Enter(zoomed[0].original)]);

    tracker.reset();
    assert_eq!(tracker.current(), None);
}

#[test]
fn test_click_and_double_click_resolution() {
    let tree = tree();
    let entries = build(&tree, &LayoutConfig::default()).unwrap();

    assert_eq!(
        click(&entries, 1),
        Some(FrameEvent::Click(entries[1].original))
    );
    assert_eq!(click(&entries, -1), None);
    assert_eq!(click(&entries, entries.len() as i64), None);

    match double_click(&entries, 1) {
        Some(FrameEvent::Zoom(entry)) => assert_eq!(entry.original.name, "a"),
        other => panic!("expected zoom event, got {other:?}"),
    }
    assert_eq!(double_click(&entries, 42), None);
}
