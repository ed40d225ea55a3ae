use flamelay::layout::{build, reroot, resolve, LayoutConfig, LayoutEntry, SiblingLayout};
use flamelay::parser::FrameNode;
use pretty_assertions::assert_eq;

fn sample_tree() -> FrameNode {
    FrameNode::new("root", 100.0).with_children(vec![
        FrameNode::new("alpha", 60.0).with_children(vec![
            FrameNode::new("alpha_1", 20.0),
            FrameNode::new("alpha_2", 40.0),
        ]),
        FrameNode::new("beta", 25.0).with_children(vec![FrameNode::new("beta_1", 25.0)]),
        FrameNode::new("gamma", 15.0),
    ])
}

/// Child spans stay inside their parent's span, for every strategy.
fn assert_containment(entries: &[LayoutEntry<'_>]) {
    for parent in entries {
        for &child in &parent.children {
            let child = &entries[child];
            assert_eq!(child.row_number, parent.row_number + 1);
            assert!(child.left_ratio >= parent.left_ratio - 1e-9);
            assert!(child.width_ratio <= parent.width_ratio + 1e-9);
            assert!(
                child.left_ratio + child.width_ratio
                    <= parent.left_ratio + parent.width_ratio + 1e-9
            );
        }
    }
}

/// Sibling widths sum exactly to the parent width, and siblings pack
/// left to right without overlap.
fn assert_conservation(entries: &[LayoutEntry<'_>]) {
    for parent in entries {
        if parent.children.is_empty() {
            continue;
        }
        let sum: f64 = parent.children.iter().map(|&c| entries[c].width_ratio).sum();
        assert!(
            (sum - parent.width_ratio).abs() <= 1e-9,
            "children of '{}' sum to {sum}, parent width {}",
            parent.original.name,
            parent.width_ratio
        );

        for pair in parent.children.windows(2) {
            let (a, b) = (&entries[pair[0]], &entries[pair[1]]);
            assert!(a.left_ratio <= b.left_ratio);
            assert!(a.left_ratio + a.width_ratio <= b.left_ratio + 1e-9);
        }
    }
}

#[test]
fn test_concrete_scenario() {
    let tree = FrameNode::new("root", 10.0).with_children(vec![
        FrameNode::new("a", 6.0),
        FrameNode::new("b", 4.0),
    ]);
    let entries = build(&tree, &LayoutConfig::default()).unwrap();

    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].row_number, 0);
    assert_eq!(entries[0].left_ratio, 0.0);
    assert_eq!(entries[0].width_ratio, 1.0);

    assert_eq!(entries[1].original.name, "a");
    assert_eq!(entries[1].row_number, 1);
    assert_eq!(entries[1].left_ratio, 0.0);
    assert_eq!(entries[1].width_ratio, 0.6);

    assert_eq!(entries[2].original.name, "b");
    assert_eq!(entries[2].row_number, 1);
    assert_eq!(entries[2].left_ratio, 0.6);
    assert_eq!(entries[2].width_ratio, 0.4);
}

#[test]
fn test_containment_and_conservation_all_strategies() {
    let tree = sample_tree();
    for strategy in [
        SiblingLayout::AsGiven,
        SiblingLayout::WeightDescending,
        SiblingLayout::Alphabetical,
    ] {
        let config = LayoutConfig::new().with_layout(strategy);
        let entries = build(&tree, &config).unwrap();
        assert_eq!(entries.len(), 7);
        assert_containment(&entries);
        assert_conservation(&entries);
    }
}

#[test]
fn test_conservation_depth_1000() {
    // A 1000-deep spine with an uneven sibling at every level.
    let mut node = FrameNode::new("leaf", 3.0);
    for level in 0..1000 {
        node = FrameNode::new(format!("f{level}"), 7.0)
            .with_children(vec![node, FrameNode::new("side", 4.0)]);
    }

    let entries = build(&node, &LayoutConfig::default()).unwrap();
    assert_eq!(entries.len(), 2 * 1000 + 1);
    assert_containment(&entries);
    assert_conservation(&entries);
}

#[test]
fn test_single_nonzero_child_takes_full_width() {
    let tree = FrameNode::new("root", 10.0).with_children(vec![
        FrameNode::new("empty_a", 0.0),
        FrameNode::new("busy", 5.0),
        FrameNode::new("empty_b", 0.0),
    ]);
    let entries = build(&tree, &LayoutConfig::default()).unwrap();

    assert_eq!(entries.len(), 4);
    let busy = entries.iter().find(|e| e.original.name == "busy").unwrap();
    assert_eq!(busy.width_ratio, 1.0);
    assert_eq!(busy.left_ratio, 0.0);

    // Zero-weight siblings are still laid out, with zero width.
    let empty_b = entries.iter().find(|e| e.original.name == "empty_b").unwrap();
    assert_eq!(empty_b.width_ratio, 0.0);
    assert_eq!(empty_b.left_ratio, 1.0);
    assert_conservation(&entries);
}

#[test]
fn test_zero_total_children_are_skipped() {
    // "hollow" has weight but its children are all zero: the subtree
    // below it is never rendered, grandchildren included.
    let tree = FrameNode::new("root", 10.0).with_children(vec![FrameNode::new("hollow", 10.0)
        .with_children(vec![FrameNode::new("zero", 0.0)
            .with_children(vec![FrameNode::new("ghost", 4.0)])])]);

    let entries = build(&tree, &LayoutConfig::default()).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.original.name.as_str()).collect();
    assert_eq!(names, vec!["root", "hollow"]);
}

#[test]
fn test_build_is_deterministic() {
    let tree = sample_tree();
    for strategy in [
        SiblingLayout::AsGiven,
        SiblingLayout::WeightDescending,
        SiblingLayout::Alphabetical,
    ] {
        let config = LayoutConfig::new().with_layout(strategy);
        let first = build(&tree, &config).unwrap();
        let second = build(&tree, &config).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_weight_descending_tie_break_is_as_given() {
    let tree = FrameNode::new("root", 30.0).with_children(vec![
        FrameNode::new("late_heavy", 10.0),
        FrameNode::new("tie_one", 10.0),
        FrameNode::new("tie_two", 10.0),
    ]);
    let config = LayoutConfig::new().with_layout(SiblingLayout::WeightDescending);
    let entries = build(&tree, &config).unwrap();

    let names: Vec<&str> = entries[1..].iter().map(|e| e.original.name.as_str()).collect();
    assert_eq!(names, vec!["late_heavy", "tie_one", "tie_two"]);
}

#[test]
fn test_output_order_is_depth_first_preorder() {
    let tree = sample_tree();
    let entries = build(&tree, &LayoutConfig::default()).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.original.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["root", "alpha", "alpha_1", "alpha_2", "beta", "beta_1", "gamma"]
    );
}

#[test]
fn test_reroot_at_root_matches_build() {
    let tree = sample_tree();
    let config = LayoutConfig::default();
    let entries = build(&tree, &config).unwrap();
    let rerooted = reroot(&entries, 0, &config).unwrap();
    assert_eq!(entries, rerooted);
}

#[test]
fn test_reroot_normalizes_target_to_full_width() {
    let tree = sample_tree();
    let config = LayoutConfig::default();
    let entries = build(&tree, &config).unwrap();

    let alpha = entries.iter().position(|e| e.original.name == "alpha").unwrap();
    let zoomed = reroot(&entries, alpha, &config).unwrap();

    assert_eq!(zoomed[0].original.name, "alpha");
    assert_eq!(zoomed[0].row_number, 0);
    assert_eq!(zoomed[0].left_ratio, 0.0);
    assert_eq!(zoomed[0].width_ratio, 1.0);

    // Ancestors are gone; alpha's children fill the full width.
    assert!(zoomed.iter().all(|e| e.original.name != "root"));
    let names: Vec<&str> = zoomed.iter().map(|e| e.original.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "alpha_1", "alpha_2"]);
    assert_conservation(&zoomed);
}

#[test]
fn test_reroot_rejects_unknown_index() {
    let tree = sample_tree();
    let config = LayoutConfig::default();
    let entries = build(&tree, &config).unwrap();
    assert!(reroot(&entries, entries.len(), &config).is_err());
}

#[test]
fn test_cull_removes_bar_but_keeps_sibling_ratios() {
    let tree = FrameNode::new("root", 100.0).with_children(vec![
        FrameNode::new("wide", 60.0),
        FrameNode::new("mid", 37.0),
        FrameNode::new("sliver", 3.0)
            .with_children(vec![FrameNode::new("sliver_child", 3.0)]),
    ]);

    let plain = LayoutConfig::new().with_render_width(100.0);
    let culling = LayoutConfig::new()
        .with_render_width(100.0)
        .with_minimum_bar_size(Some(5.0));

    let full = build(&tree, &plain).unwrap();
    let culled = build(&tree, &culling).unwrap();

    // The 3px bar and its subtree are gone.
    assert!(full.iter().any(|e| e.original.name == "sliver"));
    assert!(culled.iter().all(|e| e.original.name != "sliver"));
    assert!(culled.iter().all(|e| e.original.name != "sliver_child"));

    // Surviving siblings keep the exact geometry they had without the cull.
    for name in ["wide", "mid"] {
        let before = full.iter().find(|e| e.original.name == name).unwrap();
        let after = culled.iter().find(|e| e.original.name == name).unwrap();
        assert_eq!(before.left_ratio, after.left_ratio);
        assert_eq!(before.width_ratio, after.width_ratio);
    }
}

#[test]
fn test_max_depth_culls_rows_not_ratios() {
    let tree = sample_tree();
    let config = LayoutConfig::new().with_max_depth(Some(1));
    let entries = build(&tree, &config).unwrap();

    assert!(entries.iter().all(|e| e.row_number <= 1));
    let names: Vec<&str> = entries.iter().map(|e| e.original.name.as_str()).collect();
    assert_eq!(names, vec!["root", "alpha", "beta", "gamma"]);
    assert_conservation(&entries);
}

#[test]
fn test_resolve_boundaries() {
    let tree = sample_tree();
    let entries = build(&tree, &LayoutConfig::default()).unwrap();

    assert!(resolve(&entries, -1).is_none());
    assert!(resolve(&entries, entries.len() as i64).is_none());

    let empty: Vec<LayoutEntry<'_>> = Vec::new();
    assert!(resolve(&empty, 0).is_none());

    for i in 0..entries.len() {
        let hit = resolve(&entries, i as i64).unwrap();
        assert!(std::ptr::eq(hit, &entries[i]));
    }
}

#[test]
fn test_child_indices_match_table_positions() {
    let tree = sample_tree();
    let entries = build(&tree, &LayoutConfig::default()).unwrap();

    // Root's children resolve to the row-1 entries, in layout order.
    let top: Vec<&str> = entries[0]
        .children
        .iter()
        .map(|&c| entries[c].original.name.as_str())
        .collect();
    assert_eq!(top, vec!["alpha", "beta", "gamma"]);
}
