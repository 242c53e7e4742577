//! Property-based tests for pane geometry and hit testing

use proptest::prelude::*;

use panedeck_core::{Orientation, PaneTree, Rect, pane_at, pane_rects};

use crate::common::ScriptedDoc;

fn build_tree(splits: &[(Orientation, f64)]) -> PaneTree {
    let mut tree = PaneTree::new();
    tree.open_document(Box::new(ScriptedDoc::new("seed.rs")), None);
    for &(orientation, ratio) in splits {
        let first = tree.active_pane();
        tree.split_active_pane(orientation);
        // Ratio applies to the branch whose first side starts at `first`.
        let _ = tree.set_split_ratio(first, ratio);
    }
    tree
}

fn splits_strategy() -> impl Strategy<Value = Vec<(Orientation, f64)>> {
    proptest::collection::vec(
        (
            prop_oneof![Just(Orientation::Row), Just(Orientation::Column)],
            0.1..0.9f64,
        ),
        0..6,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The pane rectangles tile the viewport exactly.
    #[test]
    fn rects_tile_the_viewport(splits in splits_strategy()) {
        let tree = build_tree(&splits);
        let viewport = Rect::new(0.0, 0.0, 1280.0, 720.0);
        let rects = pane_rects(tree.root(), viewport);

        prop_assert_eq!(rects.len(), tree.pane_count());
        let area: f64 = rects.iter().map(|(_, r)| r.width * r.height).sum();
        prop_assert!((area - viewport.width * viewport.height).abs() < 1e-3);
    }

    /// The center of every pane's rectangle resolves back to that pane.
    #[test]
    fn rect_centers_resolve_to_their_pane(splits in splits_strategy()) {
        let tree = build_tree(&splits);
        let viewport = Rect::new(0.0, 0.0, 1280.0, 720.0);
        for (id, rect) in pane_rects(tree.root(), viewport) {
            let cx = rect.x + rect.width / 2.0;
            let cy = rect.y + rect.height / 2.0;
            prop_assert_eq!(pane_at(tree.root(), viewport, cx, cy), Some(id));
        }
    }

    /// Points outside the viewport never resolve to a pane.
    #[test]
    fn outside_points_are_no_target(
        splits in splits_strategy(),
        x in -500.0..1800.0f64,
        y in -500.0..1200.0f64,
    ) {
        let tree = build_tree(&splits);
        let viewport = Rect::new(0.0, 0.0, 1280.0, 720.0);
        let hit = pane_at(tree.root(), viewport, x, y);
        if viewport.contains(x, y) {
            // Interior points may fall on a float seam between panes, but a
            // resolved hit must be a live pane.
            if let Some(id) = hit {
                prop_assert!(tree.pane_ids().contains(&id));
            }
        } else {
            prop_assert_eq!(hit, None);
        }
    }
}
