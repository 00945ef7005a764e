//! Property tests for the clamp and the drag bounds invariant.
//!
//! 1. **clamp** matches `max(min, min(x, max))` over the whole `i32` grid,
//!    including inverted ranges, and reduces to the textbook clamp when the
//!    range is well-formed.
//! 2. **Bounds** - for any gesture on a panel that fits the viewport, every
//!    move leaves the origin inside `[0, vw - w] x [0, vh - h]`.
//! 3. **Resize** is idempotent: reclamping twice against the same viewport
//!    never moves the panel the second time.

use postform_core::{
    DragController, DragOutcome, PanelState, Point, PressTarget, Size, ViewportBounds, clamp,
};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = i32> {
    -5_000i32..5_000
}

proptest! {
    #[test]
    fn clamp_matches_max_of_min(min in coord(), x in coord(), max in coord()) {
        prop_assert_eq!(clamp(min, x, max), min.max(x.min(max)));
    }

    #[test]
    fn clamp_on_ordered_range_is_std_clamp(a in coord(), b in coord(), x in coord()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        prop_assert_eq!(clamp(min, x, max), x.clamp(min, max));
    }

    #[test]
    fn clamp_on_inverted_range_is_min(min in 1i32..5_000, x in coord(), gap in 1i32..5_000) {
        let max = min - gap;
        prop_assert_eq!(clamp(min, x, max), min);
    }

    #[test]
    fn moves_stay_inside_viewport(
        vw in 200i32..2_000,
        vh in 200i32..2_000,
        w in 1i32..200,
        h in 1i32..200,
        start_x in 0i32..200,
        start_y in 0i32..200,
        press_dx in 0i32..200,
        press_dy in 0i32..200,
        moves in prop::collection::vec((coord(), coord()), 1..40),
    ) {
        let viewport = Size::new(vw, vh);
        let mut panel = PanelState::new(Point::new(start_x, start_y), Size::new(w, h)).floating();
        let mut controller = DragController::new();
        controller.press(
            PressTarget::Handle,
            Point::new(start_x + press_dx, start_y + press_dy),
            &mut panel,
        );
        for (x, y) in moves {
            let dispatch = controller.pointer_move(Point::new(x, y), viewport, &mut panel);
            let moved = matches!(dispatch.outcome, DragOutcome::Moved { .. });
            prop_assert!(moved);
            prop_assert!((0..=vw - w).contains(&panel.origin.x));
            prop_assert!((0..=vh - h).contains(&panel.origin.y));
        }
    }

    #[test]
    fn resize_is_idempotent(
        x in coord(),
        y in coord(),
        w in 0i32..3_000,
        h in 0i32..3_000,
        vw in 0i32..3_000,
        vh in 0i32..3_000,
    ) {
        let viewport = Size::new(vw, vh);
        let mut panel = PanelState::new(Point::new(x, y), Size::new(w, h)).floating();
        let controller = DragController::new();
        controller.viewport_resized(viewport, &mut panel);
        let expected =
            ViewportBounds::derive(viewport, Size::new(w, h)).clamp_origin(Point::new(x, y));
        prop_assert_eq!(panel.origin, expected);
        let again = controller.viewport_resized(viewport, &mut panel);
        prop_assert_eq!(again.outcome, DragOutcome::Unchanged);
    }
}
