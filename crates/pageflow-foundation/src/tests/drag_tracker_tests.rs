use crate::drag_tracker::DragTracker;
use crate::gesture_constants::{DRAG_SLOP, MAX_DRAG_FRACTION};

const VIEWPORT: f32 = 1000.0;

#[test]
fn plain_drag_returns_raw_delta_under_clamp() {
    let mut tracker = DragTracker::new();
    tracker.start(100.0);

    let offset = tracker.move_to(250.0, VIEWPORT, false, false);
    assert_eq!(offset, 150.0);
}

#[test]
fn drag_is_clamped_to_viewport_fraction() {
    let mut tracker = DragTracker::new();
    tracker.start(0.0);

    let max_drag = VIEWPORT * MAX_DRAG_FRACTION;
    assert_eq!(tracker.move_to(500.0, VIEWPORT, false, false), max_drag);
    assert_eq!(tracker.move_to(-900.0, VIEWPORT, false, false), -max_drag);
}

#[test]
fn boundary_drag_applies_resistance() {
    let mut tracker = DragTracker::new();
    tracker.start(100.0);

    // Dragging left at the left boundary is a plain drag; resistance only
    // kicks in when pulling away from the table.
    let offset = tracker.move_to(50.0, VIEWPORT, true, false);
    assert_eq!(offset, -50.0);

    // Dragging right at the left boundary (delta > 0) has no previous
    // route, so the delta is damped.
    let offset = tracker.move_to(150.0, VIEWPORT, true, false);
    assert_eq!(offset, 50.0 * 0.3);
}

#[test]
fn right_boundary_resists_leftward_drag() {
    let mut tracker = DragTracker::new();
    tracker.start(100.0);

    let offset = tracker.move_to(50.0, VIEWPORT, false, true);
    assert_eq!(offset, -50.0 * 0.3);
}

#[test]
fn end_returns_raw_committed_delta() {
    let mut tracker = DragTracker::new();
    tracker.start(100.0);
    tracker.move_to(500.0, VIEWPORT, false, false); // clamped visually...

    // ...but the committed delta is the raw pointer travel.
    assert_eq!(tracker.end(), Some(400.0));
    assert!(!tracker.is_tracking());
}

#[test]
fn move_and_end_outside_gesture_are_noops() {
    let mut tracker = DragTracker::new();

    assert_eq!(tracker.move_to(250.0, VIEWPORT, false, false), 0.0);
    assert_eq!(tracker.end(), None);
}

#[test]
fn second_start_is_ignored_while_tracking() {
    let mut tracker = DragTracker::new();
    tracker.start(100.0);
    tracker.move_to(200.0, VIEWPORT, false, false);

    tracker.start(900.0);
    assert_eq!(tracker.end(), Some(100.0));
}

#[test]
fn cancel_resets_without_committing() {
    let mut tracker = DragTracker::new();
    tracker.start(100.0);
    tracker.move_to(400.0, VIEWPORT, false, false);

    tracker.cancel();
    assert!(!tracker.is_tracking());
    assert_eq!(tracker.end(), None);
    assert_eq!(tracker.move_to(777.0, VIEWPORT, false, false), 0.0);
}

#[test]
fn acceleration_hint_spans_the_gesture() {
    let mut tracker = DragTracker::new();
    assert!(!tracker.wants_acceleration());

    tracker.start(0.0);
    assert!(tracker.wants_acceleration());

    tracker.end();
    assert!(!tracker.wants_acceleration());
}

#[test]
fn slop_gates_drag_started_but_not_offsets() {
    let mut tracker = DragTracker::new();
    tracker.start(100.0);

    let offset = tracker.move_to(100.0 + DRAG_SLOP / 2.0, VIEWPORT, false, false);
    assert_eq!(offset, DRAG_SLOP / 2.0);
    assert!(!tracker.drag_started());

    tracker.move_to(100.0 + DRAG_SLOP * 2.0, VIEWPORT, false, false);
    assert!(tracker.drag_started());

    // Once passed, the slop stays passed even if the pointer returns.
    tracker.move_to(101.0, VIEWPORT, false, false);
    assert!(tracker.drag_started());
}
