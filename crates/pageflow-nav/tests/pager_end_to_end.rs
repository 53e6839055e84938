//! End-to-end pager scenarios driven on a virtual clock.

use std::cell::RefCell;
use std::rc::Rc;

use pageflow_nav::{Navigator, Pager, RouteTable};
use pageflow_testing::{GestureScript, TestRuntime};

const VIEWPORT: f32 = 1000.0;

struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            visited: RefCell::new(Vec::new()),
        })
    }

    fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}

fn fixture() -> (TestRuntime, Rc<RecordingNavigator>, Pager) {
    let runtime = TestRuntime::new();
    let navigator = RecordingNavigator::new();
    let routes = Rc::new(RouteTable::new(["/", "/about", "/project", "/contact"]));
    let pager = Pager::new(routes, runtime.handle(), navigator.clone(), VIEWPORT);
    (runtime, navigator, pager)
}

#[test]
fn drag_left_from_about_lands_on_project() {
    let (runtime, navigator, mut pager) = fixture();

    // Get to /about first and let that transition finish.
    assert!(pager.navigate_to_path("/about"));
    runtime.advance_millis(250);
    assert!(!pager.in_progress().get());

    // Drag left by 250px: within the 300px clamp, past the 150px threshold.
    let down_and_move = GestureScript::new().down(600.0).move_to(350.0);
    down_and_move.drive(&mut pager);
    assert_eq!(pager.offset().get(), -250.0);

    GestureScript::new().up(350.0).drive(&mut pager);
    assert_eq!(pager.current_path(), "/project");
    assert!(pager.in_progress().get());
    assert_eq!(
        navigator.visited(),
        vec!["/about".to_string(), "/project".to_string()]
    );
    assert_eq!(pager.transition_spec().get().unwrap().duration_millis, 250);
    assert_eq!(pager.offset().get(), 0.0);

    runtime.advance_millis(249);
    assert!(pager.in_progress().get());
    runtime.advance_millis(1);
    assert!(!pager.in_progress().get());
    assert_eq!(pager.direction().get(), None);
    assert_eq!(pager.transition_spec().get(), None);
}

#[test]
fn under_threshold_release_settles_back_without_navigating() {
    let (runtime, navigator, mut pager) = fixture();

    GestureScript::swipe(500.0, 400.0, 4).drive(&mut pager);
    assert!(navigator.visited().is_empty());
    assert!(!pager.in_progress().get());
    assert!(pager.is_settling());

    runtime.advance_frames(12);
    assert_eq!(pager.offset().get(), 0.0);
    assert!(!pager.is_settling());
}

#[test]
fn swipe_right_at_first_route_is_a_noop() {
    let (runtime, navigator, mut pager) = fixture();

    // Past the threshold, but index 0 has no previous neighbor.
    GestureScript::swipe(100.0, 400.0, 4).drive(&mut pager);
    assert!(navigator.visited().is_empty());
    assert_eq!(pager.current_index(), 0);

    runtime.advance_frames(12);
    assert_eq!(pager.offset().get(), 0.0);
}

#[test]
fn gesture_during_transition_is_ignored() {
    let (runtime, navigator, mut pager) = fixture();

    assert!(pager.navigate_to_path("/about"));
    assert!(pager.in_progress().get());

    // A full over-threshold swipe arriving mid-transition must do nothing.
    GestureScript::swipe(800.0, 300.0, 6).drive(&mut pager);
    assert_eq!(pager.offset().get(), 0.0);
    assert_eq!(navigator.visited().len(), 1);

    runtime.advance_millis(250);
    assert!(!pager.in_progress().get());
    assert_eq!(pager.current_path(), "/about");
}

#[test]
fn click_during_transition_is_dropped() {
    let (runtime, navigator, mut pager) = fixture();

    assert!(pager.navigate_to_path("/about"));
    assert!(!pager.navigate_to_path("/contact"));
    assert_eq!(navigator.visited().len(), 1);

    runtime.advance_millis(250);
    assert!(pager.navigate_to_path("/contact"));
    assert_eq!(navigator.visited().len(), 2);
}

#[test]
fn cancel_abandons_the_gesture_without_navigating() {
    let (runtime, navigator, mut pager) = fixture();

    GestureScript::new()
        .down(600.0)
        .move_to(300.0)
        .cancel()
        .drive(&mut pager);

    assert!(navigator.visited().is_empty());
    assert_eq!(pager.current_index(), 0);

    runtime.advance_frames(12);
    assert_eq!(pager.offset().get(), 0.0);
}

#[test]
fn logo_click_from_contact_is_a_long_jump_home() {
    let (runtime, _navigator, mut pager) = fixture();

    assert!(pager.navigate_to_path("/contact"));
    runtime.advance_millis(350);

    assert!(pager.navigate_home());
    assert_eq!(pager.current_path(), "/");
    // Three hops back: 200 + 3 * 50.
    assert_eq!(pager.transition_spec().get().unwrap().duration_millis, 350);

    runtime.advance_millis(350);
    assert!(!pager.in_progress().get());
}

#[test]
fn unknown_path_is_rejected() {
    let (_runtime, navigator, mut pager) = fixture();

    assert!(!pager.navigate_to_path("/missing"));
    assert!(navigator.visited().is_empty());
}

#[test]
fn move_events_are_consumed_once_the_drag_begins() {
    let (_runtime, _navigator, mut pager) = fixture();

    let script = GestureScript::new().down(500.0).move_to(497.0).move_to(400.0);
    let events: Vec<_> = script.events().to_vec();
    for event in &events {
        pager.on_pointer_event(event);
    }

    // Within the slop the move stays unconsumed; past it, clicks must not
    // also fire, so the move is claimed.
    assert!(!events[1].is_consumed());
    assert!(events[2].is_consumed());
}
