//! The pager: one entry point for every navigation trigger.
//!
//! Pointer events feed the drag tracker; releases go through the swipe
//! resolver; header-link and logo clicks arrive as index/path adapters. All
//! of them delegate to the orchestrator's guarded `commit`, so the
//! threshold and duration math exists exactly once.

use std::rc::Rc;

use log::debug;

use pageflow_animation::TransitionSpec;
use pageflow_core::{RuntimeHandle, State};
use pageflow_foundation::{
    resolve_swipe, DragTracker, PointerEvent, PointerEventKind, SwipeDirection,
};

use crate::route_table::RouteTable;
use crate::transition::{Navigator, TransitionOrchestrator};

/// Swipeable page controller over a fixed route table.
pub struct Pager {
    routes: Rc<RouteTable>,
    tracker: DragTracker,
    orchestrator: TransitionOrchestrator,
    current_index: usize,
    viewport_width: f32,
}

impl Pager {
    pub fn new(
        routes: Rc<RouteTable>,
        runtime: RuntimeHandle,
        navigator: Rc<dyn Navigator>,
        viewport_width: f32,
    ) -> Self {
        let orchestrator = TransitionOrchestrator::new(routes.clone(), navigator, runtime);
        Self {
            routes,
            tracker: DragTracker::new(),
            orchestrator,
            current_index: 0,
            viewport_width,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_path(&self) -> &str {
        self.routes
            .path(self.current_index)
            .expect("current index stays within the route table")
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Visual offset in pixels for live drag feedback.
    pub fn offset(&self) -> State<f32> {
        self.orchestrator.visual_offset()
    }

    /// Whether a transition is currently in flight.
    pub fn in_progress(&self) -> State<bool> {
        self.orchestrator.in_progress()
    }

    pub fn direction(&self) -> State<Option<SwipeDirection>> {
        self.orchestrator.direction()
    }

    /// Timing parameters for the transition-bearing element.
    pub fn transition_spec(&self) -> State<Option<TransitionSpec>> {
        self.orchestrator.active_spec()
    }

    /// Hardware-acceleration hint for the presentation layer.
    pub fn wants_acceleration(&self) -> bool {
        self.tracker.wants_acceleration()
    }

    pub fn is_settling(&self) -> bool {
        self.orchestrator.settle_in_progress()
    }

    /// The viewport width used for threshold and clamp math. Hosts update
    /// it on resize.
    pub fn set_viewport_width(&mut self, viewport_width: f32) {
        self.viewport_width = viewport_width;
    }

    /// Feeds a raw pointer event into the gesture machinery. Returns `true`
    /// when the event was handled.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                if event.is_consumed() {
                    return false;
                }
                if !self.orchestrator.begin_drag() {
                    return false;
                }
                self.tracker.start(event.position.x);
                // Do NOT consume Down, let click handlers see it.
                true
            }
            PointerEventKind::Move => {
                if !self.tracker.is_tracking() {
                    return false;
                }
                let at_left = self.routes.at_left_boundary(self.current_index);
                let at_right = self.routes.at_right_boundary(self.current_index);
                let offset =
                    self.tracker
                        .move_to(event.position.x, self.viewport_width, at_left, at_right);
                self.orchestrator.set_drag_offset(offset);
                if self.tracker.drag_started() {
                    event.consume();
                }
                true
            }
            PointerEventKind::Up => {
                if !self.tracker.is_tracking() {
                    return false;
                }
                self.release();
                true
            }
            PointerEventKind::Cancel => {
                if !self.tracker.is_tracking() {
                    return false;
                }
                self.tracker.cancel();
                self.orchestrator.settle_back();
                true
            }
        }
    }

    fn release(&mut self) {
        let Some(committed_delta) = self.tracker.end() else {
            return;
        };

        let Some(direction) = resolve_swipe(committed_delta, self.viewport_width) else {
            self.orchestrator.settle_back();
            return;
        };

        // Resistance already discourages over-threshold drags at the ends
        // of the table, but a missing neighbor must still be a no-op.
        let Some(target) = self.routes.neighbor(self.current_index, direction) else {
            debug!("swipe {direction:?} at boundary, settling back");
            self.orchestrator.settle_back();
            return;
        };

        if self.orchestrator.commit(self.current_index, target, direction) {
            self.current_index = target;
        } else {
            self.orchestrator.settle_back();
        }
    }

    /// Header-link adapter: navigate to a route by path.
    pub fn navigate_to_path(&mut self, path: &str) -> bool {
        let Some(target) = self.routes.index_of(path) else {
            debug!("unknown path {path:?}, ignoring navigation");
            return false;
        };
        self.navigate_to_index(target)
    }

    /// Logo adapter: navigate back to the first route.
    pub fn navigate_home(&mut self) -> bool {
        self.navigate_to_index(0)
    }

    /// Click adapter shared by links and the logo. Direction is derived
    /// from table order: moving toward the front is `Right`, toward the
    /// back is `Left`.
    pub fn navigate_to_index(&mut self, target_index: usize) -> bool {
        let direction = if target_index < self.current_index {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        };
        if self
            .orchestrator
            .commit(self.current_index, target_index, direction)
        {
            self.current_index = target_index;
            true
        } else {
            false
        }
    }
}
