//! Transition orchestration: the `Idle -> Committing -> Idle` machine.
//!
//! The orchestrator is the sole writer of the shared transition state. Every
//! navigation path (swipe release, header link, logo) ends up in
//! [`TransitionOrchestrator::commit`], which enforces the
//! at-most-one-in-flight guarantee and schedules the cleanup deadline.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};

use pageflow_animation::TransitionSpec;
use pageflow_core::{MutableState, RuntimeHandle, State, TimerQueue, TimerRegistration};
use pageflow_foundation::SwipeDirection;

use crate::route_table::RouteTable;
use crate::settle::SettleAnimation;

/// Router collaborator. Called exactly once per committed transition; this
/// is the only point that mutates navigation/history state.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Sequences the visual state mutations, the navigation commit, and the
/// timer-driven cleanup for page transitions.
pub struct TransitionOrchestrator {
    routes: Rc<RouteTable>,
    navigator: Rc<dyn Navigator>,
    timers: TimerQueue,
    in_progress: MutableState<bool>,
    direction: MutableState<Option<SwipeDirection>>,
    visual_offset: MutableState<f32>,
    active_spec: MutableState<Option<TransitionSpec>>,
    cleanup: RefCell<Option<TimerRegistration>>,
    settle: SettleAnimation,
}

impl TransitionOrchestrator {
    pub fn new(routes: Rc<RouteTable>, navigator: Rc<dyn Navigator>, runtime: RuntimeHandle) -> Self {
        let visual_offset = MutableState::new(0.0f32);
        let settle = SettleAnimation::new(runtime.frame_clock(), visual_offset.clone());
        Self {
            routes,
            navigator,
            timers: TimerQueue::new(runtime),
            in_progress: MutableState::new(false),
            direction: MutableState::new(None),
            visual_offset,
            active_spec: MutableState::new(None),
            cleanup: RefCell::new(None),
            settle,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress.get()
    }

    /// Observable "transition in progress" flag for disabling conflicting
    /// interactions in the presentation layer.
    pub fn in_progress(&self) -> State<bool> {
        self.in_progress.as_state()
    }

    pub fn direction(&self) -> State<Option<SwipeDirection>> {
        self.direction.as_state()
    }

    /// Observable visual offset in pixels for live drag feedback.
    pub fn visual_offset(&self) -> State<f32> {
        self.visual_offset.as_state()
    }

    /// Timing parameters of the transition currently in flight, if any.
    pub fn active_spec(&self) -> State<Option<TransitionSpec>> {
        self.active_spec.as_state()
    }

    /// Gate for gesture starts. Returns `false` while a transition is in
    /// flight; otherwise cancels any running snap-back so the new gesture
    /// owns the offset.
    pub fn begin_drag(&self) -> bool {
        if self.in_progress.get() {
            debug!("transition in flight, ignoring gesture start");
            return false;
        }
        self.settle.cancel();
        true
    }

    /// Live drag feedback from the tracker. Dropped while a transition is
    /// in flight.
    pub fn set_drag_offset(&self, offset: f32) {
        if self.in_progress.get() {
            return;
        }
        self.visual_offset.set(offset);
    }

    /// Eases the offset back to zero after a release that did not commit.
    pub fn settle_back(&self) {
        if self.in_progress.get() {
            return;
        }
        self.settle.start();
    }

    pub(crate) fn settle_in_progress(&self) -> bool {
        self.settle.is_running()
    }

    /// Whether a committed transition still has its cleanup deadline ahead.
    /// Once committed, a transition always runs to this cleanup; there is
    /// no cancel path.
    pub fn cleanup_pending(&self) -> bool {
        self.cleanup
            .borrow()
            .as_ref()
            .is_some_and(TimerRegistration::is_pending)
    }

    /// Commits a navigation to `target_index`.
    ///
    /// Rejected (returning `false`) while another transition is in flight,
    /// when the target equals the current index, and for out-of-table
    /// targets. On success the navigator has been invoked and the cleanup
    /// deadline is scheduled `duration` milliseconds out.
    pub fn commit(
        &self,
        current_index: usize,
        target_index: usize,
        direction: SwipeDirection,
    ) -> bool {
        if self.in_progress.get() {
            debug!("transition in flight, dropping commit to index {target_index}");
            return false;
        }
        if target_index == current_index {
            return false;
        }
        let Some(path) = self.routes.path(target_index) else {
            debug!("commit target {target_index} outside route table, dropping");
            return false;
        };

        let distance = current_index.abs_diff(target_index) as u32;
        let spec = TransitionSpec::for_distance(distance);

        self.settle.cancel();
        self.in_progress.set(true);
        self.direction.set(Some(direction));
        self.active_spec.set(Some(spec));
        self.visual_offset.set(0.0);

        info!(
            "navigate {current_index} -> {target_index} ({path}), {}ms",
            spec.duration_millis
        );
        self.navigator.navigate(path);

        let in_progress = self.in_progress.clone();
        let direction_cell = self.direction.clone();
        let active_spec = self.active_spec.clone();
        let registration = self.timers.schedule_millis(spec.duration_millis, move |_| {
            in_progress.set(false);
            direction_cell.set(None);
            active_spec.set(None);
        });
        *self.cleanup.borrow_mut() = Some(registration);

        true
    }
}
