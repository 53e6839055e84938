//! Per-gesture horizontal drag tracking.
//!
//! One [`DragTracker`] lives for the lifetime of the swipeable surface but
//! its gesture fields only carry meaning between `start` and `end`/`cancel`.
//! A second pointer going down while a gesture is active is ignored.

use log::trace;

use crate::gesture_constants::{BOUNDARY_RESISTANCE, DRAG_SLOP, MAX_DRAG_FRACTION};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TrackerPhase {
    Idle,
    Tracking,
}

/// Converts raw horizontal pointer deltas into bounded, resistance-adjusted
/// visual offsets.
#[derive(Debug)]
pub struct DragTracker {
    phase: TrackerPhase,
    start_x: f32,
    current_x: f32,
    last_offset: f32,
    slop_passed: bool,
    wants_acceleration: bool,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DragTracker {
    pub fn new() -> Self {
        Self {
            phase: TrackerPhase::Idle,
            start_x: 0.0,
            current_x: 0.0,
            last_offset: 0.0,
            slop_passed: false,
            wants_acceleration: false,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.phase == TrackerPhase::Tracking
    }

    /// Whether the drag has moved past the slop and is visually under way.
    pub fn drag_started(&self) -> bool {
        self.slop_passed
    }

    /// Hint to the presentation layer that hardware-accelerated rendering
    /// should be enabled for the duration of the gesture (the `will-change`
    /// analogue). Raised by `start`, cleared by `end`/`cancel`.
    pub fn wants_acceleration(&self) -> bool {
        self.wants_acceleration
    }

    /// Begins tracking at `client_x`. Ignored while a gesture is active.
    pub fn start(&mut self, client_x: f32) {
        if self.phase == TrackerPhase::Tracking {
            trace!("drag start ignored, gesture already active");
            return;
        }
        self.phase = TrackerPhase::Tracking;
        self.start_x = client_x;
        self.current_x = client_x;
        self.last_offset = 0.0;
        self.slop_passed = false;
        self.wants_acceleration = true;
    }

    /// Feeds the latest pointer position and returns the visual offset.
    ///
    /// At a boundary with no neighbor in the drag direction the delta is
    /// damped by [`BOUNDARY_RESISTANCE`]; otherwise it is clamped to
    /// [`MAX_DRAG_FRACTION`] of the viewport. A call outside an active
    /// gesture is a no-op returning the last offset.
    pub fn move_to(
        &mut self,
        client_x: f32,
        viewport_width: f32,
        at_left_boundary: bool,
        at_right_boundary: bool,
    ) -> f32 {
        if self.phase != TrackerPhase::Tracking {
            return self.last_offset;
        }

        self.current_x = client_x;
        let delta = self.current_x - self.start_x;

        if !self.slop_passed && delta.abs() > DRAG_SLOP {
            self.slop_passed = true;
        }

        let at_boundary =
            (at_left_boundary && delta > 0.0) || (at_right_boundary && delta < 0.0);
        let offset = if at_boundary {
            delta * BOUNDARY_RESISTANCE
        } else {
            let max_drag = viewport_width * MAX_DRAG_FRACTION;
            delta.clamp(-max_drag, max_drag)
        };

        self.last_offset = offset;
        offset
    }

    /// Ends the gesture and returns the raw committed delta for the swipe
    /// resolver. Returns `None` if no gesture was active.
    pub fn end(&mut self) -> Option<f32> {
        if self.phase != TrackerPhase::Tracking {
            return None;
        }
        let committed_delta = self.current_x - self.start_x;
        self.reset();
        Some(committed_delta)
    }

    /// Forcibly resets to idle without invoking resolver logic. Used when
    /// the surface unmounts or a higher-priority interaction preempts the
    /// gesture.
    pub fn cancel(&mut self) {
        if self.phase == TrackerPhase::Tracking {
            trace!("drag cancelled");
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.phase = TrackerPhase::Idle;
        self.start_x = 0.0;
        self.current_x = 0.0;
        self.last_offset = 0.0;
        self.slop_passed = false;
        self.wants_acceleration = false;
    }
}
